//! Per-kind table layouts.
//!
//! Every [`EntityKind`] is stored in one table whose shape is fixed at compile
//! time. A [`TableLayout`] records that shape: the columns and the role each
//! plays when a physical row is decoded, the primary key, the identity
//! columns ids map onto, how decoded rows fold into elements, and which
//! columns carry a secondary index.
//!
//! Vertices and edges use an entity-attribute-value layout: each property is
//! a separate physical row whose clustering key ends in `property_key`, so
//! one element spans many rows. Schema elements and index entries store one
//! row per element.

use widegraph_core::{ColumnKey, CoreError, CoreResult, EntityKind, Entry, IdLayout};

/// Well-known table names.
pub mod names {
    /// Table for vertex label definitions.
    pub const VERTEX_LABELS: &str = "vertex_labels";

    /// Table for edge label definitions.
    pub const EDGE_LABELS: &str = "edge_labels";

    /// Table for property key definitions.
    pub const PROPERTY_KEYS: &str = "property_keys";

    /// Table for index label definitions.
    pub const INDEX_LABELS: &str = "index_labels";

    /// Table for vertices, one row per property.
    pub const VERTICES: &str = "vertices";

    /// Table for edges, one row per property.
    pub const EDGES: &str = "edges";

    /// Table for equality index entries.
    pub const SECONDARY_INDEXES: &str = "secondary_indexes";

    /// Table for range index entries.
    pub const SEARCH_INDEXES: &str = "search_indexes";
}

/// How a column is read when a physical row is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    /// Copied onto the entry as-is.
    Scalar,
    /// Holds a property key; combined with `value` into one property.
    CellKey {
        /// The column holding the paired property value.
        value: ColumnKey,
    },
    /// Holds a property value; only read through its cell-key column.
    CellValue,
}

/// One column of a table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// The column.
    pub key: ColumnKey,
    /// Its decode role.
    pub role: ColumnRole,
}

impl ColumnSpec {
    const fn scalar(key: ColumnKey) -> Self {
        Self { key, role: ColumnRole::Scalar }
    }

    const fn cell(key: ColumnKey, value: ColumnKey) -> Self {
        Self { key, role: ColumnRole::CellKey { value } }
    }

    const fn value(key: ColumnKey) -> Self {
        Self { key, role: ColumnRole::CellValue }
    }
}

/// How decoded rows become elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// One row is one element.
    Identity,
    /// Consecutive rows with equal scalar columns are one element.
    ByIdentity,
}

/// The static shape of one entity kind's table.
#[derive(Debug, PartialEq, Eq)]
pub struct TableLayout {
    /// The entity kind stored in this table.
    pub kind: EntityKind,
    /// Base table name, without any configured prefix.
    pub table: &'static str,
    /// Columns in definition order.
    pub columns: &'static [ColumnSpec],
    /// Partition key columns.
    pub partition_keys: &'static [ColumnKey],
    /// Clustering key columns, in clustering order.
    pub clustering_keys: &'static [ColumnKey],
    /// Columns an element id maps onto, in id-part order.
    pub identity: &'static [ColumnKey],
    /// How decoded rows fold into elements.
    pub merge: MergePolicy,
    /// Columns carrying a secondary index.
    pub indexes: &'static [ColumnKey],
}

use ColumnKey as C;

static VERTEX_LABEL: TableLayout = TableLayout {
    kind: EntityKind::VertexLabel,
    table: names::VERTEX_LABELS,
    columns: &[
        ColumnSpec::scalar(C::Name),
        ColumnSpec::scalar(C::IdStrategy),
        ColumnSpec::scalar(C::PrimaryKeys),
        ColumnSpec::scalar(C::IndexNames),
        ColumnSpec::scalar(C::Properties),
    ],
    partition_keys: &[C::Name],
    clustering_keys: &[],
    identity: &[C::Name],
    merge: MergePolicy::Identity,
    indexes: &[],
};

static EDGE_LABEL: TableLayout = TableLayout {
    kind: EntityKind::EdgeLabel,
    table: names::EDGE_LABELS,
    columns: &[
        ColumnSpec::scalar(C::Name),
        ColumnSpec::scalar(C::Frequency),
        ColumnSpec::scalar(C::Links),
        ColumnSpec::scalar(C::SortKeys),
        ColumnSpec::scalar(C::IndexNames),
        ColumnSpec::scalar(C::Properties),
    ],
    partition_keys: &[C::Name],
    clustering_keys: &[],
    identity: &[C::Name],
    merge: MergePolicy::Identity,
    indexes: &[],
};

static PROPERTY_KEY: TableLayout = TableLayout {
    kind: EntityKind::PropertyKey,
    table: names::PROPERTY_KEYS,
    columns: &[
        ColumnSpec::scalar(C::Name),
        ColumnSpec::scalar(C::DataType),
        ColumnSpec::scalar(C::Cardinality),
        ColumnSpec::scalar(C::Properties),
    ],
    partition_keys: &[C::Name],
    clustering_keys: &[],
    identity: &[C::Name],
    merge: MergePolicy::Identity,
    indexes: &[],
};

static INDEX_LABEL: TableLayout = TableLayout {
    kind: EntityKind::IndexLabel,
    table: names::INDEX_LABELS,
    columns: &[
        ColumnSpec::scalar(C::Name),
        ColumnSpec::scalar(C::BaseType),
        ColumnSpec::scalar(C::BaseValue),
        ColumnSpec::scalar(C::IndexType),
        ColumnSpec::scalar(C::Fields),
    ],
    partition_keys: &[C::Name],
    clustering_keys: &[],
    identity: &[C::Name],
    merge: MergePolicy::Identity,
    indexes: &[C::BaseValue],
};

static VERTEX: TableLayout = TableLayout {
    kind: EntityKind::Vertex,
    table: names::VERTICES,
    columns: &[
        ColumnSpec::scalar(C::Label),
        ColumnSpec::scalar(C::PrimaryValues),
        ColumnSpec::cell(C::PropertyKey, C::PropertyValue),
        ColumnSpec::value(C::PropertyValue),
    ],
    partition_keys: &[C::Label],
    clustering_keys: &[C::PrimaryValues, C::PropertyKey],
    identity: &[C::Label, C::PrimaryValues],
    merge: MergePolicy::ByIdentity,
    indexes: &[],
};

static EDGE: TableLayout = TableLayout {
    kind: EntityKind::Edge,
    table: names::EDGES,
    columns: &[
        ColumnSpec::scalar(C::SourceVertex),
        ColumnSpec::scalar(C::Direction),
        ColumnSpec::scalar(C::Label),
        ColumnSpec::scalar(C::SortValues),
        ColumnSpec::scalar(C::TargetVertex),
        ColumnSpec::cell(C::PropertyKey, C::PropertyValue),
        ColumnSpec::value(C::PropertyValue),
    ],
    partition_keys: &[C::SourceVertex],
    clustering_keys: &[C::Direction, C::Label, C::SortValues, C::TargetVertex, C::PropertyKey],
    identity: &[C::SourceVertex, C::Direction, C::Label, C::SortValues, C::TargetVertex],
    merge: MergePolicy::ByIdentity,
    indexes: &[],
};

static SECONDARY_INDEX: TableLayout = TableLayout {
    kind: EntityKind::SecondaryIndex,
    table: names::SECONDARY_INDEXES,
    columns: &[
        ColumnSpec::scalar(C::PropertyValues),
        ColumnSpec::scalar(C::IndexLabelName),
        ColumnSpec::scalar(C::ElementIds),
    ],
    partition_keys: &[C::PropertyValues],
    clustering_keys: &[C::IndexLabelName, C::ElementIds],
    identity: &[C::PropertyValues, C::IndexLabelName],
    merge: MergePolicy::Identity,
    indexes: &[],
};

static SEARCH_INDEX: TableLayout = TableLayout {
    kind: EntityKind::SearchIndex,
    table: names::SEARCH_INDEXES,
    columns: &[
        ColumnSpec::scalar(C::IndexLabelName),
        ColumnSpec::scalar(C::PropertyValues),
        ColumnSpec::scalar(C::ElementIds),
    ],
    partition_keys: &[C::IndexLabelName],
    clustering_keys: &[C::PropertyValues, C::ElementIds],
    identity: &[C::IndexLabelName, C::PropertyValues],
    merge: MergePolicy::Identity,
    indexes: &[],
};

impl TableLayout {
    /// The layout of an entity kind.
    #[must_use]
    pub fn of(kind: EntityKind) -> &'static Self {
        match kind {
            EntityKind::VertexLabel => &VERTEX_LABEL,
            EntityKind::EdgeLabel => &EDGE_LABEL,
            EntityKind::PropertyKey => &PROPERTY_KEY,
            EntityKind::IndexLabel => &INDEX_LABEL,
            EntityKind::Vertex => &VERTEX,
            EntityKind::Edge => &EDGE,
            EntityKind::SecondaryIndex => &SECONDARY_INDEX,
            EntityKind::SearchIndex => &SEARCH_INDEX,
        }
    }

    /// Primary key columns: partition keys followed by clustering keys.
    pub fn primary_key(&self) -> impl Iterator<Item = ColumnKey> + '_ {
        self.partition_keys.iter().chain(self.clustering_keys).copied()
    }

    /// The id layout for this table's identity columns.
    #[must_use]
    pub fn id_layout(&self) -> IdLayout {
        IdLayout::new(self.identity.to_vec())
    }

    /// Look up a column.
    #[must_use]
    pub fn column(&self, key: ColumnKey) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Classify a physical column name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownColumn`] if the name is not a column of
    /// this table.
    pub fn classify(&self, name: &str) -> CoreResult<&ColumnSpec> {
        let key: ColumnKey = name.parse()?;
        self.column(key).ok_or_else(|| CoreError::UnknownColumn(format!("{}.{name}", self.table)))
    }

    /// Fold decoded entries according to the merge policy.
    #[must_use]
    pub fn merge_entries(&self, entries: Vec<Entry>) -> Vec<Entry> {
        match self.merge {
            MergePolicy::Identity => entries,
            MergePolicy::ByIdentity => {
                let mut merged: Vec<Entry> = Vec::with_capacity(entries.len());
                for entry in entries {
                    match merged.last_mut() {
                        Some(last) if last.same_identity(&entry) => last.cells.extend(entry.cells),
                        _ => merged.push(entry),
                    }
                }
                merged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use widegraph_core::Property;

    use super::*;

    fn vertex_entry(primary: &str, key: &str, value: &str) -> Entry {
        let mut entry = Entry::new(EntityKind::Vertex);
        entry.set_column(C::Label, "person");
        entry.set_column(C::PrimaryValues, primary);
        entry.push_cell(Property::new(C::PropertyKey, key, C::PropertyValue, value));
        entry
    }

    #[test]
    fn every_kind_has_a_consistent_layout() {
        for kind in EntityKind::ALL {
            let layout = TableLayout::of(kind);
            assert_eq!(layout.kind, kind);
            for key in layout.primary_key().chain(layout.identity.iter().copied()) {
                assert!(layout.column(key).is_some(), "{kind}: {key} is not a column");
            }
            for spec in layout.columns {
                if let ColumnRole::CellKey { value } = spec.role {
                    assert_eq!(layout.column(value).map(|c| c.role), Some(ColumnRole::CellValue));
                }
            }
        }
    }

    #[test]
    fn classify_is_case_insensitive() {
        let layout = TableLayout::of(EntityKind::Vertex);
        assert_eq!(layout.classify("LABEL").unwrap().role, ColumnRole::Scalar);
        assert!(matches!(
            layout.classify("property_key").unwrap().role,
            ColumnRole::CellKey { value: C::PropertyValue }
        ));
        assert!(matches!(layout.classify("name"), Err(CoreError::UnknownColumn(_))));
        assert!(matches!(layout.classify("colour"), Err(CoreError::UnknownColumn(_))));
    }

    #[test]
    fn merge_folds_consecutive_rows_only() {
        let layout = TableLayout::of(EntityKind::Vertex);
        let merged = layout.merge_entries(vec![
            vertex_entry("marko", "age", "29"),
            vertex_entry("marko", "city", "rome"),
            vertex_entry("josh", "age", "32"),
            vertex_entry("marko", "lang", "en"),
        ]);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].cells.len(), 2);
        assert_eq!(merged[0].property("city"), Some("rome"));
        assert_eq!(merged[2].property("lang"), Some("en"));
    }

    #[test]
    fn identity_merge_keeps_rows() {
        let layout = TableLayout::of(EntityKind::SecondaryIndex);
        let mut entry = Entry::new(EntityKind::SecondaryIndex);
        entry.set_column(C::IndexLabelName, "by_name");
        let merged = layout.merge_entries(vec![entry.clone(), entry]);
        assert_eq!(merged.len(), 2);
    }
}
