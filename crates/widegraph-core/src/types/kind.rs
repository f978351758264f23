//! Entity kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of graph element a table stores and a query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Vertex label definitions.
    VertexLabel,
    /// Edge label definitions.
    EdgeLabel,
    /// Property key definitions.
    PropertyKey,
    /// Index label definitions.
    IndexLabel,
    /// Graph vertices.
    Vertex,
    /// Graph edges.
    Edge,
    /// Equality index entries.
    SecondaryIndex,
    /// Range index entries.
    SearchIndex,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::VertexLabel,
        Self::EdgeLabel,
        Self::PropertyKey,
        Self::IndexLabel,
        Self::Vertex,
        Self::Edge,
        Self::SecondaryIndex,
        Self::SearchIndex,
    ];

    /// Returns `true` for schema element kinds.
    #[must_use]
    pub const fn is_schema(self) -> bool {
        matches!(self, Self::VertexLabel | Self::EdgeLabel | Self::PropertyKey | Self::IndexLabel)
    }

    /// Returns `true` for index entry kinds.
    #[must_use]
    pub const fn is_index(self) -> bool {
        matches!(self, Self::SecondaryIndex | Self::SearchIndex)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VertexLabel => "vertex_label",
            Self::EdgeLabel => "edge_label",
            Self::PropertyKey => "property_key",
            Self::IndexLabel => "index_label",
            Self::Vertex => "vertex",
            Self::Edge => "edge",
            Self::SecondaryIndex => "secondary_index",
            Self::SearchIndex => "search_index",
        };
        f.write_str(name)
    }
}
