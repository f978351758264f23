//! Physical column keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! column_keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A physical column known to the table layouts.
        ///
        /// Column names render in lower snake case and parse case-insensitively,
        /// since the store folds unquoted identifiers to lower case.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ColumnKey {
            $(
                #[doc = concat!("The `", $name, "` column.")]
                $variant,
            )+
        }

        impl ColumnKey {
            /// Every column key, in declaration order.
            pub const ALL: &'static [ColumnKey] = &[$(ColumnKey::$variant),+];

            /// The physical column name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ColumnKey::$variant => $name,)+
                }
            }
        }
    };
}

column_keys! {
    // schema elements
    Name => "name",
    IdStrategy => "id_strategy",
    PrimaryKeys => "primary_keys",
    IndexNames => "index_names",
    Properties => "properties",
    Frequency => "frequency",
    Links => "links",
    SortKeys => "sort_keys",
    DataType => "data_type",
    Cardinality => "cardinality",
    BaseType => "base_type",
    BaseValue => "base_value",
    IndexType => "index_type",
    Fields => "fields",
    // vertices
    Label => "label",
    PrimaryValues => "primary_values",
    PropertyKey => "property_key",
    PropertyValue => "property_value",
    // edges
    SourceVertex => "source_vertex",
    Direction => "direction",
    SortValues => "sort_values",
    TargetVertex => "target_vertex",
    // indexes
    IndexLabelName => "index_label_name",
    PropertyValues => "property_values",
    ElementIds => "element_ids",
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownColumn(s.to_owned()))
    }
}
