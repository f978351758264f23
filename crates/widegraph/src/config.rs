//! Backend configuration.

use std::fmt;

use serde::{Deserialize, Serialize};
use widegraph_core::EntityKind;
use widegraph_query::{PlannerConfig, DEFAULT_FAN_OUT_FACTOR};

use crate::layout::TableLayout;

/// A store column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// UTF-8 text.
    #[default]
    Text,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Bigint,
    /// 64-bit float.
    Double,
    /// Boolean.
    Boolean,
    /// Raw bytes.
    Blob,
}

impl ColumnType {
    /// The CQL type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Int => "int",
            Self::Bigint => "bigint",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by every table of a backend.
///
/// # Example
///
/// ```
/// use widegraph::{BackendConfig, ColumnType};
/// use widegraph_core::EntityKind;
///
/// let config = BackendConfig::new()
///     .with_fan_out_factor(20)
///     .with_table_prefix("social");
/// assert_eq!(config.default_column_type, ColumnType::Text);
/// assert_eq!(config.table_name(EntityKind::Vertex), "social_vertices");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Physical rows assumed per logical element when scaling a limit.
    pub fan_out_factor: u64,
    /// Type used for columns without an explicit type.
    pub default_column_type: ColumnType,
    /// Prefix prepended to every table name, joined with `_`.
    pub table_prefix: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            fan_out_factor: DEFAULT_FAN_OUT_FACTOR,
            default_column_type: ColumnType::Text,
            table_prefix: None,
        }
    }
}

impl BackendConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fan-out factor.
    #[must_use]
    pub const fn with_fan_out_factor(mut self, factor: u64) -> Self {
        self.fan_out_factor = factor;
        self
    }

    /// Set the default column type.
    #[must_use]
    pub const fn with_default_column_type(mut self, column_type: ColumnType) -> Self {
        self.default_column_type = column_type;
        self
    }

    /// Set the table prefix.
    #[must_use]
    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = Some(prefix.into());
        self
    }

    /// The physical table name for an entity kind.
    #[must_use]
    pub fn table_name(&self, kind: EntityKind) -> String {
        let base = TableLayout::of(kind).table;
        match &self.table_prefix {
            Some(prefix) => format!("{prefix}_{base}"),
            None => base.to_owned(),
        }
    }

    /// The planner configuration derived from this configuration.
    #[must_use]
    pub const fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new().with_fan_out_factor(self.fan_out_factor)
    }
}
