//! Condition operand values.
//!
//! [`Value`] is a closed, tagged set: the caller states whether an operand is
//! plain text, a number, an element identifier or a symbolic name, and the
//! condition translator matches on the tag to serialize it.
//!
//! # Example
//!
//! ```
//! use widegraph_core::{Direction, Id, Value};
//!
//! let name: Value = "marko".into();
//! let age: Value = 29i64.into();
//! let owner: Value = Id::new("person").into();
//! let dir: Value = Direction::Out.into();
//!
//! assert_eq!(name.as_str(), Some("marko"));
//! assert_eq!(age.as_int(), Some(29));
//! assert!(matches!(owner, Value::Id(_)));
//! assert_eq!(dir, Value::Symbol("OUT".to_owned()));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Id;

/// A condition operand.
///
/// | Variant | Serialized as |
/// |---------|---------------|
/// | `Text` | the text itself |
/// | `Int` | native integer |
/// | `Float` | native float |
/// | `Bool` | native boolean |
/// | `Id` | the id's canonical string |
/// | `Symbol` | the symbolic name |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// UTF-8 text
    Text(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Graph element identifier
    Id(Id),
    /// Enumerated symbolic name, such as an edge direction
    Symbol(String),
}

impl Value {
    /// Returns the value as a string slice if it is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as an id if it is one.
    #[inline]
    #[must_use]
    pub const fn as_id(&self) -> Option<&Id> {
        match self {
            Self::Id(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Id(_) => "id",
            Self::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Symbol(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Id> for Value {
    fn from(id: Id) -> Self {
        Self::Id(id)
    }
}

impl From<Direction> for Value {
    fn from(direction: Direction) -> Self {
        Self::Symbol(direction.name().to_owned())
    }
}

/// Direction of an edge relative to the vertex that owns the edge row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Edge leaves the owner vertex.
    Out,
    /// Edge enters the owner vertex.
    In,
    /// Either direction.
    Both,
}

impl Direction {
    /// The symbolic name stored in the `direction` column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Out => "OUT",
            Self::In => "IN",
            Self::Both => "BOTH",
        }
    }

    /// The opposite direction; `Both` is its own opposite.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
            Self::Both => Self::Both,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
