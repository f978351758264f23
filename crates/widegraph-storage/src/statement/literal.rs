//! Native literal values.

use std::cmp::Ordering;
use std::fmt;

/// A literal operand in a clause or an inserted value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Text, rendered single-quoted.
    Text(String),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl Literal {
    /// The value as stored in a string-valued cell.
    #[must_use]
    pub fn to_cell(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(x) => x.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// Compare a stored cell against this literal.
    ///
    /// Text compares lexicographically. Numeric and boolean literals parse the
    /// cell first; a cell that does not parse is incomparable.
    #[must_use]
    pub fn compare_cell(&self, cell: &str) -> Option<Ordering> {
        match self {
            Self::Text(s) => Some(cell.cmp(s.as_str())),
            Self::Int(i) => cell.parse::<i64>().ok().map(|c| c.cmp(i)),
            Self::Float(x) => cell.parse::<f64>().ok().and_then(|c| c.partial_cmp(x)),
            Self::Bool(b) => cell.parse::<bool>().ok().map(|c| c.cmp(b)),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Literal {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Literal {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_quoted_and_escaped() {
        assert_eq!(Literal::from("o'neil").to_string(), "'o''neil'");
        assert_eq!(Literal::Int(7).to_string(), "7");
        assert_eq!(Literal::Float(2.0).to_string(), "2.0");
    }

    #[test]
    fn numeric_comparison_parses_cell() {
        assert_eq!(Literal::Int(10).compare_cell("9"), Some(Ordering::Less));
        assert_eq!(Literal::Text("10".into()).compare_cell("9"), Some(Ordering::Greater));
        assert_eq!(Literal::Int(1).compare_cell("x"), None);
    }
}
