//! Where clauses.

use std::cmp::Ordering;
use std::fmt;

use super::Literal;

/// A comparison operator supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

impl CompareOp {
    /// The CQL operator symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    /// Whether `cell <op> literal` holds, given `cell.cmp(literal)`.
    #[must_use]
    pub const fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Gte => matches!(ordering, Ordering::Greater | Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Lte => matches!(ordering, Ordering::Less | Ordering::Equal),
        }
    }
}

/// A restriction in a `WHERE` clause.
///
/// The store only supports conjunctions, so there is no `Or` variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `column <op> value`.
    Compare {
        /// Column name.
        column: String,
        /// Comparison operator.
        op: CompareOp,
        /// Right-hand operand.
        value: Literal,
    },

    /// `column IN (v1, v2, ...)`.
    In {
        /// Column name.
        column: String,
        /// Accepted values.
        values: Vec<Literal>,
    },

    /// Conjunction of clauses. Never nested: [`Clause::and`] flattens.
    And(Vec<Clause>),
}

impl Clause {
    /// `column <op> value`.
    #[must_use]
    pub fn compare(column: impl Into<String>, op: CompareOp, value: impl Into<Literal>) -> Self {
        Self::Compare { column: column.into(), op, value: value.into() }
    }

    /// `column = value`.
    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::compare(column, CompareOp::Eq, value)
    }

    /// `column > value`.
    #[must_use]
    pub fn gt(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::compare(column, CompareOp::Gt, value)
    }

    /// `column >= value`.
    #[must_use]
    pub fn gte(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::compare(column, CompareOp::Gte, value)
    }

    /// `column < value`.
    #[must_use]
    pub fn lt(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::compare(column, CompareOp::Lt, value)
    }

    /// `column <= value`.
    #[must_use]
    pub fn lte(column: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::compare(column, CompareOp::Lte, value)
    }

    /// `column IN (values...)`.
    #[must_use]
    pub fn in_list<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Self::In { column: column.into(), values: values.into_iter().map(Into::into).collect() }
    }

    /// Conjoin two clauses, flattening nested conjunctions.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        let mut operands = left.into_conjuncts();
        operands.extend(right.into_conjuncts());
        Self::And(operands)
    }

    /// The leaf clauses of this conjunction (the clause itself for a leaf).
    #[must_use]
    pub fn conjuncts(&self) -> Vec<&Self> {
        match self {
            Self::And(operands) => operands.iter().flat_map(Self::conjuncts).collect(),
            leaf => vec![leaf],
        }
    }

    /// Consume the clause into its leaf clauses.
    #[must_use]
    pub fn into_conjuncts(self) -> Vec<Self> {
        match self {
            Self::And(operands) => operands.into_iter().flat_map(Self::into_conjuncts).collect(),
            leaf => vec![leaf],
        }
    }

    /// Columns restricted by this clause, in order of appearance.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.conjuncts()
            .into_iter()
            .filter_map(|leaf| match leaf {
                Self::Compare { column, .. } | Self::In { column, .. } => Some(column.as_str()),
                Self::And(_) => None,
            })
            .collect()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { column, op, value } => write!(f, "{column} {} {value}", op.symbol()),
            Self::In { column, values } => {
                write!(f, "{column} IN (")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(")")
            }
            Self::And(operands) => {
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    write!(f, "{operand}")?;
                }
                Ok(())
            }
        }
    }
}
