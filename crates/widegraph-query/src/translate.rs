//! Condition to clause translation.
//!
//! Relations map one-to-one onto store comparisons. Conjunctions flatten, so
//! `(a AND b) AND c` and `a AND (b AND c)` produce the same clause. The store
//! has no disjunction and no inequality operator: translation fails on the
//! first `Or` or `Neq` it meets.

use widegraph_core::Value;
use widegraph_storage::{Clause, CompareOp, Literal};

use crate::condition::{Condition, RelationOp};
use crate::error::{QueryError, QueryResult};

/// Translate a condition tree into a store clause.
///
/// # Errors
///
/// Returns [`QueryError::UnsupportedPredicate`] if the tree contains an `Or`
/// node or a `Neq` relation.
pub fn translate(condition: &Condition) -> QueryResult<Clause> {
    match condition {
        Condition::Relation { key, op, value } => {
            let op = compare_op(*op).ok_or_else(|| {
                QueryError::UnsupportedPredicate(format!("inequality on {key}: {condition}"))
            })?;
            Ok(Clause::compare(key.as_str(), op, literal(value)))
        }
        Condition::And(left, right) => Ok(Clause::and(translate(left)?, translate(right)?)),
        Condition::Or(..) => {
            Err(QueryError::UnsupportedPredicate(format!("disjunction: {condition}")))
        }
    }
}

/// Translate top-level conditions into one conjunction.
///
/// Returns `None` for an empty slice.
///
/// # Errors
///
/// Same as [`translate`].
pub fn translate_all(conditions: &[Condition]) -> QueryResult<Option<Clause>> {
    let mut combined: Option<Clause> = None;
    for condition in conditions {
        let clause = translate(condition)?;
        combined = Some(match combined {
            Some(acc) => Clause::and(acc, clause),
            None => clause,
        });
    }
    Ok(combined)
}

const fn compare_op(op: RelationOp) -> Option<CompareOp> {
    match op {
        RelationOp::Eq => Some(CompareOp::Eq),
        RelationOp::Gt => Some(CompareOp::Gt),
        RelationOp::Gte => Some(CompareOp::Gte),
        RelationOp::Lt => Some(CompareOp::Lt),
        RelationOp::Lte => Some(CompareOp::Lte),
        RelationOp::Neq => None,
    }
}

fn literal(value: &Value) -> Literal {
    match value {
        Value::Text(s) | Value::Symbol(s) => Literal::Text(s.clone()),
        Value::Id(id) => Literal::Text(id.as_str().to_owned()),
        Value::Int(i) => Literal::Int(*i),
        Value::Float(x) => Literal::Float(*x),
        Value::Bool(b) => Literal::Bool(*b),
    }
}

#[cfg(test)]
mod tests {
    use widegraph_core::{ColumnKey, Direction, Id};

    use super::*;

    #[test]
    fn relation_maps_operator_and_column() {
        let clause = translate(&Condition::gte(ColumnKey::SortValues, 7i64)).unwrap();
        assert_eq!(clause, Clause::gte("sort_values", 7i64));
        assert_eq!(clause.to_string(), "sort_values >= 7");
    }

    #[test]
    fn ids_and_symbols_serialize_as_text() {
        let id = Id::composite(["person", "marko"]);
        let clause = translate(&Condition::eq(ColumnKey::SourceVertex, id.clone())).unwrap();
        assert_eq!(clause, Clause::eq("source_vertex", id.as_str()));

        let clause = translate(&Condition::eq(ColumnKey::Direction, Direction::In)).unwrap();
        assert_eq!(clause.to_string(), "direction = 'IN'");
    }

    #[test]
    fn native_scalars_pass_through() {
        let clause = translate(&Condition::lt(ColumnKey::PropertyValue, 1.5)).unwrap();
        assert_eq!(clause.to_string(), "property_value < 1.5");
        let clause = translate(&Condition::eq(ColumnKey::PropertyValue, true)).unwrap();
        assert_eq!(clause.to_string(), "property_value = true");
    }

    #[test]
    fn grouping_does_not_matter() {
        let a = || Condition::eq(ColumnKey::Label, "knows");
        let b = || Condition::gt(ColumnKey::SortValues, 2i64);
        let c = || Condition::lte(ColumnKey::TargetVertex, "z");

        let left = translate(&Condition::and(Condition::and(a(), b()), c())).unwrap();
        let right = translate(&Condition::and(a(), Condition::and(b(), c()))).unwrap();
        assert_eq!(left, right);
        assert_eq!(left.conjuncts().len(), 3);
    }

    #[test]
    fn neq_is_rejected() {
        let err = translate(&Condition::neq(ColumnKey::Label, "knows")).unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedPredicate(_)));
    }

    #[test]
    fn nested_or_is_rejected() {
        let cond = Condition::and(
            Condition::eq(ColumnKey::Label, "knows"),
            Condition::or(
                Condition::eq(ColumnKey::Direction, "OUT"),
                Condition::eq(ColumnKey::Direction, "IN"),
            ),
        );
        assert!(matches!(translate(&cond), Err(QueryError::UnsupportedPredicate(_))));
    }

    #[test]
    fn translate_all_conjoins() {
        assert_eq!(translate_all(&[]).unwrap(), None);

        let clause = translate_all(&[
            Condition::eq(ColumnKey::Label, "knows"),
            Condition::gt(ColumnKey::SortValues, 2i64),
        ])
        .unwrap()
        .unwrap();
        assert_eq!(clause.to_string(), "label = 'knows' AND sort_values > 2");
    }
}
