//! Integration tests for the in-memory session.
//!
//! These exercise the session through the public statement model only.

use widegraph_storage::backends::MemorySession;
use widegraph_storage::{
    Batch, Clause, Delete, Insert, Select, Session, SortDirection, Statement, StorageError,
};

const CREATE_EDGES: &str = "CREATE TABLE IF NOT EXISTS edges(source_vertex text, \
    direction text, label text, target_vertex text, weight text, \
    PRIMARY KEY((source_vertex), direction, label, target_vertex));";

fn session_with_edges() -> MemorySession {
    let session = MemorySession::new();
    session.execute(&Statement::Raw(CREATE_EDGES.to_owned())).expect("create table");
    session
}

fn edge(source: &str, label: &str, target: &str, weight: &str) -> Insert {
    Insert::new("edges")
        .value("source_vertex", source)
        .value("direction", "OUT")
        .value("label", label)
        .value("target_vertex", target)
        .value("weight", weight)
}

// ============================================================================
// Schema
// ============================================================================

mod schema {
    use super::*;

    #[test]
    fn create_is_idempotent_and_drop_removes() {
        let session = session_with_edges();
        session.execute(&Statement::Raw(CREATE_EDGES.to_owned())).expect("second create");
        assert_eq!(session.table_names().unwrap(), vec!["edges".to_owned()]);

        session.execute(&Statement::Raw("DROP TABLE IF EXISTS edges;".to_owned())).unwrap();
        assert!(session.table_names().unwrap().is_empty());

        // Still fine when the table is gone.
        session.execute(&Statement::Raw("DROP TABLE IF EXISTS edges;".to_owned())).unwrap();
    }

    #[test]
    fn index_requires_known_column() {
        let session = session_with_edges();
        session
            .execute(&Statement::Raw("CREATE INDEX edges_label_index ON edges(label);".to_owned()))
            .expect("create index");
        assert_eq!(session.index_names().unwrap(), vec!["edges_label_index".to_owned()]);

        let err = session
            .execute(&Statement::Raw("CREATE INDEX bad ON edges(colour);".to_owned()))
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidQuery(_)));

        let err = session
            .execute(&Statement::Raw("CREATE INDEX pk ON edges(source_vertex);".to_owned()))
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidQuery(_)));
    }

    #[test]
    fn missing_table_is_reported() {
        let session = MemorySession::new();
        let err = session.execute(&Select::new("nowhere").into()).unwrap_err();
        assert_eq!(err, StorageError::TableNotFound("nowhere".to_owned()));
    }
}

// ============================================================================
// Reads and writes
// ============================================================================

mod data {
    use super::*;

    #[test]
    fn select_by_partition_and_range() {
        let session = session_with_edges();
        for (target, weight) in [("b", "1"), ("c", "5"), ("d", "9")] {
            session.execute(&edge("a", "knows", target, weight).into()).unwrap();
        }
        session.execute(&edge("z", "knows", "a", "3").into()).unwrap();

        let mut select = Select::new("edges")
            .filter(Clause::eq("source_vertex", "a"))
            .filter(Clause::gte("weight", 5i64));
        select.push_order("target_vertex", SortDirection::Desc);
        let rows = session.execute(&select.into()).unwrap();

        let targets: Vec<_> = rows.rows().iter().filter_map(|r| r.get("target_vertex")).collect();
        assert_eq!(targets, vec!["d", "c"]);
        assert_eq!(rows.columns().len(), 5);
    }

    #[test]
    fn delete_by_prefix_removes_all_clustered_rows() {
        let session = session_with_edges();
        for target in ["b", "c"] {
            session.execute(&edge("a", "knows", target, "1").into()).unwrap();
        }
        let delete = Delete::new("edges").filter(Clause::eq("source_vertex", "a"));
        session.execute(&delete.into()).unwrap();
        assert_eq!(session.row_count("edges").unwrap(), 0);
    }
}

// ============================================================================
// Batches
// ============================================================================

mod batches {
    use super::*;

    #[test]
    fn batch_applies_all_members() {
        let session = session_with_edges();
        let mut batch = Batch::new();
        batch.push(edge("a", "knows", "b", "1"));
        batch.push(edge("a", "knows", "c", "1"));
        batch.push(Delete::new("edges").filter(Clause::eq("target_vertex", "b")));
        session.execute(&batch.into()).unwrap();
        assert_eq!(session.row_count("edges").unwrap(), 1);
    }

    #[test]
    fn rejected_batch_applies_nothing() {
        let session = session_with_edges();
        let mut batch = Batch::new();
        batch.push(edge("a", "knows", "b", "1"));
        batch.push(Insert::new("edges").value("colour", "red"));
        let err = session.execute(&batch.into()).unwrap_err();
        assert!(matches!(err, StorageError::InvalidQuery(_)));
        assert_eq!(session.row_count("edges").unwrap(), 0);
    }

    #[test]
    fn selects_cannot_be_batched() {
        let session = session_with_edges();
        let batch = Batch::from_statements(vec![Select::new("edges").into()]);
        assert!(matches!(session.execute(&batch.into()), Err(StorageError::InvalidQuery(_))));
    }

    #[test]
    fn closed_session_rejects_everything() {
        let session = session_with_edges();
        session.close();
        assert!(session.is_closed());
        let err = session.execute(&edge("a", "knows", "b", "1").into()).unwrap_err();
        assert_eq!(err, StorageError::SessionClosed);
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn in_select_returns_exactly_requested_partitions(
            stored in prop::collection::btree_set("[a-f]{1,3}", 0..12),
            requested in prop::collection::btree_set("[a-f]{1,3}", 1..6),
        ) {
            let session = session_with_edges();
            for source in &stored {
                session.execute(&edge(source, "knows", "x", "1").into()).expect("insert");
            }

            let select = Select::new("edges").filter(Clause::in_list("source_vertex", &requested));
            let rows = session.execute(&select.into()).expect("select");

            let found: BTreeSet<String> = rows
                .rows()
                .iter()
                .filter_map(|r| r.get("source_vertex").map(str::to_owned))
                .collect();
            let expected: BTreeSet<String> = stored.intersection(&requested).cloned().collect();
            prop_assert_eq!(found, expected);
        }
    }
}
