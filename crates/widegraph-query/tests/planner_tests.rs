//! Integration tests for query planning.
//!
//! Plans are checked through their rendered CQL text.

use widegraph_core::{ColumnKey, Direction, EntityKind, Id, IdLayout, ID_ESCAPE, ID_SEPARATOR};
use widegraph_query::{
    translate, Condition, Order, PlannerConfig, Query, QueryError, QueryPlanner,
};
use widegraph_storage::Clause;

fn label_planner() -> QueryPlanner {
    QueryPlanner::new("vertex_labels", IdLayout::new(vec![ColumnKey::Name]), PlannerConfig::default())
}

fn edge_planner() -> QueryPlanner {
    QueryPlanner::new(
        "edges",
        IdLayout::new(vec![
            ColumnKey::SourceVertex,
            ColumnKey::Direction,
            ColumnKey::Label,
            ColumnKey::SortValues,
            ColumnKey::TargetVertex,
        ]),
        PlannerConfig::default(),
    )
}

fn render(planner: &QueryPlanner, query: &Query) -> Vec<String> {
    planner.plan(query).expect("plan").iter().map(ToString::to_string).collect()
}

// ============================================================================
// Id fan-out
// ============================================================================

mod fan_out {
    use super::*;

    #[test]
    fn single_column_identity_uses_one_in_select() {
        let query = Query::new(EntityKind::VertexLabel)
            .with_ids([Id::new("person"), Id::new("software"), Id::new("city")]);
        assert_eq!(
            render(&label_planner(), &query),
            vec!["SELECT * FROM vertex_labels WHERE name IN ('person', 'software', 'city');"]
        );
    }

    #[test]
    fn two_column_identity_uses_one_select_per_id() {
        let planner = QueryPlanner::new(
            "vertices",
            IdLayout::new(vec![ColumnKey::Label, ColumnKey::PrimaryValues]),
            PlannerConfig::default(),
        );
        let query = Query::new(EntityKind::Vertex).with_ids([
            Id::composite(["person", "marko"]),
            Id::composite(["person", "vadas"]),
            Id::composite(["software", "lop"]),
        ]);

        let selects = planner.plan(&query).unwrap();
        assert_eq!(selects.len(), 3);
        for select in &selects {
            assert_eq!(select.restrictions().len(), 2);
        }
        assert_eq!(
            selects[2].to_string(),
            "SELECT * FROM vertices WHERE label = 'software' AND primary_values = 'lop';"
        );
    }

    #[test]
    fn edge_ids_bind_every_identity_column() {
        let marko = Id::composite(["person", "marko"]);
        let josh = Id::composite(["person", "josh"]);
        let id = Id::composite([marko.as_str(), "OUT", "knows", "", josh.as_str()]);
        let selects = edge_planner().plan(&Query::new(EntityKind::Edge).with_id(id)).unwrap();
        assert_eq!(selects.len(), 1);
        assert_eq!(
            selects[0].restrictions(),
            vec![
                &Clause::eq("source_vertex", marko.as_str()),
                &Clause::eq("direction", "OUT"),
                &Clause::eq("label", "knows"),
                &Clause::eq("sort_values", ""),
                &Clause::eq("target_vertex", josh.as_str()),
            ]
        );
        assert_eq!(
            selects[0].to_string(),
            format!(
                "SELECT * FROM edges WHERE source_vertex = '{}' AND direction = 'OUT' \
                 AND label = 'knows' AND sort_values = '' AND target_vertex = '{}';",
                marko.as_str(),
                josh.as_str()
            )
        );
    }

    #[test]
    fn duplicate_ids_are_not_collapsed() {
        let query = Query::new(EntityKind::VertexLabel)
            .with_ids([Id::new("person"), Id::new("person")]);
        assert_eq!(
            render(&label_planner(), &query),
            vec!["SELECT * FROM vertex_labels WHERE name IN ('person', 'person');"]
        );
    }
}

// ============================================================================
// Limit, offset and ordering
// ============================================================================

mod paging {
    use super::*;

    #[test]
    fn limit_is_scaled_by_fan_out_factor() {
        let query = Query::new(EntityKind::VertexLabel).with_limit(5);
        assert_eq!(render(&label_planner(), &query), vec!["SELECT * FROM vertex_labels LIMIT 500;"]);

        let planner = QueryPlanner::new(
            "vertex_labels",
            IdLayout::new(vec![ColumnKey::Name]),
            PlannerConfig::default().with_fan_out_factor(10),
        );
        assert_eq!(render(&planner, &query), vec!["SELECT * FROM vertex_labels LIMIT 50;"]);
    }

    #[test]
    fn offset_is_ignored() {
        let base = Query::new(EntityKind::VertexLabel).with_id(Id::new("person")).with_limit(2);
        let skipped = base.clone().with_offset(10);
        assert_eq!(render(&label_planner(), &skipped), render(&label_planner(), &base));
    }

    #[test]
    fn orders_render_in_insertion_order() {
        let query = Query::new(EntityKind::Edge)
            .order_by(ColumnKey::Direction, Order::Desc)
            .order_by(ColumnKey::Label, Order::Asc);
        assert_eq!(
            render(&edge_planner(), &query),
            vec!["SELECT * FROM edges ORDER BY direction DESC, label ASC;"]
        );
    }
}

// ============================================================================
// Conditions
// ============================================================================

mod conditions {
    use super::*;

    #[test]
    fn and_translates_to_conjunction() {
        let clause = translate(&Condition::and(
            Condition::eq(ColumnKey::SortValues, 1i64),
            Condition::gt(ColumnKey::PropertyValue, 2i64),
        ))
        .unwrap();
        assert_eq!(clause, Clause::and(Clause::eq("sort_values", 1i64), Clause::gt("property_value", 2i64)));
        assert_eq!(clause.to_string(), "sort_values = 1 AND property_value > 2");
    }

    #[test]
    fn conditions_are_appended_to_every_id_select() {
        let query = Query::new(EntityKind::Edge)
            .with_id(Id::composite(["v\u{1f}a", "OUT", "knows", "", "v\u{1f}b"]))
            .with_id(Id::composite(["v\u{1f}a", "OUT", "knows", "", "v\u{1f}c"]))
            .with_condition(Condition::eq(ColumnKey::Direction, Direction::Out));

        let selects = edge_planner().plan(&query).unwrap();
        assert_eq!(selects.len(), 2);
        for select in &selects {
            assert_eq!(select.restrictions().len(), 6);
            assert!(select.to_string().ends_with("AND direction = 'OUT';"));
        }
    }

    #[test]
    fn conditions_without_ids_filter_the_base_select() {
        let query = Query::new(EntityKind::Edge)
            .with_condition(Condition::eq(ColumnKey::SourceVertex, Id::new("a")))
            .with_condition(Condition::eq(ColumnKey::Label, "knows"));
        assert_eq!(
            render(&edge_planner(), &query),
            vec!["SELECT * FROM edges WHERE source_vertex = 'a' AND label = 'knows';"]
        );
    }

    #[test]
    fn or_and_neq_fail_the_whole_plan() {
        let or = Query::new(EntityKind::Edge).with_condition(Condition::or(
            Condition::eq(ColumnKey::Label, "knows"),
            Condition::eq(ColumnKey::Label, "created"),
        ));
        assert!(matches!(edge_planner().plan(&or), Err(QueryError::UnsupportedPredicate(_))));

        let neq = Query::new(EntityKind::Edge)
            .with_condition(Condition::eq(ColumnKey::Label, "knows"))
            .with_condition(Condition::neq(ColumnKey::Direction, Direction::In));
        assert!(matches!(edge_planner().plan(&neq), Err(QueryError::UnsupportedPredicate(_))));
    }
}

// ============================================================================
// Properties
// ============================================================================

mod properties {
    use proptest::prelude::*;

    use super::*;

    fn arb_part() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                4 => proptest::char::range('a', 'z'),
                1 => Just(ID_SEPARATOR),
                1 => Just(ID_ESCAPE),
            ],
            1..8,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    fn arb_composite() -> impl Strategy<Value = (String, String)> {
        (arb_part(), arb_part())
    }

    proptest! {
        #[test]
        fn composite_fan_out_is_one_select_per_id(parts in prop::collection::vec(arb_composite(), 1..16)) {
            let planner = QueryPlanner::new(
                "vertices",
                IdLayout::new(vec![ColumnKey::Label, ColumnKey::PrimaryValues]),
                PlannerConfig::default(),
            );
            let ids = parts.iter().map(|(label, primary)| Id::composite([label, primary]));
            let selects = planner.plan(&Query::new(EntityKind::Vertex).with_ids(ids)).unwrap();
            prop_assert_eq!(selects.len(), parts.len());
            for (select, (label, primary)) in selects.iter().zip(&parts) {
                let label_clause = Clause::eq("label", label);
                let primary_clause = Clause::eq("primary_values", primary);
                prop_assert_eq!(
                    select.restrictions(),
                    vec![&label_clause, &primary_clause]
                );
                let expected = format!(
                    "SELECT * FROM vertices WHERE label = '{label}' AND primary_values = '{primary}';"
                );
                prop_assert_eq!(select.to_string(), expected);
            }
        }

        #[test]
        fn limit_scaling_saturates(limit in any::<u64>(), factor in 1u64..1_000) {
            let planner = QueryPlanner::new(
                "t",
                IdLayout::new(vec![ColumnKey::Name]),
                PlannerConfig::default().with_fan_out_factor(factor),
            );
            let selects = planner.plan(&Query::new(EntityKind::VertexLabel).with_limit(limit)).unwrap();
            prop_assert_eq!(selects[0].limit(), Some(limit.saturating_mul(factor)));
        }
    }
}
