//! Integration tests for blockplan-core.

use blockplan_core::{
    composition_count, BlockPlanner, ComponentId, Compositions, Error, LongAxisRole, PartSpec,
    PlanConfig, ProductSpec,
};

fn boxed_product() -> ProductSpec {
    // Outer 54x54x50 box with two 2 cm caps: the reference audit case.
    // Footprint cuts to 54.2, box height to 50.5, caps to 2.5.
    ProductSpec::new(54.0, 54.0, 50.0, 2.0)
        .with_part(PartSpec::new("top cap", 2.0))
        .with_part(PartSpec::new("bottom cap", 2.0))
}

mod layout_selection {
    use super::*;

    #[test]
    fn test_audit_case_puts_long_axis_on_table() {
        // Table placement packs floor(199/54.2) * floor(122/54.2) = 3*2 = 6
        // row slots at 2 boxes each = 12 per block; the height placement
        // manages only 1*2 slots at 3 boxes = 6. The long axis must lie on
        // the table.
        let report = BlockPlanner::default_config()
            .plan(&boxed_product())
            .unwrap();

        assert_eq!(report.layout.long_axis_role, LongAxisRole::TableX);
        assert_eq!(report.layout.table, [199.0, 122.0]);
        assert_eq!(report.layout.effective_height, 103.0);
        assert_eq!(report.layout.rows_available, 6);
        assert_eq!(report.per_row.main(), Some(&2));
        assert_eq!(
            report.per_row.get(&ComponentId::Part("top cap".into())),
            Some(&41)
        );
    }

    #[test]
    fn test_footprint_below_rule_stays_on_height_axis() {
        // 40.2 cm after tolerance is under the 44 cm rule on both axes.
        let product = ProductSpec::new(40.0, 40.0, 30.0, 1.0);
        let report = BlockPlanner::default_config().plan(&product).unwrap();

        assert_eq!(report.layout.long_axis_role, LongAxisRole::Height);
        assert_eq!(report.layout.effective_height, 199.0);
    }

    #[test]
    fn test_oversized_product_is_infeasible_not_an_error() {
        // Every cut dimension exceeds every block axis.
        let product = ProductSpec::new(300.0, 300.0, 300.0, 1.0);
        let report = BlockPlanner::default_config().plan(&product).unwrap();

        assert_eq!(report.layout.long_axis_role, LongAxisRole::Height);
        assert_eq!(report.layout.rows_available, 0);
        assert_eq!(report.main_total(), 0);
        assert!(!report.is_feasible());
    }
}

mod no_order_planning {
    use super::*;

    #[test]
    fn test_maximizes_complete_sets_from_one_block() {
        let report = BlockPlanner::default_config()
            .plan(&boxed_product())
            .unwrap();

        // 6 rows split 4/1/1: min(8 boxes, 41 caps, 41 caps) = 8 sets.
        assert_eq!(report.plan.blocks_needed, 1);
        assert_eq!(report.plan.rows.main(), Some(&4));
        assert_eq!(report.plan.per_block.main(), Some(&8));
        assert!(report.plan.required.is_none());
    }

    #[test]
    fn test_selected_partition_beats_brute_force() {
        let report = BlockPlanner::default_config()
            .plan(&boxed_product())
            .unwrap();

        let per_row: Vec<u64> = report.per_row.values().map(|c| u64::from(*c)).collect();
        let ratios = [1u64, 1, 1];
        let selected_sets: u64 = report
            .plan
            .rows
            .values()
            .zip(&per_row)
            .zip(&ratios)
            .map(|((rows, cap), ratio)| u64::from(*rows) * cap / ratio)
            .min()
            .unwrap();

        for partition in Compositions::new(report.layout.rows_available, per_row.len()) {
            let sets = partition
                .iter()
                .zip(&per_row)
                .zip(&ratios)
                .map(|((rows, cap), ratio)| u64::from(*rows) * cap / ratio)
                .min()
                .unwrap();
            assert!(sets <= selected_sets, "partition {:?} beats plan", partition);
        }
    }
}

mod order_planning {
    use super::*;

    #[test]
    fn test_audit_case_order_of_100() {
        let report = BlockPlanner::default_config()
            .plan(&boxed_product().with_order_quantity(100))
            .unwrap();

        // Best allocation 4/1/1 rows: 8 boxes and 41 of each cap per
        // block, ceil(100/8) = 13 blocks.
        assert_eq!(report.plan.blocks_needed, 13);
        assert_eq!(report.plan.per_block.main(), Some(&8));
        assert_eq!(report.main_total(), 104);

        let required = report.plan.required.as_ref().unwrap();
        assert_eq!(required.main(), Some(&100));
        assert_eq!(report.plan.excess.main(), Some(&4));
        assert_eq!(
            report
                .plan
                .excess
                .get(&ComponentId::Part("top cap".into())),
            Some(&433)
        );
    }

    #[test]
    fn test_selected_block_count_is_minimal_and_covers_order() {
        let report = BlockPlanner::default_config()
            .plan(&boxed_product().with_order_quantity(100))
            .unwrap();

        let per_row: Vec<u64> = report.per_row.values().map(|c| u64::from(*c)).collect();
        let required: Vec<u64> = report
            .plan
            .required
            .as_ref()
            .unwrap()
            .values()
            .copied()
            .collect();

        for partition in Compositions::new(report.layout.rows_available, per_row.len()) {
            let yields: Vec<u64> = partition
                .iter()
                .zip(&per_row)
                .map(|(rows, cap)| u64::from(*rows) * cap)
                .collect();
            if yields.iter().all(|y| *y == 0) {
                continue;
            }
            let feasible = yields
                .iter()
                .zip(&required)
                .all(|(produced, needed)| *needed == 0 || *produced > 0);
            if !feasible {
                continue;
            }
            let blocks = yields
                .iter()
                .zip(&required)
                .filter(|(_, needed)| **needed > 0)
                .map(|(produced, needed)| needed.div_ceil(*produced))
                .max()
                .unwrap_or(0);
            assert!(
                blocks >= report.plan.blocks_needed,
                "partition {:?} needs only {} blocks",
                partition,
                blocks
            );
        }

        for ((_, total), (_, needed)) in report
            .plan
            .total
            .iter()
            .zip(report.plan.required.as_ref().unwrap().iter())
        {
            assert!(total >= needed);
        }
    }

    #[test]
    fn test_uncoverable_order_reports_zero_blocks() {
        // A part thicker than every possible effective height can never be
        // produced; the order is explicitly infeasible, not an error.
        let product = ProductSpec::new(54.0, 54.0, 50.0, 2.0)
            .with_part(PartSpec::new("giant panel", 250.0))
            .with_order_quantity(10);
        let report = BlockPlanner::default_config().plan(&product).unwrap();

        assert_eq!(report.plan.blocks_needed, 0);
        assert_eq!(report.main_total(), 0);
        assert!(!report.is_feasible());
        assert_eq!(
            report
                .plan
                .excess
                .get(&ComponentId::Part("giant panel".into())),
            Some(&-10)
        );
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_identical_input_yields_identical_plan() {
        let planner = BlockPlanner::default_config();
        let product = boxed_product().with_order_quantity(250);

        let first = planner.plan(&product).unwrap();
        let second = planner.plan(&product).unwrap();

        assert_eq!(first.layout, second.layout);
        assert_eq!(first.cut, second.cut);
        assert_eq!(first.per_row, second.per_row);
        assert_eq!(first.plan, second.plan);
    }
}

mod search_guard {
    use super::*;

    #[test]
    fn test_partition_cap_rejects_oversized_search() {
        // Tiny parts drive rows_available high; with a low cap the search
        // must fail fast instead of enumerating.
        let config = PlanConfig::default().with_max_partitions(50);
        let product = ProductSpec::new(54.0, 54.0, 5.0, 1.0)
            .with_part(PartSpec::new("a", 1.0))
            .with_part(PartSpec::new("b", 1.0))
            .with_part(PartSpec::new("c", 1.0));

        let result = BlockPlanner::new(config).plan(&product);
        assert!(matches!(result, Err(Error::SearchSpaceExceeded { .. })));
    }

    #[test]
    fn test_normal_inputs_stay_under_default_cap() {
        let product = boxed_product().with_order_quantity(1_000);
        let report = BlockPlanner::default_config().plan(&product).unwrap();
        assert!(report.is_feasible());

        let candidates = composition_count(report.layout.rows_available, report.per_row.len());
        assert!(candidates < 1_000);
    }
}
