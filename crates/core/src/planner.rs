//! Production planning: allocating row slots across components.

use crate::component::ComponentMap;
use crate::error::{Error, Result};
use crate::partition::{composition_count, Compositions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows allocated to each component; sums to at most the rows available.
pub type RowPlan = ComponentMap<u32>;

/// Outcome of the row-allocation search, scaled to the chosen block count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductionPlan {
    /// Winning row allocation.
    pub rows: RowPlan,

    /// Units produced per block per component.
    pub per_block: ComponentMap<u64>,

    /// Number of identical blocks to cut. One in no-order mode; zero only
    /// for an infeasible order.
    pub blocks_needed: u64,

    /// Total units produced across all blocks.
    pub total: ComponentMap<u64>,

    /// Required units per component. Present only in order mode.
    pub required: Option<ComponentMap<u64>>,

    /// Produced minus required per component. Equals the total produced
    /// when there is no order; negative only in the explicit infeasible
    /// result.
    pub excess: ComponentMap<i64>,
}

impl ProductionPlan {
    /// Searches row partitions for the best allocation.
    ///
    /// Without an order the search maximizes complete sets from a single
    /// block; with an order it minimizes the number of identical blocks
    /// covering the ordered quantities. Both modes scan the same
    /// lexicographic composition enumeration and keep the first candidate
    /// that strictly beats the incumbent, so ties resolve to the earliest
    /// partition.
    ///
    /// Returns [`Error::SearchSpaceExceeded`] before enumerating anything
    /// if the partition count would exceed `max_partitions`.
    pub fn solve(
        rows_available: u32,
        per_row: &ComponentMap<u32>,
        ratios: &ComponentMap<u32>,
        order_quantity: Option<u64>,
        max_partitions: u64,
    ) -> Result<ProductionPlan> {
        let bins = per_row.len();
        let candidates = composition_count(rows_available, bins);
        if candidates > max_partitions {
            return Err(Error::SearchSpaceExceeded {
                candidates,
                limit: max_partitions,
            });
        }
        log::debug!(
            "searching {} row partitions across {} components",
            candidates,
            bins
        );

        match order_quantity {
            None => Ok(Self::max_sets(rows_available, per_row, ratios)),
            Some(quantity) => Ok(Self::min_blocks(rows_available, per_row, ratios, quantity)),
        }
    }

    /// No-order mode: maximize complete balanced sets from exactly one
    /// block.
    fn max_sets(
        rows_available: u32,
        per_row: &ComponentMap<u32>,
        ratios: &ComponentMap<u32>,
    ) -> ProductionPlan {
        let mut best_rows: Option<Vec<u32>> = None;
        let mut best_sets: Option<u64> = None;

        for partition in Compositions::new(rows_available, per_row.len()) {
            let sets = complete_sets(&partition, per_row, ratios);
            if best_sets.map_or(true, |best| sets > best) {
                best_sets = Some(sets);
                best_rows = Some(partition);
            }
        }

        let rows = best_rows.unwrap_or_else(|| vec![0; per_row.len()]);
        Self::scaled(rows, per_row, 1, None)
    }

    /// Order mode: minimize the number of identical blocks covering
    /// `quantity` complete sets.
    fn min_blocks(
        rows_available: u32,
        per_row: &ComponentMap<u32>,
        ratios: &ComponentMap<u32>,
        quantity: u64,
    ) -> ProductionPlan {
        let required: Vec<u64> = ratios.values().map(|r| quantity * u64::from(*r)).collect();

        let mut best_rows: Option<Vec<u32>> = None;
        let mut best_blocks: Option<u64> = None;

        for partition in Compositions::new(rows_available, per_row.len()) {
            let yields = partition_yield(&partition, per_row);
            if yields.iter().all(|y| *y == 0) {
                continue;
            }
            let Some(blocks) = blocks_for(&yields, &required) else {
                continue;
            };
            if best_blocks.map_or(true, |best| blocks < best) {
                best_blocks = Some(blocks);
                best_rows = Some(partition);
            }
        }

        match (best_rows, best_blocks) {
            (Some(rows), Some(blocks)) => Self::scaled(rows, per_row, blocks, Some(required)),
            _ => {
                log::warn!(
                    "order of {} sets cannot be covered by any row partition",
                    quantity
                );
                Self::scaled(vec![0; per_row.len()], per_row, 0, Some(required))
            }
        }
    }

    /// Builds the final plan from a winning row allocation and block count.
    fn scaled(
        rows: Vec<u32>,
        per_row: &ComponentMap<u32>,
        blocks_needed: u64,
        required: Option<Vec<u64>>,
    ) -> ProductionPlan {
        let per_block_values = partition_yield(&rows, per_row);
        let total_values: Vec<u64> = per_block_values.iter().map(|y| y * blocks_needed).collect();

        let excess_values: Vec<i64> = match &required {
            Some(required) => total_values
                .iter()
                .zip(required)
                .map(|(total, req)| *total as i64 - *req as i64)
                .collect(),
            None => total_values.iter().map(|total| *total as i64).collect(),
        };

        ProductionPlan {
            rows: per_row.with_values(rows),
            per_block: per_row.with_values(per_block_values),
            blocks_needed,
            total: per_row.with_values(total_values),
            required: required.map(|values| per_row.with_values(values)),
            excess: per_row.with_values(excess_values),
        }
    }
}

/// Units of each component one block yields under a row allocation.
fn partition_yield(partition: &[u32], per_row: &ComponentMap<u32>) -> Vec<u64> {
    partition
        .iter()
        .zip(per_row.values())
        .map(|(rows, capacity)| u64::from(*rows) * u64::from(*capacity))
        .collect()
}

/// Complete sets a row allocation yields: the minimum over components of
/// yield divided by the per-set ratio.
fn complete_sets(partition: &[u32], per_row: &ComponentMap<u32>, ratios: &ComponentMap<u32>) -> u64 {
    partition
        .iter()
        .zip(per_row.values())
        .zip(ratios.values())
        .map(|((rows, capacity), ratio)| {
            (u64::from(*rows) * u64::from(*capacity)) / u64::from(*ratio)
        })
        .min()
        .unwrap_or(0)
}

/// Blocks needed for a per-block yield vector to cover the requirements, or
/// `None` if some required component is never produced.
fn blocks_for(yields: &[u64], required: &[u64]) -> Option<u64> {
    let mut blocks = 0u64;
    for (produced, needed) in yields.iter().zip(required) {
        if *needed == 0 {
            continue;
        }
        if *produced == 0 {
            return None;
        }
        blocks = blocks.max(needed.div_ceil(*produced));
    }
    Some(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;

    fn map(values: &[(&str, u32)]) -> ComponentMap<u32> {
        ComponentMap::from_entries(
            values
                .iter()
                .map(|(name, value)| {
                    let id = if *name == "box" {
                        ComponentId::Main
                    } else {
                        ComponentId::Part((*name).to_string())
                    };
                    (id, *value)
                })
                .collect(),
        )
    }

    #[test]
    fn test_max_sets_balances_ratio_two_part() {
        // Five rows, one part needed twice per set: box yields 2/row, the
        // part 10/row. Best split is 3 box rows + 2 part rows:
        // min(6, 20/2) = 6 sets.
        let per_row = map(&[("box", 2), ("separator", 10)]);
        let ratios = map(&[("box", 1), ("separator", 2)]);

        let plan = ProductionPlan::solve(5, &per_row, &ratios, None, 1_000).unwrap();

        assert_eq!(plan.blocks_needed, 1);
        assert_eq!(plan.rows.main(), Some(&3));
        assert_eq!(
            plan.rows.get(&ComponentId::Part("separator".into())),
            Some(&2)
        );
        assert_eq!(plan.per_block.main(), Some(&6));
        assert_eq!(
            plan.per_block.get(&ComponentId::Part("separator".into())),
            Some(&20)
        );

        // Brute-force cross-check over the same enumeration.
        let best = Compositions::new(5, 2)
            .map(|p| complete_sets(&p, &per_row, &ratios))
            .max()
            .unwrap();
        assert_eq!(best, 6);
    }

    #[test]
    fn test_no_order_excess_is_total_produced() {
        let per_row = map(&[("box", 3)]);
        let ratios = map(&[("box", 1)]);

        let plan = ProductionPlan::solve(4, &per_row, &ratios, None, 1_000).unwrap();

        assert_eq!(plan.per_block.main(), Some(&12));
        assert_eq!(plan.total.main(), Some(&12));
        assert!(plan.required.is_none());
        assert_eq!(plan.excess.main(), Some(&12));
    }

    #[test]
    fn test_order_minimizes_blocks() {
        // 6 rows: box 2/row, two caps 41/row, order 100 of each.
        // Best allocation is 4 box rows + 1 row per cap:
        // ceil(100/8) = 13 blocks.
        let per_row = map(&[("box", 2), ("top cap", 41), ("bottom cap", 41)]);
        let ratios = map(&[("box", 1), ("top cap", 1), ("bottom cap", 1)]);

        let plan = ProductionPlan::solve(6, &per_row, &ratios, Some(100), 1_000).unwrap();

        assert_eq!(plan.blocks_needed, 13);
        assert_eq!(plan.rows.main(), Some(&4));
        assert_eq!(plan.per_block.main(), Some(&8));
        assert_eq!(plan.total.main(), Some(&104));
        assert_eq!(plan.excess.main(), Some(&4));

        // Every feasible partition needs at least as many blocks, and the
        // totals cover every requirement.
        let required: Vec<u64> = ratios.values().map(|r| 100 * u64::from(*r)).collect();
        for partition in Compositions::new(6, 3) {
            let yields = partition_yield(&partition, &per_row);
            if let Some(blocks) = blocks_for(&yields, &required) {
                if yields.iter().any(|y| *y > 0) {
                    assert!(blocks >= plan.blocks_needed);
                }
            }
        }
        for ((_, total), (_, req)) in plan.total.iter().zip(plan.required.as_ref().unwrap().iter())
        {
            assert!(total >= req);
        }
    }

    #[test]
    fn test_infeasible_order_reports_zero_blocks() {
        // The cap never fits a row, so no partition can cover it.
        let per_row = map(&[("box", 2), ("cap", 0)]);
        let ratios = map(&[("box", 1), ("cap", 1)]);

        let plan = ProductionPlan::solve(4, &per_row, &ratios, Some(10), 1_000).unwrap();

        assert_eq!(plan.blocks_needed, 0);
        assert_eq!(plan.per_block.main(), Some(&0));
        assert_eq!(plan.total.main(), Some(&0));
        assert_eq!(plan.excess.get(&ComponentId::Part("cap".into())), Some(&-10));
    }

    #[test]
    fn test_zero_rows_available() {
        let per_row = map(&[("box", 3), ("cap", 40)]);
        let ratios = map(&[("box", 1), ("cap", 1)]);

        let plan = ProductionPlan::solve(0, &per_row, &ratios, None, 1_000).unwrap();

        assert_eq!(plan.blocks_needed, 1);
        assert_eq!(plan.per_block.main(), Some(&0));
    }

    #[test]
    fn test_search_space_guard() {
        let per_row = map(&[("box", 1), ("a", 1), ("b", 1), ("c", 1)]);
        let ratios = map(&[("box", 1), ("a", 1), ("b", 1), ("c", 1)]);

        // C(15 + 3, 3) = 816 partitions; a cap of 100 must reject it.
        let result = ProductionPlan::solve(15, &per_row, &ratios, None, 100);
        assert!(matches!(
            result,
            Err(Error::SearchSpaceExceeded { candidates: 816, .. })
        ));
    }

    #[test]
    fn test_tie_breaks_to_first_partition() {
        // Box-only plans: every partition of 3 rows between two identical
        // parts with zero box capacity gives zero sets; the first
        // enumerated partition [0, 0, 3] must win.
        let per_row = map(&[("box", 0), ("a", 5), ("b", 5)]);
        let ratios = map(&[("box", 1), ("a", 1), ("b", 1)]);

        let plan = ProductionPlan::solve(3, &per_row, &ratios, None, 1_000).unwrap();
        let rows: Vec<u32> = plan.rows.values().copied().collect();
        assert_eq!(rows, vec![0, 0, 3]);
    }
}
