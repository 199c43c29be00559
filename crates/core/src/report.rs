//! The plan result record.

use crate::block::BlockDimensions;
use crate::component::ComponentMap;
use crate::dimension::CutDimensions;
use crate::layout::Layout;
use crate::planner::ProductionPlan;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete result of one planning request.
///
/// Pure assembly of the upstream stages; quoting and presentation layers
/// consume this record without recomputing anything.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanReport {
    /// Raw block dimensions the plan was computed against.
    pub block: BlockDimensions,

    /// Effective per-component sizes after tolerances.
    pub cut: CutDimensions,

    /// Selected placement of the block.
    pub layout: Layout,

    /// Units of each component that stack in one row slot.
    pub per_row: ComponentMap<u32>,

    /// Row allocation and scaled output.
    pub plan: ProductionPlan,

    /// Ordered quantity of complete sets, if any.
    pub order_quantity: Option<u64>,

    /// Planning time in milliseconds.
    pub computation_time_ms: u64,
}

impl PlanReport {
    /// Returns true if the plan produces anything at all.
    ///
    /// False for an oversized product (zero capacity in every placement)
    /// and for an order no row partition can cover.
    pub fn is_feasible(&self) -> bool {
        self.plan.blocks_needed > 0 && self.plan.per_block.values().any(|count| *count > 0)
    }

    /// Total units produced across all components and blocks.
    pub fn total_units(&self) -> u64 {
        self.plan.total.values().sum()
    }

    /// Total main items produced across all blocks.
    pub fn main_total(&self) -> u64 {
        self.plan.total.main().copied().unwrap_or(0)
    }
}
