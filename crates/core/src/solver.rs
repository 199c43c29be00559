//! Planner configuration and entry point.

use std::time::Instant;

use crate::block::{BlockDimensions, Tolerances};
use crate::dimension::CutDimensions;
use crate::error::Result;
use crate::layout::Layout;
use crate::planner::ProductionPlan;
use crate::product::ProductSpec;
use crate::report::PlanReport;
use crate::rows::row_capacities;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the block planner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanConfig {
    /// Raw block dimensions.
    pub block: BlockDimensions,

    /// Cutting tolerances.
    pub tolerances: Tolerances,

    /// Minimum cut length a footprint axis must have for the long block
    /// axis to carry it on the table plane.
    pub min_table_length: f64,

    /// Cap on the number of row partitions one plan may enumerate. The
    /// partition search is combinatorial in the component count; requests
    /// above this cap fail fast instead of burning CPU.
    pub max_partitions: u64,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            block: BlockDimensions::default(),
            tolerances: Tolerances::default(),
            min_table_length: 44.0,
            max_partitions: 2_000_000,
        }
    }
}

impl PlanConfig {
    /// Creates a configuration with the reference block and tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block dimensions.
    pub fn with_block(mut self, block: BlockDimensions) -> Self {
        self.block = block;
        self
    }

    /// Sets the cutting tolerances.
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Sets the minimum table length rule.
    pub fn with_min_table_length(mut self, length: f64) -> Self {
        self.min_table_length = length;
        self
    }

    /// Sets the partition search cap.
    pub fn with_max_partitions(mut self, cap: u64) -> Self {
        self.max_partitions = cap;
        self
    }
}

/// Block cutting planner.
///
/// Pure and deterministic: identical inputs produce identical reports, and
/// concurrent calls share no mutable state.
#[derive(Debug, Clone)]
pub struct BlockPlanner {
    config: PlanConfig,
}

impl BlockPlanner {
    /// Creates a planner with the given configuration.
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }

    /// Creates a planner with the reference block and tolerances.
    pub fn default_config() -> Self {
        Self::new(PlanConfig::default())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Plans the cutting of one product from the configured block.
    ///
    /// Validates the input record, derives cut dimensions, selects the
    /// layout, computes per-row capacities and searches row partitions for
    /// the best production plan. An oversized product or an uncoverable
    /// order comes back as a zero-output report, not an error.
    pub fn plan(&self, product: &ProductSpec) -> Result<PlanReport> {
        let start = Instant::now();

        product.validate()?;

        let cut = CutDimensions::from_product(product, &self.config.tolerances);
        let layout = Layout::select(&cut, &self.config);
        let per_row = row_capacities(&cut, layout.effective_height);
        let ratios = product.ratios();

        let plan = ProductionPlan::solve(
            layout.rows_available,
            &per_row,
            &ratios,
            product.order_quantity,
            self.config.max_partitions,
        )?;

        Ok(PlanReport {
            block: self.config.block,
            cut,
            layout,
            per_row,
            plan,
            order_quantity: product.order_quantity,
            computation_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}
