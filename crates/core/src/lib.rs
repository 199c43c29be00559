//! # Blockplan Core
//!
//! Planning engine for cutting a fixed-size EPS raw block into a target
//! box plus auxiliary flat parts (caps, separators).
//!
//! The planner works in five strictly forward stages:
//!
//! - **Dimensioning** ([`CutDimensions`]): fixed tolerances applied to
//!   nominal sizes, exactly once.
//! - **Axis assignment** ([`Layout`]): candidate placements of the block's
//!   long axis, gated by the minimum-table-length rule, scored by grid
//!   capacity with two footprint rotations.
//! - **Row capacity** ([`row_capacities`]): units of each component that
//!   stack in one row slot along the height axis.
//! - **Production planning** ([`ProductionPlan`]): allocation of row slots
//!   across components, either maximizing balanced sets from one block or
//!   minimizing blocks to cover an order.
//! - **Reporting** ([`PlanReport`]): the assembled result record.
//!
//! Tie-breaking in both searches is first-found-wins over a documented
//! enumeration order ([`Compositions`]), so results are reproducible.
//!
//! ## Example
//!
//! ```rust
//! use blockplan_core::{BlockPlanner, PartSpec, ProductSpec};
//!
//! let product = ProductSpec::new(54.0, 54.0, 50.0, 2.0)
//!     .with_part(PartSpec::new("top cap", 2.0))
//!     .with_part(PartSpec::new("bottom cap", 2.0))
//!     .with_order_quantity(100);
//!
//! let planner = BlockPlanner::default_config();
//! let report = planner.plan(&product).unwrap();
//!
//! assert!(report.is_feasible());
//! assert!(report.plan.blocks_needed > 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod block;
pub mod component;
pub mod dimension;
pub mod error;
pub mod layout;
pub mod partition;
pub mod planner;
pub mod product;
pub mod report;
pub mod rows;
pub mod solver;

// Re-exports
pub use block::{BlockDimensions, Tolerances};
pub use component::{ComponentId, ComponentMap};
pub use dimension::CutDimensions;
pub use error::{Error, Result};
pub use layout::{Layout, LongAxisRole, Orientation};
pub use partition::{composition_count, Compositions};
pub use planner::{ProductionPlan, RowPlan};
pub use product::{PartSpec, ProductSpec};
pub use report::PlanReport;
pub use rows::row_capacities;
pub use solver::{BlockPlanner, PlanConfig};
