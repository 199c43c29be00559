//! # Blockplan Pricing
//!
//! Quoting layer on top of [`blockplan_core`]: turns a production plan's
//! block count and output totals into a unit and total price.
//!
//! All business parameters — currency rate, risk and trade margins, VAT,
//! per-piece processing cost, the block base price and its density
//! adjustment — are injected through [`PricingConfig`]; nothing monetary is
//! hardcoded at the calculation site.
//!
//! ```rust
//! use blockplan_core::{BlockPlanner, PartSpec, ProductSpec};
//! use blockplan_pricing::{price, PricingConfig};
//!
//! let product = ProductSpec::new(54.0, 54.0, 50.0, 2.0)
//!     .with_part(PartSpec::new("top cap", 2.0))
//!     .with_order_quantity(100)
//!     .with_density(10.0);
//!
//! let report = BlockPlanner::default_config().plan(&product).unwrap();
//! let quote = price(&report, product.density, &PricingConfig::default());
//!
//! assert!(quote.total_price > 0.0);
//! ```

pub mod config;
pub mod quote;

pub use config::PricingConfig;
pub use quote::{price, Quote};
