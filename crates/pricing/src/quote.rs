//! Quote calculation over a production plan.

use blockplan_core::PlanReport;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;

/// A computed quote, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    /// Price per ordered set (or per produced main item without an order).
    pub unit_price: f64,

    /// Total price including VAT.
    pub total_price: f64,
}

/// Prices a production plan.
///
/// The cost chain: block base USD price adjusted for density, converted at
/// the currency rate, marked up by the risk and trade margins, scaled by
/// the block count; plus per-piece processing over every produced unit and
/// flat shipping; VAT on top of the sum. The unit price divides the total
/// by the ordered quantity, falling back to the produced main-item count,
/// with a minimum divisor of one.
pub fn price(report: &PlanReport, density: Option<f64>, config: &PricingConfig) -> Quote {
    let mut block_usd = config.base_block_price_usd;
    if let Some(density) = density {
        block_usd += (density - config.density_baseline) * config.density_price_step;
    }

    let block_cost = block_usd * config.currency_rate;
    let block_sell = block_cost * config.risk_margin * config.trade_margin;

    let processing = report.total_units() as f64 * config.per_piece_processing_cost;

    let total_ex_vat =
        report.plan.blocks_needed as f64 * block_sell + processing + config.shipping;
    let total_inc_vat = total_ex_vat * config.vat_rate;

    let divisor = report
        .order_quantity
        .unwrap_or_else(|| report.main_total())
        .max(1);

    log::debug!(
        "quote: {} blocks at {:.2}, {:.2} processing, divisor {}",
        report.plan.blocks_needed,
        block_sell,
        processing,
        divisor
    );

    Quote {
        unit_price: round_currency(total_inc_vat / divisor as f64),
        total_price: round_currency(total_inc_vat),
    }
}

fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
