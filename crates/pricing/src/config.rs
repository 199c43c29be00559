//! Configuration for quote calculation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Business parameters for quoting a production plan.
///
/// Defaults are the reference values; real deployments inject the current
/// exchange rate and margins per request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PricingConfig {
    /// Local-currency price of one USD; multiplies the block base price.
    pub currency_rate: f64,

    /// Multiplicative surcharge covering exchange-rate risk.
    pub risk_margin: f64,

    /// Multiplicative trade markup on the risk-adjusted cost.
    pub trade_margin: f64,

    /// Multiplicative value-added tax on the marked-up total.
    pub vat_rate: f64,

    /// Additive processing cost per produced unit, in local currency.
    pub per_piece_processing_cost: f64,

    /// Base price of one raw block, in USD, at the baseline density.
    pub base_block_price_usd: f64,

    /// Density at which the base block price applies.
    pub density_baseline: f64,

    /// Additive USD adjustment to the block price per unit of density
    /// away from the baseline. Signed: lighter material prices below the
    /// base.
    pub density_price_step: f64,

    /// Flat shipping cost added before VAT, in local currency.
    pub shipping: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency_rate: 32.0,
            risk_margin: 1.30,
            trade_margin: 1.20,
            vat_rate: 1.20,
            per_piece_processing_cost: 0.5,
            base_block_price_usd: 120.0,
            density_baseline: 10.0,
            density_price_step: 5.0,
            shipping: 0.0,
        }
    }
}

impl PricingConfig {
    /// Creates a configuration with the reference values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the currency rate.
    pub fn with_currency_rate(mut self, rate: f64) -> Self {
        self.currency_rate = rate;
        self
    }

    /// Sets the risk margin.
    pub fn with_risk_margin(mut self, margin: f64) -> Self {
        self.risk_margin = margin;
        self
    }

    /// Sets the trade margin.
    pub fn with_trade_margin(mut self, margin: f64) -> Self {
        self.trade_margin = margin;
        self
    }

    /// Sets the VAT rate.
    pub fn with_vat_rate(mut self, rate: f64) -> Self {
        self.vat_rate = rate;
        self
    }

    /// Sets the per-piece processing cost.
    pub fn with_per_piece_processing_cost(mut self, cost: f64) -> Self {
        self.per_piece_processing_cost = cost;
        self
    }

    /// Sets the block base price in USD.
    pub fn with_base_block_price_usd(mut self, price: f64) -> Self {
        self.base_block_price_usd = price;
        self
    }

    /// Sets the density baseline and price step.
    pub fn with_density_pricing(mut self, baseline: f64, step: f64) -> Self {
        self.density_baseline = baseline;
        self.density_price_step = step;
        self
    }

    /// Sets the flat shipping cost.
    pub fn with_shipping(mut self, shipping: f64) -> Self {
        self.shipping = shipping;
        self
    }
}
