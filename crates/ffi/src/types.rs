//! FFI type definitions.

use serde::{Deserialize, Serialize};

use blockplan_core::{ComponentId, ComponentMap, LongAxisRole, Orientation, PlanReport};
use blockplan_pricing::Quote;

/// API version.
pub const API_VERSION: &str = "1.0";

/// Request for one planning operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    /// API version.
    #[serde(default)]
    pub version: Option<String>,

    /// The product to plan.
    pub product: ProductRequest,

    /// Auxiliary parts cut alongside the main item.
    #[serde(default)]
    pub parts: Vec<PartRequest>,

    /// Planner configuration overrides.
    #[serde(default)]
    pub config: Option<ConfigRequest>,

    /// Pricing configuration overrides.
    #[serde(default)]
    pub pricing: Option<PricingRequest>,
}

/// Product definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    /// Outer length in cm.
    pub length: f64,

    /// Outer width in cm.
    pub width: f64,

    /// Outer height in cm.
    pub height: f64,

    /// Wall thickness in cm.
    pub wall_thickness: f64,

    /// Ordered quantity of complete sets.
    #[serde(default)]
    pub order_quantity: Option<u64>,

    /// Material density grade (pricing only).
    #[serde(default)]
    pub density: Option<f64>,
}

/// Auxiliary part definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartRequest {
    /// Unique part name.
    pub name: String,

    /// Nominal thickness in cm.
    pub thickness: f64,

    /// Count per completed set.
    #[serde(default = "default_per_set")]
    pub per_set: u32,
}

/// Planner configuration overrides. Missing fields keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigRequest {
    /// Block dimensions [short_a, short_b, long].
    pub block: Option<[f64; 3]>,

    /// Footprint tolerance in cm.
    pub footprint_tolerance: Option<f64>,

    /// Height tolerance in cm.
    pub height_tolerance: Option<f64>,

    /// Long-axis shrink in cm.
    pub long_axis_shrink: Option<f64>,

    /// Minimum table length rule in cm.
    pub min_table_length: Option<f64>,

    /// Partition search cap.
    pub max_partitions: Option<u64>,
}

/// Pricing configuration overrides. Missing fields keep the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingRequest {
    /// Local-currency price of one USD.
    pub currency_rate: Option<f64>,

    /// Multiplicative exchange-risk surcharge.
    pub risk_margin: Option<f64>,

    /// Multiplicative trade markup.
    pub trade_margin: Option<f64>,

    /// Multiplicative value-added tax.
    pub vat_rate: Option<f64>,

    /// Additive processing cost per produced unit.
    pub per_piece_processing_cost: Option<f64>,

    /// Block base price in USD.
    pub base_block_price_usd: Option<f64>,

    /// Density at which the base price applies.
    pub density_baseline: Option<f64>,

    /// USD adjustment per density unit away from the baseline.
    pub density_price_step: Option<f64>,

    /// Flat shipping cost before VAT.
    pub shipping: Option<f64>,
}

/// Response for plan operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResponse {
    /// API version.
    pub version: String,

    /// Whether the operation succeeded.
    pub success: bool,

    /// Error message if failed.
    pub error: Option<String>,

    /// Whether the plan produces anything at all. A successful response
    /// with `feasible: false` means the product or order cannot be cut
    /// from the configured block.
    pub feasible: bool,

    /// Number of identical blocks to cut.
    pub blocks_needed: u64,

    /// Selected block placement.
    pub layout: Option<LayoutResponse>,

    /// Effective sizes after tolerances.
    pub cut_dimensions: Option<CutResponse>,

    /// Units of each component stacking in one row slot.
    pub per_row: Option<Counts<u32>>,

    /// Winning row allocation.
    pub row_plan: Option<Counts<u32>>,

    /// Units produced per block.
    pub per_block: Option<Counts<u64>>,

    /// Total units produced across all blocks.
    pub total: Option<Counts<u64>>,

    /// Required units (order mode only).
    pub required: Option<Counts<u64>>,

    /// Produced minus required (total produced without an order).
    pub excess: Option<Counts<i64>>,

    /// Quote for the plan.
    pub pricing: Option<QuoteResponse>,

    /// Planning time in milliseconds.
    pub computation_time_ms: u64,
}

impl PlanResponse {
    /// Builds a failure response carrying only an error message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            feasible: false,
            blocks_needed: 0,
            layout: None,
            cut_dimensions: None,
            per_row: None,
            row_plan: None,
            per_block: None,
            total: None,
            required: None,
            excess: None,
            pricing: None,
            computation_time_ms: 0,
        }
    }

    /// Builds a success response from a plan report and its quote.
    pub fn from_report(report: &PlanReport, quote: Quote) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            feasible: report.is_feasible(),
            blocks_needed: report.plan.blocks_needed,
            layout: Some(LayoutResponse::from_report(report)),
            cut_dimensions: Some(CutResponse::from_report(report)),
            per_row: Some(Counts::from_map(&report.per_row)),
            row_plan: Some(Counts::from_map(&report.plan.rows)),
            per_block: Some(Counts::from_map(&report.plan.per_block)),
            total: Some(Counts::from_map(&report.plan.total)),
            required: report.plan.required.as_ref().map(Counts::from_map),
            excess: Some(Counts::from_map(&report.plan.excess)),
            pricing: Some(QuoteResponse {
                unit_price: quote.unit_price,
                total_price: quote.total_price,
            }),
            computation_time_ms: report.computation_time_ms,
        }
    }
}

/// Selected block placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    /// Table plane lengths.
    pub table: [f64; 2],

    /// Usable height above the table.
    pub effective_height: f64,

    /// Role of the long block axis: "height", "table_x" or "table_y".
    pub long_axis_role: String,

    /// Footprint rotation that won: "normal" or "rotated".
    pub orientation: String,

    /// Row slots in the table plane.
    pub rows_available: u32,
}

impl LayoutResponse {
    fn from_report(report: &PlanReport) -> Self {
        let role = match report.layout.long_axis_role {
            LongAxisRole::Height => "height",
            LongAxisRole::TableX => "table_x",
            LongAxisRole::TableY => "table_y",
        };
        let orientation = match report.layout.orientation {
            Orientation::Normal => "normal",
            Orientation::Rotated => "rotated",
        };
        Self {
            table: report.layout.table,
            effective_height: report.layout.effective_height,
            long_axis_role: role.to_string(),
            orientation: orientation.to_string(),
            rows_available: report.layout.rows_available,
        }
    }
}

/// Effective cut sizes after tolerances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutResponse {
    /// Footprint lengths [x, y].
    pub footprint: [f64; 2],

    /// Cut height of the main item.
    pub main_height: f64,

    /// Cut heights of the parts, in input order.
    pub part_heights: Vec<NamedValue<f64>>,
}

impl CutResponse {
    fn from_report(report: &PlanReport) -> Self {
        let part_heights = report
            .cut
            .heights
            .iter()
            .filter_map(|(id, height)| {
                id.part_name().map(|name| NamedValue {
                    name: name.to_string(),
                    value: *height,
                })
            })
            .collect();
        Self {
            footprint: [report.cut.footprint_x, report.cut.footprint_y],
            main_height: report.cut.main_height(),
            part_heights,
        }
    }
}

/// Per-component counts with the reserved main item split from the named
/// parts, so a part called "box" cannot collide with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counts<T> {
    /// Count for the main item.
    pub main: T,

    /// Counts for the parts, in input order.
    pub parts: Vec<NamedValue<T>>,
}

impl<T: Copy + Default> Counts<T> {
    fn from_map(map: &ComponentMap<T>) -> Self {
        let main = map.main().copied().unwrap_or_default();
        let parts = map
            .iter()
            .filter_map(|(id, value)| match id {
                ComponentId::Main => None,
                ComponentId::Part(name) => Some(NamedValue {
                    name: name.clone(),
                    value: *value,
                }),
            })
            .collect();
        Self { main, parts }
    }
}

/// A named scalar, used for part-keyed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedValue<T> {
    /// Part name.
    pub name: String,

    /// Value for that part.
    pub value: T,
}

/// Quote carried in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Price per set (or per produced main item without an order).
    pub unit_price: f64,

    /// Total price including VAT.
    pub total_price: f64,
}

fn default_per_set() -> u32 {
    1
}
