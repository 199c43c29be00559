//! C FFI API functions.

use crate::types::*;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use blockplan_core::{BlockDimensions, BlockPlanner, PartSpec, PlanConfig, ProductSpec};
use blockplan_pricing::{price, PricingConfig};

/// Error codes.
pub const BLOCKPLAN_OK: i32 = 0;
pub const BLOCKPLAN_ERR_NULL_PTR: i32 = -1;
pub const BLOCKPLAN_ERR_INVALID_JSON: i32 = -2;
pub const BLOCKPLAN_ERR_PLAN_FAILED: i32 = -3;
pub const BLOCKPLAN_ERR_UNKNOWN: i32 = -99;

/// Plans a cutting request from JSON input.
///
/// # Safety
/// - `request_json` must be a valid null-terminated UTF-8 string
/// - `result_ptr` must be a valid pointer to a `*mut c_char`
/// - The caller must free the result string using `blockplan_free_string`
#[no_mangle]
pub unsafe extern "C" fn blockplan_plan(
    request_json: *const c_char,
    result_ptr: *mut *mut c_char,
) -> i32 {
    if request_json.is_null() || result_ptr.is_null() {
        return BLOCKPLAN_ERR_NULL_PTR;
    }

    let json_str = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return BLOCKPLAN_ERR_INVALID_JSON,
    };

    let response = plan_internal(json_str);
    let response_json = match serde_json::to_string(&response) {
        Ok(s) => s,
        Err(_) => return BLOCKPLAN_ERR_UNKNOWN,
    };

    match CString::new(response_json) {
        Ok(cstr) => {
            *result_ptr = cstr.into_raw();
            if response.success {
                BLOCKPLAN_OK
            } else {
                BLOCKPLAN_ERR_PLAN_FAILED
            }
        }
        Err(_) => BLOCKPLAN_ERR_UNKNOWN,
    }
}

/// Liveness check. Returns the fixed status string "ok" with no side
/// effects.
///
/// # Safety
/// - The returned string is statically allocated and must not be freed
#[no_mangle]
pub extern "C" fn blockplan_ping() -> *const c_char {
    static STATUS: &[u8] = b"ok\0";
    STATUS.as_ptr() as *const c_char
}

/// Returns the crate version.
///
/// # Safety
/// - The returned string is statically allocated and must not be freed
#[no_mangle]
pub extern "C" fn blockplan_version() -> *const c_char {
    // Use version from Cargo.toml at compile time
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

/// Frees a string returned by `blockplan_plan`.
///
/// # Safety
/// - `ptr` must be a string returned by this library, or null
#[no_mangle]
pub unsafe extern "C" fn blockplan_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// Internal implementation functions

fn plan_internal(json_str: &str) -> PlanResponse {
    let request: PlanRequest = match serde_json::from_str(json_str) {
        Ok(r) => r,
        Err(e) => return PlanResponse::failure(format!("Invalid JSON: {}", e)),
    };

    let product = build_product(&request);
    let plan_config = build_plan_config(request.config.as_ref());
    let pricing_config = build_pricing_config(request.pricing.as_ref());

    let planner = BlockPlanner::new(plan_config);
    match planner.plan(&product) {
        Ok(report) => {
            let quote = price(&report, product.density, &pricing_config);
            PlanResponse::from_report(&report, quote)
        }
        Err(e) => PlanResponse::failure(e.to_string()),
    }
}

fn build_product(request: &PlanRequest) -> ProductSpec {
    let mut product = ProductSpec::new(
        request.product.length,
        request.product.width,
        request.product.height,
        request.product.wall_thickness,
    );

    for part in &request.parts {
        product = product.with_part(
            PartSpec::new(part.name.clone(), part.thickness).with_per_set(part.per_set),
        );
    }

    if let Some(quantity) = request.product.order_quantity {
        product = product.with_order_quantity(quantity);
    }
    if let Some(density) = request.product.density {
        product = product.with_density(density);
    }

    product
}

fn build_plan_config(overrides: Option<&ConfigRequest>) -> PlanConfig {
    let mut config = PlanConfig::default();
    let Some(overrides) = overrides else {
        return config;
    };

    if let Some([short_a, short_b, long]) = overrides.block {
        config = config.with_block(BlockDimensions::new(short_a, short_b, long));
    }
    if let Some(footprint) = overrides.footprint_tolerance {
        config.tolerances.footprint = footprint;
    }
    if let Some(height) = overrides.height_tolerance {
        config.tolerances.height = height;
    }
    if let Some(shrink) = overrides.long_axis_shrink {
        config.tolerances.long_axis_shrink = shrink;
    }
    if let Some(length) = overrides.min_table_length {
        config = config.with_min_table_length(length);
    }
    if let Some(cap) = overrides.max_partitions {
        config = config.with_max_partitions(cap);
    }

    config
}

fn build_pricing_config(overrides: Option<&PricingRequest>) -> PricingConfig {
    let mut config = PricingConfig::default();
    let Some(overrides) = overrides else {
        return config;
    };

    if let Some(rate) = overrides.currency_rate {
        config.currency_rate = rate;
    }
    if let Some(margin) = overrides.risk_margin {
        config.risk_margin = margin;
    }
    if let Some(margin) = overrides.trade_margin {
        config.trade_margin = margin;
    }
    if let Some(rate) = overrides.vat_rate {
        config.vat_rate = rate;
    }
    if let Some(cost) = overrides.per_piece_processing_cost {
        config.per_piece_processing_cost = cost;
    }
    if let Some(base) = overrides.base_block_price_usd {
        config.base_block_price_usd = base;
    }
    if let Some(baseline) = overrides.density_baseline {
        config.density_baseline = baseline;
    }
    if let Some(step) = overrides.density_price_step {
        config.density_price_step = step;
    }
    if let Some(shipping) = overrides.shipping {
        config.shipping = shipping;
    }

    config
}
