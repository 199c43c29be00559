//! # Blockplan FFI
//!
//! C FFI interface for the blockplan cutting planner.
//!
//! This crate provides a C-compatible request/response interface for using
//! the planner from other languages like C#, Python, etc. One call plans a
//! product and returns the full report plus a quote as JSON.
//!
//! ## Functions
//!
//! - [`blockplan_plan`] - Plans a cutting request from JSON
//! - [`blockplan_ping`] - Liveness check, returns the fixed string "ok"
//! - [`blockplan_version`] - Returns the crate version
//! - [`blockplan_free_string`] - Frees result strings
//!
//! ## Error Codes
//!
//! | Code | Constant | Meaning |
//! |------|----------|---------|
//! | 0 | `BLOCKPLAN_OK` | Success |
//! | -1 | `BLOCKPLAN_ERR_NULL_PTR` | Null pointer passed |
//! | -2 | `BLOCKPLAN_ERR_INVALID_JSON` | Invalid JSON input |
//! | -3 | `BLOCKPLAN_ERR_PLAN_FAILED` | Planning failed |
//! | -99 | `BLOCKPLAN_ERR_UNKNOWN` | Unknown error |
//!
//! ## JSON Request Format
//!
//! ```json
//! {
//!   "product": {
//!     "length": 54.0,
//!     "width": 54.0,
//!     "height": 50.0,
//!     "wall_thickness": 2.0,
//!     "order_quantity": 100,
//!     "density": 10
//!   },
//!   "parts": [
//!     {"name": "top cap", "thickness": 2.0, "per_set": 1},
//!     {"name": "bottom cap", "thickness": 2.0, "per_set": 1}
//!   ],
//!   "config": {
//!     "block": [103, 122, 202],
//!     "min_table_length": 44.0
//!   },
//!   "pricing": {
//!     "currency_rate": 32.0,
//!     "vat_rate": 1.20
//!   }
//! }
//! ```
//!
//! `order_quantity`, `density`, `parts`, `config` and `pricing` are
//! optional. Without an order the response reports the best balanced
//! output of a single block; with one it reports the minimum block count
//! covering the order.
//!
//! ## JSON Response Format
//!
//! ```json
//! {
//!   "version": "1.0",
//!   "success": true,
//!   "error": null,
//!   "feasible": true,
//!   "blocks_needed": 13,
//!   "layout": {
//!     "table": [199.0, 122.0],
//!     "effective_height": 103.0,
//!     "long_axis_role": "table_x",
//!     "orientation": "normal",
//!     "rows_available": 6
//!   },
//!   "cut_dimensions": {
//!     "footprint": [54.2, 54.2],
//!     "main_height": 50.5,
//!     "part_heights": [{"name": "top cap", "value": 2.5}]
//!   },
//!   "per_row": {"main": 2, "parts": [{"name": "top cap", "value": 41}]},
//!   "row_plan": {"main": 4, "parts": [{"name": "top cap", "value": 1}]},
//!   "per_block": {"main": 8, "parts": [{"name": "top cap", "value": 41}]},
//!   "total": {"main": 104, "parts": [{"name": "top cap", "value": 533}]},
//!   "required": {"main": 100, "parts": [{"name": "top cap", "value": 100}]},
//!   "excess": {"main": 4, "parts": [{"name": "top cap", "value": 433}]},
//!   "pricing": {"unit_price": 941.52, "total_price": 94152.24},
//!   "computation_time_ms": 0
//! }
//! ```
//!
//! A `success: true` response with `feasible: false` and zero quantities
//! means the product or order cannot be cut from the configured block;
//! that outcome is data, not an error.
//!
//! ## C Example
//!
//! ```c
//! #include "blockplan.h"
//! #include <stdio.h>
//!
//! int main() {
//!     const char* request = "{\"product\": {...}, \"parts\": [...]}";
//!     char* result = NULL;
//!     int code = blockplan_plan(request, &result);
//!     if (code == BLOCKPLAN_OK) {
//!         printf("Result: %s\n", result);
//!     }
//!     blockplan_free_string(result);
//!     return code;
//! }
//! ```
//!
//! ## C# Example
//!
//! ```csharp
//! [DllImport("blockplan_ffi")]
//! static extern int blockplan_plan(string json, out IntPtr result);
//!
//! [DllImport("blockplan_ffi")]
//! static extern void blockplan_free_string(IntPtr ptr);
//!
//! string json = "{\"product\": {...}, \"parts\": [...]}";
//! IntPtr resultPtr;
//! int code = blockplan_plan(json, out resultPtr);
//! string result = Marshal.PtrToStringAnsi(resultPtr);
//! blockplan_free_string(resultPtr);
//! ```

mod api;
mod types;

pub use api::*;
pub use types::*;
