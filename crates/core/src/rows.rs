//! Per-row stacking capacity along the height axis.

use crate::component::ComponentMap;
use crate::dimension::CutDimensions;

/// Computes how many units of each component stack in one row slot.
///
/// A row slot is one footprint cell of the table grid extruded to the
/// selected layout's effective height. Computed once per component and
/// reused by the production planner.
pub fn row_capacities(cut: &CutDimensions, effective_height: f64) -> ComponentMap<u32> {
    cut.heights.map(|_, height| {
        let count = (effective_height / height).floor();
        if count <= 0.0 {
            0
        } else {
            count as u32
        }
    })
}
