//! Axis assignment: choosing the physical role of the block's long axis.

use crate::dimension::CutDimensions;
use crate::solver::PlanConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical role assigned to the block's long axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LongAxisRole {
    /// The long axis stands as the height axis.
    Height,
    /// The long axis lies in the table plane, carrying the first footprint
    /// axis of the product.
    TableX,
    /// The long axis lies in the table plane, carrying the second footprint
    /// axis of the product.
    TableY,
}

/// Which footprint rotation produced the winning grid count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    /// First footprint axis on the first table length.
    Normal,
    /// Footprint axes swapped.
    Rotated,
}

/// The selected placement of the block relative to the cutting table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// Table plane lengths, in candidate order.
    pub table: [f64; 2],

    /// Usable height above the table plane.
    pub effective_height: f64,

    /// Role of the block's long axis in this placement.
    pub long_axis_role: LongAxisRole,

    /// Footprint rotation that won the grid comparison.
    pub orientation: Orientation,

    /// Grid cells in the table plane. Each cell is one row slot along the
    /// height axis.
    pub rows_available: u32,
}

struct Candidate {
    table: [f64; 2],
    height: f64,
    role: LongAxisRole,
}

impl Candidate {
    /// Grid capacity of the table plane: the better of the two footprint
    /// rotations, `Normal` winning the tie.
    fn grid(&self, cut: &CutDimensions) -> (u32, Orientation) {
        let normal = cells(self.table[0], cut.footprint_x) * cells(self.table[1], cut.footprint_y);
        let rotated = cells(self.table[1], cut.footprint_x) * cells(self.table[0], cut.footprint_y);
        if normal >= rotated {
            (normal, Orientation::Normal)
        } else {
            (rotated, Orientation::Rotated)
        }
    }

    fn evaluate(&self, cut: &CutDimensions) -> (Layout, u64) {
        let (rows, orientation) = self.grid(cut);
        let per_row = cells(self.height, cut.main_height());
        let capacity = u64::from(rows) * u64::from(per_row);
        let layout = Layout {
            table: self.table,
            effective_height: self.height,
            long_axis_role: self.role,
            orientation,
            rows_available: rows,
        };
        (layout, capacity)
    }
}

fn cells(available: f64, size: f64) -> u32 {
    if size <= 0.0 {
        return 0;
    }
    let count = (available / size).floor();
    if count <= 0.0 {
        0
    } else {
        count as u32
    }
}

impl Layout {
    /// Enumerates the legal placements of the long axis and keeps the one
    /// with the highest theoretical unit count.
    ///
    /// Candidates are generated in a fixed order: long-axis-as-height
    /// first, then the two table placements gated on the first footprint
    /// axis, then the two gated on the second. Selection is by strict
    /// greater-than, so on ties the earliest candidate wins; this order is
    /// the reproducibility contract for the whole planner.
    ///
    /// The height placement is always legal, so a layout is always
    /// returned. When the product does not fit in any placement the
    /// returned layout has zero capacity, which downstream reports as an
    /// infeasible (zero-output) plan rather than an error.
    pub fn select(cut: &CutDimensions, config: &PlanConfig) -> Layout {
        let block = &config.block;
        let shrunk_long = block.long - config.tolerances.long_axis_shrink;

        let height_candidate = Candidate {
            table: [block.short_a, block.short_b],
            height: shrunk_long,
            role: LongAxisRole::Height,
        };

        let mut table_candidates = Vec::with_capacity(4);
        if cut.footprint_x >= config.min_table_length {
            table_candidates.push(Candidate {
                table: [shrunk_long, block.short_b],
                height: block.short_a,
                role: LongAxisRole::TableX,
            });
            table_candidates.push(Candidate {
                table: [shrunk_long, block.short_a],
                height: block.short_b,
                role: LongAxisRole::TableX,
            });
        }
        if cut.footprint_y >= config.min_table_length {
            table_candidates.push(Candidate {
                table: [block.short_a, shrunk_long],
                height: block.short_b,
                role: LongAxisRole::TableY,
            });
            table_candidates.push(Candidate {
                table: [block.short_b, shrunk_long],
                height: block.short_a,
                role: LongAxisRole::TableY,
            });
        }

        let (mut selected, mut best_capacity) = height_candidate.evaluate(cut);
        for candidate in &table_candidates {
            let (layout, capacity) = candidate.evaluate(cut);
            if capacity > best_capacity {
                selected = layout;
                best_capacity = capacity;
            }
        }

        if best_capacity == 0 {
            log::warn!(
                "product footprint {:.1}x{:.1} does not fit the block in any placement",
                cut.footprint_x,
                cut.footprint_y
            );
        } else {
            log::debug!(
                "selected layout: role {:?}, table {:?}, height {:.1}, {} row slots",
                selected.long_axis_role,
                selected.table,
                selected.effective_height,
                selected.rows_available
            );
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Tolerances;
    use crate::product::{PartSpec, ProductSpec};

    fn cut_for(length: f64, width: f64, height: f64) -> CutDimensions {
        let product = ProductSpec::new(length, width, height, 1.0)
            .with_part(PartSpec::new("cap", 2.0));
        CutDimensions::from_product(&product, &Tolerances::default())
    }

    #[test]
    fn test_long_axis_on_table_when_strictly_better() {
        // Outer 54x54x50: footprint 54.2 passes the 44 cm rule, and the
        // table placement packs 3x2 cells at 2 per row = 12 per block
        // against 1x2 cells at 3 per row = 6 for the height placement.
        let cut = cut_for(54.0, 54.0, 50.0);
        let layout = Layout::select(&cut, &PlanConfig::default());

        assert_eq!(layout.long_axis_role, LongAxisRole::TableX);
        assert_eq!(layout.table, [199.0, 122.0]);
        assert_eq!(layout.effective_height, 103.0);
        assert_eq!(layout.rows_available, 6);
    }

    #[test]
    fn test_small_footprint_never_reaches_table() {
        // 30 cm footprint is below the 44 cm rule: only the height
        // placement is legal.
        let cut = cut_for(30.0, 30.0, 30.0);
        let layout = Layout::select(&cut, &PlanConfig::default());

        assert_eq!(layout.long_axis_role, LongAxisRole::Height);
        assert_eq!(layout.table, [103.0, 122.0]);
        assert_eq!(layout.effective_height, 199.0);
    }

    #[test]
    fn test_tie_breaks_to_height_placement() {
        // Outer 50x50x50 packs 12 per block both standing and lying; the
        // height candidate is generated first and wins the tie.
        let cut = cut_for(50.0, 50.0, 50.0);
        let layout = Layout::select(&cut, &PlanConfig::default());

        assert_eq!(layout.long_axis_role, LongAxisRole::Height);
        assert_eq!(layout.rows_available, 4);
    }

    #[test]
    fn test_rotated_orientation_detected() {
        // 60x45 footprint on the [199, 122] table: normal packs 3x2=6,
        // rotated packs floor(199/45.2)*floor(122/60.2)=4*2=8.
        let cut = cut_for(45.0, 60.0, 20.0);
        let layout = Layout::select(&cut, &PlanConfig::default());

        assert_eq!(layout.orientation, Orientation::Rotated);
    }

    #[test]
    fn test_oversized_product_yields_zero_capacity() {
        let cut = cut_for(300.0, 300.0, 300.0);
        let layout = Layout::select(&cut, &PlanConfig::default());

        assert_eq!(layout.long_axis_role, LongAxisRole::Height);
        assert_eq!(layout.rows_available, 0);
    }

    #[test]
    fn test_height_placement_is_capacity_floor() {
        let config = PlanConfig::default();
        for dims in [
            (20.0, 20.0, 20.0),
            (50.0, 50.0, 50.0),
            (54.0, 54.0, 50.0),
            (45.0, 60.0, 20.0),
            (100.0, 40.0, 10.0),
        ] {
            let cut = cut_for(dims.0, dims.1, dims.2);
            let selected = Layout::select(&cut, &config);
            let selected_capacity = u64::from(selected.rows_available)
                * u64::from(cells(selected.effective_height, cut.main_height()));

            let height_only = Candidate {
                table: [config.block.short_a, config.block.short_b],
                height: config.block.long - config.tolerances.long_axis_shrink,
                role: LongAxisRole::Height,
            };
            let (_, floor_capacity) = height_only.evaluate(&cut);
            assert!(
                selected_capacity >= floor_capacity,
                "selected {} < height floor {} for {:?}",
                selected_capacity,
                floor_capacity,
                dims
            );
        }
    }
}
