//! Raw block geometry and cutting tolerances.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of the raw material block in centimeters.
///
/// The block has two short axes and one long axis. The planner decides which
/// physical role the long axis plays: lying in the table plane or standing as
/// the height axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockDimensions {
    /// First short axis length.
    pub short_a: f64,
    /// Second short axis length.
    pub short_b: f64,
    /// Long axis length.
    pub long: f64,
}

impl Default for BlockDimensions {
    fn default() -> Self {
        Self {
            short_a: 103.0,
            short_b: 122.0,
            long: 202.0,
        }
    }
}

impl BlockDimensions {
    /// Creates block dimensions from the two short axes and the long axis.
    pub fn new(short_a: f64, short_b: f64, long: f64) -> Self {
        Self {
            short_a,
            short_b,
            long,
        }
    }

    /// Returns the three axis lengths as an array.
    pub fn axes(&self) -> [f64; 3] {
        [self.short_a, self.short_b, self.long]
    }

    /// Block volume in cubic centimeters.
    pub fn volume(&self) -> f64 {
        self.short_a * self.short_b * self.long
    }
}

/// Fixed cutting allowances applied to nominal sizes.
///
/// Applied exactly once, before any packing decision; every downstream
/// capacity computation works on the adjusted values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerances {
    /// Added to each footprint axis (combined wire-cut kerf allowance).
    pub footprint: f64,

    /// Added to the cut height of every stacked component. Larger than the
    /// footprint allowance: the height cut is trimmed on both faces.
    pub height: f64,

    /// Subtracted from the long block axis before any placement of it.
    pub long_axis_shrink: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            footprint: 0.2,
            height: 0.5,
            long_axis_shrink: 3.0,
        }
    }
}

impl Tolerances {
    /// Creates a tolerance set from explicit allowances.
    pub fn new(footprint: f64, height: f64, long_axis_shrink: f64) -> Self {
        Self {
            footprint,
            height,
            long_axis_shrink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block() {
        let block = BlockDimensions::default();
        assert_eq!(block.axes(), [103.0, 122.0, 202.0]);
        assert!((block.volume() - 103.0 * 122.0 * 202.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_tolerances() {
        let tol = Tolerances::default();
        assert_eq!(tol.footprint, 0.2);
        assert_eq!(tol.height, 0.5);
        assert_eq!(tol.long_axis_shrink, 3.0);
        assert!(tol.height > tol.footprint);
    }
}
