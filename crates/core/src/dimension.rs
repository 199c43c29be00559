//! Dimensioning: turning nominal sizes into cut dimensions.

use crate::block::Tolerances;
use crate::component::{ComponentId, ComponentMap};
use crate::product::ProductSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Effective per-component sizes after tolerances.
///
/// All components share the same table footprint; only the cut height
/// differs per component. Tolerances are applied here exactly once — every
/// downstream row/column computation works on these values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutDimensions {
    /// Footprint along the product width axis, tolerance included.
    pub footprint_x: f64,

    /// Footprint along the product length axis, tolerance included.
    pub footprint_y: f64,

    /// Cut height per component, tolerance included.
    pub heights: ComponentMap<f64>,
}

impl CutDimensions {
    /// Applies the fixed tolerances to a product's nominal sizes.
    pub fn from_product(product: &ProductSpec, tolerances: &Tolerances) -> Self {
        let footprint_x = product.width + tolerances.footprint;
        let footprint_y = product.length + tolerances.footprint;

        let mut heights = Vec::with_capacity(product.parts.len() + 1);
        heights.push((ComponentId::Main, product.height + tolerances.height));
        for part in &product.parts {
            heights.push((
                ComponentId::Part(part.name.clone()),
                part.thickness + tolerances.height,
            ));
        }

        Self {
            footprint_x,
            footprint_y,
            heights: ComponentMap::from_entries(heights),
        }
    }

    /// Cut height of the main item.
    pub fn main_height(&self) -> f64 {
        self.heights
            .main()
            .copied()
            .unwrap_or(f64::INFINITY)
    }
}
