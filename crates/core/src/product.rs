//! Product and part input records.

use crate::component::{ComponentId, ComponentMap};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An auxiliary flat part cut from the same block footprint as the main box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartSpec {
    /// Unique part name.
    pub name: String,

    /// Nominal thickness along the stacking axis, in cm.
    pub thickness: f64,

    /// How many of this part one completed set requires.
    pub per_set: u32,
}

impl PartSpec {
    /// Creates a part with a ratio of one per set.
    pub fn new(name: impl Into<String>, thickness: f64) -> Self {
        Self {
            name: name.into(),
            thickness,
            per_set: 1,
        }
    }

    /// Sets how many of this part each completed set requires.
    pub fn with_per_set(mut self, per_set: u32) -> Self {
        self.per_set = per_set;
        self
    }
}

/// The immutable input record for one planning request.
///
/// Dimensions are outer dimensions in centimeters. `wall_thickness`
/// describes the product for the surrounding layers (quoting, validation of
/// the request); the planner itself works on the outer dimensions and does
/// not consume it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProductSpec {
    /// Nominal outer length (cm).
    pub length: f64,

    /// Nominal outer width (cm).
    pub width: f64,

    /// Nominal outer height (cm).
    pub height: f64,

    /// Product wall thickness (cm). Not consumed by the planner.
    pub wall_thickness: f64,

    /// Auxiliary parts cut alongside the main item.
    pub parts: Vec<PartSpec>,

    /// Ordered quantity of complete sets, if this request is an order.
    pub order_quantity: Option<u64>,

    /// Material density grade, consumed by pricing only.
    pub density: Option<f64>,
}

impl ProductSpec {
    /// Creates a product with no parts and no order.
    pub fn new(length: f64, width: f64, height: f64, wall_thickness: f64) -> Self {
        Self {
            length,
            width,
            height,
            wall_thickness,
            parts: Vec::new(),
            order_quantity: None,
            density: None,
        }
    }

    /// Adds one auxiliary part.
    pub fn with_part(mut self, part: PartSpec) -> Self {
        self.parts.push(part);
        self
    }

    /// Replaces the auxiliary part list.
    pub fn with_parts(mut self, parts: Vec<PartSpec>) -> Self {
        self.parts = parts;
        self
    }

    /// Marks this request as an order for `quantity` complete sets.
    pub fn with_order_quantity(mut self, quantity: u64) -> Self {
        self.order_quantity = Some(quantity);
        self
    }

    /// Sets the material density grade.
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    /// Component identifiers in planning order: main item first, then parts
    /// in input order.
    pub fn component_ids(&self) -> Vec<ComponentId> {
        let mut ids = Vec::with_capacity(self.parts.len() + 1);
        ids.push(ComponentId::Main);
        for part in &self.parts {
            ids.push(ComponentId::Part(part.name.clone()));
        }
        ids
    }

    /// Required count of each component per completed set.
    ///
    /// The main item always has ratio one.
    pub fn ratios(&self) -> ComponentMap<u32> {
        let mut entries = Vec::with_capacity(self.parts.len() + 1);
        entries.push((ComponentId::Main, 1));
        for part in &self.parts {
            entries.push((ComponentId::Part(part.name.clone()), part.per_set));
        }
        ComponentMap::from_entries(entries)
    }

    /// Validates the boundary contract: strictly positive dimensions and
    /// thicknesses, positive ratios, unique part names, positive order
    /// quantity and density when given.
    pub fn validate(&self) -> Result<()> {
        if self.length <= 0.0 || self.width <= 0.0 || self.height <= 0.0 {
            return Err(Error::InvalidProduct(
                "all product dimensions must be positive".into(),
            ));
        }

        if self.wall_thickness <= 0.0 {
            return Err(Error::InvalidProduct(
                "wall thickness must be positive".into(),
            ));
        }

        if let Some(quantity) = self.order_quantity {
            if quantity == 0 {
                return Err(Error::InvalidProduct(
                    "order quantity must be at least 1".into(),
                ));
            }
        }

        if let Some(density) = self.density {
            if density <= 0.0 {
                return Err(Error::InvalidProduct("density must be positive".into()));
            }
        }

        for (index, part) in self.parts.iter().enumerate() {
            if part.name.is_empty() {
                return Err(Error::InvalidPart(format!(
                    "part at index {} has an empty name",
                    index
                )));
            }

            if part.thickness <= 0.0 {
                return Err(Error::InvalidPart(format!(
                    "thickness for '{}' must be positive",
                    part.name
                )));
            }

            if part.per_set == 0 {
                return Err(Error::InvalidPart(format!(
                    "per-set count for '{}' must be at least 1",
                    part.name
                )));
            }

            if self.parts[..index].iter().any(|p| p.name == part.name) {
                return Err(Error::InvalidPart(format!(
                    "duplicate part name '{}'",
                    part.name
                )));
            }
        }

        Ok(())
    }
}
