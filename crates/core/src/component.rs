//! Component identifiers and ordered per-component mappings.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one produced component: the main box or a named flat part.
///
/// The main item is a reserved identifier distinct from every user-supplied
/// part name, so a part that happens to be called "box" cannot collide with
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "name", rename_all = "snake_case")
)]
pub enum ComponentId {
    /// The main container being produced.
    Main,
    /// An auxiliary flat part, keyed by its user-supplied name.
    Part(String),
}

impl ComponentId {
    /// Returns the user-supplied part name, or `None` for the main item.
    pub fn part_name(&self) -> Option<&str> {
        match self {
            Self::Main => None,
            Self::Part(name) => Some(name),
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("box"),
            Self::Part(name) => f.write_str(name),
        }
    }
}

/// Ordered mapping from component to a value.
///
/// Entries keep a fixed order: the main item first, then parts in their
/// input order. Iteration order is deterministic and part of the public
/// contract — the planner's first-found-wins tie-breaking is defined
/// against it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentMap<T> {
    entries: Vec<(ComponentId, T)>,
}

impl<T> ComponentMap<T> {
    /// Creates a map from pre-ordered entries.
    pub fn from_entries(entries: Vec<(ComponentId, T)>) -> Self {
        Self { entries }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no components.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value for a component.
    pub fn get(&self, id: &ComponentId) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == id).map(|(_, v)| v)
    }

    /// Value for the main item, if present.
    pub fn main(&self) -> Option<&T> {
        self.get(&ComponentId::Main)
    }

    /// Iterates entries in component order.
    pub fn iter(&self) -> impl Iterator<Item = (&ComponentId, &T)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates component identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &ComponentId> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates values in component order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Maps every value, keeping identifiers and order.
    pub fn map<U>(&self, mut f: impl FnMut(&ComponentId, &T) -> U) -> ComponentMap<U> {
        ComponentMap {
            entries: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), f(k, v)))
                .collect(),
        }
    }

    /// Pairs this map's identifiers with a parallel value vector.
    ///
    /// `values` must have one entry per component, in the same order.
    pub fn with_values<U>(&self, values: Vec<U>) -> ComponentMap<U> {
        debug_assert_eq!(values.len(), self.entries.len());
        ComponentMap {
            entries: self
                .entries
                .iter()
                .map(|(k, _)| k.clone())
                .zip(values)
                .collect(),
        }
    }
}
