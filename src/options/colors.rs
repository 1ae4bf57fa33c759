use serde::{Deserialize, Serialize};

use crate::sequence::Base;

/// Color palette for the helix viewer (linear RGB).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Adenine spheres.
    pub adenine: [f32; 3],
    /// Thymine spheres.
    pub thymine: [f32; 3],
    /// Guanine spheres.
    pub guanine: [f32; 3],
    /// Cytosine spheres.
    pub cytosine: [f32; 3],
    /// Cross-strand bond cylinders.
    pub bond: [f32; 3],
    /// Backbone cylinders.
    pub backbone: [f32; 3],
    /// Clear color behind the helix.
    pub background: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            adenine: [1.0, 0.42, 0.42],
            thymine: [0.31, 0.80, 0.77],
            guanine: [1.0, 0.90, 0.43],
            cytosine: [0.58, 0.88, 0.83],
            bond: [0.6, 0.6, 0.6],
            backbone: [0.25, 0.25, 0.25],
            background: [0.08, 0.08, 0.12],
        }
    }
}

impl ColorOptions {
    /// Sphere color for `base`.
    #[must_use]
    pub fn base(&self, base: Base) -> [f32; 3] {
        match base {
            Base::A => self.adenine,
            Base::T => self.thymine,
            Base::G => self.guanine,
            Base::C => self.cytosine,
        }
    }
}
