use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Double-helix dimensions, in world units.
pub struct HelixOptions {
    /// Distance from the central axis to each strand.
    pub radius: f32,
    /// Vertical rise per base pair.
    pub rise: f32,
    /// Base pairs per full turn.
    pub turn_period: f32,
    /// Radius of the nucleotide spheres.
    pub sphere_radius: f32,
    /// Radius of the cross-strand bond cylinders.
    pub bond_radius: f32,
    /// Radius of the backbone cylinders.
    pub backbone_radius: f32,
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            radius: 3.0,
            rise: 0.5,
            turn_period: 10.0,
            sphere_radius: 0.35,
            bond_radius: 0.06,
            backbone_radius: 0.12,
        }
    }
}

impl HelixOptions {
    /// Half the helix height, used to center it vertically.
    #[must_use]
    pub fn half_height(&self, length: usize) -> f32 {
        length as f32 * 0.5 * self.rise
    }

    /// Reject dimensions that would put NaN or infinity into the frame.
    pub(crate) fn validate(&self) -> Result<(), String> {
        finite("helix.rise", self.rise)?;
        if !(self.turn_period.is_finite() && self.turn_period > 0.0) {
            return Err(format!(
                "helix.turn_period must be positive, got {}",
                self.turn_period
            ));
        }
        for (name, value) in [
            ("helix.radius", self.radius),
            ("helix.sphere_radius", self.sphere_radius),
            ("helix.bond_radius", self.bond_radius),
            ("helix.backbone_radius", self.backbone_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be non-negative, got {value}"));
            }
        }
        Ok(())
    }
}

pub(crate) fn finite(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(format!("{name} must be finite, got {value}"))
    }
}
