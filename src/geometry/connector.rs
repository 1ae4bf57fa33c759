//! Cylinder placement between two points.
//!
//! A connector is drawn as a unit cylinder that starts at the origin and
//! extends along +Z. Placing it between `start` and `end` means translating
//! to `start`, rotating +Z onto the connector direction, and stretching it
//! to the connector length.

use glam::{Mat4, Quat, Vec3};

/// Connectors shorter than this are not drawn.
pub const CONNECTOR_EPSILON: f32 = 1e-6;

/// Above this `|cos|` between the direction and +Z, the direction is treated
/// as collinear with the reference axis.
pub const COLLINEAR_COS: f32 = 0.999;

/// The cylinder's local axis.
pub const REFERENCE_AXIS: Vec3 = Vec3::Z;

/// Fixed rotation axis used when the direction is (anti)parallel to +Z.
pub const FALLBACK_AXIS: Vec3 = Vec3::Y;

/// Axis-angle placement of one connector cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPlacement {
    /// Start point; the cylinder's base.
    pub origin: Vec3,
    /// Rotation axis (not necessarily unit length).
    pub axis: Vec3,
    /// Rotation about `axis`, in degrees.
    pub angle_degrees: f32,
    /// Distance between the two endpoints.
    pub length: f32,
}

impl ConnectorPlacement {
    /// Compute the placement from `start` to `end`.
    ///
    /// Returns `None` for coincident endpoints (length below
    /// [`CONNECTOR_EPSILON`]) or non-finite input, so callers never build a
    /// transform from a zero or NaN direction.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Option<Self> {
        let d = end - start;
        let length = d.length();
        if !length.is_finite() || length < CONNECTOR_EPSILON {
            return None;
        }

        let cos = d.z / length;
        let (axis, angle_degrees) = if cos.abs() > COLLINEAR_COS {
            (FALLBACK_AXIS, if d.z > 0.0 { 0.0 } else { 180.0 })
        } else {
            // REFERENCE_AXIS × d
            (Vec3::new(-d.y, d.x, 0.0), cos.acos().to_degrees())
        };

        Some(Self {
            origin: start,
            axis,
            angle_degrees,
            length,
        })
    }

    /// Rotation taking +Z onto the connector direction.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(self.axis.normalize(), self.angle_degrees.to_radians())
    }

    /// Model matrix for a unit cylinder of the given radius.
    #[must_use]
    pub fn model_matrix(&self, radius: f32) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::new(radius, radius, self.length),
            self.rotation(),
            self.origin,
        )
    }
}
