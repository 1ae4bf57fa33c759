//! Double-helix geometry.
//!
//! Maps each index of a [`Duplex`] to two points on opposite sides of a
//! vertical axis and derives the connectors between them. The output is a
//! plain [`HelixFrame`] value, a pure function of the duplex and the helix
//! options. The viewer builds it once and presents it every tick.

/// Axis-angle cylinder placement.
pub mod connector;

use std::f64::consts::{PI, TAU};

use glam::Vec3;

pub use connector::ConnectorPlacement;

use crate::options::{ColorOptions, HelixOptions};
use crate::sequence::Duplex;

/// Angular position of base pair `index`, in radians.
#[must_use]
pub fn helix_angle(index: usize, helix: &HelixOptions) -> f64 {
    index as f64 * TAU / f64::from(helix.turn_period)
}

/// The strand-1 and strand-2 points of base pair `index`.
///
/// Strand 2 sits half a turn (π) further round, i.e. diametrically opposite
/// strand 1 at the same height.
#[must_use]
pub fn base_pair_points(index: usize, helix: &HelixOptions) -> (Vec3, Vec3) {
    let angle = helix_angle(index, helix);
    let y = index as f32 * helix.rise;
    (
        point_at(angle, y, helix.radius),
        point_at(angle + PI, y, helix.radius),
    )
}

fn point_at(angle: f64, y: f32, radius: f32) -> Vec3 {
    let r = f64::from(radius);
    Vec3::new((r * angle.cos()) as f32, y, (r * angle.sin()) as f32)
}

/// A nucleotide sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in helix space.
    pub center: Vec3,
    /// Radius.
    pub radius: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// What a connector models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// Bond between the two strands at one index.
    CrossStrand,
    /// Link between consecutive points of one strand.
    Backbone,
}

/// A placed connector cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    /// Bond or backbone.
    pub kind: ConnectorKind,
    /// Where and how the unit cylinder goes.
    pub placement: ConnectorPlacement,
    /// Cylinder radius.
    pub radius: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

/// Everything drawn for one frame, in helix space (y from 0 upwards).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelixFrame {
    /// Two spheres per base pair, strand 1 first.
    pub spheres: Vec<Sphere>,
    /// Cross-strand bonds and backbone segments.
    pub connectors: Vec<Connector>,
    /// Connectors dropped because their endpoints coincided.
    pub degenerate: usize,
    /// Half the helix height; the camera shifts by this to center it.
    pub half_height: f32,
}

impl HelixFrame {
    /// Build the frame for `duplex`.
    #[must_use]
    pub fn build(
        duplex: &Duplex,
        helix: &HelixOptions,
        colors: &ColorOptions,
    ) -> Self {
        let len = duplex.len();
        let mut frame = Self {
            spheres: Vec::with_capacity(2 * len),
            connectors: Vec::with_capacity(3 * len),
            degenerate: 0,
            half_height: helix.half_height(len),
        };

        let mut prev: Option<(Vec3, Vec3)> = None;
        for (i, (b1, b2)) in duplex.pairs().enumerate() {
            let (p1, p2) = base_pair_points(i, helix);

            frame.spheres.push(Sphere {
                center: p1,
                radius: helix.sphere_radius,
                color: colors.base(b1),
            });
            frame.spheres.push(Sphere {
                center: p2,
                radius: helix.sphere_radius,
                color: colors.base(b2),
            });

            frame.connect(
                ConnectorKind::CrossStrand,
                p1,
                p2,
                helix.bond_radius,
                colors.bond,
            );
            if let Some((q1, q2)) = prev {
                frame.connect(
                    ConnectorKind::Backbone,
                    q1,
                    p1,
                    helix.backbone_radius,
                    colors.backbone,
                );
                frame.connect(
                    ConnectorKind::Backbone,
                    q2,
                    p2,
                    helix.backbone_radius,
                    colors.backbone,
                );
            }
            prev = Some((p1, p2));
        }
        frame
    }

    fn connect(
        &mut self,
        kind: ConnectorKind,
        start: Vec3,
        end: Vec3,
        radius: f32,
        color: [f32; 3],
    ) {
        match ConnectorPlacement::between(start, end) {
            Some(placement) => self.connectors.push(Connector {
                kind,
                placement,
                radius,
                color,
            }),
            None => self.degenerate += 1,
        }
    }

    /// Whether nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.connectors.is_empty()
    }

    /// Number of connectors of `kind`.
    #[must_use]
    pub fn count(&self, kind: ConnectorKind) -> usize {
        self.connectors.iter().filter(|c| c.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sequence::{Base, Strand};

    fn duplex(s: &str) -> Duplex {
        Duplex::from_primary(s.parse::<Strand>().unwrap())
    }

    #[test]
    fn first_pair_sits_on_the_x_axis() {
        let (p1, p2) = base_pair_points(0, &HelixOptions::default());
        assert!((p1 - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-6);
        assert!((p2 - Vec3::new(-3.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn a_full_turn_returns_to_the_same_phase() {
        let helix = HelixOptions::default();
        let turns = (helix_angle(10, &helix) - helix_angle(0, &helix)) / TAU;
        assert!((turns - turns.round()).abs() < 1e-12);
        assert_eq!(turns.round(), 1.0);

        let (a, _) = base_pair_points(0, &helix);
        let (b, _) = base_pair_points(10, &helix);
        assert!((a.x - b.x).abs() < 1e-5 && (a.z - b.z).abs() < 1e-5);
        assert_eq!(b.y - a.y, 10.0 * helix.rise);
    }

    #[test]
    fn empty_duplex_emits_nothing() {
        let frame = HelixFrame::build(
            &Duplex::default(),
            &HelixOptions::default(),
            &ColorOptions::default(),
        );
        assert!(frame.is_empty());
        assert_eq!(frame.degenerate, 0);
        assert_eq!(frame.half_height, 0.0);
    }

    #[test]
    fn connector_counts() {
        let frame = HelixFrame::build(
            &duplex("ATGCATGCAT"),
            &HelixOptions::default(),
            &ColorOptions::default(),
        );
        assert_eq!(frame.spheres.len(), 20);
        assert_eq!(frame.count(ConnectorKind::CrossStrand), 10);
        assert_eq!(frame.count(ConnectorKind::Backbone), 18);
        assert_eq!(frame.half_height, 2.5);
    }

    #[test]
    fn spheres_take_their_base_color() {
        let colors = ColorOptions::default();
        let frame = HelixFrame::build(&duplex("G"), &HelixOptions::default(), &colors);
        assert_eq!(frame.spheres[0].color, colors.base(Base::G));
        assert_eq!(frame.spheres[1].color, colors.base(Base::C));
    }

    #[test]
    fn zero_radius_collapses_bonds_without_nan() {
        let helix = HelixOptions {
            radius: 0.0,
            ..HelixOptions::default()
        };
        let frame = HelixFrame::build(&duplex("ATGC"), &helix, &ColorOptions::default());
        assert_eq!(frame.count(ConnectorKind::CrossStrand), 0);
        assert_eq!(frame.degenerate, 4);
        assert!(frame
            .connectors
            .iter()
            .all(|c| c.placement.model_matrix(c.radius).is_finite()));
    }

    #[test]
    fn zero_rise_and_full_turn_collapses_backbone() {
        let helix = HelixOptions {
            rise: 0.0,
            turn_period: 1.0,
            ..HelixOptions::default()
        };
        let frame = HelixFrame::build(&duplex("AAA"), &helix, &ColorOptions::default());
        assert_eq!(frame.count(ConnectorKind::Backbone), 0);
        assert_eq!(frame.degenerate, 4);
    }

    proptest! {
        #[test]
        fn strands_are_diametrically_opposite(index in 0usize..500) {
            let (p1, p2) = base_pair_points(index, &HelixOptions::default());
            // Half a turn about the vertical axis through (0, y, 0).
            prop_assert!((p2 - Vec3::new(-p1.x, p1.y, -p1.z)).length() < 1e-4);
            prop_assert_eq!(p1.y, p2.y);
        }

        #[test]
        fn frame_sizes_follow_length(seed in any::<u64>(), len in 0usize..300) {
            let d = Duplex::generate(len, &mut StdRng::seed_from_u64(seed));
            let frame = HelixFrame::build(&d, &HelixOptions::default(), &ColorOptions::default());
            prop_assert_eq!(frame.spheres.len(), 2 * len);
            prop_assert_eq!(frame.connectors.len() + frame.degenerate, (3 * len).saturating_sub(2));
        }
    }
}
