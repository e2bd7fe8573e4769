//! The full composed illusion: concentric square-ring pairs plus the
//! two-panel comparison scene.
//!
//! Radii follow the schedule `11 + 9i`, and each ring's square count
//! equals its radius so the angular density of squares stays roughly
//! constant from the innermost ring to the outermost. All randomness is
//! injected: offsets either come in explicitly or are drawn once, at
//! construction, from a caller-supplied [`Rng`].

use crate::config::Config;
use crate::error::Error;
use crate::primitive::{Color, Primitive};
use crate::ring_pair::SquareRingPair;
use rand::Rng;
use std::f32::consts::PI;

/// Radius of the innermost ring pair.
const BASE_RADIUS: usize = 11;

/// Radius increment between consecutive ring pairs.
const RADIUS_STEP: usize = 9;

/// The two rendered variants of the scene, side by side: the left panel
/// omits the guide circles, the right panel draws them. Both sit on the
/// same neutral backdrop.
#[derive(Clone, Debug)]
pub struct Scene {
    pub without_guides: Vec<Primitive>,
    pub with_guides: Vec<Primitive>,
    pub background: Color,
}

/// Concentric [`SquareRingPair`]s, all centered at the origin.
#[derive(Clone, Debug)]
pub struct Illusion {
    pub pairs: Vec<SquareRingPair>,
}

impl Illusion {
    /// Builds an illusion with per-ring rotation offsets drawn uniformly
    /// from `[0, π)`.
    ///
    /// The offsets are drawn exactly once here and stay fixed for the
    /// life of the value; rendering never re-randomizes.
    ///
    /// ### Parameters
    /// - `ring_count` - Number of concentric ring pairs; must be at
    ///   least 1.
    /// - `rng` - Random source for the offset draw. Pass a seeded
    ///   generator for reproducible scenes.
    pub fn new(ring_count: usize, rng: &mut impl Rng) -> Result<Self, Error> {
        let offsets = (0..ring_count).map(|_| rng.random_range(0.0..PI)).collect();
        Self::with_offsets(ring_count, offsets)
    }

    /// Builds an illusion from explicit per-ring rotation offsets.
    ///
    /// ### Parameters
    /// - `ring_count` - Number of concentric ring pairs; must be at
    ///   least 1.
    /// - `offsets` - One rotation offset (radians) per ring pair.
    ///
    /// ### Returns
    /// The illusion, or [`Error::InvalidParameter`] when `ring_count`
    /// is zero or `offsets.len() != ring_count`.
    pub fn with_offsets(ring_count: usize, offsets: Vec<f32>) -> Result<Self, Error> {
        if ring_count == 0 {
            return Err(Error::InvalidParameter(
                "illusion needs at least one ring pair".into(),
            ));
        }
        if offsets.len() != ring_count {
            return Err(Error::InvalidParameter(format!(
                "expected {} offsets, got {}",
                ring_count,
                offsets.len()
            )));
        }

        let mut pairs = Vec::with_capacity(ring_count);
        for (i, &offset) in offsets.iter().enumerate() {
            let radius = BASE_RADIUS + RADIUS_STEP * i;
            pairs.push(SquareRingPair::new(
                radius,
                radius as f32,
                Color::BLACK,
                Color::WHITE,
                offset,
            )?);
        }

        Ok(Self { pairs })
    }

    /// Builds an illusion from a [`Config`]: explicit offsets when the
    /// config carries any, a random draw from `rng` otherwise.
    pub fn from_config(cfg: &Config, rng: &mut impl Rng) -> Result<Self, Error> {
        if cfg.offsets.is_empty() {
            Self::new(cfg.ring_count, rng)
        } else {
            Self::with_offsets(cfg.ring_count, cfg.offsets.clone())
        }
    }

    /// Renders every ring pair in order, innermost first.
    pub fn render(&self, with_guide_circles: bool) -> Vec<Primitive> {
        self.pairs
            .iter()
            .flat_map(|pair| pair.render(with_guide_circles))
            .collect()
    }

    /// Builds the full two-panel comparison scene.
    pub fn scene(&self) -> Scene {
        Scene {
            without_guides: self.render(false),
            with_guides: self.render(true),
            background: Color::GREY,
        }
    }

    /// Total number of squares across all ring pairs.
    pub fn square_count(&self) -> usize {
        self.pairs.iter().map(|p| p.squares.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const EPS: f32 = 1e-4;

    #[test]
    fn radius_and_count_follow_the_schedule() {
        let illusion = Illusion::with_offsets(4, vec![0.0; 4]).unwrap();

        assert_eq!(illusion.pairs.len(), 4);
        for (i, pair) in illusion.pairs.iter().enumerate() {
            let expected = 11 + 9 * i;
            assert_eq!(pair.count, expected);
            assert!((pair.radius - expected as f32).abs() < EPS);
        }
    }

    #[test]
    fn every_pair_uses_black_and_white() {
        let illusion = Illusion::with_offsets(3, vec![0.1, 0.2, 0.3]).unwrap();
        for pair in &illusion.pairs {
            assert_eq!(pair.squares[0].color, Color::BLACK);
            assert_eq!(pair.squares[1].color, Color::WHITE);
        }
    }

    #[test]
    fn offset_length_mismatch_is_rejected() {
        let err = Illusion::with_offsets(3, vec![0.1, 0.2]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn zero_ring_count_is_rejected() {
        let err = Illusion::with_offsets(0, Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn identical_offsets_yield_identical_geometry() {
        let offsets = vec![0.4, 1.1, 2.7];
        let a = Illusion::with_offsets(3, offsets.clone()).unwrap();
        let b = Illusion::with_offsets(3, offsets).unwrap();

        for (pa, pb) in a.pairs.iter().zip(&b.pairs) {
            for (sa, sb) in pa.squares.iter().zip(&pb.squares) {
                for (va, vb) in sa.vertices.iter().zip(&sb.vertices) {
                    assert!((*va - *vb).length() < EPS);
                }
            }
        }
    }

    #[test]
    fn seeded_rng_makes_the_random_draw_reproducible() {
        let a = Illusion::new(4, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Illusion::new(4, &mut StdRng::seed_from_u64(7)).unwrap();

        for (pa, pb) in a.pairs.iter().zip(&b.pairs) {
            assert!((pa.angle_offset - pb.angle_offset).abs() < EPS);
        }
    }

    #[test]
    fn random_offsets_stay_in_half_turn_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let illusion = Illusion::new(8, &mut rng).unwrap();

        for pair in &illusion.pairs {
            assert!(pair.angle_offset >= 0.0);
            assert!(pair.angle_offset < PI);
        }
    }

    #[test]
    fn from_config_respects_explicit_offsets() {
        let cfg = Config {
            ring_count: 2,
            offsets: vec![0.5, 1.5],
        };
        let mut rng = StdRng::seed_from_u64(0);
        let illusion = Illusion::from_config(&cfg, &mut rng).unwrap();

        assert!((illusion.pairs[0].angle_offset - 0.5).abs() < EPS);
        assert!((illusion.pairs[1].angle_offset - 1.5).abs() < EPS);
    }

    #[test]
    fn from_config_with_empty_offsets_draws_randomly() {
        let cfg = Config {
            ring_count: 3,
            offsets: Vec::new(),
        };
        let a = Illusion::from_config(&cfg, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = Illusion::from_config(&cfg, &mut StdRng::seed_from_u64(9)).unwrap();

        assert_eq!(a.pairs.len(), 3);
        for (pa, pb) in a.pairs.iter().zip(&b.pairs) {
            assert!((pa.angle_offset - pb.angle_offset).abs() < EPS);
        }
    }

    #[test]
    fn scene_panels_differ_only_in_guide_circles() {
        let illusion = Illusion::with_offsets(2, vec![0.0, 0.0]).unwrap();
        let scene = illusion.scene();

        // 22 + 40 squares across the two pairs.
        assert_eq!(scene.without_guides.len(), 62);
        // One guide circle per pair on the right panel.
        assert_eq!(scene.with_guides.len(), 64);
        assert_eq!(scene.background, Color::GREY);

        let guides = scene
            .with_guides
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { color, .. } if *color == Color::BLUE))
            .count();
        assert_eq!(guides, 2);

        let guides_left = scene
            .without_guides
            .iter()
            .filter(|p| matches!(p, Primitive::Polyline { color, .. } if *color == Color::BLUE))
            .count();
        assert_eq!(guides_left, 0);
    }

    #[test]
    fn single_ring_end_to_end() {
        let illusion = Illusion::with_offsets(1, vec![0.0]).unwrap();

        assert_eq!(illusion.pairs.len(), 1);
        let pair = &illusion.pairs[0];
        assert_eq!(pair.count, 11);
        assert!((pair.radius - 11.0).abs() < EPS);
        assert_eq!(pair.squares.len(), 22);
        assert_eq!(illusion.square_count(), 22);

        // Side length 2 * 11 / 11 = 2 for every square.
        for sq in &pair.squares {
            assert!((sq.side - 2.0).abs() < EPS);
        }

        // The inner ring's first square sits at angle 0, i.e. (11, 0),
        // rotated by exactly the tangent tuning term.
        let first = &pair.squares[0];
        assert!((first.center - glam::Vec2::new(11.0, 0.0)).length() < EPS);
        assert!((first.rotation - 1.5 * PI / 11.0).abs() < EPS);
    }
}
