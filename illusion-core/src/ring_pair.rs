//! A pair of interleaved dot rings with one rotated square per dot.
//!
//! This is the unit of the illusion: two [`DottedCircle`]s share a radius
//! but are phase-shifted by half a step, and every dot carries a square
//! rotated so its edges track the ring tangent. Without the guide circle
//! the squares read as a polygon; with it they read as a circle.

use crate::dotted_circle::DottedCircle;
use crate::error::Error;
use crate::primitive::{Color, Primitive};
use crate::square::Square;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Number of sample points on the guide circle.
const GUIDE_SAMPLES: usize = 1000;

/// Stroke width for square outlines.
const SQUARE_STROKE: f32 = 2.0;

/// Stroke width for the guide circle.
const GUIDE_STROKE: f32 = 1.0;

/// Two interleaved rings of squares at a shared radius, centered at the
/// origin.
///
/// `squares` holds `2 * count` entries in interleaved insertion order:
/// even indices sit on the inner (phase 0) ring with `color_a`, odd
/// indices on the outer (phase 1) ring with `color_b`. The order is only
/// significant for color layering when rendered.
#[derive(Clone, Debug)]
pub struct SquareRingPair {
    pub count: usize,
    pub radius: f32,
    pub angle_offset: f32,
    pub inner: DottedCircle,
    pub outer: DottedCircle,
    pub squares: Vec<Square>,
}

impl SquareRingPair {
    /// Builds the ring pair and all of its squares.
    ///
    /// Each square has side `2 * radius / count`, so adjacent squares
    /// approximately tile the circumference, and rotation
    /// `angle + 1.5π / count + angle_offset` where `angle` is its own
    /// ring dot's generating angle. The `1.5π / count` term is tuned so
    /// the square edges align with the ring tangent instead of the
    /// radius; change it and the illusion falls apart.
    ///
    /// ### Parameters
    /// - `count` - Squares per ring (the pair holds twice as many).
    /// - `radius` - Shared radius of both rings.
    /// - `color_a` - Fill color of the inner (phase 0) ring's squares.
    /// - `color_b` - Fill color of the outer (phase 1) ring's squares.
    /// - `angle_offset` - Extra rotation applied to every square.
    ///
    /// ### Returns
    /// The constructed pair, or [`Error::InvalidParameter`] when
    /// `count == 0`.
    pub fn new(
        count: usize,
        radius: f32,
        color_a: Color,
        color_b: Color,
        angle_offset: f32,
    ) -> Result<Self, Error> {
        let inner = DottedCircle::new(Vec2::ZERO, radius, count, 0.0)?;
        let outer = DottedCircle::new(Vec2::ZERO, radius, count, 1.0)?;

        let side = 2.0 * radius / count as f32;
        let tangent_align = 1.5 * PI / count as f32;

        let mut squares = Vec::with_capacity(2 * count);
        for i in 0..count {
            squares.push(Square::new(
                side,
                inner.angles[i] + tangent_align + angle_offset,
                color_a,
                inner.dots[i],
                SQUARE_STROKE,
            ));
            squares.push(Square::new(
                side,
                outer.angles[i] + tangent_align + angle_offset,
                color_b,
                outer.dots[i],
                SQUARE_STROKE,
            ));
        }

        Ok(Self {
            count,
            radius,
            angle_offset,
            inner,
            outer,
            squares,
        })
    }

    /// Renders the pair as a list of primitives.
    ///
    /// Squares are emitted in insertion order (inner/outer interleaved
    /// per index). When `with_guide_circle` is set, a thin blue circle
    /// at the shared radius is appended on top, revealing the circular
    /// arrangement.
    pub fn render(&self, with_guide_circle: bool) -> Vec<Primitive> {
        let mut primitives: Vec<Primitive> = self.squares.iter().map(Square::outline).collect();
        if with_guide_circle {
            primitives.push(self.guide_circle());
        }
        primitives
    }

    fn guide_circle(&self) -> Primitive {
        let points = (0..GUIDE_SAMPLES)
            .map(|i| {
                let t = i as f32 / (GUIDE_SAMPLES - 1) as f32 * TAU;
                self.radius * Vec2::new(t.cos(), t.sin())
            })
            .collect();

        Primitive::Polyline {
            points,
            color: Color::BLUE,
            stroke_width: GUIDE_STROKE,
        }
    }
}
