use crate::error::Error;
use crate::primitive::Primitive;
use glam::Vec2;
use std::f32::consts::PI;

/// `count` points evenly spaced on a circle, with an angular phase shift.
///
/// The angles start at `phase_offset * π / count` and step by
/// `2π / count`, covering one full turn. `angles` and `dots` are
/// index-aligned: `dots[i]` lies on the circle at `angles[i]`.
#[derive(Clone, Debug)]
pub struct DottedCircle {
    pub center: Vec2,
    pub radius: f32,
    pub count: usize,
    pub phase_offset: f32,
    pub angles: Vec<f32>,
    pub dots: Vec<Vec2>,
}

impl DottedCircle {
    /// Builds the ring of dots.
    ///
    /// ### Parameters
    /// - `center` - Center of the circle.
    /// - `radius` - Circle radius. Not validated; zero or negative radii
    ///   yield degenerate but defined geometry.
    /// - `count` - Number of dots. Must be positive, since the angular
    ///   step is `2π / count`.
    /// - `phase_offset` - Angular shift in units of `π / count`; a value
    ///   of `1.0` shifts all dots by exactly half a step.
    ///
    /// ### Returns
    /// The constructed ring, or [`Error::InvalidParameter`] when
    /// `count == 0`.
    pub fn new(center: Vec2, radius: f32, count: usize, phase_offset: f32) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidParameter(
                "dotted circle needs at least one dot".into(),
            ));
        }

        let start = phase_offset * PI / count as f32;
        let step = 2.0 * PI / count as f32;

        let angles: Vec<f32> = (0..count).map(|i| start + i as f32 * step).collect();
        let dots = angles
            .iter()
            .map(|&a| center + radius * Vec2::new(a.cos(), a.sin()))
            .collect();

        Ok(Self {
            center,
            radius,
            count,
            phase_offset,
            angles,
            dots,
        })
    }

    /// Returns the dots as a scatter primitive. This is a standalone
    /// visual aid; the composed illusion never draws it.
    pub fn scatter(&self) -> Primitive {
        Primitive::ScatterPoints {
            points: self.dots.clone(),
        }
    }
}
