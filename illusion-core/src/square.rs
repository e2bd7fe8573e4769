use crate::primitive::{Color, Primitive};
use glam::{Mat2, Vec2};

/// A square outline with a fixed rotation about its own center.
///
/// The five vertices form a closed loop (the first corner is repeated
/// last) in SW, NW, NE, SE winding order. A non-positive side length is
/// degenerate but defined: the square collapses to a point or flips
/// inside out, and no error is raised.
#[derive(Clone, Debug)]
pub struct Square {
    pub side: f32,
    pub rotation: f32,
    pub color: Color,
    pub center: Vec2,
    pub stroke_width: f32,
    pub vertices: [Vec2; 5],
}

impl Square {
    pub fn new(side: f32, rotation: f32, color: Color, center: Vec2, stroke_width: f32) -> Self {
        let h = side / 2.0;
        let sw = Vec2::new(-h, -h);
        let nw = Vec2::new(-h, h);
        let ne = Vec2::new(h, h);
        let se = Vec2::new(h, -h);

        let rot = Mat2::from_angle(rotation);
        let vertices = [sw, nw, ne, se, sw].map(|corner| center + rot * corner);

        Self {
            side,
            rotation,
            color,
            center,
            stroke_width,
            vertices,
        }
    }

    /// Returns the square as a closed polyline carrying its color and
    /// stroke width.
    pub fn outline(&self) -> Primitive {
        Primitive::Polyline {
            points: self.vertices.to_vec(),
            color: self.color,
            stroke_width: self.stroke_width,
        }
    }
}
