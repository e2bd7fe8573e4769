use glam::Vec2;

/// Solid RGB color attached to renderable primitives.
///
/// The core stays backend-agnostic; a rendering frontend maps this to
/// whatever color type it paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GREY: Color = Color::new(128, 128, 128);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single renderable item handed to the rendering frontend.
///
/// Geometry is expressed in world coordinates; stroke widths are in
/// display units and are not scaled with the scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// An open or closed sequence of line segments.
    Polyline {
        points: Vec<Vec2>,
        color: Color,
        stroke_width: f32,
    },
    /// Loose points, drawn as small dots. Only used by standalone ring
    /// visualization, never by the composed illusion scene.
    ScatterPoints { points: Vec<Vec2> },
}
