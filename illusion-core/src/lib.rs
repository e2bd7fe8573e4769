//! Core geometry for the concentric square-ring optical illusion.
//!
//! Main components:
//! - [`square`] — rotated square outlines.
//! - [`dotted_circle`] — evenly spaced points on a circle.
//! - [`ring_pair`] — two interleaved dot rings with one square per dot.
//! - [`illusion`] — concentric ring pairs and the two-panel scene.
//! - [`primitive`] — backend-agnostic renderable primitives.
//! - [`config`] — construction parameters for the illusion.
//! - [`error`] — error type for invalid construction parameters.

pub mod config;
pub mod dotted_circle;
pub mod error;
pub mod illusion;
pub mod primitive;
pub mod ring_pair;
pub mod square;
