//! Two-panel illusion viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the precomputed scene and
//! implements [`eframe::App`] to paint it: the left panel shows the
//! square rings without guide circles (they read as polygons), the right
//! panel shows the same rings with guide circles (they read as circles).

use eframe::App;
use glam::Vec2;
use illusion_core::{
    config::Config,
    error::Error,
    illusion::{Illusion, Scene},
    primitive::{Color, Primitive},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Main application state for the illusion viewer.
///
/// [`Viewer`] glues together:
/// - The construction surface: [`Config`] plus a seed for the offset draw.
/// - The precomputed [`Scene`] produced by [`Illusion::scene`].
/// - eframe/egui callbacks that fit and paint the two panels.
///
/// The scene is rebuilt only when the configuration changes; every frame
/// is a read-only pass over already-computed geometry.
///
/// ### Fields
/// - `cfg` - Construction parameters (ring count; offsets stay empty in
///   the viewer, so they are drawn from the seeded generator).
/// - `seed` - Seed for the offset draw; the same seed reproduces the
///   same scene.
/// - `scene` - The two rendered panel variants plus the backdrop color.
/// - `square_count` - Total squares in the scene (for the status bar).
/// - `hover_world` - World position under the cursor from the last
///   painted frame (for the status bar readout).
pub struct Viewer {
    cfg: Config,
    seed: u64,
    scene: Scene,
    square_count: usize,
    hover_world: Option<Vec2>,
}

impl Viewer {
    /// Creates a viewer with the default configuration (4 ring pairs,
    /// randomly drawn offsets from seed 0).
    pub fn new() -> Result<Self, Error> {
        let cfg = Config::default();
        let seed = 0;

        let illusion = Illusion::from_config(&cfg, &mut StdRng::seed_from_u64(seed))?;
        let square_count = illusion.square_count();
        let scene = illusion.scene();

        log::info!(
            "built scene: {} ring pairs, {} squares, seed {}",
            illusion.pairs.len(),
            square_count,
            seed
        );

        Ok(Self {
            cfg,
            seed,
            scene,
            square_count,
            hover_world: None,
        })
    }

    /// Rebuilds the scene from the current configuration and seed.
    ///
    /// On failure the previous scene is kept and a warning is logged;
    /// the UI constrains the configuration, so this only happens if the
    /// config is edited to an inconsistent state programmatically.
    fn rebuild(&mut self) {
        match Illusion::from_config(&self.cfg, &mut StdRng::seed_from_u64(self.seed)) {
            Ok(illusion) => {
                self.square_count = illusion.square_count();
                self.scene = illusion.scene();
                log::info!(
                    "rebuilt scene: {} ring pairs, {} squares, seed {}",
                    illusion.pairs.len(),
                    self.square_count,
                    self.seed
                );
            }
            Err(err) => log::warn!("keeping previous scene: {}", err),
        }
    }

    /// Largest absolute world coordinate touched by the primitives, with
    /// a little breathing room so strokes at the rim stay inside the
    /// panel.
    fn world_half_extent(primitives: &[Primitive]) -> f32 {
        let mut max = 0.0f32;
        for prim in primitives {
            let points = match prim {
                Primitive::Polyline { points, .. } => points,
                Primitive::ScatterPoints { points } => points,
            };
            for p in points {
                max = max.max(p.x.abs()).max(p.y.abs());
            }
        }
        max * 1.05
    }

    /// Uniform world-to-screen scale that fits the primitives' bounding
    /// square into the smaller dimension of `rect`.
    fn fit_scale(rect: egui::Rect, primitives: &[Primitive]) -> f32 {
        let half_extent = Self::world_half_extent(primitives).max(1.0);
        (rect.width().min(rect.height()) * 0.5) / half_extent
    }

    /// Converts a world-space position to screen-space within a panel.
    ///
    /// World coordinates are scaled uniformly (equal aspect) and centered
    /// inside `rect`. The y-axis is flipped so that positive y goes up in
    /// world space.
    fn world_to_screen(p: Vec2, rect: egui::Rect, scale: f32) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(center.x + p.x * scale, center.y - p.y * scale)
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::world_to_screen`] (up to floating
    /// point rounding), using the same `rect` center and `scale`.
    fn screen_to_world(p: egui::Pos2, rect: egui::Rect, scale: f32) -> Vec2 {
        let center = rect.center();
        Vec2::new((p.x - center.x) / scale, (center.y - p.y) / scale)
    }

    fn color32(c: Color) -> egui::Color32 {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }

    /// Paints one panel: backdrop first, then every primitive in order.
    ///
    /// The scale is fitted so the scene's bounding square fills the
    /// smaller panel dimension; both panels show the same geometry, so
    /// they end up with the same scale.
    fn paint_panel(
        painter: &egui::Painter,
        rect: egui::Rect,
        scale: f32,
        primitives: &[Primitive],
        background: Color,
    ) {
        painter.rect_filled(rect, egui::CornerRadius::ZERO, Self::color32(background));

        for prim in primitives {
            match prim {
                Primitive::Polyline {
                    points,
                    color,
                    stroke_width,
                } => {
                    let pts: Vec<egui::Pos2> = points
                        .iter()
                        .map(|&p| Self::world_to_screen(p, rect, scale))
                        .collect();
                    painter.add(egui::Shape::line(
                        pts,
                        egui::Stroke::new(*stroke_width, Self::color32(*color)),
                    ));
                }
                Primitive::ScatterPoints { points } => {
                    for &p in points {
                        painter.circle_filled(
                            Self::world_to_screen(p, rect, scale),
                            2.0,
                            egui::Color32::DARK_BLUE,
                        );
                    }
                }
            }
        }
    }

    /// Builds the top panel UI (ring count, seed, regenerate).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("ring pairs:");
                let rings = ui.add(
                    egui::DragValue::new(&mut self.cfg.ring_count)
                        .range(1..=12)
                        .speed(0.1),
                );

                ui.label("seed:");
                let seed = ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));

                if rings.changed() || seed.changed() {
                    self.rebuild();
                }

                if ui.button("Regenerate").clicked() {
                    self.seed = self.seed.wrapping_add(1);
                    self.rebuild();
                }
            });
        });
    }

    /// Builds the bottom status bar (pair count, square count, seed).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("seed = {}", self.seed));
                ui.separator();
                ui.label(format!("ring pairs = {}", self.cfg.ring_count));
                ui.label(format!("squares = {}", self.square_count));
                if let Some(p) = self.hover_world {
                    ui.separator();
                    ui.label(format!("cursor = ({:.1}, {:.1})", p.x, p.y));
                }
            });
        });
    }

    /// Builds the central panel with the two side-by-side scene variants.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            let mid_x = rect.center().x;
            let left =
                egui::Rect::from_min_max(rect.min, egui::pos2(mid_x, rect.max.y)).shrink(4.0);
            let right =
                egui::Rect::from_min_max(egui::pos2(mid_x, rect.min.y), rect.max).shrink(4.0);

            let left_scale = Self::fit_scale(left, &self.scene.without_guides);
            let right_scale = Self::fit_scale(right, &self.scene.with_guides);

            Self::paint_panel(
                &painter,
                left,
                left_scale,
                &self.scene.without_guides,
                self.scene.background,
            );
            Self::paint_panel(
                &painter,
                right,
                right_scale,
                &self.scene.with_guides,
                self.scene.background,
            );

            // World position under the cursor, shown in the status bar.
            self.hover_world = response.hover_pos().map(|p| {
                if p.x < mid_x {
                    Self::screen_to_world(p, left, left_scale)
                } else {
                    Self::screen_to_world(p, right, right_scale)
                }
            });
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
