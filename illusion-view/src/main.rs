//! Application entry point for the square-ring illusion viewer.
//!
//! This binary sets up eframe/egui and delegates all layout and painting
//! to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// The illusion scene is built once during startup; the window titled
/// `"Square Ring Illusion"` then displays it in two side-by-side panels.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop,
///   or the initial scene cannot be constructed.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Square Ring Illusion",
        options,
        Box::new(|_cc| {
            // Construct the root app state with a freshly built scene.
            Ok(Box::new(Viewer::new()?))
        }),
    )
}
