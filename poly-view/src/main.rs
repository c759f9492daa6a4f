//! Application entry point for the polygon iterations viewer.
//!
//! This binary sets up logging and eframe/egui, then delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// The window opens at 800×500 titled `"PolygonIterations"`. Log output is
/// controlled through `RUST_LOG`.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PolygonIterations")
            .with_inner_size([800.0, 500.0])
            .with_min_inner_size([
                viewer::CONTROL_PANEL_MAX_WIDTH + viewer::MIN_DRAW_SIZE,
                viewer::MIN_DRAW_SIZE,
            ]),
        ..Default::default()
    };

    log::info!("starting PolygonIterations viewer");

    eframe::run_native(
        "PolygonIterations",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
