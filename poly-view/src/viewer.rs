//! Interactive polygon iterations viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the slider state and the
//! current [`GenerationParameters`], and implements [`eframe::App`] to draw
//! the nested polygons through a [`RenderSurface`] backed by egui shapes.

use eframe::App;
use poly_core::{
    GenerationError, GenerationParameters,
    config::{
        CORNER_RANGE, DEFAULT_CORNERS, DEFAULT_ITERATIONS, DEFAULT_REDUCE_PERCENT, ITERATION_RANGE,
        REDUCE_PERCENT_RANGE,
    },
    generator::turn_angle_deg,
    surface::{self, RenderSurface},
    types::{Point, Polygon, Rgb},
};

/// Widest the control panel may get, in points.
pub const CONTROL_PANEL_MAX_WIDTH: f32 = 200.0;
/// Smallest width and height of the drawing area, in points.
pub const MIN_DRAW_SIZE: f32 = 500.0;

/// Main application state for the interactive viewer.
///
/// The sliders edit plain integers. Whenever one of them changes, a new
/// [`GenerationParameters`] value is built from the triple and replaces the
/// previous one; the drawing code only ever reads that value. Every frame
/// regenerates the full polygon sequence, nothing is cached.
///
/// ### Fields
/// - `corners` - Corner slider value, in [`CORNER_RANGE`].
/// - `iterations` - Iteration slider value, in [`ITERATION_RANGE`].
/// - `reduce_percent` - Reduction slider value in percent, in [`REDUCE_PERCENT_RANGE`].
///
/// - `params` - Last accepted parameter set.
/// - `error` - Why the last control change or paint was rejected, if it was.
pub struct Viewer {
    corners: u32,
    iterations: u32,
    reduce_percent: u32,

    params: GenerationParameters,
    error: Option<GenerationError>,
}

/// A [`RenderSurface`] that turns each filled polygon into an egui shape.
///
/// Coordinates are screen points, so the polygons land directly inside
/// `rect` without any further transform.
struct ShapeSurface {
    rect: egui::Rect,
    shapes: Vec<egui::Shape>,
}

impl ShapeSurface {
    fn new(rect: egui::Rect) -> Self {
        Self {
            rect,
            shapes: Vec::new(),
        }
    }
}

impl RenderSurface for ShapeSurface {
    fn origin(&self) -> Point {
        Point::new(f64::from(self.rect.min.x), f64::from(self.rect.min.y))
    }

    fn size(&self) -> Point {
        Point::new(f64::from(self.rect.width()), f64::from(self.rect.height()))
    }

    fn fill_polygon(&mut self, polygon: &Polygon, fill: Rgb) {
        let points = polygon
            .vertices
            .iter()
            .map(|v| egui::pos2(v.x as f32, v.y as f32))
            .collect();

        self.shapes.push(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgb(fill.red, fill.green, fill.blue),
            egui::Stroke::new(1.0, egui::Color32::BLACK),
        ));
    }
}

impl Viewer {
    /// Creates a viewer with the sliders at their initial positions
    /// (4 corners, 20 iterations, 75 %).
    pub fn new() -> Self {
        Self {
            corners: DEFAULT_CORNERS,
            iterations: DEFAULT_ITERATIONS,
            reduce_percent: DEFAULT_REDUCE_PERCENT,
            params: GenerationParameters::default(),
            error: None,
        }
    }

    /// Rebuilds [`Viewer::params`] from the current slider values.
    ///
    /// On rejection the previous parameters are kept and the error is
    /// stored, which stops the central panel from drawing.
    fn apply_controls(&mut self) {
        match GenerationParameters::from_controls(self.corners, self.iterations, self.reduce_percent)
        {
            Ok(params) => {
                log::info!(
                    "parameters changed: corners={} iterations={} reduction={}",
                    params.corner_count,
                    params.iteration_count,
                    params.reduction_factor
                );
                self.params = params;
                self.error = None;
            }
            Err(err) => {
                log::warn!("control values rejected: {err}");
                self.error = Some(err);
            }
        }
    }

    /// Puts all sliders back to their initial positions.
    fn reset_controls(&mut self) {
        self.corners = DEFAULT_CORNERS;
        self.iterations = DEFAULT_ITERATIONS;
        self.reduce_percent = DEFAULT_REDUCE_PERCENT;
        self.apply_controls();
    }

    /// Generates the egui shapes for a drawing area.
    ///
    /// ### Returns
    /// - `Ok(shapes)` with one filled polygon per iteration, outermost first.
    /// - `Err` with the stored control error, or the generator's rejection.
    fn shapes_for(&self, rect: egui::Rect) -> Result<Vec<egui::Shape>, GenerationError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let mut surface = ShapeSurface::new(rect);
        surface::paint(&self.params, &mut surface)?;
        Ok(surface.shapes)
    }

    /// Builds the left-hand control panel with the three parameter sliders.
    fn ui_control_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("control_panel")
            .resizable(false)
            .max_width(CONTROL_PANEL_MAX_WIDTH)
            .show(ctx, |ui| {
                let mut changed = false;

                egui::Grid::new("controls_grid")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Corners");
                        changed |= ui
                            .add(egui::Slider::new(&mut self.corners, CORNER_RANGE))
                            .changed();
                        ui.end_row();

                        ui.label("Iters");
                        changed |= ui
                            .add(egui::Slider::new(&mut self.iterations, ITERATION_RANGE))
                            .changed();
                        ui.end_row();

                        ui.label("Reduce");
                        changed |= ui
                            .add(egui::Slider::new(&mut self.reduce_percent, REDUCE_PERCENT_RANGE))
                            .changed();
                        ui.end_row();
                    });

                if changed {
                    self.apply_controls();
                }

                ui.separator();
                if ui.button("Reset to defaults").clicked() {
                    self.reset_controls();
                }
            });
    }

    /// Builds the bottom status bar (polygon count, turn angle).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "turn = {:.2}°",
                    turn_angle_deg(self.params.reduction_factor)
                ));
                ui.label(format!("polygons = {}", self.params.iteration_count));
            });
        });
    }

    /// Builds the central panel and paints the polygon sequence into it.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let size = ui
                .available_size()
                .max(egui::vec2(MIN_DRAW_SIZE, MIN_DRAW_SIZE));
            let response = ui.allocate_response(size, egui::Sense::hover());
            let rect = response.rect;

            match self.shapes_for(rect) {
                Ok(shapes) => {
                    ui.painter_at(rect).extend(shapes);
                }
                Err(err) => {
                    if self.error.is_none() {
                        log::warn!("generation failed for {rect:?}: {err}");
                        self.error = Some(err.clone());
                    }
                    ui.painter_at(rect).text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        err.to_string(),
                        egui::FontId::proportional(14.0),
                        egui::Color32::RED,
                    );
                }
            }
        });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_control_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(200.0, 0.0), egui::vec2(500.0, 500.0))
    }

    fn path(shape: &egui::Shape) -> &egui::epaint::PathShape {
        match shape {
            egui::Shape::Path(path) => path,
            other => panic!("expected a path shape, got {other:?}"),
        }
    }

    #[test]
    fn new_viewer_starts_at_initial_controls() {
        let viewer = Viewer::new();
        assert_eq!(
            (viewer.corners, viewer.iterations, viewer.reduce_percent),
            (4, 20, 75)
        );
        assert_eq!(viewer.params, GenerationParameters::default());
        assert!(viewer.error.is_none());
    }

    #[test]
    fn apply_controls_replaces_parameters() {
        let mut viewer = Viewer::new();
        viewer.corners = 6;
        viewer.iterations = 50;
        viewer.reduce_percent = 10;

        viewer.apply_controls();

        assert_eq!(viewer.params.corner_count, 6);
        assert_eq!(viewer.params.iteration_count, 50);
        assert_eq!(viewer.params.reduction_factor, 0.1);
        assert!(viewer.error.is_none());
    }

    #[test]
    fn rejected_controls_keep_previous_parameters_and_block_drawing() {
        let mut viewer = Viewer::new();
        viewer.corners = 2;

        viewer.apply_controls();

        assert_eq!(viewer.params, GenerationParameters::default());
        let err = viewer.shapes_for(test_rect()).unwrap_err();
        assert_eq!(err.parameter(), "corner_count");
    }

    #[test]
    fn reset_controls_clears_error() {
        let mut viewer = Viewer::new();
        viewer.reduce_percent = 0;
        viewer.apply_controls();
        assert!(viewer.error.is_some());

        viewer.reset_controls();

        assert_eq!(viewer.reduce_percent, 75);
        assert!(viewer.error.is_none());
        assert!(viewer.shapes_for(test_rect()).is_ok());
    }

    #[test]
    fn shapes_cover_every_iteration_inside_rect() {
        let viewer = Viewer::new();
        let rect = test_rect();

        let shapes = viewer.shapes_for(rect).unwrap();
        assert_eq!(shapes.len(), 20);

        let outer = path(&shapes[0]);
        assert!(outer.closed);
        assert_eq!(outer.points.len(), 4);
        assert_eq!(outer.fill, egui::Color32::from_rgb(10, 0, 55));

        // The outer polygon is centered in the rect with radius = half width.
        let center = rect.center();
        for p in &outer.points {
            assert!(((*p - center).length() - 250.0).abs() < 1e-3);
        }

        // Later polygons are drawn inside earlier ones.
        let inner = path(&shapes[19]);
        assert!(inner.points.iter().all(|p| (*p - center).length() < 250.0));
    }

    #[test]
    fn shape_surface_reports_rect_geometry() {
        let surface = ShapeSurface::new(test_rect());
        assert_eq!(surface.origin(), Point::new(200.0, 0.0));
        assert_eq!(surface.size(), Point::new(500.0, 500.0));
    }
}
