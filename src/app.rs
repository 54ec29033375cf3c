use egui::{Pos2, Vec2};

use crate::export;
use crate::history::History;
use crate::panels;
use crate::recorder::StrokeRecorder;
use crate::style::ToolStyle;
use crate::surface::Surface;

/// The eframe application: owns the surface, history, recorder and tool
/// style, and wires pointer/toolbar events into them. All mutation happens on
/// the UI thread inside [`eframe::App::update`].
pub struct SketchApp {
    surface: Surface,
    history: History,
    recorder: StrokeRecorder,
    style: ToolStyle,
    /// Canvas size as rendered last frame; Save rasterizes at this size.
    canvas_size: Vec2,
    /// Pending save failure shown to the user until dismissed.
    last_error: Option<String>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            surface: Surface::new(),
            history: History::new(),
            recorder: StrokeRecorder::new(),
            style: ToolStyle::default(),
            canvas_size: Vec2::new(800.0, 600.0),
            last_error: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn style(&self) -> &ToolStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ToolStyle {
        &mut self.style
    }

    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
    }

    /// One pointer-drag sample in canvas-local coordinates.
    pub fn pointer_sample(&mut self, pos: Pos2) {
        self.recorder
            .sample(pos, &self.style, &mut self.surface, &mut self.history);
    }

    pub fn pointer_release(&mut self) {
        self.recorder.release();
    }

    pub fn undo(&mut self) {
        self.history.undo(&mut self.surface);
    }

    pub fn redo(&mut self) {
        self.history.redo(&mut self.surface);
    }

    /// Remove every primitive and drop the history with it, so no stale ids
    /// survive.
    pub fn clear_canvas(&mut self) {
        log::info!(
            "Clearing canvas ({} primitives)",
            self.surface.visible_count()
        );
        self.surface.clear();
        self.history.clear();
        self.recorder.release();
    }

    /// Ask for a destination and write the canvas as a PNG. Cancelling the
    /// dialog is a silent no-op; a write failure is shown to the user and
    /// leaves the drawing state untouched.
    pub fn save_drawing(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save drawing")
            .add_filter("PNG image", &["png"])
            .set_file_name("drawing.png")
            .save_file()
        else {
            log::info!("Save cancelled");
            return;
        };

        let width = self.canvas_size.x.round().max(1.0) as u32;
        let height = self.canvas_size.y.round().max(1.0) as u32;
        if let Err(err) = export::save_png(&self.surface, width, height, &path) {
            log::error!("Save failed: {err}");
            self.last_error = Some(err.to_string());
        }
    }

    fn show_error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.last_error.clone() else {
            return;
        };
        egui::Window::new("Save failed")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.last_error = None;
                }
            });
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar_panel(self, ctx);
        panels::canvas_panel(self, ctx);
        self.show_error_window(ctx);
    }
}
