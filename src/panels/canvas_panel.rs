use crate::app::SketchApp;

/// The drawing area. Captures pointer drags, feeds them to the stroke
/// recorder in canvas-local coordinates, and paints the surface.
pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let rect = response.rect;

        // Save rasterizes at the size the canvas had on screen.
        app.set_canvas_size(rect.size());

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                app.pointer_sample(pos - rect.min.to_vec2());
            }
        }
        if response.drag_stopped() {
            app.pointer_release();
        }

        app.surface().paint(&painter, rect);
    });
}
