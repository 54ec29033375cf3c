use crate::app::SketchApp;
use crate::style::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, Tool};

/// Bottom toolbar: tool buttons, color picker, width slider and the
/// clear/save/undo/redo actions.
pub fn toolbar_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for tool in [Tool::Brush, Tool::Pencil, Tool::Eraser] {
                let is_selected = app.style().tool() == tool;
                if ui.selectable_label(is_selected, tool.name()).clicked() {
                    app.style_mut().set_tool(tool);
                }
            }

            ui.separator();

            ui.label("Color:");
            let mut color = app.style().color();
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            );
            app.style_mut().set_color(color);

            ui.label("Width:");
            let mut width = app.style().width();
            ui.add(egui::Slider::new(
                &mut width,
                MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH,
            ));
            app.style_mut().set_width(width);

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }
            if ui.button("Save").clicked() {
                app.save_drawing();
            }

            let can_undo = app.history().can_undo();
            let can_redo = app.history().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.redo();
            }
        });
    });
}
