use egui::Color32;

pub const MIN_STROKE_WIDTH: f32 = 1.0;
pub const MAX_STROKE_WIDTH: f32 = 30.0;
pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;

/// The active drawing mode.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tool {
    Brush,
    Pencil,
    Eraser,
}

impl Tool {
    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }
}

/// Current tool selection, color and stroke width. Owned by the app and
/// passed by reference into the stroke recorder on every sample; only the
/// toolbar mutates it.
#[derive(Debug, Clone, Copy)]
pub struct ToolStyle {
    tool: Tool,
    color: Color32,
    width: f32,
}

impl Default for ToolStyle {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: Color32::BLACK,
            width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ToolStyle {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
            self.tool = tool;
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the stroke width, clamped to [`MIN_STROKE_WIDTH`]..=[`MAX_STROKE_WIDTH`].
    pub fn set_width(&mut self, width: f32) {
        self.width = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
    }
}
