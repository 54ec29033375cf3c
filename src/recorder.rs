use egui::Pos2;

use crate::history::History;
use crate::primitive::{Primitive, PrimitiveId};
use crate::style::{Tool, ToolStyle};
use crate::surface::Surface;

/// Turns pointer-drag samples into primitives on the surface.
///
/// The first sample of a stroke only anchors the trail (a segment needs two
/// points); every later sample emits exactly one primitive and records its id
/// in the history. Releasing the pointer drops the trail so separate strokes
/// never get bridged.
pub struct StrokeRecorder {
    last_point: Option<Pos2>,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self { last_point: None }
    }

    /// Handle one pointer-move-while-pressed sample at `pos` (canvas-local).
    /// Returns the id of the emitted primitive, if any.
    pub fn sample(
        &mut self,
        pos: Pos2,
        style: &ToolStyle,
        surface: &mut Surface,
        history: &mut History,
    ) -> Option<PrimitiveId> {
        let Some(last) = self.last_point else {
            self.last_point = Some(pos);
            return None;
        };

        // The eraser draws with the background color instead of deleting.
        let primitive = match style.tool() {
            Tool::Brush => Primitive::dab(pos, style.width(), style.color()),
            Tool::Pencil => Primitive::segment(last, pos, style.width(), style.color(), false),
            Tool::Eraser => {
                Primitive::segment(last, pos, style.width(), surface.background(), true)
            }
        };

        let id = surface.add(primitive);
        history.record(id);
        self.last_point = Some(pos);
        Some(id)
    }

    /// Pointer button released: forget the trail. No other effect.
    pub fn release(&mut self) {
        self.last_point = None;
    }

    /// True while a stroke is in progress (at least one sample since the
    /// last release).
    pub fn is_mid_stroke(&self) -> bool {
        self.last_point.is_some()
    }
}
