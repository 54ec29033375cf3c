use egui::{Color32, Painter, Rect, Stroke as EguiStroke};

use crate::primitive::{Primitive, PrimitiveId, Shape};

/// The drawing canvas model. Owns every primitive in an arena whose indices
/// are the [`PrimitiveId`]s handed to the history stacks. Undo hides a slot,
/// redo shows it again; since painting walks the visible slots every frame,
/// restoring a slot genuinely re-renders its full geometry.
pub struct Surface {
    slots: Vec<Slot>,
    background: Color32,
}

struct Slot {
    primitive: Primitive,
    visible: bool,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            background: Color32::WHITE,
        }
    }

    /// The canvas background color, which is also what the eraser paints with.
    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Add a primitive and return its id.
    pub fn add(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = self.slots.len();
        self.slots.push(Slot {
            primitive,
            visible: true,
        });
        id
    }

    /// Hide the primitive with the given id. Dangling ids are a no-op.
    pub fn hide(&mut self, id: PrimitiveId) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.visible = false;
        }
    }

    /// Make the primitive with the given id visible again, so its geometry is
    /// part of the next painted frame. Dangling ids are a no-op.
    pub fn restore(&mut self, id: PrimitiveId) {
        if let Some(slot) = self.slots.get_mut(id) {
            slot.visible = true;
        }
    }

    /// Remove every primitive. Callers are expected to clear the history
    /// stacks alongside, so no stale ids survive.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.slots.get(id).map(|slot| &slot.primitive)
    }

    pub fn is_visible(&self, id: PrimitiveId) -> bool {
        self.slots.get(id).is_some_and(|slot| slot.visible)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.visible).count()
    }

    /// Visible primitives in insertion order.
    pub fn iter_visible(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.visible)
            .map(|(id, slot)| (id, &slot.primitive))
    }

    /// Paint the background and every visible primitive into `rect`.
    /// Primitives are stored in canvas-local coordinates; `rect.min` is the
    /// canvas origin on screen.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.background);

        let origin = rect.min.to_vec2();
        for (_, primitive) in self.iter_visible() {
            match primitive.shape {
                Shape::Dab { center, radius } => {
                    painter.circle_filled(center + origin, radius, primitive.color);
                }
                Shape::Segment { from, to, .. } => {
                    let (from, to) = (from + origin, to + origin);
                    painter.line_segment(
                        [from, to],
                        EguiStroke::new(primitive.width, primitive.color),
                    );
                    // egui segments are butt-capped; round the ends ourselves.
                    let cap = primitive.width / 2.0;
                    painter.circle_filled(from, cap, primitive.color);
                    painter.circle_filled(to, cap, primitive.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn hide_and_restore_toggle_visibility() {
        let mut surface = Surface::new();
        let id = surface.add(Primitive::dab(pos2(1.0, 1.0), 5.0, Color32::BLACK));
        assert!(surface.is_visible(id));

        surface.hide(id);
        assert!(!surface.is_visible(id));
        assert_eq!(surface.visible_count(), 0);

        surface.restore(id);
        assert!(surface.is_visible(id));
        assert_eq!(surface.visible_count(), 1);
    }

    #[test]
    fn dangling_ids_are_ignored() {
        let mut surface = Surface::new();
        surface.hide(99);
        surface.restore(99);
        assert!(surface.is_empty());
        assert!(surface.get(99).is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let mut surface = Surface::new();
        surface.add(Primitive::dab(pos2(0.0, 0.0), 2.0, Color32::RED));
        surface.add(Primitive::segment(
            pos2(0.0, 0.0),
            pos2(5.0, 5.0),
            2.0,
            Color32::RED,
            false,
        ));
        surface.clear();
        assert!(surface.is_empty());
        assert_eq!(surface.visible_count(), 0);
    }
}
