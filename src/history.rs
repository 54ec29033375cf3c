use crate::primitive::PrimitiveId;
use crate::surface::Surface;

/// Linear undo/redo of primitive creation. The stacks hold arena indices
/// into the surface, never the primitives themselves; hiding and restoring
/// are explicit surface operations.
pub struct History {
    /// Ids of visible primitives, most recent last.
    undo_stack: Vec<PrimitiveId>,
    /// Ids of undone (hidden) primitives, most recently undone last.
    redo_stack: Vec<PrimitiveId>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record a freshly drawn primitive. Invalidates the redo stack: once a
    /// new primitive exists, the undone ones are no longer reachable.
    pub fn record(&mut self, id: PrimitiveId) {
        self.undo_stack.push(id);
        self.redo_stack.clear();
    }

    /// Hide the most recently drawn primitive. Silent no-op when there is
    /// nothing to undo.
    pub fn undo(&mut self, surface: &mut Surface) {
        if let Some(id) = self.undo_stack.pop() {
            surface.hide(id);
            self.redo_stack.push(id);
        }
    }

    /// Restore the most recently undone primitive, making its full geometry
    /// part of the next painted frame. Silent no-op when there is nothing to
    /// redo.
    pub fn redo(&mut self, surface: &mut Surface) {
        if let Some(id) = self.redo_stack.pop() {
            surface.restore(id);
            self.undo_stack.push(id);
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop both stacks. Paired with [`Surface::clear`] so no stale ids
    /// survive a canvas clear.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn undo_stack(&self) -> &[PrimitiveId] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[PrimitiveId] {
        &self.redo_stack
    }
}
