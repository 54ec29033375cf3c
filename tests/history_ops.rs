use egui::{Color32, pos2};
use sketchpad::{History, Primitive, StrokeRecorder, Surface, Tool, ToolStyle};

// Helper to draw one pencil stroke through the given points.
fn draw_stroke(points: &[(f32, f32)], surface: &mut Surface, history: &mut History) {
    let mut recorder = StrokeRecorder::new();
    let mut style = ToolStyle::default();
    style.set_tool(Tool::Pencil);
    for &(x, y) in points {
        recorder.sample(pos2(x, y), &style, surface, history);
    }
    recorder.release();
}

#[test]
fn undo_hides_most_recent_primitive_first() {
    let mut surface = Surface::new();
    let mut history = History::new();
    draw_stroke(
        &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
        &mut surface,
        &mut history,
    );

    let ids: Vec<_> = history.undo_stack().to_vec();
    assert_eq!(ids.len(), 2);

    history.undo(&mut surface);
    assert!(!surface.is_visible(ids[1]));
    assert!(surface.is_visible(ids[0]));

    history.undo(&mut surface);
    assert!(!surface.is_visible(ids[0]));
    assert_eq!(surface.visible_count(), 0);
}

#[test]
fn redo_restores_in_reverse_undo_order() {
    let mut surface = Surface::new();
    let mut history = History::new();
    draw_stroke(
        &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
        &mut surface,
        &mut history,
    );
    let ids: Vec<_> = history.undo_stack().to_vec();

    history.undo(&mut surface);
    history.undo(&mut surface);

    // The most recently undone primitive comes back first.
    history.redo(&mut surface);
    assert!(surface.is_visible(ids[0]));
    assert!(!surface.is_visible(ids[1]));

    history.redo(&mut surface);
    assert!(surface.is_visible(ids[1]));
    assert_eq!(surface.visible_count(), 2);
}

#[test]
fn undo_on_empty_stack_is_a_silent_noop() {
    let mut surface = Surface::new();
    let mut history = History::new();

    history.undo(&mut surface);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(surface.is_empty());
}

#[test]
fn redo_on_empty_stack_is_a_silent_noop() {
    let mut surface = Surface::new();
    let mut history = History::new();
    surface.add(Primitive::dab(pos2(1.0, 1.0), 5.0, Color32::BLACK));

    history.redo(&mut surface);
    assert!(!history.can_redo());
    assert_eq!(surface.visible_count(), 1);
}

#[test]
fn extra_undo_does_not_over_pop() {
    let mut surface = Surface::new();
    let mut history = History::new();
    // One stroke of two primitives.
    draw_stroke(
        &[(0.0, 0.0), (10.0, 10.0), (20.0, 5.0)],
        &mut surface,
        &mut history,
    );
    assert_eq!(surface.visible_count(), 2);

    history.undo(&mut surface);
    history.undo(&mut surface);
    history.undo(&mut surface); // no-op, nothing left to undo
    assert_eq!(surface.visible_count(), 0);

    history.redo(&mut surface);
    history.redo(&mut surface);
    assert_eq!(surface.visible_count(), 2);
    assert!(!history.can_redo());
}

#[test]
fn new_primitive_invalidates_the_redo_stack() {
    let mut surface = Surface::new();
    let mut history = History::new();
    draw_stroke(&[(0.0, 0.0), (10.0, 0.0)], &mut surface, &mut history);

    history.undo(&mut surface);
    assert!(history.can_redo());

    // Drawing again makes the undone primitive unreachable.
    draw_stroke(&[(50.0, 50.0), (60.0, 60.0)], &mut surface, &mut history);
    assert!(!history.can_redo());

    history.redo(&mut surface);
    assert_eq!(surface.visible_count(), 1);
}

#[test]
fn clear_drops_surface_and_history_together() {
    let mut surface = Surface::new();
    let mut history = History::new();
    draw_stroke(
        &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
        &mut surface,
        &mut history,
    );
    history.undo(&mut surface);

    surface.clear();
    history.clear();

    assert!(surface.is_empty());
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    // Undo/redo after a clear stay no-ops instead of touching stale ids.
    history.undo(&mut surface);
    history.redo(&mut surface);
    assert!(surface.is_empty());
}

#[test]
fn an_id_never_sits_on_both_stacks() {
    let mut surface = Surface::new();
    let mut history = History::new();
    draw_stroke(
        &[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)],
        &mut surface,
        &mut history,
    );

    history.undo(&mut surface);
    for id in history.redo_stack() {
        assert!(!history.undo_stack().contains(id));
        assert!(!surface.is_visible(*id));
    }
    for id in history.undo_stack() {
        assert!(surface.is_visible(*id));
    }
}
