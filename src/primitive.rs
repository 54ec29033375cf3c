use egui::{Color32, Pos2, Rect};

/// Arena index into the surface's slot vector. Handed out by
/// [`crate::surface::Surface::add`] and stored by the history stacks.
pub type PrimitiveId = usize;

/// Geometry of a single rendered drawing object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled circle left by one brush sample.
    Dab { center: Pos2, radius: f32 },
    /// Straight segment between two consecutive pointer samples.
    /// Segments are always drawn with round caps; `smoothed` marks the
    /// anti-aliased variant the eraser produces.
    Segment { from: Pos2, to: Pos2, smoothed: bool },
}

/// One discrete drawing object owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub color: Color32,
    pub width: f32,
}

impl Primitive {
    pub fn dab(center: Pos2, radius: f32, color: Color32) -> Self {
        Self {
            shape: Shape::Dab { center, radius },
            color,
            width: radius,
        }
    }

    pub fn segment(from: Pos2, to: Pos2, width: f32, color: Color32, smoothed: bool) -> Self {
        Self {
            shape: Shape::Segment { from, to, smoothed },
            color,
            width,
        }
    }

    /// Bounding rectangle including the stroke width / dab radius.
    pub fn rect(&self) -> Rect {
        match self.shape {
            Shape::Dab { center, radius } => {
                Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0))
            }
            Shape::Segment { from, to, .. } => {
                Rect::from_two_pos(from, to).expand(self.width / 2.0)
            }
        }
    }
}

/// Shortest distance from `pos` to the segment `a`..`b`.
pub fn distance_to_segment(pos: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq <= f32::EPSILON {
        return (pos - a).length();
    }
    let t = ((pos - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (pos - (a + ab * t)).length()
}
