//! Frame display list.
//!
//! A demo's `draw` rebuilds the whole scene every invocation: the first
//! primitive is a full clear, everything after is replayed in order by the
//! renderer. Nothing is retained between frames, so there is no diffing and
//! no trail artifacts beyond what a demo draws on purpose.

use glam::Vec2;

/// Straight RGBA, components in [0, 1].
pub type Color = [f32; 4];

pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
    [r, g, b, 1.0]
}

pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
    [r, g, b, a]
}

pub const WHITE: Color = rgb(1.0, 1.0, 1.0);
/// The dark page background shared by the physics demos (#0c0a09).
pub const DARK_BACKGROUND: Color = rgb(0.047, 0.039, 0.035);

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Clear {
        color: Color,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    DashedLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        dash: f32,
        color: Color,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Circular arc from `start` to `end` radians, swept in whichever
    /// direction the signed difference points.
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
        color: Color,
    },
    /// Filled convex polygon.
    FillPolygon {
        points: Vec<Vec2>,
        color: Color,
    },
    /// Stroke-font text centered on `at`.
    Label {
        text: String,
        at: Vec2,
        size: f32,
        color: Color,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.primitives.push(Primitive::Clear { color });
    }

    pub fn rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.primitives.push(Primitive::Rect { origin, size, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.primitives.push(Primitive::Line { from, to, width, color });
    }

    pub fn dashed_line(&mut self, from: Vec2, to: Vec2, width: f32, dash: f32, color: Color) {
        self.primitives.push(Primitive::DashedLine {
            from,
            to,
            width,
            dash,
            color,
        });
    }

    pub fn polyline(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        self.primitives.push(Primitive::Polyline { points, width, color });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.primitives.push(Primitive::FillCircle { center, radius, color });
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.primitives.push(Primitive::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    pub fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, width: f32, color: Color) {
        self.primitives.push(Primitive::Arc {
            center,
            radius,
            start,
            end,
            width,
            color,
        });
    }

    pub fn fill_polygon(&mut self, points: Vec<Vec2>, color: Color) {
        self.primitives.push(Primitive::FillPolygon { points, color });
    }

    pub fn label(&mut self, text: impl Into<String>, at: Vec2, size: f32, color: Color) {
        self.primitives.push(Primitive::Label {
            text: text.into(),
            at,
            size,
            color,
        });
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Background color of the frame, from the leading clear.
    pub fn background(&self) -> Option<Color> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Clear { color } => Some(*color),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// Pick a label offset that keeps it clear of the geometry it annotates:
/// `above` when the anchored value falls before `center`, `below` otherwise.
pub fn flip_offset(value: f32, center: f32, above: f32, below: f32) -> f32 {
    if value < center {
        above
    } else {
        below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_comes_from_clear() {
        let mut scene = Scene::new();
        assert_eq!(scene.background(), None);
        scene.clear(DARK_BACKGROUND);
        scene.line(Vec2::ZERO, Vec2::ONE, 1.0, WHITE);
        assert_eq!(scene.background(), Some(DARK_BACKGROUND));
    }

    #[test]
    fn test_flip_offset_sides() {
        assert_eq!(flip_offset(10.0, 50.0, -25.0, 30.0), -25.0);
        assert_eq!(flip_offset(90.0, 50.0, -25.0, 30.0), 30.0);
    }
}
