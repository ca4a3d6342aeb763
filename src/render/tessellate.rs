//! Display-list tessellation.
//!
//! Flattens a [`Scene`] into one triangle list in CSS pixel coordinates.
//! Strokes become quads, circles become fans or rings sized by radius, text
//! goes through the stroke font. The clear primitive contributes no geometry;
//! the renderer reads it off the scene separately.

use crate::render::text;
use crate::scene::{Color, Primitive, Scene};
use glam::Vec2;

/// Stroke width used for label segments, scaled with text size.
const LABEL_STROKE: f32 = 0.09;
/// Curve flattening bounds.
const MIN_CIRCLE_SEGMENTS: usize = 12;
const MAX_CIRCLE_SEGMENTS: usize = 96;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    fn new(position: Vec2, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            color,
        }
    }
}

/// Segment count for a circle or arc of the given radius. Coarse for small
/// markers, capped so huge guide circles stay cheap.
fn circle_segments(radius: f32) -> usize {
    ((radius.abs() * 0.75) as usize).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

fn push_triangle(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: Color) {
    out.push(Vertex::new(a, color));
    out.push(Vertex::new(b, color));
    out.push(Vertex::new(c, color));
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
    push_triangle(out, a, b, c, color);
    push_triangle(out, a, c, d, color);
}

/// Stroke one segment as a quad. Zero-length segments are dropped.
fn push_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: Color) {
    let direction = to - from;
    let length = direction.length();
    if length <= f32::EPSILON {
        return;
    }
    let normal = Vec2::new(-direction.y, direction.x) / length * (width * 0.5);
    push_quad(
        out,
        from + normal,
        to + normal,
        to - normal,
        from - normal,
        color,
    );
}

fn push_dashed_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, dash: f32, color: Color) {
    let length = from.distance(to);
    if length <= f32::EPSILON || dash <= 0.0 {
        push_line(out, from, to, width, color);
        return;
    }
    let direction = (to - from) / length;
    let mut travelled = 0.0;
    while travelled < length {
        let end = (travelled + dash).min(length);
        push_line(
            out,
            from + direction * travelled,
            from + direction * end,
            width,
            color,
        );
        travelled += dash * 2.0;
    }
}

fn push_polyline(out: &mut Vec<Vertex>, points: &[Vec2], width: f32, color: Color) {
    for pair in points.windows(2) {
        push_line(out, pair[0], pair[1], width, color);
    }
}

fn push_fill_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Color) {
    let segments = circle_segments(radius);
    for i in 0..segments {
        let a0 = i as f32 / segments as f32 * std::f32::consts::TAU;
        let a1 = (i + 1) as f32 / segments as f32 * std::f32::consts::TAU;
        push_triangle(
            out,
            center,
            center + Vec2::from_angle(a0) * radius,
            center + Vec2::from_angle(a1) * radius,
            color,
        );
    }
}

fn push_arc(out: &mut Vec<Vertex>, center: Vec2, radius: f32, start: f32, end: f32, width: f32, color: Color) {
    let sweep = end - start;
    let segments = (circle_segments(radius) as f32 * sweep.abs() / std::f32::consts::TAU)
        .ceil()
        .max(1.0) as usize;
    for i in 0..segments {
        let a0 = start + sweep * i as f32 / segments as f32;
        let a1 = start + sweep * (i + 1) as f32 / segments as f32;
        push_line(
            out,
            center + Vec2::from_angle(a0) * radius,
            center + Vec2::from_angle(a1) * radius,
            width,
            color,
        );
    }
}

fn push_fill_polygon(out: &mut Vec<Vertex>, points: &[Vec2], color: Color) {
    // Fan triangulation; callers only pass convex polygons.
    for i in 1..points.len().saturating_sub(1) {
        push_triangle(out, points[0], points[i], points[i + 1], color);
    }
}

fn push_label(out: &mut Vec<Vertex>, text: &str, at: Vec2, size: f32, color: Color) {
    let stroke = (size * LABEL_STROKE).max(1.0);
    for (from, to) in text::layout(text, at, size) {
        push_line(out, from, to, stroke, color);
    }
}

/// Flatten every primitive in draw order into one triangle list.
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for primitive in scene.primitives() {
        match primitive {
            Primitive::Clear { .. } => {}
            Primitive::Rect { origin, size, color } => {
                push_quad(
                    &mut vertices,
                    *origin,
                    *origin + Vec2::new(size.x, 0.0),
                    *origin + *size,
                    *origin + Vec2::new(0.0, size.y),
                    *color,
                );
            }
            Primitive::Line { from, to, width, color } => {
                push_line(&mut vertices, *from, *to, *width, *color);
            }
            Primitive::DashedLine { from, to, width, dash, color } => {
                push_dashed_line(&mut vertices, *from, *to, *width, *dash, *color);
            }
            Primitive::Polyline { points, width, color } => {
                push_polyline(&mut vertices, points, *width, *color);
            }
            Primitive::FillCircle { center, radius, color } => {
                push_fill_circle(&mut vertices, *center, *radius, *color);
            }
            Primitive::StrokeCircle { center, radius, width, color } => {
                push_arc(
                    &mut vertices,
                    *center,
                    *radius,
                    0.0,
                    std::f32::consts::TAU,
                    *width,
                    *color,
                );
            }
            Primitive::Arc { center, radius, start, end, width, color } => {
                push_arc(&mut vertices, *center, *radius, *start, *end, *width, *color);
            }
            Primitive::FillPolygon { points, color } => {
                push_fill_polygon(&mut vertices, points, *color);
            }
            Primitive::Label { text, at, size, color } => {
                push_label(&mut vertices, text, *at, *size, *color);
            }
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DARK_BACKGROUND, WHITE};

    #[test]
    fn test_clear_produces_no_geometry() {
        let mut scene = Scene::new();
        scene.clear(DARK_BACKGROUND);
        assert!(tessellate(&scene).is_empty());
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let mut scene = Scene::new();
        scene.rect(Vec2::ZERO, Vec2::new(10.0, 5.0), WHITE);
        assert_eq!(tessellate(&scene).len(), 6);
    }

    #[test]
    fn test_line_is_one_quad() {
        let mut scene = Scene::new();
        scene.line(Vec2::ZERO, Vec2::new(100.0, 0.0), 2.0, WHITE);
        let vertices = tessellate(&scene);
        assert_eq!(vertices.len(), 6);
        // Horizontal stroke of width 2 spans y in [-1, 1].
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.0).abs() < 1e-5));
    }

    #[test]
    fn test_zero_length_line_is_dropped() {
        let mut scene = Scene::new();
        scene.line(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0), 2.0, WHITE);
        assert!(tessellate(&scene).is_empty());
    }

    #[test]
    fn test_dashed_line_alternates_gaps() {
        let mut scene = Scene::new();
        scene.dashed_line(Vec2::ZERO, Vec2::new(40.0, 0.0), 1.0, 5.0, WHITE);
        // Dashes at [0,5), [10,15), [20,25), [30,35): four quads.
        assert_eq!(tessellate(&scene).len(), 4 * 6);
    }

    #[test]
    fn test_polyline_quads_per_segment() {
        let mut scene = Scene::new();
        let points = vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        scene.polyline(points, 1.0, WHITE);
        assert_eq!(tessellate(&scene).len(), 2 * 6);
    }

    #[test]
    fn test_fill_polygon_fans_from_first_point() {
        let mut scene = Scene::new();
        let square = vec![
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        scene.fill_polygon(square, WHITE);
        assert_eq!(tessellate(&scene).len(), 2 * 3);
    }

    #[test]
    fn test_circle_segment_count_scales_with_radius() {
        assert_eq!(circle_segments(1.0), MIN_CIRCLE_SEGMENTS);
        assert_eq!(circle_segments(10_000.0), MAX_CIRCLE_SEGMENTS);
        let small = circle_segments(30.0);
        let large = circle_segments(100.0);
        assert!(large > small);
    }

    #[test]
    fn test_vertices_carry_color() {
        let mut scene = Scene::new();
        scene.fill_circle(Vec2::ZERO, 5.0, [0.2, 0.4, 0.6, 0.8]);
        let vertices = tessellate(&scene);
        assert!(!vertices.is_empty());
        assert!(vertices.iter().all(|v| v.color == [0.2, 0.4, 0.6, 0.8]));
    }
}
