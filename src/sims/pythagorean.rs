//! Pythagorean theorem: a right triangle with squares on all three sides.
//!
//! Vertex A slides vertically and vertex B horizontally; the right-angle
//! vertex C stays at `(A.x, B.y)`, so the legs stay axis-aligned. Drags are
//! clamped so the triangle never degenerates.

use crate::controls::ControlSet;
use crate::drag::{Draggable, HitShape};
use crate::scene::{rgb, rgba, Color, Scene, WHITE};
use crate::simulation::Simulation;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const VERTEX_A: u32 = 0;
const VERTEX_B: u32 = 1;
const VERTEX_RADIUS: f32 = 10.0;
const HIT_RADIUS: f32 = 20.0;
const DRAG_PADDING: f32 = 20.0;
/// Display units: 50 px per unit in the side-length readouts.
const READOUT_SCALE: f32 = 50.0;

const SQUARE_A_COLOR: Color = rgba(0.961, 0.620, 0.043, 0.2);
const SQUARE_B_COLOR: Color = rgba(0.545, 0.361, 0.965, 0.2);
const SQUARE_C_COLOR: Color = rgba(0.063, 0.725, 0.506, 0.2);
const TRIANGLE_FILL: Color = rgba(0.0, 0.0, 0.0, 0.1);
const TRIANGLE_STROKE: Color = rgba(0.0, 0.0, 0.0, 0.5);
const VERTEX_COLOR: Color = rgb(0.961, 0.620, 0.043);
const VERTEX_ARMED_COLOR: Color = rgb(0.851, 0.467, 0.024);
const LABEL_A_COLOR: Color = rgb(0.706, 0.325, 0.035);
const LABEL_B_COLOR: Color = rgb(0.357, 0.129, 0.714);
const LABEL_C_COLOR: Color = rgb(0.024, 0.373, 0.275);

pub struct Pythagorean {
    pub vertex_a: Vec2,
    pub vertex_b: Vec2,
    bounds: Vec2,
}

impl Default for Pythagorean {
    fn default() -> Self {
        Self {
            vertex_a: Vec2::new(50.0, 150.0),
            vertex_b: Vec2::new(250.0, 350.0),
            bounds: Vec2::ZERO,
        }
    }
}

impl Pythagorean {
    /// The right-angle vertex, derived from the other two.
    pub fn vertex_c(&self) -> Vec2 {
        Vec2::new(self.vertex_a.x, self.vertex_b.y)
    }

    /// Side lengths `(a, b, c)` in display units.
    pub fn sides(&self) -> (f32, f32, f32) {
        let c_vertex = self.vertex_c();
        (
            self.vertex_b.distance(c_vertex) / READOUT_SCALE,
            self.vertex_a.distance(c_vertex) / READOUT_SCALE,
            self.vertex_a.distance(self.vertex_b) / READOUT_SCALE,
        )
    }
}

/// Square erected outward on the directed side `p1 -> p2`.
fn square_on(p1: Vec2, p2: Vec2) -> Vec<Vec2> {
    let d = p2 - p1;
    let out = Vec2::new(-d.y, d.x);
    vec![p1, p2, p2 + out, p1 + out]
}

impl Simulation for Pythagorean {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Square
    }

    /// Resize re-anchors the triangle to the new surface.
    fn setup(&mut self, surface: &CanvasSurface) {
        self.bounds = surface.size();
        let padding = 50.0;
        self.vertex_a = Vec2::new(padding, surface.height * 0.4);
        self.vertex_b = Vec2::new(surface.width * 0.7, surface.height - padding);
    }

    fn draggables(&self) -> Vec<Draggable> {
        vec![
            Draggable::new(
                VERTEX_A,
                HitShape::Circle { center: self.vertex_a, radius: HIT_RADIUS },
            ),
            Draggable::new(
                VERTEX_B,
                HitShape::Circle { center: self.vertex_b, radius: HIT_RADIUS },
            ),
        ]
    }

    fn drag(&mut self, target: u32, point: Vec2) {
        let c_vertex = self.vertex_c();
        match target {
            VERTEX_A => {
                self.vertex_a.y = point.y.clamp(DRAG_PADDING, c_vertex.y - DRAG_PADDING);
            }
            VERTEX_B => {
                self.vertex_b.x = point
                    .x
                    .clamp(c_vertex.x + DRAG_PADDING, self.bounds.x - DRAG_PADDING);
            }
            _ => {}
        }
    }

    fn draw(&self, scene: &mut Scene, _surface: &CanvasSurface, armed: Option<u32>) {
        scene.clear(WHITE);
        let a = self.vertex_a;
        let b = self.vertex_b;
        let c = self.vertex_c();

        scene.fill_polygon(square_on(c, b), SQUARE_A_COLOR);
        scene.fill_polygon(square_on(a, c), SQUARE_B_COLOR);
        scene.fill_polygon(square_on(b, a), SQUARE_C_COLOR);

        scene.fill_polygon(vec![a, b, c], TRIANGLE_FILL);
        scene.polyline(vec![a, b, c, a], 2.0, TRIANGLE_STROKE);

        // Right-angle mark at C.
        scene.polyline(
            vec![
                c + Vec2::new(15.0, 0.0),
                c + Vec2::new(15.0, -15.0),
                c + Vec2::new(0.0, -15.0),
            ],
            1.5,
            TRIANGLE_STROKE,
        );

        for (id, vertex) in [(VERTEX_A, a), (VERTEX_B, b)] {
            let color = if armed == Some(id) {
                VERTEX_ARMED_COLOR
            } else {
                VERTEX_COLOR
            };
            scene.fill_circle(vertex, VERTEX_RADIUS, color);
        }

        scene.label("a", (b + c) * 0.5 + Vec2::new(15.0, 0.0), 16.0, LABEL_A_COLOR);
        scene.label("b", (a + c) * 0.5 + Vec2::new(0.0, -15.0), 16.0, LABEL_B_COLOR);
        let hyp_mid = (a + b) * 0.5;
        let hyp_normal = {
            let d = (b - a).normalize_or_zero();
            Vec2::new(d.y, -d.x)
        };
        scene.label("c", hyp_mid + hyp_normal * 20.0, 16.0, LABEL_C_COLOR);

        let (side_a, side_b, side_c) = self.sides();
        let equation = format!(
            "{:.2} + {:.2} = {:.2}",
            side_a * side_a,
            side_b * side_b,
            side_c * side_c,
        );
        scene.label(equation, Vec2::new(self.bounds.x * 0.5, 20.0), 12.0, TRIANGLE_STROKE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mounted() -> Pythagorean {
        let mut sim = Pythagorean::default();
        sim.setup(&CanvasSurface::from_container(500.0, HeightPolicy::Square, 1.0));
        sim
    }

    #[test]
    fn test_theorem_holds_for_any_drag() {
        let mut sim = mounted();
        sim.drag(VERTEX_A, Vec2::new(0.0, 80.0));
        sim.drag(VERTEX_B, Vec2::new(420.0, 0.0));
        let (a, b, c) = sim.sides();
        assert_relative_eq!(a * a + b * b, c * c, epsilon = 1e-4);
    }

    #[test]
    fn test_vertex_a_moves_only_vertically() {
        let mut sim = mounted();
        let x_before = sim.vertex_a.x;
        sim.drag(VERTEX_A, Vec2::new(300.0, 120.0));
        assert_eq!(sim.vertex_a.x, x_before);
        assert_eq!(sim.vertex_a.y, 120.0);
    }

    #[test]
    fn test_drags_are_clamped() {
        let mut sim = mounted();
        let c_vertex = sim.vertex_c();
        sim.drag(VERTEX_A, Vec2::new(0.0, 10_000.0));
        assert_eq!(sim.vertex_a.y, c_vertex.y - DRAG_PADDING);
        sim.drag(VERTEX_B, Vec2::new(-10_000.0, 0.0));
        assert_eq!(sim.vertex_b.x, sim.vertex_c().x + DRAG_PADDING);
    }
}
