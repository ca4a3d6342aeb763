//! Unit circle with a draggable point and the trig construction lines.

use crate::controls::ControlSet;
use crate::drag::{Draggable, HitShape};
use crate::scene::{rgb, rgba, Color, Scene, WHITE};
use crate::simulation::Simulation;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const POINT_ID: u32 = 0;
const POINT_RADIUS: f32 = 10.0;
const PADDING: f32 = 40.0;

const POINT_COLOR: Color = rgb(0.961, 0.620, 0.043);
const POINT_ARMED_COLOR: Color = rgb(0.851, 0.467, 0.024);
const COSINE_COLOR: Color = rgb(0.961, 0.620, 0.043);
const SINE_COLOR: Color = rgb(0.545, 0.361, 0.965);
const TANGENT_COLOR: Color = rgb(0.145, 0.388, 0.922);
const AXIS_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.1);
const CIRCLE_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.2);
const RADIUS_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.4);
const ARC_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.5);
const READOUT_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.7);

pub struct UnitCircle {
    /// Screen-convention angle: positive sweeps below the x axis.
    pub angle: f32,
    center: Vec2,
    radius: f32,
}

impl Default for UnitCircle {
    fn default() -> Self {
        Self {
            angle: -std::f32::consts::FRAC_PI_4,
            center: Vec2::ZERO,
            radius: 0.0,
        }
    }
}

impl UnitCircle {
    fn point_on_circle(&self) -> Vec2 {
        self.center + Vec2::from_angle(self.angle) * self.radius
    }
}

impl Simulation for UnitCircle {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Square
    }

    /// Angle survives a resize; the circle re-anchors to the new surface.
    fn setup(&mut self, surface: &CanvasSurface) {
        self.center = surface.center();
        self.radius = surface.width.min(surface.height) * 0.5 - PADDING;
    }

    fn draggables(&self) -> Vec<Draggable> {
        vec![Draggable::new(
            POINT_ID,
            HitShape::Circle {
                center: self.point_on_circle(),
                radius: POINT_RADIUS * 1.5,
            },
        )]
    }

    /// The point is constrained to the circle: only the pointer's bearing
    /// from the center matters.
    fn drag(&mut self, _target: u32, point: Vec2) {
        let offset = point - self.center;
        if offset.length_squared() > 0.0 {
            self.angle = offset.y.atan2(offset.x);
        }
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, armed: Option<u32>) {
        scene.clear(WHITE);
        let c = self.center;
        let r = self.radius;
        let point = self.point_on_circle();

        scene.line(Vec2::new(0.0, c.y), Vec2::new(surface.width, c.y), 1.0, AXIS_COLOR);
        scene.line(Vec2::new(c.x, 0.0), Vec2::new(c.x, surface.height), 1.0, AXIS_COLOR);
        scene.stroke_circle(c, r, 2.0, CIRCLE_COLOR);

        // cos along the x axis, sin up from it, tan on the x = r vertical.
        scene.line(c, Vec2::new(point.x, c.y), 3.0, COSINE_COLOR);
        scene.line(Vec2::new(point.x, c.y), point, 3.0, SINE_COLOR);
        let tangent_x = c.x + r;
        scene.line(
            Vec2::new(tangent_x, c.y),
            Vec2::new(tangent_x, c.y - r * self.angle.tan()),
            3.0,
            TANGENT_COLOR,
        );

        scene.line(c, point, 1.5, RADIUS_COLOR);
        scene.arc(c, 20.0, 0.0, self.angle, 1.0, ARC_COLOR);

        let marker = if armed == Some(POINT_ID) {
            POINT_ARMED_COLOR
        } else {
            POINT_COLOR
        };
        scene.fill_circle(point, POINT_RADIUS, marker);

        // Readout row. The screen angle is negated so the display follows
        // the math convention (counterclockwise positive).
        let theta = -self.angle;
        let tan = theta.tan();
        let tan_text = if tan.abs() > 1000.0 {
            String::from(if tan > 0.0 { "INF" } else { "-INF" })
        } else {
            format!("{tan:.3}")
        };
        let readout = format!(
            "{:.1}°  cos={:.3}  sin={:.3}  tan={}",
            theta.to_degrees(),
            theta.cos(),
            theta.sin(),
            tan_text,
        );
        scene.label(readout, Vec2::new(surface.width * 0.5, 20.0), 12.0, READOUT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mounted() -> UnitCircle {
        let mut sim = UnitCircle::default();
        sim.setup(&CanvasSurface::from_container(600.0, HeightPolicy::Square, 1.0));
        sim
    }

    #[test]
    fn test_drag_snaps_to_circle_bearing() {
        let mut sim = mounted();
        // Pointer far outside the circle, straight right of center.
        sim.drag(POINT_ID, sim.center + Vec2::new(900.0, 0.0));
        assert_relative_eq!(sim.angle, 0.0, epsilon = 1e-5);
        let p = sim.point_on_circle();
        assert_relative_eq!(p.distance(sim.center), sim.radius, epsilon = 1e-3);
    }

    #[test]
    fn test_resize_preserves_angle_and_reanchors() {
        let mut sim = mounted();
        sim.drag(POINT_ID, sim.center + Vec2::new(0.0, 100.0));
        let angle = sim.angle;
        sim.setup(&CanvasSurface::from_container(900.0, HeightPolicy::Square, 1.0));
        assert_eq!(sim.angle, angle);
        assert_eq!(sim.center, Vec2::new(450.0, 450.0));
        assert_relative_eq!(sim.radius, 410.0, epsilon = 1e-3);
    }
}
