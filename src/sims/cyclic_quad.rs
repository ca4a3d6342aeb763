//! Inscribed-angle theorem on a cyclic quadrilateral.
//!
//! A horizontal chord slides vertically through the circle (band hit test,
//! grabbed anywhere along it) and two inscribed points slide around the
//! circumference. Inscribed angles over the chord and the central angle are
//! labelled in place, offset to whichever side of the center keeps them
//! clear of the construction.

use crate::controls::ControlSet;
use crate::drag::{Axis, Draggable, HitShape};
use crate::geometry::angle_at_deg;
use crate::scene::{flip_offset, rgb, rgba, Color, Scene, WHITE};
use crate::simulation::Simulation;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const POINT_1: u32 = 0;
const POINT_2: u32 = 1;
const CHORD: u32 = 2;
const HIT_RADIUS: f32 = 20.0;
const PADDING: f32 = 40.0;

const CIRCLE_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.15);
const CENTER_LINES_COLOR: Color = rgba(0.918, 0.702, 0.031, 0.5);
const QUAD_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.4);
const CHORD_COLOR: Color = rgb(0.024, 0.714, 0.831);
const POINT_COLOR: Color = rgba(0.0, 0.0, 0.0, 0.6);
const POINT_ARMED_COLOR: Color = rgb(0.961, 0.620, 0.043);
const THETA1_COLOR: Color = rgb(0.961, 0.620, 0.043);
const THETA2_COLOR: Color = rgb(0.545, 0.361, 0.965);

pub struct CyclicQuadrilateral {
    pub point1_angle: f32,
    pub point2_angle: f32,
    pub chord_y: f32,
    center: Vec2,
    radius: f32,
}

impl Default for CyclicQuadrilateral {
    fn default() -> Self {
        Self {
            point1_angle: -std::f32::consts::FRAC_PI_2,
            point2_angle: std::f32::consts::FRAC_PI_2,
            chord_y: 0.0,
            center: Vec2::ZERO,
            radius: 0.0,
        }
    }
}

impl CyclicQuadrilateral {
    fn on_circle(&self, angle: f32) -> Vec2 {
        self.center + Vec2::from_angle(angle) * self.radius
    }

    /// Chord endpoints where the horizontal at `chord_y` meets the circle.
    fn chord_endpoints(&self) -> (Vec2, Vec2) {
        let dy = self.chord_y - self.center.y;
        let dx = (self.radius * self.radius - dy * dy).max(0.0).sqrt();
        (
            Vec2::new(self.center.x - dx, self.chord_y),
            Vec2::new(self.center.x + dx, self.chord_y),
        )
    }

    /// `(θ1, θ2, central)` in degrees.
    pub fn angles(&self) -> (f32, f32, f32) {
        let (p1, p2) = self.chord_endpoints();
        (
            angle_at_deg(self.on_circle(self.point1_angle), p1, p2),
            angle_at_deg(self.on_circle(self.point2_angle), p1, p2),
            angle_at_deg(self.center, p1, p2),
        )
    }
}

impl Simulation for CyclicQuadrilateral {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Square
    }

    /// Resize recenters the circle and puts the chord back on the diameter.
    fn setup(&mut self, surface: &CanvasSurface) {
        self.center = surface.center();
        self.radius = surface.width.min(surface.height) * 0.5 - PADDING;
        self.chord_y = self.center.y;
    }

    fn draggables(&self) -> Vec<Draggable> {
        vec![
            Draggable::new(
                POINT_1,
                HitShape::Circle {
                    center: self.on_circle(self.point1_angle),
                    radius: HIT_RADIUS,
                },
            ),
            Draggable::new(
                POINT_2,
                HitShape::Circle {
                    center: self.on_circle(self.point2_angle),
                    radius: HIT_RADIUS,
                },
            ),
            Draggable::new(
                CHORD,
                HitShape::Band {
                    axis: Axis::Y,
                    min: self.chord_y - HIT_RADIUS,
                    max: self.chord_y + HIT_RADIUS,
                },
            ),
        ]
    }

    fn drag(&mut self, target: u32, point: Vec2) {
        match target {
            POINT_1 | POINT_2 => {
                let offset = point - self.center;
                if offset.length_squared() > 0.0 {
                    let angle = offset.y.atan2(offset.x);
                    if target == POINT_1 {
                        self.point1_angle = angle;
                    } else {
                        self.point2_angle = angle;
                    }
                }
            }
            CHORD => {
                // Keep the chord strictly inside the circle.
                self.chord_y = point.y.clamp(
                    self.center.y - self.radius + 1.0,
                    self.center.y + self.radius - 1.0,
                );
            }
            _ => {}
        }
    }

    fn draw(&self, scene: &mut Scene, _surface: &CanvasSurface, armed: Option<u32>) {
        scene.clear(WHITE);
        let c = self.center;
        let p1 = self.on_circle(self.point1_angle);
        let p2 = self.on_circle(self.point2_angle);
        let (chord_a, chord_b) = self.chord_endpoints();
        let (theta1, theta2, central) = self.angles();

        scene.stroke_circle(c, self.radius, 2.0, CIRCLE_COLOR);
        scene.polyline(vec![chord_a, c, chord_b], 1.5, CENTER_LINES_COLOR);
        scene.polyline(vec![chord_a, p1, chord_b, p2, chord_a], 1.5, QUAD_COLOR);
        scene.line(chord_a, chord_b, 4.0, CHORD_COLOR);

        let chord_armed = armed == Some(CHORD);
        for (point, base) in [(chord_a, CHORD_COLOR), (chord_b, CHORD_COLOR)] {
            let color = if chord_armed { POINT_ARMED_COLOR } else { base };
            scene.fill_circle(point, 8.0, color);
        }
        for (id, point) in [(POINT_1, p1), (POINT_2, p2)] {
            let color = if armed == Some(id) {
                POINT_ARMED_COLOR
            } else {
                POINT_COLOR
            };
            scene.fill_circle(point, 8.0, color);
        }

        // Labels flip to the far side of the construction they annotate.
        let offset1 = flip_offset(p1.y, c.y, -25.0, 30.0);
        scene.label(
            format!("θ1 = {theta1:.1}°"),
            p1 + Vec2::new(0.0, offset1),
            18.0,
            THETA1_COLOR,
        );
        let offset2 = flip_offset(p2.y, c.y, -25.0, 30.0);
        scene.label(
            format!("θ2 = {theta2:.1}°"),
            p2 + Vec2::new(0.0, offset2),
            18.0,
            THETA2_COLOR,
        );
        let central_offset = flip_offset(self.chord_y, c.y, 20.0, -20.0);
        scene.label(
            format!("{central:.1}°"),
            c + Vec2::new(0.0, central_offset),
            18.0,
            THETA1_COLOR,
        );
    }
}
