//! Thin-lens ray diagram with a draggable object.
//!
//! Coordinates are canvas-centered with the optical axis on y = 0 and the
//! lens plane on x = 0. The image follows the thin-lens relation
//! `v = f·u / (u − f)`; objects dragged to the right of the lens flip the
//! sign of `f` so the construction stays sensible on both sides.

use crate::controls::{ControlSet, ControlValue};
use crate::drag::{Draggable, HitShape};
use crate::mapper::OriginPolicy;
use crate::scene::{rgb, rgba, Color, Scene, DARK_BACKGROUND, WHITE};
use crate::simulation::Simulation;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const OBJECT_ID: u32 = 0;
const OBJECT_GRAB_RADIUS: f32 = 20.0;

const OBJECT_COLOR: Color = rgb(0.980, 0.800, 0.082);
const OBJECT_ARMED_COLOR: Color = rgb(0.961, 0.620, 0.043);
const IMAGE_COLOR: Color = rgb(0.525, 0.937, 0.675);
const PARALLEL_RAY_COLOR: Color = rgb(1.0, 0.647, 0.0);
const CENTER_RAY_COLOR: Color = rgb(0.5, 0.0, 0.5);
const AXIS_COLOR: Color = rgba(1.0, 1.0, 1.0, 0.2);
const LENS_COLOR: Color = rgba(1.0, 1.0, 1.0, 0.8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LensType {
    Convex,
    Concave,
}

pub struct Lens {
    pub lens_type: LensType,
    pub focal_length: f32,
    pub object: Vec2,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            lens_type: LensType::Convex,
            focal_length: 150.0,
            object: Vec2::new(-300.0, -50.0),
        }
    }
}

/// Image position for an object at `(x, y)`, or None at the focal plane.
fn image_point(object: Vec2, signed_focal: f32) -> Option<Vec2> {
    let u = -object.x;
    if (u - signed_focal).abs() < 1e-6 {
        return None;
    }
    let v = signed_focal * u / (u - signed_focal);
    if !v.is_finite() {
        return None;
    }
    Some(Vec2::new(v, -v / u * object.y))
}

impl Lens {
    /// Signed focal length: concave lenses negate, and objects right of the
    /// lens flip the sign again.
    fn signed_focal(&self) -> f32 {
        let f = match self.lens_type {
            LensType::Convex => self.focal_length,
            LensType::Concave => -self.focal_length,
        };
        if self.object.x > 0.0 {
            -f
        } else {
            f
        }
    }

    /// Two mirrored arcs around the lens plane, bulging out for convex and
    /// in for concave. `c` is the canvas center in screen space.
    fn draw_lens(&self, scene: &mut Scene, c: Vec2, signed_focal: f32) {
        let radius = (2.0 * signed_focal.abs()).max(100.0);
        match self.lens_type {
            LensType::Convex => {
                let angle = (100.0 / radius).asin();
                let cx = (radius * radius - 100.0 * 100.0_f32).sqrt();
                scene.arc(
                    c + Vec2::new(cx, 0.0),
                    radius,
                    std::f32::consts::PI - angle,
                    std::f32::consts::PI + angle,
                    2.0,
                    LENS_COLOR,
                );
                scene.arc(c + Vec2::new(-cx, 0.0), radius, -angle, angle, 2.0, LENS_COLOR);
            }
            LensType::Concave => {
                let angle = std::f32::consts::FRAC_PI_4;
                scene.arc(c + Vec2::new(-radius, 0.0), radius, -angle, angle, 2.0, LENS_COLOR);
                scene.arc(
                    c + Vec2::new(radius, 0.0),
                    radius,
                    std::f32::consts::PI - angle,
                    std::f32::consts::PI + angle,
                    2.0,
                    LENS_COLOR,
                );
            }
        }
    }
}

impl Simulation for Lens {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .select(
                "lens_type",
                "Lens Type",
                &[("convex", "Convex"), ("concave", "Concave")],
                "convex",
            )
            .range_with_unit("focal_length", "Focal Length", 50.0, 300.0, 1.0, 150.0, Some("px"))
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Fixed(500.0)
    }

    fn origin(&self) -> OriginPolicy {
        OriginPolicy::CENTERED
    }

    fn setup(&mut self, _surface: &CanvasSurface) {}

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        match key {
            "lens_type" => {
                if let Some(choice) = value.as_choice() {
                    self.lens_type = if choice == "concave" {
                        LensType::Concave
                    } else {
                        LensType::Convex
                    };
                }
            }
            "focal_length" => {
                if let Some(n) = value.as_number() {
                    self.focal_length = n;
                }
            }
            _ => {}
        }
    }

    fn draggables(&self) -> Vec<Draggable> {
        vec![Draggable::new(
            OBJECT_ID,
            HitShape::Circle {
                center: self.object,
                radius: OBJECT_GRAB_RADIUS,
            },
        )]
    }

    fn drag(&mut self, _target: u32, point: Vec2) {
        self.object = point;
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);
        let c = surface.center();
        let half = surface.size() * 0.5;

        let f = self.signed_focal();
        let object = self.object;
        let image = image_point(object, f);

        // Optical axis and lens plane.
        scene.line(c - Vec2::new(half.x, 0.0), c + Vec2::new(half.x, 0.0), 1.0, AXIS_COLOR);
        scene.line(c - Vec2::new(0.0, half.y), c + Vec2::new(0.0, half.y), 1.0, AXIS_COLOR);

        // Object arrow.
        let object_color = if armed == Some(OBJECT_ID) {
            OBJECT_ARMED_COLOR
        } else {
            OBJECT_COLOR
        };
        scene.line(c + Vec2::new(object.x, 0.0), c + object, 3.0, object_color);
        scene.fill_circle(c + object, 8.0, object_color);

        self.draw_lens(scene, c, f);

        // Parallel ray: object to lens plane, refracted toward the image.
        // For a virtual object the refracted leg is extended past the image.
        if let Some(img) = image {
            scene.line(c + object, c + Vec2::new(0.0, object.y), 1.5, PARALLEL_RAY_COLOR);
            let refracted_end = if object.x < 0.0 {
                img
            } else {
                img + (img - Vec2::new(0.0, object.y)) * 2.0
            };
            scene.line(c + Vec2::new(0.0, object.y), c + refracted_end, 1.5, PARALLEL_RAY_COLOR);

            // Central ray passes undeviated.
            scene.dashed_line(c + object, c + img, 1.5, 5.0, CENTER_RAY_COLOR);

            // Image arrow.
            scene.line(c + Vec2::new(img.x, 0.0), c + img, 2.0, IMAGE_COLOR);
            scene.fill_circle(c + img, 5.0, IMAGE_COLOR);
        } else {
            scene.line(c + object, c + Vec2::new(0.0, object.y), 1.5, PARALLEL_RAY_COLOR);
            scene.dashed_line(
                c + object,
                c + object + Vec2::new(10.0 * f.signum(), 0.0),
                1.5,
                5.0,
                CENTER_RAY_COLOR,
            );
        }

        // Focal point markers on both sides.
        let markers = [(-f, "F1"), (-2.0 * f, "2F1"), (f, "F2"), (2.0 * f, "2F2")];
        for (x, label) in markers {
            scene.fill_circle(c + Vec2::new(x, 0.0), 4.0, WHITE);
            scene.label(label, c + Vec2::new(x, -15.0), 16.0, WHITE);
        }
    }
}
