//! Simple pendulum on a rigid string.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgb, Scene, DARK_BACKGROUND, WHITE};
use crate::simulation::{Scheduling, Simulation};
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const INITIAL_ANGLE: f32 = 3.0 * std::f32::consts::PI / 4.0;
const BOB_RADIUS: f32 = 15.0;
const BOB_COLOR: [f32; 4] = rgb(0.996, 0.847, 0.694);

pub struct Pendulum {
    /// Angle from the downward vertical, radians.
    pub angle: f32,
    pub angular_velocity: f32,
    pub length: f32,
    pub gravity: f32,
}

impl Default for Pendulum {
    fn default() -> Self {
        Self {
            angle: INITIAL_ANGLE,
            angular_velocity: 0.0,
            length: 200.0,
            gravity: 9.81,
        }
    }
}

impl Pendulum {
    fn reset(&mut self) {
        self.angle = INITIAL_ANGLE;
        self.angular_velocity = 0.0;
    }
}

impl Simulation for Pendulum {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .range_with_unit("length", "Pendulum Length", 50.0, 300.0, 1.0, 200.0, Some("px"))
            .range_with_unit("gravity", "Gravity", 1.0, 25.0, 0.1, 9.81, Some("m/s²"))
            .button("reset", "Reset Simulation")
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Fixed(500.0)
    }

    fn scheduling(&self) -> Scheduling {
        Scheduling::Continuous
    }

    fn setup(&mut self, _surface: &CanvasSurface) {
        self.reset();
    }

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        let Some(n) = value.as_number() else { return };
        match key {
            "length" => self.length = n,
            "gravity" => self.gravity = n,
            _ => {}
        }
        // Changing a parameter mid-swing restarts the swing.
        self.reset();
    }

    fn on_action(&mut self, key: &str) {
        if key == "reset" {
            self.reset();
        }
    }

    fn step(&mut self, dt: f32) {
        let acceleration = -(self.gravity / self.length) * self.angle.sin();
        self.angular_velocity += acceleration * dt;
        self.angle += self.angular_velocity * dt;
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);
        let pivot = surface.center();
        let bob = pivot + Vec2::new(self.angle.sin(), self.angle.cos()) * self.length;

        scene.rect(pivot + Vec2::new(-25.0, -10.0), Vec2::new(50.0, 10.0), WHITE);
        scene.line(pivot, bob, 2.0, WHITE);
        scene.fill_circle(bob, BOB_RADIUS, BOB_COLOR);
    }
}
