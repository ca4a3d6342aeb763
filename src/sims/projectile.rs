//! Projectile motion from a cannon, closed-form kinematics.
//!
//! Flight position comes straight from the kinematic equations at elapsed
//! simulated time, not from integrating velocity, so the landing point is
//! exact regardless of frame pacing. The demo is continuous only while a shot
//! is in the air.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgb, rgba, Color, Scene};
use crate::simulation::{Scheduling, Simulation};
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const GRAVITY: f32 = 9.81;
/// Pixels per meter.
const SCALE: f32 = 2.0;
/// Simulated seconds per real second.
const TIME_SCALE: f32 = 5.0;
const GROUND_MARGIN: f32 = 40.0;
const CANNON_X: f32 = 30.0;
const CANNON_LENGTH: f32 = 50.0;
const PROJECTILE_RADIUS: f32 = 8.0;

const GROUND_COLOR: Color = rgb(0.898, 0.906, 0.922);
const PATH_COLOR: Color = rgba(0.961, 0.620, 0.043, 0.5);
const PROJECTILE_COLOR: Color = rgb(0.851, 0.467, 0.024);
const CANNON_COLOR: Color = rgb(0.294, 0.333, 0.388);

/// Closed-form landing figures for a launch, in meters and seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlightResults {
    pub range: f32,
    pub max_height: f32,
    pub time_of_flight: f32,
}

pub fn flight_results(velocity: f32, angle_deg: f32) -> FlightResults {
    let angle = angle_deg.to_radians();
    FlightResults {
        range: velocity * velocity * (2.0 * angle).sin() / GRAVITY,
        max_height: (velocity * angle.sin()).powi(2) / (2.0 * GRAVITY),
        time_of_flight: 2.0 * velocity * angle.sin() / GRAVITY,
    }
}

pub struct Projectile {
    pub velocity: f32,
    pub angle_deg: f32,
    pub results: FlightResults,
    in_flight: bool,
    elapsed: f32,
    start: Vec2,
    position: Option<Vec2>,
    path: Vec<Vec2>,
    ground_y: f32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            velocity: 50.0,
            angle_deg: 45.0,
            results: FlightResults::default(),
            in_flight: false,
            elapsed: 0.0,
            start: Vec2::ZERO,
            position: None,
            path: Vec::new(),
            ground_y: 0.0,
        }
    }
}

impl Projectile {
    fn muzzle(&self) -> Vec2 {
        let angle = self.angle_deg.to_radians();
        Vec2::new(
            CANNON_X + CANNON_LENGTH * angle.cos(),
            self.ground_y - CANNON_LENGTH * angle.sin(),
        )
    }

    fn launch(&mut self) {
        if self.in_flight {
            return;
        }
        self.in_flight = true;
        self.elapsed = 0.0;
        self.start = self.muzzle();
        self.path.clear();
        self.results = FlightResults::default();
    }

    fn land(&mut self) {
        self.in_flight = false;
        self.position = None;
        self.results = flight_results(self.velocity, self.angle_deg);
    }
}

impl Simulation for Projectile {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .range_with_unit("velocity", "Velocity", 10.0, 100.0, 1.0, 50.0, Some("m/s"))
            .range_with_unit("angle", "Angle", 1.0, 90.0, 1.0, 45.0, Some("°"))
            .button("launch", "Launch")
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Fixed(400.0)
    }

    fn scheduling(&self) -> Scheduling {
        if self.in_flight {
            Scheduling::Continuous
        } else {
            Scheduling::OnDemand
        }
    }

    fn setup(&mut self, surface: &CanvasSurface) {
        self.ground_y = surface.height - GROUND_MARGIN;
    }

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        // Parameters are locked while a shot is in the air.
        if self.in_flight {
            return;
        }
        let Some(n) = value.as_number() else { return };
        match key {
            "velocity" => self.velocity = n,
            "angle" => self.angle_deg = n,
            _ => {}
        }
    }

    fn on_action(&mut self, key: &str) {
        if key == "launch" {
            self.launch();
        }
    }

    fn step(&mut self, dt: f32) {
        if !self.in_flight {
            return;
        }
        self.elapsed += dt * TIME_SCALE;
        let angle = self.angle_deg.to_radians();
        let t = self.elapsed;
        let x_m = self.velocity * angle.cos() * t;
        let y_m = self.velocity * angle.sin() * t - 0.5 * GRAVITY * t * t;
        let position = self.start + Vec2::new(x_m * SCALE, -y_m * SCALE);

        if position.y >= self.ground_y {
            self.land();
        } else {
            self.position = Some(position);
            self.path.push(position);
        }
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear([1.0, 1.0, 1.0, 0.0]);

        scene.rect(
            Vec2::new(0.0, self.ground_y),
            Vec2::new(surface.width, surface.height - self.ground_y),
            GROUND_COLOR,
        );

        if self.path.len() > 1 {
            scene.polyline(self.path.clone(), 2.0, PATH_COLOR);
        }

        if let Some(position) = self.position {
            scene.fill_circle(position, PROJECTILE_RADIUS, PROJECTILE_COLOR);
        }

        if self.results != FlightResults::default() {
            let readout = format!(
                "R = {:.1} m   H = {:.1} m   T = {:.2} s",
                self.results.range, self.results.max_height, self.results.time_of_flight,
            );
            scene.label(readout, Vec2::new(surface.width * 0.5, 20.0), 12.0, CANNON_COLOR);
        }

        // Barrel: a rotated rect, drawn as a filled quad about the hinge.
        let angle = -self.angle_deg.to_radians();
        let base = Vec2::new(CANNON_X, self.ground_y);
        let along = Vec2::from_angle(angle) * CANNON_LENGTH;
        let across = Vec2::from_angle(angle + std::f32::consts::FRAC_PI_2) * 10.0;
        scene.fill_polygon(
            vec![base - across, base + along - across, base + along + across, base + across],
            CANNON_COLOR,
        );
    }
}
