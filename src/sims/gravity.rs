//! Two-body gravity: a heavy central body and a satellite.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgb, Color, Scene, DARK_BACKGROUND, WHITE};
use crate::simulation::{Scheduling, Simulation};
use crate::surface::CanvasSurface;
use glam::Vec2;

const GRAVITATIONAL_CONSTANT: f32 = 20.0;
const ORBITAL_RADIUS: f32 = 150.0;
const CENTRAL_COLOR: Color = rgb(0.996, 0.847, 0.694);

#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub mass: f32,
    pub radius: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    color: Color,
}

pub struct Gravity {
    pub central: Body,
    pub satellite: Body,
    mass1: f32,
    radius1: f32,
    mass2: f32,
    radius2: f32,
    center: Vec2,
}

impl Default for Gravity {
    fn default() -> Self {
        let mut sim = Self {
            central: Body {
                mass: 0.0,
                radius: 0.0,
                position: Vec2::ZERO,
                velocity: Vec2::ZERO,
                color: CENTRAL_COLOR,
            },
            satellite: Body {
                mass: 0.0,
                radius: 0.0,
                position: Vec2::ZERO,
                velocity: Vec2::ZERO,
                color: WHITE,
            },
            mass1: 10_000.0,
            radius1: 40.0,
            mass2: 10.0,
            radius2: 8.0,
            center: Vec2::ZERO,
        };
        sim.reset();
        sim
    }
}

impl Gravity {
    /// Central body at rest in the middle, satellite launched tangentially at
    /// the circular-orbit speed for its starting radius.
    fn reset(&mut self) {
        let orbital_velocity = (GRAVITATIONAL_CONSTANT * self.mass1 / ORBITAL_RADIUS).sqrt();
        self.central = Body {
            mass: self.mass1,
            radius: self.radius1,
            position: self.center,
            velocity: Vec2::ZERO,
            color: CENTRAL_COLOR,
        };
        self.satellite = Body {
            mass: self.mass2,
            radius: self.radius2,
            position: self.center - Vec2::new(0.0, ORBITAL_RADIUS),
            velocity: Vec2::new(orbital_velocity, 0.0),
            color: WHITE,
        };
    }
}

impl Simulation for Gravity {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .range("mass1", "Central Body Mass", 1000.0, 100_000.0, 100.0, 10_000.0)
            .range("radius1", "Central Body Radius", 10.0, 100.0, 1.0, 40.0)
            .range("mass2", "Satellite Mass", 1.0, 500.0, 1.0, 10.0)
            .range("radius2", "Satellite Radius", 2.0, 30.0, 1.0, 8.0)
            .button("reset", "Reset Simulation")
    }

    fn scheduling(&self) -> Scheduling {
        Scheduling::Continuous
    }

    fn setup(&mut self, surface: &CanvasSurface) {
        self.center = surface.center();
        self.reset();
    }

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        let Some(n) = value.as_number() else { return };
        match key {
            "mass1" => self.mass1 = n,
            "radius1" => self.radius1 = n,
            "mass2" => self.mass2 = n,
            "radius2" => self.radius2 = n,
            _ => {}
        }
        self.reset();
    }

    fn on_action(&mut self, key: &str) {
        if key == "reset" {
            self.reset();
        }
    }

    fn step(&mut self, dt: f32) {
        let offset = self.satellite.position - self.central.position;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        // One attractive force pair, applied equal and opposite.
        let magnitude =
            -GRAVITATIONAL_CONSTANT * self.central.mass * self.satellite.mass / (distance * distance);
        let force = offset / distance * magnitude;

        self.central.velocity -= force / self.central.mass * dt;
        self.satellite.velocity += force / self.satellite.mass * dt;
        self.central.position += self.central.velocity * dt;
        self.satellite.position += self.satellite.velocity * dt;
    }

    fn draw(&self, scene: &mut Scene, _surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);
        for body in [&self.central, &self.satellite] {
            scene.fill_circle(body.position, body.radius, body.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FIXED_DT;
    use crate::surface::HeightPolicy;
    use approx::assert_relative_eq;

    fn momentum(sim: &Gravity) -> Vec2 {
        sim.central.velocity * sim.central.mass + sim.satellite.velocity * sim.satellite.mass
    }

    #[test]
    fn test_momentum_is_conserved() {
        let mut sim = Gravity::default();
        sim.setup(&CanvasSurface::from_container(800.0, HeightPolicy::DEFAULT, 1.0));
        let before = momentum(&sim);
        for _ in 0..1200 {
            sim.step(FIXED_DT);
        }
        let after = momentum(&sim);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-1);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-1);
    }

    #[test]
    fn test_satellite_stays_near_circular_orbit() {
        let mut sim = Gravity::default();
        sim.setup(&CanvasSurface::from_container(800.0, HeightPolicy::DEFAULT, 1.0));
        // One full orbit of a near-circular launch should keep the separation
        // within a modest band of the starting radius.
        for _ in 0..3600 {
            sim.step(FIXED_DT);
            let r = sim.satellite.position.distance(sim.central.position);
            assert!(r > ORBITAL_RADIUS * 0.8 && r < ORBITAL_RADIUS * 1.2, "r = {r}");
        }
    }
}
