//! Ideal gas in a piston chamber.
//!
//! Particles bounce elastically off the walls and the piston face, and are
//! renormalized to the temperature-derived speed every step, so the ensemble
//! tracks slider changes immediately. The displayed pressure is the
//! simplified `N·R·T / (1000·V)`, not a wall-impulse measurement.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgb, Color, Scene, DARK_BACKGROUND};
use crate::simulation::{Scheduling, Simulation};
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARTICLE_COUNT: usize = 100;
const PARTICLE_RADIUS: f32 = 4.0;
/// Ideal gas constant, display calculation only.
const GAS_CONSTANT: f32 = 8.314;
/// Deterministic ensembles; re-seeded on every rebuild.
const ENSEMBLE_SEED: u64 = 0x6761_73;

const PISTON_FILL: Color = rgb(0.612, 0.639, 0.686);
const PISTON_HANDLE: Color = rgb(0.420, 0.447, 0.502);

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    color: Color,
}

pub struct GasLaws {
    pub temperature: f32,
    pub volume: f32,
    pub particles: Vec<Particle>,
    bounds: Vec2,
}

impl Default for GasLaws {
    fn default() -> Self {
        Self {
            temperature: 298.0,
            volume: 0.7,
            particles: Vec::new(),
            bounds: Vec2::ZERO,
        }
    }
}

/// Particle tint: hues from azure to violet, fully saturated.
fn particle_color(rng: &mut StdRng) -> Color {
    let hue = 200.0 + rng.gen::<f32>() * 60.0;
    hsl(hue, 1.0, 0.6)
}

fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    rgb(r + m, g + m, b + m)
}

impl GasLaws {
    fn piston_y(&self) -> f32 {
        self.bounds.y * self.volume
    }

    fn target_speed(&self) -> f32 {
        self.temperature.sqrt() * 0.1
    }

    /// Scatter the ensemble uniformly through the chamber with random
    /// headings at the target speed.
    fn rebuild(&mut self) {
        let mut rng = StdRng::seed_from_u64(ENSEMBLE_SEED);
        let piston_y = self.piston_y();
        let speed = self.target_speed();
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let heading = rng.gen::<f32>() * std::f32::consts::TAU;
                Particle {
                    position: Vec2::new(
                        rng.gen::<f32>() * (self.bounds.x - PARTICLE_RADIUS * 2.0)
                            + PARTICLE_RADIUS,
                        rng.gen::<f32>() * (piston_y - PARTICLE_RADIUS * 2.0) + PARTICLE_RADIUS,
                    ),
                    velocity: Vec2::from_angle(heading) * speed,
                    color: particle_color(&mut rng),
                }
            })
            .collect();
    }

    /// Simplified ideal-gas pressure for the info readout, in kPa.
    pub fn pressure(&self) -> f32 {
        PARTICLE_COUNT as f32 * GAS_CONSTANT * self.temperature / (self.volume * 1000.0)
    }
}

impl Simulation for GasLaws {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .range_with_unit("temperature", "Temperature", 100.0, 600.0, 1.0, 298.0, Some("K"))
            .range("volume", "Volume (Piston Position)", 0.2, 1.0, 0.01, 0.7)
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Fixed(500.0)
    }

    fn scheduling(&self) -> Scheduling {
        Scheduling::Continuous
    }

    fn setup(&mut self, surface: &CanvasSurface) {
        self.bounds = surface.size();
        self.rebuild();
    }

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        let Some(n) = value.as_number() else { return };
        match key {
            "temperature" => self.temperature = n,
            "volume" => self.volume = n,
            _ => {}
        }
        self.rebuild();
    }

    fn step(&mut self, _dt: f32) {
        let piston_y = self.piston_y();
        let speed = self.target_speed();
        for p in &mut self.particles {
            p.position += p.velocity;

            if p.position.x - PARTICLE_RADIUS < 0.0 || p.position.x + PARTICLE_RADIUS > self.bounds.x
            {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y - PARTICLE_RADIUS < 0.0 {
                p.velocity.y = -p.velocity.y;
            }
            if p.position.y + PARTICLE_RADIUS > piston_y {
                p.position.y = piston_y - PARTICLE_RADIUS;
                p.velocity.y = -p.velocity.y;
            }

            let current = p.velocity.length();
            if current > 0.0 {
                p.velocity = p.velocity / current * speed;
            }
        }
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);

        for p in &self.particles {
            scene.fill_circle(p.position, PARTICLE_RADIUS, p.color);
        }

        let piston_y = self.piston_y();
        scene.rect(
            Vec2::new(0.0, piston_y),
            Vec2::new(surface.width, surface.height - piston_y),
            PISTON_FILL,
        );
        scene.rect(
            Vec2::new(surface.width * 0.5 - 20.0, piston_y - 10.0),
            Vec2::new(40.0, 10.0),
            PISTON_HANDLE,
        );

        scene.label(
            format!("P = {:.1} kPa", self.pressure()),
            Vec2::new(surface.width * 0.5, surface.height - 20.0),
            12.0,
            rgb(0.898, 0.906, 0.922),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::FIXED_DT;
    use approx::assert_relative_eq;

    fn mounted() -> GasLaws {
        let mut sim = GasLaws::default();
        sim.setup(&CanvasSurface::from_container(800.0, sim.height_policy(), 1.0));
        sim
    }

    #[test]
    fn test_particles_stay_in_chamber() {
        let mut sim = mounted();
        for _ in 0..600 {
            sim.step(FIXED_DT);
        }
        let piston_y = sim.piston_y();
        for p in &sim.particles {
            assert!(p.position.x > -PARTICLE_RADIUS && p.position.x < sim.bounds.x + PARTICLE_RADIUS);
            assert!(p.position.y > -PARTICLE_RADIUS && p.position.y <= piston_y);
        }
    }

    #[test]
    fn test_speeds_track_temperature() {
        let mut sim = mounted();
        sim.on_control_change("temperature", &ControlValue::Number(400.0));
        sim.step(FIXED_DT);
        let expected = 400.0_f32.sqrt() * 0.1;
        for p in &sim.particles {
            assert_relative_eq!(p.velocity.length(), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_pressure_readout() {
        let sim = mounted();
        // N=100, T=298, V=0.7: 100 * 8.314 * 298 / 700.
        assert_relative_eq!(sim.pressure(), 353.94, epsilon = 0.05);
    }

    #[test]
    fn test_ensemble_is_deterministic() {
        let a = mounted();
        let b = mounted();
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.velocity, pb.velocity);
        }
    }
}
