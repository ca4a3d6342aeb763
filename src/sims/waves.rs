//! Travelling-wave superposition lab.
//!
//! A dynamic list of sine waves, each with its own amplitude, frequency,
//! phase, and speed sliders; the control surface is rebuilt whenever a wave
//! is added or removed, so per-wave keys carry the wave id. Overlay mode
//! draws each wave in its own color, interference mode draws the pointwise
//! sum in white.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgb, rgba, Color, Scene, DARK_BACKGROUND, WHITE};
use crate::simulation::{Scheduling, Simulation};
use crate::surface::CanvasSurface;
use glam::Vec2;

const WAVE_COLORS: [Color; 5] = [
    rgb(0.376, 0.647, 0.980),
    rgb(0.973, 0.443, 0.443),
    rgb(0.290, 0.871, 0.502),
    rgb(0.980, 0.800, 0.082),
    rgb(0.753, 0.518, 0.988),
];
const AXIS_COLOR: Color = rgba(1.0, 1.0, 1.0, 0.2);

#[derive(Clone, Copy, Debug)]
pub struct Wave {
    pub id: u32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase_shift: f32,
    pub speed: f32,
    color: Color,
}

impl Wave {
    fn new(id: u32) -> Self {
        Self {
            id,
            amplitude: 80.0,
            frequency: 0.01,
            phase_shift: 0.0,
            speed: 1.0,
            color: WAVE_COLORS[id as usize % WAVE_COLORS.len()],
        }
    }

    /// Displacement at `x` CSS pixels, `time` in milliseconds.
    pub fn sample(&self, x: f32, time: f32) -> f32 {
        let time_phase = time * self.speed * self.frequency / 10.0;
        self.amplitude * (x * self.frequency + self.phase_shift + time_phase).sin()
    }
}

pub struct WaveMotion {
    pub waves: Vec<Wave>,
    pub interference: bool,
    time: f32,
    next_id: u32,
}

impl Default for WaveMotion {
    fn default() -> Self {
        Self {
            waves: vec![Wave::new(0)],
            interference: false,
            time: 0.0,
            next_id: 1,
        }
    }
}

impl WaveMotion {
    fn add_wave(&mut self) {
        let wave = Wave::new(self.next_id);
        self.next_id += 1;
        self.waves.push(wave);
    }

    /// Removing the only wave replaces it with a fresh one, so the canvas is
    /// never empty.
    fn remove_wave(&mut self, id: u32) {
        self.waves.retain(|w| w.id != id);
        if self.waves.is_empty() {
            self.add_wave();
        }
    }

    fn wave_mut(&mut self, id: u32) -> Option<&mut Wave> {
        self.waves.iter_mut().find(|w| w.id == id)
    }
}

/// Split `amplitude_3` into `("amplitude", 3)`.
fn split_key(key: &str) -> Option<(&str, u32)> {
    let (name, id) = key.rsplit_once('_')?;
    Some((name, id.parse().ok()?))
}

impl Simulation for WaveMotion {
    fn controls(&self) -> ControlSet {
        let mut controls = ControlSet::new()
            .toggle("interference", "Interference Mode", self.interference)
            .button("add_wave", "Add Wave");
        for wave in &self.waves {
            let id = wave.id;
            controls = controls
                .range(&format!("amplitude_{id}"), "Amplitude", 10.0, 150.0, 1.0, wave.amplitude)
                .range(
                    &format!("frequency_{id}"),
                    "Frequency",
                    0.005,
                    0.05,
                    0.001,
                    wave.frequency,
                )
                .range(
                    &format!("phase_shift_{id}"),
                    "Phase Shift",
                    0.0,
                    std::f32::consts::TAU,
                    0.05,
                    wave.phase_shift,
                )
                .range_with_unit(
                    &format!("speed_{id}"),
                    "Wave Speed",
                    0.0,
                    5.0,
                    0.1,
                    wave.speed,
                    Some("x"),
                );
            if self.waves.len() > 1 {
                controls = controls.button(&format!("remove_{id}"), "Remove");
            }
        }
        controls
    }

    fn scheduling(&self) -> Scheduling {
        Scheduling::Continuous
    }

    fn setup(&mut self, _surface: &CanvasSurface) {}

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        if key == "interference" {
            if let Some(flag) = value.as_flag() {
                self.interference = flag;
            }
            return;
        }
        let (Some((name, id)), Some(n)) = (split_key(key), value.as_number()) else {
            return;
        };
        if let Some(wave) = self.wave_mut(id) {
            match name {
                "amplitude" => wave.amplitude = n,
                "frequency" => wave.frequency = n,
                "phase_shift" => wave.phase_shift = n,
                "speed" => wave.speed = n,
                _ => {}
            }
        }
    }

    fn on_action(&mut self, key: &str) {
        if key == "add_wave" {
            self.add_wave();
        } else if let Some(("remove", id)) = split_key(key) {
            self.remove_wave(id);
        }
    }

    fn step(&mut self, dt: f32) {
        // The phase formula was written against millisecond timestamps.
        self.time += dt * 1000.0;
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);
        let mid_y = surface.height * 0.5;
        scene.line(
            Vec2::new(0.0, mid_y),
            Vec2::new(surface.width, mid_y),
            1.0,
            AXIS_COLOR,
        );

        let samples = surface.width as usize + 1;
        if self.interference {
            let points: Vec<Vec2> = (0..samples)
                .map(|x| {
                    let x = x as f32;
                    let y: f32 = self.waves.iter().map(|w| w.sample(x, self.time)).sum();
                    Vec2::new(x, mid_y + y)
                })
                .collect();
            scene.polyline(points, 3.0, WHITE);
        } else {
            for wave in &self.waves {
                let points: Vec<Vec2> = (0..samples)
                    .map(|x| {
                        let x = x as f32;
                        Vec2::new(x, mid_y + wave.sample(x, self.time))
                    })
                    .collect();
                scene.polyline(points, 2.0, wave.color);
            }
        }
    }
}
