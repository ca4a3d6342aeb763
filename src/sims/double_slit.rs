//! Two-slit interference fringes on a screen.
//!
//! Static diagram: a barrier with two slits at 20% of the width, a screen at
//! 80%, and one intensity scanline per CSS pixel of height from the two-path
//! phase difference `Δφ = 2π·Δpath/λ`, `I = I_max·cos²(Δφ/2)`.

use crate::controls::{ControlSet, ControlValue};
use crate::scene::{rgba, Color, Scene, DARK_BACKGROUND, WHITE};
use crate::simulation::Simulation;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

const BARRIER_WIDTH: f32 = 8.0;

pub struct DoubleSlit {
    pub wavelength: f32,
    pub slit_separation: f32,
    pub slit_width: f32,
}

impl Default for DoubleSlit {
    fn default() -> Self {
        Self {
            wavelength: 10.0,
            slit_separation: 50.0,
            slit_width: 10.0,
        }
    }
}

/// Relative fringe intensity in [0, 1] at screen height `y`.
pub fn intensity(y: f32, slit1_y: f32, slit2_y: f32, throw: f32, wavelength: f32) -> f32 {
    let path1 = (throw * throw + (y - slit1_y).powi(2)).sqrt();
    let path2 = (throw * throw + (y - slit2_y).powi(2)).sqrt();
    let phase = 2.0 * std::f32::consts::PI * (path1 - path2).abs() / wavelength;
    (phase / 2.0).cos().powi(2)
}

/// Fringe tint tracks the wavelength slider across the red end of the wheel.
fn fringe_color(wavelength: f32, alpha: f32) -> Color {
    let hue = (380.0 + wavelength * 2.0) % 360.0;
    let h = hue / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    rgba(r, g, b, alpha)
}

impl Simulation for DoubleSlit {
    fn controls(&self) -> ControlSet {
        ControlSet::new()
            .range_with_unit("wavelength", "Wavelength (λ)", 5.0, 20.0, 0.5, 10.0, Some("nm"))
            .range_with_unit("slit_separation", "Slit Separation (d)", 20.0, 100.0, 1.0, 50.0, Some("px"))
            .range_with_unit("slit_width", "Slit Width (a)", 2.0, 20.0, 1.0, 10.0, Some("px"))
    }

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::Fixed(500.0)
    }

    fn setup(&mut self, _surface: &CanvasSurface) {}

    fn on_control_change(&mut self, key: &str, value: &ControlValue) {
        let Some(n) = value.as_number() else { return };
        match key {
            "wavelength" => self.wavelength = n,
            "slit_separation" => self.slit_separation = n,
            "slit_width" => self.slit_width = n,
            _ => {}
        }
    }

    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, _armed: Option<u32>) {
        scene.clear(DARK_BACKGROUND);

        let slit_x = surface.width * 0.2;
        let screen_x = surface.width * 0.8;
        let screen_width = surface.width * 0.15;
        let throw = screen_x - slit_x;
        let center_y = surface.height * 0.5;

        let slit1_y = center_y - self.slit_separation / 2.0;
        let slit2_y = center_y + self.slit_separation / 2.0;
        let slit1_top = slit1_y - self.slit_width / 2.0;
        let slit1_bottom = slit1_y + self.slit_width / 2.0;
        let slit2_top = slit2_y - self.slit_width / 2.0;
        let slit2_bottom = slit2_y + self.slit_width / 2.0;

        // Barrier in three pieces, leaving the slits open.
        let barrier_x = slit_x - BARRIER_WIDTH / 2.0;
        scene.rect(Vec2::new(barrier_x, 0.0), Vec2::new(BARRIER_WIDTH, slit1_top), WHITE);
        scene.rect(
            Vec2::new(barrier_x, slit1_bottom),
            Vec2::new(BARRIER_WIDTH, slit2_top - slit1_bottom),
            WHITE,
        );
        scene.rect(
            Vec2::new(barrier_x, slit2_bottom),
            Vec2::new(BARRIER_WIDTH, surface.height - slit2_bottom),
            WHITE,
        );

        // One scanline per pixel row, alpha carrying the intensity.
        let mut y = 0.0;
        while y < surface.height {
            let i = intensity(y, slit1_y, slit2_y, throw, self.wavelength);
            scene.rect(
                Vec2::new(screen_x, y),
                Vec2::new(screen_width, 1.0),
                fringe_color(self.wavelength, i),
            );
            y += 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_central_fringe_is_brightest() {
        // Equidistant from both slits: zero path difference, full intensity.
        let i = intensity(250.0, 225.0, 275.0, 480.0, 10.0);
        assert_relative_eq!(i, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_intensity_is_symmetric_about_center() {
        let a = intensity(200.0, 225.0, 275.0, 480.0, 10.0);
        let b = intensity(300.0, 225.0, 275.0, 480.0, 10.0);
        assert_relative_eq!(a, b, epsilon = 1e-4);
    }

    #[test]
    fn test_intensity_stays_normalized() {
        for y in 0..500 {
            let i = intensity(y as f32, 225.0, 275.0, 480.0, 7.5);
            assert!((0.0..=1.0).contains(&i));
        }
    }
}
