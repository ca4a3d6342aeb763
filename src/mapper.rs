//! Pure screen/simulation coordinate mapping.
//!
//! Screen space is CSS pixels with the origin at the canvas top-left and y
//! growing downward. A simulation picks where its own origin sits, whether
//! its y axis points up, and how many pixels one simulation unit covers.
//! Both directions are total functions: points outside the canvas map to
//! out-of-range coordinates instead of failing.

use crate::surface::CanvasSurface;
use glam::Vec2;

/// Where the simulation origin sits in the canvas rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginAnchor {
    TopLeft,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OriginPolicy {
    pub anchor: OriginAnchor,
    /// Invert the vertical axis so y grows upward (math convention).
    pub y_up: bool,
    /// CSS pixels per simulation unit.
    pub pixels_per_unit: f32,
}

impl OriginPolicy {
    /// Raw screen coordinates: top-left origin, y down, one unit per pixel.
    pub const SCREEN: OriginPolicy = OriginPolicy {
        anchor: OriginAnchor::TopLeft,
        y_up: false,
        pixels_per_unit: 1.0,
    };

    /// Canvas-centered origin keeping the screen's y-down convention.
    pub const CENTERED: OriginPolicy = OriginPolicy {
        anchor: OriginAnchor::Center,
        y_up: false,
        pixels_per_unit: 1.0,
    };

    /// Math convention: centered origin, y up, scaled units.
    pub fn math(pixels_per_unit: f32) -> OriginPolicy {
        OriginPolicy {
            anchor: OriginAnchor::Center,
            y_up: true,
            pixels_per_unit,
        }
    }

    fn origin(&self, surface: &CanvasSurface) -> Vec2 {
        match self.anchor {
            OriginAnchor::TopLeft => Vec2::ZERO,
            OriginAnchor::Center => surface.center(),
        }
    }
}

/// Map a screen-space point into simulation space.
pub fn to_sim(screen: Vec2, surface: &CanvasSurface, policy: OriginPolicy) -> Vec2 {
    let offset = screen - policy.origin(surface);
    let y = if policy.y_up { -offset.y } else { offset.y };
    Vec2::new(offset.x, y) / policy.pixels_per_unit
}

/// Inverse of [`to_sim`].
pub fn to_screen(sim: Vec2, surface: &CanvasSurface, policy: OriginPolicy) -> Vec2 {
    let scaled = sim * policy.pixels_per_unit;
    let y = if policy.y_up { -scaled.y } else { scaled.y };
    Vec2::new(scaled.x, y) + policy.origin(surface)
}
