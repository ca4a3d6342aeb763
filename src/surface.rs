//! Canvas surface sizing.
//!
//! The backing store is `css_size * device_pixel_ratio` device pixels while
//! everything downstream draws in CSS-pixel units; the renderer applies the
//! density scale when it maps to clip space. Resizing replaces only the
//! surface description, never the simulation state.

use glam::Vec2;

/// How a demo derives its canvas height from the container width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeightPolicy {
    /// Fixed height in CSS pixels.
    Fixed(f32),
    /// Height equals width.
    Square,
    /// Height is `width / ratio`.
    Aspect(f32),
}

impl HeightPolicy {
    /// Widescreen default used when a demo declares nothing.
    pub const DEFAULT: HeightPolicy = HeightPolicy::Aspect(16.0 / 9.0);

    pub fn height_for(self, css_width: f32) -> f32 {
        match self {
            HeightPolicy::Fixed(height) => height,
            HeightPolicy::Square => css_width,
            HeightPolicy::Aspect(ratio) => css_width / ratio,
        }
    }
}

impl Default for HeightPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Logical drawing rectangle of a mounted canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSurface {
    /// Width in CSS pixels.
    pub width: f32,
    /// Height in CSS pixels.
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl CanvasSurface {
    pub fn from_container(css_width: f32, policy: HeightPolicy, device_pixel_ratio: f32) -> Self {
        Self {
            width: css_width,
            height: policy.height_for(css_width),
            device_pixel_ratio,
        }
    }

    /// Backing-store width in device pixels.
    pub fn backing_width(&self) -> u32 {
        (self.width * self.device_pixel_ratio).round() as u32
    }

    /// Backing-store height in device pixels.
    pub fn backing_height(&self) -> u32 {
        (self.height * self.device_pixel_ratio).round() as u32
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}
