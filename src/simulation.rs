//! The seam between the generic host and one demo.
//!
//! A demo is a plain state record plus a stepper and a renderer. The host
//! owns scheduling, surface sizing, coordinate mapping, and drag routing;
//! the demo only declares its controls and answers `step`/`draw`/`drag`.

use crate::controls::{ControlSet, ControlValue};
use crate::drag::Draggable;
use crate::mapper::OriginPolicy;
use crate::scene::Scene;
use crate::surface::{CanvasSurface, HeightPolicy};
use glam::Vec2;

/// Fixed physics timestep shared by all demos.
pub const FIXED_DT: f32 = 1.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheduling {
    /// Step and redraw every display frame.
    Continuous,
    /// Redraw only when controls, state, or the surface change.
    OnDemand,
}

pub trait Simulation {
    /// Declarative control surface. Queried after every action so demos may
    /// grow or shrink it (the wave lab adds controls per wave).
    fn controls(&self) -> ControlSet;

    fn height_policy(&self) -> HeightPolicy {
        HeightPolicy::DEFAULT
    }

    /// Where pointer coordinates land in this demo's space.
    fn origin(&self) -> OriginPolicy {
        OriginPolicy::SCREEN
    }

    /// Queried every frame, so a demo may switch modes (projectile is
    /// continuous only while a shot is in flight).
    fn scheduling(&self) -> Scheduling {
        Scheduling::OnDemand
    }

    /// Called whenever the drawing surface is (re)established. State is
    /// preserved unless the demo deliberately re-anchors its geometry.
    fn setup(&mut self, surface: &CanvasSurface);

    /// `value` has already been clamped to the control's declared range.
    fn on_control_change(&mut self, _key: &str, _value: &ControlValue) {}

    fn on_action(&mut self, _key: &str) {}

    fn step(&mut self, _dt: f32) {}

    /// Rebuild the display list for the current state. `armed` is the
    /// currently dragged entity, for highlight styling.
    fn draw(&self, scene: &mut Scene, surface: &CanvasSurface, armed: Option<u32>);

    /// Draggable entities in hit-test priority order, in simulation space.
    fn draggables(&self) -> Vec<Draggable> {
        Vec::new()
    }

    /// Move the armed entity's origin to `point` (simulation space). The
    /// demo applies its own constraint before committing the position.
    fn drag(&mut self, _target: u32, _point: Vec2) {}
}
