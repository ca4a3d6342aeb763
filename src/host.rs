//! Generic canvas simulation host.
//!
//! Owns everything one mounted demo needs: the surface description, the drag
//! state machine, and the redraw flag that drives on-demand scheduling. All
//! cross-frame handles live in this struct, so dropping the host tears the
//! demo down in one place.

use crate::controls::{ControlSet, ControlValue};
use crate::drag::DragController;
use crate::mapper;
use crate::scene::Scene;
use crate::simulation::{Scheduling, Simulation};
use crate::surface::CanvasSurface;
use glam::Vec2;

pub struct SimulationHost {
    sim: Box<dyn Simulation>,
    surface: CanvasSurface,
    drag: DragController,
    needs_redraw: bool,
}

impl SimulationHost {
    pub fn new(sim: Box<dyn Simulation>, css_width: f32, device_pixel_ratio: f32) -> Self {
        let surface =
            CanvasSurface::from_container(css_width, sim.height_policy(), device_pixel_ratio);
        let mut host = Self {
            sim,
            surface,
            drag: DragController::new(),
            needs_redraw: true,
        };
        host.sim.setup(&host.surface);
        host
    }

    pub fn surface(&self) -> &CanvasSurface {
        &self.surface
    }

    pub fn scheduling(&self) -> Scheduling {
        self.sim.scheduling()
    }

    pub fn controls(&self) -> ControlSet {
        self.sim.controls()
    }

    /// Container resize: recompute the surface and re-run demo setup. The
    /// demo decides whether that re-anchors geometry or preserves state.
    pub fn resize(&mut self, css_width: f32, device_pixel_ratio: f32) {
        let surface =
            CanvasSurface::from_container(css_width, self.sim.height_policy(), device_pixel_ratio);
        if surface != self.surface {
            self.surface = surface;
            self.sim.setup(&self.surface);
            self.needs_redraw = true;
        }
    }

    /// Clamp `value` against the demo's declared control range and forward
    /// it. Unknown keys and type mismatches are dropped.
    pub fn set_control(&mut self, key: &str, value: ControlValue) {
        let Some(clamped) = self.sim.controls().clamp(key, value) else {
            log::warn!("ignoring control change for unknown key {key:?}");
            return;
        };
        self.sim.on_control_change(key, &clamped);
        self.needs_redraw = true;
    }

    pub fn action(&mut self, key: &str) {
        self.sim.on_action(key);
        self.needs_redraw = true;
    }

    pub fn pointer_down(&mut self, screen: Vec2) {
        let point = mapper::to_sim(screen, &self.surface, self.sim.origin());
        if self.drag.pointer_down(point, &self.sim.draggables()).is_some() {
            self.needs_redraw = true;
        }
    }

    pub fn pointer_move(&mut self, screen: Vec2) {
        let point = mapper::to_sim(screen, &self.surface, self.sim.origin());
        if let Some((target, position)) = self.drag.pointer_move(point) {
            self.sim.drag(target, position);
            self.needs_redraw = true;
        }
    }

    /// Release or cancel; ends the drag session.
    pub fn pointer_up(&mut self) {
        if self.drag.armed().is_some() {
            self.needs_redraw = true;
        }
        self.drag.pointer_up();
    }

    /// Advance continuous demos by one fixed timestep. Returns whether a
    /// step was taken.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.sim.scheduling() {
            Scheduling::Continuous => {
                self.sim.step(dt);
                self.needs_redraw = true;
                true
            }
            Scheduling::OnDemand => false,
        }
    }

    /// Build the next frame, or None when nothing changed since the last
    /// one (on-demand demos idle between inputs).
    pub fn frame(&mut self) -> Option<Scene> {
        if !self.needs_redraw {
            return None;
        }
        self.needs_redraw = false;
        let mut scene = Scene::new();
        self.sim.draw(&mut scene, &self.surface, self.drag.armed());
        Some(scene)
    }
}
