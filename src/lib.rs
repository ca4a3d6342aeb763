//! Interactive physics and math demos on a shared canvas runtime.
//!
//! The crate splits into a small engine and a catalog of demos. The engine
//! side is a coordinate [`mapper`], a [`drag`] state machine, a [`scene`]
//! display list with a wgpu [`render`] backend, and a [`host`] that wires one
//! [`simulation::Simulation`] to a sized [`surface`]. Each demo under [`sims`]
//! is plain state plus `step`/`draw`/`drag`, stepped on a fixed timestep.

pub mod controls;
pub mod drag;
pub mod geometry;
pub mod host;
pub mod mapper;
pub mod render;
pub mod scene;
pub mod simulation;
pub mod sims;
pub mod surface;
