//! Demo catalog.

pub mod cyclic_quad;
pub mod double_slit;
pub mod gas;
pub mod gravity;
pub mod lens;
pub mod linear_transform;
pub mod pendulum;
pub mod projectile;
pub mod pythagorean;
pub mod unit_circle;
pub mod waves;

use crate::simulation::Simulation;

pub const DEMO_NAMES: [&str; 11] = [
    "pendulum",
    "gravity",
    "projectile",
    "gas",
    "lens",
    "double-slit",
    "waves",
    "unit-circle",
    "pythagorean",
    "cyclic-quad",
    "linear-transform",
];

/// Instantiate a demo by its catalog name.
pub fn by_name(name: &str) -> Option<Box<dyn Simulation>> {
    let sim: Box<dyn Simulation> = match name {
        "pendulum" => Box::new(pendulum::Pendulum::default()),
        "gravity" => Box::new(gravity::Gravity::default()),
        "projectile" => Box::new(projectile::Projectile::default()),
        "gas" => Box::new(gas::GasLaws::default()),
        "lens" => Box::new(lens::Lens::default()),
        "double-slit" => Box::new(double_slit::DoubleSlit::default()),
        "waves" => Box::new(waves::WaveMotion::default()),
        "unit-circle" => Box::new(unit_circle::UnitCircle::default()),
        "pythagorean" => Box::new(pythagorean::Pythagorean::default()),
        "cyclic-quad" => Box::new(cyclic_quad::CyclicQuadrilateral::default()),
        "linear-transform" => Box::new(linear_transform::LinearTransform::default()),
        _ => return None,
    };
    Some(sim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_name_resolves() {
        for name in DEMO_NAMES {
            assert!(by_name(name).is_some(), "missing demo {name}");
        }
        assert!(by_name("perpetual-motion").is_none());
    }
}
