use simbox::host::SimulationHost;
use simbox::scene::Primitive;
use simbox::simulation::FIXED_DT;
use simbox::sims;

#[test]
fn test_every_demo_mounts_and_draws() {
    for name in sims::DEMO_NAMES {
        let sim = sims::by_name(name).unwrap_or_else(|| panic!("unknown demo {name}"));
        let mut host = SimulationHost::new(sim, 900.0, 1.0);
        let scene = host
            .frame()
            .unwrap_or_else(|| panic!("{name} produced no initial frame"));
        assert!(
            scene.background().is_some(),
            "{name} should open its frame with a clear",
        );
        assert!(
            scene.primitives().len() > 1,
            "{name} drew nothing beyond the clear",
        );
    }
}

#[test]
fn test_every_demo_survives_a_minute_of_stepping() {
    for name in sims::DEMO_NAMES {
        let sim = sims::by_name(name).unwrap_or_else(|| panic!("unknown demo {name}"));
        let mut host = SimulationHost::new(sim, 900.0, 1.0);
        for _ in 0..(60 * 60) {
            if !host.tick(FIXED_DT) {
                break;
            }
        }
        let Some(scene) = host.frame() else {
            // On-demand demos owe at most the initial frame.
            continue;
        };
        for primitive in scene.primitives() {
            assert_finite(name, primitive);
        }
    }
}

#[test]
fn test_small_angle_pendulum_period() {
    use simbox::simulation::Simulation;
    use simbox::sims::pendulum::Pendulum;

    // T = 2π·sqrt(L/g) with L = 200, g = 9.81: about 28.36 s, so the first
    // zero crossing from rest sits a quarter period in.
    let mut pendulum = Pendulum {
        angle: 0.1,
        angular_velocity: 0.0,
        ..Pendulum::default()
    };
    let mut steps = 0;
    while pendulum.angle > 0.0 {
        pendulum.step(FIXED_DT);
        steps += 1;
        assert!(steps < 10_000, "pendulum never crossed zero");
    }
    let quarter_period = steps as f32 * FIXED_DT;
    let expected = 0.25 * std::f32::consts::TAU * (200.0_f32 / 9.81).sqrt();
    assert!(
        (quarter_period - expected).abs() < expected * 0.02,
        "quarter period {quarter_period} s, expected {expected} s",
    );
}

fn assert_finite(name: &str, primitive: &Primitive) {
    let points: Vec<glam::Vec2> = match primitive {
        Primitive::Clear { .. } => vec![],
        Primitive::Rect { origin, size, .. } => vec![*origin, *size],
        Primitive::Line { from, to, .. } | Primitive::DashedLine { from, to, .. } => {
            vec![*from, *to]
        }
        Primitive::Polyline { points, .. } | Primitive::FillPolygon { points, .. } => {
            points.clone()
        }
        Primitive::FillCircle { center, .. }
        | Primitive::StrokeCircle { center, .. }
        | Primitive::Arc { center, .. } => vec![*center],
        Primitive::Label { at, .. } => vec![*at],
    };
    for p in points {
        assert!(p.is_finite(), "{name} emitted a non-finite primitive: {primitive:?}");
    }
}
