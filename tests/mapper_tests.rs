use glam::Vec2;
use simbox::mapper::{self, OriginAnchor, OriginPolicy};
use simbox::surface::{CanvasSurface, HeightPolicy};

fn surface() -> CanvasSurface {
    CanvasSurface::from_container(800.0, HeightPolicy::Fixed(500.0), 1.0)
}

#[test]
fn test_screen_policy_is_the_identity() {
    let surface = surface();
    let point = Vec2::new(123.0, 456.0);
    assert_eq!(mapper::to_sim(point, &surface, OriginPolicy::SCREEN), point);
    assert_eq!(mapper::to_screen(point, &surface, OriginPolicy::SCREEN), point);
}

#[test]
fn test_centered_policy_shifts_the_origin() {
    let surface = surface();
    // Canvas center maps to the simulation origin, y still grows downward.
    assert_eq!(
        mapper::to_sim(Vec2::new(400.0, 250.0), &surface, OriginPolicy::CENTERED),
        Vec2::ZERO,
    );
    assert_eq!(
        mapper::to_sim(Vec2::new(400.0, 300.0), &surface, OriginPolicy::CENTERED),
        Vec2::new(0.0, 50.0),
    );
}

#[test]
fn test_math_policy_flips_y_and_scales() {
    let surface = surface();
    let policy = OriginPolicy::math(40.0);
    // One unit above the origin is 40 px up the screen.
    assert_eq!(
        mapper::to_screen(Vec2::new(0.0, 1.0), &surface, policy),
        Vec2::new(400.0, 210.0),
    );
    assert_eq!(
        mapper::to_sim(Vec2::new(440.0, 250.0), &surface, policy),
        Vec2::new(1.0, 0.0),
    );
}

#[test]
fn test_custom_policy_composes_anchor_flip_and_scale() {
    let surface = surface();
    let policy = OriginPolicy {
        anchor: OriginAnchor::TopLeft,
        y_up: true,
        pixels_per_unit: 10.0,
    };
    assert_eq!(
        mapper::to_sim(Vec2::new(100.0, 200.0), &surface, policy),
        Vec2::new(10.0, -20.0),
    );
    assert_eq!(
        mapper::to_screen(Vec2::new(10.0, -20.0), &surface, policy),
        Vec2::new(100.0, 200.0),
    );
}

#[test]
fn test_round_trip_for_every_policy() {
    let surface = surface();
    let policies = [
        OriginPolicy::SCREEN,
        OriginPolicy::CENTERED,
        OriginPolicy::math(40.0),
        OriginPolicy::math(2.0),
    ];
    let point = Vec2::new(137.5, 411.25);
    for policy in policies {
        let round_trip = mapper::to_screen(mapper::to_sim(point, &surface, policy), &surface, policy);
        assert!(
            round_trip.distance(point) < 1e-3,
            "round trip moved {point:?} to {round_trip:?} under {policy:?}",
        );
    }
}

#[test]
fn test_points_outside_the_canvas_still_map() {
    let surface = surface();
    // Mapping is total: out-of-canvas pointer positions produce out-of-range
    // coordinates rather than failing.
    let outside = Vec2::new(-50.0, 900.0);
    let sim = mapper::to_sim(outside, &surface, OriginPolicy::math(40.0));
    assert!(sim.x.is_finite() && sim.y.is_finite());
    assert_eq!(mapper::to_screen(sim, &surface, OriginPolicy::math(40.0)), outside);
}
