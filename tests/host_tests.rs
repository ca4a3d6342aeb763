use glam::Vec2;
use simbox::controls::ControlValue;
use simbox::host::SimulationHost;
use simbox::simulation::{Scheduling, FIXED_DT};
use simbox::sims;

fn mount(name: &str, css_width: f32) -> SimulationHost {
    let sim = sims::by_name(name).unwrap_or_else(|| panic!("unknown demo {name}"));
    SimulationHost::new(sim, css_width, 1.0)
}

/// Drain the frame the host owes after mounting.
fn mounted(name: &str) -> SimulationHost {
    let mut host = mount(name, 900.0);
    assert!(host.frame().is_some(), "mount should produce an initial frame");
    host
}

#[test]
fn test_on_demand_demo_idles_between_inputs() {
    let mut host = mounted("lens");
    assert_eq!(host.scheduling(), Scheduling::OnDemand);
    assert!(host.frame().is_none());
    assert!(!host.tick(FIXED_DT), "on-demand demos do not step");
    assert!(host.frame().is_none());
}

#[test]
fn test_control_change_produces_one_frame() {
    let mut host = mounted("lens");
    host.set_control("focal_length", ControlValue::Number(200.0));
    assert!(host.frame().is_some());
    assert!(host.frame().is_none(), "one change, one frame");
}

#[test]
fn test_unknown_control_key_is_dropped() {
    let mut host = mounted("lens");
    host.set_control("warp_factor", ControlValue::Number(9.0));
    assert!(host.frame().is_none());
}

#[test]
fn test_type_mismatch_is_dropped() {
    let mut host = mounted("lens");
    host.set_control("focal_length", ControlValue::Flag(true));
    assert!(host.frame().is_none());
}

#[test]
fn test_continuous_demo_redraws_every_tick() {
    let mut host = mounted("pendulum");
    assert_eq!(host.scheduling(), Scheduling::Continuous);
    for _ in 0..10 {
        assert!(host.tick(FIXED_DT));
        assert!(host.frame().is_some());
    }
}

#[test]
fn test_action_switches_projectile_scheduling() {
    let mut host = mounted("projectile");
    assert_eq!(host.scheduling(), Scheduling::OnDemand);
    host.action("launch");
    assert!(host.frame().is_some());
    assert_eq!(host.scheduling(), Scheduling::Continuous);

    // Default launch lands after 7.21 simulated seconds at 5x time scale.
    for _ in 0..(30 * 60) {
        if !host.tick(FIXED_DT) {
            break;
        }
    }
    assert_eq!(host.scheduling(), Scheduling::OnDemand);
}

#[test]
fn test_pointer_miss_requests_no_frame() {
    let mut host = mounted("lens");
    host.pointer_down(Vec2::new(5.0, 5.0));
    assert!(host.frame().is_none());
    host.pointer_move(Vec2::new(6.0, 5.0));
    assert!(host.frame().is_none());
}

#[test]
fn test_pointer_drag_round_trip() {
    // Lens object starts at (-300, -50) around a centered origin: that is
    // (150, 200) on a 900x500 canvas.
    let mut host = mounted("lens");
    host.pointer_down(Vec2::new(150.0, 200.0));
    assert!(host.frame().is_some(), "arming highlights the target");

    host.pointer_move(Vec2::new(180.0, 220.0));
    assert!(host.frame().is_some());

    host.pointer_up();
    assert!(host.frame().is_some(), "release clears the highlight");
    host.pointer_move(Vec2::new(400.0, 400.0));
    assert!(host.frame().is_none(), "moves after release are ignored");
}

#[test]
fn test_resize_reruns_setup_and_redraws() {
    let mut host = mounted("unit-circle");
    host.resize(600.0, 1.0);
    assert_eq!(host.surface().width, 600.0);
    assert_eq!(host.surface().height, 600.0);
    assert!(host.frame().is_some());

    // Same dimensions again is not a resize.
    host.resize(600.0, 1.0);
    assert!(host.frame().is_none());
}

#[test]
fn test_backing_store_tracks_device_pixel_ratio() {
    let host = mount("pendulum", 800.0);
    assert_eq!(host.surface().backing_width(), 800);

    let sim = sims::by_name("pendulum").unwrap();
    let host = SimulationHost::new(sim, 800.0, 2.0);
    assert_eq!(host.surface().backing_width(), 1600);
    assert_eq!(host.surface().width, 800.0, "logical size is density independent");
}

#[test]
fn test_first_declared_button_drives_the_demo() {
    // The keyboard shortcut fires whatever button a demo declares first.
    let mut host = mounted("projectile");
    let key = host.controls().buttons().next().map(str::to_string);
    assert_eq!(key.as_deref(), Some("launch"));
    if let Some(key) = key {
        host.action(&key);
    }
    assert_eq!(host.scheduling(), Scheduling::Continuous);
    assert!(host.frame().is_some());
}

#[test]
fn test_dynamic_controls_rebuild_after_action() {
    let mut host = mounted("waves");
    let before = host.controls().len();
    host.action("add_wave");
    // Four sliders for the new wave, plus remove buttons on both waves.
    assert_eq!(host.controls().len(), before + 6);
}
