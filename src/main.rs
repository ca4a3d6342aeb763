//! Windowed runner for the demo catalog.
//!
//! This module handles:
//! - Command-line argument parsing
//! - Window creation and event loop
//! - Pointer and keyboard routing into the simulation host
//! - Fixed-timestep pacing for continuous demos
//!
//! # Event Handling
//! - Mouse drag / touch: forwarded to the demo's drag targets
//! - Space: first declared action button (fire, reset, add wave)
//! - Q/Escape: Exit application
//! - Window resize: re-derive the canvas surface and viewport

use clap::Parser;
use simbox::{
    host::SimulationHost,
    render::{gpu::GpuContext, Renderer},
    simulation::{Scheduling, FIXED_DT},
    sims,
};
use std::time::Instant;
use winit::{
    dpi::{LogicalSize, PhysicalPosition},
    event::{ElementState, Event, KeyEvent, MouseButton, Touch, TouchPhase, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

const DEFAULT_WIDTH: f32 = 900.0;
/// Cap on accumulated real time, so a long stall never triggers a step burst.
const MAX_FRAME_TIME: f32 = 0.25;

#[derive(Parser, Debug)]
#[command(name = "simbox")]
#[command(about = "Interactive canvas physics and math demos")]
struct Args {
    /// Demo to run (see --list)
    #[arg(long, default_value = "pendulum")]
    demo: String,

    /// Canvas width in CSS pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f32,

    /// List available demos and exit
    #[arg(long)]
    list: bool,
}

struct InputState {
    cursor: PhysicalPosition<f64>,
    /// Touch id currently acting as the pointer, if any.
    active_touch: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        for name in sims::DEMO_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let sim = sims::by_name(&args.demo)
        .ok_or_else(|| format!("unknown demo {:?}, try --list", args.demo))?;

    let event_loop = EventLoop::new()?;
    let window = create_window(&event_loop, &args, sim.height_policy())?;
    let scale = window.scale_factor() as f32;

    let mut host = SimulationHost::new(sim, args.width, scale);
    let gpu = pollster::block_on(GpuContext::new())?;
    let mut renderer = Renderer::new(&window, &gpu, host.surface())?;

    log::info!(
        "running {:?} at {}x{} css px (dpr {scale})",
        args.demo,
        host.surface().width,
        host.surface().height,
    );

    let mut input = InputState {
        cursor: PhysicalPosition::new(0.0, 0.0),
        active_touch: None,
    };
    let mut last_update = Instant::now();
    let mut accumulator = 0.0_f32;

    event_loop.run(move |event, elwt| {
        // Continuous demos poll; on-demand demos sleep until input arrives.
        elwt.set_control_flow(match host.scheduling() {
            Scheduling::Continuous => ControlFlow::Poll,
            Scheduling::OnDemand => ControlFlow::Wait,
        });

        match event {
            Event::AboutToWait => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_update).as_secs_f32();
                last_update = now;
                accumulator = (accumulator + elapsed).min(MAX_FRAME_TIME);

                let mut stepped = false;
                while accumulator >= FIXED_DT {
                    if !host.tick(FIXED_DT) {
                        accumulator = 0.0;
                        break;
                    }
                    accumulator -= FIXED_DT;
                    stepped = true;
                }
                if stepped {
                    window.request_redraw();
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(physical_size) => {
                    let scale = window.scale_factor() as f32;
                    host.resize(physical_size.width as f32 / scale, scale);
                    renderer.resize(&gpu, physical_size, host.surface());
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.cursor = position;
                    host.pointer_move(cursor_css(&window, position));
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    match state {
                        ElementState::Pressed => {
                            host.pointer_down(cursor_css(&window, input.cursor));
                        }
                        ElementState::Released => host.pointer_up(),
                    }
                    window.request_redraw();
                }
                WindowEvent::Touch(touch) => {
                    handle_touch(&mut host, &mut input, &window, touch);
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    event: KeyEvent { physical_key, state: ElementState::Pressed, .. },
                    ..
                } => {
                    if let winit::keyboard::PhysicalKey::Code(code) = physical_key {
                        handle_key(&mut host, elwt, code);
                        window.request_redraw();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Some(scene) = host.frame() {
                        renderer.upload(&gpu, &scene);
                    }
                    match renderer.render(&gpu) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            renderer.resize(&gpu, window.inner_size(), host.surface());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::error!("render error: {e:?}"),
                    }
                }
                _ => {}
            },
            _ => {}
        }
    })?;

    Ok(())
}

/// Size the window from the demo's height policy before mounting.
fn create_window(
    event_loop: &EventLoop<()>,
    args: &Args,
    policy: simbox::surface::HeightPolicy,
) -> Result<winit::window::Window, Box<dyn std::error::Error>> {
    let height = policy.height_for(args.width);
    let window = WindowBuilder::new()
        .with_title(format!("simbox - {}", args.demo))
        .with_inner_size(LogicalSize::new(args.width, height))
        .build(event_loop)?;
    Ok(window)
}

/// Cursor position in CSS (logical) pixels.
fn cursor_css(window: &winit::window::Window, position: PhysicalPosition<f64>) -> glam::Vec2 {
    let scale = window.scale_factor() as f32;
    glam::Vec2::new(position.x as f32, position.y as f32) / scale
}

/// The first touch point acts as the pointer; later fingers are ignored.
fn handle_touch(
    host: &mut SimulationHost,
    input: &mut InputState,
    window: &winit::window::Window,
    touch: Touch,
) {
    match touch.phase {
        TouchPhase::Started => {
            if input.active_touch.is_none() {
                input.active_touch = Some(touch.id);
                host.pointer_down(cursor_css(window, touch.location));
            }
        }
        TouchPhase::Moved => {
            if input.active_touch == Some(touch.id) {
                host.pointer_move(cursor_css(window, touch.location));
            }
        }
        TouchPhase::Ended | TouchPhase::Cancelled => {
            if input.active_touch == Some(touch.id) {
                input.active_touch = None;
                host.pointer_up();
            }
        }
    }
}

fn handle_key(
    host: &mut SimulationHost,
    elwt: &winit::event_loop::EventLoopWindowTarget<()>,
    code: winit::keyboard::KeyCode,
) {
    match code {
        winit::keyboard::KeyCode::KeyQ | winit::keyboard::KeyCode::Escape => elwt.exit(),
        winit::keyboard::KeyCode::Space => {
            // Space maps to the demo's first action button.
            let key = host.controls().buttons().next().map(str::to_string);
            if let Some(key) = key {
                host.action(&key);
            }
        }
        _ => {}
    }
}
