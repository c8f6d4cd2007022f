// Host-side tests for the hero field animator: drawing, frame loop gating and mounting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod core {
    pub mod animator {
        include!("../src/core/animator.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod field {
        include!("../src/core/field.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod render {
        include!("../src/core/render.rs");
    }
    pub use animator::*;
    pub use config::*;
    pub use field::*;
    pub use pointer::*;
    pub use render::*;
}

use crate::core::*;
use crate::error::SiteError;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
enum Cmd {
    Clear,
    Circle { center: DVec2, radius: f64 },
    Line { opacity: f64 },
    Glow { center: DVec2, radius: f64 },
}

#[derive(Default)]
struct RecordingSurface {
    cmds: Vec<Cmd>,
}

impl RecordingSurface {
    fn count(&self, pred: impl Fn(&Cmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.cmds.push(Cmd::Clear);
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, _color: Rgba) {
        self.cmds.push(Cmd::Circle { center, radius });
    }
    fn stroke_line(&mut self, _from: DVec2, _to: DVec2, _width: f64, color: Rgba) {
        self.cmds.push(Cmd::Line { opacity: color.a });
    }
    fn fill_radial_glow(
        &mut self,
        center: DVec2,
        radius: f64,
        _inner: Rgba,
        _outer: Rgba,
        _width: f64,
        _height: f64,
    ) {
        self.cmds.push(Cmd::Glow { center, radius });
    }
}

fn still_animator(spots: &[(f64, f64)]) -> Animator {
    let config = FieldConfig {
        node_count: spots.len(),
        ..FieldConfig::default()
    };
    let mut a = Animator::new(config, 2000.0, 2000.0, 9);
    for (p, (x, y)) in a.particles_mut().iter_mut().zip(spots.iter().copied()) {
        p.position = DVec2::new(x, y);
        p.velocity = DVec2::ZERO;
    }
    a
}

/// Runs one display tick: every pending frame executes and may re-arm.
fn tick(a: &mut Animator, surface: &mut RecordingSurface, pending: &mut usize) -> usize {
    let ran = std::mem::take(pending);
    for _ in 0..ran {
        if a.frame(surface) {
            *pending += 1;
        }
    }
    ran
}

#[test]
fn connection_opacity_decreases_with_distance() {
    let o1 = connection_opacity(10.0, 150.0, 0.15).unwrap();
    let o2 = connection_opacity(100.0, 150.0, 0.15).unwrap();
    assert!(o1 > o2);
    assert!((connection_opacity(0.0, 150.0, 0.15).unwrap() - 0.15).abs() < 1e-12);
    assert!((o2 - 0.05).abs() < 1e-12);
}

#[test]
fn no_connection_at_or_beyond_threshold() {
    assert_eq!(connection_opacity(150.0, 150.0, 0.15), None);
    assert_eq!(connection_opacity(151.0, 150.0, 0.15), None);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(NODE_COLOR.css(), "rgba(147, 197, 253, 0.5)");
    assert_eq!(NODE_COLOR.with_alpha(0.0).css(), "rgba(147, 197, 253, 0)");
}

#[test]
fn active_frame_draws_nodes_lines_and_glow() {
    // far from the pointer (origin) so nothing is attracted
    let mut a = still_animator(&[(1000.0, 1000.0), (1100.0, 1000.0), (1900.0, 1900.0)]);
    let mut s = RecordingSurface::default();
    assert!(a.activate());
    assert!(a.frame(&mut s));

    assert_eq!(s.cmds[0], Cmd::Clear);
    assert_eq!(s.count(|c| matches!(c, Cmd::Circle { .. })), 3);
    let lines: Vec<f64> = s
        .cmds
        .iter()
        .filter_map(|c| match c {
            Cmd::Line { opacity } => Some(*opacity),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 1);
    assert!((lines[0] - 0.05).abs() < 1e-12);
    assert_eq!(
        s.cmds.last(),
        Some(&Cmd::Glow {
            center: DVec2::ZERO,
            radius: 120.0
        })
    );
}

#[test]
fn circles_use_particle_radius_and_position() {
    let mut a = still_animator(&[(1500.0, 1500.0)]);
    let radius = a.particles()[0].radius;
    let mut s = RecordingSurface::default();
    a.activate();
    a.frame(&mut s);
    assert!(s.cmds.contains(&Cmd::Circle {
        center: DVec2::new(1500.0, 1500.0),
        radius
    }));
}

#[test]
fn glow_follows_the_smoothed_pointer() {
    let mut a = still_animator(&[(1500.0, 1500.0)]);
    let mut s = RecordingSurface::default();
    a.pointer_moved(100.0, 200.0);
    a.activate();
    a.frame(&mut s);
    assert_eq!(
        s.cmds.last(),
        Some(&Cmd::Glow {
            center: DVec2::new(8.0, 16.0),
            radius: 120.0
        })
    );
    assert_eq!(a.pointer().target, DVec2::new(100.0, 200.0));
}

#[test]
fn frame_bounces_particle_sitting_on_the_edge() {
    let mut a = still_animator(&[(0.0, 1000.0)]);
    a.particles_mut()[0].velocity = DVec2::new(-0.1, 0.05);
    let mut s = RecordingSurface::default();
    a.activate();
    a.frame(&mut s);
    let v = a.particles()[0].velocity;
    assert!(v.x > 0.0);
    assert_eq!(v.y, 0.05);
}

#[test]
fn entering_twice_schedules_one_loop() {
    let mut a = Animator::new(FieldConfig::default(), 800.0, 600.0, 1);
    let mut s = RecordingSurface::default();
    let mut pending = 0usize;
    if a.activate() {
        pending += 1;
    }
    if a.activate() {
        pending += 1;
    }
    assert_eq!(pending, 1);
    for _ in 0..10 {
        assert_eq!(tick(&mut a, &mut s, &mut pending), 1);
    }
    assert_eq!(s.count(|c| *c == Cmd::Clear), 10);
}

#[test]
fn reentering_before_the_pending_frame_keeps_one_loop() {
    let mut a = Animator::new(FieldConfig::default(), 800.0, 600.0, 1);
    let mut s = RecordingSurface::default();
    let mut pending = 0usize;
    if a.activate() {
        pending += 1;
    }
    a.deactivate();
    if a.activate() {
        pending += 1;
    }
    assert_eq!(pending, 1);
    assert_eq!(tick(&mut a, &mut s, &mut pending), 1);
    assert_eq!(pending, 1);
}

#[test]
fn leaving_stops_the_loop_with_a_cleared_surface() {
    let mut a = Animator::new(FieldConfig::default(), 800.0, 600.0, 1);
    let mut s = RecordingSurface::default();
    let mut pending = 0usize;
    if a.activate() {
        pending += 1;
    }
    tick(&mut a, &mut s, &mut pending);
    a.deactivate();
    s.cmds.clear();
    tick(&mut a, &mut s, &mut pending);
    assert_eq!(pending, 0);
    assert_eq!(s.cmds, vec![Cmd::Clear]);
    assert!(!a.is_scheduled());
    assert!(!a.is_active());

    // nothing runs until the pointer comes back
    assert_eq!(tick(&mut a, &mut s, &mut pending), 0);
    assert!(a.activate());
}

#[test]
fn pointer_keeps_smoothing_on_the_final_frame() {
    let mut a = Animator::new(FieldConfig::default(), 800.0, 600.0, 1);
    let mut s = RecordingSurface::default();
    a.pointer_moved(50.0, 0.0);
    a.frame(&mut s);
    assert!((a.pointer().current.x - 4.0).abs() < 1e-12);
}

#[test]
fn resize_keeps_count_and_does_not_touch_the_loop() {
    let mut a = Animator::new(FieldConfig::default(), 800.0, 600.0, 1);
    assert!(a.activate());
    a.resize(0.0, 0.0);
    assert_eq!(a.particles().len(), 35);
    a.resize(1440.0, 900.0);
    assert_eq!(a.particles().len(), 35);
    assert!(a.is_scheduled());
    assert!(!a.activate());
}

struct RecordingHost {
    env: Environment,
    present: bool,
    wire_error: Option<SiteError>,
    attach_calls: usize,
    wired: Vec<Rc<RefCell<Animator>>>,
}

impl RecordingHost {
    fn new(env: Environment) -> Self {
        Self {
            env,
            present: true,
            wire_error: None,
            attach_calls: 0,
            wired: Vec::new(),
        }
    }
}

impl Host for RecordingHost {
    fn environment(&self) -> Environment {
        self.env
    }

    fn attach_surface(&mut self) -> Result<(f64, f64), SiteError> {
        self.attach_calls += 1;
        if self.present {
            Ok((1280.0, 720.0))
        } else {
            Err(SiteError::MissingElement("heroCyberGrid"))
        }
    }

    fn wire(&mut self, animator: Rc<RefCell<Animator>>) -> Result<(), SiteError> {
        if let Some(e) = self.wire_error.clone() {
            return Err(e);
        }
        self.wired.push(animator);
        Ok(())
    }
}

#[test]
fn reduced_motion_opts_out_before_touching_the_page() {
    let mut host = RecordingHost::new(Environment {
        touch_primary: false,
        reduced_motion: true,
    });
    let mount = mount(&mut host, FieldConfig::default(), 1).unwrap();
    assert!(matches!(mount, Mount::OptedOut(OptOut::ReducedMotion)));
    assert!(mount.animator().is_none());
    assert_eq!(host.attach_calls, 0);
    assert!(host.wired.is_empty());
}

#[test]
fn touch_devices_opt_out() {
    let mut host = RecordingHost::new(Environment {
        touch_primary: true,
        reduced_motion: false,
    });
    let mount = mount(&mut host, FieldConfig::default(), 1).unwrap();
    assert!(matches!(mount, Mount::OptedOut(OptOut::Touch)));
    assert_eq!(host.attach_calls, 0);
    assert!(host.wired.is_empty());
}

#[test]
fn missing_markup_is_a_silent_no_op() {
    let mut host = RecordingHost::new(Environment::default());
    host.present = false;
    let mount = mount(&mut host, FieldConfig::default(), 1).unwrap();
    assert!(matches!(mount, Mount::Absent));
    assert!(host.wired.is_empty());
}

#[test]
fn mounting_wires_an_idle_animator() {
    let mut host = RecordingHost::new(Environment::default());
    let mount = mount(&mut host, FieldConfig::default(), 1).unwrap();
    let animator = mount.animator().expect("mounted");
    assert_eq!(host.wired.len(), 1);
    assert!(Rc::ptr_eq(animator, &host.wired[0]));
    let a = animator.borrow();
    assert_eq!(a.particles().len(), 35);
    assert!(!a.is_active());
    assert!(!a.is_scheduled());
}

#[test]
fn wiring_failures_propagate() {
    let mut host = RecordingHost::new(Environment::default());
    host.wire_error = Some(SiteError::ContextUnavailable);
    let result = mount(&mut host, FieldConfig::default(), 1);
    assert!(matches!(result, Err(SiteError::ContextUnavailable)));
}

#[test]
fn invalid_config_is_reported() {
    let mut host = RecordingHost::new(Environment::default());
    let config = FieldConfig {
        glow_radius: -1.0,
        ..FieldConfig::default()
    };
    let result = mount(&mut host, config, 1);
    assert!(matches!(result, Err(SiteError::InvalidConfig(_))));
    assert_eq!(host.attach_calls, 0);
}

#[test]
fn environment_opt_out_priority() {
    assert_eq!(Environment::default().opt_out(), None);
    let both = Environment {
        touch_primary: true,
        reduced_motion: true,
    };
    assert_eq!(both.opt_out(), Some(OptOut::Touch));
}
