use super::config::FieldConfig;
use super::field::{Particle, ParticleField};
use super::pointer::PointerState;
use super::render::{draw_field, Surface};
use crate::error::SiteError;
use std::cell::RefCell;
use std::rc::Rc;

/// Hero particle field: population, smoothed pointer and frame-loop gate.
///
/// `active` follows pointer enter/leave. `scheduled` is true while a frame
/// loop is pending, so at most one loop exists at a time.
pub struct Animator {
    config: FieldConfig,
    field: ParticleField,
    pointer: PointerState,
    active: bool,
    scheduled: bool,
}

impl Animator {
    pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        let field = ParticleField::new(&config, width, height, seed);
        Self {
            config,
            field,
            pointer: PointerState::default(),
            active: false,
            scheduled: false,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(&self.config, width, height);
    }

    #[inline]
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.set_target(x, y);
    }

    /// Returns `true` when the caller must schedule a frame to start the loop.
    pub fn activate(&mut self) -> bool {
        self.active = true;
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// The pending frame, if any, observes this and ends the loop.
    #[inline]
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Run one frame. Returns `true` when the next frame should be scheduled.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.pointer.smooth(self.config.pointer_blend);

        let (w, h) = self.field.size();
        surface.clear(w, h);

        if !self.active {
            self.scheduled = false;
            return false;
        }

        self.field.step(&self.config, self.pointer.current);
        draw_field(surface, &self.field, self.pointer.current, &self.config);
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.field.particles()
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        self.field.particles_mut()
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

/// Capability checks read once at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Environment {
    pub touch_primary: bool,
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OptOut {
    Touch,
    ReducedMotion,
}

impl Environment {
    pub fn opt_out(&self) -> Option<OptOut> {
        if self.touch_primary {
            Some(OptOut::Touch)
        } else if self.reduced_motion {
            Some(OptOut::ReducedMotion)
        } else {
            None
        }
    }
}

/// Page-side services the hero field needs.
pub trait Host {
    fn environment(&self) -> Environment;
    /// Locate the surface and its container and size the surface to the
    /// container. `SiteError::MissingElement` when either is absent.
    fn attach_surface(&mut self) -> Result<(f64, f64), SiteError>;
    /// Register resize and pointer listeners driving `animator`.
    fn wire(&mut self, animator: Rc<RefCell<Animator>>) -> Result<(), SiteError>;
}

pub enum Mount {
    OptedOut(OptOut),
    Absent,
    Mounted(Rc<RefCell<Animator>>),
}

impl Mount {
    #[inline]
    pub fn animator(&self) -> Option<&Rc<RefCell<Animator>>> {
        match self {
            Mount::Mounted(a) => Some(a),
            _ => None,
        }
    }
}

/// Set up the hero field on `host`.
///
/// Opt-outs are checked before touching the page. Absent markup is not an
/// error; it yields `Mount::Absent`.
pub fn mount<H: Host>(host: &mut H, config: FieldConfig, seed: u64) -> Result<Mount, SiteError> {
    if let Some(reason) = host.environment().opt_out() {
        return Ok(Mount::OptedOut(reason));
    }
    config.validate()?;
    let (width, height) = match host.attach_surface() {
        Ok(size) => size,
        Err(e) if e.is_absent() => return Ok(Mount::Absent),
        Err(e) => return Err(e),
    };
    let animator = Rc::new(RefCell::new(Animator::new(config, width, height, seed)));
    host.wire(animator.clone())?;
    Ok(Mount::Mounted(animator))
}
