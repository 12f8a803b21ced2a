use std::f64::consts::PI;

use crate::dynamics::state::State;
use crate::physics::energy;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Which rod an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rod {
    Inner,
    Outer,
}

impl Rod {
    fn angle(self, s: &State) -> f64 {
        match self {
            Rod::Inner => s.x(),
            Rod::Outer => s.y(),
        }
    }
}

/// Kinds of simulation events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// A rod swung over the top of its pivot.
    Flip { rod: Rod },
    /// Relative energy drift per unit time first exceeded the detector's threshold.
    DriftExceeded { rate: f64 },
}

/// A discrete event that occurred during simulation.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub step: usize,
    pub time: f64,
    pub kind: EventKind,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects a rod passing through the upright position (an odd multiple of π).
pub struct FlipDetector {
    pub rod: Rod,
}

impl FlipDetector {
    pub fn new(rod: Rod) -> Self {
        Self { rod }
    }
}

/// Index of the 2π-wide band centred on an even multiple of π.
fn band(angle: f64) -> f64 {
    ((angle + PI) / (2.0 * PI)).floor()
}

impl EventDetector for FlipDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if band(self.rod.angle(prev)) != band(self.rod.angle(current)) {
            Some(EventKind::Flip { rod: self.rod })
        } else {
            None
        }
    }
}

/// Fires once when the relative energy drift per unit time,
/// (E / E_ref - 1) / (t - t_ref), exceeds `threshold` in magnitude. The
/// reference is the first state the detector sees.
pub struct DriftDetector {
    pub threshold: f64,
    reference: Option<(f64, f64)>, // (time, energy)
    fired: bool,
}

impl DriftDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, reference: None, fired: false }
    }
}

impl EventDetector for DriftDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let (t_ref, e_ref) = *self
            .reference
            .get_or_insert_with(|| (prev.time, energy::total(prev)));
        let elapsed = current.time - t_ref;
        if elapsed <= 0.0 {
            return None;
        }
        let rate = (energy::total(current) / e_ref - 1.0) / elapsed;
        if rate.abs() > self.threshold {
            self.fired = true;
            Some(EventKind::DriftExceeded { rate })
        } else {
            None
        }
    }
}
