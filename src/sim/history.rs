use tracing::debug;

use crate::dynamics::state::State;
use crate::error::SimError;
use crate::physics::energy;
use super::integrator::heun_step;

// ---------------------------------------------------------------------------
// Simulation: fixed step size plus append-only state history
// ---------------------------------------------------------------------------

/// A double pendulum and the full time series of its state.
///
/// The history starts with the initial state at `t = 0` and gains exactly one
/// sample per [`step`](Simulation::step). Samples are never modified once
/// appended, and `history[i + 1].time == history[i].time + dt`.
#[derive(Debug, Clone)]
pub struct Simulation {
    history: Vec<State>,
    dt: f64,
}

impl Simulation {
    /// Start a simulation from the given initial conditions.
    ///
    /// Inputs are not validated: NaN or infinite values propagate through
    /// the history. See [`try_new`](Simulation::try_new).
    pub fn new(x0: f64, y0: f64, x_dot0: f64, y_dot0: f64, dt: f64) -> Self {
        debug!(x0, y0, x_dot0, y_dot0, dt, "new simulation");
        Self {
            history: vec![State::new(0.0, x0, y0, x_dot0, y_dot0)],
            dt,
        }
    }

    /// Like [`new`](Simulation::new), but rejects non-finite initial
    /// conditions and a step size that is not positive and finite.
    pub fn try_new(x0: f64, y0: f64, x_dot0: f64, y_dot0: f64, dt: f64) -> Result<Self, SimError> {
        let fields = [("x0", x0), ("y0", y0), ("x_dot0", x_dot0), ("y_dot0", y_dot0)];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimError::NonFinite { field });
        }
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidStep(dt));
        }
        Ok(Self::new(x0, y0, x_dot0, y_dot0, dt))
    }

    /// Advance the pendulum by one step of `dt` and append the new sample.
    pub fn step(&mut self) {
        let next = heun_step(self.last(), self.dt);
        self.history.push(next);
    }

    /// Call [`step`](Simulation::step) `n` times.
    pub fn step_n(&mut self, n: usize) {
        self.history.reserve(n);
        for _ in 0..n {
            self.step();
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples (steps taken + 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the initial sample is present from construction.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn samples(&self) -> &[State] {
        &self.history
    }

    /// Most recent sample.
    pub fn last(&self) -> &State {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    // --- index-aligned columns ---

    pub fn times(&self) -> Vec<f64> {
        self.history.iter().map(|s| s.time).collect()
    }

    pub fn x(&self) -> Vec<f64> {
        self.history.iter().map(State::x).collect()
    }

    pub fn y(&self) -> Vec<f64> {
        self.history.iter().map(State::y).collect()
    }

    pub fn x_dot(&self) -> Vec<f64> {
        self.history.iter().map(State::x_dot).collect()
    }

    pub fn y_dot(&self) -> Vec<f64> {
        self.history.iter().map(State::y_dot).collect()
    }

    // --- derived series, recomputed from the full history on each call ---

    pub fn kinetic_energy(&self) -> Vec<f64> {
        energy::kinetic_series(&self.history)
    }

    pub fn potential_energy(&self) -> Vec<f64> {
        energy::potential_series(&self.history)
    }

    pub fn total_energy(&self) -> Vec<f64> {
        energy::total_series(&self.history)
    }

    /// Relative energy drift per unit simulated time, (E[-1]/E[0] - 1) / t[-1].
    ///
    /// `None` before the first step.
    pub fn energy_drift_rate(&self) -> Option<f64> {
        energy::drift_rate(&self.history)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
