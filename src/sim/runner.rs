use tracing::{info, trace, warn};

use crate::config::SimConfig;
use crate::error::SimError;
use super::event::{DriftDetector, EventDetector, FlipDetector, Rod, SimEvent};
use super::history::Simulation;

/// A finished run: the simulation with its full history plus detected events.
#[derive(Debug, Clone)]
pub struct Run {
    pub simulation: Simulation,
    pub events: Vec<SimEvent>,
}

impl Run {
    pub fn flips(&self, rod: Rod) -> usize {
        self.events
            .iter()
            .filter(|e| e.kind == super::event::EventKind::Flip { rod })
            .count()
    }
}

/// Flip detectors for both rods and a drift detector at the configured tolerance.
pub fn default_detectors(config: &SimConfig) -> Vec<Box<dyn EventDetector>> {
    vec![
        Box::new(FlipDetector::new(Rod::Inner)),
        Box::new(FlipDetector::new(Rod::Outer)),
        Box::new(DriftDetector::new(config.drift_tolerance)),
    ]
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

/// Run `config.steps` steps with caller-supplied event detectors.
pub fn simulate_with(
    config: &SimConfig,
    detectors: &mut [Box<dyn EventDetector>],
) -> Result<Run, SimError> {
    let mut sim = Simulation::try_new(config.x0, config.y0, config.x_dot0, config.y_dot0, config.dt)?;
    let mut events = Vec::new();

    for step in 1..=config.steps {
        sim.step();

        let samples = sim.samples();
        let (prev, current) = (&samples[step - 1], &samples[step]);
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(prev, current) {
                trace!(step, time = current.time, ?kind, "event");
                events.push(SimEvent { step, time: current.time, kind });
            }
        }
    }

    let drift = sim.energy_drift_rate();
    info!(
        steps = config.steps,
        duration = sim.last().time,
        events = events.len(),
        drift = ?drift,
        "simulation finished"
    );
    if let Some(d) = drift {
        if d.abs() > config.drift_tolerance {
            warn!(
                drift = d,
                tolerance = config.drift_tolerance,
                dt = config.dt,
                "energy drift above tolerance, consider a smaller step"
            );
        }
    }

    Ok(Run { simulation: sim, events })
}

/// Run with the default detectors (convenience wrapper).
pub fn simulate(config: &SimConfig) -> Result<Run, SimError> {
    let mut detectors = default_detectors(config);
    simulate_with(config, &mut detectors)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
