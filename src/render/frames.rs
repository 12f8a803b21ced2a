use std::ops::Range;

use crate::error::SimError;
use crate::physics::kinematics::{self, RodTips, ROD_LENGTH};
use crate::sim::Simulation;

/// Half-width of the square view that always contains the whole pendulum.
pub const VIEW_EXTENT: f64 = 2.1 * ROD_LENGTH;

// ---------------------------------------------------------------------------
// Time-window sampling of the history
// ---------------------------------------------------------------------------

/// A sampling window over simulated time: every `interval` from `t0` up to
/// (not including) `tf`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameWindow {
    pub t0: f64,
    pub tf: f64,
    pub interval: f64,
}

impl FrameWindow {
    pub fn new(t0: f64, tf: f64, interval: f64) -> Self {
        Self { t0, tf, interval }
    }

    /// Resolve the window to history indices.
    ///
    /// Start and end are the first samples at or after `t0` and `tf`; the
    /// stride is the index of the first sample at or after `interval`, so it
    /// counts whole steps and is at least 1.
    pub fn indices(&self, times: &[f64]) -> Result<std::iter::StepBy<Range<usize>>, SimError> {
        let empty = SimError::EmptyWindow { t0: self.t0, tf: self.tf };
        if !(self.tf > self.t0) || !(self.interval > 0.0) {
            return Err(empty);
        }
        let first_at = |t: f64| times.partition_point(|&s| s < t);

        let j0 = first_at(self.t0);
        let jf = first_at(self.tf);
        if jf >= times.len() || j0 >= jf {
            return Err(empty);
        }
        let dj = first_at(self.interval).max(1);
        Ok((j0..jf).step_by(dj))
    }
}

// ---------------------------------------------------------------------------
// Traces, frames, clips
// ---------------------------------------------------------------------------

/// Positions of both masses sampled over a window, for scatter plots.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    pub elbow: Vec<[f64; 2]>,
    pub tip: Vec<[f64; 2]>,
}

pub fn trace(sim: &Simulation, window: &FrameWindow) -> Result<Trace, SimError> {
    let samples = sim.samples();
    let mut out = Trace::default();
    for i in window.indices(&sim.times())? {
        let t = kinematics::tips(&samples[i]);
        out.elbow.push(t.elbow);
        out.tip.push(t.tip);
    }
    Ok(out)
}

/// Pendulum geometry at one history sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub time: f64,
    pub tips: RodTips,
}

pub fn frames(sim: &Simulation, window: &FrameWindow) -> Result<Vec<Frame>, SimError> {
    let samples = sim.samples();
    let frames = window
        .indices(&sim.times())?
        .map(|i| Frame {
            index: i,
            time: samples[i].time,
            tips: kinematics::tips(&samples[i]),
        })
        .collect();
    Ok(frames)
}

/// Frames plus playback timing.
///
/// `play_speed` is simulated time per second of playback.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub frames: Vec<Frame>,
    pub fps: f64,
    pub duration: f64, // s of playback
}

impl AnimationClip {
    /// Frame to show `elapsed` seconds into playback, looping.
    pub fn frame_at(&self, elapsed: f64) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        let n = (elapsed.max(0.0) * self.fps) as usize;
        self.frames.get(n % self.frames.len())
    }
}

pub fn clip(sim: &Simulation, window: &FrameWindow, play_speed: f64) -> Result<AnimationClip, SimError> {
    let frames = frames(sim, window)?;
    let n = frames.len() as f64;
    Ok(AnimationClip {
        fps: play_speed / window.interval,
        duration: window.interval * (n - 1.0) / play_speed,
        frames,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn run(steps: usize) -> Simulation {
        let mut sim = Simulation::new(1.5, 2.25, 0.0, 0.0, 0.01);
        sim.step_n(steps);
        sim
    }

    #[test]
    fn window_selects_strided_indices() {
        let sim = run(1000); // t = 0.00 .. 10.00
        let idx: Vec<usize> = FrameWindow::new(0.995, 1.995, 0.245)
            .indices(&sim.times())
            .unwrap()
            .collect();
        assert_eq!(idx, vec![100, 125, 150, 175]);
    }

    #[test]
    fn stride_never_zero() {
        let sim = run(100);
        let idx: Vec<usize> = FrameWindow::new(0.0, 0.045, 1e-9)
            .indices(&sim.times())
            .unwrap()
            .collect();
        assert_eq!(idx, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn window_past_end_is_empty() {
        let sim = run(100); // t_max = 1.0
        let w = FrameWindow::new(0.0, 5.0, 0.1);
        assert!(matches!(w.indices(&sim.times()), Err(SimError::EmptyWindow { .. })));
        let w = FrameWindow::new(0.5, 0.5, 0.1);
        assert!(w.indices(&sim.times()).is_err());
        let w = FrameWindow::new(0.0, 0.5, 0.0);
        assert!(w.indices(&sim.times()).is_err());
    }

    #[test]
    fn trace_points_match_frames() {
        let sim = run(500);
        let w = FrameWindow::new(0.0, 3.995, 0.095);
        let tr = trace(&sim, &w).unwrap();
        let fr = frames(&sim, &w).unwrap();
        assert_eq!(tr.tip.len(), fr.len());
        assert_eq!(tr.elbow.len(), 40);
        for (p, f) in tr.tip.iter().zip(&fr) {
            assert_eq!(*p, f.tips.tip);
            assert!(p[0].abs() <= VIEW_EXTENT && p[1].abs() <= VIEW_EXTENT);
        }
    }

    #[test]
    fn clip_timing() {
        let sim = run(1000);
        let c = clip(&sim, &FrameWindow::new(0.0, 9.995, 0.045), 3.0).unwrap();
        assert_eq!(c.frames.len(), 200);
        assert_abs_diff_eq!(c.fps, 3.0 / 0.045, epsilon = 1e-9);
        assert_abs_diff_eq!(c.duration, 0.045 * 199.0 / 3.0, epsilon = 1e-9);
        assert_eq!(c.frame_at(0.0).unwrap().index, 0);
        assert_eq!(c.frame_at(1.5 / c.fps).unwrap().index, 5);
        // Loops after the last frame.
        assert_eq!(c.frame_at(200.5 / c.fps).unwrap().index, 0);
    }
}
