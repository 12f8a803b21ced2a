use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Mechanical energy (m = 1, L = 1, g = 1)
// ---------------------------------------------------------------------------

/// Kinetic energy: Ek = 0.5 * (V1^2 + V2^2), with
///   V1^2 = x_dot^2
///   V2^2 = x_dot^2 + y_dot^2 + 2 x_dot y_dot cos(x - y)
pub fn kinetic(state: &State) -> f64 {
    let (xd, yd) = (state.x_dot(), state.y_dot());
    let v1_sq = xd * xd;
    let v2_sq = xd * xd + yd * yd + 2.0 * xd * yd * (state.x() - state.y()).cos();
    0.5 * (v1_sq + v2_sq)
}

/// Potential energy with both heights measured from y = -2, the lowest point
/// the outer mass can reach:
///   h1 = 2 - cos x
///   h2 = 2 - cos x - cos y
/// Hanging at rest gives U = 1 (h1 = 1, h2 = 0); U is never below 1.
pub fn potential(state: &State) -> f64 {
    let cx = state.x().cos();
    let h1 = 2.0 - cx;
    let h2 = 2.0 - cx - state.y().cos();
    h1 + h2
}

pub fn total(state: &State) -> f64 {
    kinetic(state) + potential(state)
}

pub fn kinetic_series(samples: &[State]) -> Vec<f64> {
    samples.iter().map(kinetic).collect()
}

pub fn potential_series(samples: &[State]) -> Vec<f64> {
    samples.iter().map(potential).collect()
}

pub fn total_series(samples: &[State]) -> Vec<f64> {
    samples.iter().map(total).collect()
}

/// Relative energy drift per unit simulated time: (E[-1]/E[0] - 1) / t[-1].
///
/// `None` when there is no elapsed time.
pub fn drift_rate(samples: &[State]) -> Option<f64> {
    let (first, last) = (samples.first()?, samples.last()?);
    let e0 = total(first);
    let elapsed = last.time - first.time;
    if elapsed <= 0.0 {
        return None;
    }
    Some((total(last) / e0 - 1.0) / elapsed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
