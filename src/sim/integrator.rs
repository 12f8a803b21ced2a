use crate::dynamics;
use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Heun (explicit trapezoidal RK2) integrator
// ---------------------------------------------------------------------------

/// Single Heun step: advance state by dt.
///
/// Predictor is an Euler step to the end of the interval; the corrector
/// averages the slope there with the slope at the start.
pub fn heun_step(state: &State, dt: f64) -> State {
    let k1 = dynamics::derivatives(state);
    let k2 = dynamics::derivatives(&state.apply(&k1, dt));

    State {
        time: state.time + dt,
        angles: state.angles + (k1.dangles + k2.dangles) * (dt * 0.5),
        rates: state.rates + (k1.drates + k2.drates) * (dt * 0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::{x_ddot, y_ddot};
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_step_matches_hand_computation() {
        let (x, y, xd, yd, dt) = (0.1, 0.2, 0.0, 0.0, 0.01);

        // Predictor
        let ax = x_ddot(x, y, xd, yd);
        let ay = y_ddot(x, y, xd, yd);
        let (xm, ym) = (x + dt * xd, y + dt * yd);
        let (xdm, ydm) = (xd + dt * ax, yd + dt * ay);

        // Corrector
        let axm = x_ddot(xm, ym, xdm, ydm);
        let aym = y_ddot(xm, ym, xdm, ydm);
        let expected = [
            x + dt * (xd + xdm) / 2.0,
            y + dt * (yd + ydm) / 2.0,
            xd + dt * (ax + axm) / 2.0,
            yd + dt * (ay + aym) / 2.0,
        ];

        let next = heun_step(&State::new(0.0, x, y, xd, yd), dt);
        assert_eq!(next.time, dt);
        assert_abs_diff_eq!(next.x(), expected[0], epsilon = 1e-15);
        assert_abs_diff_eq!(next.y(), expected[1], epsilon = 1e-15);
        assert_abs_diff_eq!(next.x_dot(), expected[2], epsilon = 1e-15);
        assert_abs_diff_eq!(next.y_dot(), expected[3], epsilon = 1e-15);
    }

    #[test]
    fn released_rods_start_swinging_down() {
        let next = heun_step(&State::new(0.0, 0.1, 0.2, 0.0, 0.0), 0.01);
        // Inner rod pulled back toward the vertical, outer rod too.
        assert!(next.x_dot() < 0.0);
        assert!(next.y_dot() < 0.0);
        assert!(next.x() < 0.1);
    }

    #[test]
    fn second_order_convergence_on_small_swings() {
        // Reference: same run with a much finer step.
        let run = |dt: f64, t_end: f64| {
            let mut s = State::new(0.0, 0.05, 0.05, 0.0, 0.0);
            let n = (t_end / dt).round() as usize;
            for _ in 0..n {
                s = heun_step(&s, dt);
            }
            s
        };
        let reference = run(0.000_5, 2.0);
        let coarse = run(0.02, 2.0);
        let fine = run(0.01, 2.0);
        let err_coarse = (coarse.angles - reference.angles).norm();
        let err_fine = (fine.angles - reference.angles).norm();
        let ratio = err_fine / err_coarse;
        assert!(
            (ratio - 0.25).abs() < 0.1,
            "Halving dt should quarter the error, ratio {:.3}",
            ratio
        );
    }
}
