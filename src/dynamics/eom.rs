use nalgebra::Vector2;

use crate::dynamics::state::{Deriv, State};

// ---------------------------------------------------------------------------
// Equations of motion (unit masses, unit rods, g = 1)
// ---------------------------------------------------------------------------

/// Angular acceleration of the inner rod.
///
/// The denominator `1 + sin(x - y)^2` lies in `[1, 2]`, so this is defined
/// for every finite input.
pub fn x_ddot(x: f64, y: f64, x_dot: f64, y_dot: f64) -> f64 {
    let (s, c) = (x - y).sin_cos();
    let num = -x.sin() - s * (y.cos() + y_dot * y_dot + x_dot * x_dot * c);
    let den = 1.0 + s * s;
    num / den
}

/// Angular acceleration of the outer rod.
pub fn y_ddot(x: f64, y: f64, x_dot: f64, y_dot: f64) -> f64 {
    let (s, c) = (x - y).sin_cos();
    x_dot * x_dot * s - x_ddot(x, y, x_dot, y_dot) * c - y.sin()
}

/// State derivatives for the Heun integrator.
pub fn derivatives(state: &State) -> Deriv {
    let (x, y) = (state.x(), state.y());
    let (xd, yd) = (state.x_dot(), state.y_dot());

    Deriv {
        dangles: state.rates,
        drates: Vector2::new(x_ddot(x, y, xd, yd), y_ddot(x, y, xd, yd)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
