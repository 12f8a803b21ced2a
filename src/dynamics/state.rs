use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Pendulum state: two rod angles and their angular velocities
// ---------------------------------------------------------------------------

/// One sample of the pendulum at a point in time.
///
/// Angles are measured from the downward vertical, in radians, and are never
/// wrapped: a rod that has flipped over twice sits near 4π, not near 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,
    pub angles: Vector2<f64>, // rad   [inner rod (x), outer rod (y)]
    pub rates: Vector2<f64>,  // rad/s [x_dot, y_dot]
}

impl State {
    pub fn new(time: f64, x: f64, y: f64, x_dot: f64, y_dot: f64) -> Self {
        Self {
            time,
            angles: Vector2::new(x, y),
            rates: Vector2::new(x_dot, y_dot),
        }
    }

    pub fn x(&self) -> f64 {
        self.angles.x
    }

    pub fn y(&self) -> f64 {
        self.angles.y
    }

    pub fn x_dot(&self) -> f64 {
        self.rates.x
    }

    pub fn y_dot(&self) -> f64 {
        self.rates.y
    }

    /// Advance state by a derivative scaled by dt (Euler predictor).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            angles: self.angles + d.dangles * dt,
            rates: self.rates + d.drates * dt,
        }
    }
}

// ---------------------------------------------------------------------------
// State derivative (d angles/dt, d rates/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deriv {
    pub dangles: Vector2<f64>, // angular velocities
    pub drates: Vector2<f64>,  // angular accelerations
}
