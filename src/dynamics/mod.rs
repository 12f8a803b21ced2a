pub mod eom;
pub mod state;

pub use eom::{derivatives, x_ddot, y_ddot};
pub use state::{Deriv, State};
