pub mod event;
pub mod history;
pub mod integrator;
pub mod runner;

pub use history::Simulation;
pub use integrator::heun_step;
pub use runner::{simulate, simulate_with, Run};
