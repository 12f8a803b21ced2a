pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use dynamics::State;
pub use error::SimError;
pub use sim::Simulation;
