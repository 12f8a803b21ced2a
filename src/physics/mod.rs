pub mod energy;
pub mod kinematics;

pub use kinematics::{tips, RodTips, ROD_LENGTH};
