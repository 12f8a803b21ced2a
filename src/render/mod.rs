pub mod frames;

pub use frames::{clip, frames, trace, AnimationClip, Frame, FrameWindow, Trace, VIEW_EXTENT};
