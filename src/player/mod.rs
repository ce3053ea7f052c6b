pub mod input;

pub use input::FrameInput;
