// Plain data and state transitions only. Browser glue lives in `web`.

pub mod animator;
pub mod descriptor;
pub mod glow;
pub mod pointer;
pub mod spring;
pub mod state;
pub mod trigger;

pub use animator::ElementMotion;
pub use descriptor::{AnimationDescriptor, Timing, Trigger};
pub use glow::{frame_delta, GlowFollower};
pub use pointer::PointerTracker;
pub use state::VisualState;
pub use trigger::Signal;
