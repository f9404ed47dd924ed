// Each handle owns one browser registration and releases it on drop

pub mod frame;
pub mod listener;
pub mod pointer;
pub mod viewport;

pub use frame::FrameLoop;
pub use listener::WindowListener;
pub use pointer::WindowPointerSource;
pub use viewport::ViewportObserver;
