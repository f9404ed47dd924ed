use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const BRAND_NAME: &str = "Atlaze";

// Theme tokens, exposed to the stylesheet as CSS custom properties
pub const PRIMARY_COLOR: &str = "#5E17EB";
pub const SECONDARY_COLOR: &str = "#6F2FEE";
pub const DARK_COLOR: &str = "#12091f";
pub const DARKER_COLOR: &str = "#0a0612";

// Glow diameter in CSS pixels
pub const GLOW_SIZE: f64 = 800.0;

pub const GLOW_SPRING: SpringConfig = SpringConfig::new(200.0, 30.0);

// Hover and press feedback on cards and buttons
pub const GESTURE_SPRING: SpringConfig = SpringConfig::new(550.0, 30.0);

pub const SERVICE_STAGGER: f64 = 0.1;
pub const PROCESS_STAGGER: f64 = 0.2;

pub const VIEWPORT_THRESHOLD: f64 = 0.0;

// Pixels of scroll before the nav condenses
pub const NAV_SCROLL_THRESHOLD: f64 = 80.0;

// One frame, so the initial state is painted before mount animations
pub const MOUNT_FRAME_DELAY_MS: u32 = 16;

// Seconds
pub const MAX_FRAME_STEP: f64 = 1.0 / 15.0;
pub const DEFAULT_FRAME_STEP: f64 = 1.0 / 60.0;
