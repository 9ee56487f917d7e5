use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Simulated service latencies, in milliseconds.
pub const QUOTE_SUBMIT_DELAY_MS: u32 = 2_500;
pub const QUOTE_SUCCESS_HOLD_MS: u32 = 2_000;
pub const LOGIN_DELAY_MS: u32 = 2_000;
pub const SIGNUP_DELAY_MS: u32 = 2_500;
pub const SIGNUP_CLOSE_DELAY_MS: u32 = 1_000;

/// The only credential pair the simulated backend accepts.
pub const DEMO_EMAIL: &str = "test@g.com";
pub const DEMO_PASSWORD: &str = "1234";

pub const SMALL_SCREEN_MAX_WIDTH: f64 = 768.0;
pub const LOW_MEMORY_GB: f64 = 2.0;
pub const ANIMATION_MEMORY_GB: f64 = 4.0;

pub const HEADER_SCROLL_THRESHOLD: i32 = 40;
pub const PARALLAX_Y_PERCENT: f64 = 20.0;

pub const READ_MORE_TRANSITION_MS: u32 = 300;
pub const SWIPE_THRESHOLD_PX: i32 = 50;

pub const TESTIMONIAL_AUTOPLAY_MS: u32 = 8_000;
pub const INSURANCE_AUTOPLAY_MS: u32 = 5_000;

pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 30;

pub const TOAST_DURATION_MS: u32 = 3_000;
