use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// Form submission
pub const SUBMIT_DELAY_MS: u32 = 2_000;
pub const SUBMIT_LABEL: &str = "Submit Application";
pub const SUBMITTING_LABEL: &str = "Submitting...";

// Navigation highlighting
pub const NAV_DEBOUNCE_MS: u32 = 50;
pub const NAV_LOOKAHEAD_PX: f64 = 100.0;

// Scroll effects
pub const PARALLAX_FACTOR: f64 = -0.5;
pub const REVEAL_MARGIN_PX: f64 = 150.0;

// Confetti
pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_LIFETIME_MS: u32 = 5_000;
pub const CONFETTI_MIN_FALL_SECS: f64 = 2.0;
pub const CONFETTI_FALL_SPREAD_SECS: f64 = 3.0;
pub const CONFETTI_COLORS: [&str; 5] = ["#2c5aa0", "#ffc107", "#28a745", "#dc3545", "#17a2b8"];

// Date of birth window, in years before today
pub const MIN_STUDENT_AGE_YEARS: u32 = 3;
pub const MAX_STUDENT_AGE_YEARS: u32 = 25;
