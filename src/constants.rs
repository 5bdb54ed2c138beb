//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Countdown recomputation cadence. One tick per second of wall time.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Header height including ASCII art and info panel.
    pub const HEADER_HEIGHT: u16 = 6;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
    /// Navigation drawer width percentage.
    pub const DRAWER_WIDTH: u16 = 45;
    /// Navigation drawer height percentage.
    pub const DRAWER_HEIGHT: u16 = 55;
    /// Lightbox width percentage.
    pub const LIGHTBOX_WIDTH: u16 = 80;
    /// Lightbox height percentage.
    pub const LIGHTBOX_HEIGHT: u16 = 70;
}
