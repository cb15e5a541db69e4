#![deny(missing_docs)]
//! Logging front door for the viewer crates.
//!
//! Every crate logs through the `viewer_*` macros so the backend can change
//! in one place. Installing a backend is left to the binary; tests call
//! [`initialize_for_tests`].

use log::LevelFilter;
use simplelog::{ConfigBuilder, TestLogger};

/// Per-message detail, off unless explicitly enabled.
#[macro_export]
macro_rules! viewer_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Diagnostics such as effect execution and navigation.
#[macro_export]
macro_rules! viewer_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Session milestones: activation, recovery, uploads, resets.
#[macro_export]
macro_rules! viewer_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Recoverable trouble the user is not shown, or only shown as a banner.
#[macro_export]
macro_rules! viewer_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Failures in the hosting process itself.
#[macro_export]
macro_rules! viewer_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Route log output through the test harness so it shows up only for failing tests.
///
/// Every test may call this; only the first call installs a logger.
pub fn initialize_for_tests() {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .build();
    let _ = TestLogger::init(LevelFilter::Debug, config);
}
