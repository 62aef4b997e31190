// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and startup.
//!
//! # Categories
//!
//! - **Locale**: Fallback language
//! - **Window**: Initial and minimum window size
//! - **Logging**: Filter used when `RUST_LOG` is unset

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config file nor the OS provide an
/// available one.
pub const DEFAULT_LOCALE: &str = "en-US";

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 420.0;

/// Initial window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;

/// Smallest window width that still fits an item row.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height that still fits the add button and a few rows.
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// `tracing` filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn,shopping_list=info";

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
