// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timer**: How long toasts stay on screen
//! - **Layout**: Distance between the toast stack and the window edge
//! - **Clock**: Tick interval driving expiry and fading

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Display duration of a toast published without a timer (in milliseconds).
pub const DEFAULT_TIMER_MS: u64 = 3000;

/// Minimum configurable default timer (in milliseconds).
pub const MIN_TIMER_MS: u64 = 500;

/// Maximum configurable default timer (in milliseconds).
pub const MAX_TIMER_MS: u64 = 60_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Offset between the toast stack and the anchored window edges (in pixels).
pub const EDGE_OFFSET: f32 = 10.0;

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// Interval between ticks while toasts are on screen (in milliseconds).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIMER_MS > 0);
    assert!(MIN_TIMER_MS <= DEFAULT_TIMER_MS);
    assert!(DEFAULT_TIMER_MS <= MAX_TIMER_MS);

    assert!(EDGE_OFFSET >= 0.0);

    // Ticks must be fine-grained enough to fade the shortest toast
    assert!(TICK_INTERVAL_MS > 0);
    assert!(TICK_INTERVAL_MS * 4 <= MIN_TIMER_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_defaults_are_valid() {
        assert_eq!(DEFAULT_TIMER_MS, 3000);
        assert!(DEFAULT_TIMER_MS >= MIN_TIMER_MS);
        assert!(DEFAULT_TIMER_MS <= MAX_TIMER_MS);
    }

    #[test]
    fn edge_offset_matches_ten_pixels() {
        assert_eq!(EDGE_OFFSET, 10.0);
    }
}
