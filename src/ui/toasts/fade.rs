// SPDX-License-Identifier: MPL-2.0
//! Fade-in / hold / fade-out curve applied over a toast's lifetime.
//!
//! The toast also slides up while fading in and back down while fading out.

/// Fraction of the lifetime spent fading in.
pub const FADE_IN_END: f32 = 0.3;
/// Fraction of the lifetime after which the toast fades out.
pub const FADE_OUT_START: f32 = 0.7;

/// Opacity at `progress` (0 = just published, 1 = expired).
#[must_use]
pub fn opacity(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    if progress < FADE_IN_END {
        progress / FADE_IN_END
    } else if progress <= FADE_OUT_START {
        1.0
    } else {
        (1.0 - progress) / (1.0 - FADE_OUT_START)
    }
}

/// Downward offset at `progress`, as a fraction of the slide distance.
///
/// Fully offset while invisible, resting in place while fully opaque.
#[must_use]
pub fn slide(progress: f32) -> f32 {
    1.0 - opacity(progress)
}
