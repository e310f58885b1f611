// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the playground.

use crate::ui::toasts::{Position, Status, ToastMessage};

/// Top-level messages consumed by `App::update`. Toast container messages
/// are forwarded unchanged.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(ToastMessage),
    /// The message input changed.
    DraftChanged(String),
    /// Publish the current draft with the given severity.
    Publish(Status),
    PositionSelected(Position),
    LightBackgroundToggled(bool),
    /// Remove every toast at once (Escape).
    ClearToasts,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
/// Each `Some` value overrides the matching `settings.toml` entry.
#[derive(Debug, Default)]
pub struct Flags {
    /// Toast position name (e.g. `top_left`).
    pub position: Option<String>,
    /// Force the light color set.
    pub light_background: bool,
    /// Default timer in milliseconds.
    pub timer_ms: Option<u64>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
