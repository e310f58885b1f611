// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! [`ToastData`] is what publishers hand to a [`ToastStore`](super::ToastStore);
//! [`Toast`] is the display record a container keeps while the banner is live.

use crate::config::DEFAULT_TIMER_MS;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity of a toast. Determines its colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Success,
    Info,
    Warning,
    Error,
}

impl Status {
    /// All statuses, in publish-method order.
    pub const ALL: [Status; 4] = [Status::Success, Status::Info, Status::Warning, Status::Error];

    /// Lowercase name, also used as the `toast-<status>` class suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Info => "info",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidStatus(s.to_string()))
    }
}

/// Payload published to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastData {
    pub status: Status,
    pub message: String,
    /// How long the toast stays on screen. `None` or zero means the default.
    pub timer: Option<Duration>,
    /// Extra space-separated class names, matched against container class styles.
    pub class_names: Option<String>,
}

impl ToastData {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            timer: None,
            class_names: None,
        }
    }

    #[must_use]
    pub fn with_timer(mut self, timer: Duration) -> Self {
        self.timer = Some(timer);
        self
    }

    #[must_use]
    pub fn with_class_names(mut self, class_names: impl Into<String>) -> Self {
        self.class_names = Some(class_names.into());
        self
    }
}

/// A toast currently shown by a container.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    status: Status,
    message: String,
    /// Resolved display duration (never zero).
    timer: Duration,
    class_names: Option<String>,
    created_at: Instant,
}

impl Toast {
    /// Creates a display record from published data.
    ///
    /// A missing or zero timer falls back to `default_timer`, and a zero
    /// `default_timer` falls back to [`DEFAULT_TIMER_MS`].
    pub fn from_data(data: ToastData, default_timer: Duration, now: Instant) -> Self {
        let default_timer = if default_timer.is_zero() {
            Duration::from_millis(DEFAULT_TIMER_MS)
        } else {
            default_timer
        };
        let timer = data
            .timer
            .filter(|timer| !timer.is_zero())
            .unwrap_or(default_timer);

        Self {
            id: ToastId::new(),
            status: data.status,
            message: data.message,
            timer,
            class_names: data.class_names,
            created_at: now,
        }
    }

    /// Creates a display record using the crate-wide default timer.
    pub fn new(data: ToastData, now: Instant) -> Self {
        Self::from_data(data, Duration::from_millis(DEFAULT_TIMER_MS), now)
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn timer(&self) -> Duration {
        self.timer
    }

    #[must_use]
    pub fn class_names(&self) -> Option<&str> {
        self.class_names.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Instant at which the toast must leave the screen.
    ///
    /// `None` when the timer reaches past what `Instant` can represent; such
    /// a toast never expires on its own.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.created_at.checked_add(self.timer)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at().is_some_and(|expires_at| now >= expires_at)
    }

    /// Fraction of the timer elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.created_at);
        (elapsed.as_secs_f32() / self.timer.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Full class list: `toast toast-<status>` plus any custom class names.
    #[must_use]
    pub fn class_name(&self) -> String {
        let mut class_name = format!("toast toast-{}", self.status);
        if let Some(extra) = self.class_names.as_deref().map(str::trim) {
            if !extra.is_empty() {
                class_name.push(' ');
                class_name.push_str(extra);
            }
        }
        class_name
    }

    /// Returns whether `class` appears among the custom class names.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class_names
            .as_deref()
            .is_some_and(|names| names.split_whitespace().any(|name| name == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_timer() -> Duration {
        Duration::from_millis(DEFAULT_TIMER_MS)
    }

    #[test]
    fn toast_ids_are_unique() {
        let now = Instant::now();
        let t1 = Toast::new(ToastData::new(Status::Info, "a"), now);
        let t2 = Toast::new(ToastData::new(Status::Info, "a"), now);
        assert_ne!(t1.id(), t2.id());
    }

    #[test]
    fn missing_timer_uses_default() {
        let toast = Toast::new(ToastData::new(Status::Success, "saved"), Instant::now());
        assert_eq!(toast.timer(), Duration::from_millis(3000));
    }

    #[test]
    fn zero_timer_uses_default() {
        let data = ToastData::new(Status::Success, "saved").with_timer(Duration::ZERO);
        let toast = Toast::from_data(data, default_timer(), Instant::now());
        assert_eq!(toast.timer(), default_timer());
    }

    #[test]
    fn custom_timer_is_kept() {
        let data = ToastData::new(Status::Warning, "slow").with_timer(Duration::from_secs(7));
        let toast = Toast::new(data, Instant::now());
        assert_eq!(toast.timer(), Duration::from_secs(7));
    }

    #[test]
    fn expiry_happens_exactly_at_timer() {
        let now = Instant::now();
        let data = ToastData::new(Status::Info, "hi").with_timer(Duration::from_millis(500));
        let toast = Toast::new(data, now);

        assert!(!toast.is_expired(now));
        assert!(!toast.is_expired(now + Duration::from_millis(499)));
        assert!(toast.is_expired(now + Duration::from_millis(500)));
        assert_eq!(toast.expires_at(), Some(now + Duration::from_millis(500)));
    }

    #[test]
    fn zero_default_timer_falls_back_to_crate_default() {
        let now = Instant::now();
        let toast = Toast::from_data(ToastData::new(Status::Info, "x"), Duration::ZERO, now);

        assert_eq!(toast.timer(), default_timer());
        let progress = toast.progress(now + Duration::from_millis(1500));
        assert!((progress - 0.5).abs() < 1e-4);
    }

    #[test]
    fn zero_timer_with_custom_default_uses_that_default() {
        let data = ToastData::new(Status::Info, "x").with_timer(Duration::ZERO);
        let toast = Toast::from_data(data, Duration::from_secs(5), Instant::now());
        assert_eq!(toast.timer(), Duration::from_secs(5));
    }

    #[test]
    fn unrepresentable_expiry_never_expires() {
        let now = Instant::now();
        let data = ToastData::new(Status::Success, "forever").with_timer(Duration::MAX);
        let toast = Toast::new(data, now);

        assert_eq!(toast.expires_at(), None);
        assert!(!toast.is_expired(now + Duration::from_secs(3600)));
        assert!(toast.progress(now + Duration::from_secs(3600)) < 1e-6);
    }

    #[test]
    fn progress_is_clamped() {
        let now = Instant::now();
        let data = ToastData::new(Status::Info, "hi").with_timer(Duration::from_secs(2));
        let toast = Toast::new(data, now);

        assert_eq!(toast.progress(now), 0.0);
        assert!((toast.progress(now + Duration::from_secs(1)) - 0.5).abs() < 1e-4);
        assert_eq!(toast.progress(now + Duration::from_secs(10)), 1.0);
    }

    #[test]
    fn class_name_includes_status_and_extras() {
        let now = Instant::now();
        let plain = Toast::new(ToastData::new(Status::Error, "x"), now);
        assert_eq!(plain.class_name(), "toast toast-error");

        let styled = Toast::new(
            ToastData::new(Status::Info, "x").with_class_names("wide urgent"),
            now,
        );
        assert_eq!(styled.class_name(), "toast toast-info wide urgent");
        assert!(styled.has_class("urgent"));
        assert!(!styled.has_class("urg"));
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Warning".parse::<Status>(), Ok(Status::Warning));
        assert_eq!(" error ".parse::<Status>(), Ok(Status::Error));
        assert!(matches!(
            "fatal".parse::<Status>(),
            Err(Error::InvalidStatus(_))
        ));
    }
}
