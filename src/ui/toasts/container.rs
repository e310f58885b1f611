// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastContainer` watches a [`ToastStore`], keeps the live toasts
//! (newest first) and removes each one once its timer has elapsed.

use super::position::Position;
use super::store::ToastStore;
use super::style::{toast_style, ToastStyle};
use super::toast::{Toast, ToastData, ToastId};
use crate::config::{DEFAULT_TIMER_MS, TICK_INTERVAL_MS};
use iced::futures::SinkExt;
use iced::{stream, time, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// A toast was published to the watched store.
    Published(ToastData),
    /// Periodic clock tick driving expiry and fading.
    Tick(Instant),
    /// Remove a specific toast before its timer runs out.
    Dismiss(ToastId),
}

/// State of a toast stack bound to one store.
#[derive(Debug)]
pub struct ToastContainer {
    store: ToastStore,
    position: Position,
    light_background: bool,
    default_timer: Duration,
    /// Styles overriding the status colors for toasts carrying a class name.
    class_styles: Vec<(String, ToastStyle)>,
    /// Live toasts (newest first).
    toasts: VecDeque<Toast>,
    /// Time of the last tick, used to compute fade progress when rendering.
    clock: Instant,
}

impl ToastContainer {
    /// Creates an empty container watching `store`.
    #[must_use]
    pub fn new(store: ToastStore) -> Self {
        Self {
            store,
            position: Position::default(),
            light_background: false,
            default_timer: Duration::from_millis(DEFAULT_TIMER_MS),
            class_styles: Vec::new(),
            toasts: VecDeque::new(),
            clock: Instant::now(),
        }
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn light_background(mut self, light_background: bool) -> Self {
        self.light_background = light_background;
        self
    }

    /// Sets the timer used when a publish carries none. Zero is ignored.
    #[must_use]
    pub fn default_timer(mut self, timer: Duration) -> Self {
        self.set_default_timer(timer);
        self
    }

    /// Uses `style` for every toast whose class names contain `class`.
    ///
    /// The first registered matching class wins.
    #[must_use]
    pub fn class_style(mut self, class: impl Into<String>, style: ToastStyle) -> Self {
        self.class_styles.push((class.into(), style));
        self
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_light_background(&mut self, light_background: bool) {
        self.light_background = light_background;
    }

    /// Applies to toasts published from now on. Zero is ignored.
    pub fn set_default_timer(&mut self, timer: Duration) {
        if !timer.is_zero() {
            self.default_timer = timer;
        }
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    #[must_use]
    pub fn current_position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_light_background(&self) -> bool {
        self.light_background
    }

    /// Time of the last processed tick.
    #[must_use]
    pub fn clock(&self) -> Instant {
        self.clock
    }

    /// Handles a container message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Published(data) => {
                self.push(data, Instant::now());
            }
            Message::Tick(now) => {
                self.tick(now);
            }
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Adds a toast created at `now` to the front of the stack.
    pub fn push(&mut self, data: ToastData, now: Instant) -> ToastId {
        let toast = Toast::from_data(data, self.default_timer, now);
        let id = toast.id();
        tracing::debug!(
            status = %toast.status(),
            timer_ms = toast.timer().as_millis() as u64,
            "toast shown"
        );
        self.toasts.push_front(toast);
        id
    }

    /// Advances the clock to `now` and removes every expired toast.
    ///
    /// Returns the number of toasts removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.clock = self.clock.max(now);
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        let expired = before - self.toasts.len();
        if expired > 0 {
            tracing::debug!(expired, remaining = self.toasts.len(), "toasts expired");
        }
        expired
    }

    /// Removes a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
            self.toasts.remove(pos);
            return true;
        }
        false
    }

    /// Removes every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Live toasts, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Resolves the colors of `toast`, honoring class styles.
    #[must_use]
    pub fn style_for(&self, toast: &Toast) -> ToastStyle {
        self.class_styles
            .iter()
            .find(|(class, _)| toast.has_class(class))
            .map_or_else(
                || toast_style(toast.status(), self.light_background),
                |(_, style)| *style,
            )
    }

    /// Store watch plus, while toasts are live, the expiry tick.
    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        };

        Subscription::batch([watch_store(&self.store), ticks])
    }
}

/// Forwards every publish on `store` as [`Message::Published`].
///
/// The watch is unregistered when iced drops the subscription.
fn watch_store(store: &ToastStore) -> Subscription<Message> {
    Subscription::run_with(StoreKey(store.clone()), |key| {
        let store = key.0.clone();
        stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
            let mut watch = store.watch();
            while let Some(data) = watch.recv().await {
                if output.send(Message::Published(data)).await.is_err() {
                    break;
                }
            }
        })
    })
}

/// Subscription identity for [`watch_store`]: hashes by store id.
struct StoreKey(ToastStore);

impl std::hash::Hash for StoreKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.id().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;
    use crate::ui::toasts::toast::Status;

    fn container() -> ToastContainer {
        ToastContainer::new(ToastStore::new())
    }

    #[test]
    fn new_container_is_empty() {
        let container = container();
        assert!(container.is_empty());
        assert_eq!(container.current_position(), Position::BottomRight);
        assert!(!container.is_light_background());
    }

    #[test]
    fn published_message_adds_exactly_one_toast() {
        let mut container = container();
        container.update(Message::Published(ToastData::new(Status::Success, "saved")));

        assert_eq!(container.len(), 1);
        let toast = container.toasts().next().expect("toast should be shown");
        assert_eq!(toast.status(), Status::Success);
        assert_eq!(toast.message(), "saved");
    }

    #[test]
    fn newest_toast_comes_first() {
        let mut container = container();
        let now = Instant::now();
        container.push(ToastData::new(Status::Info, "first"), now);
        container.push(ToastData::new(Status::Info, "second"), now);

        let messages: Vec<&str> = container.toasts().map(Toast::message).collect();
        assert_eq!(messages, ["second", "first"]);
    }

    #[test]
    fn toast_is_removed_after_default_timer_and_not_before() {
        let mut container = container();
        let now = Instant::now();
        container.push(ToastData::new(Status::Info, "hello"), now);

        assert_eq!(container.tick(now + Duration::from_millis(2999)), 0);
        assert_eq!(container.len(), 1);

        assert_eq!(container.tick(now + Duration::from_millis(3000)), 1);
        assert!(container.is_empty());
    }

    #[test]
    fn custom_timer_controls_expiry() {
        let mut container = container();
        let now = Instant::now();
        container.push(
            ToastData::new(Status::Warning, "slow").with_timer(Duration::from_secs(10)),
            now,
        );
        container.push(ToastData::new(Status::Info, "quick"), now);

        container.tick(now + Duration::from_secs(5));
        let messages: Vec<&str> = container.toasts().map(Toast::message).collect();
        assert_eq!(messages, ["slow"]);

        container.tick(now + Duration::from_secs(10));
        assert!(container.is_empty());
    }

    #[test]
    fn huge_timer_survives_ticks_until_dismissed() {
        let mut container = container();
        let now = Instant::now();
        let id = container.push(
            ToastData::new(Status::Success, "pinned").with_timer(Duration::MAX),
            now,
        );
        container.push(ToastData::new(Status::Info, "short"), now);

        assert_eq!(container.tick(now + Duration::from_millis(TICK_INTERVAL_MS)), 0);
        assert_eq!(container.tick(now + Duration::from_secs(3)), 1);
        assert_eq!(container.len(), 1);

        assert!(container.dismiss(id));
        assert!(container.is_empty());
    }

    #[test]
    fn configured_default_timer_applies() {
        let mut container = container().default_timer(Duration::from_secs(1));
        let now = Instant::now();
        container.push(ToastData::new(Status::Error, "boom"), now);

        container.tick(now + Duration::from_millis(999));
        assert_eq!(container.len(), 1);
        container.tick(now + Duration::from_secs(1));
        assert!(container.is_empty());
    }

    #[test]
    fn zero_default_timer_is_ignored() {
        let mut container = container().default_timer(Duration::ZERO);
        let now = Instant::now();
        container.push(ToastData::new(Status::Info, "x"), now);
        let toast = container.toasts().next().expect("toast should be shown");
        assert_eq!(toast.timer(), Duration::from_millis(DEFAULT_TIMER_MS));
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut container = container();
        let now = Instant::now();
        let first = container.push(ToastData::new(Status::Info, "a"), now);
        container.push(ToastData::new(Status::Info, "b"), now);

        container.update(Message::Dismiss(first));
        assert_eq!(container.len(), 1);
        assert!(!container.dismiss(first));
    }

    #[test]
    fn tick_advances_clock_monotonically() {
        let mut container = container();
        let later = container.clock() + Duration::from_secs(1);
        container.update(Message::Tick(later));
        assert_eq!(container.clock(), later);

        container.tick(later - Duration::from_millis(500));
        assert_eq!(container.clock(), later);
    }

    #[test]
    fn style_follows_light_background_flag() {
        let mut container = container();
        let now = Instant::now();
        container.push(ToastData::new(Status::Error, "x"), now);
        let toast = container.toasts().next().cloned().expect("toast");

        assert_eq!(container.style_for(&toast).background, palette::ERROR_SOLID);
        container.set_light_background(true);
        assert_eq!(container.style_for(&toast).background, palette::ERROR_LIGHT_BG);
    }

    #[test]
    fn class_style_overrides_status_colors() {
        let custom = ToastStyle {
            background: palette::GRAY_900,
            text: palette::WHITE,
            border: None,
            icon: palette::WHITE,
        };
        let mut container = container().class_style("dark", custom);
        let now = Instant::now();
        container.push(
            ToastData::new(Status::Success, "x").with_class_names("wide dark"),
            now,
        );
        container.push(ToastData::new(Status::Success, "y"), now);

        let styles: Vec<ToastStyle> = container.toasts().map(|t| container.style_for(t)).collect();
        assert_eq!(styles[0].background, palette::SUCCESS_SOLID);
        assert_eq!(styles[1], custom);
    }

    #[test]
    fn clear_removes_all() {
        let mut container = container();
        let now = Instant::now();
        for i in 0..5 {
            container.push(ToastData::new(Status::Info, format!("t-{i}")), now);
        }
        container.clear();
        assert!(container.is_empty());
    }
}
