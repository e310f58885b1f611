// SPDX-License-Identifier: MPL-2.0
//! Playground application demonstrating the toast widget.
//!
//! The `App` owns a [`ToastStore`] and the [`ToastContainer`] watching it.
//! Publish buttons go through the store, so toasts reach the container the
//! same way they would from any other part of a real application: through
//! the store subscription.

pub mod paths;
mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::theming::ThemeMode;
use crate::ui::toasts::{Position, Status, ToastContainer, ToastData, ToastStore};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    store: ToastStore,
    toasts: ToastContainer,
    theme_mode: ThemeMode,
    /// Text of the message input.
    draft: String,
    /// Settings as loaded, updated when the user changes toast options.
    config: Config,
    /// Directory settings are saved to; `None` means the resolved default.
    config_dir: Option<std::path::PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("position", &self.toasts.current_position())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, applies CLI overrides and surfaces any load warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(config, ToastStore::new());
        app.apply_flags(&flags);

        if let Some(warning) = config_warning {
            // The store subscription is not running yet, so bypass it.
            app.toasts
                .push(ToastData::new(Status::Warning, warning), Instant::now());
        }

        tracing::info!(
            position = %app.toasts.current_position(),
            light_background = app.toasts.is_light_background(),
            "toast playground started"
        );

        (app, Task::none())
    }

    /// Builds the application from already-loaded settings.
    pub fn with_config(config: Config, store: ToastStore) -> Self {
        let toasts = ToastContainer::new(store.clone())
            .position(config.toasts.position)
            .light_background(config.toasts.light_background.unwrap_or(false))
            .default_timer(config.toasts.default_timer());

        Self {
            store,
            toasts,
            theme_mode: config.general.theme_mode,
            draft: String::new(),
            config,
            config_dir: None,
        }
    }

    /// Saves settings under `dir` instead of the resolved config directory.
    #[must_use]
    pub fn with_config_dir(mut self, dir: std::path::PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    fn apply_flags(&mut self, flags: &Flags) {
        if let Some(name) = flags.position.as_deref() {
            self.toasts
                .set_position(Position::from_name_or_default(name));
        }
        if flags.light_background {
            self.toasts.set_light_background(true);
        }
        if let Some(timer_ms) = flags.timer_ms {
            let timer_ms = timer_ms.clamp(config::MIN_TIMER_MS, config::MAX_TIMER_MS);
            self.toasts
                .set_default_timer(Duration::from_millis(timer_ms));
        }
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "IcedToast".to_string(),
            n => format!("IcedToast ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_toast_subscription(&self.toasts),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                self.toasts.update(toast_message);
            }
            Message::DraftChanged(draft) => {
                self.draft = draft;
            }
            Message::Publish(status) => {
                let message = match self.draft.trim() {
                    "" => placeholder_message(status).to_string(),
                    text => text.to_string(),
                };
                self.store.publish(ToastData::new(status, message));
            }
            Message::PositionSelected(position) => {
                self.toasts.set_position(position);
                self.config.toasts.position = position;
                self.persist_config();
            }
            Message::LightBackgroundToggled(light_background) => {
                self.toasts.set_light_background(light_background);
                self.config.toasts.light_background = Some(light_background);
                self.persist_config();
            }
            Message::ClearToasts => {
                self.toasts.clear();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            draft: &self.draft,
            toasts: &self.toasts,
        })
    }

    /// Writes settings, reporting failures as an error toast.
    fn persist_config(&mut self) {
        if let Err(err) = config::save_with_override(&self.config, self.config_dir.clone()) {
            tracing::warn!(%err, "failed to save settings");
            self.toasts.push(
                ToastData::new(Status::Error, format!("Settings were not saved: {err}")),
                Instant::now(),
            );
        }
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastContainer {
        &self.toasts
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }
}

/// Text published when the input is empty.
fn placeholder_message(status: Status) -> &'static str {
    match status {
        Status::Success => "Operation completed",
        Status::Info => "Here is something you should know",
        Status::Warning => "Something needs your attention",
        Status::Error => "Something went wrong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::ToastMessage;
    use tempfile::tempdir;

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create temp dir");
        let app = App::with_config(Config::default(), ToastStore::new())
            .with_config_dir(dir.path().to_path_buf());
        (app, dir)
    }

    #[test]
    fn with_config_applies_toast_settings() {
        let mut config = Config::default();
        config.toasts.position = Position::TopLeft;
        config.toasts.light_background = Some(true);
        let app = App::with_config(config, ToastStore::new());

        assert_eq!(app.toasts().current_position(), Position::TopLeft);
        assert!(app.toasts().is_light_background());
    }

    #[test]
    fn publish_goes_through_the_store() {
        let (mut app, _dir) = test_app();
        let mut watch = app.store().watch();

        let _ = app.update(Message::DraftChanged("  Saved  ".into()));
        let _ = app.update(Message::Publish(Status::Success));

        let data = watch.try_recv().expect("publish should reach watchers");
        assert_eq!(data.status, Status::Success);
        assert_eq!(data.message, "Saved");

        // The container only changes once the subscription delivers the data.
        assert!(app.toasts().is_empty());
        let _ = app.update(Message::Toast(ToastMessage::Published(data)));
        assert_eq!(app.toasts().len(), 1);
    }

    #[test]
    fn empty_draft_publishes_placeholder() {
        let (mut app, _dir) = test_app();
        let _ = app.update(Message::Publish(Status::Error));

        let data = app.store().data().expect("data should be published");
        assert_eq!(data.message, placeholder_message(Status::Error));
    }

    #[test]
    fn position_change_is_saved() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::PositionSelected(Position::TopCenter));

        assert_eq!(app.toasts().current_position(), Position::TopCenter);
        let (saved, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(saved.toasts.position, Position::TopCenter);
    }

    #[test]
    fn light_background_toggle_is_saved() {
        let (mut app, dir) = test_app();
        let _ = app.update(Message::LightBackgroundToggled(true));

        assert!(app.toasts().is_light_background());
        let (saved, _) = config::load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(saved.toasts.light_background, Some(true));
    }

    #[test]
    fn clear_toasts_empties_container() {
        let (mut app, _dir) = test_app();
        for status in Status::ALL {
            let _ = app.update(Message::Toast(ToastMessage::Published(ToastData::new(
                status, "x",
            ))));
        }
        assert_eq!(app.toasts().len(), 4);

        let _ = app.update(Message::ClearToasts);
        assert!(app.toasts().is_empty());
    }

    #[test]
    fn flags_override_config() {
        let mut app = App::with_config(Config::default(), ToastStore::new());
        app.apply_flags(&Flags {
            position: Some("top_right".into()),
            light_background: true,
            timer_ms: Some(1200),
            config_dir: None,
        });

        assert_eq!(app.toasts().current_position(), Position::TopRight);
        assert!(app.toasts().is_light_background());

        let now = Instant::now();
        app.toasts.push(ToastData::new(Status::Info, "x"), now);
        assert_eq!(app.toasts.tick(now + Duration::from_millis(1199)), 0);
        assert_eq!(app.toasts.tick(now + Duration::from_millis(1200)), 1);
    }

    #[test]
    fn title_counts_live_toasts() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.title(), "IcedToast");
        let _ = app.update(Message::Toast(ToastMessage::Published(ToastData::new(
            Status::Info,
            "x",
        ))));
        assert_eq!(app.title(), "IcedToast (1)");
    }
}
