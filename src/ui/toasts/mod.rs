// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Publishers send short messages to a [`ToastStore`]. A [`ToastContainer`]
//! watches the store, shows each message as a banner stacked at one of six
//! screen positions, and removes it once its timer runs out.
//!
//! # Components
//!
//! - [`toast`] - `Status`, published `ToastData` and the displayed `Toast`
//! - [`store`] - `ToastStore` observable with severity publish methods
//! - [`container`] - `ToastContainer` state, messages and subscription
//! - [`position`] - `Position` and its alignment mapping
//! - [`style`] - colors per status, solid or light
//! - [`fade`] - fade in/out curve over a toast's lifetime
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::toasts::{Position, ToastContainer, ToastStore};
//!
//! let store = ToastStore::new();
//! let mut toasts = ToastContainer::new(store.clone())
//!     .position(Position::TopRight)
//!     .light_background(true);
//!
//! // Anywhere, from any thread
//! store.success("Saved", None, None);
//!
//! // In the application
//! fn subscription(&self) -> Subscription<Message> {
//!     self.toasts.subscription().map(Message::Toast)
//! }
//! fn view(&self) -> Element<'_, Message> {
//!     Stack::new()
//!         .push(content)
//!         .push(self.toasts.view().map(Message::Toast))
//!         .into()
//! }
//! ```

pub mod container;
pub mod fade;
pub mod position;
pub mod store;
pub mod style;
pub mod toast;
mod view;

pub use container::{Message as ToastMessage, ToastContainer};
pub use position::{Placement, Position};
pub use store::{StoreId, ToastStore, Watch, WatchId};
pub use style::{toast_style, ToastStyle};
pub use toast::{Status, Toast, ToastData, ToastId};
