// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides auto-dismissing toast notifications for Iced
//! applications.
//!
//! A [`ToastStore`](ui::toasts::ToastStore) receives messages from anywhere in
//! the application; a [`ToastContainer`](ui::toasts::ToastContainer) watches
//! it and renders the live toasts in a corner of the window. The bundled
//! binary is a small playground exercising both.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
