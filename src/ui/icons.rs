// SPDX-License-Identifier: MPL-2.0
//! Icon handles.
//!
//! Icons are inline SVG documents. Handles are created once on first access
//! and cloned thereafter.

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

const CHECKMARK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 14 14"><path d="M3.867 7.603L1.533 5.27a.656.656 0 0 0-.933 0 .656.656 0 0 0 0 .933l2.793 2.794c.26.26.68.26.94 0l7.067-7.06a.656.656 0 0 0 0-.934.656.656 0 0 0-.933 0l-6.6 6.6z" fill="#ffffff" fill-rule="evenodd"/></svg>"##;

/// Checkmark glyph shown at the start of every toast.
pub fn checkmark() -> Svg<'static> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    let handle = HANDLE.get_or_init(|| Handle::from_memory(CHECKMARK_SVG.as_bytes()));
    Svg::new(handle.clone())
}
