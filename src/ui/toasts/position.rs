// SPDX-License-Identifier: MPL-2.0
//! Screen placement of the toast stack.

use crate::config::EDGE_OFFSET;
use crate::error::{Error, Result};
use iced::alignment::{Horizontal, Vertical};
use iced::Padding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the toast stack is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    TopCenter,
    BottomCenter,
}

/// Alignment and edge offsets derived from a [`Position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub align_x: Horizontal,
    pub align_y: Vertical,
    pub padding: Padding,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::TopLeft => "top_left",
            Position::TopRight => "top_right",
            Position::BottomLeft => "bottom_left",
            Position::BottomRight => "bottom_right",
            Position::TopCenter => "top_center",
            Position::BottomCenter => "bottom_center",
        }
    }

    /// Parses a canonical name. Hyphens are accepted in place of underscores.
    pub fn from_name(name: &str) -> Result<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Position::ALL
            .into_iter()
            .find(|position| position.name() == normalized)
            .ok_or_else(|| Error::InvalidPosition(name.to_string()))
    }

    /// Parses a name, falling back to [`Position::BottomRight`] when unknown.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default toast position");
            Position::default()
        })
    }

    /// Maps the position to its alignment and padding.
    #[must_use]
    pub fn placement(self) -> Placement {
        let (align_y, top, bottom) = if self.is_top() {
            (Vertical::Top, EDGE_OFFSET, 0.0)
        } else {
            (Vertical::Bottom, 0.0, EDGE_OFFSET)
        };

        let (align_x, left, right) = match self {
            Position::TopLeft | Position::BottomLeft => (Horizontal::Left, EDGE_OFFSET, 0.0),
            Position::TopRight | Position::BottomRight => (Horizontal::Right, 0.0, EDGE_OFFSET),
            Position::TopCenter | Position::BottomCenter => (Horizontal::Center, 0.0, 0.0),
        };

        Placement {
            align_x,
            align_y,
            padding: Padding {
                top,
                right,
                bottom,
                left,
            },
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopRight | Position::TopCenter
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
