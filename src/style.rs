//! Output layouts for rendering a word.

use std::{fmt, str::FromStr};

/// How a [crate::presenter::Presenter] lays out its fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// One line, fields joined by `|`, clear flags omitted.
    #[default]
    Horizontal,
    /// One line per field with tab-separated columns.
    Vertical,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Style::Horizontal => "horizontal",
            Style::Vertical => "vertical",
        })
    }
}

/// Error returned when parsing an unknown style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style '{0}', expected 'horizontal' or 'vertical'")]
pub struct ParseStyleError(String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "h" => Ok(Style::Horizontal),
            "vertical" | "v" => Ok(Style::Vertical),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}
