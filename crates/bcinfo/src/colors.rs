//! Terminal styling for metadata dumps.

use std::fmt;

/// One escape sequence per line role in a dump.
///
/// `section` styles `[headers]`, `label` the index labels and trailing
/// comments, `value` quoted strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub section: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        section: "\x1b[1;34m",
        label: "\x1b[2m",
        value: "\x1b[32m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        section: "",
        label: "",
        value: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    pub(crate) fn section<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(self.section, text)
    }

    pub(crate) fn label<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(self.label, text)
    }

    pub(crate) fn value<T: fmt::Display>(&self, text: T) -> Painted<T> {
        self.paint(self.value, text)
    }

    fn paint<T: fmt::Display>(&self, style: &'static str, text: T) -> Painted<T> {
        Painted {
            style,
            reset: self.reset,
            text,
        }
    }
}

/// Text wrapped in a style and its reset.
pub(crate) struct Painted<T> {
    style: &'static str,
    reset: &'static str,
    text: T,
}

impl<T: fmt::Display> fmt::Display for Painted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.style, self.text, self.reset)
    }
}
