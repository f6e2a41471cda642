//! Style scalars: row heights, percent strings, border edges.

use std::fmt;

/// Maximum number of digits accepted in a percent string (`"150%"`).
pub const MAX_PERCENT_DIGITS: usize = 3;

/// A row height: absolute units or a share of the screen height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    /// Absolute height in layout units.
    Units(u32),
    /// Percentage of the maximum screen height. The `[1, 100]` range is
    /// enforced when the height is resolved, not when it is declared.
    Percent(u16),
}

impl Height {
    /// An absolute height.
    pub fn units(value: u32) -> Self {
        Self::Units(value)
    }

    /// A percent-of-screen height.
    pub fn percent(value: u16) -> Self {
        Self::Percent(value)
    }
}

impl From<u32> for Height {
    fn from(value: u32) -> Self {
        Self::Units(value)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units(v) => write!(f, "{v}"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Parse a percent string: one to three ASCII digits followed by `%`.
///
/// Returns `None` for anything else, including `"%"`, `"1000%"` and `"-5%"`.
pub fn parse_percent(input: &str) -> Option<u16> {
    let digits = input.trim().strip_suffix('%')?;
    if digits.is_empty()
        || digits.len() > MAX_PERCENT_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

/// One horizontal border edge: a thickness and an optional explicit color.
///
/// Without a color the edge is painted with the element's foreground color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub size: u32,
    pub color: Option<String>,
}

impl Border {
    /// A border edge of the given thickness in the foreground color.
    pub fn new(size: u32) -> Self {
        Self { size, color: None }
    }

    /// Set an explicit edge color (builder).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl From<u32> for Border {
    fn from(size: u32) -> Self {
        Self::new(size)
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.color {
            Some(color) => write!(f, "[{}, {color}]", self.size),
            None => write!(f, "{}", self.size),
        }
    }
}
