//! Style record with typed `Option<T>` fields for every recognised option.
//!
//! This is the per-node style context. `None` means "not set": the value is
//! either inherited from the parent at attach time or falls back to a layout
//! default when the row is compiled.

use crate::style::scalar::{Border, Height};

/// Horizontal alignment of a cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// How a faded element derives its foreground color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fade {
    /// Mix the foreground toward white.
    #[default]
    Lighten,
    /// Mix the foreground toward black.
    Darken,
    /// Replace the foreground with this color.
    Color(String),
}

/// Presentation mode of the table, used to pick the usable screen height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Fullscreen,
}

/// All style options of a node. Each field is `Option<T>`; `None` means unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    // Colors
    pub bg_color: Option<String>,
    pub color: Option<String>,
    pub is_faded: Option<bool>,
    pub fade_with: Option<Fade>,

    // Text
    pub font: Option<String>,
    pub font_size: Option<f32>,
    pub align: Option<Align>,

    // Sizing
    pub width: Option<f64>,
    pub height: Option<Height>,

    // Box model
    pub margin_top: Option<u32>,
    pub margin_bottom: Option<u32>,
    pub padding_top: Option<u32>,
    pub padding_bottom: Option<u32>,
    pub border_top: Option<Border>,
    pub border_bottom: Option<Border>,

    pub mode: Option<DisplayMode>,
}

/// Pick `other` if set, otherwise keep `base`.
fn merge_opt<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
    if other.is_some() {
        other.clone()
    } else {
        base.clone()
    }
}

impl Style {
    /// Create a new `Style` with all fields set to `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `other` on top of `self`: every field set in `other` wins.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            bg_color: merge_opt(&self.bg_color, &other.bg_color),
            color: merge_opt(&self.color, &other.color),
            is_faded: merge_opt(&self.is_faded, &other.is_faded),
            fade_with: merge_opt(&self.fade_with, &other.fade_with),

            font: merge_opt(&self.font, &other.font),
            font_size: merge_opt(&self.font_size, &other.font_size),
            align: merge_opt(&self.align, &other.align),

            width: merge_opt(&self.width, &other.width),
            height: merge_opt(&self.height, &other.height),

            margin_top: merge_opt(&self.margin_top, &other.margin_top),
            margin_bottom: merge_opt(&self.margin_bottom, &other.margin_bottom),
            padding_top: merge_opt(&self.padding_top, &other.padding_top),
            padding_bottom: merge_opt(&self.padding_bottom, &other.padding_bottom),
            border_top: merge_opt(&self.border_top, &other.border_top),
            border_bottom: merge_opt(&self.border_bottom, &other.border_bottom),

            mode: merge_opt(&self.mode, &other.mode),
        }
    }

    /// The subset of fields a child inherits from its parent.
    ///
    /// Sizing and box-model fields describe the element they are declared on
    /// and never flow into children.
    pub fn inheritable(&self) -> Style {
        Style {
            bg_color: self.bg_color.clone(),
            color: self.color.clone(),
            is_faded: self.is_faded,
            fade_with: self.fade_with.clone(),
            font: self.font.clone(),
            font_size: self.font_size,
            align: self.align,
            mode: self.mode,
            ..Style::default()
        }
    }

    /// Cascade a parent's resolved style under a child's own style.
    ///
    /// Only the [`inheritable`](Self::inheritable) subset of the parent is
    /// merged, not its whole style: width, height, margins, paddings and
    /// borders stay on the element that declares them, so nested containers
    /// do not repeat their parent's box.
    ///
    /// Computed once, when the child is attached; the result is stored on the
    /// child and never recomputed.
    pub fn cascade(parent: &Style, own: &Style) -> Style {
        parent.inheritable().merge(own)
    }

    /// Returns `true` if all fields are `None`.
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Whether the element is faded. Unset means not faded.
    pub fn faded(&self) -> bool {
        self.is_faded.unwrap_or(false)
    }

    /// The display mode, defaulting to [`DisplayMode::Normal`].
    pub fn display_mode(&self) -> DisplayMode {
        self.mode.unwrap_or_default()
    }

    // ── Builders ─────────────────────────────────────────────────────

    /// Set the background color (builder).
    pub fn with_bg_color(mut self, color: impl Into<String>) -> Self {
        self.bg_color = Some(color.into());
        self
    }

    /// Set the foreground color (builder).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the element as faded, deriving its color with `fade` (builder).
    pub fn with_fade(mut self, fade: Fade) -> Self {
        self.is_faded = Some(true);
        self.fade_with = Some(fade);
        self
    }

    /// Set the font descriptor (builder).
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Set the font size (builder).
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the alignment (builder).
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Set the cell width as a percentage of the row (builder).
    pub fn with_width(mut self, percent: f64) -> Self {
        self.width = Some(percent);
        self
    }

    /// Set the height (builder).
    pub fn with_height(mut self, height: impl Into<Height>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Set the top margin (builder).
    pub fn with_margin_top(mut self, units: u32) -> Self {
        self.margin_top = Some(units);
        self
    }

    /// Set the bottom margin (builder).
    pub fn with_margin_bottom(mut self, units: u32) -> Self {
        self.margin_bottom = Some(units);
        self
    }

    /// Set the top padding (builder).
    pub fn with_padding_top(mut self, units: u32) -> Self {
        self.padding_top = Some(units);
        self
    }

    /// Set the bottom padding (builder).
    pub fn with_padding_bottom(mut self, units: u32) -> Self {
        self.padding_bottom = Some(units);
        self
    }

    /// Set the top border (builder).
    pub fn with_border_top(mut self, border: impl Into<Border>) -> Self {
        self.border_top = Some(border.into());
        self
    }

    /// Set the bottom border (builder).
    pub fn with_border_bottom(mut self, border: impl Into<Border>) -> Self {
        self.border_bottom = Some(border.into());
        self
    }

    /// Set the display mode (builder).
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = Some(mode);
        self
    }
}
