//! Compiler output: row and cell descriptors.
//!
//! Descriptors are plain values produced fresh on every compilation pass.
//! They have no identity beyond their position in the output.

use std::fmt;

use crate::dom::CellKind;
use crate::style::Align;
use crate::tap::TapBindings;

/// Top or bottom side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Why a row exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRole {
    /// A row of cells.
    Content,
    Margin(Edge),
    Border(Edge),
    Padding(Edge),
}

impl RowRole {
    /// Whether this row was synthesized by the box model.
    pub fn is_spacer(&self) -> bool {
        !matches!(self, Self::Content)
    }
}

impl fmt::Display for RowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = |e: &Edge| match e {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        };
        match self {
            Self::Content => write!(f, "content"),
            Self::Margin(e) => write!(f, "margin-{}", edge(e)),
            Self::Border(e) => write!(f, "border-{}", edge(e)),
            Self::Padding(e) => write!(f, "padding-{}", edge(e)),
        }
    }
}

/// Resolved font of a cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    pub face: Option<String>,
    pub size: Option<f32>,
}

/// One cell of a content row.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor {
    pub kind: CellKind,
    pub value: String,
    pub align: Align,
    /// Percentage of the row width.
    pub width: f64,
    pub color: Option<String>,
    pub font: Font,
}

/// One concrete row, ready for a presentation layer.
#[derive(Debug, Clone)]
pub struct RowDescriptor {
    pub role: RowRole,
    pub bg_color: Option<String>,
    pub height: u32,
    /// Empty for spacer rows.
    pub cells: Vec<CellDescriptor>,
    pub taps: TapBindings,
}

impl RowDescriptor {
    /// A box-model row with no cells.
    pub fn spacer(role: RowRole, bg_color: Option<String>, height: u32, taps: TapBindings) -> Self {
        Self {
            role,
            bg_color,
            height,
            cells: Vec::new(),
            taps,
        }
    }

    /// A row of cells.
    pub fn content(
        bg_color: Option<String>,
        height: u32,
        cells: Vec<CellDescriptor>,
        taps: TapBindings,
    ) -> Self {
        Self {
            role: RowRole::Content,
            bg_color,
            height,
            cells,
            taps,
        }
    }

    /// Whether tapping this row can dispatch anything.
    pub fn is_tappable(&self) -> bool {
        !self.taps.is_empty()
    }
}
