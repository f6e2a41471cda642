//! Box model expansion: margin, border and padding as synthetic rows.
//!
//! Rows are produced outside-in above the content and inside-out below it:
//!
//! ```text
//! margin-top
//!   border-top
//!     padding-top
//!       <content>
//!     padding-bottom
//!   border-bottom
//! margin-bottom
//! ```
//!
//! Zero or unset dimensions produce no row at all.

use crate::layout::compiler::LayoutConfig;
use crate::layout::row::{Edge, RowDescriptor, RowRole};
use crate::style::{Border, Style};
use crate::tap::TapBindings;

/// One entry of an expanded box: a synthetic row, or the content's position.
#[derive(Debug, Clone)]
pub enum BoxSlot {
    Row(RowDescriptor),
    Content,
}

impl BoxSlot {
    /// The synthetic row, if this slot holds one.
    pub fn row(&self) -> Option<&RowDescriptor> {
        match self {
            Self::Row(row) => Some(row),
            Self::Content => None,
        }
    }
}

fn margin(edge: Edge, size: Option<u32>, config: &LayoutConfig) -> Option<RowDescriptor> {
    size.filter(|s| *s > 0).map(|s| {
        RowDescriptor::spacer(
            RowRole::Margin(edge),
            Some(config.page_background.clone()),
            s,
            TapBindings::new(),
        )
    })
}

fn border(edge: Edge, border: Option<&Border>, foreground: Option<&str>) -> Option<RowDescriptor> {
    let border = border.filter(|b| b.size > 0)?;
    let color = border
        .color
        .clone()
        .or_else(|| foreground.map(str::to_owned));
    Some(RowDescriptor::spacer(
        RowRole::Border(edge),
        color,
        border.size,
        TapBindings::new(),
    ))
}

fn padding(
    edge: Edge,
    size: Option<u32>,
    content_color: Option<&str>,
    taps: &TapBindings,
) -> Option<RowDescriptor> {
    size.filter(|s| *s > 0).map(|s| {
        RowDescriptor::spacer(
            RowRole::Padding(edge),
            content_color.map(str::to_owned),
            s,
            taps.clone(),
        )
    })
}

/// Expand `style` into the ordered box around one content slot.
///
/// Margins take the page background and never respond to taps. Borders use
/// their explicit color or the style's foreground. Padding takes
/// `content_color` and carries `taps`, so tapping it still fires the row.
pub fn expand(
    style: &Style,
    content_color: Option<&str>,
    taps: &TapBindings,
    config: &LayoutConfig,
) -> Vec<BoxSlot> {
    let foreground = style.color.as_deref();
    let above = [
        margin(Edge::Top, style.margin_top, config),
        border(Edge::Top, style.border_top.as_ref(), foreground),
        padding(Edge::Top, style.padding_top, content_color, taps),
    ];
    let below = [
        padding(Edge::Bottom, style.padding_bottom, content_color, taps),
        border(Edge::Bottom, style.border_bottom.as_ref(), foreground),
        margin(Edge::Bottom, style.margin_bottom, config),
    ];

    above
        .into_iter()
        .flatten()
        .map(BoxSlot::Row)
        .chain(std::iter::once(BoxSlot::Content))
        .chain(below.into_iter().flatten().map(BoxSlot::Row))
        .collect()
}

/// Splice `content` into the [`BoxSlot::Content`] position of `slots`.
pub fn wrap(slots: Vec<BoxSlot>, content: Vec<RowDescriptor>) -> Vec<RowDescriptor> {
    let mut content = Some(content);
    let mut rows = Vec::with_capacity(slots.len());
    for slot in slots {
        match slot {
            BoxSlot::Row(row) => rows.push(row),
            BoxSlot::Content => rows.extend(content.take().into_iter().flatten()),
        }
    }
    rows
}
