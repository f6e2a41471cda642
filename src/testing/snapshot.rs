//! Plain-text dumps of compiled rows.
//!
//! One line per row, followed by one indented line per cell:
//!
//! ```text
//! margin-top h=8 bg=#ffffff
//! content h=44 bg=#1c1c1e taps=[1, 2]
//!   Text "Title" 75.0% Left color=#808080
//! ```

use std::fmt::Write as _;

use crate::layout::{CellDescriptor, RowDescriptor};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Dump `rows` to a string suitable for snapshot assertions.
///
/// Lines are joined with `'\n'` and there is no trailing newline.
pub fn rows_to_string(rows: &[RowDescriptor]) -> String {
    let mut lines = Vec::new();
    for row in rows {
        lines.push(row_line(row));
        lines.extend(row.cells.iter().map(cell_line));
    }
    lines.join("\n")
}

fn row_line(row: &RowDescriptor) -> String {
    let mut line = format!(
        "{} h={} bg={}",
        row.role,
        row.height,
        row.bg_color.as_deref().unwrap_or("-")
    );
    if row.is_tappable() {
        let _ = write!(line, " taps={:?}", row.taps.registered());
    }
    if row.taps.dismiss_on_tap {
        line.push_str(" dismiss");
    }
    line
}

fn cell_line(cell: &CellDescriptor) -> String {
    let mut line = format!(
        "  {:?} {:?} {:.1}% {:?}",
        cell.kind, cell.value, cell.width, cell.align
    );
    if let Some(color) = &cell.color {
        let _ = write!(line, " color={color}");
    }
    if let Some(face) = &cell.font.face {
        let _ = write!(line, " font={face}");
    }
    if let Some(size) = cell.font.size {
        let _ = write!(line, " size={size}");
    }
    line
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::CellKind;
    use crate::layout::{Edge, Font, RowRole};
    use crate::style::Align;
    use crate::tap::{TapAction, TapBindings};

    fn cell(value: &str, width: f64) -> CellDescriptor {
        CellDescriptor {
            kind: CellKind::Text,
            value: value.to_string(),
            align: Align::Left,
            width,
            color: None,
            font: Font::default(),
        }
    }

    #[test]
    fn empty_rows() {
        assert_eq!(rows_to_string(&[]), "");
    }

    #[test]
    fn spacer_and_content() {
        let taps = TapBindings::new()
            .on_tap(TapAction::sync(|| Ok(())))
            .dismiss_on_tap(true);
        let mut styled = cell("b", 33.333);
        styled.color = Some("#ff0000".into());
        styled.font = Font {
            face: Some("mono".into()),
            size: Some(12.5),
        };
        let rows = vec![
            RowDescriptor::spacer(
                RowRole::Margin(Edge::Top),
                Some("#ffffff".into()),
                8,
                TapBindings::new(),
            ),
            RowDescriptor::content(None, 44, vec![cell("a", 66.667), styled], taps),
        ];

        insta::assert_snapshot!(rows_to_string(&rows), @r###"
        margin-top h=8 bg=#ffffff
        content h=44 bg=- taps=[1] dismiss
          Text "a" 66.7% Left
          Text "b" 33.3% Left color=#ff0000 font=mono size=12.5
        "###);
    }
}
