//! Width allocation: resolve blank sibling widths into a percentage split.
//!
//! Siblings with a declared width keep it, blanks share what is left of 100,
//! and the result is scaled to sum to 100. The one exception is the
//! oversubscribed case: when declared widths claim more than half the row,
//! each blank gets [`FALLBACK_WIDTH`] and the total is left as it falls
//! (`[70, _, _]` gives `[70, 10, 10]`, summing to 90).

use crate::dom::{CellData, ElementTree, NodeId};
use crate::layout::LayoutError;

/// Width given to each blank sibling when declared widths leave no room.
pub const FALLBACK_WIDTH: f64 = 10.0;

const FULL: f64 = 100.0;

/// Result of [`fill_blanks`].
#[derive(Debug, Clone, PartialEq)]
pub struct Filled {
    pub widths: Vec<f64>,
    /// Blanks received [`FALLBACK_WIDTH`]; the total is not normalized.
    pub oversubscribed: bool,
}

/// Sibling-index → percentage mapping for one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidthMap(Vec<f64>);

impl WidthMap {
    /// Width of the cell at `sibling_index`.
    pub fn get(&self, sibling_index: usize) -> Option<f64> {
        self.0.get(sibling_index).copied()
    }

    /// Sum of all widths.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Number of siblings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Widths in sibling order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Width of an attached cell of this row, by its sibling index.
    pub fn width_of(&self, cell: NodeId, data: &CellData) -> Result<f64, LayoutError> {
        data.sibling_index
            .and_then(|index| self.get(index))
            .ok_or(LayoutError::Unattached { node: cell })
    }
}

/// A declared width counts only when it is positive.
fn valid(width: Option<f64>) -> Option<f64> {
    width.filter(|w| *w > 0.0)
}

/// Fill blank entries. Zero and negative widths count as blank.
///
/// Blanks split the remainder evenly while the declared widths take at most
/// half the row. Beyond that the row is oversubscribed.
pub fn fill_blanks(widths: &[Option<f64>]) -> Filled {
    let blanks = widths.iter().filter(|w| valid(**w).is_none()).count();
    if blanks == 0 {
        return Filled {
            widths: widths.iter().filter_map(|w| valid(*w)).collect(),
            oversubscribed: false,
        };
    }

    let declared: f64 = widths.iter().filter_map(|w| valid(*w)).sum();
    let remaining = FULL - declared;
    let (share, oversubscribed) = if declared > remaining {
        (FALLBACK_WIDTH, true)
    } else {
        (remaining / blanks as f64, false)
    };

    Filled {
        widths: widths.iter().map(|w| valid(*w).unwrap_or(share)).collect(),
        oversubscribed,
    }
}

/// Scale `widths` so they sum to 100. An empty or zero-sum list is returned as-is.
pub fn normalize(widths: &[f64]) -> Vec<f64> {
    let total: f64 = widths.iter().sum();
    if total <= 0.0 || total == FULL {
        return widths.to_vec();
    }
    widths.iter().map(|w| w * FULL / total).collect()
}

/// Fill blanks, then normalize unless the fallback path was taken.
pub fn allocate(widths: &[Option<f64>]) -> WidthMap {
    let filled = fill_blanks(widths);
    if filled.oversubscribed {
        WidthMap(filled.widths)
    } else {
        WidthMap(normalize(&filled.widths))
    }
}

/// Resolved width of one attached cell.
///
/// Fails with [`LayoutError::Unattached`] if the cell has no parent or no
/// sibling index.
pub fn resolve_cell_width(tree: &ElementTree, cell: NodeId) -> Result<f64, LayoutError> {
    let node = tree.get(cell).ok_or(LayoutError::UnknownNode { node: cell })?;
    let data = node
        .as_cell()
        .ok_or(LayoutError::Unattached { node: cell })?;
    let parent = tree
        .parent(cell)
        .ok_or(LayoutError::Unattached { node: cell })?;

    allocate(&tree.cell_widths(parent)).width_of(cell, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Cell, Container};
    use crate::style::Style;
    use pretty_assertions::assert_eq;

    fn approx(a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    }

    #[test]
    fn fill_splits_remaining_between_blanks() {
        let filled = fill_blanks(&[None, Some(50.0), None]);
        assert_eq!(filled.widths, vec![25.0, 50.0, 25.0]);
        assert!(!filled.oversubscribed);
    }

    #[test]
    fn fill_without_blanks_is_unchanged() {
        let filled = fill_blanks(&[Some(60.0), Some(60.0)]);
        assert_eq!(filled.widths, vec![60.0, 60.0]);
        assert_eq!(normalize(&filled.widths), vec![50.0, 50.0]);
    }

    #[test]
    fn oversubscribed_blanks_get_fallback() {
        let filled = fill_blanks(&[Some(70.0), None, None]);
        assert_eq!(filled.widths, vec![70.0, 10.0, 10.0]);
        assert!(filled.oversubscribed);
    }

    #[test]
    fn oversubscribed_total_is_not_renormalized() {
        let map = allocate(&[Some(70.0), None, None]);
        assert_eq!(map.as_slice(), &[70.0, 10.0, 10.0]);
        assert_eq!(map.total(), 90.0);

        let map = allocate(&[Some(70.0), Some(40.0), None]);
        assert_eq!(map.as_slice(), &[70.0, 40.0, 10.0]);
        assert_eq!(map.total(), 120.0);
    }

    #[test]
    fn half_row_is_the_oversubscription_threshold() {
        assert_eq!(allocate(&[Some(50.0), None]).as_slice(), &[50.0, 50.0]);
        assert_eq!(allocate(&[Some(51.0), None]).as_slice(), &[51.0, 10.0]);
        assert_eq!(allocate(&[Some(30.0), Some(30.0), None]).as_slice(), &[30.0, 30.0, 10.0]);
    }

    #[test]
    fn exactly_full_declared_takes_fallback() {
        let map = allocate(&[Some(100.0), None]);
        assert_eq!(map.as_slice(), &[100.0, 10.0]);
    }

    #[test]
    fn single_blank_takes_everything() {
        assert_eq!(allocate(&[None]).as_slice(), &[100.0]);
    }

    #[test]
    fn zero_and_negative_count_as_blank() {
        let filled = fill_blanks(&[Some(0.0), Some(-5.0), Some(50.0)]);
        assert_eq!(filled.widths, vec![25.0, 25.0, 50.0]);
    }

    #[test]
    fn normalization_scales_by_hundred_over_sum() {
        for widths in [vec![10.0, 30.0], vec![150.0], vec![1.0, 2.0, 3.0, 4.0], vec![33.0, 33.0, 33.0]] {
            let sum: f64 = widths.iter().sum();
            let expected: Vec<f64> = widths.iter().map(|w| w * 100.0 / sum).collect();
            let opts: Vec<Option<f64>> = widths.iter().copied().map(Some).collect();
            let map = allocate(&opts);
            assert!(approx(map.as_slice(), &expected), "{widths:?} -> {map:?}");
            assert!((map.total() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn oversized_single_cell_dominates() {
        let map = allocate(&[Some(150.0), Some(50.0)]);
        assert!(approx(map.as_slice(), &[75.0, 25.0]));
    }

    #[test]
    fn empty_row() {
        let map = allocate(&[]);
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(0), None);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn resolve_attached_cells() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new());
        let a = tree.attach(row, Cell::text("a")).unwrap();
        let b = tree
            .attach(row, Cell::text("b").with_style(Style::new().with_width(50.0)))
            .unwrap();
        let c = tree.attach(row, Cell::text("c")).unwrap();

        assert_eq!(resolve_cell_width(&tree, a), Ok(25.0));
        assert_eq!(resolve_cell_width(&tree, b), Ok(50.0));
        assert_eq!(resolve_cell_width(&tree, c), Ok(25.0));
    }

    #[test]
    fn resolve_detached_cell_fails() {
        let mut tree = ElementTree::new();
        let lonely = tree.insert(Cell::text("lonely"));
        assert_eq!(
            resolve_cell_width(&tree, lonely),
            Err(LayoutError::Unattached { node: lonely })
        );
    }

    #[test]
    fn width_of_needs_a_sibling_index() {
        let mut tree = ElementTree::new();
        let lonely = tree.insert(Cell::text("lonely"));
        let data = tree.get(lonely).unwrap().as_cell().unwrap();
        let map = allocate(&[None]);
        assert_eq!(
            map.width_of(lonely, data),
            Err(LayoutError::Unattached { node: lonely })
        );
    }

    #[test]
    fn resolve_container_is_unattached() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new());
        assert_eq!(
            resolve_cell_width(&tree, row),
            Err(LayoutError::Unattached { node: row })
        );
    }
}
