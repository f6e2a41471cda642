//! Row compiler: element tree → flat, ordered row descriptors.
//!
//! A container whose children are cells becomes one content row, wrapped in
//! its own box model. A container whose children are containers becomes the
//! concatenation of its children's rows, wrapped once in its own box model.
//! Mixing the two shapes under one container is a [`LayoutError`].
//!
//! Compilation is pure: it reads the tree and returns fresh values, so any
//! number of passes can run over the same tree.

use tracing::debug;

use crate::dom::{CellData, ContainerData, ElementTree, Node, NodeId, NodeKind};
use crate::layout::box_model::{expand, wrap};
use crate::layout::height::{resolve_height, LayoutWarning, ScreenHeightLookup, Viewport};
use crate::layout::row::{CellDescriptor, Font, RowDescriptor};
use crate::layout::width::allocate;
use crate::layout::LayoutError;
use crate::style::color;

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Defaults the compiler falls back on.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Background of margin rows.
    pub page_background: String,
    /// Height of a content row whose style declares none.
    pub default_row_height: u32,
    /// How far `lighten`/`darken` fades mix toward white/black (0.0-1.0).
    pub fade_amount: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_background: "#ffffff".to_string(),
            default_row_height: 44,
            fade_amount: 0.5,
        }
    }
}

impl LayoutConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page background (builder).
    pub fn with_page_background(mut self, color: impl Into<String>) -> Self {
        self.page_background = color.into();
        self
    }

    /// Set the default content row height (builder).
    pub fn with_default_row_height(mut self, height: u32) -> Self {
        self.default_row_height = height;
        self
    }

    /// Set the fade amount (builder).
    pub fn with_fade_amount(mut self, amount: f32) -> Self {
        self.fade_amount = amount;
        self
    }
}

// ---------------------------------------------------------------------------
// Compilation
// ---------------------------------------------------------------------------

/// Output of one compilation pass.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    pub rows: Vec<RowDescriptor>,
    /// Recoverable problems; the rows are still usable.
    pub warnings: Vec<LayoutWarning>,
}

/// Compiles subtrees of one element tree for one viewport.
pub struct RowCompiler<'a> {
    tree: &'a ElementTree,
    viewport: &'a Viewport,
    lookup: &'a dyn ScreenHeightLookup,
    config: &'a LayoutConfig,
}

impl<'a> RowCompiler<'a> {
    /// Create a compiler over `tree`.
    pub fn new(
        tree: &'a ElementTree,
        viewport: &'a Viewport,
        lookup: &'a dyn ScreenHeightLookup,
        config: &'a LayoutConfig,
    ) -> Self {
        Self {
            tree,
            viewport,
            lookup,
            config,
        }
    }

    /// Compile the subtree rooted at `node`, which must be a container.
    pub fn compile(&self, node: NodeId) -> Result<Compilation, LayoutError> {
        let mut warnings = Vec::new();
        let rows = self.compile_node(node, &mut warnings)?;
        debug!(
            ?node,
            rows = rows.len(),
            warnings = warnings.len(),
            "compiled element tree"
        );
        Ok(Compilation { rows, warnings })
    }

    fn compile_node(
        &self,
        id: NodeId,
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Vec<RowDescriptor>, LayoutError> {
        let node = self
            .tree
            .get(id)
            .ok_or(LayoutError::UnknownNode { node: id })?;
        let container = match &node.kind {
            NodeKind::Container(container) => container,
            NodeKind::Cell(_) => return Err(LayoutError::NotAContainer { node: id }),
        };

        let children = self.tree.children(id);
        let cells = children
            .iter()
            .filter(|&&child| self.tree.get(child).is_some_and(Node::is_cell))
            .count();

        match (cells, children.len() - cells) {
            (0, 0) => Ok(Vec::new()),
            (_, 0) => self.compile_row(id, node, container, warnings),
            (0, _) => self.compile_group(id, node, container, warnings),
            _ => Err(LayoutError::MixedChildren { node: id }),
        }
    }

    /// A container of cells: one content row inside the container's box.
    fn compile_row(
        &self,
        id: NodeId,
        node: &Node,
        container: &ContainerData,
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Vec<RowDescriptor>, LayoutError> {
        let cells: Vec<(NodeId, &CellData)> = self.tree.cell_children(id).collect();
        if cells.iter().all(|(_, cell)| cell.is_absent()) {
            return Ok(Vec::new());
        }

        let resolved = resolve_height(&node.style, self.viewport, self.lookup)?;
        warnings.extend(resolved.warning);
        let height = resolved.height.unwrap_or(self.config.default_row_height);

        let widths = allocate(&self.tree.cell_widths(id));
        let descriptors = cells
            .iter()
            .map(|&(cell_id, cell)| {
                let width = widths.width_of(cell_id, cell)?;
                self.describe_cell(cell_id, cell, width)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let bg_color = node.style.bg_color.clone();
        let slots = expand(
            &node.style,
            bg_color.as_deref(),
            &container.taps,
            self.config,
        );
        let content =
            RowDescriptor::content(bg_color, height, descriptors, container.taps.clone());
        Ok(wrap(slots, vec![content]))
    }

    /// A container of containers: children's rows in document order, boxed once.
    fn compile_group(
        &self,
        id: NodeId,
        node: &Node,
        container: &ContainerData,
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Vec<RowDescriptor>, LayoutError> {
        let mut content = Vec::new();
        for &child in self.tree.children(id) {
            content.extend(self.compile_node(child, warnings)?);
        }
        if content.is_empty() {
            return Ok(Vec::new());
        }

        let slots = expand(
            &node.style,
            node.style.bg_color.as_deref(),
            &container.taps,
            self.config,
        );
        Ok(wrap(slots, content))
    }

    fn describe_cell(
        &self,
        id: NodeId,
        cell: &CellData,
        width: f64,
    ) -> Result<CellDescriptor, LayoutError> {
        let style = &self
            .tree
            .get(id)
            .ok_or(LayoutError::UnknownNode { node: id })?
            .style;
        let color = if style.faded() {
            let fade = style.fade_with.clone().unwrap_or_default();
            color::fade(style.color.as_deref(), &fade, self.config.fade_amount)
        } else {
            style.color.clone()
        };

        Ok(CellDescriptor {
            kind: cell.kind,
            value: cell.value.clone().unwrap_or_default(),
            align: style.align.unwrap_or_default(),
            width,
            color,
            font: Font {
                face: style.font.clone(),
                size: style.font_size,
            },
        })
    }
}

/// Compile the subtree rooted at `node` in one call.
pub fn compile(
    tree: &ElementTree,
    node: NodeId,
    viewport: &Viewport,
    lookup: &dyn ScreenHeightLookup,
    config: &LayoutConfig,
) -> Result<Compilation, LayoutError> {
    RowCompiler::new(tree, viewport, lookup, config).compile(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Cell, CellKind, Container};
    use crate::layout::height::{DeviceInfo, ScreenTable};
    use crate::layout::row::{Edge, RowRole};
    use crate::style::{Align, DisplayMode, Fade, Height, Style};
    use crate::layout::height::Orientation;
    use crate::tap::{TapAction, TapBindings};
    use pretty_assertions::assert_eq;

    fn viewport() -> Viewport {
        Viewport::new(DeviceInfo::new("phone", 390, 844))
    }

    fn table() -> ScreenTable {
        ScreenTable::new().with_entry("phone", DisplayMode::Normal, Orientation::Portrait, 800)
    }

    fn run(tree: &ElementTree, node: NodeId) -> Result<Compilation, LayoutError> {
        compile(tree, node, &viewport(), &table(), &LayoutConfig::default())
    }

    fn roles(rows: &[RowDescriptor]) -> Vec<RowRole> {
        rows.iter().map(|r| r.role).collect()
    }

    #[test]
    fn single_row() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new().with_style(Style::new().with_bg_color("#222")));
        tree.attach(row, Cell::text("Title")).unwrap();
        tree.attach(row, Cell::text("Detail").with_style(Style::new().with_width(25.0)))
            .unwrap();

        let out = run(&tree, row).unwrap();
        assert_eq!(out.rows.len(), 1);
        assert!(out.warnings.is_empty());

        let content = &out.rows[0];
        assert_eq!(content.role, RowRole::Content);
        assert_eq!(content.bg_color.as_deref(), Some("#222"));
        assert_eq!(content.height, 44);
        let widths: Vec<f64> = content.cells.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![75.0, 25.0]);
        assert_eq!(content.cells[0].value, "Title");
        assert_eq!(content.cells[1].kind, CellKind::Text);
    }

    #[test]
    fn row_with_box_model() {
        let mut tree = ElementTree::new();
        let row = tree.insert(
            Container::new().with_style(
                Style::new()
                    .with_margin_top(20)
                    .with_border_top(1)
                    .with_padding_top(10)
                    .with_padding_bottom(5),
            ),
        );
        tree.attach(row, Cell::text("x")).unwrap();

        let out = run(&tree, row).unwrap();
        assert_eq!(
            roles(&out.rows),
            vec![
                RowRole::Margin(Edge::Top),
                RowRole::Border(Edge::Top),
                RowRole::Padding(Edge::Top),
                RowRole::Content,
                RowRole::Padding(Edge::Bottom),
            ]
        );
    }

    #[test]
    fn group_wraps_children_once() {
        let mut tree = ElementTree::new();
        let group = tree.insert(
            Container::new().with_style(Style::new().with_margin_top(8).with_margin_bottom(8)),
        );
        for label in ["a", "b"] {
            let row = tree
                .attach(group, Container::new().with_style(Style::new().with_padding_top(2)))
                .unwrap();
            tree.attach(row, Cell::text(label)).unwrap();
        }

        let out = run(&tree, group).unwrap();
        assert_eq!(
            roles(&out.rows),
            vec![
                RowRole::Margin(Edge::Top),
                RowRole::Padding(Edge::Top),
                RowRole::Content,
                RowRole::Padding(Edge::Top),
                RowRole::Content,
                RowRole::Margin(Edge::Bottom),
            ]
        );
        assert_eq!(out.rows[2].cells[0].value, "a");
        assert_eq!(out.rows[4].cells[0].value, "b");
    }

    #[test]
    fn mixed_children_fail() {
        let mut tree = ElementTree::new();
        let root = tree.insert(Container::new());
        tree.attach(root, Cell::text("cell")).unwrap();
        let inner = tree.attach(root, Container::new()).unwrap();
        tree.attach(inner, Cell::text("nested")).unwrap();

        assert_eq!(
            run(&tree, root).unwrap_err(),
            LayoutError::MixedChildren { node: root }
        );
    }

    #[test]
    fn mixed_children_deep_in_tree_fail() {
        let mut tree = ElementTree::new();
        let root = tree.insert(Container::new());
        let bad = tree.attach(root, Container::new()).unwrap();
        tree.attach(bad, Container::new()).unwrap();
        tree.attach(bad, Cell::text("oops")).unwrap();

        assert_eq!(
            run(&tree, root).unwrap_err(),
            LayoutError::MixedChildren { node: bad }
        );
    }

    #[test]
    fn compiling_a_cell_fails() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new());
        let cell = tree.attach(row, Cell::text("x")).unwrap();
        assert_eq!(
            run(&tree, cell).unwrap_err(),
            LayoutError::NotAContainer { node: cell }
        );
    }

    #[test]
    fn absent_cells_yield_nothing() {
        let mut tree = ElementTree::new();
        let group = tree.insert(Container::new().with_style(Style::new().with_margin_top(4)));
        let title = tree.attach(group, Container::new()).unwrap();
        tree.attach(title, Cell::text("Title")).unwrap();
        let subtitle = tree
            .attach(group, Container::new().with_style(Style::new().with_padding_top(6)))
            .unwrap();
        tree.attach(subtitle, Cell::optional_text(None::<String>)).unwrap();

        let out = run(&tree, group).unwrap();
        assert_eq!(roles(&out.rows), vec![RowRole::Margin(Edge::Top), RowRole::Content]);
    }

    #[test]
    fn empty_group_has_no_box() {
        let mut tree = ElementTree::new();
        let group = tree.insert(Container::new().with_style(Style::new().with_margin_top(4)));
        let empty = tree.attach(group, Container::new()).unwrap();
        tree.attach(empty, Cell::optional_text(None::<String>)).unwrap();

        assert!(run(&tree, group).unwrap().rows.is_empty());
    }

    #[test]
    fn absent_cell_next_to_present_keeps_slot() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new());
        tree.attach(row, Cell::text("a")).unwrap();
        tree.attach(row, Cell::optional_text(None::<String>)).unwrap();

        let out = run(&tree, row).unwrap();
        let cells = &out.rows[0].cells;
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].value, "");
        assert_eq!(cells[1].width, 50.0);
    }

    #[test]
    fn one_allocation_serves_the_whole_row() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new());
        tree.attach(row, Cell::text("name").with_style(Style::new().with_width(70.0)))
            .unwrap();
        tree.attach(row, Cell::text("a")).unwrap();
        tree.attach(row, Cell::text("b")).unwrap();

        let out = run(&tree, row).unwrap();
        let widths: Vec<f64> = out.rows[0].cells.iter().map(|c| c.width).collect();
        assert_eq!(widths, vec![70.0, 10.0, 10.0]);
    }

    #[test]
    fn percent_height_and_range() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new().with_style(Style::new().with_height(Height::percent(50))));
        tree.attach(row, Cell::text("x")).unwrap();
        assert_eq!(run(&tree, row).unwrap().rows[0].height, 400);

        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new().with_style(Style::new().with_height(Height::percent(101))));
        tree.attach(row, Cell::text("x")).unwrap();
        assert_eq!(
            run(&tree, row).unwrap_err(),
            LayoutError::HeightOutOfRange { percent: 101 }
        );
    }

    #[test]
    fn missing_screen_entry_warns() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new().with_style(Style::new().with_height(Height::percent(10))));
        tree.attach(row, Cell::text("x")).unwrap();

        let vp = Viewport::new(DeviceInfo::new("unknown", 400, 900));
        let out = compile(&tree, row, &vp, &table(), &LayoutConfig::default()).unwrap();
        assert_eq!(out.rows[0].height, 90);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn cell_style_resolution() {
        let mut tree = ElementTree::new();
        let row = tree.insert(
            Container::new().with_style(
                Style::new()
                    .with_color("#000000")
                    .with_font("mono")
                    .with_font_size(12.0),
            ),
        );
        tree.attach(
            row,
            Cell::text("faded").with_style(Style::new().with_fade(Fade::Lighten).with_align(Align::Center)),
        )
        .unwrap();
        tree.attach(row, Cell::image("star")).unwrap();

        let out = run(&tree, row).unwrap();
        let cells = &out.rows[0].cells;
        assert_eq!(cells[0].color.as_deref(), Some("#808080"));
        assert_eq!(cells[0].align, Align::Center);
        assert_eq!(cells[0].font.face.as_deref(), Some("mono"));
        assert_eq!(cells[0].font.size, Some(12.0));
        assert_eq!(cells[1].color.as_deref(), Some("#000000"));
        assert_eq!(cells[1].kind, CellKind::Image);
        assert_eq!(cells[1].align, Align::Left);
    }

    #[test]
    fn taps_reach_content_and_padding() {
        let taps = TapBindings::new().on_tap(TapAction::sync(|| Ok(())));
        let mut tree = ElementTree::new();
        let row = tree.insert(
            Container::new()
                .with_style(Style::new().with_margin_top(3).with_padding_bottom(3))
                .with_taps(taps),
        );
        tree.attach(row, Cell::button("Go")).unwrap();

        let out = run(&tree, row).unwrap();
        let tappable: Vec<bool> = out.rows.iter().map(RowDescriptor::is_tappable).collect();
        assert_eq!(tappable, vec![false, true, true]);
    }

    #[test]
    fn empty_container() {
        let mut tree = ElementTree::new();
        let root = tree.insert(Container::new().with_style(Style::new().with_margin_top(5)));
        assert!(run(&tree, root).unwrap().rows.is_empty());
    }

    #[test]
    fn repeated_passes_are_identical() {
        let mut tree = ElementTree::new();
        let row = tree.insert(Container::new().with_style(Style::new().with_padding_top(1)));
        tree.attach(row, Cell::text("x")).unwrap();

        let first = run(&tree, row).unwrap();
        let second = run(&tree, row).unwrap();
        assert_eq!(roles(&first.rows), roles(&second.rows));
        assert_eq!(first.rows[1].cells, second.rows[1].cells);
    }

    #[test]
    fn config_builders() {
        let config = LayoutConfig::new()
            .with_page_background("#101010")
            .with_default_row_height(60)
            .with_fade_amount(0.25);
        assert_eq!(config.page_background, "#101010");
        assert_eq!(config.default_row_height, 60);
        assert_eq!(config.fade_amount, 0.25);
    }
}
