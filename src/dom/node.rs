//! Node types: NodeId, element specs, and the stored node data.

use slotmap::new_key_type;

use crate::style::Style;
use crate::tap::TapBindings;

new_key_type! {
    /// Unique identifier for an element in the tree. Copy, lightweight (u64).
    pub struct NodeId;
}

/// What a cell displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Image,
    Button,
}

/// Leaf element spec: one cell of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub kind: CellKind,
    /// `None` marks an absent cell (e.g. a missing subtitle).
    pub value: Option<String>,
    pub style: Style,
}

impl Cell {
    /// A text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::with_kind(CellKind::Text, Some(value.into()))
    }

    /// An image cell; `value` names the image.
    pub fn image(value: impl Into<String>) -> Self {
        Self::with_kind(CellKind::Image, Some(value.into()))
    }

    /// A button cell; `value` is its label.
    pub fn button(value: impl Into<String>) -> Self {
        Self::with_kind(CellKind::Button, Some(value.into()))
    }

    /// A text cell that may have nothing to show.
    pub fn optional_text(value: Option<impl Into<String>>) -> Self {
        Self::with_kind(CellKind::Text, value.map(Into::into))
    }

    fn with_kind(kind: CellKind, value: Option<String>) -> Self {
        Self {
            kind,
            value,
            style: Style::new(),
        }
    }

    /// Set the cell's own style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Branch element spec: a row (when its children are cells) or a group of
/// rows (when its children are containers).
#[derive(Debug, Clone, Default)]
pub struct Container {
    pub style: Style,
    pub taps: TapBindings,
}

impl Container {
    /// A container with no style and no tap handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container's own style (builder).
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the container's tap bindings (builder).
    pub fn with_taps(mut self, taps: TapBindings) -> Self {
        self.taps = taps;
        self
    }
}

/// Any element spec that can be inserted into the tree.
#[derive(Debug, Clone)]
pub enum Element {
    Cell(Cell),
    Container(Container),
}

impl Element {
    /// The element's own (pre-cascade) style.
    pub fn style(&self) -> &Style {
        match self {
            Self::Cell(cell) => &cell.style,
            Self::Container(container) => &container.style,
        }
    }
}

impl From<Cell> for Element {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl From<Container> for Element {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

/// Stored data for a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    pub kind: CellKind,
    pub value: Option<String>,
    /// Position among cell siblings; `None` until attached to a container.
    pub sibling_index: Option<usize>,
}

impl CellData {
    /// Whether the cell has nothing to show.
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

/// Stored data for a branch.
#[derive(Debug, Clone, Default)]
pub struct ContainerData {
    pub taps: TapBindings,
}

/// Kind-specific node payload.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Cell(CellData),
    Container(ContainerData),
}

/// Data stored for a single node of the tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Resolved style, cascaded once at attach time.
    pub style: Style,
    pub kind: NodeKind,
}

impl Node {
    /// Whether this node is a leaf cell.
    pub fn is_cell(&self) -> bool {
        matches!(self.kind, NodeKind::Cell(_))
    }

    /// Whether this node is a container.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container(_))
    }

    /// Cell payload, if this is a cell.
    pub fn as_cell(&self) -> Option<&CellData> {
        match &self.kind {
            NodeKind::Cell(cell) => Some(cell),
            NodeKind::Container(_) => None,
        }
    }

    /// Container payload, if this is a container.
    pub fn as_container(&self) -> Option<&ContainerData> {
        match &self.kind {
            NodeKind::Container(container) => Some(container),
            NodeKind::Cell(_) => None,
        }
    }
}
