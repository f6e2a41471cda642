//! Element tree: insert, attach with style cascade, child lookup.

use slotmap::{SecondaryMap, SlotMap};

use super::node::{CellData, ContainerData, Element, Node, NodeId, NodeKind};
use crate::layout::LayoutError;
use crate::style::Style;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// The element tree, backed by a slotmap arena.
///
/// Parent links live in a secondary map and are written exactly once, when a
/// node is attached. There is no reparenting: a node's cascaded style depends
/// on its parent at attach time, so moving it would leave the style stale.
#[derive(Debug)]
pub struct ElementTree {
    nodes: SlotMap<NodeId, Node>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
}

impl ElementTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
        }
    }

    /// Insert a parentless element. Its own style is stored as-is.
    ///
    /// A cell inserted this way has no sibling index and cannot be rendered.
    pub fn insert(&mut self, element: impl Into<Element>) -> NodeId {
        let element = element.into();
        let style = element.style().clone();
        let id = self.nodes.insert(Self::make_node(element, style, None));
        self.children.insert(id, Vec::new());
        id
    }

    /// Attach an element as the last child of `parent`.
    ///
    /// The parent's resolved style is cascaded under the element's own style
    /// and stored on the new node. Cells receive their index among the
    /// parent's cell children. Mixing cells and containers under one parent
    /// is accepted here and rejected when the tree is compiled.
    pub fn attach(
        &mut self,
        parent: NodeId,
        element: impl Into<Element>,
    ) -> Result<NodeId, LayoutError> {
        let parent_node = self
            .nodes
            .get(parent)
            .ok_or(LayoutError::UnknownNode { node: parent })?;
        if !parent_node.is_container() {
            return Err(LayoutError::NotAContainer { node: parent });
        }

        let element = element.into();
        let style = Style::cascade(&parent_node.style, element.style());
        let sibling_index = match element {
            Element::Cell(_) => Some(self.cell_children(parent).count()),
            Element::Container(_) => None,
        };

        let id = self
            .nodes
            .insert(Self::make_node(element, style, sibling_index));
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
        }
        Ok(id)
    }

    fn make_node(element: Element, style: Style, sibling_index: Option<usize>) -> Node {
        let kind = match element {
            Element::Cell(cell) => NodeKind::Cell(CellData {
                kind: cell.kind,
                value: cell.value,
                sibling_index,
            }),
            Element::Container(container) => NodeKind::Container(ContainerData {
                taps: container.taps,
            }),
        };
        Node { style, kind }
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Get the children of a node. Returns an empty slice if the node has no
    /// children or does not exist.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Cell children of `id`, in sibling order.
    pub fn cell_children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &CellData)> + '_ {
        self.children(id)
            .iter()
            .filter_map(|&child| self.nodes.get(child)?.as_cell().map(|cell| (child, cell)))
    }

    /// Declared widths of the cell children of `id`, indexed by sibling index.
    pub fn cell_widths(&self, id: NodeId) -> Vec<Option<f64>> {
        self.cell_children(id)
            .map(|(child, _)| self.nodes.get(child).and_then(|n| n.style.width))
            .collect()
    }

    /// Immutable access to a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}
