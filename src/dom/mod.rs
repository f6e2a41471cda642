//! Element tree: slotmap-backed arena of cells and containers.

pub mod node;
pub mod tree;

pub use node::{Cell, CellData, CellKind, Container, ContainerData, Element, Node, NodeId, NodeKind};
pub use tree::ElementTree;
