//! Configuration errors raised while building or compiling a tree.

use crate::dom::NodeId;

/// A programmer error in the element tree or its styles.
///
/// These are never caught inside the compiler; they propagate to whoever
/// asked for the layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("container {node:?} mixes cells and containers")]
    MixedChildren { node: NodeId },
    #[error("cell {node:?} has no parent or sibling index; attach it to a container first")]
    Unattached { node: NodeId },
    #[error("height percentage must be between 1 and 100, got {percent}%")]
    HeightOutOfRange { percent: u16 },
    #[error("node {node:?} is not a container")]
    NotAContainer { node: NodeId },
    #[error("node {node:?} does not exist in this tree")]
    UnknownNode { node: NodeId },
}
