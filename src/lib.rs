//! # tablekit
//!
//! A declarative row layout compiler and multi-tap gesture handling for
//! table-style screens.
//!
//! Callers build a tree of styled containers and cells. Styles cascade down
//! the tree as it is built. The compiler turns the tree into a flat, ordered
//! list of rows with resolved widths, heights and colors, and renders
//! margins, borders and padding as rows of their own. A presentation layer
//! displays the rows and feeds taps back into per-row zones that tell
//! single, double and triple taps apart.
//!
//! ## Core Systems
//!
//! - **[`style`]**: Style cascade, scalar types, declaration-string parser
//! - **[`dom`]**: Slotmap-backed element arena of containers and cells
//! - **[`layout`]**: Width allocation, height resolution, box model, row compiler
//! - **[`tap`]**: Tap actions, debounce zones, lookup failures and notifications
//! - **[`session`]**: Compiled rows tied to their tap zones
//! - **[`testing`]**: Plain-text row dumps for snapshot assertions

// Foundation
pub mod style;

// Core systems
pub mod dom;
pub mod layout;
pub mod tap;

// Glue
pub mod session;

pub mod testing;

pub use dom::{Cell, Container, ElementTree, NodeId};
pub use layout::{LayoutConfig, LayoutError, RowDescriptor, Viewport};
pub use session::TableSession;
pub use style::{parse_style, Style};
pub use tap::{TapAction, TapBindings, TapSession};
