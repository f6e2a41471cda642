//! Layout compiler: width allocation, height resolution, box-model
//! expansion and row compilation.

pub mod box_model;
pub mod compiler;
pub mod error;
pub mod height;
pub mod row;
pub mod width;

pub use box_model::{expand, wrap, BoxSlot};
pub use compiler::{compile, Compilation, LayoutConfig, RowCompiler};
pub use error::LayoutError;
pub use height::{
    resolve_height, DeviceInfo, LayoutWarning, Orientation, ResolvedHeight, ScreenHeightLookup,
    ScreenTable, Viewport,
};
pub use row::{CellDescriptor, Edge, Font, RowDescriptor, RowRole};
pub use width::{allocate, resolve_cell_width, WidthMap, FALLBACK_WIDTH};
