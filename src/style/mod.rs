//! Style context: typed style record, cascade, and declaration parsing.

pub mod color;
pub mod model;
pub mod parser;
pub mod properties;
pub mod scalar;
pub mod styles;
pub mod tokenizer;

pub use properties::{parse_style, PropertyError, StyleError};
pub use scalar::{Border, Height};
pub use styles::{Align, DisplayMode, Fade, Style};
