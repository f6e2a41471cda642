//! Declaration AST: what the parser produces before properties are typed.

/// A single parsed value on the right-hand side of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number, e.g. `10` or `12.5`.
    Number(f64),
    /// A percent string, already validated to 1-3 digits, e.g. `50%`.
    Percent(u16),
    /// A hex color including the leading `#`.
    Color(String),
    /// An identifier: named color, keyword, or boolean.
    Ident(String),
    /// A quoted string with the quotes removed.
    Str(String),
    /// A bracketed list, e.g. `[1, #f00]`.
    List(Vec<Value>),
}

/// One `name: value...` entry of a declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub values: Vec<Value>,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            property: property.into(),
            values,
        }
    }
}
