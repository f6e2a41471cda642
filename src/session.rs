//! Table session: the compiled rows of one table and their tap state.
//!
//! [`TableSession`] is the glue a presentation layer drives. It compiles an
//! element tree into rows, keeps them, and routes row taps into a
//! [`TapSession`]. Every render discards the previous tap zones.

use crate::dom::{ElementTree, NodeId};
use crate::layout::{
    compile, Compilation, LayoutConfig, LayoutError, LayoutWarning, RowDescriptor,
    ScreenHeightLookup, Viewport,
};
use crate::tap::{TapOutcome, TapSession};

// ---------------------------------------------------------------------------
// TableSession
// ---------------------------------------------------------------------------

/// Compiled rows plus the tap zones that belong to them.
#[derive(Debug)]
pub struct TableSession {
    config: LayoutConfig,
    taps: TapSession,
    rows: Vec<RowDescriptor>,
}

impl TableSession {
    /// Create an empty session around `taps`.
    pub fn new(taps: TapSession) -> Self {
        Self {
            config: LayoutConfig::default(),
            taps,
            rows: Vec::new(),
        }
    }

    /// Set the layout config (builder).
    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// The layout config used by [`render`](Self::render).
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compile `root` and replace the current rows.
    ///
    /// On error the previous rows and zones are left untouched.
    pub fn render(
        &mut self,
        tree: &ElementTree,
        root: NodeId,
        viewport: &Viewport,
        lookup: &dyn ScreenHeightLookup,
    ) -> Result<Vec<LayoutWarning>, LayoutError> {
        let Compilation { rows, warnings } = compile(tree, root, viewport, lookup, &self.config)?;
        self.taps.clear();
        self.rows = rows;
        Ok(warnings)
    }

    /// Rows from the last successful render.
    pub fn rows(&self) -> &[RowDescriptor] {
        &self.rows
    }

    /// Tap the row at `index`. Out-of-range indices are ignored.
    pub fn tap(&mut self, index: usize) -> TapOutcome {
        match self.rows.get(index) {
            Some(row) => self.taps.tap(index, &row.taps),
            None => TapOutcome::Ignored,
        }
    }

    /// The underlying tap session.
    pub fn taps(&self) -> &TapSession {
        &self.taps
    }
}
