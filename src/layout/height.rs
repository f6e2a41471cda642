//! Height resolution: absolute units pass through, percentages are taken
//! of the usable screen height for the current device, mode and orientation.
//!
//! The screen-height table is injected through [`ScreenHeightLookup`]. A
//! device missing from the table is not an error: the raw device screen
//! height is used instead and a [`LayoutWarning`] is returned to the caller.

use std::collections::HashMap;
use std::fmt;

use crate::layout::LayoutError;
use crate::style::{DisplayMode, Height, Style};

/// Device orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Identity and raw screen size of the device being laid out for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Key into the screen-height table, e.g. `"iphone-13"`.
    pub id: String,
    /// Raw screen size in portrait, `(width, height)` in layout units.
    pub screen_size: (u32, u32),
}

impl DeviceInfo {
    /// Create device info from an id and its portrait screen size.
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            screen_size: (width, height),
        }
    }

    /// Raw screen height for the given orientation.
    pub fn raw_height(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Portrait => self.screen_size.1,
            Orientation::Landscape => self.screen_size.0,
        }
    }
}

/// The device and orientation a tree is compiled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub device: DeviceInfo,
    pub orientation: Orientation,
}

impl Viewport {
    /// A portrait viewport for `device`.
    pub fn new(device: DeviceInfo) -> Self {
        Self {
            device,
            orientation: Orientation::Portrait,
        }
    }

    /// Set the orientation (builder).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Injected table of usable screen heights.
pub trait ScreenHeightLookup {
    /// Maximum usable height for the device, or `None` if it is unknown.
    fn max_height(&self, device: &str, mode: DisplayMode, orientation: Orientation) -> Option<u32>;
}

impl<F> ScreenHeightLookup for F
where
    F: Fn(&str, DisplayMode, Orientation) -> Option<u32>,
{
    fn max_height(&self, device: &str, mode: DisplayMode, orientation: Orientation) -> Option<u32> {
        self(device, mode, orientation)
    }
}

/// A map-backed [`ScreenHeightLookup`].
#[derive(Debug, Clone, Default)]
pub struct ScreenTable {
    entries: HashMap<(String, DisplayMode, Orientation), u32>,
}

impl ScreenTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry (builder).
    pub fn with_entry(
        mut self,
        device: impl Into<String>,
        mode: DisplayMode,
        orientation: Orientation,
        height: u32,
    ) -> Self {
        self.insert(device, mode, orientation, height);
        self
    }

    /// Add or replace an entry.
    pub fn insert(
        &mut self,
        device: impl Into<String>,
        mode: DisplayMode,
        orientation: Orientation,
        height: u32,
    ) {
        self.entries.insert((device.into(), mode, orientation), height);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ScreenHeightLookup for ScreenTable {
    fn max_height(&self, device: &str, mode: DisplayMode, orientation: Orientation) -> Option<u32> {
        self.entries
            .get(&(device.to_owned(), mode, orientation))
            .copied()
    }
}

/// A recoverable problem noticed during compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutWarning {
    /// No screen-height entry; the raw device height was used instead.
    MissingScreenHeight {
        device: String,
        mode: DisplayMode,
        orientation: Orientation,
        fallback: u32,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingScreenHeight {
                device,
                mode,
                orientation,
                fallback,
            } => write!(
                f,
                "no screen height for {device} ({mode:?}, {orientation:?}); using raw height {fallback}"
            ),
        }
    }
}

/// Outcome of [`resolve_height`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeight {
    /// `None` when the style declares no height.
    pub height: Option<u32>,
    pub warning: Option<LayoutWarning>,
}

/// Resolve a style's height against the viewport.
///
/// Percentages outside `[1, 100]` fail with [`LayoutError::HeightOutOfRange`].
pub fn resolve_height(
    style: &Style,
    viewport: &Viewport,
    lookup: &dyn ScreenHeightLookup,
) -> Result<ResolvedHeight, LayoutError> {
    let percent = match style.height {
        None => {
            return Ok(ResolvedHeight {
                height: None,
                warning: None,
            })
        }
        Some(Height::Units(units)) => {
            return Ok(ResolvedHeight {
                height: Some(units),
                warning: None,
            })
        }
        Some(Height::Percent(p)) => p,
    };

    if !(1..=100).contains(&percent) {
        return Err(LayoutError::HeightOutOfRange { percent });
    }

    let mode = style.display_mode();
    let (max, warning) = match lookup.max_height(&viewport.device.id, mode, viewport.orientation) {
        Some(max) => (max, None),
        None => {
            let fallback = viewport.device.raw_height(viewport.orientation);
            tracing::warn!(
                device = %viewport.device.id,
                ?mode,
                orientation = ?viewport.orientation,
                fallback,
                "missing screen height entry, using raw device height"
            );
            let warning = LayoutWarning::MissingScreenHeight {
                device: viewport.device.id.clone(),
                mode,
                orientation: viewport.orientation,
                fallback,
            };
            (fallback, Some(warning))
        }
    };

    // Integer math floors.
    let height = u64::from(percent) * u64::from(max) / 100;
    Ok(ResolvedHeight {
        height: Some(u32::try_from(height).unwrap_or(u32::MAX)),
        warning,
    })
}
