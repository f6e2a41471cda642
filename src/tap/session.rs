//! Caller-owned registry of tap zones.
//!
//! Zones are keyed by row index and created on first tap. Dropping or
//! clearing the session drops every zone, which cancels their timers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::runtime::{Handle, TryCurrentError};

use crate::tap::action::TapBindings;
use crate::tap::zone::{Notifier, TapConfig, TapOutcome, TapZone};

/// Tap state for one rendered table.
pub struct TapSession {
    config: TapConfig,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
    zones: HashMap<usize, TapZone>,
}

impl TapSession {
    /// Create a session whose timers and handlers run on `runtime`.
    pub fn new(notifier: Arc<dyn Notifier>, runtime: Handle) -> Self {
        Self {
            config: TapConfig::default(),
            notifier,
            runtime,
            zones: HashMap::new(),
        }
    }

    /// Create a session on the runtime of the calling task.
    pub fn current(notifier: Arc<dyn Notifier>) -> Result<Self, TryCurrentError> {
        Ok(Self::new(notifier, Handle::try_current()?))
    }

    /// Set the debounce config for zones created from now on (builder).
    pub fn with_config(mut self, config: TapConfig) -> Self {
        self.config = config;
        self
    }

    /// Route a tap to the zone for `key`, creating it with `bindings` if needed.
    ///
    /// Rows without handlers never get a zone.
    pub fn tap(&mut self, key: usize, bindings: &TapBindings) -> TapOutcome {
        if bindings.is_empty() {
            return TapOutcome::Ignored;
        }
        let zone = self.zones.entry(key).or_insert_with(|| {
            TapZone::new(
                bindings.clone(),
                self.config,
                Arc::clone(&self.notifier),
                self.runtime.clone(),
            )
        });
        zone.tap()
    }

    /// The zone for `key`, if it has been tapped.
    pub fn zone(&self, key: usize) -> Option<&TapZone> {
        self.zones.get(&key)
    }

    /// Number of live zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zone has been created.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Drop every zone and its pending timer.
    pub fn clear(&mut self) {
        self.zones.clear();
    }
}

impl fmt::Debug for TapSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapSession")
            .field("config", &self.config)
            .field("zones", &self.zones.len())
            .finish()
    }
}
