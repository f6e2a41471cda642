//! Tap disambiguation for a single row.
//!
//! A [`TapZone`] counts taps and holds at most one pending debounce timer.
//! Each tap cancels the pending timer and schedules a new one. Reaching the
//! highest registered cardinality dispatches at once; otherwise the count
//! observed when the timer fires picks the handler.
//!
//! The counter is reset before any handler runs, so a slow or failing
//! handler never affects the classification of later taps.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, trace, warn};

use crate::tap::action::{ActionError, TapBindings};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Debounce settings shared by every zone of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapConfig {
    /// How long to wait for another tap before resolving the count.
    pub interval: Duration,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(300),
        }
    }
}

impl TapConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce interval (builder).
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

// ---------------------------------------------------------------------------
// Errors and notifications
// ---------------------------------------------------------------------------

/// Non-fatal problems caught at the zone boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TapError {
    #[error(
        "no handler for {observed} tap(s); highest is {max_cardinality}, registered {registered:?}"
    )]
    LookupFailure {
        observed: u8,
        max_cardinality: u8,
        registered: Vec<u8>,
    },
    #[error("handler for {cardinality} tap(s) failed: {source}")]
    Handler {
        cardinality: u8,
        source: ActionError,
    },
}

/// Receives the non-fatal outcomes of tap handling.
pub trait Notifier: Send + Sync {
    /// Show a non-blocking notification for `error`.
    fn notify(&self, error: &TapError);

    /// A row with `dismiss_on_tap` has dispatched its handler.
    fn dismiss_requested(&self) {}
}

/// A [`Notifier`] that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, error: &TapError) {
        warn!(%error, "tap notification");
    }
}

/// What a single call to [`TapZone::tap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The row has no handlers.
    Ignored,
    /// Waiting for the debounce timer; `count` taps so far.
    Pending { count: u8 },
    /// The handler for `cardinality` taps was started immediately.
    Dispatched { cardinality: u8 },
}

// ---------------------------------------------------------------------------
// TapZone
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ZoneState {
    tap_count: u8,
    /// Bumped on every tap; a timer only fires for its own generation.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

struct ZoneInner {
    bindings: TapBindings,
    interval: Duration,
    notifier: Arc<dyn Notifier>,
    runtime: Handle,
    state: Mutex<ZoneState>,
}

/// Per-row tap counter and debounce timer. Cheap to clone.
#[derive(Clone)]
pub struct TapZone {
    inner: Arc<ZoneInner>,
}

impl TapZone {
    /// Create a zone for `bindings`; timers and handlers run on `runtime`.
    pub fn new(
        bindings: TapBindings,
        config: TapConfig,
        notifier: Arc<dyn Notifier>,
        runtime: Handle,
    ) -> Self {
        Self {
            inner: Arc::new(ZoneInner {
                bindings,
                interval: config.interval,
                notifier,
                runtime,
                state: Mutex::new(ZoneState::default()),
            }),
        }
    }

    /// Register one tap.
    pub fn tap(&self) -> TapOutcome {
        let Some(max) = self.inner.bindings.max_cardinality() else {
            trace!("tap on row without handlers");
            return TapOutcome::Ignored;
        };

        let mut state = self.inner.lock();
        state.tap_count += 1;
        state.generation += 1;
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        let count = state.tap_count;
        trace!(count, max, "tap");

        if count >= max {
            state.tap_count = 0;
            drop(state);
            self.inner.dispatch(count);
            return TapOutcome::Dispatched { cardinality: count };
        }

        let generation = state.generation;
        let interval = self.inner.interval;
        let zone = Arc::downgrade(&self.inner);
        state.pending = Some(self.inner.runtime.spawn(async move {
            tokio::time::sleep(interval).await;
            ZoneInner::expire(&zone, generation);
        }));
        TapOutcome::Pending { count }
    }

    /// Taps counted since the last dispatch.
    pub fn tap_count(&self) -> u8 {
        self.inner.lock().tap_count
    }

    /// Whether a debounce timer is outstanding.
    pub fn has_pending_timer(&self) -> bool {
        self.inner.lock().pending.is_some()
    }

    /// The bindings this zone dispatches to.
    pub fn bindings(&self) -> &TapBindings {
        &self.inner.bindings
    }
}

impl fmt::Debug for TapZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("TapZone")
            .field("bindings", &self.inner.bindings)
            .field("tap_count", &state.tap_count)
            .field("pending", &state.pending.is_some())
            .finish()
    }
}

impl ZoneInner {
    fn lock(&self) -> MutexGuard<'_, ZoneState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Debounce timer callback.
    fn expire(zone: &Weak<ZoneInner>, generation: u64) {
        let Some(inner) = zone.upgrade() else {
            return;
        };
        let observed = {
            let mut state = inner.lock();
            if state.generation != generation {
                return;
            }
            state.pending = None;
            std::mem::take(&mut state.tap_count)
        };
        if observed > 0 {
            inner.dispatch(observed);
        }
    }

    /// Run the handler for `cardinality`. The counter is already reset.
    fn dispatch(&self, cardinality: u8) {
        let Some(action) = self.bindings.handler(cardinality) else {
            let failure = TapError::LookupFailure {
                observed: cardinality,
                max_cardinality: self.bindings.max_cardinality().unwrap_or(0),
                registered: self.bindings.registered(),
            };
            warn!(%failure, "tap lookup failed");
            self.notifier.notify(&failure);
            return;
        };

        debug!(cardinality, "dispatching tap handler");
        let action = action.clone();
        let handler = self.runtime.spawn(async move { action.invoke().await });
        let notifier = Arc::clone(&self.notifier);
        self.runtime.spawn(async move {
            let source = match handler.await {
                Ok(Ok(())) => return,
                Ok(Err(source)) => source,
                Err(join) if join.is_panic() => ActionError::new("handler panicked"),
                Err(_) => return,
            };
            let failure = TapError::Handler {
                cardinality,
                source,
            };
            error!(%failure, "tap handler failed");
            notifier.notify(&failure);
        });

        if self.bindings.dismiss_on_tap {
            self.notifier.dismiss_requested();
        }
    }
}

impl Drop for ZoneInner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
    }
}
