//! Tap actions and per-row tap bindings.
//!
//! A [`TapAction`] is a zero-argument asynchronous handler. [`TapBindings`]
//! maps tap cardinalities (1, 2, 3) to actions, plus the `dismiss_on_tap`
//! flag the presentation layer honours after a dispatch.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Highest tap cardinality a row can distinguish.
pub const MAX_CARDINALITY: u8 = 3;

/// Failure reported by a tap handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ActionError(pub String);

impl ActionError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// The future returned by invoking a [`TapAction`].
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>> + Send>>;

/// A zero-argument, asynchronous tap handler. Cheap to clone.
#[derive(Clone)]
pub struct TapAction(Arc<dyn Fn() -> ActionFuture + Send + Sync>);

impl TapAction {
    /// Wrap an async closure.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        Self(Arc::new(move || Box::pin(f()) as ActionFuture))
    }

    /// Wrap a synchronous closure. It runs when the handler is first polled.
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn() -> Result<(), ActionError> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self::new(move || {
            let f = Arc::clone(&f);
            async move { f() }
        })
    }

    /// Start the handler.
    pub fn invoke(&self) -> ActionFuture {
        (self.0)()
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TapAction(<fn>)")
    }
}

/// Tap handlers attached to a container, and carried by every row it emits.
#[derive(Clone, Default)]
pub struct TapBindings {
    on_tap: Option<TapAction>,
    on_double_tap: Option<TapAction>,
    on_triple_tap: Option<TapAction>,
    /// Ask the presentation layer to dismiss the table after a dispatch.
    pub dismiss_on_tap: bool,
}

impl TapBindings {
    /// No handlers, no dismissal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-tap handler (builder).
    pub fn on_tap(mut self, action: TapAction) -> Self {
        self.on_tap = Some(action);
        self
    }

    /// Set the double-tap handler (builder).
    pub fn on_double_tap(mut self, action: TapAction) -> Self {
        self.on_double_tap = Some(action);
        self
    }

    /// Set the triple-tap handler (builder).
    pub fn on_triple_tap(mut self, action: TapAction) -> Self {
        self.on_triple_tap = Some(action);
        self
    }

    /// Set whether a dispatch dismisses the table (builder).
    pub fn dismiss_on_tap(mut self, dismiss: bool) -> Self {
        self.dismiss_on_tap = dismiss;
        self
    }

    /// The handler registered for exactly `cardinality` taps.
    pub fn handler(&self, cardinality: u8) -> Option<&TapAction> {
        match cardinality {
            1 => self.on_tap.as_ref(),
            2 => self.on_double_tap.as_ref(),
            3 => self.on_triple_tap.as_ref(),
            _ => None,
        }
    }

    /// Registered cardinalities in ascending order.
    pub fn registered(&self) -> Vec<u8> {
        (1..=MAX_CARDINALITY)
            .filter(|&n| self.handler(n).is_some())
            .collect()
    }

    /// The highest registered cardinality, or `None` with no handlers.
    pub fn max_cardinality(&self) -> Option<u8> {
        (1..=MAX_CARDINALITY)
            .rev()
            .find(|&n| self.handler(n).is_some())
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.max_cardinality().is_none()
    }
}

impl fmt::Debug for TapBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapBindings")
            .field("registered", &self.registered())
            .field("dismiss_on_tap", &self.dismiss_on_tap)
            .finish()
    }
}
