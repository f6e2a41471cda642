//! Multi-tap disambiguation: actions, per-row zones and the session that
//! owns them.

pub mod action;
pub mod session;
pub mod zone;

pub use action::{ActionError, ActionFuture, TapAction, TapBindings, MAX_CARDINALITY};
pub use session::TapSession;
pub use zone::{LogNotifier, Notifier, TapConfig, TapError, TapOutcome, TapZone};
