//! The command abstraction shared by every handler.

use uuid::Uuid;

/// A request to change state, handled by one command handler.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable dotted name, e.g. `catalog.add_event`. Recorded on the
    /// handler's tracing span.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried through every log line of the handling.
    fn correlation_id(&self) -> Uuid;
}
