//! Commands handled by the placement contexts.

use uuid::Uuid;

/// A request to change placement state, handled by one `handle_*` function.
///
/// Handlers record `command_type` and `correlation_id` on their tracing span,
/// so every event logged while the command runs can be tied back to it.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted `context.action` name, e.g. `withdrawal.cascade`.
    fn command_type(&self) -> &'static str;

    /// Id shared by every log record emitted for this command.
    fn correlation_id(&self) -> Uuid;
}
