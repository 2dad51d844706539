use chrono::{DateTime, Utc};

/// A fact emitted by a domain operation.
///
/// Implementors are plain data: cloning one is cheap enough to fan it out to
/// several consumers, and nothing about it changes after construction.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Dotted name consumers route on, e.g. `order.paid`.
    fn event_type(&self) -> &'static str;

    /// Payload schema version; bumped on incompatible changes.
    fn version(&self) -> u32 {
        1
    }

    /// UTC instant the domain stamped on the event.
    fn occurred_at(&self) -> DateTime<Utc>;
}
