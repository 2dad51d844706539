//! Event publishing abstraction (mechanics only).
//!
//! The domain never publishes anything itself: application services receive an
//! event from a domain operation, persist the aggregate, and then hand the event
//! to a publisher. What sits behind the publisher (a broker, an outbox table, an
//! in-process channel) is an infrastructure decision.
//!
//! Delivery is **at-least-once** from the consumer's point of view: a retried
//! command may publish the same fact twice, so consumers must be idempotent.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Receiving end handed out by a publisher.
///
/// Sees every message published after it was taken, in publication order.
#[derive(Debug)]
pub struct Subscription<M>(Receiver<M>);

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self(receiver)
    }

    /// Next buffered message, without waiting.
    pub fn poll(&self) -> Option<M> {
        self.0.try_recv().ok()
    }

    /// Wait up to `timeout`; `None` if nothing arrived or the publisher is gone.
    pub fn wait(&self, timeout: Duration) -> Option<M> {
        self.0.recv_timeout(timeout).ok()
    }

    /// Everything buffered so far.
    pub fn drain(&self) -> Vec<M> {
        self.0.try_iter().collect()
    }
}

/// Outbound port for domain events.
///
/// `publish()` can fail (full buffer, unreachable broker); the failure is
/// returned to the caller, which decides whether to retry.
pub trait DomainEventPublisher<M>: Send + Sync {
    type Error: core::fmt::Debug + core::fmt::Display + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;
}

impl<M, P> DomainEventPublisher<M> for Arc<P>
where
    P: DomainEventPublisher<M> + ?Sized,
{
    type Error = P::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }
}
