//! In-memory publisher for tests/dev.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::publisher::{DomainEventPublisher, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryPublishError {
    /// Publish failed due to internal lock poisoning.
    #[error("in-memory publisher lock poisoned")]
    Poisoned,
}

/// In-memory publisher.
///
/// - No IO / no async
/// - Keeps a log of everything published (inspectable via [`published`](Self::published))
/// - Best-effort fan-out to live subscribers
#[derive(Debug)]
pub struct InMemoryEventPublisher<M> {
    published: Mutex<Vec<M>>,
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventPublisher<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: Clone> InMemoryEventPublisher<M> {
    /// Everything published so far, oldest first.
    pub fn published(&self) -> Vec<M> {
        match self.published.lock() {
            Ok(log) => log.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

impl<M> Default for InMemoryEventPublisher<M> {
    fn default() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> DomainEventPublisher<M> for InMemoryEventPublisher<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryPublishError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryPublishError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        self.published
            .lock()
            .map_err(|_| InMemoryPublishError::Poisoned)?
            .push(message);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_records_and_fans_out() {
        let publisher = InMemoryEventPublisher::new();
        let first = publisher.subscribe();
        let second = publisher.subscribe();

        publisher.publish("order.created").unwrap();
        publisher.publish("order.paid").unwrap();

        assert_eq!(publisher.published(), vec!["order.created", "order.paid"]);
        assert_eq!(first.drain(), vec!["order.created", "order.paid"]);
        assert_eq!(second.poll(), Some("order.created"));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let publisher = InMemoryEventPublisher::new();
        drop(publisher.subscribe());
        let live = publisher.subscribe();

        publisher.publish(1u32).unwrap();

        assert_eq!(publisher.subscribers.lock().unwrap().len(), 1);
        assert_eq!(live.wait(std::time::Duration::from_millis(10)), Some(1));
    }

    #[test]
    fn late_subscribers_only_see_later_messages() {
        let publisher = InMemoryEventPublisher::new();
        publisher.publish(1u32).unwrap();
        let late = publisher.subscribe();
        publisher.publish(2u32).unwrap();

        assert_eq!(late.drain(), vec![2]);
        assert_eq!(publisher.published(), vec![1, 2]);
    }
}
