//! Domain event contracts and publishing mechanics.
//!
//! Events are produced by domain services as plain data; handing them to a
//! transport is the job of a [`DomainEventPublisher`] implementation.

pub mod event;
pub mod in_memory;
pub mod publisher;

pub use event::Event;
pub use in_memory::{InMemoryEventPublisher, InMemoryPublishError};
pub use publisher::{DomainEventPublisher, Subscription};
