//! `foodorder-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! typed identifiers, money, the domain error, and the injected clock / id
//! sources that keep domain services deterministic under test.

pub mod aggregate;
pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    CustomerId, IdGenerator, OrderId, ProductId, RestaurantId, SequenceIdGenerator, TrackingId,
    UuidV7Generator,
};
pub use money::Money;
pub use value_object::ValueObject;
