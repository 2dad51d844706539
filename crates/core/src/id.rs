//! Strongly-typed identifiers used across the domain.
//!
//! Each entity kind gets its own uuid newtype so an `OrderId` can never be passed
//! where a `ProductId` is expected. Fresh values come from an injected
//! [`IdGenerator`] rather than an ambient call.

use core::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// Identifier of an order aggregate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

/// Customer-facing tracking identifier, distinct from the internal order id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(Uuid);

/// Identifier of a customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

/// Identifier of a restaurant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(Uuid);

/// Identifier of a product (shared between order intake and restaurant catalogs).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Draw a fresh identifier from the given generator.
            pub fn generate(ids: &(impl IdGenerator + ?Sized)) -> Self {
                Self(ids.next_uuid())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id($name, e))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(OrderId, "OrderId");
impl_uuid_newtype!(TrackingId, "TrackingId");
impl_uuid_newtype!(CustomerId, "CustomerId");
impl_uuid_newtype!(RestaurantId, "RestaurantId");
impl_uuid_newtype!(ProductId, "ProductId");

/// Source of fresh unique values for identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_uuid(&self) -> Uuid;
}

impl<G> IdGenerator for Arc<G>
where
    G: IdGenerator + ?Sized,
{
    fn next_uuid(&self) -> Uuid {
        (**self).next_uuid()
    }
}

impl<G> IdGenerator for &G
where
    G: IdGenerator + ?Sized,
{
    fn next_uuid(&self) -> Uuid {
        (**self).next_uuid()
    }
}

/// Production generator: UUIDv7 (time-ordered).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_uuid(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Deterministic generator: yields `start`, `start + 1`, ... as 128-bit values.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    start: u128,
    next: AtomicU64,
}

impl SequenceIdGenerator {
    /// Sequence starting at `Uuid::from_u128(1)`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u128) -> Self {
        Self {
            start,
            next: AtomicU64::new(0),
        }
    }

    /// The `n`-th (0-based) value this generator hands out.
    pub fn nth(&self, n: u64) -> Uuid {
        Uuid::from_u128(self.start.wrapping_add(u128::from(n)))
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_uuid(&self) -> Uuid {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        self.nth(n)
    }
}
