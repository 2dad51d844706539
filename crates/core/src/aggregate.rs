//! Aggregate root trait.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// The single entity through which every rule-preserving mutation of the
/// entities it owns must go. Aggregates perform no IO.
pub trait AggregateRoot: Entity {}
