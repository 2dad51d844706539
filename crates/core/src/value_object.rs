//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two amounts of
/// `50.00` are the same amount, whereas two products with the same name are not
/// necessarily the same product.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
