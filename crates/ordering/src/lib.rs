//! Order lifecycle domain module.
//!
//! Business rules for food orders, implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage): the `Order` aggregate and its state
//! machine, catalog confirmation against a `Restaurant` snapshot, and the
//! `OrderDomainService` that turns transitions into domain events.

pub mod address;
pub mod customer;
pub mod event;
pub mod order;
pub mod order_item;
pub mod product;
pub mod restaurant;
pub mod service;

pub use address::StreetAddress;
pub use customer::Customer;
pub use event::{OrderCancelledEvent, OrderCreatedEvent, OrderEvent, OrderPaidEvent};
pub use order::{
    FAILURE_MESSAGE_DELIMITER, FAILURE_MESSAGE_REPLACEMENT, Order, OrderSnapshot, OrderStatus,
};
pub use order_item::{OrderItem, OrderItemId};
pub use product::Product;
pub use restaurant::Restaurant;
pub use service::OrderDomainService;
