//! Outbound ports implemented by the persistence collaborator.
//!
//! All operations are synchronous lookups/persists; no storage contract beyond
//! "what you saved is what you find" is assumed.

use thiserror::Error;

use foodorder_core::{CustomerId, OrderId, ProductId, RestaurantId, TrackingId};
use foodorder_ordering::{Customer, Order, Restaurant};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Internal lock poisoning (in-process stores).
    #[error("repository lock poisoned")]
    Poisoned,

    /// A stored record could not be turned into a domain object (or back).
    #[error("could not map stored record: {0}")]
    Mapping(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Which restaurant, and which of its products, an order needs confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantQuery {
    pub restaurant_id: RestaurantId,
    pub product_ids: Vec<ProductId>,
}

pub trait OrderRepository: Send + Sync {
    /// Persist the order and return it as stored.
    fn save(&self, order: &Order) -> RepositoryResult<Order>;

    fn find_by_id(&self, order_id: OrderId) -> RepositoryResult<Option<Order>>;

    fn find_by_tracking_id(&self, tracking_id: TrackingId) -> RepositoryResult<Option<Order>>;
}

pub trait CustomerRepository: Send + Sync {
    fn find_customer(&self, customer_id: CustomerId) -> RepositoryResult<Option<Customer>>;
}

pub trait RestaurantRepository: Send + Sync {
    /// Restaurant snapshot restricted to the queried products.
    fn find_restaurant_information(
        &self,
        query: &RestaurantQuery,
    ) -> RepositoryResult<Option<Restaurant>>;
}
