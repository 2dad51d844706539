//! Order application layer.
//!
//! Turns inbound commands and external responses into domain operations:
//! looks up collaborators through repository ports, runs the domain service,
//! persists the aggregate, and publishes the resulting events. No IO lives here;
//! storage and transport are injected.

pub mod dto;
pub mod error;
pub mod mapper;
pub mod ports;
pub mod saga;
pub mod service;

#[cfg(test)]
mod testing;

pub use dto::{
    CreateOrderCommand, CreateOrderResponse, OrderAddress, OrderItemInput, PaymentResponse,
    RestaurantApprovalResponse, TrackOrderQuery, TrackOrderResponse,
};
pub use error::ApplicationError;
pub use ports::{
    CustomerRepository, OrderRepository, RepositoryError, RepositoryResult, RestaurantQuery,
    RestaurantRepository,
};
pub use saga::OrderLifecycleSaga;
pub use service::OrderApplicationService;
