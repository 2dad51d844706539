//! Infrastructure layer: persistence entities, their mappers, and in-memory
//! repository adapters implementing the application ports.

pub mod fixtures;
pub mod persistence;
pub mod repository;

pub use fixtures::Fixtures;
pub use persistence::{
    CustomerEntity, DataAccessError, OrderAddressEntity, OrderEntity, OrderItemEntity,
    RestaurantEntity,
};
pub use repository::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryRestaurantRepository,
};
