//! Row-shaped persistence entities and the mappers that translate them to and
//! from domain objects.

pub mod entity;
pub mod mapper;

pub use entity::{
    CustomerEntity, OrderAddressEntity, OrderEntity, OrderItemEntity, RestaurantEntity,
};
pub use mapper::DataAccessError;
