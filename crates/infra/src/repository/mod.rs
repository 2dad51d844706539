//! In-memory adapters for the application's repository ports.
//!
//! They hold persistence entities, not domain objects, so every save and load
//! goes through the persistence mappers exactly as a database adapter would.

mod customer;
mod order;
mod restaurant;

pub use customer::InMemoryCustomerRepository;
pub use order::InMemoryOrderRepository;
pub use restaurant::InMemoryRestaurantRepository;
