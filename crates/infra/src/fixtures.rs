//! Seed data for the in-memory repositories.

use serde::{Deserialize, Serialize};

use crate::persistence::{CustomerEntity, RestaurantEntity};
use crate::repository::{InMemoryCustomerRepository, InMemoryRestaurantRepository};

/// Customers and restaurant catalog rows, as stored in a fixtures JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub customers: Vec<CustomerEntity>,
    #[serde(default)]
    pub restaurants: Vec<RestaurantEntity>,
}

impl Fixtures {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn customer_repository(&self) -> InMemoryCustomerRepository {
        InMemoryCustomerRepository::from_rows(self.customers.iter().cloned())
    }

    pub fn restaurant_repository(&self) -> InMemoryRestaurantRepository {
        InMemoryRestaurantRepository::from_rows(self.restaurants.iter().cloned())
    }
}
