use std::sync::RwLock;

use tracing::debug;

use foodorder_application::{
    RepositoryError, RepositoryResult, RestaurantQuery, RestaurantRepository,
};
use foodorder_ordering::Restaurant;

use crate::persistence::RestaurantEntity;
use crate::persistence::mapper::restaurant_entities_to_restaurant;

/// Restaurant catalog rows (one per restaurant product).
#[derive(Debug, Default)]
pub struct InMemoryRestaurantRepository {
    rows: RwLock<Vec<RestaurantEntity>>,
}

impl InMemoryRestaurantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = RestaurantEntity>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().collect()),
        }
    }

    pub fn insert(&self, row: RestaurantEntity) -> RepositoryResult<()> {
        let mut rows = self.rows.write().map_err(|_| RepositoryError::Poisoned)?;
        rows.push(row);
        Ok(())
    }
}

impl RestaurantRepository for InMemoryRestaurantRepository {
    /// Rows of the queried restaurant restricted to the queried products;
    /// no matching rows means no restaurant.
    fn find_restaurant_information(
        &self,
        query: &RestaurantQuery,
    ) -> RepositoryResult<Option<Restaurant>> {
        let rows = self.rows.read().map_err(|_| RepositoryError::Poisoned)?;

        let matching: Vec<RestaurantEntity> = rows
            .iter()
            .filter(|row| row.restaurant_id == *query.restaurant_id.as_uuid())
            .filter(|row| {
                query
                    .product_ids
                    .iter()
                    .any(|id| id.as_uuid() == &row.product_id)
            })
            .cloned()
            .collect();

        if matching.is_empty() {
            debug!(restaurant_id = %query.restaurant_id, "no catalog rows for query");
            return Ok(None);
        }

        Ok(Some(restaurant_entities_to_restaurant(&matching)?))
    }
}
