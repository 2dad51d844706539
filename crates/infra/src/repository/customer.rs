use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use foodorder_application::{CustomerRepository, RepositoryError, RepositoryResult};
use foodorder_core::CustomerId;
use foodorder_ordering::Customer;

use crate::persistence::CustomerEntity;
use crate::persistence::mapper::customer_entity_to_customer;

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    rows: RwLock<HashMap<Uuid, CustomerEntity>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = CustomerEntity>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(|row| (row.id, row)).collect()),
        }
    }

    pub fn insert(&self, row: CustomerEntity) -> RepositoryResult<()> {
        let mut rows = self.rows.write().map_err(|_| RepositoryError::Poisoned)?;
        rows.insert(row.id, row);
        Ok(())
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn find_customer(&self, customer_id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let rows = self.rows.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows.get(customer_id.as_uuid()).map(customer_entity_to_customer))
    }
}
