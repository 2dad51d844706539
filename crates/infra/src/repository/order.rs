use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use foodorder_application::{OrderRepository, RepositoryError, RepositoryResult};
use foodorder_core::{OrderId, TrackingId};
use foodorder_ordering::Order;

use crate::persistence::OrderEntity;
use crate::persistence::mapper::{order_entity_to_order, order_to_order_entity};

/// Orders keyed by order id.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    rows: RwLock<HashMap<Uuid, OrderEntity>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored rows, in no particular order.
    pub fn entities(&self) -> RepositoryResult<Vec<OrderEntity>> {
        let rows = self.rows.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows.values().cloned().collect())
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &Order) -> RepositoryResult<Order> {
        let entity = order_to_order_entity(order)?;

        let mut rows = self.rows.write().map_err(|_| RepositoryError::Poisoned)?;
        rows.insert(entity.id, entity.clone());
        debug!(order_id = %entity.id, status = %entity.order_status, "order saved");

        Ok(order_entity_to_order(entity))
    }

    fn find_by_id(&self, order_id: OrderId) -> RepositoryResult<Option<Order>> {
        let rows = self.rows.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows
            .get(order_id.as_uuid())
            .cloned()
            .map(order_entity_to_order))
    }

    fn find_by_tracking_id(&self, tracking_id: TrackingId) -> RepositoryResult<Option<Order>> {
        let rows = self.rows.read().map_err(|_| RepositoryError::Poisoned)?;
        Ok(rows
            .values()
            .find(|row| row.tracking_id == Uuid::from(tracking_id))
            .cloned()
            .map(order_entity_to_order))
    }
}
