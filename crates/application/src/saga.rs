//! Reactions to payment and restaurant-approval outcomes.
//!
//! Each step loads the order, applies one lifecycle transition, stores it and,
//! where the transition has an event, publishes it. Steps are idempotent: a
//! response that arrives again after its transition was applied is a no-op.

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use foodorder_core::{Clock, DomainError, OrderId, UuidV7Generator};
use foodorder_events::DomainEventPublisher;
use foodorder_ordering::{
    Order, OrderCancelledEvent, OrderDomainService, OrderEvent, OrderPaidEvent, OrderStatus,
};

use crate::dto::{PaymentResponse, RestaurantApprovalResponse};
use crate::error::ApplicationError;
use crate::ports::OrderRepository;

pub struct OrderLifecycleSaga<P> {
    orders: Arc<dyn OrderRepository>,
    publisher: P,
    domain: OrderDomainService<Arc<dyn Clock>, UuidV7Generator>,
}

impl<P> OrderLifecycleSaga<P>
where
    P: DomainEventPublisher<OrderEvent>,
{
    pub fn new(orders: Arc<dyn OrderRepository>, publisher: P, clock: Arc<dyn Clock>) -> Self {
        Self {
            orders,
            publisher,
            domain: OrderDomainService::new(clock, UuidV7Generator),
        }
    }

    /// Payment completed: `Pending -> Paid`, announce it.
    pub fn process_payment(
        &self,
        response: &PaymentResponse,
    ) -> Result<Option<OrderPaidEvent>, ApplicationError> {
        let mut order = self.find_order(response.order_id)?;
        if order.status() == Some(OrderStatus::Paid) {
            info!(order_id = %response.order_id, "order already paid, skipping");
            return Ok(None);
        }

        let event = self.domain.pay_order(&mut order)?;
        self.save_order(&order)?;
        self.publish(event.clone().into())?;

        info!(order_id = %response.order_id, "order is paid");
        Ok(Some(event))
    }

    /// Payment failed or was refunded: cancel the order for good.
    pub fn rollback_payment(&self, response: &PaymentResponse) -> Result<(), ApplicationError> {
        let mut order = self.find_order(response.order_id)?;
        if order.status() == Some(OrderStatus::Cancelled) {
            info!(order_id = %response.order_id, "order already cancelled, skipping");
            return Ok(());
        }

        self.domain
            .cancel_order(&mut order, response.failure_messages.clone())?;
        self.save_order(&order)?;

        info!(order_id = %response.order_id, "order is cancelled");
        Ok(())
    }

    /// Restaurant accepted: `Paid -> Approved`.
    pub fn process_approval(
        &self,
        response: &RestaurantApprovalResponse,
    ) -> Result<(), ApplicationError> {
        let mut order = self.find_order(response.order_id)?;
        if order.status() == Some(OrderStatus::Approved) {
            info!(order_id = %response.order_id, "order already approved, skipping");
            return Ok(());
        }

        self.domain.approve_order(&mut order)?;
        self.save_order(&order)?;

        info!(order_id = %response.order_id, "order is approved");
        Ok(())
    }

    /// Restaurant rejected: start cancelling, announce that the payment must
    /// be rolled back.
    pub fn rollback_approval(
        &self,
        response: &RestaurantApprovalResponse,
    ) -> Result<Option<OrderCancelledEvent>, ApplicationError> {
        let mut order = self.find_order(response.order_id)?;
        if order.status() == Some(OrderStatus::Cancelling) {
            info!(order_id = %response.order_id, "order already cancelling, skipping");
            return Ok(None);
        }

        let event = self
            .domain
            .cancel_order_payment(&mut order, response.failure_messages.clone())?;
        self.save_order(&order)?;
        self.publish(event.clone().into())?;

        info!(order_id = %response.order_id, "order is cancelling");
        Ok(Some(event))
    }

    fn find_order(&self, order_id: Uuid) -> Result<Order, ApplicationError> {
        match self.orders.find_by_id(OrderId::from_uuid(order_id))? {
            Some(order) => Ok(order),
            None => {
                error!(%order_id, "order not found");
                let message = format!("Order with id: {order_id} could not be found!");
                Err(DomainError::new(message).into())
            }
        }
    }

    fn save_order(&self, order: &Order) -> Result<(), ApplicationError> {
        self.orders.save(order).map(|_| ()).map_err(|err| {
            error!(error = %err, "could not save order");
            ApplicationError::from(DomainError::new("Could not save order!"))
        })
    }

    fn publish(&self, event: OrderEvent) -> Result<(), ApplicationError> {
        self.publisher
            .publish(event)
            .map_err(|err| ApplicationError::Publish(err.to_string()))
    }
}
