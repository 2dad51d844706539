use foodorder_core::{
    Clock, DomainError, DomainResult, IdGenerator, SystemClock, UuidV7Generator,
};

use crate::event::{OrderCancelledEvent, OrderCreatedEvent, OrderPaidEvent};
use crate::order::Order;
use crate::restaurant::Restaurant;

/// Stateless orchestration of the order lifecycle.
///
/// Each operation validates, mutates the passed-in order, and returns the event
/// describing what happened (or nothing for the success-only transitions).
/// Time and id generation are injected so results are reproducible.
#[derive(Debug, Clone)]
pub struct OrderDomainService<C = SystemClock, G = UuidV7Generator> {
    clock: C,
    ids: G,
}

impl Default for OrderDomainService {
    fn default() -> Self {
        Self::new(SystemClock, UuidV7Generator)
    }
}

impl<C, G> OrderDomainService<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Confirm products against the restaurant catalog, validate, initialize.
    pub fn validate_and_initiate_order(
        &self,
        order: &mut Order,
        restaurant: &Restaurant,
    ) -> DomainResult<OrderCreatedEvent> {
        Self::validate_restaurant(restaurant)?;
        order.confirm_products(restaurant);
        order.validate_order()?;
        order.initialize_order(&self.ids)?;
        Ok(OrderCreatedEvent::new(order.clone(), self.clock.now()))
    }

    pub fn pay_order(&self, order: &mut Order) -> DomainResult<OrderPaidEvent> {
        order.pay()?;
        Ok(OrderPaidEvent::new(order.clone(), self.clock.now()))
    }

    pub fn approve_order(&self, order: &mut Order) -> DomainResult<()> {
        order.approve()
    }

    pub fn cancel_order_payment(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> DomainResult<OrderCancelledEvent> {
        order.init_cancel(failure_messages)?;
        Ok(OrderCancelledEvent::new(order.clone(), self.clock.now()))
    }

    pub fn cancel_order(
        &self,
        order: &mut Order,
        failure_messages: Vec<String>,
    ) -> DomainResult<()> {
        order.cancel(failure_messages)
    }

    fn validate_restaurant(restaurant: &Restaurant) -> DomainResult<()> {
        if !restaurant.is_active() {
            return Err(DomainError::new(format!(
                "Restaurant with id {} is currently not active!",
                restaurant.id_typed()
            )));
        }
        Ok(())
    }
}
