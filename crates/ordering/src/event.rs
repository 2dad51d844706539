use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use foodorder_events::Event;

use crate::order::Order;

/// Event: order validated against its restaurant and initiated (now `Pending`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

/// Event: payment for the order completed (now `Paid`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPaidEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

/// Event: cancellation started, the payment must be rolled back (now `Cancelling`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    order: Order,
    created_at: DateTime<Utc>,
}

macro_rules! impl_order_event {
    ($t:ty) => {
        impl $t {
            pub fn new(order: Order, created_at: DateTime<Utc>) -> Self {
                Self { order, created_at }
            }

            /// Snapshot of the order right after the transition.
            pub fn order(&self) -> &Order {
                &self.order
            }

            pub fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            pub fn into_order(self) -> Order {
                self.order
            }
        }
    };
}

impl_order_event!(OrderCreatedEvent);
impl_order_event!(OrderPaidEvent);
impl_order_event!(OrderCancelledEvent);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderEvent {
    Created(OrderCreatedEvent),
    Paid(OrderPaidEvent),
    Cancelled(OrderCancelledEvent),
}

impl OrderEvent {
    pub fn order(&self) -> &Order {
        match self {
            OrderEvent::Created(e) => e.order(),
            OrderEvent::Paid(e) => e.order(),
            OrderEvent::Cancelled(e) => e.order(),
        }
    }
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Created(_) => "order.created",
            OrderEvent::Paid(_) => "order.paid",
            OrderEvent::Cancelled(_) => "order.cancelled",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::Created(e) => e.created_at(),
            OrderEvent::Paid(e) => e.created_at(),
            OrderEvent::Cancelled(e) => e.created_at(),
        }
    }
}

impl From<OrderCreatedEvent> for OrderEvent {
    fn from(value: OrderCreatedEvent) -> Self {
        OrderEvent::Created(value)
    }
}

impl From<OrderPaidEvent> for OrderEvent {
    fn from(value: OrderPaidEvent) -> Self {
        OrderEvent::Paid(value)
    }
}

impl From<OrderCancelledEvent> for OrderEvent {
    fn from(value: OrderCancelledEvent) -> Self {
        OrderEvent::Cancelled(value)
    }
}
