use serde::{Deserialize, Serialize};

use foodorder_core::{
    AggregateRoot, CustomerId, DomainError, DomainResult, Entity, IdGenerator, Money, OrderId,
    RestaurantId, TrackingId,
};

use crate::address::StreetAddress;
use crate::order_item::{OrderItem, OrderItemId};
use crate::restaurant::Restaurant;

/// Delimiter used when the persistence collaborator flattens failure messages
/// into a single column. Individual messages must not contain it.
pub const FAILURE_MESSAGE_DELIMITER: &str = ",";

/// Stands in for the delimiter when an incoming failure message contains it.
pub const FAILURE_MESSAGE_REPLACEMENT: &str = ";";

/// Order status lifecycle.
///
/// ```text
/// (none) -> Pending -> Paid -> Approved
///              |        |
///              |        v
///              +---> Cancelling -> Cancelled
///              |                      ^
///              +----------------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Approved,
    Cancelling,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::Cancelling => "CANCELLING",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "APPROVED" => Ok(OrderStatus::Approved),
            "CANCELLING" => Ok(OrderStatus::Cancelling),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(DomainError::new(format!("unknown order status: {other}"))),
        }
    }
}

/// Every field of a persisted order, used to rebuild the aggregate on reload.
#[derive(Debug, Clone)]
pub struct OrderSnapshot {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub tracking_id: TrackingId,
    pub delivery_address: StreetAddress,
    pub price: Money,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub failure_messages: Vec<String>,
}

/// Aggregate root: Order.
///
/// A freshly built order has no id, no tracking id and no status. Initialization
/// assigns all three and numbers the items; afterwards only the lifecycle
/// transitions below change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: Option<OrderId>,
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    tracking_id: Option<TrackingId>,
    delivery_address: StreetAddress,
    price: Money,
    items: Vec<OrderItem>,
    status: Option<OrderStatus>,
    failure_messages: Vec<String>,
}

impl Order {
    /// Unvalidated order as received from intake.
    pub fn new(
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        delivery_address: StreetAddress,
        price: Money,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: None,
            customer_id,
            restaurant_id,
            tracking_id: None,
            delivery_address,
            price,
            items,
            status: None,
            failure_messages: Vec::new(),
        }
    }

    pub fn restore(snapshot: OrderSnapshot) -> Self {
        Self {
            id: Some(snapshot.id),
            customer_id: snapshot.customer_id,
            restaurant_id: snapshot.restaurant_id,
            tracking_id: Some(snapshot.tracking_id),
            delivery_address: snapshot.delivery_address,
            price: snapshot.price,
            items: snapshot.items,
            status: Some(snapshot.status),
            failure_messages: snapshot.failure_messages,
        }
    }

    pub fn id_typed(&self) -> Option<OrderId> {
        self.id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn tracking_id(&self) -> Option<TrackingId> {
        self.tracking_id
    }

    pub fn delivery_address(&self) -> &StreetAddress {
        &self.delivery_address
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn failure_messages(&self) -> &[String] {
        &self.failure_messages
    }

    /// Copy confirmed name and price from the restaurant catalog onto every item
    /// whose product is listed there. Unlisted products stay unconfirmed and
    /// fail price validation later. Idempotent.
    pub fn confirm_products(&mut self, restaurant: &Restaurant) {
        for item in &mut self.items {
            if let Some(catalog) = restaurant.find_product(&item.product().id_typed()) {
                item.product_mut().confirm_from(catalog);
            }
        }
    }

    /// Assign order id, tracking id (in that order), item positions `1..=N`, and
    /// move to `Pending`.
    pub fn initialize_order(&mut self, ids: &(impl IdGenerator + ?Sized)) -> DomainResult<()> {
        self.validate_initial_order()?;

        let order_id = OrderId::generate(ids);
        self.id = Some(order_id);
        self.tracking_id = Some(TrackingId::generate(ids));
        self.status = Some(OrderStatus::Pending);

        for (position, item) in (1u64..).zip(self.items.iter_mut()) {
            item.initialize(order_id, OrderItemId::new(position));
        }

        Ok(())
    }

    pub fn validate_order(&self) -> DomainResult<()> {
        self.validate_initial_order()?;
        self.validate_total_price()?;
        self.validate_items_price()
    }

    pub fn pay(&mut self) -> DomainResult<()> {
        self.ensure_status(&[OrderStatus::Pending], "pay")?;
        self.status = Some(OrderStatus::Paid);
        Ok(())
    }

    pub fn approve(&mut self) -> DomainResult<()> {
        self.ensure_status(&[OrderStatus::Paid], "approve")?;
        self.status = Some(OrderStatus::Approved);
        Ok(())
    }

    pub fn init_cancel(&mut self, failure_messages: Vec<String>) -> DomainResult<()> {
        self.ensure_status(&[OrderStatus::Pending, OrderStatus::Paid], "initCancel")?;
        self.merge_failure_messages(failure_messages);
        self.status = Some(OrderStatus::Cancelling);
        Ok(())
    }

    pub fn cancel(&mut self, failure_messages: Vec<String>) -> DomainResult<()> {
        self.ensure_status(&[OrderStatus::Pending, OrderStatus::Cancelling], "cancel")?;
        self.merge_failure_messages(failure_messages);
        self.status = Some(OrderStatus::Cancelled);
        Ok(())
    }
}

impl Order {
    fn ensure_status(&self, allowed: &[OrderStatus], operation: &str) -> DomainResult<()> {
        match self.status {
            Some(status) if allowed.contains(&status) => Ok(()),
            _ => Err(DomainError::new(format!(
                "Order is not in correct state for {operation} operation!"
            ))),
        }
    }

    fn validate_initial_order(&self) -> DomainResult<()> {
        let pre_state = matches!(self.status, None | Some(OrderStatus::Pending));
        if self.id.is_some() || !pre_state {
            return Err(DomainError::new(
                "Order is not in correct state for initialization!",
            ));
        }
        Ok(())
    }

    fn validate_total_price(&self) -> DomainResult<()> {
        if !self.price.is_greater_than_zero() {
            return Err(DomainError::new("Total price must be greater than zero!"));
        }
        Ok(())
    }

    fn validate_items_price(&self) -> DomainResult<()> {
        let mut items_total = Money::ZERO;

        for item in &self.items {
            if !item.is_price_valid()? {
                return Err(DomainError::new(format!(
                    "Order item price: {} is not valid for product {}",
                    item.price(),
                    item.product().id_typed()
                )));
            }
            items_total = items_total.add(&item.sub_total())?;
        }

        if self.price != items_total {
            return Err(DomainError::new(format!(
                "Total price: {} is not equal to Order items total: {}!",
                self.price, items_total
            )));
        }

        Ok(())
    }

    /// Append messages not already present, skipping empty ones; existing order
    /// is preserved. The column delimiter inside a message becomes
    /// `FAILURE_MESSAGE_REPLACEMENT` so the stored list splits back unchanged.
    fn merge_failure_messages(&mut self, failure_messages: Vec<String>) {
        for message in failure_messages {
            let message = message.replace(FAILURE_MESSAGE_DELIMITER, FAILURE_MESSAGE_REPLACEMENT);
            if !message.is_empty() && !self.failure_messages.contains(&message) {
                self.failure_messages.push(message);
            }
        }
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

impl AggregateRoot for Order {}
