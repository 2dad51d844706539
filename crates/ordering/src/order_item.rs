use serde::{Deserialize, Serialize};

use foodorder_core::{DomainResult, Entity, Money, OrderId};

use crate::product::Product;

/// Position of an item inside its order (1-based, assigned at initialization).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(u64);

impl OrderItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order line: product, quantity, unit price and the declared subtotal.
///
/// Owned by its `Order`; there is no public mutator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    id: Option<OrderItemId>,
    order_id: Option<OrderId>,
    product: Product,
    quantity: u32,
    price: Money,
    sub_total: Money,
}

impl OrderItem {
    /// Unnumbered line as received from order intake.
    pub fn new(product: Product, quantity: u32, price: Money, sub_total: Money) -> Self {
        Self {
            id: None,
            order_id: None,
            product,
            quantity,
            price,
            sub_total,
        }
    }

    /// Rebuild a persisted line.
    pub fn restore(
        id: OrderItemId,
        order_id: OrderId,
        product: Product,
        quantity: u32,
        price: Money,
        sub_total: Money,
    ) -> Self {
        Self {
            id: Some(id),
            order_id: Some(order_id),
            product,
            quantity,
            price,
            sub_total,
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn sub_total(&self) -> Money {
        self.sub_total
    }

    /// Quantity and price are positive, the price matches the confirmed
    /// product price, and `price × quantity` equals the declared subtotal.
    ///
    /// Fails only when `price × quantity` leaves the decimal range.
    pub fn is_price_valid(&self) -> DomainResult<bool> {
        if self.quantity == 0
            || !self.price.is_greater_than_zero()
            || self.product.price() != Some(self.price)
        {
            return Ok(false);
        }
        Ok(self.price.multiply(self.quantity)? == self.sub_total)
    }

    pub(crate) fn initialize(&mut self, order_id: OrderId, id: OrderItemId) {
        self.order_id = Some(order_id);
        self.id = Some(id);
    }

    pub(crate) fn product_mut(&mut self) -> &mut Product {
        &mut self.product
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
