use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodorder_ordering::OrderStatus;

/// Stored order row with its address and item rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub restaurant_id: Uuid,
    pub tracking_id: Uuid,
    pub price: Decimal,
    pub order_status: OrderStatus,
    /// Failure messages joined with `,`; empty when there are none.
    pub failure_messages: String,
    pub address: OrderAddressEntity,
    pub items: Vec<OrderItemEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddressEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemEntity {
    pub id: u64,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub price: Decimal,
    pub quantity: u32,
    pub sub_total: Decimal,
}

/// One row per restaurant product, as a restaurant/product view returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantEntity {
    pub restaurant_id: Uuid,
    pub product_id: Uuid,
    pub restaurant_name: String,
    pub restaurant_active: bool,
    pub product_name: String,
    pub product_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerEntity {
    pub id: Uuid,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}
