//! Inbound/outbound data shapes of the application layer.
//!
//! These are produced and consumed by an outer mapping layer (HTTP, messaging,
//! CLI); they carry raw uuids and decimals, not domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use foodorder_ordering::OrderStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub product_id: Uuid,
    pub quantity: u32,
    pub price: Decimal,
    pub sub_total: Decimal,
}

/// Command: place a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderCommand {
    pub customer_id: Uuid,
    pub restaurant_id: Uuid,
    pub price: Decimal,
    pub items: Vec<OrderItemInput>,
    pub address: OrderAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_tracking_id: Uuid,
    pub order_status: OrderStatus,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrderQuery {
    pub order_tracking_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOrderResponse {
    pub order_tracking_id: Uuid,
    pub order_status: OrderStatus,
    pub failure_messages: Vec<String>,
}

/// Outcome reported by the payment collaborator for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub order_id: Uuid,
    #[serde(default)]
    pub failure_messages: Vec<String>,
}

/// Outcome reported by the restaurant for one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantApprovalResponse {
    pub order_id: Uuid,
    #[serde(default)]
    pub failure_messages: Vec<String>,
}
