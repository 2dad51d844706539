use thiserror::Error;

use foodorder_application::RepositoryError;
use foodorder_core::{
    CustomerId, Entity, Money, OrderId, ProductId, RestaurantId, TrackingId,
};
use foodorder_ordering::{
    Customer, FAILURE_MESSAGE_DELIMITER, Order, OrderItem, OrderItemId, OrderSnapshot, Product,
    Restaurant, StreetAddress,
};

use super::entity::{
    CustomerEntity, OrderAddressEntity, OrderEntity, OrderItemEntity, RestaurantEntity,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataAccessError {
    #[error("Restaurant could not be found!")]
    RestaurantNotFound,

    /// Only initialized orders (id, tracking id, status, numbered items) can be stored.
    #[error("order cannot be stored without its {0}")]
    Uninitialized(&'static str),
}

impl From<DataAccessError> for RepositoryError {
    fn from(err: DataAccessError) -> Self {
        RepositoryError::Mapping(err.to_string())
    }
}

pub fn order_to_order_entity(order: &Order) -> Result<OrderEntity, DataAccessError> {
    let id = order.id_typed().ok_or(DataAccessError::Uninitialized("id"))?;
    let tracking_id = order
        .tracking_id()
        .ok_or(DataAccessError::Uninitialized("tracking id"))?;
    let status = order
        .status()
        .ok_or(DataAccessError::Uninitialized("status"))?;

    let items = order
        .items()
        .iter()
        .map(|item| {
            let position = item
                .id()
                .ok_or(DataAccessError::Uninitialized("item position"))?;
            Ok::<_, DataAccessError>(OrderItemEntity {
                id: position.value(),
                order_id: id.into(),
                product_id: item.product().id_typed().into(),
                price: item.price().amount(),
                quantity: item.quantity(),
                sub_total: item.sub_total().amount(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let address = order.delivery_address();

    Ok(OrderEntity {
        id: id.into(),
        customer_id: order.customer_id().into(),
        restaurant_id: order.restaurant_id().into(),
        tracking_id: tracking_id.into(),
        price: order.price().amount(),
        order_status: status,
        failure_messages: failure_messages_to_column(order.failure_messages()),
        address: OrderAddressEntity {
            id: address.id(),
            order_id: id.into(),
            street: address.street().to_string(),
            postal_code: address.postal_code().to_string(),
            city: address.city().to_string(),
        },
        items,
    })
}

pub fn order_entity_to_order(entity: OrderEntity) -> Order {
    let order_id = OrderId::from_uuid(entity.id);

    let items = entity
        .items
        .into_iter()
        .map(|item| {
            OrderItem::restore(
                OrderItemId::new(item.id),
                order_id,
                Product::new(ProductId::from_uuid(item.product_id)),
                item.quantity,
                Money::new(item.price),
                Money::new(item.sub_total),
            )
        })
        .collect();

    Order::restore(OrderSnapshot {
        id: order_id,
        customer_id: CustomerId::from_uuid(entity.customer_id),
        restaurant_id: RestaurantId::from_uuid(entity.restaurant_id),
        tracking_id: TrackingId::from_uuid(entity.tracking_id),
        delivery_address: StreetAddress::new(
            entity.address.id,
            entity.address.street,
            entity.address.postal_code,
            entity.address.city,
        ),
        price: Money::new(entity.price),
        items,
        status: entity.order_status,
        failure_messages: failure_messages_from_column(&entity.failure_messages),
    })
}

/// Restaurant snapshot from its product rows; the first row supplies the
/// restaurant's own columns.
pub fn restaurant_entities_to_restaurant(
    rows: &[RestaurantEntity],
) -> Result<Restaurant, DataAccessError> {
    let first = rows.first().ok_or(DataAccessError::RestaurantNotFound)?;

    let products = rows.iter().map(|row| {
        Product::with_details(
            ProductId::from_uuid(row.product_id),
            row.product_name.as_str(),
            Money::new(row.product_price),
        )
    });

    Ok(Restaurant::new(
        RestaurantId::from_uuid(first.restaurant_id),
        first.restaurant_active,
        products,
    ))
}

pub fn customer_entity_to_customer(entity: &CustomerEntity) -> Customer {
    Customer::new(CustomerId::from_uuid(entity.id))
}

pub fn failure_messages_to_column(messages: &[String]) -> String {
    messages.join(FAILURE_MESSAGE_DELIMITER)
}

pub fn failure_messages_from_column(column: &str) -> Vec<String> {
    if column.is_empty() {
        return Vec::new();
    }
    column
        .split(FAILURE_MESSAGE_DELIMITER)
        .map(str::to_string)
        .collect()
}
