//! Conversions between application DTOs and domain objects.

use foodorder_core::{
    CustomerId, DomainError, DomainResult, IdGenerator, Money, ProductId, RestaurantId,
};
use foodorder_ordering::{Order, OrderItem, Product, StreetAddress};

use crate::dto::{CreateOrderCommand, CreateOrderResponse, OrderAddress, TrackOrderResponse};
use crate::ports::RestaurantQuery;

/// Which restaurant and products the command needs confirmed.
pub fn create_order_command_to_restaurant_query(command: &CreateOrderCommand) -> RestaurantQuery {
    RestaurantQuery {
        restaurant_id: RestaurantId::from_uuid(command.restaurant_id),
        product_ids: command
            .items
            .iter()
            .map(|item| ProductId::from_uuid(item.product_id))
            .collect(),
    }
}

/// Unvalidated order built from the command; the delivery address gets a fresh id.
pub fn create_order_command_to_order(
    command: &CreateOrderCommand,
    ids: &(impl IdGenerator + ?Sized),
) -> Order {
    let items = command
        .items
        .iter()
        .map(|item| {
            OrderItem::new(
                Product::new(ProductId::from_uuid(item.product_id)),
                item.quantity,
                Money::new(item.price),
                Money::new(item.sub_total),
            )
        })
        .collect();

    Order::new(
        CustomerId::from_uuid(command.customer_id),
        RestaurantId::from_uuid(command.restaurant_id),
        address_to_street_address(&command.address, ids),
        Money::new(command.price),
        items,
    )
}

fn address_to_street_address(
    address: &OrderAddress,
    ids: &(impl IdGenerator + ?Sized),
) -> StreetAddress {
    StreetAddress::new(
        ids.next_uuid(),
        address.street.as_str(),
        address.postal_code.as_str(),
        address.city.as_str(),
    )
}

pub fn order_to_create_order_response(
    order: &Order,
    message: impl Into<String>,
) -> DomainResult<CreateOrderResponse> {
    let (order_tracking_id, order_status) = tracking_state(order)?;
    Ok(CreateOrderResponse {
        order_tracking_id,
        order_status,
        message: message.into(),
    })
}

pub fn order_to_track_order_response(order: &Order) -> DomainResult<TrackOrderResponse> {
    let (order_tracking_id, order_status) = tracking_state(order)?;
    Ok(TrackOrderResponse {
        order_tracking_id,
        order_status,
        failure_messages: order.failure_messages().to_vec(),
    })
}

fn tracking_state(
    order: &Order,
) -> DomainResult<(uuid::Uuid, foodorder_ordering::OrderStatus)> {
    match (order.tracking_id(), order.status()) {
        (Some(tracking_id), Some(status)) => Ok((tracking_id.into(), status)),
        _ => Err(DomainError::new("Order is not initialized yet!")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::OrderItemInput;
    use foodorder_core::SequenceIdGenerator;
    use foodorder_ordering::OrderStatus;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn command() -> CreateOrderCommand {
        CreateOrderCommand {
            customer_id: Uuid::from_u128(1),
            restaurant_id: Uuid::from_u128(2),
            price: dec!(200.00),
            items: vec![
                OrderItemInput {
                    product_id: Uuid::from_u128(3),
                    quantity: 1,
                    price: dec!(50.00),
                    sub_total: dec!(50.00),
                },
                OrderItemInput {
                    product_id: Uuid::from_u128(3),
                    quantity: 3,
                    price: dec!(50.00),
                    sub_total: dec!(150.00),
                },
            ],
            address: OrderAddress {
                street: "street_1".to_string(),
                postal_code: "1000AB".to_string(),
                city: "Paris".to_string(),
            },
        }
    }

    #[test]
    fn restaurant_query_lists_every_item_product() {
        let query = create_order_command_to_restaurant_query(&command());

        assert_eq!(query.restaurant_id, RestaurantId::from_uuid(Uuid::from_u128(2)));
        assert_eq!(query.product_ids.len(), 2);
    }

    #[test]
    fn command_becomes_unvalidated_order() {
        let ids = SequenceIdGenerator::starting_at(500);

        let order = create_order_command_to_order(&command(), &ids);

        assert_eq!(order.status(), None);
        assert_eq!(order.id_typed(), None);
        assert_eq!(order.price(), Money::new(dec!(200)));
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[1].sub_total(), Money::new(dec!(150)));
        assert_eq!(order.delivery_address().id(), Uuid::from_u128(500));
        assert_eq!(order.delivery_address().city(), "Paris");
    }

    #[test]
    fn response_requires_initialized_order() {
        let order = create_order_command_to_order(&command(), &SequenceIdGenerator::new());

        let err = order_to_track_order_response(&order).unwrap_err();

        assert_eq!(err.message(), "Order is not initialized yet!");
    }

    #[test]
    fn create_response_carries_tracking_state() {
        let ids = SequenceIdGenerator::new();
        let mut order = create_order_command_to_order(&command(), &ids);
        order.initialize_order(&ids).unwrap();

        let response =
            order_to_create_order_response(&order, "Order created successfully").unwrap();

        assert_eq!(response.order_status, OrderStatus::Pending);
        assert_eq!(Some(response.order_tracking_id), order.tracking_id().map(Uuid::from));
        assert_eq!(response.message, "Order created successfully");
    }
}
