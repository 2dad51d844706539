//! End-to-end order flows over the in-memory adapters.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use foodorder_application::{
    ApplicationError, CreateOrderCommand, OrderAddress, OrderApplicationService, OrderItemInput,
    OrderLifecycleSaga, OrderRepository, PaymentResponse, RestaurantApprovalResponse,
    TrackOrderQuery,
};
use foodorder_core::{Clock, FixedClock, IdGenerator, SequenceIdGenerator, TrackingId};
use foodorder_events::{Event, InMemoryEventPublisher};
use foodorder_infra::{
    CustomerEntity, Fixtures, InMemoryOrderRepository, RestaurantEntity,
};
use foodorder_ordering::{OrderEvent, OrderStatus};

const CUSTOMER_ID: &str = "d215b5f8-0249-4dc5-89a3-51fd148cfb41";
const RESTAURANT_ID: &str = "d215b5f8-0249-4dc5-89a3-51fd148cfb45";
const PRODUCT_ID: &str = "d215b5f8-0249-4dc5-89a3-51fd148cfb48";

type Publisher = Arc<InMemoryEventPublisher<OrderEvent>>;

struct World {
    orders: Arc<InMemoryOrderRepository>,
    publisher: Publisher,
    service: OrderApplicationService<Publisher>,
    saga: OrderLifecycleSaga<Publisher>,
}

fn uuid(raw: &str) -> Uuid {
    raw.parse().unwrap()
}

fn now() -> DateTime<Utc> {
    "2023-01-01T10:00:00Z".parse().unwrap()
}

fn fixtures(active: bool) -> Fixtures {
    Fixtures {
        customers: vec![CustomerEntity {
            id: uuid(CUSTOMER_ID),
            username: "user_1".to_string(),
            first_name: "First".to_string(),
            last_name: "User".to_string(),
        }],
        restaurants: vec![RestaurantEntity {
            restaurant_id: uuid(RESTAURANT_ID),
            product_id: uuid(PRODUCT_ID),
            restaurant_name: "restaurant_1".to_string(),
            restaurant_active: active,
            product_name: "product_1".to_string(),
            product_price: dec!(50.00),
        }],
    }
}

fn world(active: bool) -> World {
    let fixtures = fixtures(active);
    let orders = Arc::new(InMemoryOrderRepository::new());
    let publisher: Publisher = Arc::new(InMemoryEventPublisher::new());
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(now()));
    let ids: Arc<dyn IdGenerator> = Arc::new(SequenceIdGenerator::starting_at(1_000));

    let service = OrderApplicationService::new(
        orders.clone(),
        Arc::new(fixtures.customer_repository()),
        Arc::new(fixtures.restaurant_repository()),
        Arc::clone(&publisher),
        Arc::clone(&clock),
        ids,
    );
    let saga = OrderLifecycleSaga::new(orders.clone(), Arc::clone(&publisher), clock);

    World {
        orders,
        publisher,
        service,
        saga,
    }
}

fn command(total: Decimal, unit_price: Decimal) -> CreateOrderCommand {
    CreateOrderCommand {
        customer_id: uuid(CUSTOMER_ID),
        restaurant_id: uuid(RESTAURANT_ID),
        price: total,
        items: vec![
            OrderItemInput {
                product_id: uuid(PRODUCT_ID),
                quantity: 1,
                price: unit_price,
                sub_total: unit_price,
            },
            OrderItemInput {
                product_id: uuid(PRODUCT_ID),
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

fn message(err: ApplicationError) -> String {
    err.domain_message()
        .map(str::to_string)
        .unwrap_or_else(|| err.to_string())
}

fn order_id_for(world: &World, tracking_id: Uuid) -> Uuid {
    world
        .orders
        .find_by_tracking_id(TrackingId::from_uuid(tracking_id))
        .unwrap()
        .and_then(|order| order.id_typed())
        .map(Uuid::from)
        .unwrap()
}

fn status_of(world: &World, tracking_id: Uuid) -> OrderStatus {
    world
        .service
        .track_order(&TrackOrderQuery {
            order_tracking_id: tracking_id,
        })
        .unwrap()
        .order_status
}

#[test]
fn matching_order_is_created_pending() {
    let world = world(true);

    let response = world
        .service
        .create_order(&command(dec!(200.00), dec!(50.00)))
        .unwrap();

    assert_eq!(response.order_status, OrderStatus::Pending);
    assert_eq!(response.message, "Order created successfully");

    let rows = world.orders.entities().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tracking_id, response.order_tracking_id);
    assert_eq!(rows[0].items.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(rows[0].failure_messages, "");

    let published = world.publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].event_type(), "order.created");
    assert_eq!(published[0].occurred_at(), now());
}

#[test]
fn wrong_total_is_rejected() {
    let world = world(true);

    let err = world
        .service
        .create_order(&command(dec!(250.00), dec!(50.00)))
        .unwrap_err();

    assert_eq!(
        message(err),
        "Total price: 250.00 is not equal to Order items total: 200.00!"
    );
    assert!(world.orders.entities().unwrap().is_empty());
    assert!(world.publisher.published().is_empty());
}

#[test]
fn item_price_diverging_from_catalog_is_rejected() {
    let world = world(true);

    let err = world
        .service
        .create_order(&command(dec!(210.00), dec!(60.00)))
        .unwrap_err();

    assert_eq!(
        message(err),
        format!("Order item price: 60.00 is not valid for product {PRODUCT_ID}")
    );
}

#[test]
fn inactive_restaurant_is_rejected() {
    let world = world(false);

    let err = world
        .service
        .create_order(&command(dec!(200.00), dec!(50.00)))
        .unwrap_err();

    assert_eq!(
        message(err),
        format!("Restaurant with id {RESTAURANT_ID} is currently not active!")
    );
}

#[test]
fn unknown_product_has_no_restaurant_information() {
    let world = world(true);
    let mut command = command(dec!(200.00), dec!(50.00));
    for item in &mut command.items {
        item.product_id = Uuid::from_u128(77);
    }

    let err = world.service.create_order(&command).unwrap_err();

    assert_eq!(
        message(err),
        format!("Could not find restaurant with restaurant id: {RESTAURANT_ID}")
    );
}

#[test]
fn cancelled_order_cannot_be_paid() {
    let world = world(true);
    let created = world
        .service
        .create_order(&command(dec!(200.00), dec!(50.00)))
        .unwrap();
    let order_id = order_id_for(&world, created.order_tracking_id);

    world
        .saga
        .rollback_payment(&PaymentResponse {
            order_id,
            failure_messages: vec!["Customer credit is insufficient".to_string()],
        })
        .unwrap();
    let err = world
        .saga
        .process_payment(&PaymentResponse {
            order_id,
            failure_messages: vec![],
        })
        .unwrap_err();

    assert_eq!(message(err), "Order is not in correct state for pay operation!");
    assert_eq!(status_of(&world, created.order_tracking_id), OrderStatus::Cancelled);
}

#[test]
fn order_lifecycle_reaches_approved() {
    let world = world(true);
    let created = world
        .service
        .create_order(&command(dec!(200.00), dec!(50.00)))
        .unwrap();
    let order_id = order_id_for(&world, created.order_tracking_id);

    world
        .saga
        .process_payment(&PaymentResponse {
            order_id,
            failure_messages: vec![],
        })
        .unwrap();
    assert_eq!(status_of(&world, created.order_tracking_id), OrderStatus::Paid);

    world
        .saga
        .process_approval(&RestaurantApprovalResponse {
            order_id,
            failure_messages: vec![],
        })
        .unwrap();
    assert_eq!(status_of(&world, created.order_tracking_id), OrderStatus::Approved);

    let types: Vec<_> = world
        .publisher
        .published()
        .iter()
        .map(|e| e.event_type())
        .collect();
    assert_eq!(types, ["order.created", "order.paid"]);
}

#[test]
fn rejected_order_keeps_failure_messages_across_reloads() {
    let world = world(true);
    let created = world
        .service
        .create_order(&command(dec!(200.00), dec!(50.00)))
        .unwrap();
    let order_id = order_id_for(&world, created.order_tracking_id);

    world
        .saga
        .process_payment(&PaymentResponse {
            order_id,
            failure_messages: vec![],
        })
        .unwrap();
    world
        .saga
        .rollback_approval(&RestaurantApprovalResponse {
            order_id,
            failure_messages: vec!["Product is not available, kitchen closed".to_string()],
        })
        .unwrap();
    world
        .saga
        .rollback_payment(&PaymentResponse {
            order_id,
            failure_messages: vec!["Payment refunded".to_string()],
        })
        .unwrap();

    let tracked = world
        .service
        .track_order(&TrackOrderQuery {
            order_tracking_id: created.order_tracking_id,
        })
        .unwrap();
    assert_eq!(tracked.order_status, OrderStatus::Cancelled);
    assert_eq!(
        tracked.failure_messages,
        ["Product is not available; kitchen closed", "Payment refunded"]
    );

    let rows = world.orders.entities().unwrap();
    assert_eq!(
        rows[0].failure_messages,
        "Product is not available; kitchen closed,Payment refunded"
    );
    assert_eq!(world.publisher.published()[2].event_type(), "order.cancelled");
}
