//! Hand-rolled port fakes shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use foodorder_core::{
    Clock, CustomerId, FixedClock, IdGenerator, Money, OrderId, ProductId, RestaurantId,
    SequenceIdGenerator, TrackingId,
};
use foodorder_ordering::{Customer, Order, Product, Restaurant};

use crate::dto::{CreateOrderCommand, OrderAddress, OrderItemInput};
use crate::ports::{
    CustomerRepository, OrderRepository, RepositoryError, RepositoryResult, RestaurantQuery,
    RestaurantRepository,
};

pub(crate) const CUSTOMER: u128 = 1;
pub(crate) const RESTAURANT: u128 = 2;
pub(crate) const PRODUCT: u128 = 3;

#[derive(Default)]
pub(crate) struct FakeOrders {
    orders: Mutex<Vec<Order>>,
    reject_saves: bool,
}

impl FakeOrders {
    pub(crate) fn rejecting_saves() -> Self {
        Self {
            reject_saves: true,
            ..Self::default()
        }
    }

    pub(crate) fn with(order: Order) -> Self {
        Self {
            orders: Mutex::new(vec![order]),
            reject_saves: false,
        }
    }

    pub(crate) fn stored(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

impl OrderRepository for FakeOrders {
    fn save(&self, order: &Order) -> RepositoryResult<Order> {
        if self.reject_saves {
            return Err(RepositoryError::Mapping("rejected".to_string()));
        }
        let mut orders = self.orders.lock().unwrap();
        orders.retain(|stored| stored.id_typed() != order.id_typed());
        orders.push(order.clone());
        Ok(order.clone())
    }

    fn find_by_id(&self, order_id: OrderId) -> RepositoryResult<Option<Order>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders.iter().find(|o| o.id_typed() == Some(order_id)).cloned())
    }

    fn find_by_tracking_id(&self, tracking_id: TrackingId) -> RepositoryResult<Option<Order>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders
            .iter()
            .find(|o| o.tracking_id() == Some(tracking_id))
            .cloned())
    }
}

pub(crate) struct FakeCustomers(pub(crate) Vec<CustomerId>);

impl CustomerRepository for FakeCustomers {
    fn find_customer(&self, customer_id: CustomerId) -> RepositoryResult<Option<Customer>> {
        Ok(self.0.contains(&customer_id).then(|| Customer::new(customer_id)))
    }
}

pub(crate) struct FakeRestaurants(pub(crate) Vec<Restaurant>);

impl RestaurantRepository for FakeRestaurants {
    fn find_restaurant_information(
        &self,
        query: &RestaurantQuery,
    ) -> RepositoryResult<Option<Restaurant>> {
        Ok(self
            .0
            .iter()
            .find(|r| r.id_typed() == query.restaurant_id)
            .cloned())
    }
}

pub(crate) fn customer_id() -> CustomerId {
    CustomerId::from_uuid(Uuid::from_u128(CUSTOMER))
}

pub(crate) fn restaurant(active: bool) -> Restaurant {
    Restaurant::new(
        RestaurantId::from_uuid(Uuid::from_u128(RESTAURANT)),
        active,
        [Product::with_details(
            ProductId::from_uuid(Uuid::from_u128(PRODUCT)),
            "product-1",
            Money::new(dec!(50.00)),
        )],
    )
}

pub(crate) fn test_time() -> DateTime<Utc> {
    "2023-01-01T10:00:00Z".parse().unwrap()
}

pub(crate) fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(test_time()))
}

pub(crate) fn ids() -> Arc<dyn IdGenerator> {
    Arc::new(SequenceIdGenerator::starting_at(100))
}

/// One product, 1 + 3 units at 50.00, total 200.00.
pub(crate) fn create_order_command() -> CreateOrderCommand {
    CreateOrderCommand {
        customer_id: Uuid::from_u128(CUSTOMER),
        restaurant_id: Uuid::from_u128(RESTAURANT),
        price: dec!(200.00),
        items: vec![
            OrderItemInput {
                product_id: Uuid::from_u128(PRODUCT),
                quantity: 1,
                price: dec!(50.00),
                sub_total: dec!(50.00),
            },
            OrderItemInput {
                product_id: Uuid::from_u128(PRODUCT),
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
