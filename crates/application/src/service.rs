use std::sync::Arc;

use tracing::{error, info, warn};

use foodorder_core::{Clock, CustomerId, DomainError, IdGenerator, TrackingId};
use foodorder_events::DomainEventPublisher;
use foodorder_ordering::{Order, OrderDomainService, OrderEvent, Restaurant};

use crate::dto::{CreateOrderCommand, CreateOrderResponse, TrackOrderQuery, TrackOrderResponse};
use crate::error::ApplicationError;
use crate::mapper;
use crate::ports::{CustomerRepository, OrderRepository, RestaurantRepository};

const ORDER_CREATED_MESSAGE: &str = "Order created successfully";

/// Inbound use cases of the order service: create and track.
pub struct OrderApplicationService<P> {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    restaurants: Arc<dyn RestaurantRepository>,
    publisher: P,
    ids: Arc<dyn IdGenerator>,
    domain: OrderDomainService<Arc<dyn Clock>, Arc<dyn IdGenerator>>,
}

impl<P> OrderApplicationService<P>
where
    P: DomainEventPublisher<OrderEvent>,
{
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        restaurants: Arc<dyn RestaurantRepository>,
        publisher: P,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            orders,
            customers,
            restaurants,
            publisher,
            domain: OrderDomainService::new(clock, Arc::clone(&ids)),
            ids,
        }
    }

    /// Validate, initiate, persist and announce a new order.
    pub fn create_order(
        &self,
        command: &CreateOrderCommand,
    ) -> Result<CreateOrderResponse, ApplicationError> {
        self.check_customer(CustomerId::from_uuid(command.customer_id))?;
        let restaurant = self.check_restaurant(command)?;

        let mut order = mapper::create_order_command_to_order(command, &*self.ids);
        let created = self.domain.validate_and_initiate_order(&mut order, &restaurant)?;
        self.save_order(&order)?;

        info!(
            order_id = ?order.id_typed(),
            tracking_id = ?order.tracking_id(),
            "order is created"
        );

        let response =
            mapper::order_to_create_order_response(created.order(), ORDER_CREATED_MESSAGE)?;
        self.publisher
            .publish(OrderEvent::from(created))
            .map_err(|err| ApplicationError::Publish(err.to_string()))?;

        Ok(response)
    }

    pub fn track_order(
        &self,
        query: &TrackOrderQuery,
    ) -> Result<TrackOrderResponse, ApplicationError> {
        let tracking_id = TrackingId::from_uuid(query.order_tracking_id);

        let Some(order) = self.orders.find_by_tracking_id(tracking_id)? else {
            warn!(%tracking_id, "order not found by tracking id");
            return Err(DomainError::new(format!(
                "Could not find order with tracking id: {tracking_id}"
            ))
            .into());
        };

        Ok(mapper::order_to_track_order_response(&order)?)
    }

    fn check_customer(&self, customer_id: CustomerId) -> Result<(), ApplicationError> {
        if self.customers.find_customer(customer_id)?.is_none() {
            warn!(%customer_id, "customer not found");
            return Err(DomainError::new(format!(
                "Could not find customer with customer id: {customer_id}"
            ))
            .into());
        }
        Ok(())
    }

    fn check_restaurant(
        &self,
        command: &CreateOrderCommand,
    ) -> Result<Restaurant, ApplicationError> {
        let query = mapper::create_order_command_to_restaurant_query(command);

        match self.restaurants.find_restaurant_information(&query)? {
            Some(restaurant) => Ok(restaurant),
            None => {
                warn!(restaurant_id = %query.restaurant_id, "restaurant not found");
                Err(DomainError::new(format!(
                    "Could not find restaurant with restaurant id: {}",
                    query.restaurant_id
                ))
                .into())
            }
        }
    }

    fn save_order(&self, order: &Order) -> Result<Order, ApplicationError> {
        self.orders.save(order).map_err(|err| {
            error!(error = %err, "could not save order");
            ApplicationError::from(DomainError::new("Could not save order!"))
        })
    }
}
