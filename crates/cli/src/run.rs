use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use foodorder_application::{
    CreateOrderCommand, OrderApplicationService, OrderLifecycleSaga, OrderRepository,
    PaymentResponse, RestaurantApprovalResponse, TrackOrderQuery, TrackOrderResponse,
};
use foodorder_core::{Clock, IdGenerator, SystemClock, TrackingId, UuidV7Generator};
use foodorder_events::InMemoryEventPublisher;
use foodorder_infra::{Fixtures, InMemoryOrderRepository};
use foodorder_ordering::OrderEvent;

use crate::config::{Cli, Command, Stage};

const RESTAURANT_REJECTION: &str = "Restaurant rejected the order";
const PAYMENT_REFUNDED: &str = "Payment refunded";

/// Execute the parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let fixtures = load_fixtures(&cli.fixtures)?;

    match &cli.command {
        Command::CreateOrder { command, until } => {
            let command = load_command(command)?;
            let tracked = create_order(&fixtures, &command, *until)?;
            serde_json::to_string_pretty(&tracked).context("serializing order status")
        }
    }
}

/// Create the order, take it to `until`, and report where it ended up.
pub fn create_order(
    fixtures: &Fixtures,
    command: &CreateOrderCommand,
    until: Stage,
) -> Result<TrackOrderResponse> {
    let orders = Arc::new(InMemoryOrderRepository::new());
    let publisher = Arc::new(InMemoryEventPublisher::<OrderEvent>::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let ids: Arc<dyn IdGenerator> = Arc::new(UuidV7Generator);

    let service = OrderApplicationService::new(
        orders.clone(),
        Arc::new(fixtures.customer_repository()),
        Arc::new(fixtures.restaurant_repository()),
        Arc::clone(&publisher),
        Arc::clone(&clock),
        ids,
    );
    let saga = OrderLifecycleSaga::new(orders.clone(), Arc::clone(&publisher), clock);

    let created = service.create_order(command).context("creating order")?;
    let order_id: Uuid = orders
        .find_by_tracking_id(TrackingId::from_uuid(created.order_tracking_id))?
        .and_then(|order| order.id_typed())
        .context("created order is not stored")?
        .into();

    let payment = |failure_messages: Vec<String>| PaymentResponse {
        order_id,
        failure_messages,
    };
    let approval = |failure_messages: Vec<String>| RestaurantApprovalResponse {
        order_id,
        failure_messages,
    };

    if until != Stage::Pending {
        saga.process_payment(&payment(vec![]))
            .context("processing payment")?;
    }
    match until {
        Stage::Pending | Stage::Paid => {}
        Stage::Approved => {
            saga.process_approval(&approval(vec![]))
                .context("processing approval")?;
        }
        Stage::Cancelled => {
            saga.rollback_approval(&approval(vec![RESTAURANT_REJECTION.to_string()]))
                .context("rejecting order")?;
            saga.rollback_payment(&payment(vec![PAYMENT_REFUNDED.to_string()]))
                .context("rolling back payment")?;
        }
    }

    info!(
        tracking_id = %created.order_tracking_id,
        events = publisher.published().len(),
        "order lifecycle finished"
    );

    service
        .track_order(&TrackOrderQuery {
            order_tracking_id: created.order_tracking_id,
        })
        .context("tracking order")
}

fn load_fixtures(path: &Path) -> Result<Fixtures> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading fixtures from {}", path.display()))?;
    Fixtures::from_json(&raw).with_context(|| format!("parsing fixtures {}", path.display()))
}

fn load_command(path: &Path) -> Result<CreateOrderCommand> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading order command from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing order command {}", path.display()))
}
