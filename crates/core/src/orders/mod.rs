//! Submitted orders and the merchant's ledger of them.

mod service;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::checkout::OrderPayload;
use crate::kv::{self, KeyValueStore, keys};
use crate::types::{OrderId, OrderStatus};

pub use service::{OrderConfirmation, OrderService, OrderServiceError, StubOrderService};

/// Who the order is for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A product line as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub name: String,
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl OrderLine {
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A submitted order as the merchant sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub customer: Customer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    /// Total captured at submission; never recomputed.
    pub total: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    /// Build the ledger entry for an accepted submission.
    #[must_use]
    pub fn from_submission(confirmation: &OrderConfirmation, payload: &OrderPayload) -> Self {
        let notes = payload.notes.trim();
        Self {
            id: confirmation.order_id.clone(),
            date: payload.timestamp,
            customer: Customer {
                name: payload.name.clone(),
                phone: payload.phone.clone(),
                address: payload.address.clone(),
            },
            notes: (!notes.is_empty()).then(|| notes.to_string()),
            items: payload
                .items
                .iter()
                .map(|item| OrderLine {
                    name: item.name.clone(),
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
            total: payload.total,
            status: OrderStatus::Pending,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.status.is_pending()
    }
}

/// Counts shown above the order list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

impl OrderStats {
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        let pending = orders.iter().filter(|o| o.is_pending()).count();
        Self {
            total: orders.len(),
            pending,
            done: orders.len() - pending,
        }
    }
}

/// The persisted order list.
///
/// Reads always go back to the store so the dashboard sees orders written by
/// another process. Writes are single store updates, so ledgers in separate
/// processes over the same data directory never drop each other's orders.
#[derive(Debug)]
pub struct OrderLedger<S> {
    store: S,
}

impl<S: KeyValueStore> OrderLedger<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All orders in insertion order. Missing or corrupt data reads as empty.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        kv::load_json(&self.store, keys::ORDERS).unwrap_or_default()
    }

    /// All orders, most recently added first.
    #[must_use]
    pub fn recent_first(&self) -> Vec<Order> {
        let mut orders = self.orders();
        orders.reverse();
        orders
    }

    #[must_use]
    pub fn stats(&self) -> OrderStats {
        OrderStats::from_orders(&self.orders())
    }

    #[must_use]
    pub fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders().into_iter().find(|order| &order.id == id)
    }

    /// Append an order. Storage failures are logged and swallowed.
    pub fn record(&self, order: Order) {
        let id = order.id.clone();
        let appended = kv::update_json(&self.store, keys::ORDERS, |orders: &mut Vec<Order>| {
            orders.push(order);
            true
        });

        match appended {
            Ok(_) => info!(order_id = %id, "Recorded order"),
            Err(e) => warn!(order_id = %id, error = %e, "Failed to persist order"),
        }
    }

    /// Mark an order delivered.
    ///
    /// Returns `false` when no order has this id, in which case nothing is
    /// written. Marking an already-done order again is harmless.
    pub fn mark_done(&self, id: &OrderId) -> bool {
        let mut found = false;
        let updated = kv::update_json(&self.store, keys::ORDERS, |orders: &mut Vec<Order>| {
            if let Some(order) = orders.iter_mut().find(|order| &order.id == id) {
                order.status = OrderStatus::Done;
                found = true;
            }
            found
        });

        if let Err(e) = updated {
            warn!(order_id = %id, error = %e, "Failed to persist order status");
        }
        found
    }
}
