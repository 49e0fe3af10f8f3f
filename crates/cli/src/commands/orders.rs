//! Order management commands.
//!
//! These read and write the same `farah-orders` record the storefront
//! appends to and the dashboard displays.
//!
//! # Environment Variables
//!
//! - `FARAH_DATA_DIR` - Data directory (overridden by `--data-dir`)

use std::io::Write;
use std::path::Path;

use askama::Template;
use farah_admin::routes::orders::InvoiceTemplate;
use farah_admin::views::DATE_FORMAT;
use farah_core::i18n::Translator;
use farah_core::kv::{FileStore, StoreError};
use farah_core::orders::{Order, OrderLedger};
use farah_core::{Locale, OrderId, format_amount};
use thiserror::Error;

/// Errors that can occur during order commands.
#[derive(Debug, Error)]
pub enum OrdersError {
    /// The data directory could not be opened.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// No order has this id.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Unsupported invoice language.
    #[error("Invalid language: {0}. Valid languages: en, ar")]
    InvalidLocale(String),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open the order ledger in `data_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn open_ledger(data_dir: &Path) -> Result<OrderLedger<FileStore>, OrdersError> {
    tracing::debug!("Opening data directory {}", data_dir.display());
    Ok(OrderLedger::new(FileStore::open(data_dir)?))
}

/// One line per order, for terminal output.
fn summary_line(order: &Order) -> String {
    let status = if order.is_pending() { "pending" } else { "done" };
    let items: u32 = order.items.iter().map(|item| item.quantity).sum();
    format!(
        "{id}  {date}  {status:<7}  {total:>8} ₪  {items} item(s)  {name} ({phone})",
        id = order.id,
        date = order.date.format(DATE_FORMAT),
        total = format_amount(order.total),
        name = order.customer.name,
        phone = order.customer.phone,
    )
}

/// Print stats and orders, most recent first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list<S: farah_core::kv::KeyValueStore>(
    ledger: &OrderLedger<S>,
    pending_only: bool,
    out: &mut impl Write,
) -> Result<(), OrdersError> {
    let orders = ledger.recent_first();
    let stats = farah_core::orders::OrderStats::from_orders(&orders);
    writeln!(
        out,
        "{} orders: {} pending, {} done",
        stats.total, stats.pending, stats.done
    )?;

    for order in orders.iter().filter(|o| !pending_only || o.is_pending()) {
        writeln!(out, "{}", summary_line(order))?;
    }
    Ok(())
}

/// Mark an order delivered.
///
/// # Errors
///
/// Returns `NotFound` if no order has this id.
pub fn mark_done<S: farah_core::kv::KeyValueStore>(
    ledger: &OrderLedger<S>,
    id: &str,
) -> Result<(), OrdersError> {
    if ledger.mark_done(&OrderId::new(id)) {
        tracing::info!("Order {} marked delivered", id);
        Ok(())
    } else {
        Err(OrdersError::NotFound(id.to_string()))
    }
}

/// Render an order's invoice without the auto-print script.
///
/// # Errors
///
/// Returns an error for an unknown id or language, or if rendering fails.
pub fn invoice<S: farah_core::kv::KeyValueStore>(
    ledger: &OrderLedger<S>,
    id: &str,
    lang: &str,
) -> Result<String, OrdersError> {
    let locale: Locale = lang
        .parse()
        .map_err(|_| OrdersError::InvalidLocale(lang.to_string()))?;
    let order = ledger
        .get(&OrderId::new(id))
        .ok_or_else(|| OrdersError::NotFound(id.to_string()))?;

    Ok(InvoiceTemplate::new(&order, Translator::new(locale), false).render()?)
}

/// Write `text` followed by a newline.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_all(out: &mut impl Write, text: &str) -> Result<(), OrdersError> {
    writeln!(out, "{text}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use farah_core::OrderStatus;
    use farah_core::kv::MemoryStore;
    use farah_core::orders::{Customer, OrderLine};
    use rust_decimal::Decimal;

    use super::*;

    fn order(id: &str, minute: u32) -> Order {
        Order {
            id: OrderId::new(id),
            date: Utc.with_ymd_and_hms(2026, 5, 1, 12, minute, 0).unwrap(),
            customer: Customer {
                name: "Nour".to_string(),
                phone: "0541112222".to_string(),
                address: "Haifa".to_string(),
            },
            notes: None,
            items: vec![OrderLine {
                name: "Sweet Chili Sauce".to_string(),
                price: Decimal::new(1250, 2),
                quantity: 2,
            }],
            total: Decimal::from(25),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_list_recent_first_with_filter() {
        let store = MemoryStore::new();
        let ledger = OrderLedger::new(&store);
        ledger.record(order("ord-1", 0));
        ledger.record(order("ord-2", 5));
        assert!(ledger.mark_done(&OrderId::new("ord-1")));

        let mut out = Vec::new();
        list(&ledger, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "2 orders: 1 pending, 1 done");
        assert!(lines[1].starts_with("ord-2  2026-05-01 12:05  pending"));
        assert!(lines[2].starts_with("ord-1"));

        let mut out = Vec::new();
        list(&ledger, true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }

    #[test]
    fn test_mark_done_unknown_id() {
        let store = MemoryStore::new();
        let ledger = OrderLedger::new(&store);
        assert!(matches!(
            mark_done(&ledger, "ord-missing"),
            Err(OrdersError::NotFound(_))
        ));
    }

    #[test]
    fn test_invoice_renders_without_print_script() {
        let store = MemoryStore::new();
        let ledger = OrderLedger::new(&store);
        ledger.record(order("ord-7", 0));

        let html = invoice(&ledger, "ord-7", "en").unwrap();
        assert!(html.contains("Sweet Chili Sauce"));
        assert!(html.contains("12.5 ₪"));
        assert!(html.contains("dir=\"ltr\""));
        assert!(!html.contains("print.js"));

        assert!(matches!(
            invoice(&ledger, "ord-7", "fr"),
            Err(OrdersError::InvalidLocale(_))
        ));
    }
}
