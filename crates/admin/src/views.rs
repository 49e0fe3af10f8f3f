//! Display data shared by the dashboard, invoices and the CLI.

use farah_core::i18n::Translator;
use farah_core::orders::{Order, OrderLine};
use rust_decimal::Decimal;

/// Date format used on cards and invoices.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One order line for templates.
#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub line_total: Decimal,
}

impl From<&OrderLine> for OrderLineView {
    fn from(line: &OrderLine) -> Self {
        Self {
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price,
            line_total: line.line_total(),
        }
    }
}

/// An order as the merchant reads it.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: String,
    pub date: String,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub notes: Option<String>,
    pub items: Vec<OrderLineView>,
    /// Snapshot taken at submission.
    pub total: Decimal,
    pub pending: bool,
    pub status_label: String,
    pub status_class: &'static str,
}

impl OrderView {
    #[must_use]
    pub fn new(order: &Order, i18n: Translator) -> Self {
        Self {
            id: order.id.to_string(),
            date: order.date.format(DATE_FORMAT).to_string(),
            customer_name: order.customer.name.clone(),
            phone: order.customer.phone.clone(),
            address: order.customer.address.clone(),
            notes: order.notes.clone().filter(|n| !n.trim().is_empty()),
            items: order.items.iter().map(OrderLineView::from).collect(),
            total: order.total,
            pending: order.is_pending(),
            status_label: i18n.t(order.status.label_key()).to_string(),
            status_class: order.status.as_str(),
        }
    }

    /// Path of the printable invoice.
    #[must_use]
    pub fn invoice_href(&self) -> String {
        format!("/orders/{}/invoice", urlencoding::encode(&self.id))
    }

    /// Form action that marks the order delivered.
    #[must_use]
    pub fn done_action(&self) -> String {
        format!("/orders/{}/done", urlencoding::encode(&self.id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{TimeZone, Utc};
    use farah_core::orders::Customer;
    use farah_core::{Locale, OrderId, OrderStatus};

    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::new("ord-1700000000000"),
            date: Utc.with_ymd_and_hms(2026, 3, 14, 18, 5, 0).unwrap(),
            customer: Customer {
                name: "Lina".to_string(),
                phone: "0501234567".to_string(),
                address: "Nazareth".to_string(),
            },
            notes: Some("  ".to_string()),
            items: vec![OrderLine {
                name: "Dumplings – Chicken".to_string(),
                price: Decimal::from(25),
                quantity: 2,
            }],
            total: Decimal::from(50),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_order_view_formats_fields() {
        let view = OrderView::new(&order(), Translator::new(Locale::En));
        assert_eq!(view.date, "2026-03-14 18:05");
        assert_eq!(view.notes, None);
        assert_eq!(view.items[0].line_total, Decimal::from(50));
        assert!(view.pending);
        assert_eq!(view.status_label, "Pending");
        assert_eq!(view.status_class, "pending");
        assert_eq!(view.invoice_href(), "/orders/ord-1700000000000/invoice");
        assert_eq!(view.done_action(), "/orders/ord-1700000000000/done");
    }
}
