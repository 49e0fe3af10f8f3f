//! Pre-filled WhatsApp conversations for ordering and inquiries.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::cart::LineItem;
use crate::types::format_amount;

/// The shop's WhatsApp number in international format, digits only.
pub const DEFAULT_NUMBER: &str = "972501234567";

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CashOnDelivery,
    Card,
}

impl PaymentMethod {
    /// Wording used in cart messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on delivery",
            Self::Card => "Visa / Mastercard",
        }
    }

    /// Wording used in single-product messages.
    #[must_use]
    pub const fn product_label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on delivery",
            Self::Card => "Pay by Visa/Mastercard",
        }
    }
}

/// Builds `wa.me` links for one business number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
}

impl Default for WhatsAppLink {
    fn default() -> Self {
        Self::new(DEFAULT_NUMBER)
    }
}

impl WhatsAppLink {
    /// Non-digits (spaces, `+`, dashes) are stripped from `number`.
    #[must_use]
    pub fn new(number: &str) -> Self {
        Self {
            number: number.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Plain chat link, used for general inquiries.
    #[must_use]
    pub fn contact_url(&self) -> String {
        format!("https://wa.me/{}", self.number)
    }

    /// Chat link with `text` pre-filled.
    #[must_use]
    pub fn message_url(&self, text: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.number,
            urlencoding::encode(text)
        )
    }

    /// Link ordering the whole cart, or `None` for an empty cart.
    #[must_use]
    pub fn cart_url(&self, items: &[LineItem], payment: Option<PaymentMethod>) -> Option<String> {
        cart_message(items, payment).map(|text| self.message_url(&text))
    }

    /// Link ordering a single product.
    #[must_use]
    pub fn product_url(&self, name: &str, price: Decimal, payment: PaymentMethod) -> String {
        self.message_url(&product_message(name, price, payment))
    }
}

/// Order text for a cart: a header, one line per item, the total and
/// optionally the payment method.
#[must_use]
pub fn cart_message(items: &[LineItem], payment: Option<PaymentMethod>) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let mut text = String::from("Hi, I want to order:");
    let mut total = Decimal::ZERO;
    for item in items {
        let line_total = item.line_total();
        total += line_total;
        let _ = write!(
            text,
            "\n- {} x{} ({} ₪)",
            item.name,
            item.quantity,
            format_amount(line_total)
        );
    }
    let _ = write!(text, "\nTotal: {} ₪", format_amount(total));
    if let Some(payment) = payment {
        let _ = write!(text, "\nPayment: {}", payment.label());
    }
    Some(text)
}

#[must_use]
pub fn product_message(name: &str, price: Decimal, payment: PaymentMethod) -> String {
    format!(
        "Hi, I want to order {name} ({}₪) - {}",
        format_amount(price),
        payment.product_label()
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ProductId;

    fn line(id: &str, name: &str, price: i64, quantity: u32) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
            quantity,
        }
    }

    #[test]
    fn test_cart_message() {
        let items = vec![
            line("1", "Dumplings – Chicken", 25, 1),
            line("3", "Teriyaki sauce", 2, 3),
        ];
        let text = cart_message(&items, Some(PaymentMethod::Card)).unwrap();
        assert_eq!(
            text,
            "Hi, I want to order:\n- Dumplings – Chicken x1 (25 ₪)\n- Teriyaki sauce x3 (6 ₪)\nTotal: 31 ₪\nPayment: Visa / Mastercard"
        );
    }

    #[test]
    fn test_empty_cart_has_no_link() {
        assert!(WhatsAppLink::default().cart_url(&[], None).is_none());
    }

    #[test]
    fn test_product_url_is_encoded() {
        let link = WhatsAppLink::new("+972 50-123-4567");
        assert_eq!(link.number(), "972501234567");

        let url = link.product_url("Soya sauce", Decimal::from(2), PaymentMethod::CashOnDelivery);
        assert!(url.starts_with("https://wa.me/972501234567?text="));
        assert!(url.contains("Soya%20sauce"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_product_message() {
        assert_eq!(
            product_message("Chop sticks", Decimal::from(1), PaymentMethod::Card),
            "Hi, I want to order Chop sticks (1₪) - Pay by Visa/Mastercard"
        );
    }
}
