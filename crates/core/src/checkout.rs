//! Checkout: form validation, payload assembly and submission state.
//!
//! [`CheckoutPipeline`] is a small state machine:
//!
//! ```text
//! Editing ──begin──▶ Validating ──ok──▶ Submitting ──finish(Ok)──▶ Succeeded
//!    ▲                    │                  │                        │
//!    └──── invalid ───────┘   finish(Err) ───┘        acknowledge ────┘
//! ```
//!
//! `begin` and `finish` are split so a server can release its per-visitor
//! lock while the order request is in flight; a second `begin` during that
//! window is rejected with [`CheckoutRejection::InFlight`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::cart::{Cart, CartStore};
use crate::kv::KeyValueStore;
use crate::orders::{OrderConfirmation, OrderService, OrderServiceError};
use crate::types::{OrderId, ProductId};

/// How long the success acknowledgment stays up before returning home.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Where the browser lands after a successful order.
pub const SUCCESS_REDIRECT: &str = "/?ordered=1";

/// Raw checkout form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

/// Required checkout fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutField {
    Name,
    Phone,
    Address,
}

impl CheckoutField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Address => "address",
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: CheckoutField,
    /// Translation key of the message to show next to the field.
    pub message_key: &'static str,
}

/// One line of the submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayloadItem {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

/// What is sent to the order service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub items: Vec<OrderPayloadItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl OrderPayload {
    /// Snapshot a trimmed form and the cart at `now`.
    #[must_use]
    pub fn from_cart(form: &CheckoutForm, cart: &Cart, now: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            notes: form.notes.trim().to_string(),
            items: cart
                .items()
                .iter()
                .map(|line| OrderPayloadItem {
                    product_id: line.product_id.clone(),
                    name: line.name.clone(),
                    price: line.price,
                    quantity: line.quantity,
                })
                .collect(),
            total: cart.total(),
            timestamp: now,
        }
    }
}

/// Where the pipeline currently is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    #[default]
    Editing,
    Validating,
    Submitting,
    Succeeded {
        order_id: OrderId,
    },
}

/// Why `begin` refused to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutRejection {
    #[error("cart is empty")]
    EmptyCart,

    #[error("{} required field(s) missing", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("an order is already being submitted")]
    InFlight,

    #[error(transparent)]
    Service(#[from] OrderServiceError),
}

/// Check required fields after trimming. One error per blank field.
#[must_use]
pub fn validate(form: &CheckoutForm) -> Vec<FieldError> {
    [
        (CheckoutField::Name, &form.name, "checkout.nameRequired"),
        (CheckoutField::Phone, &form.phone, "checkout.phoneRequired"),
        (CheckoutField::Address, &form.address, "checkout.addressRequired"),
    ]
    .into_iter()
    .filter(|(_, value, _)| value.trim().is_empty())
    .map(|(field, _, message_key)| FieldError { field, message_key })
    .collect()
}

/// Per-visitor checkout state machine.
#[derive(Debug, Clone, Default)]
pub struct CheckoutPipeline {
    state: CheckoutState,
    field_errors: Vec<FieldError>,
    submit_error: Option<String>,
}

impl CheckoutPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &CheckoutState {
        &self.state
    }

    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Message key for `field`, if it failed validation.
    #[must_use]
    pub fn error_for(&self, field: CheckoutField) -> Option<&'static str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message_key)
    }

    /// Human-readable message from the last failed submission.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, CheckoutState::Submitting)
    }

    /// Id of the order just placed, while the acknowledgment is showing.
    #[must_use]
    pub const fn succeeded_order(&self) -> Option<&OrderId> {
        match &self.state {
            CheckoutState::Succeeded { order_id } => Some(order_id),
            _ => None,
        }
    }

    /// Validate and snapshot the order, moving to `Submitting`.
    ///
    /// # Errors
    ///
    /// - [`CheckoutRejection::InFlight`] while a submission is outstanding
    ///   (state untouched)
    /// - [`CheckoutRejection::EmptyCart`] or [`CheckoutRejection::Invalid`],
    ///   after which the pipeline is back in `Editing`
    pub fn begin(
        &mut self,
        form: &CheckoutForm,
        cart: &Cart,
        now: DateTime<Utc>,
    ) -> Result<OrderPayload, CheckoutRejection> {
        if self.is_submitting() {
            return Err(CheckoutRejection::InFlight);
        }

        self.state = CheckoutState::Validating;
        self.submit_error = None;

        if cart.is_empty() {
            self.field_errors.clear();
            self.state = CheckoutState::Editing;
            return Err(CheckoutRejection::EmptyCart);
        }

        let errors = validate(form);
        if !errors.is_empty() {
            self.field_errors.clone_from(&errors);
            self.state = CheckoutState::Editing;
            return Err(CheckoutRejection::Invalid(errors));
        }

        self.field_errors.clear();
        self.state = CheckoutState::Submitting;
        Ok(OrderPayload::from_cart(form, cart, now))
    }

    /// Apply the order service's answer.
    ///
    /// On success the cart is cleared and the pipeline shows the
    /// acknowledgment. On failure the cart is left as it was and the
    /// service's message is kept for display.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutRejection::Service`] carrying the service error.
    pub fn finish<S: KeyValueStore>(
        &mut self,
        outcome: Result<OrderConfirmation, OrderServiceError>,
        cart: &mut CartStore<S>,
    ) -> Result<OrderId, CheckoutRejection> {
        match outcome {
            Ok(confirmation) => {
                cart.clear();
                info!(order_id = %confirmation.order_id, "Order submitted");
                self.state = CheckoutState::Succeeded {
                    order_id: confirmation.order_id.clone(),
                };
                Ok(confirmation.order_id)
            }
            Err(e) => {
                warn!(error = %e, "Order submission failed");
                self.submit_error = Some(e.to_string());
                self.state = CheckoutState::Editing;
                Err(e.into())
            }
        }
    }

    /// Leave the success acknowledgment.
    pub fn acknowledge(&mut self) {
        if matches!(self.state, CheckoutState::Succeeded { .. }) {
            self.state = CheckoutState::Editing;
        }
    }

    /// Run a whole submission when the caller owns the pipeline and cart
    /// for its duration.
    ///
    /// # Errors
    ///
    /// Any [`CheckoutRejection`] from `begin` or the service.
    pub async fn submit<S, O>(
        &mut self,
        form: &CheckoutForm,
        cart: &mut CartStore<S>,
        service: &O,
    ) -> Result<OrderId, CheckoutRejection>
    where
        S: KeyValueStore,
        O: OrderService,
    {
        let payload = self.begin(form, cart.cart(), Utc::now())?;
        let outcome = service.submit(&payload).await;
        self.finish(outcome, cart)
    }
}
