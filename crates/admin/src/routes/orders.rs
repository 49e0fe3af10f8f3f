//! Order actions and invoices.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use farah_core::OrderId;
use farah_core::i18n::Translator;
use farah_core::orders::Order;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::views::OrderView;

/// Stand-alone printable invoice.
#[derive(Template, WebTemplate)]
#[template(path = "orders/invoice.html")]
pub struct InvoiceTemplate {
    pub i18n: Translator,
    pub order: OrderView,
    /// Load the script that opens the print dialog.
    pub auto_print: bool,
}

impl InvoiceTemplate {
    /// Build an invoice from the order snapshot alone.
    #[must_use]
    pub fn new(order: &Order, i18n: Translator, auto_print: bool) -> Self {
        Self {
            i18n,
            order: OrderView::new(order, i18n),
            auto_print,
        }
    }
}

/// Mark an order delivered. Unknown ids change nothing.
#[instrument(skip(state))]
pub async fn mark_done(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    let id = OrderId::new(id);
    if !state.ledger().mark_done(&id) {
        tracing::debug!(order_id = %id, "Mark done: unknown order id");
    }
    Redirect::to("/")
}

/// Display the printable invoice for one order.
#[instrument(skip(state))]
pub async fn invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<InvoiceTemplate> {
    let id = OrderId::new(id);
    let order = state
        .ledger()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    Ok(InvoiceTemplate::new(&order, state.translator(), true))
}
