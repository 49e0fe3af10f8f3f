//! Cart route handlers.
//!
//! Prices always come from the catalog; the browser only names a product.
//! Every mutation that changes the cart answers with an `HX-Trigger:
//! cart-updated` header so listening fragments can refresh the badge.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::State,
    http::Uri,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use farah_core::ProductId;
use farah_core::cart::{CartChange, LineItem, LineRef};
use farah_core::whatsapp::PaymentMethod;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{Layout, safe_return_path};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// Event name announced when the cart changes.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

// =============================================================================
// Views
// =============================================================================

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub index: usize,
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl CartLineView {
    pub(crate) fn list(items: &[LineItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| Self {
                index,
                product_id: item.product_id.to_string(),
                name: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.price,
                line_total: item.line_total(),
            })
            .collect()
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub layout: Layout,
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub cod_url: Option<String>,
    pub card_url: Option<String>,
}

/// Badge data returned by `GET /cart/count`.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
    pub return_to: Option<String>,
}

/// Update quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub index: usize,
    pub quantity: i64,
}

/// Remove line form data. One of the two fields must be present.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: Option<usize>,
    pub product_id: Option<String>,
}

fn after_mutation(change: CartChange, location: &str) -> Response {
    if change.changed() {
        (
            AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
            Redirect::to(location),
        )
            .into_response()
    } else {
        Redirect::to(location).into_response()
    }
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(state, visitor))]
pub async fn show(State(state): State<AppState>, visitor: Visitor, uri: Uri) -> impl IntoResponse {
    let mut session = visitor.lock().await;
    let layout = Layout::new(&mut session, &state, &uri);
    let items = session.cart.items();
    let whatsapp = state.whatsapp();

    CartTemplate {
        lines: CartLineView::list(items),
        total: session.cart.total(),
        cod_url: whatsapp.cart_url(items, Some(PaymentMethod::CashOnDelivery)),
        card_url: whatsapp.cart_url(items, Some(PaymentMethod::Card)),
        layout,
    }
}

/// Item count and total for the navbar badge.
#[instrument(skip(visitor))]
pub async fn count(visitor: Visitor) -> Json<CartCount> {
    let session = visitor.lock().await;
    Json(CartCount {
        count: session.cart.item_count(),
        total: session.cart.total(),
    })
}

/// Add a catalog product to the cart.
#[instrument(skip(state, visitor))]
pub async fn add(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product_id = ProductId::new(form.product_id.trim());
    let product = state
        .catalog()
        .fetch_by_id(&product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let quantity = form.quantity.unwrap_or(1);
    let location = safe_return_path(form.return_to.as_deref(), "/");

    let mut session = visitor.lock().await;
    let name = product.display_name(session.preferences.locale()).to_string();
    let change = session.cart.add_product(&product, &name, quantity);
    if change.changed() {
        session.flash = Some("cart.added");
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("product_id", product_id.as_str())]),
        );
    }

    Ok(after_mutation(change, &location))
}

/// Set the quantity of one line. Zero or less removes it.
#[instrument(skip(visitor))]
pub async fn update(visitor: Visitor, Form(form): Form<UpdateCartForm>) -> Response {
    let change = visitor
        .lock()
        .await
        .cart
        .set_quantity(form.index, form.quantity);
    after_mutation(change, "/cart")
}

/// Remove a line by position or by product.
#[instrument(skip(visitor))]
pub async fn remove(visitor: Visitor, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let line = match (form.index, form.product_id) {
        (Some(index), _) => LineRef::Index(index),
        (None, Some(product_id)) => LineRef::Product(ProductId::new(product_id)),
        (None, None) => {
            return Err(AppError::BadRequest(
                "index or product_id is required".to_string(),
            ));
        }
    };

    let change = visitor.lock().await.cart.remove(line);
    Ok(after_mutation(change, "/cart"))
}

/// Empty the cart.
#[instrument(skip(visitor))]
pub async fn clear(visitor: Visitor) -> Response {
    let change = visitor.lock().await.cart.clear();
    after_mutation(change, "/cart")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_after_mutation_announces_changes_only() {
        let response = after_mutation(CartChange::Changed, "/cart");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["HX-Trigger"], CART_UPDATED_EVENT);
        assert_eq!(response.headers()["location"], "/cart");

        let response = after_mutation(CartChange::Unchanged, "/");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(response.headers().get("HX-Trigger").is_none());
    }

    #[test]
    fn test_cart_count_serializes_total_as_number() {
        let json = serde_json::to_value(CartCount {
            count: 3,
            total: Decimal::new(5500, 2),
        })
        .unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["total"], 55.0);
    }
}
