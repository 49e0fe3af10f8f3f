//! Product detail route handler.
//!
//! Only the dumpling boxes have a detail page. Deep links to any other slug
//! go back to the home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
};
use farah_core::Locale;
use farah_core::catalog::{Product, has_detail_page};
use farah_core::whatsapp::PaymentMethod;
use tracing::instrument;

use super::{Layout, render_not_found};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// Product display data for the detail page.
pub struct ProductDetailView {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub hero_image: Option<String>,
    /// Translated "what's inside" list.
    pub details: Vec<String>,
    pub card_url: String,
    pub cod_url: String,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub layout: Layout,
    pub product: ProductDetailView,
}

impl ProductDetailView {
    fn new(product: &Product, layout: &Layout, state: &AppState) -> Self {
        let i18n = layout.i18n;
        // The shop reads WhatsApp orders in English.
        let order_name = product.display_name(Locale::En);
        Self {
            id: product.id.to_string(),
            slug: product.slug.clone(),
            name: product.display_name(i18n.locale()).to_string(),
            description: product.display_description(i18n.locale()).to_string(),
            price: product.price().display(),
            hero_image: product.hero().map(ToString::to_string),
            details: product
                .details
                .iter()
                .map(|detail| i18n.t(&format!("product.{detail}")).to_string())
                .collect(),
            card_url: state
                .whatsapp()
                .product_url(order_name, product.price, PaymentMethod::Card),
            cod_url: state
                .whatsapp()
                .product_url(order_name, product.price, PaymentMethod::CashOnDelivery),
        }
    }
}

/// Display the product detail page for `slug`.
#[instrument(skip(state, visitor, uri))]
pub async fn show(
    State(state): State<AppState>,
    visitor: Visitor,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    if !has_detail_page(&slug) {
        return Redirect::to("/").into_response();
    }

    let Some(product) = state.catalog().fetch_by_slug(&slug).await else {
        tracing::debug!(slug = %slug, "Unknown product slug");
        return render_not_found(&state, &visitor, &uri).await;
    };

    let mut session = visitor.lock().await;
    let layout = Layout::new(&mut session, &state, &uri);
    drop(session);

    ProductTemplate {
        product: ProductDetailView::new(&product, &layout, &state),
        layout,
    }
    .into_response()
}
