//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Home page (hero, filters, product grid)
//! GET  /product/{slug}           - Product detail page
//!
//! # Cart
//! GET  /cart                     - Cart page
//! GET  /cart/count               - Badge data as JSON
//! POST /cart/add                 - Add a product (redirects to return_to)
//! POST /cart/update              - Set a line's quantity
//! POST /cart/remove              - Remove a line
//! POST /cart/clear               - Empty the cart
//!
//! # Checkout
//! GET  /checkout                 - Form, empty notice or acknowledgment
//! POST /checkout                 - Submit the order
//!
//! # Preferences
//! POST /preferences/language     - Set or toggle the display language
//! POST /preferences/cookies      - Record the cookie notice decision
//! ```

pub mod cart;
pub mod checkout;
pub mod home;
pub mod preferences;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use farah_core::i18n::Translator;
use rust_decimal::Decimal;

use crate::filters;
use crate::middleware::Visitor;
use crate::state::{AppState, VisitorSession};

/// Page chrome shared by every full-page template.
pub struct Layout {
    pub i18n: Translator,
    pub cart_count: u32,
    pub cart_total: Decimal,
    /// Already translated.
    pub flash: Option<String>,
    pub show_cookie_banner: bool,
    /// Path and query of the current page, posted back by the navbar forms.
    pub return_to: String,
    pub contact_url: String,
    /// Name of the language the toggle switches to.
    pub switch_label: &'static str,
}

impl Layout {
    /// Build the chrome for one render, consuming the visitor's flash.
    pub fn new(session: &mut VisitorSession, state: &AppState, uri: &Uri) -> Self {
        let i18n = session.translator();
        let flash = session.take_flash().map(|key| i18n.t(key).to_string());
        Self {
            i18n,
            cart_count: session.cart.item_count(),
            cart_total: session.cart.total(),
            flash,
            show_cookie_banner: session.preferences.needs_consent(),
            return_to: uri
                .path_and_query()
                .map_or_else(|| "/".to_string(), ToString::to_string),
            contact_url: state.whatsapp().contact_url(),
            switch_label: i18n.locale().toggled().native_name(),
        }
    }
}

/// Only same-site absolute paths are followed after a form post.
#[must_use]
pub fn safe_return_path(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_string()
        }
        _ => fallback.to_string(),
    }
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
    pub message: String,
}

/// Render the 404 page for the current visitor.
pub async fn render_not_found(state: &AppState, visitor: &Visitor, uri: &Uri) -> Response {
    let mut session = visitor.lock().await;
    let layout = Layout::new(&mut session, state, uri);
    let message = layout.i18n.t("error.notFound").to_string();
    (StatusCode::NOT_FOUND, NotFoundTemplate { layout, message }).into_response()
}

/// Fallback for unmatched paths.
pub async fn not_found(
    axum::extract::State(state): axum::extract::State<AppState>,
    visitor: Visitor,
    uri: Uri,
) -> Response {
    render_not_found(&state, &visitor, &uri).await
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create the preference routes router.
pub fn preference_routes() -> Router<AppState> {
    Router::new()
        .route("/language", post(preferences::language))
        .route("/cookies", post(preferences::cookies))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Deep links
        .route("/product/{slug}", get(products::show))
        .nest("/cart", cart_routes())
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .nest("/preferences", preference_routes())
        .fallback(not_found)
}
