//! Checkout route handlers.
//!
//! `POST /checkout` validates under the visitor lock, then hands the order
//! to a spawned task that calls the order service and applies the answer.
//! The task finishes even if the browser disconnects, so the pipeline never
//! stays stuck in `Submitting`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use farah_core::OrderId;
use farah_core::checkout::{
    CheckoutField, CheckoutForm, CheckoutPipeline, CheckoutRejection, OrderPayload,
    REDIRECT_DELAY, SUCCESS_REDIRECT,
};
use farah_core::i18n::Translator;
use farah_core::orders::{Order, OrderService};
use rust_decimal::Decimal;
use tracing::instrument;

use super::Layout;
use super::cart::CartLineView;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Visitor;
use crate::state::{AppState, SharedVisitor};

// =============================================================================
// Templates
// =============================================================================

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub layout: Layout,
    pub lines: Vec<CartLineView>,
    pub total: Decimal,
    pub form: CheckoutForm,
    pub name_error: Option<String>,
    pub phone_error: Option<String>,
    pub address_error: Option<String>,
    /// Message shown above the submit button.
    pub submit_error: Option<String>,
    pub submitting: bool,
}

/// Shown instead of the form when the cart is empty.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_empty.html")]
pub struct CheckoutEmptyTemplate {
    pub layout: Layout,
}

/// Acknowledgment page; refreshes to the home page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_success.html")]
pub struct CheckoutSuccessTemplate {
    pub layout: Layout,
    pub order_id: String,
    pub redirect_seconds: u64,
    pub redirect_to: &'static str,
}

fn field_error(i18n: Translator, pipeline: &CheckoutPipeline, field: CheckoutField) -> Option<String> {
    pipeline.error_for(field).map(|key| i18n.t(key).to_string())
}

fn submit_error(i18n: Translator, pipeline: &CheckoutPipeline) -> Option<String> {
    if pipeline.is_submitting() {
        return Some(i18n.t("checkout.inFlight").to_string());
    }
    pipeline
        .submit_error()
        .map(|message| format!("{}: {message}", i18n.t("checkout.failed")))
}

/// Render whatever the visitor's checkout currently shows.
async fn render(
    state: &AppState,
    visitor: &SharedVisitor,
    uri: &Uri,
    form: CheckoutForm,
    status: StatusCode,
) -> Response {
    let mut guard = visitor.lock().await;
    let session = &mut *guard;
    let layout = Layout::new(session, state, uri);

    if let Some(order_id) = session.checkout.succeeded_order() {
        let order_id = order_id.to_string();
        session.checkout.acknowledge();
        return CheckoutSuccessTemplate {
            layout,
            order_id,
            redirect_seconds: REDIRECT_DELAY.as_secs(),
            redirect_to: SUCCESS_REDIRECT,
        }
        .into_response();
    }

    if session.cart.cart().is_empty() && !session.checkout.is_submitting() {
        return CheckoutEmptyTemplate { layout }.into_response();
    }

    let i18n = layout.i18n;
    let pipeline = &session.checkout;
    let template = CheckoutTemplate {
        lines: CartLineView::list(session.cart.items()),
        total: session.cart.total(),
        name_error: field_error(i18n, pipeline, CheckoutField::Name),
        phone_error: field_error(i18n, pipeline, CheckoutField::Phone),
        address_error: field_error(i18n, pipeline, CheckoutField::Address),
        submit_error: submit_error(i18n, pipeline),
        submitting: pipeline.is_submitting(),
        form,
        layout,
    };
    (status, template).into_response()
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Display the checkout page.
#[instrument(skip(state, visitor))]
pub async fn show(State(state): State<AppState>, visitor: Visitor, uri: Uri) -> Response {
    render(&state, &visitor.shared(), &uri, CheckoutForm::default(), StatusCode::OK).await
}

/// Submit the order.
///
/// Redirects to `GET /checkout` on success, where the acknowledgment is
/// shown once.
#[instrument(skip(state, visitor, form), fields(visitor_id = %visitor.id))]
pub async fn submit(
    State(state): State<AppState>,
    visitor: Visitor,
    uri: Uri,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    let shared = visitor.shared();

    let begun = {
        let mut guard = shared.lock().await;
        let session = &mut *guard;
        session.checkout.begin(&form, session.cart.cart(), Utc::now())
    };

    let payload = match begun {
        Ok(payload) => payload,
        Err(CheckoutRejection::EmptyCart) => return Ok(Redirect::to("/checkout").into_response()),
        Err(CheckoutRejection::Invalid(_)) => {
            return Ok(render(&state, &shared, &uri, form, StatusCode::UNPROCESSABLE_ENTITY).await);
        }
        Err(CheckoutRejection::InFlight) => {
            return Ok(render(&state, &shared, &uri, form, StatusCode::CONFLICT).await);
        }
        Err(CheckoutRejection::Service(e)) => return Err(AppError::Internal(e.to_string())),
    };

    add_breadcrumb("checkout", "Submitting order", None);
    let task = tokio::spawn(place_order(state.clone(), visitor.shared(), payload));
    let outcome = task
        .await
        .map_err(|e| AppError::Internal(format!("checkout task failed: {e}")))?;

    match outcome {
        Ok(_) => Ok(Redirect::to("/checkout").into_response()),
        Err(_) => Ok(render(&state, &shared, &uri, form, StatusCode::BAD_GATEWAY).await),
    }
}

/// Call the order service, record the order for the merchant, then apply the
/// answer to the visitor's checkout and cart.
async fn place_order(
    state: AppState,
    visitor: SharedVisitor,
    payload: OrderPayload,
) -> std::result::Result<OrderId, CheckoutRejection> {
    let outcome = state.orders().submit(&payload).await;
    if let Ok(confirmation) = &outcome {
        state
            .ledger()
            .record(Order::from_submission(confirmation, &payload));
    }

    let mut guard = visitor.lock().await;
    let session = &mut *guard;
    session.checkout.finish(outcome, &mut session.cart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use farah_core::Locale;
    use farah_core::cart::CartStore;
    use farah_core::kv::MemoryStore;
    use farah_core::orders::OrderServiceError;

    #[test]
    fn test_errors_are_translated() {
        let mut pipeline = CheckoutPipeline::new();
        let store = MemoryStore::new();
        let mut cart = CartStore::load(&store);
        cart.add("1".into(), "Dumplings", Decimal::from(25), 1);

        let rejected = pipeline.begin(&CheckoutForm::default(), cart.cart(), Utc::now());
        assert!(matches!(rejected, Err(CheckoutRejection::Invalid(_))));

        let i18n = Translator::new(Locale::En);
        assert_eq!(
            field_error(i18n, &pipeline, CheckoutField::Name).as_deref(),
            Some("Please enter your name")
        );
        assert_eq!(submit_error(i18n, &pipeline), None);
    }

    #[test]
    fn test_submit_error_includes_service_message() {
        let mut pipeline = CheckoutPipeline::new();
        let store = MemoryStore::new();
        let mut cart = CartStore::load(&store);
        cart.add("1".into(), "Dumplings", Decimal::from(25), 1);

        let form = CheckoutForm {
            name: "Farah".to_string(),
            phone: "0501234567".to_string(),
            address: "Haifa".to_string(),
            notes: String::new(),
        };
        let _payload = pipeline.begin(&form, cart.cart(), Utc::now());
        assert_eq!(
            submit_error(Translator::new(Locale::En), &pipeline).as_deref(),
            Some("Your order is already being sent. Please wait a moment.")
        );

        let _ = pipeline.finish(
            Err(OrderServiceError::Network("timed out".to_string())),
            &mut cart,
        );
        assert_eq!(
            submit_error(Translator::new(Locale::En), &pipeline).as_deref(),
            Some("Something went wrong: Network error: timed out")
        );
    }
}
