//! Dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use farah_core::i18n::Translator;
use farah_core::orders::OrderStats;
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::views::OrderView;

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub i18n: Translator,
    pub stats: OrderStats,
    /// Most recent first.
    pub orders: Vec<OrderView>,
}

/// Display the order dashboard.
///
/// The ledger is re-read on every request, so orders placed by the
/// storefront since the last load appear without a restart.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> DashboardTemplate {
    let i18n = state.translator();
    let orders = state.ledger().recent_first();

    DashboardTemplate {
        i18n,
        stats: OrderStats::from_orders(&orders),
        orders: orders
            .iter()
            .map(|order| OrderView::new(order, i18n))
            .collect(),
    }
}
