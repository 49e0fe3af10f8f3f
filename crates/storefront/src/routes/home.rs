//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::Uri,
    response::IntoResponse,
};
use farah_core::catalog::{Product, ProductSort, filter_by_category, sort_products};
use farah_core::i18n::Translator;
use farah_core::whatsapp::PaymentMethod;
use farah_core::{Category, Locale};
use serde::Deserialize;
use tracing::instrument;

use super::Layout;
use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;

/// Query parameters accepted by the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    /// Set to `1` after a successful checkout.
    pub ordered: Option<String>,
}

// =============================================================================
// Views
// =============================================================================

/// Product card data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: Option<String>,
    pub badge: String,
    /// Detail page link, for products that have one.
    pub href: Option<String>,
    pub cod_url: String,
}

impl ProductCardView {
    fn new(product: &Product, i18n: Translator, state: &AppState) -> Self {
        let locale = i18n.locale();
        Self {
            id: product.id.to_string(),
            name: product.display_name(locale).to_string(),
            description: product.display_description(locale).to_string(),
            price: product.price().display(),
            image: product.image.clone(),
            badge: i18n.t(badge_key(product.category)).to_string(),
            href: product
                .has_detail_page()
                .then(|| format!("/product/{}", product.slug)),
            cod_url: state.whatsapp().product_url(
                product.display_name(Locale::En),
                product.price,
                PaymentMethod::CashOnDelivery,
            ),
        }
    }
}

/// Translation key for a product card's badge.
const fn badge_key(category: Category) -> &'static str {
    match category {
        Category::Boxes => "product.badge",
        Category::Sauces => "product.badgeSauce",
        Category::Chopsticks => "product.badgeAccessory",
    }
}

/// A category filter link.
pub struct FilterLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// An option in the sort selector.
pub struct SortOption {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub products: Vec<ProductCardView>,
    pub category_links: Vec<FilterLink>,
    pub sorts: Vec<SortOption>,
    /// Slug of the active category, kept when re-sorting.
    pub category: Option<&'static str>,
    /// Label of the active category, for the empty-state message.
    pub category_label: Option<String>,
    pub show_order_placed: bool,
}

fn category_href(category: Option<Category>, sort: ProductSort) -> String {
    let mut params = Vec::new();
    if let Some(category) = category {
        params.push(format!("category={}", category.slug()));
    }
    if sort != ProductSort::Rank {
        params.push(format!("sort={}", sort.as_str()));
    }
    if params.is_empty() {
        "/#shop".to_string()
    } else {
        format!("/?{}#shop", params.join("&"))
    }
}

fn filter_links(i18n: Translator, active: Option<Category>, sort: ProductSort) -> Vec<FilterLink> {
    std::iter::once(None)
        .chain(Category::ALL.into_iter().map(Some))
        .map(|category| FilterLink {
            label: i18n
                .t(category.map_or("filter.all", Category::label_key))
                .to_string(),
            href: category_href(category, sort),
            active: category == active,
        })
        .collect()
}

fn sort_options(i18n: Translator, active: ProductSort) -> Vec<SortOption> {
    ProductSort::ALL
        .into_iter()
        .map(|sort| SortOption {
            value: sort.as_str(),
            label: i18n.t(sort.label_key()).to_string(),
            selected: sort == active,
        })
        .collect()
}

/// Display the home page.
#[instrument(skip(state, visitor))]
pub async fn home(
    State(state): State<AppState>,
    visitor: Visitor,
    uri: Uri,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    let category = query.category.as_deref().and_then(Category::from_raw);
    let sort = query.sort.as_deref().map_or(ProductSort::Rank, ProductSort::parse);

    let mut products = filter_by_category(state.catalog().fetch_all().await, category);
    sort_products(&mut products, sort);

    let mut session = visitor.lock().await;
    let layout = Layout::new(&mut session, &state, &uri);
    drop(session);

    let i18n = layout.i18n;
    HomeTemplate {
        products: products
            .iter()
            .map(|product| ProductCardView::new(product, i18n, &state))
            .collect(),
        category_links: filter_links(i18n, category, sort),
        sorts: sort_options(i18n, sort),
        category: category.map(Category::slug),
        category_label: category.map(|c| i18n.t(c.label_key()).to_string()),
        show_order_placed: query.ordered.as_deref() == Some("1"),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href_keeps_sort() {
        assert_eq!(category_href(None, ProductSort::Rank), "/#shop");
        assert_eq!(
            category_href(Some(Category::Sauces), ProductSort::Rank),
            "/?category=sauces#shop"
        );
        assert_eq!(
            category_href(Some(Category::Boxes), ProductSort::PriceDesc),
            "/?category=boxes&sort=price-desc#shop"
        );
    }

    #[test]
    fn test_filter_links_mark_active() {
        let links = filter_links(Translator::new(Locale::En), Some(Category::Sauces), ProductSort::Rank);
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].label, "All");
        assert!(!links[0].active);
        assert!(links[2].active);
        assert_eq!(links[2].label, "Sauces");
    }

    #[test]
    fn test_sort_options_localized() {
        let options = sort_options(Translator::new(Locale::Ar), ProductSort::PriceAsc);
        assert_eq!(options.len(), 4);
        assert!(options.iter().filter(|o| o.selected).count() == 1);
        assert!(options[2].selected);
        assert_eq!(options[2].value, "price-asc");
    }
}
