//! Catalog domain: products, normalization of remote records, ordering.
//!
//! The remote storefront API has gone through several shapes (`name` vs
//! `name_en`, `order` vs `sort_order`, nested category objects, image lists).
//! [`normalize_product`] folds all of them into a single [`Product`].

mod fallback;
mod normalize;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Category, Locale, Price, ProductId};

pub use fallback::fallback_products;
pub use normalize::{extract_product_list, normalize_product};

/// Slugs that have no detail page; links to them land on the overview.
pub const NO_DETAIL_PAGE_SLUGS: [&str; 5] = [
    "teriyaki-sauce",
    "soya-sauce",
    "buffalo-sauce",
    "sweet-chili-sauce",
    "chop-sticks",
];

/// A sellable product as displayed by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// URL-safe identifier, unique within the catalog.
    pub slug: String,
    pub name: String,
    /// Arabic name; empty when the catalog has none.
    pub name_alt: String,
    pub description: String,
    pub description_alt: String,
    pub price: Decimal,
    pub category: Category,
    pub image: Option<String>,
    pub hero_image: Option<String>,
    pub badge: Option<String>,
    /// Display rank; lower sorts first.
    pub order: i64,
    /// Translation keys for the detail page bullet list.
    pub details: Vec<String>,
}

impl Product {
    /// Name in the requested language, falling back to the primary name.
    #[must_use]
    pub fn display_name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar if !self.name_alt.is_empty() => &self.name_alt,
            _ => &self.name,
        }
    }

    #[must_use]
    pub fn display_description(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ar if !self.description_alt.is_empty() => &self.description_alt,
            _ => &self.description,
        }
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        Price::shekels(self.price)
    }

    /// Image for the detail page header.
    #[must_use]
    pub fn hero(&self) -> Option<&str> {
        self.hero_image.as_deref().or(self.image.as_deref())
    }

    /// Whether `/product/<slug>` renders a detail page for this product.
    #[must_use]
    pub fn has_detail_page(&self) -> bool {
        has_detail_page(&self.slug)
    }
}

/// Whether a slug is allowed its own detail page.
#[must_use]
pub fn has_detail_page(slug: &str) -> bool {
    !NO_DETAIL_PAGE_SLUGS.contains(&slug)
}

/// Overview ordering selected by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    /// Display rank, ascending.
    #[default]
    Rank,
    /// Display rank, descending.
    Newest,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    pub const ALL: [Self; 4] = [Self::Rank, Self::Newest, Self::PriceAsc, Self::PriceDesc];

    /// Parse a `?sort=` value; unknown values select the default.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "newest" => Self::Newest,
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            _ => Self::Rank,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rank => "featured",
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Rank => "sort.featured",
            Self::Newest => "sort.newest",
            Self::PriceAsc => "sort.priceAsc",
            Self::PriceDesc => "sort.priceDesc",
        }
    }
}

/// Sort products in place. The sort is stable so equal keys keep catalog order.
pub fn sort_products(products: &mut [Product], sort: ProductSort) {
    match sort {
        ProductSort::Rank => products.sort_by_key(|p| p.order),
        ProductSort::Newest => products.sort_by(|a, b| b.order.cmp(&a.order)),
        ProductSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        ProductSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Keep only products in `category`; `None` keeps everything.
#[must_use]
pub fn filter_by_category(products: Vec<Product>, category: Option<Category>) -> Vec<Product> {
    match category {
        Some(category) => products
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
        None => products,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn slugs(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_display_name_falls_back_to_primary() {
        let mut product = fallback_products().remove(0);
        assert_eq!(product.display_name(Locale::Ar), "دامبلنغ – دجاج");
        product.name_alt.clear();
        assert_eq!(product.display_name(Locale::Ar), product.name);
        assert_eq!(product.display_name(Locale::En), "Dumplings – Chicken");
    }

    #[test]
    fn test_no_detail_pages_for_accessories() {
        let products = fallback_products();
        let with_pages: Vec<_> = products
            .iter()
            .filter(|p| p.has_detail_page())
            .map(|p| p.slug.as_str())
            .collect();
        assert_eq!(with_pages, vec!["dumplings-chicken", "dumplings-meat"]);
    }

    #[test]
    fn test_sort_orders() {
        let mut products = fallback_products();

        sort_products(&mut products, ProductSort::Newest);
        assert_eq!(products.first().unwrap().slug, "chop-sticks");

        sort_products(&mut products, ProductSort::Rank);
        assert_eq!(products.first().unwrap().slug, "dumplings-chicken");

        sort_products(&mut products, ProductSort::PriceDesc);
        assert_eq!(slugs(&products)[..2], ["dumplings-meat", "dumplings-chicken"]);

        sort_products(&mut products, ProductSort::PriceAsc);
        assert_eq!(products.first().unwrap().slug, "chop-sticks");
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(ProductSort::parse("price-asc"), ProductSort::PriceAsc);
        assert_eq!(ProductSort::parse("bogus"), ProductSort::Rank);
        for sort in ProductSort::ALL {
            assert_eq!(ProductSort::parse(sort.as_str()), sort);
        }
    }

    #[test]
    fn test_filter_by_category() {
        let sauces = filter_by_category(fallback_products(), Some(Category::Sauces));
        assert_eq!(sauces.len(), 4);
        assert!(sauces.iter().all(|p| p.category == Category::Sauces));

        assert_eq!(filter_by_category(fallback_products(), None).len(), 7);
    }
}
