//! Folding loosely-shaped API records into [`Product`]s.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::Product;
use crate::types::{Category, ProductId};

/// Pull the product array out of a `/products` response.
///
/// Accepts a bare array or an envelope carrying `results` or `products`.
/// Anything else yields an empty list.
#[must_use]
pub fn extract_product_list(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let inner = map
                .remove("results")
                .filter(|v| !v.is_null())
                .or_else(|| map.remove("products"));
            match inner {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// Normalize one raw catalog record.
///
/// Returns `None` for records without a slug, which cannot be addressed.
#[must_use]
pub fn normalize_product(raw: &Value) -> Option<Product> {
    let slug = str_field(raw, "slug").filter(|s| !s.is_empty())?.to_string();

    let id = match raw.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => slug.clone(),
    };

    let image = resolve_image(raw);
    let hero_image = str_field(raw, "heroImage")
        .map(ToString::to_string)
        .or_else(|| image.clone());

    let details = raw
        .get("details")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();

    let badge = str_field(raw, "badge").map(ToString::to_string);
    let category = resolve_category(raw, &slug, badge.as_deref());

    Some(Product {
        id: ProductId::new(id),
        name: first_str(raw, &["name", "name_en"]),
        name_alt: first_str(raw, &["nameAr", "name_ar"]),
        description: first_str(raw, &["description", "description_en"]),
        description_alt: first_str(raw, &["descriptionAr", "description_ar"]),
        price: parse_price(raw.get("price")),
        order: first_present(raw, &["order", "sort_order"])
            .and_then(parse_rank)
            .unwrap_or(0),
        category,
        image,
        hero_image,
        badge,
        details,
        slug,
    })
}

fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

/// First key whose value is present and not null.
fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|v| !v.is_null())
}

fn first_str(raw: &Value, keys: &[&str]) -> String {
    first_present(raw, keys)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_price(value: Option<&Value>) -> Decimal {
    let parsed = match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Decimal::from)
            .or_else(|| Decimal::from_str(&n.to_string()).ok()),
        Some(Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    };
    parsed
        .filter(|price| !price.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

fn parse_rank(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `hero_image`, then the flagged hero in `images`, then the first image,
/// then `imageUrl`. Image entries may be plain URLs or `{ "url": ... }`.
fn resolve_image(raw: &Value) -> Option<String> {
    let images = raw.get("images").and_then(Value::as_array);
    let candidate = raw
        .get("hero_image")
        .filter(|v| !v.is_null())
        .or_else(|| {
            images.and_then(|list| {
                list.iter().find(|img| {
                    img.get("is_hero")
                        .is_some_and(|flag| flag.as_bool().unwrap_or(false))
                })
            })
        })
        .or_else(|| images.and_then(|list| list.first()));

    let from_candidate = candidate.and_then(|img| match img {
        Value::String(url) => Some(url.clone()),
        other => other.get("url").and_then(Value::as_str).map(ToString::to_string),
    });

    from_candidate.or_else(|| str_field(raw, "imageUrl").map(ToString::to_string))
}

/// Category from the explicit fields, else guessed from slug and badge.
fn resolve_category(raw: &Value, slug: &str, badge: Option<&str>) -> Category {
    if let Some(category) = raw_category(raw).as_deref().and_then(Category::from_raw) {
        return category;
    }

    let slug = slug.to_lowercase();
    let badge = badge.unwrap_or_default().to_lowercase();
    if slug.contains("sauce") || badge.contains("sauce") {
        Category::Sauces
    } else if slug.contains("chop") || slug.contains("stick") {
        Category::Chopsticks
    } else {
        Category::Boxes
    }
}

fn raw_category(raw: &Value) -> Option<String> {
    if let Some(value) = raw.get("category").filter(|v| !v.is_null()) {
        return match value {
            Value::String(s) => Some(s.clone()),
            other => other.get("slug").and_then(Value::as_str).map(ToString::to_string),
        };
    }

    let first = raw
        .get("categories")
        .and_then(Value::as_array)
        .and_then(|list| list.first())?;

    first
        .get("category")
        .and_then(|c| c.get("slug"))
        .and_then(Value::as_str)
        .or_else(|| first.get("slug").and_then(Value::as_str))
        .or_else(|| first.get("category").and_then(Value::as_str))
        .map(ToString::to_string)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_alternate_field_names() {
        let product = normalize_product(&json!({
            "id": 12,
            "slug": "shrimp-box",
            "name_en": "Shrimp box",
            "name_ar": "علبة روبيان",
            "description_en": "Fresh",
            "sort_order": 4,
            "price": "31.50",
            "images": [{ "url": "/a.png" }, { "url": "/b.png", "is_hero": true }]
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "12");
        assert_eq!(product.name, "Shrimp box");
        assert_eq!(product.name_alt, "علبة روبيان");
        assert_eq!(product.description, "Fresh");
        assert_eq!(product.description_alt, "");
        assert_eq!(product.order, 4);
        assert_eq!(product.price, Decimal::new(3150, 2));
        assert_eq!(product.image.as_deref(), Some("/b.png"));
        assert_eq!(product.hero_image.as_deref(), Some("/b.png"));
        assert_eq!(product.category, Category::Boxes);
    }

    #[test]
    fn test_primary_fields_win() {
        let product = normalize_product(&json!({
            "id": "a",
            "slug": "x",
            "name": "Primary",
            "name_en": "Secondary",
            "order": 0,
            "sort_order": 9,
            "imageUrl": "/fallback.png",
            "heroImage": "/hero.png"
        }))
        .unwrap();

        assert_eq!(product.name, "Primary");
        assert_eq!(product.order, 0);
        assert_eq!(product.image.as_deref(), Some("/fallback.png"));
        assert_eq!(product.hero_image.as_deref(), Some("/hero.png"));
    }

    #[test]
    fn test_missing_slug_is_dropped() {
        assert!(normalize_product(&json!({ "id": 1, "name": "Nameless" })).is_none());
        assert!(normalize_product(&json!({ "id": 1, "slug": "" })).is_none());
    }

    #[test]
    fn test_missing_values_default() {
        let product = normalize_product(&json!({ "slug": "bare" })).unwrap();
        assert_eq!(product.id.as_str(), "bare");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.order, 0);
        assert!(product.image.is_none());
        assert!(product.details.is_empty());
    }

    #[test]
    fn test_dumplings_category_same_as_boxes() {
        let a = normalize_product(&json!({ "slug": "a", "category": "dumplings" })).unwrap();
        let b = normalize_product(&json!({ "slug": "b", "category": "boxes" })).unwrap();
        assert_eq!(a.category, b.category);
        assert_eq!(a.category, Category::Boxes);
    }

    #[test]
    fn test_nested_category_shapes() {
        let nested = json!({
            "slug": "x",
            "categories": [{ "category": { "slug": "Sauce" } }]
        });
        assert_eq!(normalize_product(&nested).unwrap().category, Category::Sauces);

        let flat = json!({ "slug": "y", "categories": [{ "slug": "chop_sticks" }] });
        assert_eq!(normalize_product(&flat).unwrap().category, Category::Chopsticks);

        let named = json!({ "slug": "z", "categories": [{ "category": "box" }] });
        assert_eq!(normalize_product(&named).unwrap().category, Category::Boxes);
    }

    #[test]
    fn test_category_keyword_inference() {
        let by_slug = json!({ "slug": "garlic-sauce", "category": "extras" });
        assert_eq!(normalize_product(&by_slug).unwrap().category, Category::Sauces);

        let by_badge = json!({ "slug": "dip", "badge": "Sauce" });
        assert_eq!(normalize_product(&by_badge).unwrap().category, Category::Sauces);

        let sticks = json!({ "slug": "bamboo-sticks" });
        assert_eq!(normalize_product(&sticks).unwrap().category, Category::Chopsticks);

        let other = json!({ "slug": "gift-card" });
        assert_eq!(normalize_product(&other).unwrap().category, Category::Boxes);
    }

    #[test]
    fn test_extract_product_list_shapes() {
        assert_eq!(extract_product_list(json!([{ "slug": "a" }])).len(), 1);
        assert_eq!(
            extract_product_list(json!({ "results": [{ "slug": "a" }, { "slug": "b" }] })).len(),
            2
        );
        assert_eq!(
            extract_product_list(json!({ "products": [{ "slug": "a" }] })).len(),
            1
        );
        assert!(extract_product_list(json!({ "data": [] })).is_empty());
        assert!(extract_product_list(json!("nope")).is_empty());
    }
}
