//! Built-in product list used when no remote catalog is reachable.

use rust_decimal::Decimal;

use super::Product;
use crate::types::{Category, ProductId};

struct Seed {
    id: &'static str,
    slug: &'static str,
    name: &'static str,
    name_alt: &'static str,
    description: &'static str,
    description_alt: &'static str,
    price: i64,
    category: Category,
    image: &'static str,
    hero_image: &'static str,
    badge: &'static str,
    details: &'static [&'static str],
}

const DUMPLING_DETAILS: [&str; 8] = [
    "detail1",
    "detail2",
    "detail3",
    "detail4",
    "detail5",
    "detailTeriyaki",
    "detailSweetChili",
    "detail6",
];

const MEAT_DUMPLING_DETAILS: [&str; 8] = [
    "detail1",
    "detail2Meat",
    "detail3",
    "detail4",
    "detail5",
    "detailTeriyaki",
    "detailSweetChili",
    "detail6",
];

const SEEDS: [Seed; 7] = [
    Seed {
        id: "1",
        slug: "dumplings-chicken",
        name: "Dumplings – Chicken",
        name_alt: "دامبلنغ – دجاج",
        description: "Handcrafted chicken dumplings with rich flavors. Created by Chef Farah.",
        description_alt: "دامبلنغ دجاج مصنوع يدوياً بنكهات غنية. من إبداع الشيف فرح.",
        price: 25,
        category: Category::Boxes,
        image: "/img/1.png",
        hero_image: "/img/2.png",
        badge: "Signature",
        details: &DUMPLING_DETAILS,
    },
    Seed {
        id: "2",
        slug: "dumplings-meat",
        name: "Dumplings – Meat",
        name_alt: "دامبلنغ – لحم",
        description: "Handcrafted meat dumplings with rich flavors. Created by Chef Farah.",
        description_alt: "دامبلنغ لحم مصنوع يدوياً بنكهات غنية. من إبداع الشيف فرح.",
        price: 27,
        category: Category::Boxes,
        image: "/img/1.png",
        hero_image: "/img/2.png",
        badge: "Signature",
        details: &MEAT_DUMPLING_DETAILS,
    },
    Seed {
        id: "3",
        slug: "teriyaki-sauce",
        name: "Teriyaki sauce",
        name_alt: "صلصة ترياكي",
        description: "Rich teriyaki glaze, perfect for dumplings and stir-fry.",
        description_alt: "صلصة ترياكي غنية، مثالية للدامبلنغ والقلي السريع.",
        price: 2,
        category: Category::Sauces,
        image: "/img/teriyaki.jpeg",
        hero_image: "/img/teriyaki.jpeg",
        badge: "Sauce",
        details: &[],
    },
    Seed {
        id: "4",
        slug: "soya-sauce",
        name: "Soya sauce",
        name_alt: "صلصة صويا",
        description: "Classic soy sauce for dipping and cooking.",
        description_alt: "صلصة صويا كلاسيكية للغمس والطبخ.",
        price: 2,
        category: Category::Sauces,
        image: "/img/soya.jpeg",
        hero_image: "/img/soya.jpeg",
        badge: "Sauce",
        details: &[],
    },
    Seed {
        id: "5",
        slug: "buffalo-sauce",
        name: "Buffalo sauce",
        name_alt: "صلصة بافلو",
        description: "Spicy buffalo sauce for a bold kick.",
        description_alt: "صلصة بافلو حارة لمذاق قوي.",
        price: 2,
        category: Category::Sauces,
        image: "/img/buffalo.jpeg",
        hero_image: "/img/buffalo.jpeg",
        badge: "Sauce",
        details: &[],
    },
    Seed {
        id: "6",
        slug: "sweet-chili-sauce",
        name: "Sweet chili sauce",
        name_alt: "صلصة الفلفل الحلو",
        description: "Sweet and tangy chili sauce for dipping.",
        description_alt: "صلصة فلفل حلوة وحامضة للغمس.",
        price: 2,
        category: Category::Sauces,
        image: "/img/sweet-chili.jpeg",
        hero_image: "/img/sweet-chili.jpeg",
        badge: "Sauce",
        details: &[],
    },
    Seed {
        id: "7",
        slug: "chop-sticks",
        name: "Chop sticks",
        name_alt: "عيدان الطعام",
        description: "1 ₪ per stick (not per pack).",
        description_alt: "1 ₪ للعود الواحد (وليس للمجموعة).",
        price: 1,
        category: Category::Chopsticks,
        image: "/img/chop-sticks.jpeg",
        hero_image: "/img/chop-sticks.jpeg",
        badge: "Accessory",
        details: &[],
    },
];

/// The seven products the shop has always sold, in display order.
#[must_use]
pub fn fallback_products() -> Vec<Product> {
    SEEDS
        .iter()
        .zip(1_i64..)
        .map(|(seed, rank)| Product {
            id: ProductId::new(seed.id),
            slug: seed.slug.to_string(),
            name: seed.name.to_string(),
            name_alt: seed.name_alt.to_string(),
            description: seed.description.to_string(),
            description_alt: seed.description_alt.to_string(),
            price: Decimal::from(seed.price),
            category: seed.category,
            image: Some(seed.image.to_string()),
            hero_image: Some(seed.hero_image.to_string()),
            badge: Some(seed.badge.to_string()),
            order: rank,
            details: seed.details.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_list_shape() {
        let products = fallback_products();
        assert_eq!(products.len(), 7);

        let mut slugs: Vec<_> = products.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 7, "slugs must be unique");

        assert!(products.iter().all(|p| p.price >= Decimal::ZERO));
        assert_eq!(products[0].price, Decimal::from(25));
        assert_eq!(products[1].details[1], "detail2Meat");
    }
}
