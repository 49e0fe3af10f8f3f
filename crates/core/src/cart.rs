//! The visitor's cart and its persistence.
//!
//! [`CartStore`] is the single source of truth for cart contents. It loads
//! its snapshot once, applies mutations in memory and writes the full
//! snapshot back after each one. Storage failures are logged and otherwise
//! ignored, so a full or broken store never loses the in-memory cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Product;
use crate::kv::{self, KeyValueStore, keys};
use crate::types::ProductId;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    /// Name captured when the product was added, in the visitor's language.
    pub name: String,
    /// Unit price captured when the product was added.
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Ordered cart lines, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price × quantity` across all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Drop lines a hand-edited or older snapshot may carry that break the
    /// cart's shape: zero quantities, negative prices and repeated products
    /// (merged into the first line).
    fn repaired(items: Vec<LineItem>) -> Self {
        let mut cart = Self::default();
        for item in items {
            if item.quantity == 0 || item.price.is_sign_negative() {
                continue;
            }
            match cart
                .items
                .iter_mut()
                .find(|line| line.product_id == item.product_id)
            {
                Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
                None => cart.items.push(item),
            }
        }
        cart
    }
}

/// Identifies a line to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRef {
    /// Position in the cart.
    Index(usize),
    /// The line holding this product.
    Product(ProductId),
}

impl From<usize> for LineRef {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<ProductId> for LineRef {
    fn from(id: ProductId) -> Self {
        Self::Product(id)
    }
}

/// Outcome of a mutation, used by the UI adapter to notify cart observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Changed,
    Unchanged,
}

impl CartChange {
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Owns the cart and writes it through to a [`KeyValueStore`].
#[derive(Debug)]
pub struct CartStore<S> {
    store: S,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate the cart from `store`. Missing or malformed snapshots
    /// start an empty cart.
    pub fn load(store: S) -> Self {
        let items: Vec<LineItem> = kv::load_json(&store, keys::CART).unwrap_or_default();
        Self {
            store,
            cart: Cart::repaired(items),
        }
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    /// Add a catalog product under the given display name.
    pub fn add_product(&mut self, product: &Product, name: &str, quantity: u32) -> CartChange {
        self.add(product.id.clone(), name, product.price, quantity)
    }

    /// Add `quantity` units, merging into an existing line for the product.
    ///
    /// A zero quantity is ignored. The name and price of an existing line
    /// are kept.
    pub fn add(
        &mut self,
        product_id: ProductId,
        name: &str,
        price: Decimal,
        quantity: u32,
    ) -> CartChange {
        if quantity == 0 {
            return CartChange::Unchanged;
        }

        match self
            .cart
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.cart.items.push(LineItem {
                product_id,
                name: name.to_string(),
                price: price.max(Decimal::ZERO),
                quantity,
            }),
        }

        self.persist();
        CartChange::Changed
    }

    /// Remove a line by position or product. Absent lines are a no-op.
    pub fn remove(&mut self, line: impl Into<LineRef>) -> CartChange {
        let position = match line.into() {
            LineRef::Index(index) => (index < self.cart.items.len()).then_some(index),
            LineRef::Product(id) => self
                .cart
                .items
                .iter()
                .position(|item| item.product_id == id),
        };

        let Some(position) = position else {
            return CartChange::Unchanged;
        };

        self.cart.items.remove(position);
        self.persist();
        CartChange::Changed
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    pub fn set_quantity(&mut self, index: usize, quantity: i64) -> CartChange {
        if index >= self.cart.items.len() {
            return CartChange::Unchanged;
        }

        let Ok(quantity) = u32::try_from(quantity) else {
            if quantity <= 0 {
                return self.remove(LineRef::Index(index));
            }
            // Larger than any real order; clamp.
            return self.overwrite_quantity(index, u32::MAX);
        };

        if quantity == 0 {
            return self.remove(LineRef::Index(index));
        }
        self.overwrite_quantity(index, quantity)
    }

    fn overwrite_quantity(&mut self, index: usize, quantity: u32) -> CartChange {
        let Some(line) = self.cart.items.get_mut(index) else {
            return CartChange::Unchanged;
        };
        if line.quantity == quantity {
            return CartChange::Unchanged;
        }
        line.quantity = quantity;
        self.persist();
        CartChange::Changed
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> CartChange {
        let was_empty = self.cart.is_empty();
        self.cart.items.clear();
        self.persist();
        if was_empty {
            CartChange::Unchanged
        } else {
            CartChange::Changed
        }
    }

    fn persist(&self) {
        if let Err(e) = kv::save_json(&self.store, keys::CART, &self.cart) {
            warn!(error = %e, lines = self.cart.items.len(), "Failed to persist cart");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::kv::MemoryStore;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn empty_store() -> CartStore<Arc<MemoryStore>> {
        CartStore::load(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_totals() {
        let mut cart = empty_store();
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 1);
        cart.add(ProductId::new("3"), "Teriyaki", dec(2), 3);

        assert_eq!(cart.total(), dec(31));
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut cart = empty_store();
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 1);
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let mut cart = empty_store();
        assert_eq!(
            cart.add(ProductId::new("1"), "Dumplings", dec(25), 0),
            CartChange::Unchanged
        );
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = empty_store();
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 2);
        cart.add(ProductId::new("3"), "Teriyaki", dec(2), 1);

        assert!(cart.set_quantity(0, 0).changed());
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id.as_str(), "3");

        assert!(cart.set_quantity(0, -4).changed());
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_set_quantity_out_of_range_is_noop() {
        let mut cart = empty_store();
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 2);
        assert_eq!(cart.set_quantity(5, 3), CartChange::Unchanged);
        assert_eq!(cart.set_quantity(0, 7), CartChange::Changed);
        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_remove_by_index_and_product() {
        let mut cart = empty_store();
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 1);
        cart.add(ProductId::new("3"), "Teriyaki", dec(2), 1);
        cart.add(ProductId::new("7"), "Chop sticks", dec(1), 4);

        assert!(cart.remove(1).changed());
        assert!(cart.remove(ProductId::new("7")).changed());
        assert_eq!(cart.remove(ProductId::new("99")), CartChange::Unchanged);
        assert_eq!(cart.remove(10), CartChange::Unchanged);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = empty_store();
        assert_eq!(cart.clear(), CartChange::Unchanged);
        cart.add(ProductId::new("1"), "Dumplings", dec(25), 1);
        assert!(cart.clear().changed());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_persists_and_reloads() {
        let backend = Arc::new(MemoryStore::new());
        {
            let mut cart = CartStore::load(Arc::clone(&backend));
            cart.add(ProductId::new("1"), "Dumplings – Chicken", dec(25), 2);
            cart.add(ProductId::new("6"), "Sweet chili sauce", dec(2), 1);
        }

        let raw = backend.get(keys::CART).unwrap().unwrap();
        assert!(raw.contains("\"productId\":\"1\""));

        let reloaded = CartStore::load(Arc::clone(&backend));
        assert_eq!(reloaded.items().len(), 2);
        assert_eq!(reloaded.total(), dec(52));
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.set(keys::CART, "[{\"oops\":").unwrap();
        let cart = CartStore::load(Arc::clone(&backend));
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_snapshot_repaired_on_load() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set(
                keys::CART,
                r#"[
                    {"productId":"1","name":"A","price":25,"quantity":1},
                    {"productId":"1","name":"A","price":25,"quantity":2},
                    {"productId":"2","name":"B","price":27,"quantity":0}
                ]"#,
            )
            .unwrap();
        let cart = CartStore::load(Arc::clone(&backend));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_quota_failure_keeps_memory_state() {
        let backend = Arc::new(MemoryStore::with_capacity(16));
        let mut cart = CartStore::load(Arc::clone(&backend));

        assert!(cart.add(ProductId::new("1"), "Dumplings", dec(25), 1).changed());
        assert_eq!(cart.item_count(), 1);
        assert!(backend.get(keys::CART).unwrap().is_none());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u32),
        Remove(usize),
        RemoveProduct(u8),
        SetQuantity(usize, i64),
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..5, 1u32..5).prop_map(|(p, q)| Op::Add(p, q)),
            (0usize..6).prop_map(Op::Remove),
            (0u8..5).prop_map(Op::RemoveProduct),
            (0usize..6, -2i64..6).prop_map(|(i, q)| Op::SetQuantity(i, q)),
            Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn cart_invariants_hold(ops in prop::collection::vec(op(), 0..40)) {
            let backend = Arc::new(MemoryStore::new());
            let mut cart = CartStore::load(Arc::clone(&backend));

            for op in ops {
                match op {
                    Op::Add(p, q) => {
                        cart.add(ProductId::new(p.to_string()), "item", Decimal::from(p) + dec(1), q);
                    }
                    Op::Remove(i) => { cart.remove(i); }
                    Op::RemoveProduct(p) => { cart.remove(ProductId::new(p.to_string())); }
                    Op::SetQuantity(i, q) => { cart.set_quantity(i, q); }
                    Op::Clear => { cart.clear(); }
                }

                let items = cart.items();
                prop_assert!(items.iter().all(|item| item.quantity >= 1));
                prop_assert!(items.iter().all(|item| item.price >= Decimal::ZERO));

                let mut ids: Vec<_> = items.iter().map(|item| item.product_id.clone()).collect();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), items.len());

                let expected_total: Decimal = items
                    .iter()
                    .map(|item| item.price * Decimal::from(item.quantity))
                    .sum();
                prop_assert_eq!(cart.total(), expected_total);
                prop_assert_eq!(
                    cart.item_count(),
                    items.iter().map(|item| item.quantity).sum::<u32>()
                );
            }

            let reloaded = CartStore::load(Arc::clone(&backend));
            prop_assert_eq!(reloaded.cart(), cart.cart());
        }
    }
}
