//! The cart list: insertion-ordered product lines, unique by product.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CartEntry, Money, ProductId};

/// The authoritative list of cart entries.
///
/// Insertion order is preserved and there is at most one entry per product.
/// The list is never mutated in place: every mutation helper produces a new
/// `Cart`, leaving the original untouched. Serializes as a bare JSON array
/// of entries; that serialization is exactly what the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Returns the entry for `product_id`, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Returns true if an entry for `product_id` exists.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Returns the number of entries (product lines, not units).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total quantity of units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Returns the total price across all lines.
    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .map(CartEntry::total_price)
            .fold(Money::zero(), |acc, line| acc + line)
    }

    /// Returns a new cart with `entry` appended at the end.
    ///
    /// The caller must ensure no entry for the same product already exists.
    pub(crate) fn with_appended(&self, entry: CartEntry) -> Cart {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Cart { entries }
    }

    /// Returns a new cart with the matching entry's amount incremented by 1.
    pub(crate) fn with_incremented(&self, product_id: ProductId) -> Cart {
        self.with_mapped_amount(product_id, |amount| amount + 1)
    }

    /// Returns a new cart with the matching entry's amount replaced.
    pub(crate) fn with_amount(&self, product_id: ProductId, amount: u32) -> Cart {
        self.with_mapped_amount(product_id, |_| amount)
    }

    /// Returns a new cart with the matching entry removed, other entries
    /// unchanged in order and value.
    pub(crate) fn without(&self, product_id: ProductId) -> Cart {
        Cart {
            entries: self
                .entries
                .iter()
                .filter(|e| e.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    fn with_mapped_amount(&self, product_id: ProductId, f: impl Fn(u32) -> u32) -> Cart {
        Cart {
            entries: self
                .entries
                .iter()
                .map(|e| {
                    if e.product_id == product_id {
                        let mut entry = e.clone();
                        entry.amount = f(entry.amount);
                        entry
                    } else {
                        e.clone()
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Product;

    fn product(id: u64, name: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Money::from_cents(cents),
            image_url: format!("https://images.example/{id}.jpg"),
        }
    }

    fn sample_cart() -> Cart {
        Cart::new()
            .with_appended(CartEntry::new(product(1, "Sneaker", 13990), 2))
            .with_appended(CartEntry::new(product(2, "Sandal", 9990), 1))
            .with_appended(CartEntry::new(product(3, "Boot", 25990), 3))
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn with_appended_preserves_insertion_order() {
        let cart = sample_cart();
        let ids: Vec<u64> = cart.entries().iter().map(|e| e.product_id.as_u64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn with_appended_leaves_original_untouched() {
        let cart = Cart::new();
        let bigger = cart.with_appended(CartEntry::new(product(1, "Sneaker", 13990), 1));
        assert!(cart.is_empty());
        assert_eq!(bigger.len(), 1);
    }

    #[test]
    fn with_incremented_bumps_only_the_matching_entry() {
        let cart = sample_cart();
        let bumped = cart.with_incremented(ProductId::new(2));

        assert_eq!(bumped.get(ProductId::new(2)).unwrap().amount, 2);
        assert_eq!(bumped.get(ProductId::new(1)).unwrap().amount, 2);
        assert_eq!(bumped.get(ProductId::new(3)).unwrap().amount, 3);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().amount, 1);
    }

    #[test]
    fn with_amount_sets_exact_value() {
        let cart = sample_cart();
        let updated = cart.with_amount(ProductId::new(3), 7);
        assert_eq!(updated.get(ProductId::new(3)).unwrap().amount, 7);
        assert_eq!(updated.len(), cart.len());
    }

    #[test]
    fn without_removes_only_the_matching_entry() {
        let cart = sample_cart();
        let smaller = cart.without(ProductId::new(2));

        assert_eq!(smaller.len(), 2);
        assert!(!smaller.contains(ProductId::new(2)));
        let ids: Vec<u64> = smaller.entries().iter().map(|e| e.product_id.as_u64()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(smaller.get(ProductId::new(1)), cart.get(ProductId::new(1)));
    }

    #[test]
    fn totals() {
        let cart = sample_cart();
        // 2 × 139.90 + 1 × 99.90 + 3 × 259.90
        assert_eq!(cart.total().cents(), 2 * 13990 + 9990 + 3 * 25990);
        assert_eq!(cart.total_quantity(), 6);
    }

    #[test]
    fn serializes_as_bare_entry_array() {
        let cart = sample_cart();
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 3);
    }

    #[test]
    fn serialization_roundtrip_preserves_entries_order_and_amounts() {
        let cart = sample_cart();
        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(cart, back);
    }
}
