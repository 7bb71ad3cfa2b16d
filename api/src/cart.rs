//! The in-memory shopping cart: line items, merge/removal/quantity policy,
//! and total computation.
//!
//! The cart is a pure, single-session state holder. It knows nothing about
//! rendering or propagation; the UI layer wraps it in a reactive signal and
//! funnels every mutation through the methods defined here.

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::money::Money;

/// Opaque identifier of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a new ID from a raw value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A catalog product as handed to the cart.
///
/// The cart treats this as a snapshot: once a product is in the cart, its
/// name, price, and image are frozen at first-add values and are not
/// refreshed by later catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub product_price: Money,
    pub image: String,
}

/// An error raised when a product snapshot cannot be admitted into the cart.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CartError {
    /// The snapshot is missing required data (blank name or image, or a
    /// negative price). Admitting it would corrupt totals and display.
    #[error("invalid product snapshot for product {0}")]
    InvalidSnapshot(ProductId),
    /// The snapshot is priced in a different currency than the entries
    /// already in the cart. The cart holds a single currency so that line
    /// totals always sum.
    #[error("currency mismatch for product {0}")]
    CurrencyMismatch(ProductId),
}

/// One line item held by the cart: a frozen product snapshot plus a count.
///
/// Invariant: `quantity >= 1`. An entry whose quantity would drop to zero is
/// removed from the cart instead of being retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// The line total: unit price times quantity, exact in minor units.
    pub fn line_total(&self) -> Money {
        self.product.product_price * self.quantity
    }
}

/// An ordered collection of cart entries, at most one per `ProductId`, all
/// priced in a single currency.
///
/// This struct wraps a `Vec` to provide a type-safe API for cart management.
/// Insertion order is preserved so the UI renders a stable listing; it
/// carries no meaning beyond that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart(Vec<CartEntry>);

impl Cart {
    /// Creates a new, empty `Cart`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a product to the cart.
    ///
    /// If an entry for the same `ProductId` already exists, its quantity is
    /// incremented by one and the original snapshot stays authoritative; a
    /// changed price on the incoming snapshot does not leak into the cart.
    /// Otherwise a new entry with quantity 1 is appended.
    ///
    /// A malformed snapshot is rejected outright rather than stored
    /// half-populated, and a snapshot priced in a different currency than
    /// the cart's existing entries is rejected so the total stays summable.
    pub fn add(&mut self, product: Product) -> Result<(), CartError> {
        if product.product_name.trim().is_empty()
            || product.image.trim().is_empty()
            || product.product_price.is_negative()
        {
            return Err(CartError::InvalidSnapshot(product.product_id));
        }

        if let Some(first) = self.0.first() {
            if first.product.product_price.currency() != product.product_price.currency() {
                return Err(CartError::CurrencyMismatch(product.product_id));
            }
        }

        if let Some(entry) = self
            .0
            .iter_mut()
            .find(|e| e.product.product_id == product.product_id)
        {
            entry.quantity += 1;
        } else {
            self.0.push(CartEntry {
                product,
                quantity: 1,
            });
        }
        Ok(())
    }

    /// Removes the entry for `product_id`, returning it if it was present.
    ///
    /// A missing key is a no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartEntry> {
        let index = self
            .0
            .iter()
            .position(|e| e.product.product_id == product_id)?;
        Some(self.0.remove(index))
    }

    /// Replaces the quantity of the entry for `product_id`.
    ///
    /// A requested quantity of zero or below removes the entry entirely,
    /// matching `remove` semantics; this is policy, not an error. A positive
    /// quantity is stored exactly up to `u32::MAX`, and saturates there. A
    /// missing key is a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(entry) = self
            .0
            .iter_mut()
            .find(|e| e.product.product_id == product_id)
        {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empties the cart unconditionally. Idempotent.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The sum of all line totals, computed fresh from the current entries.
    ///
    /// Never cached, so it cannot desynchronize from the listing. Rounding
    /// and formatting are left to the presentation layer.
    pub fn total(&self) -> Money {
        self.0.iter().map(CartEntry::line_total).sum()
    }

    /// Number of distinct line items in the cart.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the cart holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Retrieves the entry for `product_id`, if present.
    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.0.iter().find(|e| e.product.product_id == product_id)
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// An iterator over the entries of a `Cart`, in insertion order.
///
/// This struct is created by the `iter` method on `Cart`.
pub struct Iter<'a>(std::slice::Iter<'a, CartEntry>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CartEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
}

/// Allows `Cart` to be used directly in `for` loops.
impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartEntry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Currency;

    fn product(id: u64, price: f64) -> Product {
        Product {
            product_id: ProductId::new(id),
            product_name: format!("Product {id}"),
            product_price: Money::from_float(price, Currency::USD),
            image: format!("https://example.com/{id}.png"),
        }
    }

    #[test]
    fn add_appends_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add(product(1, 9.99)).unwrap();

        assert_eq!(cart.len(), 1);
        let entry = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn repeated_add_merges_into_one_entry() {
        let mut cart = Cart::new();
        cart.add(product(1, 9.99)).unwrap();
        cart.add(product(1, 9.99)).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn merge_keeps_first_snapshot() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.00)).unwrap();

        // Same id, different price and name: the original snapshot wins.
        let mut changed = product(1, 99.99);
        changed.product_name = "Renamed".into();
        cart.add(changed).unwrap();

        let entry = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.product.product_name, "Product 1");
        assert_eq!(
            entry.product.product_price,
            Money::from_float(10.00, Currency::USD)
        );
    }

    #[test]
    fn add_rejects_malformed_snapshots() {
        let mut cart = Cart::new();

        let mut nameless = product(1, 5.0);
        nameless.product_name = "   ".into();
        assert_eq!(
            cart.add(nameless),
            Err(CartError::InvalidSnapshot(ProductId::new(1)))
        );

        let mut imageless = product(2, 5.0);
        imageless.image = String::new();
        assert!(cart.add(imageless).is_err());

        let negative = Product {
            product_price: Money::from_float(-1.0, Currency::USD),
            ..product(3, 0.0)
        };
        assert!(cart.add(negative).is_err());

        // Nothing half-populated slipped in.
        assert!(cart.is_empty());
    }

    #[test]
    fn add_rejects_currency_mismatch() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0)).unwrap();

        let foreign = Product {
            product_price: Money::from_float(10.0, Currency::EUR),
            ..product(2, 10.0)
        };
        assert_eq!(
            cart.add(foreign),
            Err(CartError::CurrencyMismatch(ProductId::new(2)))
        );

        // The cart is untouched and its total still sums.
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_float(10.0, Currency::USD));
    }

    #[test]
    fn set_quantity_zero_or_negative_removes_entry() {
        let mut cart = Cart::new();
        cart.add(product(1, 5.0)).unwrap();
        cart.add(product(2, 5.0)).unwrap();

        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.get(ProductId::new(1)).is_none());

        cart.set_quantity(ProductId::new(2), -3);
        assert!(cart.get(ProductId::new(2)).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_replaces_exactly_and_saturates_at_storage_width() {
        let mut cart = Cart::new();
        cart.add(product(1, 5.0)).unwrap();

        cart.set_quantity(ProductId::new(1), 250);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 250);

        // Beyond the storage width the quantity saturates.
        cart.set_quantity(ProductId::new(1), u32::MAX as i64 + 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn missing_key_mutations_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(product(1, 5.0)).unwrap();
        let before = cart.clone();

        assert!(cart.remove(ProductId::new(42)).is_none());
        cart.set_quantity(ProductId::new(42), 5);

        assert_eq!(cart, before);
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add(product(1, 10.0)).unwrap();
        cart.add(product(1, 10.0)).unwrap(); // qty 2
        cart.add(product(2, 5.0)).unwrap();
        cart.set_quantity(ProductId::new(2), 3);

        assert_eq!(cart.total(), Money::from_float(35.0, Currency::USD));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cart = Cart::new();
        cart.clear();
        assert!(cart.is_empty());

        cart.add(product(1, 5.0)).unwrap();
        cart.clear();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().as_minor_units(), 0);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add(product(id, 1.0)).unwrap();
        }
        // Merging does not reorder.
        cart.add(product(1, 1.0)).unwrap();

        let ids: Vec<u64> = cart
            .iter()
            .map(|e| e.product.product_id.as_u64())
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add(product(1, 12.5)).unwrap(); // A
        cart.add(product(2, 3.0)).unwrap(); // B
        cart.add(product(1, 12.5)).unwrap(); // merge A

        assert_eq!(cart.len(), 2);
        let a = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(a.quantity, 2);
        assert_eq!(a.product.product_price, Money::from_float(12.5, Currency::USD));
        let b = cart.get(ProductId::new(2)).unwrap();
        assert_eq!(b.quantity, 1);
        assert_eq!(cart.total(), Money::from_float(28.0, Currency::USD));

        cart.set_quantity(ProductId::new(2), 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Money::from_float(25.0, Currency::USD));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().as_minor_units(), 0);
    }
}
