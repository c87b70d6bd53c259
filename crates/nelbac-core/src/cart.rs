//! Ephemeral in-memory shopping cart. Per-session, no persistence.

use crate::catalog::Product;

#[derive(Debug, Clone)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of a product, merging with an existing line.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity: 1,
            });
        }
    }

    /// Adjust a line's quantity by a signed delta, clamped to at least 1.
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = (item.quantity as i64 + delta as i64).max(1) as u32;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.product.price * i.quantity as f64)
            .sum()
    }

    /// Total unit count across all lines.
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(idx: usize) -> Product {
        Catalog::builtin().products[idx].clone()
    }

    #[test]
    fn add_merges_duplicate_lines() {
        let mut cart = Cart::new();
        let p = product(0);
        cart.add(&p);
        cart.add(&p);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut cart = Cart::new();
        let p = product(0);
        cart.add(&p);
        cart.update_quantity(&p.id, -5);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn total_sums_price_times_quantity() {
        let mut cart = Cart::new();
        let a = product(0); // 149.0
        let b = product(1); // 199.0
        cart.add(&a);
        cart.add(&a);
        cart.add(&b);
        assert!((cart.total() - (149.0 * 2.0 + 199.0)).abs() < 1e-9);
    }

    #[test]
    fn remove_drops_the_line() {
        let mut cart = Cart::new();
        let p = product(2);
        cart.add(&p);
        cart.remove(&p.id);
        assert!(cart.is_empty());
    }
}
