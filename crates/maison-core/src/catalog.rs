//! # Product Catalog
//!
//! Read-only catalog collaborator.
//!
//! ## Collaborator Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Contract                                    │
//! │                                                                         │
//! │  State manager / views          Catalog (this module)                   │
//! │  ─────────────────────          ─────────────────────                   │
//! │                                                                         │
//! │  cart_view() ──── find_by_id(7) ────► Some(&Product) or None           │
//! │  product page ─── products() ───────► &[Product]                       │
//! │                                                                         │
//! │  The manager NEVER mutates the catalog. A missing id is not an error:  │
//! │  views substitute a placeholder line instead of failing.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`StaticCatalog`] ships a small seeded inventory so the demo binary and
//! tests have real-looking data without any backend.

use crate::types::{Category, Product, ProductId, Review};

// =============================================================================
// Catalog Trait
// =============================================================================

/// Read-only product lookup.
///
/// The storefront's only data source for product details. Implementations
/// must be cheap to query; the views call `find_by_id` once per cart line on
/// every render.
pub trait Catalog {
    /// All products, in merchandising order.
    fn products(&self) -> &[Product];

    /// Looks up a single product by id.
    fn find_by_id(&self, id: ProductId) -> Option<&Product>;
}

// =============================================================================
// Static Catalog
// =============================================================================

/// In-memory catalog seeded with demo inventory.
pub struct StaticCatalog {
    products: Vec<Product>,
    reviews: Vec<Review>,
}

impl StaticCatalog {
    /// Creates a catalog from explicit product data.
    pub fn new(products: Vec<Product>, reviews: Vec<Review>) -> Self {
        StaticCatalog { products, reviews }
    }

    /// Creates the seeded demo catalog.
    pub fn demo() -> Self {
        StaticCatalog::new(demo_products(), demo_reviews())
    }

    /// Reviews for one product, newest data first as seeded.
    pub fn reviews_for(&self, product_id: ProductId) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .collect()
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }

    fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

// =============================================================================
// Seed Data
// =============================================================================

fn product(
    id: ProductId,
    name: &str,
    price_cents: i64,
    category: Category,
    stock: i64,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        price_cents,
        description: format!("{name} from the current Maison collection."),
        short_description: None,
        category,
        image_url: format!("https://cdn.maison.example/products/{id}.jpg"),
        stock,
        brand: Some("Maison".to_string()),
        sku: Some(format!("MSN-{id:04}")),
        sale_price_cents: None,
        sizes: None,
        colors: None,
        is_active: true,
        is_featured: false,
    }
}

fn demo_products() -> Vec<Product> {
    let mut products = vec![
        product(1, "Premium Cotton Tee", 2999, Category::Shirts, 50),
        product(2, "Slim Fit Jeans", 5999, Category::Pants, 30),
        product(3, "Court Sneakers", 8500, Category::Shoes, 25),
        product(4, "Casual Oxford Shirt", 4500, Category::Shirts, 40),
        product(5, "Leather Tote Bag", 12000, Category::Accessories, 15),
        product(6, "Everyday Hoodie", 3999, Category::Shirts, 60),
        product(7, "Linen Summer Dress", 7500, Category::Dresses, 20),
        product(8, "Woven Leather Belt", 2500, Category::Accessories, 45),
        product(9, "Pleated Midi Skirt", 5500, Category::Dresses, 18),
        product(10, "Chelsea Boots", 11500, Category::Shoes, 12),
    ];

    // Merchandising touches the seed data exercises: sizes/colors drive the
    // variant pickers, a sale price drives the discount badge.
    if let Some(tee) = products.first_mut() {
        tee.short_description = Some("Heavyweight combed cotton tee".to_string());
        tee.sizes = Some(vec!["S".into(), "M".into(), "L".into(), "XL".into()]);
        tee.colors = Some(vec!["White".into(), "Black".into(), "Navy".into()]);
        tee.is_featured = true;
    }
    if let Some(jeans) = products.get_mut(1) {
        jeans.sizes = Some(vec!["28".into(), "30".into(), "32".into(), "34".into()]);
        jeans.sale_price_cents = Some(4999);
    }
    if let Some(dress) = products.get_mut(6) {
        dress.sizes = Some(vec!["XS".into(), "S".into(), "M".into(), "L".into()]);
        dress.is_featured = true;
    }

    products
}

fn demo_reviews() -> Vec<Review> {
    let review = |id, product_id, user_name: &str, rating, comment: &str, date: &str| Review {
        id,
        product_id,
        user_name: user_name.to_string(),
        rating,
        comment: comment.to_string(),
        date: date.to_string(),
    };

    vec![
        review(1, 1, "Linh", 5, "Soft fabric, true to size.", "2024-03-02"),
        review(2, 1, "Marco", 4, "Great tee, collar runs slightly wide.", "2024-03-18"),
        review(3, 2, "Aisha", 5, "Best fitting jeans I own.", "2024-02-11"),
        review(4, 5, "Tomás", 4, "Beautiful leather, straps could be longer.", "2024-04-01"),
        review(5, 7, "June", 5, "Perfect for warm weather.", "2024-04-22"),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        let catalog = StaticCatalog::demo();
        let tee = catalog.find_by_id(1).unwrap();
        assert_eq!(tee.name, "Premium Cotton Tee");
        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn test_demo_catalog_ids_are_unique() {
        let catalog = StaticCatalog::demo();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_reviews_for_product() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.reviews_for(1).len(), 2);
        assert!(catalog.reviews_for(999).is_empty());
    }

    #[test]
    fn test_sale_price_feeds_effective_price() {
        let catalog = StaticCatalog::demo();
        let jeans = catalog.find_by_id(2).unwrap();
        assert_eq!(jeans.effective_price().cents(), 4999);
    }
}
