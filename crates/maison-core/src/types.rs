//! # Domain Types
//!
//! Core domain types used throughout the Maison shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Order      │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  status         │   │  name           │       │
//! │  │  price_cents    │   │  total_cents    │   │  email          │       │
//! │  │  category       │   │  items[]        │   │  is_admin       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Category      │   │   OrderStatus   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Shirts         │   │  Pending        │   │  CashOnDelivery │       │
//! │  │  Pants          │   │  Processing     │   │  BankTransfer   │       │
//! │  │  Accessories    │   │  Shipped        │   └─────────────────┘       │
//! │  │  Shoes          │   │  Delivered      │                             │
//! │  │  Dresses        │   │  Cancelled      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Conventions
//! - Products come from the static catalog and carry small integer ids
//! - Users and orders are minted locally and carry UUID v4 string ids

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog product identifier.
///
/// The catalog is an external, read-only collaborator; its ids are plain
/// integers rather than UUIDs.
pub type ProductId = i64;

fn default_true() -> bool {
    true
}

// =============================================================================
// Category
// =============================================================================

/// Merchandising category a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Shirts,
    Pants,
    Accessories,
    Shoes,
    Dresses,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Products are supplied by the [`crate::catalog::Catalog`] collaborator and
/// are never mutated by the state manager.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,

    /// Display name shown on product cards and receipts.
    pub name: String,

    /// Regular price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Long-form description for the product detail page.
    pub description: String,

    /// One-line description for product cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    /// Merchandising category.
    pub category: Category,

    /// Primary image URL.
    pub image_url: String,

    /// Units on hand. Informational only: the cart does not validate
    /// against stock (see the note on `Cart::add_line`).
    pub stock: i64,

    /// Brand name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Stock Keeping Unit - business identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Discounted price in cents; overrides `price_cents` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price_cents: Option<i64>,

    /// Selectable sizes ("S", "M", "L", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,

    /// Selectable colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    /// Whether product is visible in the storefront (soft delete).
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Featured on the home page.
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Returns the price a buyer actually pays: the sale price when one is
    /// set, the regular price otherwise.
    #[inline]
    pub fn effective_price(&self) -> Money {
        Money::from_cents(self.sale_price_cents.unwrap_or(self.price_cents))
    }

    /// Returns the regular price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Review
// =============================================================================

/// A customer review attached to a catalog product.
/// Read-only data supplied alongside the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub product_id: ProductId,
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    pub comment: String,
    /// Display date, e.g. "2024-03-18".
    pub date: String,
}

// =============================================================================
// User
// =============================================================================

/// The currently signed-in shopper, or the admin.
///
/// At most one user is "current" at a time; an anonymous session has none.
/// There is no user store behind this type - see the authenticator in the
/// state crate for how these are minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Locally minted identifier (UUID v4 string).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Email address as entered at login; not verified anywhere.
    pub email: String,

    /// Grants access to the admin console views.
    pub is_admin: bool,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of an order.
///
/// The state manager records whatever status it is handed; transitions are
/// driven by the order-management views, no transition function is enforced
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Confirmed and being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// Received by the customer.
    Delivered,
    /// Cancelled at any point before delivery.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays. Both methods are settled outside the system;
/// no gateway integration exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay the courier on delivery.
    CashOnDelivery,
    /// Manual bank transfer referencing the order id.
    BankTransfer,
}

// =============================================================================
// Order
// =============================================================================

/// Delivery details captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// A line item in a placed order.
/// Uses the snapshot pattern: the unit price is frozen at checkout time and
/// does not follow later catalog price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price in cents at time of checkout (frozen).
    pub unit_price_cents: i64,
}

impl OrderItem {
    /// Line total before shipping (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).times(self.quantity)
    }
}

/// A placed order.
///
/// ## Invariants
/// - `items` is non-empty
/// - `total_cents` equals the sum of line totals plus the shipping fee the
///   caller applied (see `checkout::build_order`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Locally minted identifier (UUID v4 string).
    pub id: String,

    /// When the order was placed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    /// Grand total in cents, shipping included.
    pub total_cents: i64,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Ordered line items (non-empty).
    pub items: Vec<OrderItem>,

    /// Delivery details.
    pub shipping: ShippingInfo,

    /// Settlement method.
    pub payment: PaymentMethod,
}

impl Order {
    /// Sum of line totals, excluding shipping.
    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Grand total as a Money type.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
