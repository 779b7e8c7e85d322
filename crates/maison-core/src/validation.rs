//! # Validation Module
//!
//! Input validation rules for the Maison shop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI shell (TypeScript)                                        │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (Rust)                                           │
//! │  ├── Credential / registration field checks                            │
//! │  └── Order shape checks (non-empty items, total consistency)           │
//! │                                                                         │
//! │  Note: the mock authenticator accepts ANY non-empty credential pair.   │
//! │  These checks gate the boolean success of login/register, nothing      │
//! │  stronger - there is no backend to verify against.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Order;
use crate::SHIPPING_FEE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Credential Validators
// =============================================================================

/// Validates a login credential pair.
///
/// ## Rules
/// - Email must not be empty
/// - Password must not be empty
///
/// No format or strength checks: the mock authenticator accepts any
/// non-empty pair, and failing only on empty fields mirrors the storefront's
/// observed behavior.
pub fn validate_credentials(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }

    Ok(())
}

/// Validates registration input.
///
/// ## Rules
/// - Name, email, and password must all be non-empty
///
/// There is no uniqueness check: no user store exists to check against.
pub fn validate_registration(name: &str, email: &str, password: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }

    validate_credentials(email, password)
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a fully assembled order.
///
/// ## Rules
/// - `items` must be non-empty
/// - Every line quantity must be positive
/// - `total_cents` must equal the sum of line totals plus the flat shipping
///   fee
///
/// `checkout::build_order` runs this before handing an order out, so orders
/// built through the normal path always pass.
pub fn validate_order(order: &Order) -> CoreResult<()> {
    if order.items.is_empty() {
        return Err(ValidationError::Required { field: "items" }.into());
    }

    for item in &order.items {
        if item.quantity <= 0 {
            return Err(ValidationError::MustBePositive { field: "quantity" }.into());
        }
    }

    let expected = order.items_total().cents() + SHIPPING_FEE_CENTS;
    if order.total_cents != expected {
        return Err(CoreError::TotalMismatch {
            expected_cents: expected,
            actual_cents: order.total_cents,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderItem, OrderStatus, PaymentMethod, ShippingInfo};
    use chrono::Utc;

    fn test_order(items: Vec<OrderItem>, total_cents: i64) -> Order {
        Order {
            id: "test-order".to_string(),
            placed_at: Utc::now(),
            total_cents,
            status: OrderStatus::Pending,
            items,
            shipping: ShippingInfo {
                name: "Jamie Doe".to_string(),
                phone: "555-0199".to_string(),
                address: "12 Rue de Rivoli".to_string(),
            },
            payment: PaymentMethod::CashOnDelivery,
        }
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("shopper@example.com", "pw").is_ok());
        assert!(validate_credentials("", "pw").is_err());
        assert!(validate_credentials("shopper@example.com", "").is_err());
        assert!(validate_credentials("   ", "pw").is_err());
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Jamie", "jamie@example.com", "pw").is_ok());
        assert!(validate_registration("", "jamie@example.com", "pw").is_err());
        assert!(validate_registration("Jamie", "", "pw").is_err());
        assert!(validate_registration("Jamie", "jamie@example.com", "").is_err());
    }

    #[test]
    fn test_validate_order_rejects_empty_items() {
        let order = test_order(vec![], SHIPPING_FEE_CENTS);
        assert!(matches!(
            validate_order(&order),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }

    #[test]
    fn test_validate_order_checks_total() {
        let items = vec![OrderItem {
            product_id: 1,
            quantity: 2,
            unit_price_cents: 1000,
        }];

        let good = test_order(items.clone(), 2000 + SHIPPING_FEE_CENTS);
        assert!(validate_order(&good).is_ok());

        let bad = test_order(items, 2000);
        assert!(matches!(
            validate_order(&bad),
            Err(CoreError::TotalMismatch { .. })
        ));
    }
}
