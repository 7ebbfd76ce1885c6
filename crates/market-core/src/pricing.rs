//! Cart pricing
//!
//! Pure arithmetic over decimal amounts: subtotal from the cart lines, a
//! shipping surcharge, and the grand total. No I/O and no side effects.

use rust_decimal::Decimal;

use crate::error::DomainError;

/// Flat shipping surcharge applied when the request omits one, in minor
/// currency units (5.00).
pub const DEFAULT_SHIPPING_COST_CENTS: i64 = 500;

/// One cart line as submitted at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub price: Decimal,
    pub quantity: i32,
}

impl CartLine {
    pub fn new(price: Decimal, quantity: i32) -> Self {
        Self { price, quantity }
    }
}

/// Computed checkout totals, each rounded to 2 decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingBreakdown {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

/// The flat default shipping cost as a decimal
pub fn default_shipping_cost() -> Decimal {
    Decimal::new(DEFAULT_SHIPPING_COST_CENTS, 2)
}

/// Price a cart.
///
/// Falls back to the default shipping cost when `shipping` is absent or
/// non-positive. An empty cart is rejected before any arithmetic.
pub fn price_cart(
    lines: &[CartLine],
    shipping: Option<Decimal>,
) -> Result<PricingBreakdown, DomainError> {
    if lines.is_empty() {
        return Err(DomainError::EmptyCart);
    }

    let subtotal: Decimal = lines
        .iter()
        .map(|line| line.price * Decimal::from(line.quantity))
        .sum();

    let shipping = match shipping {
        Some(cost) if cost > Decimal::ZERO => cost,
        _ => default_shipping_cost(),
    };

    Ok(PricingBreakdown {
        subtotal: subtotal.round_dp(2),
        shipping: shipping.round_dp(2),
        total: (subtotal + shipping).round_dp(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        assert!(matches!(price_cart(&[], None), Err(DomainError::EmptyCart)));
    }

    #[test]
    fn test_default_shipping_applied() {
        // 2 x 10.00 + 1 x 5.50, shipping omitted
        let lines = [CartLine::new(dec(1000), 2), CartLine::new(dec(550), 1)];
        let totals = price_cart(&lines, None).unwrap();
        assert_eq!(totals.subtotal, dec(2550));
        assert_eq!(totals.shipping, dec(500));
        assert_eq!(totals.total, dec(3050));
    }

    #[test]
    fn test_explicit_shipping_cost() {
        let lines = [CartLine::new(dec(1999), 1)];
        let totals = price_cart(&lines, Some(dec(1200))).unwrap();
        assert_eq!(totals.subtotal, dec(1999));
        assert_eq!(totals.shipping, dec(1200));
        assert_eq!(totals.total, dec(3199));
    }

    #[test]
    fn test_non_positive_shipping_falls_back_to_default() {
        let lines = [CartLine::new(dec(1000), 1)];
        let zero = price_cart(&lines, Some(Decimal::ZERO)).unwrap();
        assert_eq!(zero.shipping, dec(500));

        let negative = price_cart(&lines, Some(dec(-300))).unwrap();
        assert_eq!(negative.shipping, dec(500));
    }

    #[test]
    fn test_no_cent_drift_on_repeating_amounts() {
        // 3 x 0.10 stays exactly 0.30 with decimal arithmetic
        let lines = [CartLine::new(dec(10), 3)];
        let totals = price_cart(&lines, Some(dec(5))).unwrap();
        assert_eq!(totals.subtotal, dec(30));
        assert_eq!(totals.total, dec(35));
    }
}
