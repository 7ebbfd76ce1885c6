//! Product entity - a catalog item

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Product entity. Prices are fixed-point decimals; there is no stock quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for creating or replacing a product row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            description: None,
            image: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product = NewProduct::new("Shea butter", Decimal::new(1250, 2));
        assert_eq!(product.name, "Shea butter");
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert!(product.description.is_none());
        assert!(product.image.is_none());
    }
}
