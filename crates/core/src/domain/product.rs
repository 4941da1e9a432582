use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single catalog entry. `stock: None` marks a service-type product that
/// is sold per unit of work (e.g. per hour) and never carries inventory;
/// it is a permanent, valid state distinct from zero stock.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Decimal,
    pub gst_rate: Decimal,
    pub unit: String,
    pub stock: Option<u32>,
    #[serde(default)]
    pub description: String,
}

impl Product {
    pub fn is_service(&self) -> bool {
        self.stock.is_none()
    }

    /// Field-level constraints checked on every catalog load. Uniqueness
    /// across the collection is the catalog's job, not the product's.
    pub fn check_fields(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.sku.trim().is_empty() {
            return Err("sku must not be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category must not be empty".to_string());
        }
        if self.price < Decimal::ZERO {
            return Err(format!("price must not be negative (got {})", self.price));
        }
        if self.gst_rate < Decimal::ZERO {
            return Err(format!("gst_rate must not be negative (got {})", self.gst_rate));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{Product, ProductId};

    fn product() -> Product {
        Product {
            id: ProductId(1),
            name: "Dell Latitude 5420 Laptop".to_string(),
            sku: "DELL-LAT-5420".to_string(),
            category: "Electronics".to_string(),
            price: Decimal::new(5_500_000, 2),
            gst_rate: Decimal::new(18, 0),
            unit: "piece".to_string(),
            stock: Some(12),
            description: String::new(),
        }
    }

    #[test]
    fn well_formed_product_passes_field_checks() {
        product().check_fields().expect("fixture product should be valid");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut invalid = product();
        invalid.name = "   ".to_string();

        let reason = invalid.check_fields().expect_err("blank name should fail");
        assert!(reason.contains("name"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut invalid = product();
        invalid.price = Decimal::new(-100, 2);

        let reason = invalid.check_fields().expect_err("negative price should fail");
        assert!(reason.contains("price"));
    }

    #[test]
    fn missing_stock_marks_a_service_product() {
        let mut service = product();
        service.stock = None;

        assert!(service.is_service());
        assert!(!product().is_service());
    }

    #[test]
    fn empty_description_is_allowed() {
        let mut entry = product();
        entry.description = String::new();

        entry.check_fields().expect("description may be empty");
    }
}
