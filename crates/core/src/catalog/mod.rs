use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::product::{Product, ProductId};
use crate::errors::CatalogError;

/// Hard truncation applied to every search result. Callers wanting more
/// must narrow the query; this is part of the query contract, not a
/// relevance-based top-N.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// An immutable, validated snapshot of the full product collection.
///
/// Insertion order is preserved and drives search result ordering. The id
/// index is built once at load time; between load events the snapshot is
/// never mutated.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Validate a freshly loaded collection and build the id index.
    ///
    /// Rejects duplicate ids, case-insensitively duplicate skus, and
    /// products failing field constraints. On rejection nothing of the
    /// input is kept.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(products.len());
        let mut seen_skus: HashMap<String, ProductId> = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            product
                .check_fields()
                .map_err(|reason| CatalogError::InvalidProduct { id: product.id, reason })?;

            if by_id.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }

            let sku_key = product.sku.trim().to_lowercase();
            if let Some(first) = seen_skus.insert(sku_key, product.id) {
                return Err(CatalogError::DuplicateSku {
                    sku: product.sku.clone(),
                    first,
                    second: product.id,
                });
            }
        }

        Ok(Self { products, by_id })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Case-insensitive substring search over `name`, `sku`, and
    /// `category` (`description` does not participate).
    ///
    /// A trimmed-empty query returns nothing rather than the whole
    /// catalog, so a keystroke-driven suggestion list is never flooded.
    /// Matches keep collection order and are cut at [`SEARCH_RESULT_LIMIT`].
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|product| matches_query(product, &needle))
            .take(SEARCH_RESULT_LIMIT)
            .collect()
    }

    /// Point lookup by id. Absence is a normal outcome.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).map(|&index| &self.products[index])
    }
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.sku.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Owns the current catalog snapshot and answers queries against it.
///
/// Readers clone the `Arc` under a short read lock and then work lock-free
/// on a whole snapshot; a replace swaps the `Arc` in one assignment, so
/// concurrent readers observe either the old full collection or the new
/// one, never a mix. Before the first successful load every query sees an
/// empty catalog.
#[derive(Debug, Default)]
pub struct CatalogService {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { current: RwLock::new(Arc::new(catalog)) }
    }

    /// Atomically replace the whole collection.
    ///
    /// The incoming products are validated first; if validation fails the
    /// previous snapshot (or the initial empty one) stays in place and the
    /// error is returned to the caller of the load operation. Returns the
    /// number of products in the new snapshot.
    pub fn replace(&self, products: Vec<Product>) -> Result<usize, CatalogError> {
        let next = Arc::new(Catalog::from_products(products)?);
        let count = next.len();

        match self.current.write() {
            Ok(mut guard) => *guard = next,
            // A poisoned lock still guards a whole snapshot: the swap is a
            // single assignment, so recovery is safe.
            Err(poisoned) => *poisoned.into_inner() = next,
        }

        Ok(count)
    }

    /// The current snapshot; holders keep observing it even across a
    /// subsequent replace.
    pub fn snapshot(&self) -> Arc<Catalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        self.snapshot().search(query).into_iter().cloned().collect()
    }

    pub fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.snapshot().get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{Product, ProductId};
    use crate::errors::CatalogError;

    use super::{Catalog, CatalogService, SEARCH_RESULT_LIMIT};

    fn product(id: i64, name: &str, sku: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            price: Decimal::new(9_999, 2),
            gst_rate: Decimal::new(18, 0),
            unit: "piece".to_string(),
            stock: Some(10),
            description: String::new(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_products(vec![
            product(1, "Dell Latitude 5420 Laptop", "DELL-LAT-5420", "Electronics"),
            product(2, "Samsung Galaxy S23", "SAM-GS23", "Electronics"),
            product(3, "Ergonomic Office Chair", "FURN-CHAIR-01", "Furniture"),
            product(4, "Logitech MX Master 3S Mouse", "LOG-MX3S", "Electronics"),
        ])
        .expect("sample catalog should satisfy invariants")
    }

    #[test]
    fn empty_and_whitespace_queries_return_nothing() {
        let catalog = sample_catalog();

        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("\t\n").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_name_sku_and_category() {
        let catalog = sample_catalog();

        let by_name = catalog.search("dell");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, ProductId(1));

        let by_sku = catalog.search("sam-gs");
        assert_eq!(by_sku.len(), 1);
        assert_eq!(by_sku[0].id, ProductId(2));

        let by_category = catalog.search("FURNITURE");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].id, ProductId(3));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let catalog = sample_catalog();

        let matches = catalog.search("  dell  ");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, ProductId(1));
    }

    #[test]
    fn matches_keep_collection_order() {
        let catalog = sample_catalog();

        let ids: Vec<ProductId> =
            catalog.search("electronics").iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(2), ProductId(4)]);
    }

    #[test]
    fn description_does_not_participate_in_matching() {
        let mut described = product(1, "Widget", "WID-01", "Misc");
        described.description = "unmatched-keyword".to_string();
        let catalog = Catalog::from_products(vec![described])
            .expect("single product should satisfy invariants");

        assert!(catalog.search("unmatched-keyword").is_empty());
    }

    #[test]
    fn results_are_capped_at_the_first_ten_matches() {
        let products = (1..=14)
            .map(|n| product(n, &format!("Cable {n}"), &format!("CBL-{n:03}"), "Accessories"))
            .collect();
        let catalog = Catalog::from_products(products).expect("catalog should load");

        let matches = catalog.search("cable");
        assert_eq!(matches.len(), SEARCH_RESULT_LIMIT);
        let ids: Vec<i64> = matches.iter().map(|product| product.id.0).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn get_returns_present_ids_and_none_for_absent() {
        let catalog = sample_catalog();

        assert_eq!(catalog.get(ProductId(3)).map(|p| p.sku.as_str()), Some("FURN-CHAIR-01"));
        assert!(catalog.get(ProductId(999)).is_none());
    }

    #[test]
    fn duplicate_id_rejects_the_load() {
        let error = Catalog::from_products(vec![
            product(1, "First", "SKU-A", "Misc"),
            product(1, "Second", "SKU-B", "Misc"),
        ])
        .expect_err("duplicate id should be rejected");

        assert_eq!(error, CatalogError::DuplicateId(ProductId(1)));
    }

    #[test]
    fn duplicate_sku_is_rejected_case_insensitively() {
        let error = Catalog::from_products(vec![
            product(1, "First", "LOG-MX3S", "Misc"),
            product(2, "Second", "log-mx3s", "Misc"),
        ])
        .expect_err("case-folded duplicate sku should be rejected");

        assert!(matches!(
            error,
            CatalogError::DuplicateSku { first: ProductId(1), second: ProductId(2), .. }
        ));
    }

    #[test]
    fn invalid_product_fields_reject_the_load() {
        let error = Catalog::from_products(vec![product(1, "", "SKU-A", "Misc")])
            .expect_err("blank name should be rejected");

        assert!(matches!(error, CatalogError::InvalidProduct { id: ProductId(1), .. }));
    }

    #[test]
    fn service_is_empty_before_the_first_load() {
        let service = CatalogService::new();

        assert!(service.search("dell").is_empty());
        assert!(service.get_by_id(ProductId(1)).is_none());
    }

    #[test]
    fn failed_replace_retains_the_previous_snapshot() {
        let service = CatalogService::new();
        service
            .replace(vec![product(1, "Dell Latitude 5420 Laptop", "DELL-LAT-5420", "Electronics")])
            .expect("initial load should succeed");

        let error = service
            .replace(vec![
                product(2, "First", "SKU-A", "Misc"),
                product(2, "Second", "SKU-B", "Misc"),
            ])
            .expect_err("duplicate id load should be rejected");
        assert_eq!(error, CatalogError::DuplicateId(ProductId(2)));

        // The old collection must survive untouched.
        assert_eq!(service.search("dell").len(), 1);
        assert!(service.get_by_id(ProductId(2)).is_none());
    }

    #[test]
    fn failed_first_load_leaves_the_service_empty() {
        let service = CatalogService::new();

        service
            .replace(vec![product(1, "", "SKU-A", "Misc")])
            .expect_err("invalid first load should be rejected");

        assert!(service.snapshot().is_empty());
    }

    #[test]
    fn held_snapshots_survive_a_replace() {
        let service = CatalogService::new();
        service
            .replace(vec![product(1, "Dell Latitude 5420 Laptop", "DELL-LAT-5420", "Electronics")])
            .expect("initial load should succeed");

        let before = service.snapshot();
        service
            .replace(vec![product(2, "Samsung Galaxy S23", "SAM-GS23", "Electronics")])
            .expect("second load should succeed");

        // The held snapshot still serves the old collection in full.
        assert_eq!(before.search("dell").len(), 1);
        assert!(before.get(ProductId(2)).is_none());

        // New callers see the new collection in full.
        assert!(service.get_by_id(ProductId(1)).is_none());
        assert_eq!(service.search("samsung").len(), 1);
    }
}
