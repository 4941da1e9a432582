use shelfy_core::catalog::Catalog;
use shelfy_core::fixtures::SeedCatalog;

use crate::commands::CommandResult;

/// Validate the built-in demo catalog and print its contents. The seed
/// never touches the configured fixture path; it always reports on the
/// embedded dataset.
pub fn run() -> CommandResult {
    let products = match SeedCatalog::products() {
        Ok(products) => products,
        Err(error) => {
            return CommandResult::failure("seed", "fixture_load", error.to_string(), 3);
        }
    };

    let catalog = match Catalog::from_products(products) {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("seed", "catalog_validation", error.to_string(), 4);
        }
    };

    let entries: Vec<String> = catalog
        .products()
        .iter()
        .map(|product| {
            format!("  - {}: {} ({}, {})", product.id, product.name, product.category, product.sku)
        })
        .collect();
    let message = format!(
        "demo catalog validated: {} products\n{}",
        catalog.len(),
        entries.join("\n")
    );

    CommandResult::success("seed", message)
}
