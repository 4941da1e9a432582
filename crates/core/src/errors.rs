use thiserror::Error;

use crate::domain::product::ProductId;

/// Rejection reasons for a catalog load. Queries themselves cannot fail:
/// an empty search result and a missing id are normal outcomes, not errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0} in catalog load")]
    DuplicateId(ProductId),
    #[error("duplicate sku `{sku}` shared by products {first} and {second}")]
    DuplicateSku { sku: String, first: ProductId, second: ProductId },
    #[error("product {id} rejected: {reason}")]
    InvalidProduct { id: ProductId, reason: String },
}
