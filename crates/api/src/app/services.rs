//! Service layer: the shared catalog and the operations the routes call.

use std::sync::{Mutex, MutexGuard, PoisonError};

use catalog_core::{DomainError, DomainResult, Entity, ProductId};
use catalog_products::{Attributes, Catalog, Product};

/// Deleting this id always fails with a simulated backend error.
pub const SIMULATED_FAILURE_ID: &str = "critical";

/// Message carried by the simulated backend failure.
pub const SIMULATED_FAILURE_MESSAGE: &str = "Error interno simulado: No se pudo conectar a la BD.";

/// Owns the catalog for the lifetime of the process.
///
/// Every operation takes the single catalog lock for its whole
/// find-then-mutate sequence, so concurrent requests never interleave.
#[derive(Debug, Default)]
pub struct CatalogService {
    catalog: Mutex<Catalog>,
}

impl CatalogService {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-mutated, so a
    // poisoned guard is still safe to use.
    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self, min_stock: Option<u64>) -> Vec<Product> {
        self.catalog().list(min_stock)
    }

    pub fn create(&self, attributes: Attributes) -> DomainResult<Product> {
        let product = self.catalog().create(attributes)?;
        tracing::info!(product_id = %product.id(), "product created");
        Ok(product)
    }

    pub fn update(&self, id: &ProductId, patch: Attributes) -> DomainResult<Product> {
        let product = self.catalog().update(id, patch)?;
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub fn delete(&self, id: &ProductId) -> DomainResult<Product> {
        if *id == SIMULATED_FAILURE_ID {
            tracing::warn!(product_id = %id, "simulated backend failure on delete");
            return Err(DomainError::internal(SIMULATED_FAILURE_MESSAGE));
        }

        let product = self.catalog().delete(id)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(product)
    }
}
