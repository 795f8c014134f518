//! Ordered, in-memory product collection.

use serde_json::json;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::{Attributes, Product, validate_new};

/// Insertion-ordered sequence of products.
///
/// Every product carries a unique, non-empty id: ids are generated here on
/// create and are immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-loaded with the demo products the service starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("a1", json!({ "nombre": "Laptop Gamer", "precio": 1200, "stock": 5 })),
            ("b2", json!({ "nombre": "Teclado Mecánico", "precio": 80, "stock": 20 })),
            ("c3", json!({ "nombre": "Monitor 4K", "precio": 450, "stock": 12 })),
        ];

        let products = seed
            .into_iter()
            .filter_map(|(id, fields)| match fields {
                serde_json::Value::Object(map) => Some(Product::new(ProductId::from(id), map)),
                _ => None,
            })
            .collect();

        Self { products }
    }

    /// Build a catalog from existing records, keeping their order.
    ///
    /// Later duplicates of an id are dropped so the uniqueness invariant holds.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            if catalog.position(product.id()).is_none() {
                catalog.products.push(product);
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.has_id(id))
    }

    /// List products, optionally keeping only those with `stock >= min_stock`.
    ///
    /// Products whose stock is missing or not numeric never pass a filter.
    pub fn list(&self, min_stock: Option<u64>) -> Vec<Product> {
        match min_stock {
            None => self.products.clone(),
            Some(min) => self
                .products
                .iter()
                .filter(|p| p.stock().is_some_and(|stock| stock >= min as f64))
                .cloned()
                .collect(),
        }
    }

    /// Validate, assign a fresh id and append to the end of the catalog.
    pub fn create(&mut self, attributes: Attributes) -> DomainResult<Product> {
        validate_new(&attributes)?;

        let mut id = ProductId::generate();
        while self.position(&id).is_some() {
            id = ProductId::generate();
        }

        let product = Product::new(id, attributes);
        self.products.push(product.clone());
        tracing::debug!(product_id = %product.id(), total = self.products.len(), "product appended");
        Ok(product)
    }

    /// Shallow-merge `patch` onto the first product with `id`.
    ///
    /// No validation is re-run: an update may blank out `nombre`.
    pub fn update(&mut self, id: &ProductId, patch: Attributes) -> DomainResult<Product> {
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.clone()))?;

        let product = &mut self.products[idx];
        product.merge(patch);
        Ok(product.clone())
    }

    /// Remove the first product with `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: &ProductId) -> DomainResult<Product> {
        let idx = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.clone()))?;
        Ok(self.products.remove(idx))
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.has_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn attrs(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn seeded_catalog_has_three_demo_products() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);
        assert_eq!(ids(&catalog.list(None)), vec!["a1", "b2", "c3"]);
        assert_eq!(
            catalog.get(&ProductId::from("b2")).and_then(Product::nombre),
            Some("Teclado Mecánico")
        );
    }

    #[test]
    fn list_filters_by_minimum_stock_in_order() {
        let catalog = Catalog::seeded();
        let filtered = catalog.list(Some(10));
        assert_eq!(ids(&filtered), vec!["b2", "c3"]);
    }

    #[test]
    fn list_filter_is_inclusive() {
        let catalog = Catalog::seeded();
        assert_eq!(ids(&catalog.list(Some(12))), vec!["b2", "c3"]);
        assert_eq!(ids(&catalog.list(Some(13))), vec!["b2"]);
        assert!(catalog.list(Some(21)).is_empty());
    }

    #[test]
    fn list_filter_skips_products_without_numeric_stock() {
        let mut catalog = Catalog::new();
        catalog.create(attrs(json!({ "nombre": "Sin stock" }))).unwrap();
        catalog.create(attrs(json!({ "nombre": "Texto", "stock": "n/a" }))).unwrap();
        catalog.create(attrs(json!({ "nombre": "Ok", "stock": 3 }))).unwrap();

        let filtered = catalog.list(Some(1));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre(), Some("Ok"));
    }

    #[test]
    fn list_filter_compares_loose_numeric_stock() {
        let mut catalog = Catalog::new();
        catalog.create(attrs(json!({ "nombre": "Sin fin", "stock": "Infinity" }))).unwrap();
        catalog.create(attrs(json!({ "nombre": "Hex", "stock": "0x14" }))).unwrap();
        catalog.create(attrs(json!({ "nombre": "Poco", "stock": "0x2" }))).unwrap();

        let kept: Vec<String> = catalog
            .list(Some(10))
            .iter()
            .filter_map(|p| p.nombre().map(str::to_string))
            .collect();
        assert_eq!(kept, vec!["Sin fin", "Hex"]);
    }

    #[test]
    fn create_appends_with_generated_id() {
        let mut catalog = Catalog::seeded();
        let created = catalog
            .create(attrs(json!({ "nombre": "Mouse", "precio": 25, "stock": 100 })))
            .unwrap();

        assert!(!created.id().as_str().is_empty());
        assert_eq!(created.nombre(), Some("Mouse"));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.list(None).last(), Some(&created));
    }

    #[test]
    fn create_rejects_blank_name_without_mutation() {
        let mut catalog = Catalog::seeded();
        for blank in ["", "\u{feff}"] {
            let err = catalog.create(attrs(json!({ "nombre": blank }))).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn create_ignores_caller_supplied_id() {
        let mut catalog = Catalog::seeded();
        let created = catalog
            .create(attrs(json!({ "id": "a1", "nombre": "Duplicado" })))
            .unwrap();
        assert_ne!(created.id().as_str(), "a1");
        assert_eq!(
            catalog.get(&ProductId::from("a1")).and_then(Product::nombre),
            Some("Laptop Gamer")
        );
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let mut catalog = Catalog::seeded();
        let updated = catalog
            .update(&ProductId::from("a1"), attrs(json!({ "precio": 999 })))
            .unwrap();

        assert_eq!(updated.precio(), Some(999.0));
        assert_eq!(updated.nombre(), Some("Laptop Gamer"));
        assert_eq!(updated.stock(), Some(5.0));
        assert_eq!(catalog.get(&ProductId::from("a1")), Some(&updated));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut catalog = Catalog::seeded();
        let before = catalog.list(None);
        let err = catalog
            .update(&ProductId::from("zz"), attrs(json!({ "precio": 1 })))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound(ProductId::from("zz")));
        assert_eq!(catalog.list(None), before);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut catalog = Catalog::seeded();
        let removed = catalog.delete(&ProductId::from("b2")).unwrap();
        assert_eq!(removed.nombre(), Some("Teclado Mecánico"));
        assert_eq!(ids(&catalog.list(None)), vec!["a1", "c3"]);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut catalog = Catalog::seeded();
        let err = catalog.delete(&ProductId::from("nope")).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn from_products_drops_duplicate_ids() {
        let a = Product::new(ProductId::from("a"), attrs(json!({ "nombre": "uno" })));
        let dup = Product::new(ProductId::from("a"), attrs(json!({ "nombre": "dos" })));
        let catalog = Catalog::from_products([a.clone(), dup]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&ProductId::from("a")), Some(&a));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            /// Property: ids stay unique and non-empty across any number of creates.
            #[test]
            fn created_ids_are_unique(names in proptest::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,20}", 1..50)) {
                let mut catalog = Catalog::seeded();
                for name in &names {
                    catalog.create(attrs(json!({ "nombre": name }))).unwrap();
                }
                let seen: HashSet<&str> = catalog.iter().map(|p| p.id().as_str()).collect();
                prop_assert_eq!(seen.len(), catalog.len());
                prop_assert!(seen.iter().all(|id| !id.is_empty()));
            }

            /// Property: the filter keeps exactly the products with stock >= min, in order.
            #[test]
            fn filter_matches_predicate(stocks in proptest::collection::vec(0u64..100, 0..30), min in 1u64..100) {
                let mut catalog = Catalog::new();
                for stock in &stocks {
                    catalog.create(attrs(json!({ "nombre": "p", "stock": stock }))).unwrap();
                }
                let kept: Vec<u64> = catalog
                    .list(Some(min))
                    .iter()
                    .filter_map(|p| p.stock())
                    .map(|s| s as u64)
                    .collect();
                let expected: Vec<u64> = stocks.iter().copied().filter(|s| *s >= min).collect();
                prop_assert_eq!(kept, expected);
            }
        }
    }
}
