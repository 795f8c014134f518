use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use catalog_core::text::{parse_number, trim_blank};
use catalog_core::{DomainError, DomainResult, Entity, ProductId};

/// Open set of caller-supplied product fields, in insertion order.
pub type Attributes = Map<String, Value>;

/// Reserved attribute key holding the product identifier.
const ID_KEY: &str = "id";

/// A product record.
///
/// Apart from `id`, the record is an open map: `nombre`, `precio` and `stock`
/// are the well-known fields, anything else the caller sends is kept verbatim.
/// On the wire the record is a single flat JSON object with `id` first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    #[serde(flatten)]
    attributes: Attributes,
}

impl Product {
    /// Build a record. Any `id` key inside `attributes` is dropped; the id is
    /// owned by the catalog, never by the caller.
    pub fn new(id: ProductId, mut attributes: Attributes) -> Self {
        attributes.remove(ID_KEY);
        Self { id, attributes }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        if key == ID_KEY {
            return None;
        }
        self.attributes.get(key)
    }

    pub fn nombre(&self) -> Option<&str> {
        self.attributes.get("nombre").and_then(Value::as_str)
    }

    pub fn precio(&self) -> Option<f64> {
        self.attributes.get("precio").and_then(numeric)
    }

    pub fn stock(&self) -> Option<f64> {
        self.attributes.get("stock").and_then(numeric)
    }

    /// Shallow merge: every key in `patch` overwrites (or adds) the matching
    /// attribute; nested values are replaced wholesale. `id` is immutable and
    /// ignored if present in the patch.
    pub fn merge(&mut self, patch: Attributes) {
        for (key, value) in patch {
            if key == ID_KEY {
                continue;
            }
            self.attributes.insert(key, value);
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validate the attributes of a product about to be created.
///
/// `nombre` must be present, must be a string, and must not be blank after
/// trimming (the byte-order mark counts as blank). Nothing else is checked; `precio` and `stock` are taken as sent.
pub fn validate_new(attributes: &Attributes) -> DomainResult<()> {
    match attributes.get("nombre") {
        None | Some(Value::Null) => Err(DomainError::validation("nombre is required")),
        Some(Value::String(s)) if trim_blank(s).is_empty() => {
            Err(DomainError::validation("nombre cannot be blank"))
        }
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(DomainError::validation("nombre must be a string")),
    }
}

/// Numeric view of a JSON value, as a loose `>=` comparison would see it.
///
/// Numbers as-is, booleans as 0/1, strings via [`parse_number`] (so
/// `"Infinity"` and `"0x14"` count). Null, arrays and objects have no value.
fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}
