use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use catalog_core::text::trim_blank_start;
use catalog_products::{Attributes, Product};

use crate::app::errors::ApiError;

// -------------------------
// Response envelope
// -------------------------

/// Status marker carried in every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Estado {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CREADO")]
    Creado,
    #[serde(rename = "ACTUALIZADO")]
    Actualizado,
    #[serde(rename = "ELIMINADO")]
    Eliminado,
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "ERROR FATAL")]
    ErrorFatal,
}

/// JSON body shared by every endpoint. Absent fields are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    #[serde(skip)]
    status: StatusCode,
    pub estado: Estado,
    pub mensaje: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datos_recibidos: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Product>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurso: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurso_eliminado: Option<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<u16>,
}

impl Envelope {
    pub fn new(status: StatusCode, estado: Estado, mensaje: impl Into<String>) -> Self {
        Self {
            status,
            estado,
            mensaje: mensaje.into(),
            datos_recibidos: None,
            data: None,
            recurso: None,
            recurso_eliminado: None,
            codigo: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn datos_recibidos(mut self, value: Value) -> Self {
        self.datos_recibidos = Some(value);
        self
    }

    pub fn data(mut self, products: Vec<Product>) -> Self {
        self.data = Some(products);
        self
    }

    pub fn recurso(mut self, product: Product) -> Self {
        self.recurso = Some(product);
        self
    }

    pub fn recurso_eliminado(mut self, product: Product) -> Self {
        self.recurso_eliminado = Some(product);
        self
    }

    /// Echo the HTTP status code in the body.
    pub fn with_codigo(mut self) -> Self {
        self.codigo = Some(self.status.as_u16());
        self
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

// -------------------------
// Request parsing
// -------------------------

/// True when the request declares a JSON body (`application/json`, any params).
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Parse a request body that must be a JSON object.
///
/// Bodies not declared as JSON are not read at all, and an empty body counts
/// as `{}`; both leave the caller with no fields.
pub fn parse_object_body(headers: &HeaderMap, body: &[u8]) -> Result<Attributes, ApiError> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::MalformedBody(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(ApiError::MalformedBody(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Query string as a JSON object. Repeated keys collect into an array.
pub fn query_to_json(pairs: &[(String, String)]) -> Value {
    let mut obj = Map::new();
    for (key, value) in pairs {
        let value = Value::String(value.clone());
        match obj.get_mut(key) {
            None => {
                obj.insert(key.clone(), value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }
    Value::Object(obj)
}

/// Interpret a raw `stock_minimo` value.
///
/// Reads the leading integer the way lenient form parsers do: optional blanks
/// and sign, an optional `0x` prefix for hex, then digits; trailing junk is
/// ignored. Only a positive result is a filter: anything else means "no filter".
pub fn parse_min_stock(raw: Option<&str>) -> Option<u64> {
    let s = trim_blank_start(raw?);
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(rest.len(), |(i, _)| i);
    let digits = &rest[..end];
    if digits.is_empty() || negative {
        return None;
    }

    // Overflowing values still mean "a very large minimum".
    let value = u64::from_str_radix(digits, radix).unwrap_or(u64::MAX);
    (value > 0).then_some(value)
}
