use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::catalog::lookup_sku;

pub const DEFAULT_LANGUAGE: &str = "English";
pub const MISSING_JOB_ID: &str = "N/A";

/// Product concept supplied by the assistant host.
///
/// `name` keeps the JSON value the host sent so the envelope echoes it
/// unchanged; lookups and messages go through [`Product::display_name`].
/// Every other field is carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_product_name")]
    pub name: Value,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Value::String(name.into()),
            attributes: Map::new(),
        }
    }

    /// Name as text, with numbers printed the way the assistant host prints
    /// them (`42.0` reads as `42`).
    pub fn display_name(&self) -> String {
        scalar_text(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketingContext {
    pub context: Value,
    /// Raw language value. An explicit `null` is kept so it round-trips.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MarketingContext {
    pub fn new(context: impl Into<Value>, language: Option<String>) -> Self {
        Self {
            context: context.into(),
            language: language.map(Value::String),
            extra: Map::new(),
        }
    }

    /// Language forwarded to the backend. Missing, null, empty or otherwise
    /// falsy values fall back to [`DEFAULT_LANGUAGE`].
    pub fn resolved_language(&self) -> Value {
        match &self.language {
            Some(language) if is_truthy(language) => language.clone(),
            _ => Value::String(DEFAULT_LANGUAGE.to_string()),
        }
    }
}

/// Body of the forge POST.
///
/// An unresolved SKU is left out of the serialized body entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForgeRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub user_context: Value,
    pub language: Value,
}

pub fn build_forge_request(product: &Product, marketing: &MarketingContext) -> ForgeRequest {
    ForgeRequest {
        sku: lookup_sku(&product.display_name()).map(str::to_string),
        user_context: marketing.context.clone(),
        language: marketing.resolved_language(),
    }
}

/// Accept body returned by the forge endpoint, e.g.
/// `{"jobId": "…", "status": "PROCESSING"}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgeAccepted {
    pub job_id: Option<Value>,
    pub status: Option<String>,
}

impl ForgeAccepted {
    /// Read the accept fields from an arbitrary JSON body. Bodies that are
    /// not objects carry no job id.
    pub fn from_body(body: &Value) -> Self {
        Self {
            job_id: body.get("jobId").cloned(),
            status: body
                .get("status")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Job id as shown to the user, or [`MISSING_JOB_ID`] when the backend
    /// returned nothing usable.
    pub fn job_label(&self) -> String {
        match &self.job_id {
            Some(id) if is_truthy(id) => scalar_text(id),
            _ => MISSING_JOB_ID.to_string(),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        other => other.to_string(),
    }
}

fn number_text(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(n) if n == 0.0 => "0".to_string(),
        Some(n) if n.fract() == 0.0 && n.abs() < 1e21 => format!("{n:.0}"),
        _ => number.to_string(),
    }
}

fn deserialize_product_name<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        name @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => Ok(name),
        other => Err(serde::de::Error::custom(format!(
            "product name must be a string, number or boolean, got {other}"
        ))),
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
