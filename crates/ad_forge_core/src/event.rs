//! Decoding of the inbound create-ad event.
//!
//! The host either invokes the function directly with
//! `{"product": {...}, "marketingContext": {...}}` or routes it through an
//! API Gateway proxy, in which case the same document sits in `body`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::contract::{MarketingContext, Product};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdEvent {
    pub product: Product,
    pub marketing_context: MarketingContext,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event payload must be a JSON object")]
    NotAnObject,
    #[error("Event body must be a JSON object")]
    BodyNotAnObject,
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[source] serde_json::Error),
    #[error("Malformed create-ad event: {0}")]
    MalformedEvent(#[source] serde_json::Error),
}

pub fn decode_create_ad_event(event: Value) -> Result<CreateAdEvent, EventError> {
    let payload = unwrap_proxy_body(event)?;
    serde_json::from_value(payload).map_err(EventError::MalformedEvent)
}

fn unwrap_proxy_body(event: Value) -> Result<Value, EventError> {
    let Some(object) = event.as_object() else {
        return Err(EventError::NotAnObject);
    };

    let Some(body) = object.get("body") else {
        return Ok(event);
    };

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => serde_json::from_str(text).map_err(EventError::MalformedBody),
        _ => Err(EventError::BodyNotAnObject),
    }
}
