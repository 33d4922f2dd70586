use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{AppError, Result};

/// Outbound request body, either from a validated model or a raw mapping
///
/// Both variants normalize to the same JSON object before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Model(Map<String, Value>),
    Raw(Map<String, Value>),
}

impl Payload {
    /// Serialize a typed model, dropping fields that were never set
    pub fn from_model<T: Serialize>(model: &T) -> Result<Self> {
        match serde_json::to_value(model)? {
            Value::Object(map) => Ok(Payload::Model(drop_nulls(map))),
            other => Err(AppError::validation(format!(
                "request model must serialize to an object, got {}",
                other
            ))),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Payload::Model(map) | Payload::Raw(map) => Value::Object(map),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        match self {
            Payload::Model(map) | Payload::Raw(map) => map,
        }
    }
}

fn drop_nulls(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter().filter(|(_, v)| !v.is_null()).collect()
}

/// Anything a client method accepts as a request body
pub trait IntoPayload {
    fn into_payload(self) -> Result<Payload>;
}

impl IntoPayload for Payload {
    fn into_payload(self) -> Result<Payload> {
        Ok(self)
    }
}

impl IntoPayload for Map<String, Value> {
    fn into_payload(self) -> Result<Payload> {
        Ok(Payload::Raw(self))
    }
}

impl IntoPayload for Value {
    fn into_payload(self) -> Result<Payload> {
        match self {
            Value::Object(map) => Ok(Payload::Raw(map)),
            other => Err(AppError::validation(format!(
                "raw payload must be a JSON object, got {}",
                other
            ))),
        }
    }
}

impl IntoPayload for &Value {
    fn into_payload(self) -> Result<Payload> {
        self.clone().into_payload()
    }
}

/// Implements [`IntoPayload`] for typed request models, by value and by reference
///
/// The model is validated first, so an invalid request never reaches the network.
#[macro_export]
macro_rules! impl_model_payload {
    ($($model:ty),+ $(,)?) => {
        $(
            impl $crate::requester::IntoPayload for $model {
                fn into_payload(self) -> $crate::core::Result<$crate::requester::Payload> {
                    $crate::requester::IntoPayload::into_payload(&self)
                }
            }

            impl $crate::requester::IntoPayload for &$model {
                fn into_payload(self) -> $crate::core::Result<$crate::requester::Payload> {
                    $crate::core::validate_request(self)?;
                    $crate::requester::Payload::from_model(self)
                }
            }
        )+
    };
}
