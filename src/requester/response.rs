use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use validator::Validate;

use crate::core::api_errors::{decode_error_body, ErrorShape};
use crate::core::{validate_request, AppError, Result};

/// Raw response of a checked call: status plus the fully read body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub url: String,
    pub body: String,
}

impl ApiResponse {
    /// Body as untyped JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body into a typed response model
    ///
    /// Any missing or mistyped field is reported as a schema mismatch.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|e| AppError::schema(type_name::<T>(), e.to_string()))
    }

    /// Decode the body and check the model's field constraints
    ///
    /// A body that parses but breaks a constraint, such as a malformed email,
    /// is a schema mismatch like any other.
    pub fn decode_valid<T: DeserializeOwned + Validate>(&self) -> Result<T> {
        let value: T = self.decode()?;
        validate_request(&value).map_err(|e| match e {
            AppError::Validation(reason) => AppError::schema(type_name::<T>(), reason),
            other => other,
        })?;
        Ok(value)
    }

    /// Decode the body into a typed error shape
    pub fn decode_error<E: ErrorShape>(&self) -> Result<E> {
        decode_error_body(&self.body)
    }
}
