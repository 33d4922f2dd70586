//! Typed error bodies returned by the Cinescope services.
//!
//! Each shape pins its status code and `error` label, so decoding a 403 body
//! as a 404 shape fails instead of passing silently.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// An error body bound to one HTTP status family
pub trait ErrorShape: DeserializeOwned {
    const MODEL: &'static str;
    const STATUS: u16;

    fn status_code(&self) -> u16;

    /// Fixed `error` label, when the shape carries one
    fn error_label(&self) -> Option<&str>;

    fn expected_label() -> Option<&'static str>;

    /// Checks the literal fields after a structural decode
    fn check_literals(&self) -> Result<()> {
        if self.status_code() != Self::STATUS {
            return Err(AppError::schema(
                Self::MODEL,
                format!("statusCode {} != {}", self.status_code(), Self::STATUS),
            ));
        }
        if let Some(expected) = Self::expected_label() {
            if self.error_label() != Some(expected) {
                return Err(AppError::schema(
                    Self::MODEL,
                    format!("error {:?} != {:?}", self.error_label(), expected),
                ));
            }
        }
        Ok(())
    }
}

/// Decode a JSON body into a typed error shape, checking its literals
pub fn decode_error_body<E: ErrorShape>(body: &str) -> Result<E> {
    let shape: E =
        serde_json::from_str(body).map_err(|e| AppError::schema(E::MODEL, e.to_string()))?;
    shape.check_literals()?;
    Ok(shape)
}

macro_rules! error_shape {
    ($name:ident, $status:expr, $label:expr, $message:ty) => {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub message: $message,
            pub error: String,
            pub status_code: u16,
        }

        impl ErrorShape for $name {
            const MODEL: &'static str = stringify!($name);
            const STATUS: u16 = $status;

            fn status_code(&self) -> u16 {
                self.status_code
            }

            fn error_label(&self) -> Option<&str> {
                Some(&self.error)
            }

            fn expected_label() -> Option<&'static str> {
                Some($label)
            }
        }
    };
}

error_shape!(BadRequestResponse, 400, "Bad Request", Vec<String>);
error_shape!(ForbiddenResponse, 403, "Forbidden", String);
error_shape!(NotFoundResponse, 404, "Not Found", String);
error_shape!(ConflictResponse, 409, "Conflict", String);

/// 401 body: carries no `error` label, the message itself is fixed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnauthorizedResponse {
    pub message: String,
    pub status_code: u16,
}

impl ErrorShape for UnauthorizedResponse {
    const MODEL: &'static str = "UnauthorizedResponse";
    const STATUS: u16 = 401;

    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn error_label(&self) -> Option<&str> {
        None
    }

    fn expected_label() -> Option<&'static str> {
        None
    }

    fn check_literals(&self) -> Result<()> {
        if self.status_code != Self::STATUS {
            return Err(AppError::schema(
                Self::MODEL,
                format!("statusCode {} != {}", self.status_code, Self::STATUS),
            ));
        }
        if self.message != "Unauthorized" {
            return Err(AppError::schema(
                Self::MODEL,
                format!("message {:?} != \"Unauthorized\"", self.message),
            ));
        }
        Ok(())
    }
}

impl BadRequestResponse {
    /// True when any message mentions `field`, case-insensitively
    pub fn mentions(&self, field: &str) -> bool {
        let needle = field.to_lowercase();
        self.message.iter().any(|m| m.to_lowercase().contains(&needle))
    }
}
