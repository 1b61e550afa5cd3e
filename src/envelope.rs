use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Uniform result of every handler operation.
///
/// Serializes as `{ "success": true, "data": ... }` or
/// `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageResponse<T> {
    Success(T),
    Failure(String),
}

impl<T> MessageResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, MessageResponse::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            MessageResponse::Success(data) => Some(data),
            MessageResponse::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MessageResponse::Success(_) => None,
            MessageResponse::Failure(msg) => Some(msg),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            MessageResponse::Success(data) => Ok(data),
            MessageResponse::Failure(msg) => Err(msg),
        }
    }
}

impl<T> From<Result<T, AppError>> for MessageResponse<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => MessageResponse::Success(data),
            Err(err) => MessageResponse::Failure(err.into_message()),
        }
    }
}

impl<T: Serialize> Serialize for MessageResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MessageResponse", 2)?;
        match self {
            MessageResponse::Success(data) => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            MessageResponse::Failure(msg) => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", msg)?;
            }
        }
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MessageResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawEnvelope<T> {
            success: bool,
            data: Option<T>,
            error: Option<String>,
        }

        let raw = RawEnvelope::<T>::deserialize(deserializer)?;
        match (raw.success, raw.data, raw.error) {
            (true, Some(data), _) => Ok(MessageResponse::Success(data)),
            (true, None, _) => Err(de::Error::missing_field("data")),
            (false, _, Some(msg)) => Ok(MessageResponse::Failure(msg)),
            (false, _, None) => Err(de::Error::missing_field("error")),
        }
    }
}
