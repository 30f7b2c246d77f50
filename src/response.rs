//! Status block shared by every gateway response.

use crate::{
    codec::{lenient_integer, lenient_string},
    error::Rejection,
    Error,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response code reported by the gateway when an operation is approved.
pub const APPROVED: i64 = 1;

/// Outcome of a gateway call, flattened into every typed response.
///
/// A `200 OK` response does not imply that the operation succeeded:
/// callers branch on [`is_approved`](ResponseStatus::is_approved) (or use
/// [`GatewayResponse::ensure_approved`]) to detect business rejections.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseStatus {
    pub success: Option<bool>,
    pub result: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub response_code: Option<i64>,
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub response_date_time: Option<String>,
    pub json_request: Option<Value>,
    pub raw_request: Option<Value>,
    pub raw_response: Option<Value>,
}

impl ResponseStatus {
    pub fn is_approved(&self) -> bool {
        self.response_code == Some(APPROVED)
    }

    pub fn rejection(&self) -> Rejection {
        Rejection {
            response_code: self.response_code,
            result: self.result.clone(),
            message: self.message.clone(),
        }
    }
}

/// Common behaviour of the typed gateway responses.
pub trait GatewayResponse: Sized {
    fn status(&self) -> &ResponseStatus;

    fn is_approved(&self) -> bool {
        self.status().is_approved()
    }

    /// Turns a decoded but rejected response into [`Error::BusinessRejection`](crate::Error::BusinessRejection).
    fn ensure_approved(self) -> Result<Self, Error> {
        if self.is_approved() {
            Ok(self)
        } else {
            let rejection = self.status().rejection();
            tracing::debug!("Operation rejected by the gateway: {}", rejection);
            Err(rejection.into())
        }
    }
}

impl GatewayResponse for ResponseStatus {
    fn status(&self) -> &ResponseStatus {
        self
    }
}

macro_rules! gateway_response {
    ($($response:ty),+ $(,)?) => {
        $(
            impl $crate::response::GatewayResponse for $response {
                fn status(&self) -> &$crate::response::ResponseStatus {
                    &self.status
                }
            }
        )+
    };
}

pub(crate) use gateway_response;
