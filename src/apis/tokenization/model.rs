use crate::{
    apis::payments::{Card, EmvResponse},
    codec::lenient_string,
    response::{gateway_response, ResponseStatus},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// `public_key` is filled in from the client configuration when left empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub public_key: String,
    pub card: Option<Card>,
    /// Stores the token in the vault.
    pub add_to_vault: Option<bool>,
    /// Generated by the gateway when empty.
    pub customer_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub token: Option<String>,
    pub emv_response: Option<EmvResponse>,
}

gateway_response!(TokenResponse);
