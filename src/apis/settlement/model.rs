use crate::{
    apis::payments::{EmvResponse, Transaction},
    codec::{lenient_integer, null_as_empty},
    response::{gateway_response, ResponseStatus},
};
use serde::{Deserialize, Serialize};

/// Body of the batch calls. Only the developer application is sent, and it is stamped by the client.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRequest {}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_integer")]
    pub batch_id: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub batch_count: Option<i64>,
    /// Set by some of the batch calls only, see `transactions` for the others.
    pub transaction: Option<Transaction>,
    #[serde(deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
    pub emv_response: Option<EmvResponse>,
}

gateway_response!(BatchResponse);
