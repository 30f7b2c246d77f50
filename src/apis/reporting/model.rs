use crate::{
    apis::payments::{LevelThreeData, LevelTwoData, Transaction},
    codec::{lenient_string, null_as_empty},
    response::{gateway_response, ResponseStatus},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Search criteria. Either a date range or a transaction id is expected.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct SearchTransactionsRequest {
    /// `MM/DD/YYYY`
    pub start_date: String,
    /// `MM/DD/YYYY`
    pub end_date: String,
    pub transaction_id: i64,
    pub order_id: String,
    pub amount: f64,
    pub customer_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    /// Transaction being updated, also used to address the endpoint.
    pub reference_transaction_id: i64,
    /// Base64 encoded signature image.
    pub signature_image: String,
    pub email: String,
    pub email_receipt: Option<bool>,
    pub level_two_data: Option<LevelTwoData>,
    pub level_three_data: Option<LevelThreeData>,
}

/// Response of search, get and update transaction.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionReportingResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    /// Only provided by update transaction.
    #[serde(deserialize_with = "lenient_string")]
    pub ip_address: Option<String>,
    pub transaction: Option<Transaction>,
    #[serde(deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
}

gateway_response!(TransactionReportingResponse);
