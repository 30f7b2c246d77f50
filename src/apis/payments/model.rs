use crate::{
    codec::{lenient_f64, lenient_integer, lenient_string},
    response::{gateway_response, ResponseStatus},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    pub amount: f64,
    pub card: Option<Card>,
    pub check: Option<Check>,
    pub extended_information: Option<ExtendedInformation>,
    /// Required when sending manually encrypted card data.
    pub encryption: Option<Encryption>,
    pub payment_vault_token: Option<PaymentVaultToken>,
    pub add_to_vault: Option<bool>,
    pub add_to_vault_on_failure: Option<bool>,
    pub cash_back_amount: f64,
    pub allow_partial_charges: Option<bool>,
    pub transaction_duplicate_check_indicator: i64,
    pub order_id: String,
    /// Transaction to void or refund.
    pub transaction_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct PriorAuthCaptureRequest {
    pub transaction_id: i64,
    pub amount: f64,
    pub extended_information: Option<ExtendedInformation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub track_data: String,
    pub number: String,
    pub cvv: String,
    /// `MM/YY`
    pub expiration_date: String,
    pub ksn: String,
    pub pinblock: String,
    pub first_name: String,
    pub last_name: String,
    pub signature: String,
    pub email: String,
    pub email_receipt: Option<bool>,
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct Check {
    pub account_type: String,
    pub check_type: String,
    pub routing_number: String,
    pub account_number: String,
    pub check_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub front: String,
    pub back: String,
    pub verification: String,
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub company: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct Encryption {
    pub encryption_mode: i64,
}

/// Reference to a payment method stored in the vault.
///
/// `public_key` is filled in from the client configuration when left empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct PaymentVaultToken {
    pub customer_id: String,
    pub payment_method_id: String,
    pub public_key: String,
    pub payment_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct ExtendedInformation {
    pub type_of_goods: String,
    pub device_code: String,
    pub entry_source: String,
    pub notes: String,
    pub invoice_number: String,
    pub invoice_descriptor: String,
    pub additional_terminal_info: Option<AdditionalTerminalInfo>,
    pub level_two_data: Option<LevelTwoData>,
    pub level_three_data: Option<LevelThreeData>,
    pub mail_or_telephone_data: Option<MailOrTelephoneData>,
    pub service_data: Option<ServiceData>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct AdditionalTerminalInfo {
    pub terminal_id: String,
    pub terminal_city: String,
    pub terminal_state: String,
    pub terminal_location: String,
    pub store_number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct LevelTwoData {
    pub order_date: String,
    pub purchase_order: String,
    pub duty_amount: f64,
    pub freight_amount: f64,
    pub retail_lane_number: i64,
    pub tax_amount: f64,
    /// One of `NOT_INCLUDED`, `INCLUDED`, `EXEMPT`.
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct LevelThreeData {
    pub order_date: String,
    pub discount_amount: f64,
    pub vat_data: Option<VatData>,
    pub destination_address: Option<Address>,
    pub original_address: Option<Address>,
    pub products: Vec<Product>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct VatData {
    pub purchaser_vat_number: String,
    pub merchant_vat_number: String,
    pub tax_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub alternate_tax_id: String,
    pub commodity_code: String,
    pub discount_amount: f64,
    pub discount_rate: f64,
    pub discount_indicator: String,
    pub gross_net_indicator: String,
    pub item_code: String,
    pub item_name: String,
    pub item_description: String,
    pub unit: String,
    pub unit_price: f64,
    pub quantity: f64,
    pub total_amount: f64,
    pub tax_amount: f64,
    pub tax_rate: f64,
    pub tax_type_identifier: String,
    pub tax_type_applied: String,
    pub taxable: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct MailOrTelephoneData {
    /// One of `SINGLE_PURCHASE`, `RECURRING`, `INSTALLMENT`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Required for `INSTALLMENT`.
    #[serde(rename = "totalNumberofInstallments")]
    pub total_number_of_installments: String,
    /// Required for `INSTALLMENT`.
    pub current_installment: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct ServiceData {
    pub gratuity_amount: f64,
    pub server: String,
}

/// Merchant defined field, `udf_name` ranges from `udf1` to `udf50`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedField {
    pub udf_name: String,
    pub value: String,
}

/// Response of authorize, charge, verify, capture, void, refund and credit.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub transaction: Option<Transaction>,
    pub emv_response: Option<EmvResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    #[serde(deserialize_with = "lenient_integer")]
    pub transaction_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub secure_net_id: Option<String>,
    pub transaction_type: Option<String>,
    pub response_text: Option<String>,
    pub authorization_code: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub authorized_amount: Option<f64>,
    pub allowed_partial_charges: Option<bool>,
    pub payment_type_code: Option<String>,
    pub payment_type_result: Option<String>,
    pub level2_valid: Option<bool>,
    pub level3_valid: Option<bool>,
    pub credit_card_type: Option<String>,
    pub card_number: Option<String>,
    pub avs_code: Option<String>,
    pub avs_result: Option<String>,
    #[serde(rename = "cardHolder_FirstName")]
    pub cardholder_first_name: Option<String>,
    #[serde(rename = "cardHolder_LastName")]
    pub cardholder_last_name: Option<String>,
    pub expiration_date: Option<String>,
    pub email: Option<String>,
    pub email_receipt: Option<bool>,
    pub card_code_code: Option<String>,
    pub card_code_result: Option<String>,
    pub account_name: Option<String>,
    pub account_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub check_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub trace_number: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub surcharge_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub cash_back_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub gratuity: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub additional_amount: Option<f64>,
    pub network_code: Option<String>,
    pub method: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub fns_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub voucher_number: Option<String>,
    pub fleet_card_info: Option<Value>,
    pub image_result: Option<Value>,
    pub market_specific_data: Option<Value>,
    pub industry_specific_data: Option<Value>,
    pub additional_data1: Option<String>,
    pub additional_data2: Option<String>,
    pub additional_data3: Option<String>,
    pub additional_data4: Option<String>,
    pub additional_data5: Option<String>,
    pub bill_address: Option<AddressDetails>,
    pub transaction_data: Option<TransactionData>,
    pub settlement_data: Option<SettlementData>,
    pub vault_data: Option<VaultData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionData {
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SettlementData {
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub batch_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultData {
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub token: Option<VaultToken>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultToken {
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub payment_method_id: Option<String>,
    pub payment_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressDetails {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub zip: Option<String>,
    pub country: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EmvResponse {
    pub issuerauthenticationdata: Option<String>,
    #[serde(rename = "issuerscripttemplateE1")]
    pub issuerscripttemplate_e1: Option<String>,
    #[serde(rename = "issuerscripttemplateE2")]
    pub issuerscripttemplate_e2: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDefinedFieldDetails {
    pub udf_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub value: Option<String>,
}

gateway_response!(AuthResponse);
