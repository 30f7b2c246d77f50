use crate::{
    apis::{
        payments::{
            Address, AddressDetails, Card, Check, EmvResponse, UserDefinedField,
            UserDefinedFieldDetails,
        },
        recurring::{
            InstallmentPaymentPlanDetails, RecurringPaymentPlanDetails, VariablePaymentPlanDetails,
        },
    },
    codec::{lenient_integer, lenient_string, null_as_empty},
    response::{gateway_response, ResponseStatus},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Mandatory for updates. On creation, set it to manage your own customer ids.
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub send_email_receipts: Option<bool>,
    pub company: String,
    pub notes: String,
    pub customer_duplicate_check_indicator: i64,
    pub address: Option<Address>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountRequest {
    pub customer_id: String,
    /// Mandatory for updates.
    pub payment_method_id: String,
    pub notes: String,
    pub phone: String,
    pub primary: Option<bool>,
    pub account_duplicate_check_indicator: i64,
    pub card: Option<Card>,
    pub check: Option<Check>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct CustomerAndPaymentRequest {
    pub customer_id: String,
    pub payment_method_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub primary: Option<bool>,
    pub send_email_receipts: Option<bool>,
    pub company: String,
    pub notes: String,
    pub customer_duplicate_check_indicator: i64,
    pub account_duplicate_check_indicator: i64,
    pub card: Option<Card>,
    pub check: Option<Check>,
    pub address: Option<Address>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

/// Response of create, get and update customer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    pub vault_customer: Option<VaultCustomer>,
}

/// Response of create, get, update and delete payment account.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentAccountResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub vault_payment_method: Option<VaultPaymentMethod>,
    pub emv_response: Option<EmvResponse>,
}

/// Response of create and update customer and payment.
///
/// The customer and the payment account are processed separately, each with its own outcome.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerAndPaymentResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub customer_success: Option<bool>,
    pub customer_result: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub customer_response_code: Option<i64>,
    pub customer_message: Option<String>,
    #[serde(alias = "CustomerResponseMessage")]
    pub customer_response_message: Option<String>,
    pub account_success: Option<bool>,
    pub account_result: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub account_response_code: Option<i64>,
    pub account_message: Option<String>,
    pub account_response_message: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub assigned_payment_id: Option<String>,
    pub vault_customer: Option<VaultCustomer>,
    pub emv_response: Option<EmvResponse>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultCustomer {
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub send_email_receipts: Option<bool>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub primary_payment_method_id: Option<String>,
    pub address: Option<AddressDetails>,
    #[serde(deserialize_with = "null_as_empty")]
    pub payment_methods: Vec<VaultPaymentMethod>,
    #[serde(deserialize_with = "null_as_empty")]
    pub recurring_payment_plans: Vec<RecurringPaymentPlanDetails>,
    #[serde(deserialize_with = "null_as_empty")]
    pub installment_payment_plans: Vec<InstallmentPaymentPlanDetails>,
    #[serde(deserialize_with = "null_as_empty")]
    pub variable_payment_plans: Vec<VariablePaymentPlanDetails>,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_defined_fields: Vec<UserDefinedFieldDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultPaymentMethod {
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub payment_id: Option<String>,
    pub notes: Option<String>,
    pub method: Option<String>,
    pub primary: Option<bool>,
    pub last_access_date: Option<String>,
    pub card: Option<MaskedCard>,
    pub check: Option<MaskedCheck>,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_defined_fields: Vec<UserDefinedFieldDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskedCard {
    pub masked_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub last_four_digits: Option<String>,
    pub credit_card_type: Option<String>,
    pub expiration_date: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct MaskedCheck {
    pub account_type: Option<String>,
    pub check_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub routing_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub account_number: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub check_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub front: Option<String>,
    pub back: Option<String>,
    pub verification: Option<String>,
    pub address: Option<AddressDetails>,
}

gateway_response!(CustomerResponse, PaymentAccountResponse, CustomerAndPaymentResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vault_customer_decodes_nested_records() {
        let customer: VaultCustomer = serde_json::from_value(json!({
            "customerId": "5000",
            "firstName": "Jane",
            "address": { "line1": "123 Main St.", "zip": 78759 },
            "paymentMethods": [
                {
                    "paymentId": 1,
                    "primary": true,
                    "card": { "maskedNumber": "XXXXXXXXXXXX1111", "lastFourDigits": "1111" },
                    "userDefinedFields": null
                }
            ],
            "recurringPaymentPlans": null,
            "userDefinedFields": [{ "udfName": "udf1", "value": "one" }]
        }))
        .unwrap();

        assert_eq!(customer.customer_id.as_deref(), Some("5000"));
        assert_eq!(customer.address.unwrap().zip.as_deref(), Some("78759"));
        assert!(customer.recurring_payment_plans.is_empty());
        assert!(customer.installment_payment_plans.is_empty());
        assert_eq!(customer.user_defined_fields[0].udf_name.as_deref(), Some("udf1"));

        let payment_method = &customer.payment_methods[0];
        assert_eq!(payment_method.payment_id.as_deref(), Some("1"));
        assert_eq!(payment_method.primary, Some(true));
        assert_eq!(payment_method.check, None);
        assert_eq!(
            payment_method.card.as_ref().unwrap().last_four_digits.as_deref(),
            Some("1111")
        );
        assert!(payment_method.user_defined_fields.is_empty());
    }

    #[test]
    fn customer_and_payment_outcomes_are_reported_separately() {
        let res: CustomerAndPaymentResponse = serde_json::from_value(json!({
            "responseCode": 1,
            "customerSuccess": true,
            "customerResponseCode": 1,
            "CustomerResponseMessage": "Customer created",
            "accountSuccess": false,
            "accountResponseCode": "3",
            "assignedPaymentId": 2
        }))
        .unwrap();

        assert_eq!(res.customer_response_code, Some(1));
        assert_eq!(
            res.customer_response_message.as_deref(),
            Some("Customer created")
        );
        assert_eq!(res.account_success, Some(false));
        assert_eq!(res.account_response_code, Some(3));
        assert_eq!(res.assigned_payment_id.as_deref(), Some("2"));
        assert_eq!(res.vault_customer, None);
    }
}
