use crate::{
    apis::payments::{UserDefinedField, UserDefinedFieldDetails},
    codec::{lenient_f64, lenient_integer, lenient_string, null_as_empty},
    response::{gateway_response, ResponseStatus},
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Body of the create and update plan calls.
///
/// `customer_id` (and `plan_id` for updates) also select the endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPlanRequest<P> {
    pub customer_id: String,
    pub plan: Option<P>,
    /// Only needed when updating an existing plan.
    pub plan_id: String,
}

impl<P> PaymentPlanRequest<P> {
    pub fn new(customer_id: impl Into<String>, plan: P) -> Self {
        Self {
            customer_id: customer_id.into(),
            plan: Some(plan),
            plan_id: String::new(),
        }
    }

    pub fn with_plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = plan_id.into();
        self
    }
}

pub type RecurringPaymentPlanRequest = PaymentPlanRequest<RecurringPaymentPlan>;
pub type InstallmentPaymentPlanRequest = PaymentPlanRequest<InstallmentPaymentPlan>;
pub type VariablePaymentPlanRequest = PaymentPlanRequest<VariablePaymentPlan>;

/// Fixed amount charged on a regular cycle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct RecurringPaymentPlan {
    pub amount: f64,
    /// e.g. `WEEKLY`, `MONTHLY`, `ANNUALLY`.
    pub cycle_type: String,
    pub day_of_the_month: i64,
    pub day_of_the_week: i64,
    pub month: i64,
    pub frequency: i64,
    /// `MM/DD/YYYY`
    pub start_date: String,
    /// `MM/DD/YYYY`
    pub end_date: String,
    pub next_payment_date: String,
    pub active: Option<bool>,
    pub notes: String,
    pub plan_id: String,
    pub max_retries: i64,
    pub primary_payment_method_id: String,
    pub secondary_payment_method_id: String,
    pub user_defined_fields: Vec<UserDefinedField>,
}

/// Total amount split into a number of installments.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct InstallmentPaymentPlan {
    pub cycle_type: String,
    pub day_of_the_month: i64,
    pub day_of_the_week: i64,
    pub month: i64,
    pub frequency: i64,
    pub start_date: String,
    pub total_amount: f64,
    pub number_of_payments: i64,
    pub installment_amount: f64,
    pub balloon_amount: f64,
    /// `FIRST` or `LAST`.
    pub balloon_payment_added_to: String,
    pub remainder_amount: f64,
    /// `FIRST` or `LAST`.
    pub remainder_payment_added_to: String,
    pub active: Option<bool>,
    pub notes: String,
    pub max_retries: i64,
    pub primary_payment_method_id: String,
    pub secondary_payment_method_id: String,
    pub user_defined_fields: Vec<UserDefinedField>,
}

/// Plan made of explicitly scheduled payments.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct VariablePaymentPlan {
    pub plan_start_date: String,
    pub plan_end_date: String,
    pub start_date: String,
    pub next_payment_date: String,
    pub active: Option<bool>,
    pub notes: String,
    pub plan_id: String,
    pub max_retries: i64,
    pub primary_payment_method_id: String,
    pub secondary_payment_method_id: String,
    pub scheduled_payments: Vec<ScheduledPayment>,
    pub user_defined_fields: Vec<UserDefinedField>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Builder)]
#[builder(default, setter(into), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPayment {
    pub amount: f64,
    pub scheduled_date: String,
    pub number_of_retries: i64,
    pub paid: Option<bool>,
    pub payment_date: String,
    pub payment_method_id: String,
    pub plan_id: String,
    pub processed: Option<bool>,
    pub schedule_id: i64,
    pub transaction_id: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecurringPaymentPlanResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    pub stored_recurring_payment_plan: Option<RecurringPaymentPlanDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallmentPaymentPlanResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    pub stored_installment_payment_plan: Option<InstallmentPaymentPlanDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct VariablePaymentPlanResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    pub customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    pub stored_variable_payment_plan: Option<VariablePaymentPlanDetails>,
}

/// Response of get payment plan. The stored plan can be of any of the three kinds.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(from = "RawGetPaymentPlanResponse")]
pub struct GetPaymentPlanResponse {
    #[serde(flatten)]
    pub status: ResponseStatus,
    pub customer_id: Option<String>,
    pub plan_id: Option<String>,
    /// `None` when the response carries no plan.
    pub plan: Option<StoredPaymentPlan>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "planType", content = "plan")]
pub enum StoredPaymentPlan {
    Installment(InstallmentPaymentPlanDetails),
    Variable(VariablePaymentPlanDetails),
    Recurring(RecurringPaymentPlanDetails),
}

impl StoredPaymentPlan {
    pub fn plan_type(&self) -> &'static str {
        match self {
            StoredPaymentPlan::Installment(_) => "Installment",
            StoredPaymentPlan::Variable(_) => "Variable",
            StoredPaymentPlan::Recurring(_) => "Recurring",
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RawGetPaymentPlanResponse {
    #[serde(flatten)]
    status: ResponseStatus,
    #[serde(deserialize_with = "lenient_string")]
    customer_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    plan_id: Option<String>,
    stored_installment_payment_plan: Option<InstallmentPaymentPlanDetails>,
    stored_variable_payment_plan: Option<VariablePaymentPlanDetails>,
    stored_recurring_payment_plan: Option<RecurringPaymentPlanDetails>,
}

impl From<RawGetPaymentPlanResponse> for GetPaymentPlanResponse {
    fn from(raw: RawGetPaymentPlanResponse) -> Self {
        // Only one kind is expected; if several are present the first in this order wins
        let plan = raw
            .stored_installment_payment_plan
            .map(StoredPaymentPlan::Installment)
            .or_else(|| raw.stored_variable_payment_plan.map(StoredPaymentPlan::Variable))
            .or_else(|| {
                raw.stored_recurring_payment_plan
                    .map(StoredPaymentPlan::Recurring)
            });

        Self {
            status: raw.status,
            customer_id: raw.customer_id,
            plan_id: raw.plan_id,
            plan,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RecurringPaymentPlanDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    pub cycle_type: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub day_of_the_month: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub day_of_the_week: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub month: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub frequency: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub next_payment_date: Option<String>,
    pub active: Option<bool>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub max_retries: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub primary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub secondary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_defined_fields: Vec<UserDefinedFieldDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InstallmentPaymentPlanDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    pub cycle_type: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub day_of_the_month: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub day_of_the_week: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub month: Option<i64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub frequency: Option<i64>,
    pub start_date: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_integer")]
    pub number_of_payments: Option<i64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub installment_amount: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub balloon_amount: Option<f64>,
    pub balloon_payment_added_to: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub remainder_amount: Option<f64>,
    #[serde(alias = "remainderPaymentAddedTo")]
    pub remainder_amount_added_to: Option<String>,
    pub active: Option<bool>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub primary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub secondary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_defined_fields: Vec<UserDefinedFieldDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VariablePaymentPlanDetails {
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    pub plan_start_date: Option<String>,
    pub plan_end_date: Option<String>,
    pub start_date: Option<String>,
    pub next_payment_date: Option<String>,
    pub active: Option<bool>,
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub max_retries: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub primary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub secondary_payment_method_id: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub scheduled_payments: Vec<ScheduledPaymentDetails>,
    #[serde(deserialize_with = "null_as_empty")]
    pub user_defined_fields: Vec<UserDefinedFieldDetails>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduledPaymentDetails {
    #[serde(deserialize_with = "lenient_integer")]
    pub schedule_id: Option<i64>,
    #[serde(deserialize_with = "lenient_string")]
    pub plan_id: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub amount: Option<f64>,
    pub scheduled_date: Option<String>,
    pub payment_date: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub payment_method_id: Option<String>,
    #[serde(deserialize_with = "lenient_integer")]
    pub number_of_retries: Option<i64>,
    pub paid: Option<bool>,
    pub processed: Option<bool>,
    #[serde(deserialize_with = "lenient_integer")]
    pub transaction_id: Option<i64>,
}

gateway_response!(
    RecurringPaymentPlanResponse,
    InstallmentPaymentPlanResponse,
    VariablePaymentPlanResponse,
    GetPaymentPlanResponse,
);
