//! Registry of the gateway operations and the endpoints they are served on.

use crate::Error;
use reqwest::{Method, Url};
use std::{fmt, str::FromStr};
use urlencoding::encode;

const FIRST_PARAM: &str = "{1}";
const SECOND_PARAM: &str = "{2}";

/// A remote action exposed by the gateway.
///
/// Operations parse case-insensitively from their name (`"AUTHORIZE"`, `"authorize"` and
/// `"Authorize"` are the same operation). `"Capture"` is accepted as an alias of `PriorAuthCapture`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Authorize,
    PriorAuthCapture,
    Charge,
    Credit,
    Verify,
    Refund,
    Void,
    CloseBatch,
    GetBatch,
    GetBatchById,
    CreateToken,
    CreateCustomer,
    GetCustomer,
    UpdateCustomer,
    CreatePaymentAccount,
    GetPaymentAccount,
    UpdatePaymentAccount,
    DeletePaymentAccount,
    CreateCustomerAndPayment,
    UpdateCustomerAndPayment,
    CreateRecurringPaymentPlan,
    UpdateRecurringPaymentPlan,
    CreateInstallmentPaymentPlan,
    UpdateInstallmentPaymentPlan,
    CreateVariablePaymentPlan,
    UpdateVariablePaymentPlan,
    GetPaymentPlan,
    SearchTransactions,
    GetTransaction,
    UpdateTransaction,
}

impl Operation {
    /// Every registered operation.
    pub const ALL: [Operation; 30] = [
        Operation::Authorize,
        Operation::PriorAuthCapture,
        Operation::Charge,
        Operation::Credit,
        Operation::Verify,
        Operation::Refund,
        Operation::Void,
        Operation::CloseBatch,
        Operation::GetBatch,
        Operation::GetBatchById,
        Operation::CreateToken,
        Operation::CreateCustomer,
        Operation::GetCustomer,
        Operation::UpdateCustomer,
        Operation::CreatePaymentAccount,
        Operation::GetPaymentAccount,
        Operation::UpdatePaymentAccount,
        Operation::DeletePaymentAccount,
        Operation::CreateCustomerAndPayment,
        Operation::UpdateCustomerAndPayment,
        Operation::CreateRecurringPaymentPlan,
        Operation::UpdateRecurringPaymentPlan,
        Operation::CreateInstallmentPaymentPlan,
        Operation::UpdateInstallmentPaymentPlan,
        Operation::CreateVariablePaymentPlan,
        Operation::UpdateVariablePaymentPlan,
        Operation::GetPaymentPlan,
        Operation::SearchTransactions,
        Operation::GetTransaction,
        Operation::UpdateTransaction,
    ];

    /// Canonical name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Authorize => "Authorize",
            Operation::PriorAuthCapture => "PriorAuthCapture",
            Operation::Charge => "Charge",
            Operation::Credit => "Credit",
            Operation::Verify => "Verify",
            Operation::Refund => "Refund",
            Operation::Void => "Void",
            Operation::CloseBatch => "CloseBatch",
            Operation::GetBatch => "GetBatch",
            Operation::GetBatchById => "GetBatchById",
            Operation::CreateToken => "CreateToken",
            Operation::CreateCustomer => "CreateCustomer",
            Operation::GetCustomer => "GetCustomer",
            Operation::UpdateCustomer => "UpdateCustomer",
            Operation::CreatePaymentAccount => "CreatePaymentAccount",
            Operation::GetPaymentAccount => "GetPaymentAccount",
            Operation::UpdatePaymentAccount => "UpdatePaymentAccount",
            Operation::DeletePaymentAccount => "DeletePaymentAccount",
            Operation::CreateCustomerAndPayment => "CreateCustomerAndPayment",
            Operation::UpdateCustomerAndPayment => "UpdateCustomerAndPayment",
            Operation::CreateRecurringPaymentPlan => "CreateRecurringPaymentPlan",
            Operation::UpdateRecurringPaymentPlan => "UpdateRecurringPaymentPlan",
            Operation::CreateInstallmentPaymentPlan => "CreateInstallmentPaymentPlan",
            Operation::UpdateInstallmentPaymentPlan => "UpdateInstallmentPaymentPlan",
            Operation::CreateVariablePaymentPlan => "CreateVariablePaymentPlan",
            Operation::UpdateVariablePaymentPlan => "UpdateVariablePaymentPlan",
            Operation::GetPaymentPlan => "GetPaymentPlan",
            Operation::SearchTransactions => "SearchTransactions",
            Operation::GetTransaction => "GetTransaction",
            Operation::UpdateTransaction => "UpdateTransaction",
        }
    }

    /// Path template (relative to the environment base URL) and HTTP method of the operation.
    ///
    /// `{1}` and `{2}` are the first and second positional path parameters.
    pub fn template(self) -> (&'static str, Method) {
        match self {
            // Card present, card not present and ACH
            Operation::Authorize => ("Payments/Authorize", Method::POST),
            Operation::PriorAuthCapture => ("Payments/Capture", Method::POST),
            Operation::Charge => ("Payments/Charge", Method::POST),
            Operation::Credit => ("Payments/Credit", Method::POST),
            Operation::Verify => ("Payments/Verify", Method::POST),
            Operation::Refund => ("Payments/Refund", Method::POST),
            Operation::Void => ("Payments/Void", Method::POST),

            // Settlement
            Operation::CloseBatch => ("Batches/Close", Method::POST),
            Operation::GetBatch => ("Batches/Current", Method::GET),
            Operation::GetBatchById => ("Batches/{1}", Method::GET),

            // Tokenization
            Operation::CreateToken => ("PreVault/Card", Method::POST),

            // Vault
            Operation::CreateCustomer => ("Customers", Method::POST),
            Operation::GetCustomer => ("Customers/{1}", Method::GET),
            Operation::UpdateCustomer => ("Customers/{1}", Method::PUT),
            Operation::CreatePaymentAccount => ("Customers/{1}/PaymentMethod", Method::POST),
            Operation::GetPaymentAccount => ("Customers/{1}/PaymentMethod/{2}", Method::GET),
            Operation::UpdatePaymentAccount => ("Customers/{1}/PaymentMethod/{2}", Method::PUT),
            Operation::DeletePaymentAccount => ("Customers/{1}/PaymentMethod/{2}", Method::DELETE),
            Operation::CreateCustomerAndPayment => ("Customers/Payments", Method::POST),
            Operation::UpdateCustomerAndPayment => ("Customers/{1}/Payments", Method::PUT),

            // Recurring billing
            Operation::CreateRecurringPaymentPlan => {
                ("Customers/{1}/PaymentSchedules/recurring", Method::POST)
            }
            Operation::UpdateRecurringPaymentPlan => {
                ("customers/{1}/PaymentSchedules/recurring/{2}", Method::PUT)
            }
            Operation::CreateInstallmentPaymentPlan => {
                ("Customers/{1}/PaymentSchedules/Installment", Method::POST)
            }
            Operation::UpdateInstallmentPaymentPlan => {
                ("customers/{1}/PaymentSchedules/installment/{2}", Method::PUT)
            }
            Operation::CreateVariablePaymentPlan => {
                ("Customers/{1}/PaymentSchedules/Variable", Method::POST)
            }
            Operation::UpdateVariablePaymentPlan => {
                ("customers/{1}/PaymentSchedules/variable/{2}", Method::PUT)
            }
            Operation::GetPaymentPlan => ("Customers/{1}/PaymentSchedules/{2}", Method::GET),

            // Transaction reporting and management
            Operation::SearchTransactions => ("Transactions/Search", Method::POST),
            Operation::GetTransaction => ("Transactions/{1}", Method::GET),
            Operation::UpdateTransaction => ("transactions/{1}", Method::PUT),
        }
    }

    /// Number of positional path parameters the template of this operation needs.
    pub fn required_params(self) -> usize {
        let (template, _) = self.template();
        if template.contains(SECOND_PARAM) {
            2
        } else if template.contains(FIRST_PARAM) {
            1
        } else {
            0
        }
    }

    /// Substitutes the path parameters into the template of this operation.
    ///
    /// Parameters the template does not use are ignored. Blank parameters count as missing.
    pub fn resolve(self, first: Option<&str>, second: Option<&str>) -> Result<Endpoint, Error> {
        let (template, method) = self.template();
        let first = first.filter(|p| !p.trim().is_empty());
        let second = second.filter(|p| !p.trim().is_empty());

        let path = match (self.required_params(), first, second) {
            (0, _, _) => template.to_string(),
            (1, Some(first), _) => template.replace(FIRST_PARAM, &encode(first)),
            (2, Some(first), Some(second)) => template
                .replace(FIRST_PARAM, &encode(first))
                .replace(SECOND_PARAM, &encode(second)),
            (required, _, _) => {
                return Err(Error::MissingParameter {
                    operation: self.name().to_string(),
                    required,
                    supplied: first.iter().chain(second.iter()).count(),
                })
            }
        };

        tracing::debug!(operation = %self, %method, %path, "Resolved endpoint");

        Ok(Endpoint {
            operation: self,
            method,
            path,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        if needle == "capture" {
            return Ok(Operation::PriorAuthCapture);
        }

        Operation::ALL
            .into_iter()
            .find(|op| op.name().to_ascii_lowercase() == needle)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// An operation resolved to a concrete path and HTTP method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: Operation,
    pub method: Method,
    /// Path relative to the environment base URL, with parameters substituted.
    pub path: String,
}

impl Endpoint {
    /// Joins the resolved path onto the given base URL.
    pub fn url(&self, base_url: &Url) -> Result<Url, Error> {
        base_url
            .join(&self.path)
            .map_err(|e| Error::Other(anyhow::Error::new(e).context(self.path.clone())))
    }
}

/// Resolves an operation name and its positional path parameters to an [`Endpoint`](crate::endpoints::Endpoint).
///
/// Lookup is case-insensitive. Fails with [`Error::UnknownOperation`](crate::Error::UnknownOperation)
/// for unregistered names and with [`Error::MissingParameter`](crate::Error::MissingParameter) when the
/// template needs more non-blank parameters than supplied.
pub fn resolve(operation: &str, first: Option<&str>, second: Option<&str>) -> Result<Endpoint, Error> {
    operation.parse::<Operation>()?.resolve(first, second)
}
