use crate::{
    apis::{
        vault::{
            CustomerAndPaymentRequest, CustomerAndPaymentResponse, CustomerRequest,
            CustomerResponse, PaymentAccountRequest, PaymentAccountResponse,
        },
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Worldpay Total vault APIs client.
#[derive(Clone, Debug)]
pub struct VaultApi {
    inner: Arc<WorldpayClientInner>,
}

impl VaultApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new vault customer.
    #[tracing::instrument(name = "Create Customer", skip(self, req))]
    pub async fn create_customer(&self, req: &CustomerRequest) -> Result<CustomerResponse, Error> {
        self.send(Operation::CreateCustomer, req, &[]).await
    }

    /// Retrieves a vault customer with its payment methods and plans.
    #[tracing::instrument(name = "Get Customer", skip(self))]
    pub async fn get_customer(&self, customer_id: &str) -> Result<CustomerResponse, Error> {
        self.send(Operation::GetCustomer, &(), &[customer_id]).await
    }

    /// Updates the vault customer identified by `req.customer_id`.
    #[tracing::instrument(
        name = "Update Customer",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn update_customer(&self, req: &CustomerRequest) -> Result<CustomerResponse, Error> {
        self.send(Operation::UpdateCustomer, req, &[req.customer_id.as_str()])
            .await
    }

    /// Stores a new payment method for the customer identified by `req.customer_id`.
    #[tracing::instrument(
        name = "Create Payment Account",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn create_payment_account(
        &self,
        req: &PaymentAccountRequest,
    ) -> Result<PaymentAccountResponse, Error> {
        self.send(Operation::CreatePaymentAccount, req, &[req.customer_id.as_str()])
            .await
    }

    /// Retrieves a stored payment method.
    #[tracing::instrument(name = "Get Payment Account", skip(self))]
    pub async fn get_payment_account(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<PaymentAccountResponse, Error> {
        self.send(
            Operation::GetPaymentAccount,
            &(),
            &[customer_id, payment_method_id],
        )
        .await
    }

    /// Updates the payment method identified by `req.customer_id` and `req.payment_method_id`.
    #[tracing::instrument(
        name = "Update Payment Account",
        skip(self, req),
        fields(customer_id = %req.customer_id, payment_method_id = %req.payment_method_id)
    )]
    pub async fn update_payment_account(
        &self,
        req: &PaymentAccountRequest,
    ) -> Result<PaymentAccountResponse, Error> {
        self.send(
            Operation::UpdatePaymentAccount,
            req,
            &[req.customer_id.as_str(), req.payment_method_id.as_str()],
        )
        .await
    }

    /// Removes a stored payment method.
    #[tracing::instrument(name = "Delete Payment Account", skip(self))]
    pub async fn delete_payment_account(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<PaymentAccountResponse, Error> {
        self.send(
            Operation::DeletePaymentAccount,
            &PaymentAccountRequest::default(),
            &[customer_id, payment_method_id],
        )
        .await
    }

    /// Creates a customer and its first payment method in a single call.
    #[tracing::instrument(name = "Create Customer And Payment", skip(self, req))]
    pub async fn create_customer_and_payment(
        &self,
        req: &CustomerAndPaymentRequest,
    ) -> Result<CustomerAndPaymentResponse, Error> {
        self.send(Operation::CreateCustomerAndPayment, req, &[])
            .await
    }

    /// Updates a customer and one of its payment methods in a single call.
    #[tracing::instrument(
        name = "Update Customer And Payment",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn update_customer_and_payment(
        &self,
        req: &CustomerAndPaymentRequest,
    ) -> Result<CustomerAndPaymentResponse, Error> {
        self.send(
            Operation::UpdateCustomerAndPayment,
            req,
            &[req.customer_id.as_str()],
        )
        .await
    }

    async fn send<T, R>(&self, operation: Operation, req: &T, params: &[&str]) -> Result<R, Error>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let value = self.inner.gateway.dispatch(operation, req, params).await?;

        codec::decode(operation, value)
    }
}
