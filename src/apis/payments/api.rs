use crate::{
    apis::{
        payments::{AuthResponse, AuthorizationRequest, PriorAuthCaptureRequest},
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// Worldpay Total payments APIs client: card present, card not present and ACH transactions.
#[derive(Clone, Debug)]
pub struct PaymentsApi {
    inner: Arc<WorldpayClientInner>,
}

impl PaymentsApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    /// Authorizes an amount without capturing it.
    #[tracing::instrument(
        name = "Authorize",
        skip(self, req),
        fields(amount = req.amount, order_id = %req.order_id)
    )]
    pub async fn authorize(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Authorize, req).await
    }

    /// Authorizes and captures an amount in one step.
    #[tracing::instrument(
        name = "Charge",
        skip(self, req),
        fields(amount = req.amount, order_id = %req.order_id)
    )]
    pub async fn charge(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Charge, req).await
    }

    /// Verifies a card or account without moving funds.
    #[tracing::instrument(name = "Verify", skip(self, req))]
    pub async fn verify(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Verify, req).await
    }

    /// Captures a previously authorized transaction.
    #[tracing::instrument(
        name = "Prior Auth Capture",
        skip(self, req),
        fields(transaction_id = req.transaction_id, amount = req.amount)
    )]
    pub async fn capture(&self, req: &PriorAuthCaptureRequest) -> Result<AuthResponse, Error> {
        let value = self
            .inner
            .gateway
            .dispatch(Operation::PriorAuthCapture, req, &[])
            .await?;

        codec::decode(Operation::PriorAuthCapture, value)
    }

    /// Voids an unsettled transaction.
    #[tracing::instrument(
        name = "Void",
        skip(self, req),
        fields(transaction_id = req.transaction_id)
    )]
    pub async fn void(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Void, req).await
    }

    /// Refunds a settled transaction.
    #[tracing::instrument(
        name = "Refund",
        skip(self, req),
        fields(transaction_id = req.transaction_id)
    )]
    pub async fn refund(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Refund, req).await
    }

    /// Credits an amount to a card or account, without a reference transaction.
    #[tracing::instrument(name = "Credit", skip(self, req), fields(amount = req.amount))]
    pub async fn credit(&self, req: &AuthorizationRequest) -> Result<AuthResponse, Error> {
        self.send(Operation::Credit, req).await
    }

    async fn send(
        &self,
        operation: Operation,
        req: &AuthorizationRequest,
    ) -> Result<AuthResponse, Error> {
        let mut payload = codec::to_payload(req)?;

        // Vault tokens travel with the public key of the merchant
        if let Some(Value::Object(token)) = payload.get_mut("paymentVaultToken") {
            self.inner.stamp_public_key(token)?;
        }

        let value = self.inner.gateway.dispatch(operation, &payload, &[]).await?;

        codec::decode(operation, value)
    }
}
