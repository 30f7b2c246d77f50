use crate::{
    apis::{
        settlement::{BatchRequest, BatchResponse},
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use std::sync::Arc;

/// Worldpay Total settlement APIs client.
#[derive(Clone, Debug)]
pub struct SettlementApi {
    inner: Arc<WorldpayClientInner>,
}

impl SettlementApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    /// Closes the current batch, submitting its transactions for settlement.
    #[tracing::instrument(name = "Close Batch", skip(self))]
    pub async fn close_batch(&self) -> Result<BatchResponse, Error> {
        self.send(Operation::CloseBatch, &[]).await
    }

    /// Retrieves the transactions of the currently open batch.
    #[tracing::instrument(name = "Get Current Batch", skip(self))]
    pub async fn get_current_batch(&self) -> Result<BatchResponse, Error> {
        self.send(Operation::GetBatch, &[]).await
    }

    /// Retrieves a closed batch by its id.
    #[tracing::instrument(name = "Get Batch By Id", skip(self))]
    pub async fn get_batch_by_id(&self, batch_id: &str) -> Result<BatchResponse, Error> {
        self.send(Operation::GetBatchById, &[batch_id]).await
    }

    async fn send(&self, operation: Operation, params: &[&str]) -> Result<BatchResponse, Error> {
        let value = self
            .inner
            .gateway
            .dispatch(operation, &BatchRequest::default(), params)
            .await?;

        codec::decode(operation, value)
    }
}
