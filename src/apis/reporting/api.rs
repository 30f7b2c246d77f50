use crate::{
    apis::{
        reporting::{
            SearchTransactionsRequest, TransactionReportingResponse, UpdateTransactionRequest,
        },
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use serde::Serialize;
use std::sync::Arc;

/// Worldpay Total transaction reporting APIs client.
#[derive(Clone, Debug)]
pub struct ReportingApi {
    inner: Arc<WorldpayClientInner>,
}

impl ReportingApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    /// Finds the transactions matching the given criteria.
    #[tracing::instrument(name = "Search Transactions", skip(self, req))]
    pub async fn search_transactions(
        &self,
        req: &SearchTransactionsRequest,
    ) -> Result<TransactionReportingResponse, Error> {
        self.send(Operation::SearchTransactions, req, &[]).await
    }

    /// Retrieves a single transaction. The gateway returns it inside `transactions`.
    #[tracing::instrument(name = "Get Transaction", skip(self))]
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionReportingResponse, Error> {
        self.send(Operation::GetTransaction, &(), &[transaction_id])
            .await
    }

    /// Attaches receipt details or level 2/3 data to an existing transaction.
    #[tracing::instrument(
        name = "Update Transaction",
        skip(self, req),
        fields(transaction_id = req.reference_transaction_id)
    )]
    pub async fn update_transaction(
        &self,
        req: &UpdateTransactionRequest,
    ) -> Result<TransactionReportingResponse, Error> {
        // An unset id must not address `transactions/0`
        let transaction_id = match req.reference_transaction_id {
            0 => String::new(),
            id => id.to_string(),
        };

        self.send(Operation::UpdateTransaction, req, &[transaction_id.as_str()])
            .await
    }

    async fn send<T>(
        &self,
        operation: Operation,
        req: &T,
        params: &[&str],
    ) -> Result<TransactionReportingResponse, Error>
    where
        T: Serialize + ?Sized,
    {
        let value = self.inner.gateway.dispatch(operation, req, params).await?;

        codec::decode(operation, value)
    }
}
