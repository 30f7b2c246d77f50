use crate::{
    apis::{
        recurring::{
            GetPaymentPlanResponse, InstallmentPaymentPlanRequest, InstallmentPaymentPlanResponse,
            PaymentPlanRequest, RecurringPaymentPlanRequest, RecurringPaymentPlanResponse,
            VariablePaymentPlanRequest, VariablePaymentPlanResponse,
        },
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Worldpay Total recurring billing APIs client.
///
/// Plans are attached to a vault customer: every call is addressed by the customer id,
/// and updates additionally by the plan id.
#[derive(Clone, Debug)]
pub struct RecurringApi {
    inner: Arc<WorldpayClientInner>,
}

impl RecurringApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(
        name = "Create Recurring Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn create_recurring_plan(
        &self,
        req: &RecurringPaymentPlanRequest,
    ) -> Result<RecurringPaymentPlanResponse, Error> {
        self.create(Operation::CreateRecurringPaymentPlan, req).await
    }

    #[tracing::instrument(
        name = "Update Recurring Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id, plan_id = %req.plan_id)
    )]
    pub async fn update_recurring_plan(
        &self,
        req: &RecurringPaymentPlanRequest,
    ) -> Result<RecurringPaymentPlanResponse, Error> {
        self.update(Operation::UpdateRecurringPaymentPlan, req).await
    }

    #[tracing::instrument(
        name = "Create Installment Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn create_installment_plan(
        &self,
        req: &InstallmentPaymentPlanRequest,
    ) -> Result<InstallmentPaymentPlanResponse, Error> {
        self.create(Operation::CreateInstallmentPaymentPlan, req)
            .await
    }

    #[tracing::instrument(
        name = "Update Installment Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id, plan_id = %req.plan_id)
    )]
    pub async fn update_installment_plan(
        &self,
        req: &InstallmentPaymentPlanRequest,
    ) -> Result<InstallmentPaymentPlanResponse, Error> {
        self.update(Operation::UpdateInstallmentPaymentPlan, req)
            .await
    }

    #[tracing::instrument(
        name = "Create Variable Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id)
    )]
    pub async fn create_variable_plan(
        &self,
        req: &VariablePaymentPlanRequest,
    ) -> Result<VariablePaymentPlanResponse, Error> {
        self.create(Operation::CreateVariablePaymentPlan, req).await
    }

    #[tracing::instrument(
        name = "Update Variable Payment Plan",
        skip(self, req),
        fields(customer_id = %req.customer_id, plan_id = %req.plan_id)
    )]
    pub async fn update_variable_plan(
        &self,
        req: &VariablePaymentPlanRequest,
    ) -> Result<VariablePaymentPlanResponse, Error> {
        self.update(Operation::UpdateVariablePaymentPlan, req).await
    }

    /// Retrieves a stored plan of any kind.
    #[tracing::instrument(name = "Get Payment Plan", skip(self))]
    pub async fn get_payment_plan(
        &self,
        customer_id: &str,
        plan_id: &str,
    ) -> Result<GetPaymentPlanResponse, Error> {
        let value = self
            .inner
            .gateway
            .dispatch(Operation::GetPaymentPlan, &(), &[customer_id, plan_id])
            .await?;

        codec::decode(Operation::GetPaymentPlan, value)
    }

    async fn create<P, R>(&self, operation: Operation, req: &PaymentPlanRequest<P>) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let value = self
            .inner
            .gateway
            .dispatch(operation, req, &[req.customer_id.as_str()])
            .await?;

        codec::decode(operation, value)
    }

    async fn update<P, R>(&self, operation: Operation, req: &PaymentPlanRequest<P>) -> Result<R, Error>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let value = self
            .inner
            .gateway
            .dispatch(
                operation,
                req,
                &[req.customer_id.as_str(), req.plan_id.as_str()],
            )
            .await?;

        codec::decode(operation, value)
    }
}
