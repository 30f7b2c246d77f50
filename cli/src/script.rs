use crate::test_data::{Cardholder, TestData};
use anyhow::Context;
use chrono::{Duration, Local, NaiveDate};
use worldpay_total_rust::{
    apis::{
        payments::{
            Address, AddressBuilder, AuthorizationRequest, AuthorizationRequestBuilder, Card,
            CardBuilder, PaymentVaultTokenBuilder, PriorAuthCaptureRequestBuilder,
        },
        recurring::{
            InstallmentPaymentPlanBuilder, InstallmentPaymentPlanRequest,
            RecurringPaymentPlanBuilder, RecurringPaymentPlanRequest, ScheduledPaymentBuilder,
            VariablePaymentPlanBuilder, VariablePaymentPlanRequest,
        },
        reporting::{SearchTransactionsRequestBuilder, UpdateTransactionRequestBuilder},
        tokenization::TokenRequestBuilder,
        vault::{
            CustomerAndPaymentRequestBuilder, CustomerRequestBuilder, PaymentAccountRequestBuilder,
        },
    },
    GatewayResponse, WorldpayClient,
};

/// Runs every gateway operation once, chaining the ids returned by earlier calls.
///
/// Any failure, business rejections included, aborts the run.
pub struct Script {
    client: WorldpayClient,
    data: TestData,
    authorized: Vec<i64>,
    captured: Vec<i64>,
}

impl Script {
    pub fn new(client: WorldpayClient, data: TestData) -> Self {
        Self {
            client,
            data,
            authorized: Vec::new(),
            captured: Vec::new(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        for _ in 0..2 {
            let transaction_id = self.authorize().await?;
            self.authorized.push(transaction_id);
        }
        self.verify().await?;

        let transaction_id = self.charge().await?;
        self.captured.push(transaction_id);
        if let Some(transaction_id) = self.authorized.pop() {
            let transaction_id = self.capture(transaction_id).await?;
            self.captured.push(transaction_id);
        }

        if let Some(&transaction_id) = self.captured.last() {
            self.update_transaction(transaction_id).await?;
            self.get_transaction(transaction_id).await?;
        }

        self.get_current_batch().await?;
        if let Some(transaction_id) = self.authorized.pop() {
            self.void(transaction_id).await?;
        }
        self.credit().await?;
        let batch_id = self.close_batch().await?;
        if let Some(batch_id) = batch_id {
            self.get_batch(&batch_id).await?;
        }
        self.search_transactions().await?;

        self.create_token().await?;
        self.vault_lifecycle().await?;

        let customer_id = self.create_customer_and_payment().await?;
        self.update_customer_and_payment(&customer_id).await?;
        self.charge_with_token(&customer_id).await?;

        self.recurring_plans().await?;
        self.installment_plan().await?;
        self.variable_plan().await?;

        Ok(())
    }

    async fn authorize(&mut self) -> anyhow::Result<i64> {
        let req = card_request(self.data.next());
        let res = self.client.payments.authorize(&req).await?.ensure_approved()?;
        let transaction = res.transaction.context("Authorize returned no transaction")?;
        let transaction_id = transaction
            .transaction_id
            .context("Authorize returned no transaction id")?;

        report(format!(
            "Authorize successful. TransactionId = {} Amount = {:.2}",
            transaction_id,
            transaction.authorized_amount.unwrap_or_default()
        ));
        Ok(transaction_id)
    }

    async fn verify(&mut self) -> anyhow::Result<()> {
        let mut req = card_request(self.data.next());
        req.amount = 0.0;
        let res = self.client.payments.verify(&req).await?.ensure_approved()?;

        report(format!(
            "Verify successful. Result = {}",
            res.status.result.unwrap_or_default()
        ));
        Ok(())
    }

    async fn charge(&mut self) -> anyhow::Result<i64> {
        let req = card_request(self.data.next());
        let res = self.client.payments.charge(&req).await?.ensure_approved()?;
        let transaction_id = res
            .transaction
            .and_then(|t| t.transaction_id)
            .context("Charge returned no transaction id")?;

        report(format!("Charge successful. TransactionId = {}", transaction_id));
        Ok(transaction_id)
    }

    async fn capture(&mut self, transaction_id: i64) -> anyhow::Result<i64> {
        let req = PriorAuthCaptureRequestBuilder::default()
            .transaction_id(transaction_id)
            .amount(self.data.current().amount)
            .build()?;
        let res = self.client.payments.capture(&req).await?.ensure_approved()?;
        let captured_id = res
            .transaction
            .and_then(|t| t.transaction_id)
            .unwrap_or(transaction_id);

        report(format!("Prior auth capture successful. TransactionId = {}", captured_id));
        Ok(captured_id)
    }

    async fn void(&mut self, transaction_id: i64) -> anyhow::Result<()> {
        let req = AuthorizationRequestBuilder::default()
            .transaction_id(transaction_id)
            .build()?;
        self.client.payments.void(&req).await?.ensure_approved()?;

        report(format!("Void successful. TransactionId = {}", transaction_id));
        Ok(())
    }

    async fn credit(&mut self) -> anyhow::Result<()> {
        let req = card_request(self.data.random());
        let res = self.client.payments.credit(&req).await?.ensure_approved()?;

        report(format!(
            "Credit successful. TransactionId = {:?}",
            res.transaction.and_then(|t| t.transaction_id)
        ));
        Ok(())
    }

    async fn update_transaction(&mut self, transaction_id: i64) -> anyhow::Result<()> {
        let req = UpdateTransactionRequestBuilder::default()
            .reference_transaction_id(transaction_id)
            .email(self.data.current().email.as_str())
            .email_receipt(true)
            .build()?;
        let res = self
            .client
            .reporting
            .update_transaction(&req)
            .await?
            .ensure_approved()?;

        report(format!(
            "Update transaction successful. TransactionId = {} IP Address: {}",
            transaction_id,
            res.ip_address.unwrap_or_default()
        ));
        Ok(())
    }

    async fn get_transaction(&mut self, transaction_id: i64) -> anyhow::Result<()> {
        let res = self
            .client
            .reporting
            .get_transaction(&transaction_id.to_string())
            .await?
            .ensure_approved()?;
        let transaction = res
            .transactions
            .first()
            .context("Get transaction returned no transaction")?;

        report(format!(
            "Get transaction successful. ({} {} ${:.2})",
            transaction.credit_card_type.as_deref().unwrap_or_default(),
            transaction.card_number.as_deref().unwrap_or_default(),
            transaction
                .transaction_data
                .as_ref()
                .and_then(|data| data.amount)
                .unwrap_or_default()
        ));
        Ok(())
    }

    async fn search_transactions(&mut self) -> anyhow::Result<()> {
        let today = Local::now().date_naive();
        let req = SearchTransactionsRequestBuilder::default()
            .start_date(format_date(today - Duration::days(1)))
            .end_date(format_date(today))
            .build()?;
        let res = self
            .client
            .reporting
            .search_transactions(&req)
            .await?
            .ensure_approved()?;

        report(format!(
            "Search transactions successful. {} transaction(s) found",
            res.transactions.len()
        ));
        Ok(())
    }

    async fn get_current_batch(&mut self) -> anyhow::Result<()> {
        let res = self
            .client
            .settlement
            .get_current_batch()
            .await?
            .ensure_approved()?;

        report(format!(
            "Get batch successful. {} transaction(s) in the current batch",
            res.transactions.len()
        ));
        Ok(())
    }

    async fn close_batch(&mut self) -> anyhow::Result<Option<String>> {
        let res = self.client.settlement.close_batch().await?.ensure_approved()?;

        report(format!("Close batch successful. BatchId = {:?}", res.batch_id));
        Ok(res.batch_id.map(|id| id.to_string()))
    }

    async fn get_batch(&mut self, batch_id: &str) -> anyhow::Result<()> {
        let res = self
            .client
            .settlement
            .get_batch_by_id(batch_id)
            .await?
            .ensure_approved()?;

        report(format!(
            "Get batch by id successful. {} transaction(s) in batch {}",
            res.transactions.len(),
            batch_id
        ));
        Ok(())
    }

    async fn create_token(&mut self) -> anyhow::Result<()> {
        let req = TokenRequestBuilder::default()
            .card(card(self.data.next()))
            .add_to_vault(false)
            .build()?;
        let res = self
            .client
            .tokenization
            .create_token(&req)
            .await?
            .ensure_approved()?;

        report(format!(
            "Create token successful. Token = {}",
            res.token.unwrap_or_default()
        ));
        Ok(())
    }

    async fn vault_lifecycle(&mut self) -> anyhow::Result<()> {
        let cardholder = self.data.next().clone();

        let req = CustomerRequestBuilder::default()
            .first_name(cardholder.first_name.as_str())
            .last_name(cardholder.last_name.as_str())
            .email_address(cardholder.email.as_str())
            .phone_number(cardholder.phone.as_str())
            .company(cardholder.company.as_str())
            .send_email_receipts(true)
            .address(address(&cardholder))
            .build()?;
        let customer_id = self
            .client
            .vault
            .create_customer(&req)
            .await?
            .ensure_approved()?
            .customer_id
            .context("Create customer returned no customer id")?;
        report(format!("Create customer successful. CustomerId = {}", customer_id));

        self.client
            .vault
            .get_customer(&customer_id)
            .await?
            .ensure_approved()?;
        report(format!("Get customer successful. CustomerId = {}", customer_id));

        let mut update = req.clone();
        update.customer_id = customer_id.clone();
        update.notes = "Updated by the demo".to_string();
        self.client
            .vault
            .update_customer(&update)
            .await?
            .ensure_approved()?;
        report(format!("Update customer successful. CustomerId = {}", customer_id));

        let req = PaymentAccountRequestBuilder::default()
            .customer_id(customer_id.as_str())
            .card(card(&cardholder))
            .primary(true)
            .build()?;
        let payment_method_id = self
            .client
            .vault
            .create_payment_account(&req)
            .await?
            .ensure_approved()?
            .vault_payment_method
            .and_then(|method| method.payment_id)
            .context("Create payment account returned no payment method id")?;
        report(format!(
            "Create payment account successful. PaymentMethodId = {}",
            payment_method_id
        ));

        let mut update = req.clone();
        update.payment_method_id = payment_method_id.clone();
        update.notes = "Updated by the demo".to_string();
        self.client
            .vault
            .update_payment_account(&update)
            .await?
            .ensure_approved()?;
        report("Update payment account successful.".to_string());

        self.client
            .vault
            .get_payment_account(&customer_id, &payment_method_id)
            .await?
            .ensure_approved()?;
        report("Get payment account successful.".to_string());

        self.client
            .vault
            .delete_payment_account(&customer_id, &payment_method_id)
            .await?
            .ensure_approved()?;
        report("Delete payment account successful.".to_string());

        Ok(())
    }

    async fn create_customer_and_payment(&mut self) -> anyhow::Result<String> {
        let cardholder = self.data.next().clone();
        let req = CustomerAndPaymentRequestBuilder::default()
            .first_name(cardholder.first_name.as_str())
            .last_name(cardholder.last_name.as_str())
            .email_address(cardholder.email.as_str())
            .phone_number(cardholder.phone.as_str())
            .primary(true)
            .card(card(&cardholder))
            .address(address(&cardholder))
            .build()?;
        let res = self
            .client
            .vault
            .create_customer_and_payment(&req)
            .await?
            .ensure_approved()?;
        let customer_id = res
            .vault_customer
            .and_then(|customer| customer.customer_id)
            .context("Create customer and payment returned no customer id")?;

        report(format!(
            "Create customer and payment successful. CustomerId = {} PaymentMethodId = {}",
            customer_id,
            res.assigned_payment_id.unwrap_or_default()
        ));
        Ok(customer_id)
    }

    async fn update_customer_and_payment(&mut self, customer_id: &str) -> anyhow::Result<()> {
        let req = CustomerAndPaymentRequestBuilder::default()
            .customer_id(customer_id)
            .payment_method_id("1")
            .notes("Updated by the demo")
            .build()?;
        self.client
            .vault
            .update_customer_and_payment(&req)
            .await?
            .ensure_approved()?;

        report(format!(
            "Update customer and payment successful. CustomerId = {}",
            customer_id
        ));
        Ok(())
    }

    async fn charge_with_token(&mut self, customer_id: &str) -> anyhow::Result<()> {
        let req = AuthorizationRequestBuilder::default()
            .amount(self.data.current().amount)
            .payment_vault_token(
                PaymentVaultTokenBuilder::default()
                    .customer_id(customer_id)
                    .payment_method_id("1")
                    .payment_type("CREDIT_CARD")
                    .build()?,
            )
            .build()?;
        let res = self.client.payments.charge(&req).await?.ensure_approved()?;

        report(format!(
            "Charge with vault token successful. TransactionId = {:?}",
            res.transaction.and_then(|t| t.transaction_id)
        ));
        Ok(())
    }

    async fn recurring_plans(&mut self) -> anyhow::Result<()> {
        let customer_id = self.create_customer_and_payment().await?;
        let start = Local::now().date_naive() + Duration::days(30);

        let plan = RecurringPaymentPlanBuilder::default()
            .amount(self.data.current().amount)
            .cycle_type("MONTHLY")
            .day_of_the_month(1)
            .frequency(1)
            .start_date(format_date(start))
            .end_date(format_date(start + Duration::days(365)))
            .max_retries(4)
            .primary_payment_method_id("1")
            .notes("Demo recurring plan")
            .active(true)
            .build()?;
        let req = RecurringPaymentPlanRequest::new(customer_id.as_str(), plan);
        let plan_id = self
            .client
            .recurring
            .create_recurring_plan(&req)
            .await?
            .ensure_approved()?
            .plan_id
            .context("Create recurring plan returned no plan id")?;
        report(format!("Create recurring plan successful. PlanId = {}", plan_id));

        let mut update = req.with_plan_id(plan_id.as_str());
        if let Some(ref mut plan) = update.plan {
            plan.notes = "Updated by the demo".to_string();
        }
        self.client
            .recurring
            .update_recurring_plan(&update)
            .await?
            .ensure_approved()?;
        report(format!("Update recurring plan successful. PlanId = {}", plan_id));

        Ok(())
    }

    async fn installment_plan(&mut self) -> anyhow::Result<()> {
        let customer_id = self.create_customer_and_payment().await?;
        let start = Local::now().date_naive() + Duration::days(30);

        let plan = InstallmentPaymentPlanBuilder::default()
            .cycle_type("MONTHLY")
            .day_of_the_month(1)
            .frequency(1)
            .start_date(format_date(start))
            .total_amount(300.0)
            .number_of_payments(12)
            .installment_amount(24.0)
            .balloon_amount(10.0)
            .balloon_payment_added_to("FIRST")
            .remainder_amount(12.9)
            .remainder_payment_added_to("LAST")
            .primary_payment_method_id("1")
            .active(true)
            .build()?;
        let res = self
            .client
            .recurring
            .create_installment_plan(&InstallmentPaymentPlanRequest::new(customer_id.as_str(), plan))
            .await?
            .ensure_approved()?;

        report(format!(
            "Create installment plan successful. PlanId = {}",
            res.plan_id.unwrap_or_default()
        ));
        Ok(())
    }

    async fn variable_plan(&mut self) -> anyhow::Result<()> {
        let customer_id = self.create_customer_and_payment().await?;
        let start = Local::now().date_naive() + Duration::days(30);

        let scheduled_payments = (0..3i32)
            .map(|i| {
                ScheduledPaymentBuilder::default()
                    .amount(10.0 * f64::from(i + 1))
                    .scheduled_date(format_date(start + Duration::days(30 * i64::from(i))))
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        let plan = VariablePaymentPlanBuilder::default()
            .start_date(format_date(start))
            .primary_payment_method_id("1")
            .scheduled_payments(scheduled_payments)
            .notes("Demo variable plan")
            .active(true)
            .build()?;
        let req = VariablePaymentPlanRequest::new(customer_id.as_str(), plan);
        let plan_id = self
            .client
            .recurring
            .create_variable_plan(&req)
            .await?
            .ensure_approved()?
            .plan_id
            .context("Create variable plan returned no plan id")?;
        report(format!("Create variable plan successful. PlanId = {}", plan_id));

        let update = req.with_plan_id(plan_id.as_str());
        self.client
            .recurring
            .update_variable_plan(&update)
            .await?
            .ensure_approved()?;
        report(format!("Update variable plan successful. PlanId = {}", plan_id));

        let res = self
            .client
            .recurring
            .get_payment_plan(&customer_id, &plan_id)
            .await?
            .ensure_approved()?;
        report(format!(
            "Get payment plan successful. Type: {} CustomerId: {} PlanId: {}",
            res.plan.as_ref().map(|plan| plan.plan_type()).unwrap_or("Unknown"),
            customer_id,
            plan_id
        ));

        Ok(())
    }
}

fn report(msg: String) {
    println!("{}", msg);
    tracing::info!("{}", msg);
}

fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

fn address(cardholder: &Cardholder) -> Address {
    // Every field has a default, building cannot fail
    AddressBuilder::default()
        .line1(cardholder.address.as_str())
        .city(cardholder.city.as_str())
        .state(cardholder.state.as_str())
        .zip(cardholder.zip.as_str())
        .country(cardholder.country.as_str())
        .company(cardholder.company.as_str())
        .phone(cardholder.phone.as_str())
        .build()
        .unwrap_or_default()
}

fn card(cardholder: &Cardholder) -> Card {
    CardBuilder::default()
        .number(cardholder.card_pan.as_str())
        .cvv(cardholder.cvv.as_str())
        .expiration_date(cardholder.expiration_date.as_str())
        .first_name(cardholder.first_name.as_str())
        .last_name(cardholder.last_name.as_str())
        .email(cardholder.email.as_str())
        .address(address(cardholder))
        .build()
        .unwrap_or_default()
}

fn card_request(cardholder: &Cardholder) -> AuthorizationRequest {
    AuthorizationRequest {
        amount: cardholder.amount,
        card: Some(card(cardholder)),
        ..Default::default()
    }
}
