use crate::common::test_context::TestContext;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};
use worldpay_total_rust::{
    apis::{
        payments::CardBuilder,
        recurring::{RecurringPaymentPlanBuilder, RecurringPaymentPlanRequest, StoredPaymentPlan},
        vault::{CustomerAndPaymentRequestBuilder, CustomerRequestBuilder, PaymentAccountRequestBuilder},
    },
    GatewayResponse,
};

#[tokio::test]
async fn customer_payment_account_lifecycle() {
    let ctx = TestContext::start().await;
    ctx.approve("POST", "/Customers", json!({ "customerId": 5000 }))
        .await;
    ctx.approve(
        "POST",
        "/Customers/5000/PaymentMethod",
        json!({ "vaultPaymentMethod": { "customerId": "5000", "paymentId": "1" } }),
    )
    .await;
    ctx.approve(
        "GET",
        "/Customers/5000",
        json!({
            "vaultCustomer": {
                "customerId": "5000",
                "paymentMethods": [{ "paymentId": "1" }],
                "recurringPaymentPlans": null
            }
        }),
    )
    .await;
    ctx.approve("DELETE", "/Customers/5000/PaymentMethod/1", json!({}))
        .await;

    let customer_id = ctx
        .client
        .vault
        .create_customer(
            &CustomerRequestBuilder::default()
                .first_name("Jane")
                .last_name("Doe")
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .ensure_approved()
        .unwrap()
        .customer_id
        .unwrap();
    assert_eq!(customer_id, "5000");

    ctx.client
        .vault
        .create_payment_account(
            &PaymentAccountRequestBuilder::default()
                .customer_id(customer_id.as_str())
                .card(
                    CardBuilder::default()
                        .number("4444333322221111")
                        .expiration_date("04/22")
                        .build()
                        .unwrap(),
                )
                .primary(true)
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .ensure_approved()
        .unwrap();

    let customer = ctx
        .client
        .vault
        .get_customer(&customer_id)
        .await
        .unwrap()
        .vault_customer
        .unwrap();
    assert_eq!(customer.payment_methods.len(), 1);
    assert!(customer.recurring_payment_plans.is_empty());

    ctx.client
        .vault
        .delete_payment_account(&customer_id, "1")
        .await
        .unwrap()
        .ensure_approved()
        .unwrap();
}

#[tokio::test]
async fn customer_and_payment_reports_both_outcomes() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/Customers/Payments"))
        .and(body_partial_json(json!({ "firstName": "Jane", "primary": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": 1,
            "customerSuccess": true,
            "customerResponseCode": "1",
            "accountSuccess": false,
            "accountResponseCode": 2,
            "accountMessage": "Card expired",
            "assignedPaymentId": 3
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let res = ctx
        .client
        .vault
        .create_customer_and_payment(
            &CustomerAndPaymentRequestBuilder::default()
                .first_name("Jane")
                .primary(true)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(res.is_approved());
    assert_eq!(res.customer_response_code, Some(1));
    assert_eq!(res.account_response_code, Some(2));
    assert_eq!(res.assigned_payment_id.as_deref(), Some("3"));
}

#[tokio::test]
async fn recurring_plan_round_trip() {
    let ctx = TestContext::start().await;
    ctx.approve(
        "POST",
        "/Customers/5000/PaymentSchedules/recurring",
        json!({ "planId": 3100, "storedRecurringPaymentPlan": { "planId": 3100 } }),
    )
    .await;
    ctx.approve(
        "GET",
        "/Customers/5000/PaymentSchedules/3100",
        json!({ "planId": 3100, "storedRecurringPaymentPlan": { "planId": 3100, "amount": 20.0 } }),
    )
    .await;

    let plan_id = ctx
        .client
        .recurring
        .create_recurring_plan(&RecurringPaymentPlanRequest::new(
            "5000",
            RecurringPaymentPlanBuilder::default()
                .amount(20.0)
                .cycle_type("MONTHLY")
                .day_of_the_month(1)
                .frequency(1)
                .start_date("10/1/2017")
                .primary_payment_method_id("1")
                .build()
                .unwrap(),
        ))
        .await
        .unwrap()
        .ensure_approved()
        .unwrap()
        .plan_id
        .unwrap();

    let res = ctx
        .client
        .recurring
        .get_payment_plan("5000", &plan_id)
        .await
        .unwrap();

    match res.plan {
        Some(StoredPaymentPlan::Recurring(plan)) => assert_eq!(plan.amount, Some(20.0)),
        other => panic!("Unexpected plan: {:?}", other),
    }
}
