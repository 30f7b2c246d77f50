use crate::common::test_context::{TestContext, PUBLIC_KEY};
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};
use worldpay_total_rust::{
    apis::{
        payments::{AuthorizationRequestBuilder, CardBuilder, PriorAuthCaptureRequestBuilder},
        reporting::UpdateTransactionRequestBuilder,
        tokenization::TokenRequestBuilder,
    },
    error::ErrorKind,
    Error, GatewayResponse,
};

fn card_authorization(amount: f64) -> worldpay_total_rust::apis::payments::AuthorizationRequest {
    AuthorizationRequestBuilder::default()
        .amount(amount)
        .card(
            CardBuilder::default()
                .number("4444333322221111")
                .cvv("999")
                .expiration_date("04/22")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

#[tokio::test]
async fn authorize_then_capture() {
    let ctx = TestContext::start().await;
    ctx.approve(
        "POST",
        "/Payments/Authorize",
        json!({ "transaction": { "transactionId": 42, "authorizedAmount": 10.0 } }),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/Payments/Capture"))
        .and(body_partial_json(json!({ "transactionId": 42, "amount": 10.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": 1,
            "transaction": { "transactionId": 42 }
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let authorized = ctx
        .client
        .payments
        .authorize(&card_authorization(10.0))
        .await
        .unwrap()
        .ensure_approved()
        .unwrap();
    let transaction_id = authorized
        .transaction
        .and_then(|t| t.transaction_id)
        .unwrap();

    let captured = ctx
        .client
        .payments
        .capture(
            &PriorAuthCaptureRequestBuilder::default()
                .transaction_id(transaction_id)
                .amount(10.0)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(captured.is_approved());
}

#[tokio::test]
async fn rejection_surfaces_only_through_ensure_approved() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/Payments/Refund"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "result": "REJECTED",
            "responseCode": 3,
            "message": "Transaction not settled"
        })))
        .mount(&ctx.mock_server)
        .await;

    let res = ctx
        .client
        .payments
        .refund(
            &AuthorizationRequestBuilder::default()
                .transaction_id(42)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    match res.ensure_approved() {
        Err(Error::BusinessRejection(rejection)) => {
            assert_eq!(rejection.response_code, Some(3));
            assert_eq!(rejection.result.as_deref(), Some("REJECTED"));
            assert_eq!(rejection.message.as_deref(), Some("Transaction not settled"));
        }
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn token_creation_carries_the_configured_public_key() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/PreVault/Card"))
        .and(body_partial_json(json!({
            "publicKey": PUBLIC_KEY,
            "addToVault": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseCode": 1,
            "token": 9876
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let res = ctx
        .client
        .tokenization
        .create_token(
            &TokenRequestBuilder::default()
                .card(
                    CardBuilder::default()
                        .number("4444333322221111")
                        .expiration_date("04/22")
                        .build()
                        .unwrap(),
                )
                .add_to_vault(false)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.token.as_deref(), Some("9876"));
}

#[tokio::test]
async fn update_then_get_transaction() {
    let ctx = TestContext::start().await;
    ctx.approve(
        "PUT",
        "/transactions/42",
        json!({ "ipAddress": "10.0.0.1", "transaction": { "transactionId": 42 } }),
    )
    .await;
    ctx.approve(
        "GET",
        "/Transactions/42",
        json!({ "transactions": [{ "transactionId": 42, "cardNumber": "XXXXXXXXXXXX1111" }] }),
    )
    .await;

    ctx.client
        .reporting
        .update_transaction(
            &UpdateTransactionRequestBuilder::default()
                .reference_transaction_id(42)
                .email("someone@example.com")
                .email_receipt(true)
                .build()
                .unwrap(),
        )
        .await
        .unwrap()
        .ensure_approved()
        .unwrap();

    let res = ctx.client.reporting.get_transaction("42").await.unwrap();

    assert_eq!(res.transactions[0].card_number.as_deref(), Some("XXXXXXXXXXXX1111"));
}

#[tokio::test]
async fn blank_batch_id_is_a_missing_parameter() {
    let ctx = TestContext::start().await;

    let err = ctx.client.settlement.get_batch_by_id("  ").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MissingParameter);
}
