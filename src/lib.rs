//! Rust client for the [Worldpay Total](https://www.worldpay.com/us/developers/apidocs/getstarted.html)
//! (formerly SecureNet) payment gateway REST APIs.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Every call is authenticated with the SecureNet ID and secure key of a merchant.
//! Tokenization calls and payments made with vault tokens additionally need the public key
//! issued with the merchant account.
//!
//! ## Initialize a new `WorldpayClient`
//!
//! Create a new [`WorldpayClient`](crate::client::WorldpayClient) and provide the merchant credentials.
//!
//! ```rust,no_run
//! # use worldpay_total_rust::{WorldpayClient, config::Credentials};
//! # fn main() -> Result<(), worldpay_total_rust::Error> {
//! let client = WorldpayClient::builder(Credentials::new("8006912", "cQxbjK2bCDfp"))
//!     .with_public_key("278DB5D9-6B9A-4E53-9E2C-02E8CC8B3C8B")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `WorldpayClient` connects to the Demo environment.
//! To connect to a locally hosted payment controller, use
//! [`with_environment(Environment::Ipc)`](crate::client::WorldpayClientBuilder::with_environment).
//!
//! ## Charge a card
//!
//! ```rust,no_run
//! # use worldpay_total_rust::{WorldpayClient, Error, GatewayResponse, apis::payments::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: WorldpayClient = unreachable!();
//! #
//! let req = AuthorizationRequestBuilder::default()
//!     .amount(10.0)
//!     .card(
//!         CardBuilder::default()
//!             .number("4444333322221111")
//!             .cvv("999")
//!             .expiration_date("04/22")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let res = client.payments.charge(&req).await?.ensure_approved()?;
//!
//! if let Some(transaction) = res.transaction {
//!     println!("Charged, transaction id: {:?}", transaction.transaction_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A response is returned whenever the gateway answered `200 OK`, even if the operation itself
//! was declined. Use [`GatewayResponse::ensure_approved`](crate::response::GatewayResponse::ensure_approved)
//! to turn a declined operation into an [`Error::BusinessRejection`](crate::Error::BusinessRejection).
//!
//! ## Raw calls
//!
//! Any registered operation can also be invoked by name with an arbitrary JSON body:
//!
//! ```rust,no_run
//! # use worldpay_total_rust::{WorldpayClient, Error};
//! # use serde_json::json;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: WorldpayClient = unreachable!();
//! #
//! let res = client.transact("GetTransaction", &json!({}), &["115"]).await?;
//! println!("{}", res);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
pub mod codec;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod gateway;
mod middlewares;
pub mod response;

pub use client::WorldpayClient;
pub use error::Error;
pub use response::GatewayResponse;
