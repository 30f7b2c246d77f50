//! APIs and models related to authorizations, captures, voids, refunds and credits.
//!
//! The card, check and address records defined here are shared by the other APIs.

mod api;
mod model;

pub use api::PaymentsApi;
pub use model::*;
