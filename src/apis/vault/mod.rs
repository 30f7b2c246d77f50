//! APIs and models related to the customer vault: customers and their stored payment methods.

mod api;
mod model;

pub use api::VaultApi;
pub use model::*;
