//! APIs and models related to batch settlement.

mod api;
mod model;

pub use api::SettlementApi;
pub use model::*;
