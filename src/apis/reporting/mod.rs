//! APIs and models related to searching, retrieving and updating transactions.

mod api;
mod model;

pub use api::ReportingApi;
pub use model::*;
