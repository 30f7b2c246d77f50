//! APIs and models related to recurring billing: recurring, installment and variable payment plans.

mod api;
mod model;

pub use api::RecurringApi;
pub use model::*;
