//! APIs and models related to card tokenization.

mod api;
mod model;

pub use api::TokenizationApi;
pub use model::*;
