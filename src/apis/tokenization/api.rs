use crate::{
    apis::{
        tokenization::{TokenRequest, TokenResponse},
        WorldpayClientInner,
    },
    codec,
    endpoints::Operation,
    Error,
};
use std::sync::Arc;

/// Worldpay Total tokenization APIs client.
#[derive(Clone, Debug)]
pub struct TokenizationApi {
    inner: Arc<WorldpayClientInner>,
}

impl TokenizationApi {
    pub(crate) fn new(inner: Arc<WorldpayClientInner>) -> Self {
        Self { inner }
    }

    /// Exchanges card data for a token, optionally storing it in the vault.
    #[tracing::instrument(name = "Create Token", skip(self, req))]
    pub async fn create_token(&self, req: &TokenRequest) -> Result<TokenResponse, Error> {
        let mut payload = codec::to_payload(req)?;
        self.inner.stamp_public_key(&mut payload)?;

        let value = self
            .inner
            .gateway
            .dispatch(Operation::CreateToken, &payload, &[])
            .await?;

        codec::decode(Operation::CreateToken, value)
    }
}
