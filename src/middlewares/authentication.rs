use crate::{config::Credentials, Error};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

static ORIGIN_VALUE: &str = "worldpay.com";

/// Reqwest middleware to inject the merchant credentials and the content negotiation headers
/// into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    authorization: HeaderValue,
}

impl AuthenticationMiddleware {
    pub fn new(credentials: &Credentials) -> Result<Self, Error> {
        let mut authorization = HeaderValue::from_str(&credentials.basic_authorization())
            .map_err(|e| Error::Other(e.into()))?;
        authorization.set_sensitive(true);

        Ok(Self { authorization })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));

        // Run the rest of the middlewares
        next.run(req, extensions).await
    }
}
