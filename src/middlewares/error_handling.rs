use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates every response whose status is not `200 OK`
/// into an [`Error::Http`](crate::error::Error).
///
/// The gateway signals business failures inside `200` bodies, so any other status
/// (including other `2xx` codes) is a protocol-level failure.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            tracing::debug!("Failed HTTP request. Status code: {}", status);

            // The body is informational only, a failure to read it must not mask the status
            let body = response
                .text()
                .await
                .ok()
                .filter(|text| !text.is_empty());

            return Err(Error::Http(ApiError {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        Ok(response)
    }
}
