//! Transport gateway: resolves an operation, sends the HTTP call and returns the parsed JSON body.

use crate::{
    codec,
    config::Configuration,
    endpoints::{Endpoint, Operation},
    Error,
};
use chrono::Utc;
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::{
    fmt::{Debug, Formatter},
    io::Write,
    sync::{Arc, Mutex},
};

/// Sink receiving a copy of every decoded gateway response, for offline inspection.
///
/// Recording never affects the outcome of a call: write failures are logged and dropped.
#[derive(Clone)]
pub struct DiagnosticCapture {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl DiagnosticCapture {
    pub fn new(sink: impl Write + Send + 'static) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
        }
    }

    /// Appends the operation name and its response to the sink.
    pub fn record(&self, operation: Operation, response: &Value) {
        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(_) => {
                tracing::warn!(%operation, "Diagnostic capture sink is poisoned, skipping");
                return;
            }
        };

        let res = serde_json::to_string_pretty(response)
            .map_err(std::io::Error::from)
            .and_then(|pretty| {
                writeln!(
                    sink,
                    "******** {} {} ********\n{}",
                    operation,
                    Utc::now().to_rfc3339(),
                    pretty
                )
            })
            .and_then(|_| sink.flush());

        if let Err(e) = res {
            tracing::warn!(%operation, "Failed to write diagnostic capture: {}", e);
        }
    }
}

impl Debug for DiagnosticCapture {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticCapture").finish_non_exhaustive()
    }
}

/// Issues calls to the gateway. One call at a time is in flight per `transact` future,
/// and nothing is retried.
#[derive(Clone)]
pub struct Gateway {
    client: ClientWithMiddleware,
    configuration: Arc<Configuration>,
}

impl Gateway {
    pub(crate) fn new(client: ClientWithMiddleware, configuration: Arc<Configuration>) -> Self {
        Self {
            client,
            configuration,
        }
    }

    /// The configuration snapshot used by this gateway.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Sends `payload` to the endpoint registered for `operation` and returns the parsed JSON response.
    ///
    /// `params` are the positional path parameters of the endpoint (at most two are used,
    /// blank ones count as missing). The operation name is matched case-insensitively.
    pub async fn transact<T>(
        &self,
        operation: &str,
        payload: &T,
        params: &[&str],
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let operation: Operation = operation.parse()?;
        self.dispatch(operation, payload, params).await
    }

    #[tracing::instrument(name = "Gateway call", skip(self, payload))]
    pub(crate) async fn dispatch<T>(
        &self,
        operation: Operation,
        payload: &T,
        params: &[&str],
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        // Resolve
        let endpoint = operation.resolve(params.first().copied(), params.get(1).copied())?;
        let url = endpoint.url(&self.configuration.environment.base_url())?;

        // Send
        let body = self.body_for(&endpoint, payload)?;
        tracing::debug!(method = %endpoint.method, %url, "Sending request");

        let mut request = self.client.request(endpoint.method.clone(), url);
        if let Some(ref body) = body {
            tracing::trace!("Request body: {}", body);
            request = request.body(body.to_string());
        }

        // Await the response. Non-200 statuses are turned into errors by the middleware stack.
        let response = request.send().await.map_err(|e| {
            let e = Error::from(e);
            tracing::debug!(%operation, "Request failed: {}", e);
            e
        })?;
        let bytes = response.bytes().await?;

        // Decode
        let value: Value =
            serde_json::from_slice(&bytes).map_err(|source| Error::MalformedResponse {
                operation: operation.to_string(),
                source,
            })?;
        tracing::trace!("Response body: {}", value);

        if let Some(ref capture) = self.configuration.capture {
            capture.record(operation, &value);
        }

        Ok(value)
    }

    /// Builds the request body: `None` for `GET` calls and for payloads with nothing to send.
    fn body_for<T>(&self, endpoint: &Endpoint, payload: &T) -> Result<Option<Value>, Error>
    where
        T: Serialize + ?Sized,
    {
        if endpoint.method == Method::GET {
            return Ok(None);
        }

        let mut body = codec::to_payload(payload)?;
        if let Some(ref developer_application) = self.configuration.developer_application {
            codec::stamp(&mut body, "developerApplication", developer_application)?;
        }

        Ok(if body.is_empty() {
            None
        } else {
            Some(Value::Object(body))
        })
    }
}

impl Debug for Gateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("environment", &self.configuration.environment)
            .finish_non_exhaustive()
    }
}
