//! Gateway core: one request primitive every operation goes through

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{DataEnvelope, Envelope};
use tokio_util::sync::CancellationToken;

use crate::{ClientConfig, ClientError, ClientResult};

/// Whether `cancel` has been triggered
pub(crate) fn is_cancelled(cancel: Option<&CancellationToken>) -> bool {
    cancel.is_some_and(CancellationToken::is_cancelled)
}

/// Method, query and body of a single backend request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Request whose body is `{"data": data}`
    pub fn with_data<B: Serialize>(method: Method, data: &B) -> ClientResult<Self> {
        let body = serde_json::to_value(DataEnvelope::new(data))?;
        Ok(Self {
            body: Some(body),
            ..Self::new(method)
        })
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Reservation backend gateway
///
/// Stateless apart from its configuration; clone it freely and run calls
/// concurrently. Each call may carry its own [`CancellationToken`].
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    config: ClientConfig,
}

impl Gateway {
    /// Create a gateway from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .default_headers(config.headers.clone())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Issue a request and unwrap the response envelope.
    ///
    /// - cancelled before the response is fully read: `Ok(on_cancel)`
    /// - `204 No Content`: `Ok(None)`, the body is not read
    /// - envelope carries `error`: `Err(ClientError::Api)`, whatever the status
    /// - otherwise: `Ok(data)`, `None` when `data` is absent or null
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
        cancel: Option<&CancellationToken>,
        on_cancel: Option<T>,
    ) -> ClientResult<Option<T>> {
        let url = self.config.url(path);
        let method = options.method.clone();

        let Some(token) = cancel else {
            return self.exchange(&url, options).await;
        };

        if token.is_cancelled() {
            tracing::debug!(%method, %url, "Request cancelled before dispatch");
            return Ok(on_cancel);
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!(%method, %url, "Request cancelled");
                Ok(on_cancel)
            }
            result = self.exchange(&url, options) => result,
        }
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> ClientResult<Option<T>> {
        let method = options.method;
        tracing::debug!(%method, %url, "Sending request");

        let mut req = self.client.request(method.clone(), url);
        if !options.query.is_empty() {
            req = req.query(&options.query);
        }
        if let Some(body) = &options.body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Request failed");
            ClientError::Http(e)
        })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::debug!(%method, %url, "No content");
            return Ok(None);
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Failed to read response body");
            ClientError::Http(e)
        })?;
        let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(%method, %url, %status, error = %e, "Response is not JSON");
            ClientError::InvalidResponse(format!("{status}: {e}"))
        })?;

        match Envelope::<T>::from_value(body)? {
            Envelope::Success(data) => Ok(data),
            Envelope::Failure(message) => {
                tracing::warn!(%method, %url, %status, error = %message, "Backend reported error");
                Err(ClientError::Api(message))
            }
        }
    }
}
