use netfish_core::{guard, render_error, render_status_error};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::descriptor::{Method, RequestDescriptor};
use crate::error::{FetchError, Result};
use crate::transport::{Transport, TransportResponse};

/// JSON request functions over a [`Transport`].
///
/// # Examples
///
/// ```no_run
/// use netfish_fetch::{Client, ReqwestTransport};
/// use serde_json::json;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(ReqwestTransport::new()?);
/// let created = client
///     .post("https://api.example.com/todos", &json!({"title": "write docs"}))
///     .await?;
/// println!("{created}");
/// # Ok(())
/// # }
/// ```
pub struct Client<T> {
    transport: T,
    headers: Vec<(String, String)>,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            headers: Vec::new(),
        }
    }

    /// Adds a header sent with every request. It never replaces the JSON
    /// content type a method declares.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches `url` and returns the decoded JSON response.
    pub async fn get(&self, url: &str) -> Result<Value> {
        let request = self.describe::<Value>(Method::Get, url, None)?;
        self.dispatch(request).await
    }

    /// Sends `body` as JSON to create a resource.
    pub async fn post<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        let request = self.describe(Method::Post, url, Some(body))?;
        self.dispatch(request).await
    }

    /// Sends `body` as JSON to replace a resource.
    pub async fn put<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        let request = self.describe(Method::Put, url, Some(body))?;
        self.dispatch(request).await
    }

    /// Sends `body` as JSON to update part of a resource.
    pub async fn patch<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> Result<Value> {
        let request = self.describe(Method::Patch, url, Some(body))?;
        self.dispatch(request).await
    }

    /// Deletes `url`. No body and no content type are sent.
    pub async fn delete(&self, url: &str) -> Result<Value> {
        let request = self.describe::<Value>(Method::Delete, url, None)?;
        self.dispatch(request).await
    }

    /// Runs the guards and builds the descriptor. URL first, then body.
    fn describe<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<RequestDescriptor> {
        guard::require_url(url)?;

        let mut request = RequestDescriptor::new(method, url);

        if let Some(body) = body {
            let body = serde_json::to_value(body).map_err(|e| surface(FetchError::Encode(e)))?;
            guard::require_body(&body)?;
            let encoded =
                serde_json::to_string(&body).map_err(|e| surface(FetchError::Encode(e)))?;
            request = request.with_body(encoded);
        }

        for (name, value) in &self.headers {
            request = request.with_header(name.as_str(), value.as_str());
        }

        Ok(request)
    }

    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| surface(FetchError::transport(e)))?;

        if !response.is_success() {
            render_status_error("Network response error", response.status());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| surface(FetchError::transport(e)))?;

        serde_json::from_slice(&body).map_err(|e| surface(FetchError::Decode(e)))
    }
}

/// Logs a failure that is about to be returned to the caller.
fn surface(err: FetchError) -> FetchError {
    render_error(&err);
    err
}
