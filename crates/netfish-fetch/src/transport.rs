use std::future::Future;

use crate::descriptor::RequestDescriptor;

/// Response handed back by a [`Transport`].
pub trait TransportResponse: Send {
    type Error: std::error::Error + Send + Sync + 'static;

    fn status(&self) -> u16;

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Reads the whole response body.
    fn bytes(self) -> impl Future<Output = Result<Vec<u8>, Self::Error>> + Send;
}

/// The network primitive requests are sent through.
///
/// Implementations own redirect handling, TLS and connection reuse. No
/// timeout is imposed by the caller: a transport that never resolves keeps
/// the request pending.
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;
    type Response: TransportResponse<Error = Self::Error>;

    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use serde::Deserialize;

    use super::*;
    use crate::descriptor::Method;

    /// Settings for the reqwest-backed transport.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
    #[serde(default)]
    pub struct ClientSetting {
        /// Proxy URLs; `https://` proxies carry HTTPS traffic, the rest HTTP.
        pub proxies: Option<Vec<String>>,
        pub user_agent: Option<String>,
    }

    impl ClientSetting {
        pub fn build(self) -> Result<reqwest::Client, reqwest::Error> {
            let mut cb = reqwest::Client::builder();

            if let Some(proxies) = self.proxies {
                let (secure, insecure): (Vec<String>, Vec<String>) =
                    proxies.into_iter().partition(|u| u.starts_with("https://"));

                for u in secure {
                    cb = cb.proxy(reqwest::Proxy::https(u)?);
                }

                for u in insecure {
                    cb = cb.proxy(reqwest::Proxy::http(u)?);
                }
            }

            if let Some(agent) = self.user_agent {
                cb = cb.user_agent(agent);
            }

            cb.build()
        }
    }

    /// Production transport using `reqwest`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Result<Self, reqwest::Error> {
            Self::with_setting(ClientSetting::default())
        }

        pub fn with_setting(setting: ClientSetting) -> Result<Self, reqwest::Error> {
            Ok(Self {
                client: setting.build()?,
            })
        }

        pub fn from_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    fn to_reqwest(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    pub struct ReqwestResponse(reqwest::Response);

    impl TransportResponse for ReqwestResponse {
        type Error = reqwest::Error;

        fn status(&self) -> u16 {
            self.0.status().as_u16()
        }

        async fn bytes(self) -> Result<Vec<u8>, Self::Error> {
            Ok(self.0.bytes().await?.to_vec())
        }
    }

    impl Transport for ReqwestTransport {
        type Error = reqwest::Error;
        type Response = ReqwestResponse;

        async fn send(&self, request: RequestDescriptor) -> Result<Self::Response, Self::Error> {
            let mut builder = self
                .client
                .request(to_reqwest(request.method), request.url.as_str());

            for (key, value) in &request.headers {
                builder = builder.header(key, value);
            }

            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            builder.send().await.map(ReqwestResponse)
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{ClientSetting, ReqwestResponse, ReqwestTransport};
