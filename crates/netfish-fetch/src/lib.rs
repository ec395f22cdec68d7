//! Validated JSON HTTP verbs over a pluggable transport.
//!
//! # Architecture
//!
//! - [`RequestDescriptor`] - per-call method, URL, body and headers
//! - [`Transport`] - the network primitive; [`ReqwestTransport`] in production,
//!   recording mocks in tests
//! - [`Client`] - `get` / `post` / `put` / `patch` / `delete`
//!
//! # Failure policy
//!
//! Three outcomes are kept apart on purpose:
//!
//! - A bad URL or body fails a guard: a diagnostic is emitted, the transport
//!   is never called and [`FetchError::Invalid`] is returned.
//! - A non-success status is logged and the body is still decoded as JSON.
//! - A transport or decoding failure is logged and returned to the caller.

mod client;
mod descriptor;
mod error;
mod transport;

pub use client::Client;
pub use descriptor::{CONTENT_TYPE, JSON_MIME, Method, RequestDescriptor};
pub use error::{FetchError, Result};
pub use transport::{Transport, TransportResponse};

#[cfg(feature = "reqwest")]
pub use transport::{ClientSetting, ReqwestResponse, ReqwestTransport};
