// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # HTTP Gateway
//!
//! A single client for the bitsy backend. Each call takes an [`HttpRequest`]
//! descriptor and yields a [`GatewayResult`]: the decoded JSON body on a 2xx
//! response, or a stringified failure otherwise. Transport, status and
//! decoding failures all land in the error branch; nothing escapes
//! [`HttpGateway::request`] as an `Err`.
//!
//! Calls are independent: no retries, no caching, no de-duplication of
//! identical in-flight requests.

pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use transport::{ReqwestTransport, Transport, TransportResponse};

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::{BitsyError, BitsyResult};
use crate::models::Record;
use crate::session::SessionContext;

/// Header carrying the session token. The token is sent as-is, without a
/// `Bearer` prefix.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Request descriptor handed to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach the session token of `session`.
    pub fn authorized(self, session: &SessionContext) -> Self {
        let (name, value) = session.authorization_header();
        self.header(name, value)
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Outcome of a gateway call: exactly one of data or error.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayResult {
    Data(Value),
    Error(String),
}

impl GatewayResult {
    pub fn is_error(&self) -> bool {
        matches!(self, GatewayResult::Error(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            GatewayResult::Data(value) => Some(value),
            GatewayResult::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GatewayResult::Data(_) => None,
            GatewayResult::Error(message) => Some(message),
        }
    }

    pub fn into_result(self) -> BitsyResult<Value> {
        match self {
            GatewayResult::Data(value) => Ok(value),
            GatewayResult::Error(message) => Err(BitsyError::Transport(message)),
        }
    }

    pub fn decode<R: Record>(self) -> BitsyResult<R> {
        R::from_value(self.into_result()?)
    }

    pub fn decode_list<R: Record>(self) -> BitsyResult<Vec<R>> {
        R::list_from_value(self.into_result()?)
    }
}

/// Gateway over a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpGateway<T> {
    transport: T,
}

impl HttpGateway<ReqwestTransport> {
    /// Build the production gateway from configuration resolved at startup.
    pub fn from_config(config: &GatewayConfig) -> BitsyResult<Self> {
        Ok(Self::new(ReqwestTransport::from_config(config)?))
    }
}

impl<T: Transport> HttpGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn request(&self, request: HttpRequest) -> GatewayResult {
        let method = request.method.clone();
        let path = request.path.clone();

        let response = match self.transport.send(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, %path, error = %e, "HttpRequestError");
                return GatewayResult::Error(e.to_string());
            }
        };

        if !response.is_success() {
            let message = format!(
                "{method} {path} returned {}: {}",
                response.status, response.body
            );
            warn!(%method, %path, status = response.status, "HttpRequestError");
            return GatewayResult::Error(message);
        }

        if response.body.trim().is_empty() {
            return GatewayResult::Data(Value::Null);
        }

        match serde_json::from_str(&response.body) {
            Ok(value) => {
                debug!(%method, %path, status = response.status, "HTTP request succeeded");
                GatewayResult::Data(value)
            }
            Err(e) => {
                warn!(%method, %path, error = %e, "HttpRequestError: invalid JSON");
                GatewayResult::Error(format!("{method} {path} invalid JSON: {e}"))
            }
        }
    }
}
