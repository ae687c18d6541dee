// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wire transport behind the gateway.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::HttpRequest;
use crate::config::GatewayConfig;
use crate::error::{BitsyError, BitsyResult};

/// Raw response: status code plus the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever came back.
///
/// Implementations report network-level failures as `Err`; HTTP error
/// statuses are a normal response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &HttpRequest) -> BitsyResult<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: &HttpRequest) -> BitsyResult<TransportResponse> {
        (**self).send(request).await
    }
}

/// reqwest-backed transport bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: Url,
    http: Client,
}

impl ReqwestTransport {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn from_config(config: &GatewayConfig) -> BitsyResult<Self> {
        Ok(Self::new(config.base_url()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &HttpRequest) -> BitsyResult<TransportResponse> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.endpoint(&request.path));

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            BitsyError::Transport(format!("{} {} failed: {e}", request.method, request.path))
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            BitsyError::Transport(format!(
                "{} {} body unreadable: {e}",
                request.method, request.path
            ))
        })?;

        Ok(TransportResponse { status, body })
    }
}
