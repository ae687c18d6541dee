// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Backend API
//!
//! Typed calls to the bitsy backend, grouped by resource:
//!
//! | Resource | Endpoints |
//! |----------|-----------|
//! | third parties | `POST /account/third-party` |
//! | settings | `GET /account/setting`, `PUT /setting` |
//! | access tokens | `GET/POST/PUT/DELETE /access-token` |
//! | webhooks | `GET/POST/PUT/DELETE /webhook` |
//!
//! Every authenticated call takes the [`SessionContext`](crate::session::SessionContext)
//! explicitly. Gateway failures surface as `BitsyError::Transport`, bodies
//! that do not match the expected record as `MalformedPayload`.

pub mod access_tokens;
pub mod settings;
pub mod third_parties;
pub mod webhooks;

use crate::config::GatewayConfig;
use crate::error::BitsyResult;
use crate::gateway::{HttpGateway, ReqwestTransport, Transport};

/// Client for the backend resources beyond login.
#[derive(Debug, Clone)]
pub struct BitsyApi<T> {
    gateway: HttpGateway<T>,
}

impl BitsyApi<ReqwestTransport> {
    pub fn from_config(config: &GatewayConfig) -> BitsyResult<Self> {
        Ok(Self::new(HttpGateway::from_config(config)?))
    }
}

impl<T: Transport> BitsyApi<T> {
    pub fn new(gateway: HttpGateway<T>) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &HttpGateway<T> {
        &self.gateway
    }
}
