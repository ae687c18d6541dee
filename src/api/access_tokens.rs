// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Personal access tokens.

use serde_json::json;
use tracing::{debug, info};

use super::BitsyApi;
use crate::error::BitsyResult;
use crate::gateway::{HttpRequest, Transport};
use crate::models::AccessToken;
use crate::session::SessionContext;

pub const ACCESS_TOKEN_PATH: &str = "/access-token";

impl<T: Transport> BitsyApi<T> {
    pub async fn list_access_tokens(
        &self,
        session: &SessionContext,
    ) -> BitsyResult<Vec<AccessToken>> {
        let request = HttpRequest::get(ACCESS_TOKEN_PATH).authorized(session);
        let tokens: Vec<AccessToken> = self.gateway.request(request).await.decode_list()?;
        debug!(count = tokens.len(), "Fetched access tokens");
        Ok(tokens)
    }

    /// Issue a new token called `name`. The backend assigns uuid and expiry.
    pub async fn create_access_token(
        &self,
        session: &SessionContext,
        name: &str,
    ) -> BitsyResult<AccessToken> {
        let request = HttpRequest::post(ACCESS_TOKEN_PATH)
            .json(json!({ "name": name }))
            .authorized(session);
        let token: AccessToken = self.gateway.request(request).await.decode()?;
        info!(uuid = %token.uuid, "Access token created");
        Ok(token)
    }

    /// Flip the `active` flag of token `uuid`.
    pub async fn toggle_access_token(
        &self,
        session: &SessionContext,
        uuid: &str,
    ) -> BitsyResult<AccessToken> {
        let request = HttpRequest::put(ACCESS_TOKEN_PATH)
            .json(json!({ "uuid": uuid }))
            .authorized(session);
        let token: AccessToken = self.gateway.request(request).await.decode()?;
        debug!(%uuid, active = token.active, "Access token toggled");
        Ok(token)
    }

    pub async fn delete_access_token(&self, session: &SessionContext, uuid: &str) -> BitsyResult<()> {
        let request = HttpRequest::delete(ACCESS_TOKEN_PATH)
            .json(json!({ "uuid": uuid }))
            .authorized(session);
        self.gateway.request(request).await.into_result()?;
        info!(%uuid, "Access token deleted");
        Ok(())
    }
}
