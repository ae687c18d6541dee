// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Third-party signup.

use serde_json::json;
use tracing::info;

use super::BitsyApi;
use crate::error::BitsyResult;
use crate::gateway::{HttpRequest, Transport};
use crate::models::ThirdPartyAccount;

pub const THIRD_PARTY_PATH: &str = "/account/third-party";

impl<T: Transport> BitsyApi<T> {
    /// Register a third party owned by `address`. Unauthenticated.
    pub async fn register_third_party(
        &self,
        name: &str,
        address: &str,
    ) -> BitsyResult<ThirdPartyAccount> {
        let request =
            HttpRequest::post(THIRD_PARTY_PATH).json(json!({ "name": name, "address": address }));
        let registered: ThirdPartyAccount = self.gateway.request(request).await.decode()?;

        info!(
            third_party = %registered.third_party.uuid,
            %address,
            "Third party registered"
        );
        Ok(registered)
    }
}
