// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account settings.

use serde_json::json;
use tracing::debug;

use super::BitsyApi;
use crate::error::BitsyResult;
use crate::gateway::{HttpRequest, Transport};
use crate::models::Setting;
use crate::session::SessionContext;

pub const LIST_SETTINGS_PATH: &str = "/account/setting";
pub const TOGGLE_SETTING_PATH: &str = "/setting";

impl<T: Transport> BitsyApi<T> {
    pub async fn list_settings(&self, session: &SessionContext) -> BitsyResult<Vec<Setting>> {
        let request = HttpRequest::get(LIST_SETTINGS_PATH).authorized(session);
        let settings: Vec<Setting> = self.gateway.request(request).await.decode_list()?;
        debug!(count = settings.len(), "Fetched settings");
        Ok(settings)
    }

    /// Flip the boolean setting `key`. Returns the setting as stored after the flip.
    pub async fn toggle_setting(&self, session: &SessionContext, key: &str) -> BitsyResult<Setting> {
        let request = HttpRequest::put(TOGGLE_SETTING_PATH)
            .json(json!({ "key": key }))
            .authorized(session);
        let setting: Setting = self.gateway.request(request).await.decode()?;
        debug!(key = %setting.key, value = setting.value, "Setting toggled");
        Ok(setting)
    }
}
