// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use serde_json::json;
use tracing::{debug, info};

use super::BitsyApi;
use crate::error::BitsyResult;
use crate::gateway::{HttpRequest, Transport};
use crate::models::{Webhook, WebhookType};
use crate::session::SessionContext;

pub const WEBHOOK_PATH: &str = "/webhook";

impl<T: Transport> BitsyApi<T> {
    pub async fn list_webhooks(&self, session: &SessionContext) -> BitsyResult<Vec<Webhook>> {
        let request = HttpRequest::get(WEBHOOK_PATH).authorized(session);
        let webhooks: Vec<Webhook> = self.gateway.request(request).await.decode_list()?;
        debug!(count = webhooks.len(), "Fetched webhooks");
        Ok(webhooks)
    }

    /// Register a webhook. The third party is resolved by the backend.
    pub async fn create_webhook(
        &self,
        session: &SessionContext,
        name: &str,
        kind: WebhookType,
        endpoint: &str,
        active: bool,
    ) -> BitsyResult<Webhook> {
        let request = HttpRequest::post(WEBHOOK_PATH)
            .json(json!({
                "name": name,
                "type": kind,
                "endpoint": endpoint,
                "active": active,
            }))
            .authorized(session);
        let webhook: Webhook = self.gateway.request(request).await.decode()?;
        info!(uuid = %webhook.uuid, %endpoint, "Webhook created");
        Ok(webhook)
    }

    pub async fn toggle_webhook(&self, session: &SessionContext, uuid: &str) -> BitsyResult<Webhook> {
        let request = HttpRequest::put(WEBHOOK_PATH)
            .json(json!({ "uuid": uuid }))
            .authorized(session);
        let webhook: Webhook = self.gateway.request(request).await.decode()?;
        debug!(%uuid, active = webhook.active, "Webhook toggled");
        Ok(webhook)
    }

    pub async fn delete_webhook(&self, session: &SessionContext, uuid: &str) -> BitsyResult<()> {
        let request = HttpRequest::delete(WEBHOOK_PATH)
            .json(json!({ "uuid": uuid }))
            .authorized(session);
        self.gateway.request(request).await.into_result()?;
        info!(%uuid, "Webhook deleted");
        Ok(())
    }
}
