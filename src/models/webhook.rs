// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use serde::{Deserialize, Serialize};

use super::{Record, ThirdParty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookType {
    Incoming,
    Outgoing,
}

/// A webhook registered between the account and a third party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub uuid: String,
    pub third_party: ThirdParty,
    #[serde(rename = "type")]
    pub kind: WebhookType,
    pub name: String,
    pub endpoint: String,
    pub active: bool,
}

impl Webhook {
    pub fn new(
        uuid: impl Into<String>,
        third_party: ThirdParty,
        kind: WebhookType,
        name: impl Into<String>,
        endpoint: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            third_party,
            kind,
            name: name.into(),
            endpoint: endpoint.into(),
            active,
        }
    }
}

impl Record for Webhook {
    const NAME: &'static str = "Webhook";
}
