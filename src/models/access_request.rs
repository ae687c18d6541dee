// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Third-party requests for access to a document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{has_expired, pretty_time, Account, Document, Record, ThirdParty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessRequestStatus {
    Granted,
    Denied,
    Pending,
}

/// A request from `third_party` to access `document` owned by `account`.
///
/// Once decided, the backend calls `callback_url` with `callback_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub uuid: String,
    pub third_party: ThirdParty,
    pub account: Account,
    pub status: AccessRequestStatus,
    pub document: Document,
    pub callback_url: String,
    pub callback_data: Map<String, Value>,
    pub created_at: i64,
    pub expiry: i64,
}

impl AccessRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: impl Into<String>,
        third_party: ThirdParty,
        account: Account,
        status: AccessRequestStatus,
        document: Document,
        callback_url: impl Into<String>,
        callback_data: Map<String, Value>,
        created_at: i64,
        expiry: i64,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            third_party,
            account,
            status,
            document,
            callback_url: callback_url.into(),
            callback_data,
            created_at,
            expiry,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccessRequestStatus::Pending
    }

    pub fn is_expired(&self, now: i64) -> bool {
        has_expired(self.expiry, now)
    }

    pub fn formatted_title(&self) -> String {
        format!(
            "{} wants to access {}",
            self.third_party.name, self.document.name
        )
    }

    pub fn formatted_description(&self) -> String {
        format!(
            "{} requested access to {} on {}.",
            self.third_party.name,
            self.document.name,
            pretty_time(self.created_at)
        )
    }
}

impl Record for AccessRequest {
    const NAME: &'static str = "AccessRequest";
}
