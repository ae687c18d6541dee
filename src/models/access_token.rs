// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use serde::{Deserialize, Serialize};

use super::{has_expired, Record};

/// An API access token issued to the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub uuid: String,
    pub name: String,
    /// Unix seconds; non-positive means no expiry.
    pub expiry: i64,
    pub active: bool,
}

impl AccessToken {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>, expiry: i64, active: bool) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            expiry,
            active,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        has_expired(self.expiry, now)
    }

    /// Active and not yet expired.
    pub fn is_usable(&self, now: i64) -> bool {
        self.active && !self.is_expired(now)
    }
}

impl Record for AccessToken {
    const NAME: &'static str = "AccessToken";
}
