// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Permissions granted to third parties on documents.

use serde::{Deserialize, Serialize};

use super::{Account, Document, Record, ThirdParty};

/// Known permission keys. The wire field stays a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKey {
    Read,
    Write,
    Delete,
    Other,
}

impl PermissionKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "read" => Some(PermissionKey::Read),
            "write" => Some(PermissionKey::Write),
            "delete" => Some(PermissionKey::Delete),
            "other" => Some(PermissionKey::Other),
            _ => None,
        }
    }
}

/// A permission on `document` granted to `party`.
///
/// `value` is an integer flag: `0` is false, anything else is true. This is
/// deliberately looser than [`Setting::value`](super::Setting), which is a
/// strict boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub uuid: String,
    pub key: String,
    pub document: Document,
    pub value: i64,
    pub account: Account,
    pub party: ThirdParty,
    /// Lifetime in seconds; `-1` means unbounded.
    pub ttl: i64,
    pub created_at: i64,
}

impl Permission {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: impl Into<String>,
        key: impl Into<String>,
        document: Document,
        value: i64,
        account: Account,
        party: ThirdParty,
        ttl: i64,
        created_at: i64,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            key: key.into(),
            document,
            value,
            account,
            party,
            ttl,
            created_at,
        }
    }

    pub fn is_granted(&self) -> bool {
        self.value != 0
    }

    pub fn kind(&self) -> Option<PermissionKey> {
        PermissionKey::parse(&self.key)
    }
}

impl Record for Permission {
    const NAME: &'static str = "Permission";
}
