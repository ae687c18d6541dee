// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-account boolean settings.

use serde::{Deserialize, Serialize};

use super::{Account, Record};

/// Static description of a setting key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingMetadata {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub account_type: &'static str,
}

/// Client-side display metadata for setting keys. Keys the backend sends
/// that are not listed here simply have no metadata.
pub const SETTINGS_METADATA: &[SettingMetadata] = &[
    SettingMetadata {
        key: "other",
        name: "Other",
        description: "General account preference.",
        account_type: "any",
    },
    SettingMetadata {
        key: "unlock_with_face_id",
        name: "Unlock with Face ID",
        description: "Unlock the wallet with biometrics instead of the password.",
        account_type: "user",
    },
    SettingMetadata {
        key: "notify_on_access_request",
        name: "Access request notifications",
        description: "Notify me when a third party requests access to a document.",
        account_type: "user",
    },
    SettingMetadata {
        key: "auto_deny_expired_requests",
        name: "Deny expired requests",
        description: "Automatically deny access requests once they expire.",
        account_type: "user",
    },
];

/// A setting toggled by the account owner. `value` is a strict boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub key: String,
    pub value: bool,
    pub account: Account,
}

impl Setting {
    pub fn new(key: impl Into<String>, value: bool, account: Account) -> Self {
        Self {
            key: key.into(),
            value,
            account,
        }
    }

    pub fn metadata(&self) -> Option<&'static SettingMetadata> {
        SETTINGS_METADATA.iter().find(|m| m.key == self.key)
    }

    pub fn description(&self) -> Option<&'static str> {
        self.metadata().map(|m| m.description)
    }
}

impl Record for Setting {
    const NAME: &'static str = "Setting";
}
