// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Domain Records
//!
//! Plain value types exchanged with the bitsy backend. Every record derives
//! `Serialize` and `Deserialize` with field names kept verbatim, so the JSON
//! a record produces is exactly the shape the backend sends.
//!
//! ## Decoding
//!
//! Decoding goes through [`Record::from_value`] / [`Record::from_json`],
//! which validate field presence and type before a record is built. A
//! failure is reported as [`BitsyError::MalformedPayload`] carrying the
//! record name and, when known, the offending field. A partially-populated
//! record is never returned.
//!
//! Optional fields are `Option<T>`: a missing key or `null` decodes to
//! `None`, and `None` encodes as `null` rather than being omitted.

pub mod access_request;
pub mod access_token;
pub mod account;
pub mod document;
pub mod feed;
pub mod permission;
pub mod setting;
pub mod third_party;
pub mod webhook;

pub use access_request::{AccessRequest, AccessRequestStatus};
pub use access_token::AccessToken;
pub use account::Account;
pub use document::{Document, DocumentBlob, DocumentType};
pub use feed::{FeedItem, FeedItemType};
pub use permission::{Permission, PermissionKey};
pub use setting::{Setting, SettingMetadata};
pub use third_party::{ThirdParty, ThirdPartyAccount};
pub use webhook::{Webhook, WebhookType};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{BitsyError, BitsyResult};

/// JSON encode/decode contract shared by all wire records.
pub trait Record: Serialize + DeserializeOwned {
    /// Record name used in error reports.
    const NAME: &'static str;

    /// Strictly decode an already-parsed JSON value.
    fn from_value(value: Value) -> BitsyResult<Self> {
        serde_path_to_error::deserialize(value).map_err(|e| BitsyError::malformed_at(Self::NAME, e))
    }

    /// Parse JSON text and decode it.
    fn from_json(json: &str) -> BitsyResult<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| BitsyError::malformed(Self::NAME, &e))?;
        Self::from_value(value)
    }

    /// Decode a JSON array of records.
    fn list_from_value(value: Value) -> BitsyResult<Vec<Self>> {
        match value {
            Value::Array(items) => serde_path_to_error::deserialize(Value::Array(items))
                .map_err(|e| BitsyError::malformed_at(Self::NAME, e)),
            other => Err(BitsyError::MalformedPayload {
                record: Self::NAME,
                field: None,
                reason: format!("expected a list, got {other}"),
            }),
        }
    }

    fn to_value(&self) -> BitsyResult<Value> {
        serde_json::to_value(self).map_err(|e| BitsyError::malformed(Self::NAME, &e))
    }

    fn to_json(&self) -> BitsyResult<String> {
        serde_json::to_string(self).map_err(|e| BitsyError::malformed(Self::NAME, &e))
    }
}

/// Current unix time in seconds.
pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Render a unix timestamp as RFC 3339, falling back to the raw number.
pub(crate) fn pretty_time(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Unix-seconds expiry check; non-positive expiries never lapse.
pub(crate) fn has_expired(expiry: i64, now: i64) -> bool {
    expiry > 0 && expiry <= now
}
