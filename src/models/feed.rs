// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Activity feed entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{pretty_time, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedItemType {
    AccessRequest,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: FeedItemType,
    pub created_at: Option<i64>,
}

impl FeedItem {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        text: impl Into<String>,
        kind: FeedItemType,
        created_at: Option<i64>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            text: text.into(),
            kind,
            created_at,
        }
    }

    /// Stable list key derived from the title and timestamp.
    pub fn id(&self) -> Uuid {
        let seed = format!("{}|{}", self.title, self.created_at.unwrap_or_default());
        Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
    }

    pub fn formatted_time(&self) -> Option<String> {
        self.created_at.map(pretty_time)
    }
}

impl Record for FeedItem {
    const NAME: &'static str = "FeedItem";
}
