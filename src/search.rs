// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Case-insensitive list filtering used by the list screens.

use crate::models::{AccessRequest, Document, FeedItem, Permission, Setting};

/// A record that can be matched against a search box query.
pub trait Searchable {
    /// `query` is already lowercased and non-empty.
    fn matches(&self, query: &str) -> bool;
}

fn starts_with(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().starts_with(query)
}

impl Searchable for Document {
    fn matches(&self, query: &str) -> bool {
        starts_with(&self.name, query)
    }
}

impl Searchable for Setting {
    fn matches(&self, query: &str) -> bool {
        starts_with(&self.key, query)
            || self
                .description()
                .is_some_and(|description| description.to_lowercase().contains(query))
    }
}

impl Searchable for Permission {
    fn matches(&self, query: &str) -> bool {
        starts_with(&self.key, query)
    }
}

impl Searchable for FeedItem {
    fn matches(&self, query: &str) -> bool {
        starts_with(&self.title, query) || starts_with(&self.subtitle, query)
    }
}

impl Searchable for AccessRequest {
    fn matches(&self, query: &str) -> bool {
        starts_with(&self.third_party.name, query)
            || self.document.name.to_lowercase().contains(query)
    }
}

/// Items matching `query`; everything when the query is empty.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let query = query.to_lowercase();
    items.iter().filter(|item| item.matches(&query)).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::Map;

    use super::*;
    use crate::models::{fixtures, AccessRequestStatus, FeedItemType, ThirdParty};

    fn permission(key: &str) -> Permission {
        Permission::new(
            "perm",
            key,
            fixtures::document(),
            1,
            fixtures::account(),
            fixtures::third_party(),
            -1,
            0,
        )
    }

    fn settings() -> Vec<Setting> {
        ["unlock_with_face_id", "notify_on_access_request", "Other"]
            .into_iter()
            .map(|key| Setting::new(key, true, fixtures::account()))
            .collect()
    }

    #[test]
    fn empty_query_returns_everything() {
        let items = settings();
        assert_eq!(filter(&items, "").len(), 3);
    }

    #[test]
    fn prefix_match_ignores_case() {
        let items = settings();
        let hits = filter(&items, "OTH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "Other");

        // "face" sits inside the key and is absent from the description.
        assert!(filter(&items, "face").is_empty());
    }

    #[test]
    fn settings_also_match_inside_description() {
        let items = settings();

        let hits = filter(&items, "BIOMETRICS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "unlock_with_face_id");

        // Unknown keys have no description and match on key only.
        assert_eq!(filter(&items, "preference").len(), 0);
    }

    #[test]
    fn permissions_match_on_key_prefix() {
        let items = vec![permission("read"), permission("Write"), permission("delete")];

        let hits = filter(&items, "wr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "Write");
        assert!(filter(&items, "ete").is_empty());
    }

    #[test]
    fn feed_matches_title_or_subtitle() {
        let items = vec![
            FeedItem::new("Passport added", "Documents", "", FeedItemType::Document, None),
            FeedItem::new("Acme wants access", "Requests", "", FeedItemType::AccessRequest, None),
        ];
        assert_eq!(filter(&items, "req").len(), 1);
        assert_eq!(filter(&items, "pass").len(), 1);
        assert!(filter(&items, "added").is_empty());
    }

    #[test]
    fn access_request_matches_party_prefix_or_document_substring() {
        let request = |party: &str| {
            AccessRequest::new(
                "ar",
                ThirdParty::new("p", party),
                fixtures::account(),
                AccessRequestStatus::Pending,
                fixtures::document(),
                "https://cb",
                Map::new(),
                0,
                0,
            )
        };
        let items = vec![request("Acme Lending"), request("Zeta Bank")];

        assert_eq!(filter(&items, "zeta").len(), 1);
        // Document "Passport" contains "sport".
        assert_eq!(filter(&items, "SPORT").len(), 2);
        assert!(filter(&items, "lending").is_empty());
    }

    #[test]
    fn documents_match_on_name_prefix() {
        let items = vec![fixtures::document()];
        assert_eq!(filter(&items, "pAsS").len(), 1);
        assert!(filter(&items, "port").is_empty());
    }
}
