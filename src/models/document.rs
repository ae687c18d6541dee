// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Stored documents and their opaque payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Account, Record};

/// Kinds of document a user can add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Basic,
    BankCard,
    BankAccount,
}

/// Encoded document content. The client never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentBlob {
    pub data: Value,
}

impl DocumentBlob {
    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

impl Record for DocumentBlob {
    const NAME: &'static str = "DocumentBlob";
}

/// A document owned by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Content id of the stored blob.
    pub cid: String,
    pub name: String,
    pub blob: DocumentBlob,
    pub account: Account,
    /// Key image used by the backend for uniqueness checks.
    pub key_img: String,
    pub created_at: i64,
}

impl Document {
    pub fn new(
        cid: impl Into<String>,
        name: impl Into<String>,
        blob: DocumentBlob,
        account: Account,
        key_img: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            blob,
            account,
            key_img: key_img.into(),
            created_at,
        }
    }
}

impl Record for Document {
    const NAME: &'static str = "Document";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::BitsyError;
    use crate::models::fixtures;

    #[test]
    fn document_round_trip_keeps_nested_records() {
        let document = fixtures::document();
        let json = document.to_json().unwrap();
        let decoded = Document::from_json(&json).unwrap();

        assert_eq!(decoded, document);
        assert_eq!(decoded.account, fixtures::account());
        assert_eq!(decoded.blob.data["country"], json!("CA"));
    }

    #[test]
    fn blob_payload_is_opaque() {
        for data in [json!("base64=="), json!([1, 2, 3]), json!(null), json!({ "k": { "n": 1 } })] {
            let blob = DocumentBlob::new(data.clone());
            let decoded = DocumentBlob::from_json(&blob.to_json().unwrap()).unwrap();
            assert_eq!(decoded.data, data);
        }
    }

    #[test]
    fn malformed_nested_account_fails_whole_document() {
        let mut value = fixtures::document().to_value().unwrap();
        value["account"]["jwt"] = json!(42);

        assert!(matches!(
            Document::from_value(value.clone()),
            Err(BitsyError::MalformedPayload { record: "Document", field: Some(ref f), .. })
                if f == "account.jwt"
        ));

        value["account"] = json!({ "address": "0x1" });
        assert!(matches!(
            Document::from_value(value),
            Err(BitsyError::MalformedPayload { record: "Document", field: Some(ref f), .. })
                if f == "account.created_at"
        ));
    }

    #[test]
    fn document_type_uses_variant_names() {
        assert_eq!(
            serde_json::to_value(DocumentType::BankAccount).unwrap(),
            json!("BankAccount")
        );
        assert!(serde_json::from_value::<DocumentType>(json!("Passport")).is_err());
    }
}
