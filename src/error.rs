// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Error taxonomy shared by every layer of the client.

/// Errors surfaced by the record, gateway, session and identity layers.
#[derive(Debug, thiserror::Error)]
pub enum BitsyError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed {record} payload{}: {reason}", field_suffix(.field))]
    MalformedPayload {
        record: &'static str,
        field: Option<String>,
        reason: String,
    },

    #[error("No session cached")]
    NoSession,

    #[error("Signature denied: {0}")]
    SignatureDenied(String),

    #[error("Verification failed: {0}")]
    VerificationFailed(String),

    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Entropy source failed: {0}")]
    Entropy(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used across the crate.
pub type BitsyResult<T> = Result<T, BitsyError>;

impl BitsyError {
    /// Build a `MalformedPayload` from a serde failure, keeping the field
    /// name when serde reports one.
    pub fn malformed(record: &'static str, err: &serde_json::Error) -> Self {
        let reason = err.to_string();
        BitsyError::MalformedPayload {
            record,
            field: offending_field(&reason),
            reason,
        }
    }

    /// Build a `MalformedPayload` from a path-tracking decode failure.
    ///
    /// `field` is the dotted path to the offending value (`created_at`,
    /// `account.jwt`, `[1].key`). For a missing field the path points at the
    /// enclosing object, so the missing name is appended to it.
    pub fn malformed_at(
        record: &'static str,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let path = err.path().to_string();
        let reason = err.into_inner().to_string();

        let field = match (path.as_str(), offending_field(&reason)) {
            (".", missing) => missing,
            (path, Some(missing)) => Some(format!("{path}.{missing}")),
            (path, None) => Some(path.to_string()),
        };

        BitsyError::MalformedPayload {
            record,
            field,
            reason,
        }
    }
}

impl From<std::io::Error> for BitsyError {
    fn from(e: std::io::Error) -> Self {
        BitsyError::Storage(e.to_string())
    }
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" (field `{name}`)"),
        None => String::new(),
    }
}

/// serde names the field in backticks for missing/duplicate/unknown field
/// errors, e.g. "missing field `jwt` at line 1 column 20".
fn offending_field(reason: &str) -> Option<String> {
    const MARKERS: [&str; 2] = ["missing field `", "duplicate field `"];

    MARKERS.iter().find_map(|marker| {
        let start = reason.find(marker)? + marker.len();
        let end = reason[start..].find('`')?;
        Some(reason[start..start + end].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_extracts_missing_field_name() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let malformed = BitsyError::malformed("Account", &err);
        assert!(matches!(
            malformed,
            BitsyError::MalformedPayload { record: "Account", field: None, .. }
        ));

        assert_eq!(
            offending_field("missing field `jwt` at line 1 column 20"),
            Some("jwt".to_string())
        );
        assert_eq!(offending_field("invalid type: integer `1`"), None);
    }

    #[derive(Debug, serde::Deserialize)]
    struct Inner {
        #[allow(dead_code)]
        jwt: String,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Outer {
        #[allow(dead_code)]
        created_at: i64,
        #[allow(dead_code)]
        account: Inner,
    }

    fn decode_outer(value: serde_json::Value) -> BitsyError {
        let err = serde_path_to_error::deserialize::<_, Outer>(value).unwrap_err();
        BitsyError::malformed_at("Outer", err)
    }

    fn field_of(err: &BitsyError) -> Option<&str> {
        match err {
            BitsyError::MalformedPayload { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    #[test]
    fn malformed_at_names_wrongly_typed_field() {
        let err = decode_outer(serde_json::json!({
            "created_at": "yesterday",
            "account": { "jwt": "t" },
        }));
        assert_eq!(field_of(&err), Some("created_at"));
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn malformed_at_qualifies_nested_fields() {
        let wrong_type = decode_outer(serde_json::json!({
            "created_at": 1,
            "account": { "jwt": 42 },
        }));
        assert_eq!(field_of(&wrong_type), Some("account.jwt"));

        let missing = decode_outer(serde_json::json!({ "created_at": 1, "account": {} }));
        assert_eq!(field_of(&missing), Some("account.jwt"));

        let missing_top = decode_outer(serde_json::json!({ "account": { "jwt": "t" } }));
        assert_eq!(field_of(&missing_top), Some("created_at"));
    }

    #[test]
    fn display_mentions_field_when_known() {
        let err = BitsyError::MalformedPayload {
            record: "Setting",
            field: Some("value".to_string()),
            reason: "missing field `value`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed Setting payload (field `value`): missing field `value`"
        );

        assert_eq!(BitsyError::NoSession.to_string(), "No session cached");
    }
}
