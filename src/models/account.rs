// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Account identity and session credential bundle.

use serde::{Deserialize, Serialize};

use super::Record;

/// An authenticated (or authenticating) account.
///
/// `pubkey` is absent for password-only accounts, `password_hash` for
/// wallet-only ones. `nonce` is only meaningful during the signature
/// handshake but is carried through untouched when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub pubkey: Option<String>,
    pub address: String,
    pub password_hash: Option<String>,
    pub created_at: i64,
    /// Session token attached to authenticated requests.
    pub jwt: String,
    pub nonce: Option<String>,
}

impl Account {
    pub fn new(
        pubkey: Option<String>,
        address: impl Into<String>,
        password_hash: Option<String>,
        created_at: i64,
        jwt: impl Into<String>,
        nonce: Option<String>,
    ) -> Self {
        Self {
            pubkey,
            address: address.into(),
            password_hash,
            created_at,
            jwt: jwt.into(),
            nonce,
        }
    }

    /// Copy of this account carrying a different session token.
    pub fn with_jwt(&self, jwt: impl Into<String>) -> Self {
        Self {
            jwt: jwt.into(),
            ..self.clone()
        }
    }

    /// Copy of this account with the handshake nonce cleared.
    pub fn without_nonce(&self) -> Self {
        Self {
            nonce: None,
            ..self.clone()
        }
    }
}

impl Record for Account {
    const NAME: &'static str = "Account";
}
