// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Session Store
//!
//! There is exactly one session slot, stored under [`SESSION_KEY`] as the
//! JSON-serialized [`Account`]. Logging in overwrites it and logging out
//! deletes it; an absent or empty slot means "logged out".
//!
//! Writes are last-write-wins with no detection of concurrent writers.
//!
//! Components that need authenticated access receive a [`SessionContext`]
//! built once from the store, instead of reading storage ad hoc.

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{BitsyError, BitsyResult};
use crate::gateway::AUTHORIZATION_HEADER;
use crate::models::{Account, Record};

/// Storage key holding the serialized session account.
pub const SESSION_KEY: &str = "x-bitsy";

/// Handle on the single persisted session slot. Clones share the slot.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    /// Overwrite the slot with `account`.
    pub fn save(&self, account: &Account) -> BitsyResult<()> {
        let json = account.to_json()?;
        self.storage.set_item(SESSION_KEY, &json)?;
        info!(address = %account.address, "Session saved");
        Ok(())
    }

    /// Read and decode the slot.
    ///
    /// Fails with [`BitsyError::NoSession`] when the slot is absent or
    /// blank, and with `MalformedPayload` when it holds something that is
    /// not an account.
    pub fn get_session(&self) -> BitsyResult<Account> {
        let raw = self
            .storage
            .get_item(SESSION_KEY)?
            .filter(|raw| !raw.trim().is_empty())
            .ok_or(BitsyError::NoSession)?;
        Account::from_json(&raw)
    }

    /// Whether a decodable session is present. Never fails: a corrupt or
    /// unreadable slot counts as no session.
    pub fn has_session(&self) -> bool {
        match self.get_session() {
            Ok(_) => true,
            Err(BitsyError::NoSession) => false,
            Err(e) => {
                warn!(error = %e, "Stored session is unusable");
                false
            }
        }
    }

    /// Delete the slot.
    pub fn logout(&self) -> BitsyResult<()> {
        self.storage.remove_item(SESSION_KEY)?;
        debug!("Session cleared");
        Ok(())
    }
}

/// The authenticated account, threaded explicitly to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    account: Account,
}

impl SessionContext {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    /// Build the context from the persisted slot at application start.
    pub fn load(store: &SessionStore) -> BitsyResult<Self> {
        store.get_session().map(Self::new)
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn jwt(&self) -> &str {
        &self.account.jwt
    }

    /// Header name and value authenticating a request as this session.
    pub fn authorization_header(&self) -> (&'static str, &str) {
        (AUTHORIZATION_HEADER, self.jwt())
    }

    pub fn into_account(self) -> Account {
        self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn has_session_tracks_save_and_logout() {
        let store = SessionStore::in_memory();
        assert!(!store.has_session());

        store.save(&fixtures::account()).unwrap();
        assert!(store.has_session());

        store.logout().unwrap();
        assert!(!store.has_session());
    }

    #[test]
    fn get_session_returns_saved_account() {
        let store = SessionStore::in_memory();
        let mut account = fixtures::account();
        account.nonce = Some("abc123".to_string());

        store.save(&account).unwrap();
        assert_eq!(store.get_session().unwrap(), account);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = SessionStore::in_memory();
        let first = fixtures::account();
        let second = first.with_jwt("second-token");

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.get_session().unwrap().jwt, "second-token");
    }

    #[test]
    fn empty_slot_is_no_session() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "  ").unwrap();
        let store = SessionStore::new(storage);

        assert!(matches!(store.get_session(), Err(BitsyError::NoSession)));
        assert!(!store.has_session());
    }

    #[test]
    fn corrupt_slot_is_reported_and_not_a_session() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "garbage{").unwrap();
        let store = SessionStore::new(storage);

        assert!(matches!(
            store.get_session(),
            Err(BitsyError::MalformedPayload { record: "Account", .. })
        ));
        assert!(!store.has_session());
    }

    #[test]
    fn clones_share_the_slot() {
        let store = SessionStore::in_memory();
        let other = store.clone();

        store.save(&fixtures::account()).unwrap();
        assert!(other.has_session());
        other.logout().unwrap();
        assert!(!store.has_session());
    }

    #[test]
    fn file_backed_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let account = fixtures::account();

        SessionStore::new(FileStorage::new(dir.path()))
            .save(&account)
            .unwrap();

        let reopened = SessionStore::new(FileStorage::new(dir.path()));
        let context = SessionContext::load(&reopened).unwrap();
        assert_eq!(context.account(), &account);
        assert_eq!(context.jwt(), account.jwt);
        assert_eq!(
            context.authorization_header(),
            ("Authorization", "eyJhbGciOiJIUzI1NiJ9.e30.sig")
        );
    }

    #[test]
    fn context_load_without_session_fails() {
        let store = SessionStore::in_memory();
        assert!(matches!(
            SessionContext::load(&store),
            Err(BitsyError::NoSession)
        ));
    }
}
