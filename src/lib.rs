// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! bitsy client - session, identity and data model for the bitsy backend
//!
//! A user proves control of an Ethereum address (or a password) to the
//! backend, receives an [`Account`](models::Account) carrying a session
//! token, and the client persists it in a single local slot. Everything
//! after login threads that session explicitly.
//!
//! ## Modules
//!
//! - `config` - Environment configuration (gateway address, session dir, logging)
//! - `error` - Error taxonomy shared by every layer
//! - `models` - Wire records and their strict JSON decoding
//! - `gateway` - HTTP gateway that never lets a failure escape
//! - `session` - The persisted session slot and explicit session context
//! - `wallet` - Nonce challenge, signing, and the login state machine
//! - `api` - Typed calls for third parties, settings, access tokens, webhooks
//! - `search` - Case-insensitive filtering of record lists

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod search;
pub mod session;
pub mod wallet;

pub use api::BitsyApi;
pub use config::Config;
pub use error::{BitsyError, BitsyResult};
pub use gateway::{GatewayResult, HttpGateway, HttpRequest};
pub use session::{SessionContext, SessionStore};
pub use wallet::WalletIdentityService;
