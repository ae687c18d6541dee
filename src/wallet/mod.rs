// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet Identity
//!
//! Proves control of an Ethereum address to the bitsy backend. The client
//! generates a nonce, the wallet signs a prompt embedding it, and the backend
//! verifies the signature and answers with the [`Account`](crate::models::Account)
//! that becomes the session.
//!
//! Keys come from a BIP-39 mnemonic derived at [`DERIVATION_PATH`], or from
//! any external wallet behind [`WalletSigner`].

pub mod challenge;
pub mod identity;
pub mod pubkey;
pub mod signer;

pub use challenge::{generate_nonce, signature_prompt, NONCE_LEN};
pub use identity::{AuthState, WalletIdentityService, PASSWORD_LOGIN_PATH, VERIFY_PATH};
pub use pubkey::uncompress_pubkey;
pub use signer::{derive_signer_from_mnemonic, LocalWalletSigner, WalletSigner, DERIVATION_PATH};
