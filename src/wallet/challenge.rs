// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Login challenge: a locally generated nonce embedded in a fixed prompt.

use ring::rand::{SecureRandom, SystemRandom};

use crate::error::{BitsyError, BitsyResult};

/// Nonce size in bytes before hex encoding.
pub const NONCE_LEN: usize = 32;

/// Fresh one-time challenge value: 32 random bytes, lowercase hex.
pub fn generate_nonce() -> BitsyResult<String> {
    let mut bytes = [0u8; NONCE_LEN];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| BitsyError::Entropy("system random source unavailable".to_string()))?;
    Ok(alloy::primitives::hex::encode(bytes))
}

/// The message the wallet is asked to sign.
pub fn signature_prompt(nonce: &str) -> String {
    format!(
        "Welcome to bitsy <3.

  Sign this message to securely log in.

  Nonce: {nonce}"
    )
}
