// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! SEC1 public key decompression for backend signature checks.

use k256::{elliptic_curve::sec1::ToEncodedPoint, PublicKey};

use crate::error::{BitsyError, BitsyResult};

const COMPRESSED_LEN: usize = 33;

/// Expand a compressed secp256k1 public key (`0x`-prefix optional) into its
/// 65-byte uncompressed form `04 || X || Y`.
pub fn uncompress_pubkey(compressed: &str) -> BitsyResult<Vec<u8>> {
    let raw = compressed.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);

    let bytes = alloy::primitives::hex::decode(raw)
        .map_err(|e| BitsyError::InvalidPublicKey(format!("not hex: {e}")))?;
    if bytes.len() != COMPRESSED_LEN {
        return Err(BitsyError::InvalidPublicKey(format!(
            "expected {COMPRESSED_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let key = PublicKey::from_sec1_bytes(&bytes)
        .map_err(|_| BitsyError::InvalidPublicKey("not a point on secp256k1".to_string()))?;

    Ok(key.to_encoded_point(false).as_bytes().to_vec())
}
