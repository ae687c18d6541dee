// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Message signers and mnemonic-based key derivation.

use std::str::FromStr;

use alloy::{
    primitives::Address,
    signers::{
        local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner},
        Signer,
    },
};
use async_trait::async_trait;

use crate::error::{BitsyError, BitsyResult};

/// Fixed HD path: first account of the first Ethereum wallet.
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Something holding a wallet that can `personal_sign` a message.
///
/// For browser or mobile wallets the call may wait indefinitely on the
/// user. Any error (rejection, provider failure) is treated as a denial.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Returns the signature as `0x`-prefixed hex.
    async fn sign_message(&self, address: &str, message: &str) -> BitsyResult<String>;
}

/// Signs with a key held in process.
#[derive(Debug, Clone)]
pub struct LocalWalletSigner {
    signer: PrivateKeySigner,
}

impl LocalWalletSigner {
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self { signer }
    }

    /// Derive the signer for `phrase` at [`DERIVATION_PATH`].
    pub fn from_mnemonic(phrase: &str, password: Option<&str>) -> BitsyResult<Self> {
        derive_signer_from_mnemonic(phrase, password).map(Self::new)
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// EIP-55 checksummed address.
    pub fn address_string(&self) -> String {
        self.signer.address().to_checksum(None)
    }
}

#[async_trait]
impl WalletSigner for LocalWalletSigner {
    async fn sign_message(&self, address: &str, message: &str) -> BitsyResult<String> {
        let requested = Address::from_str(address)
            .map_err(|e| BitsyError::SignatureDenied(format!("invalid address {address}: {e}")))?;
        if requested != self.signer.address() {
            return Err(BitsyError::SignatureDenied(format!(
                "wallet does not hold {address}"
            )));
        }

        let signature = self
            .signer
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| BitsyError::SignatureDenied(e.to_string()))?;

        Ok(alloy::primitives::hex::encode_prefixed(signature.as_bytes()))
    }
}

/// Deterministically derive the signing key for a BIP-39 phrase.
pub fn derive_signer_from_mnemonic(
    phrase: &str,
    password: Option<&str>,
) -> BitsyResult<PrivateKeySigner> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut builder = MnemonicBuilder::<English>::default()
        .phrase(normalized)
        .derivation_path(DERIVATION_PATH)
        .map_err(|e| BitsyError::InvalidMnemonic(e.to_string()))?;
    if let Some(password) = password {
        builder = builder.password(password);
    }

    builder
        .build()
        .map_err(|e| BitsyError::InvalidMnemonic(e.to_string()))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Signature;

    use super::*;

    /// Well-known development mnemonic (Hardhat / Anvil account #0).
    const DEV_MNEMONIC: &str = "test test test test test test test test test test test junk";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn derivation_matches_known_vector() {
        let signer = LocalWalletSigner::from_mnemonic(DEV_MNEMONIC, None).unwrap();
        assert_eq!(signer.address_string(), DEV_ADDRESS);
    }

    #[test]
    fn derivation_is_deterministic_and_whitespace_tolerant() {
        let a = derive_signer_from_mnemonic(DEV_MNEMONIC, None).unwrap();
        let b = derive_signer_from_mnemonic(
            "  test test test test test test\n test test test test test junk ",
            None,
        )
        .unwrap();
        assert_eq!(a.address(), b.address());
    }

    #[test]
    fn password_changes_the_derived_key() {
        let plain = derive_signer_from_mnemonic(DEV_MNEMONIC, None).unwrap();
        let salted = derive_signer_from_mnemonic(DEV_MNEMONIC, Some("hunter2")).unwrap();
        assert_ne!(plain.address(), salted.address());
    }

    #[test]
    fn invalid_phrase_is_rejected() {
        for phrase in ["", "not a real mnemonic phrase at all", "test test test"] {
            assert!(
                matches!(
                    derive_signer_from_mnemonic(phrase, None),
                    Err(BitsyError::InvalidMnemonic(_))
                ),
                "{phrase:?} should be rejected"
            );
        }
    }

    #[tokio::test]
    async fn signature_recovers_to_signer_address() {
        let signer = LocalWalletSigner::from_mnemonic(DEV_MNEMONIC, None).unwrap();
        let message = "Nonce: abc123";

        let hex = signer.sign_message(DEV_ADDRESS, message).await.unwrap();
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 2 + 65 * 2);

        let bytes = alloy::primitives::hex::decode(&hex).unwrap();
        let signature = Signature::try_from(bytes.as_slice()).unwrap();
        let recovered = signature.recover_address_from_msg(message).unwrap();
        assert_eq!(recovered, signer.address());
    }

    #[tokio::test]
    async fn refuses_to_sign_for_another_address() {
        let signer = LocalWalletSigner::from_mnemonic(DEV_MNEMONIC, None).unwrap();

        let other = signer
            .sign_message("0x70997970C51812dc3A010C7d01b50e0d17dc79C8", "hi")
            .await;
        assert!(matches!(other, Err(BitsyError::SignatureDenied(_))));

        let garbage = signer.sign_message("0xDEAD", "hi").await;
        assert!(matches!(garbage, Err(BitsyError::SignatureDenied(_))));
    }
}
