// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet and password login flows.
//!
//! ## Wallet Flow
//!
//! 1. `Idle` → `NonceIssued`: a nonce is generated locally.
//! 2. `NonceIssued` → `Signed`: the wallet signs the rendered prompt.
//! 3. `Signed` → `Verified`: the backend checks
//!    `{nonce, address, signature, input}` and returns the account.
//! 4. `Verified` → `Idle`: the account is written to the session store.
//!
//! Any failure returns to `Idle` without touching the session store. Steps
//! run strictly in order and nothing is retried.

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::challenge::{generate_nonce, signature_prompt};
use super::signer::{LocalWalletSigner, WalletSigner};
use crate::error::{BitsyError, BitsyResult};
use crate::gateway::{GatewayResult, HttpGateway, HttpRequest, Transport};
use crate::models::{Account, Record};
use crate::session::SessionStore;

pub const VERIFY_PATH: &str = "/account/auth/verify";
pub const PASSWORD_LOGIN_PATH: &str = "/account/login2";

/// Where a login flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    NonceIssued {
        nonce: String,
    },
    Signed {
        nonce: String,
        address: String,
        signature: String,
        input: String,
    },
    Verified {
        account: Account,
    },
}

impl AuthState {
    fn name(&self) -> &'static str {
        match self {
            AuthState::Idle => "idle",
            AuthState::NonceIssued { .. } => "nonce_issued",
            AuthState::Signed { .. } => "signed",
            AuthState::Verified { .. } => "verified",
        }
    }
}

/// Establishes a session and hands it to the [`SessionStore`].
pub struct WalletIdentityService<T> {
    gateway: HttpGateway<T>,
    sessions: SessionStore,
    state: AuthState,
}

impl<T: Transport> WalletIdentityService<T> {
    pub fn new(gateway: HttpGateway<T>, sessions: SessionStore) -> Self {
        Self {
            gateway,
            sessions,
            state: AuthState::Idle,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn gateway(&self) -> &HttpGateway<T> {
        &self.gateway
    }

    fn transition(&mut self, next: AuthState) {
        debug!(from = self.state.name(), to = next.name(), "Auth state transition");
        self.state = next;
    }

    fn reset(&mut self) {
        self.transition(AuthState::Idle);
    }

    /// Log in `address` through `signer` with a fresh nonce.
    pub async fn authenticate<S>(&mut self, address: &str, signer: &S) -> BitsyResult<Account>
    where
        S: WalletSigner + ?Sized,
    {
        let nonce = generate_nonce()?;
        self.authenticate_with_nonce(nonce, address, signer).await
    }

    /// Log in `address` through `signer`, challenging with `nonce`.
    pub async fn authenticate_with_nonce<S>(
        &mut self,
        nonce: String,
        address: &str,
        signer: &S,
    ) -> BitsyResult<Account>
    where
        S: WalletSigner + ?Sized,
    {
        let result = self.run_wallet_flow(nonce, address, signer).await;
        self.reset();
        result
    }

    async fn run_wallet_flow<S>(
        &mut self,
        nonce: String,
        address: &str,
        signer: &S,
    ) -> BitsyResult<Account>
    where
        S: WalletSigner + ?Sized,
    {
        self.transition(AuthState::NonceIssued {
            nonce: nonce.clone(),
        });

        let input = signature_prompt(&nonce);
        let signature = match signer.sign_message(address, &input).await {
            Ok(signature) => signature,
            Err(e) => {
                warn!(%address, error = %e, "Could not sign the login challenge");
                return Err(match e {
                    BitsyError::SignatureDenied(reason) => BitsyError::SignatureDenied(reason),
                    other => BitsyError::SignatureDenied(other.to_string()),
                });
            }
        };

        self.transition(AuthState::Signed {
            nonce: nonce.clone(),
            address: address.to_string(),
            signature: signature.clone(),
            input: input.clone(),
        });

        let request = HttpRequest::post(VERIFY_PATH).json(json!({
            "nonce": nonce,
            "address": address,
            "signature": signature,
            "input": input,
        }));
        let account = accept_account(self.gateway.request(request).await)?;

        self.transition(AuthState::Verified {
            account: account.clone(),
        });
        self.sessions.save(&account)?;
        info!(address = %account.address, "Wallet login verified");
        Ok(account)
    }

    /// Non-interactive login from an imported mnemonic phrase.
    pub async fn login_with_mnemonic(
        &mut self,
        phrase: &str,
        password: Option<&str>,
    ) -> BitsyResult<Account> {
        let signer = LocalWalletSigner::from_mnemonic(phrase, password)?;
        let address = signer.address_string();
        self.authenticate(&address, &signer).await
    }

    /// Password login. Persists the session only on success.
    pub async fn login_with_password(&mut self, password: &str) -> BitsyResult<Account> {
        let request = HttpRequest::post(PASSWORD_LOGIN_PATH).json(json!({ "password": password }));
        let account = accept_account(self.gateway.request(request).await)?;

        self.sessions.save(&account)?;
        info!(address = %account.address, "Password login succeeded");
        Ok(account)
    }
}

/// Turn a verification response into an account, or a `VerificationFailed`.
fn accept_account(result: GatewayResult) -> BitsyResult<Account> {
    let data = match result {
        GatewayResult::Data(data) => data,
        GatewayResult::Error(error) => {
            warn!(%error, "Could not verify login on backend");
            return Err(BitsyError::VerificationFailed(error));
        }
    };

    if data.get("success").and_then(Value::as_bool) == Some(false) {
        let reason = data
            .get("message")
            .or_else(|| data.get("error"))
            .and_then(Value::as_str)
            .unwrap_or("backend rejected the login")
            .to_string();
        warn!(%reason, "Authentication verification failed");
        return Err(BitsyError::VerificationFailed(reason));
    }

    Account::from_value(data).map_err(|e| {
        warn!(error = %e, "Verification response is not an account");
        BitsyError::VerificationFailed(e.to_string())
    })
}
