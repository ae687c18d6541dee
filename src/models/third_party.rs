// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! External relying parties.

use serde::{Deserialize, Serialize};

use super::{Account, Record};

/// An external party requesting access to a user's documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdParty {
    pub uuid: String,
    pub name: String,
}

impl ThirdParty {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
        }
    }
}

impl Record for ThirdParty {
    const NAME: &'static str = "ThirdParty";
}

/// Returned by third-party registration: the party plus the account the
/// backend created for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirdPartyAccount {
    pub account: Account,
    pub third_party: ThirdParty,
}

impl ThirdPartyAccount {
    pub fn new(account: Account, third_party: ThirdParty) -> Self {
        Self {
            account,
            third_party,
        }
    }
}

impl Record for ThirdPartyAccount {
    const NAME: &'static str = "ThirdPartyAccount";
}
