// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Account entity.
//!
//! An [`Account`] carries the holder's profile, the current balance, and the
//! append-only transaction history ("mutasi"). Balance and history are only
//! ever mutated through the ledger; everything else is fixed at creation.

use crate::base::{AccountNumber, Rupiah};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile fields supplied when opening a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub national_id: String,
    pub credential: String,
}

/// Bank account.
///
/// Serializes as one flat snapshot row: the account number leads, the history
/// collapses into a single delimited cell (see [`history_cell`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    account_number: AccountNumber,
    full_name: String,
    date_of_birth: NaiveDate,
    address: String,
    national_id: String,
    credential: String,
    balance: Rupiah,
    #[serde(with = "history_cell", default)]
    history: Vec<String>,
}

impl Account {
    /// Creates a freshly opened account: zero balance, empty history.
    pub fn open(account_number: AccountNumber, profile: NewAccount) -> Self {
        Self {
            account_number,
            full_name: profile.full_name,
            date_of_birth: profile.date_of_birth,
            address: profile.address,
            national_id: profile.national_id,
            credential: profile.credential,
            balance: 0,
            history: Vec::new(),
        }
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn national_id(&self) -> &str {
        &self.national_id
    }

    pub fn balance(&self) -> Rupiah {
        self.balance
    }

    /// Transaction history, oldest entry first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Plain equality check against the stored credential.
    pub fn verify_credential(&self, credential: &str) -> bool {
        self.credential == credential
    }

    /// Applies a signed balance delta. Sufficiency is checked by the ledger
    /// before any mutation, so the result must never be negative.
    pub(crate) fn apply(&mut self, delta: Rupiah) {
        self.balance += delta;
        debug_assert!(
            self.balance >= 0,
            "Invariant violated: balance went negative: {}",
            self.balance
        );
    }

    /// Appends one history entry. Entries are never removed or reordered.
    pub(crate) fn push_history(&mut self, entry: String) {
        self.history.push(entry);
    }
}

/// Serde codec for the `history` snapshot cell.
///
/// The ordered entries are stored as a single `|`-joined string so the row
/// stays flat and tabular. An empty history round-trips through an empty
/// cell, and any malformed stored value is coerced to an empty sequence on
/// load rather than surfacing as a type error.
mod history_cell {
    use serde::{Deserialize, Deserializer, Serializer};

    const SEPARATOR: &str = "|";

    pub fn serialize<S>(history: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&history.join(SEPARATOR))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cell = Option::<String>::deserialize(deserializer)
            .unwrap_or(None)
            .unwrap_or_default();
        Ok(cell
            .split(SEPARATOR)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect())
    }
}
