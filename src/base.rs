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

//! Core identifier and currency types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount in whole Rupiah.
///
/// Balances are whole-unit integers. The type is signed so debits can be
/// expressed as negative deltas, but an account balance is never negative.
pub type Rupiah = i64;

/// Unique identifier for a bank account.
///
/// Format is `630-NNN-NNN`: a constant institution prefix followed by two
/// zero-padded 3-digit groups. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AccountNumber(pub String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(s: &str) -> Self {
        AccountNumber(s.to_string())
    }
}

impl From<String> for AccountNumber {
    fn from(s: String) -> Self {
        AccountNumber(s)
    }
}
