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

//! Account number generation.

use crate::base::AccountNumber;
use crate::store::AccountStore;
use rand::Rng;

/// Institution prefix, the constant first group of every account number.
const PREFIX: &str = "630";

/// Produces unique account numbers of the form `630-NNN-NNN`.
pub struct AccountNumberGenerator;

impl AccountNumberGenerator {
    /// Returns a number not currently present in the store.
    ///
    /// Candidates are drawn at random and re-drawn on collision; the contract
    /// is retry-until-unique, never return a number already in use.
    pub fn generate(store: &AccountStore) -> AccountNumber {
        loop {
            let candidate = Self::candidate();
            if !store.exists(&candidate) {
                return candidate;
            }
        }
    }

    /// One random candidate: two independently drawn zero-padded 3-digit
    /// groups behind the institution prefix.
    fn candidate() -> AccountNumber {
        let mut rng = rand::thread_rng();
        let middle: u16 = rng.gen_range(0..1000);
        let end: u16 = rng.gen_range(0..1000);
        AccountNumber(format!("{PREFIX}-{middle:03}-{end:03}"))
    }
}
