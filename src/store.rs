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

//! In-memory account store.
//!
//! The store is the exclusive owner of all account state. It exposes lookup,
//! insertion, and field-level mutation and carries no business rules of its
//! own; in particular it does not enforce balance sufficiency, because that
//! check must happen before any mutation of a multi-account operation.

use crate::account::Account;
use crate::base::{AccountNumber, Rupiah};
use crate::error::LedgerError;
use std::collections::HashMap;

/// Collection of all accounts, keyed by account number.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<AccountNumber, Account>,
}

impl AccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    /// Creates a store seeded from a loaded snapshot.
    pub fn from_accounts(accounts: HashMap<AccountNumber, Account>) -> Self {
        Self { accounts }
    }

    pub fn get(&self, number: &AccountNumber) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn exists(&self, number: &AccountNumber) -> bool {
        self.accounts.contains_key(number)
    }

    /// Inserts a newly opened account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateAccount`] if the number is already in
    /// use. The generator's uniqueness contract makes this unreachable in
    /// practice, but the store checks anyway.
    pub fn insert(&mut self, account: Account) -> Result<(), LedgerError> {
        let number = account.account_number().clone();
        if self.accounts.contains_key(&number) {
            return Err(LedgerError::DuplicateAccount);
        }
        self.accounts.insert(number, account);
        Ok(())
    }

    /// Applies a signed balance delta to one account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if no account exists under
    /// the given number.
    pub fn mutate_balance(
        &mut self,
        number: &AccountNumber,
        delta: Rupiah,
    ) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or(LedgerError::AccountNotFound)?;
        account.apply(delta);
        Ok(())
    }

    /// Appends one history entry to one account.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AccountNotFound`] if no account exists under
    /// the given number.
    pub fn append_history(
        &mut self,
        number: &AccountNumber,
        entry: String,
    ) -> Result<(), LedgerError> {
        let account = self
            .accounts
            .get_mut(number)
            .ok_or(LedgerError::AccountNotFound)?;
        account.push_history(entry);
        Ok(())
    }

    /// Iterates over all accounts in unspecified order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
