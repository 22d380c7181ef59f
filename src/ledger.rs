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

//! Ledger engine.
//!
//! The [`Ledger`] is the only component allowed to orchestrate multi-step,
//! multi-account state changes. It enacts the business operations against the
//! account store, enforces the balance and history rules, and persists the
//! full store after every successful mutation.
//!
//! # Operations
//!
//! - **Open account**: assigns a fresh unique number, starts at balance 0.
//! - **Deposit**: credits one account and records a `Setoran` entry.
//! - **Transfer**: atomically debits the sender and credits the receiver,
//!   recording one entry on each side.
//! - **Balance / statement queries**: read-only.
//! - **Authenticate**: plain equality check against the stored credential.
//!
//! # Thread Safety
//!
//! A single [`RwLock`] around the store is the mutual-exclusion boundary for
//! all mutations. A transfer holds the write guard across its entire
//! check-debit-credit-append-append sequence, so no caller can observe one
//! leg applied without the other. Queries take the read guard and therefore
//! observe every effect of operations that returned before them.

use crate::account::{Account, NewAccount};
use crate::base::{AccountNumber, Rupiah};
use crate::error::LedgerError;
use crate::generator::AccountNumberGenerator;
use crate::persist::SnapshotFile;
use crate::store::AccountStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;

/// Account ledger engine.
///
/// # Invariants
///
/// - No balance is ever negative; sufficiency is checked before any mutation.
/// - Histories are append-only: every balance-changing operation appends
///   exactly one entry per account it touches.
/// - The durable snapshot is rewritten inside the same critical section as
///   the mutation, so the file never runs ahead of the in-memory state.
pub struct Ledger {
    /// All account state, behind the single mutual-exclusion boundary.
    store: RwLock<AccountStore>,
    /// Durable snapshot rewritten after each successful mutation.
    snapshot: SnapshotFile,
}

impl Ledger {
    /// Loads the snapshot at `path` (empty when no file exists yet) and
    /// builds a ledger seeded with it.
    ///
    /// # Errors
    ///
    /// Propagates [`LedgerError::PersistUnavailable`] and
    /// [`LedgerError::PersistFailed`] from the load.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let snapshot = SnapshotFile::new(path);
        let accounts = snapshot.load()?;
        Ok(Self::new(accounts, snapshot))
    }

    /// Builds a ledger from already-loaded accounts. Callers that hydrate the
    /// store themselves must have called [`SnapshotFile::load`] exactly once
    /// before the first operation.
    pub fn new(accounts: HashMap<AccountNumber, Account>, snapshot: SnapshotFile) -> Self {
        Self {
            store: RwLock::new(AccountStore::from_accounts(accounts)),
            snapshot,
        }
    }

    /// Opens a new account and returns its freshly assigned number.
    ///
    /// The account starts with balance 0 and an empty history.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidInput`] - any required profile field is empty.
    /// - [`LedgerError::DuplicateAccount`] - defensive, the generator retries
    ///   until unique.
    /// - [`LedgerError::PersistUnavailable`] / [`LedgerError::PersistFailed`] -
    ///   the account exists in memory but is not yet durable.
    pub fn open_account(&self, profile: NewAccount) -> Result<AccountNumber, LedgerError> {
        if profile.full_name.is_empty()
            || profile.address.is_empty()
            || profile.national_id.is_empty()
            || profile.credential.is_empty()
        {
            return Err(LedgerError::InvalidInput);
        }

        let mut store = self.store.write();
        let number = AccountNumberGenerator::generate(&store);
        store.insert(Account::open(number.clone(), profile))?;
        self.snapshot.save(store.accounts())?;
        Ok(number)
    }

    /// Credits `amount` to the account and returns the new balance.
    ///
    /// Appends one `Setoran` history entry.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] - `amount` is negative.
    /// - [`LedgerError::AccountNotFound`] - no such account.
    /// - [`LedgerError::PersistUnavailable`] / [`LedgerError::PersistFailed`] -
    ///   the credit is applied in memory but not yet durable.
    pub fn deposit(&self, number: &AccountNumber, amount: Rupiah) -> Result<Rupiah, LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }

        let mut store = self.store.write();
        if !store.exists(number) {
            return Err(LedgerError::AccountNotFound);
        }

        store.mutate_balance(number, amount)?;
        store.append_history(number, format!("Setoran: +Rp{amount}"))?;
        let new_balance = store
            .get(number)
            .ok_or(LedgerError::AccountNotFound)?
            .balance();
        self.snapshot.save(store.accounts())?;
        Ok(new_balance)
    }

    /// Moves `amount` from `from` to `to` as a single atomic unit.
    ///
    /// Sufficiency is checked before any mutation; on failure neither
    /// account changes. On success the sender gets a `Transfer keluar` entry
    /// naming the receiver, the receiver a `Transfer masuk` entry naming the
    /// sender, and the store is persisted once.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InvalidAmount`] - `amount` is negative.
    /// - [`LedgerError::InvalidInput`] - sender and receiver are the same
    ///   account.
    /// - [`LedgerError::AccountNotFound`] - either side does not exist.
    /// - [`LedgerError::InsufficientFunds`] - sender balance below `amount`.
    /// - [`LedgerError::PersistUnavailable`] / [`LedgerError::PersistFailed`] -
    ///   the transfer is applied in memory but not yet durable.
    pub fn transfer(
        &self,
        from: &AccountNumber,
        to: &AccountNumber,
        amount: Rupiah,
    ) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }
        if from == to {
            return Err(LedgerError::InvalidInput);
        }

        let mut store = self.store.write();
        if !store.exists(from) || !store.exists(to) {
            return Err(LedgerError::AccountNotFound);
        }

        let sender_balance = store
            .get(from)
            .ok_or(LedgerError::AccountNotFound)?
            .balance();
        if sender_balance < amount {
            return Err(LedgerError::InsufficientFunds);
        }

        store.mutate_balance(from, -amount)?;
        store.mutate_balance(to, amount)?;
        store.append_history(from, format!("Transfer keluar: -Rp{amount} ke {to}"))?;
        store.append_history(to, format!("Transfer masuk: +Rp{amount} dari {from}"))?;
        self.snapshot.save(store.accounts())
    }

    /// Returns the current balance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountNotFound`] - no such account.
    pub fn balance(&self, number: &AccountNumber) -> Result<Rupiah, LedgerError> {
        self.store
            .read()
            .get(number)
            .map(Account::balance)
            .ok_or(LedgerError::AccountNotFound)
    }

    /// Returns the account's history, oldest entry first.
    ///
    /// An account with no transactions yet yields an empty sequence, not an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AccountNotFound`] - no such account.
    pub fn statement(&self, number: &AccountNumber) -> Result<Vec<String>, LedgerError> {
        self.store
            .read()
            .get(number)
            .map(|account| account.history().to_vec())
            .ok_or(LedgerError::AccountNotFound)
    }

    /// Checks the credential and returns a copy of the account on success.
    ///
    /// The comparison is plain equality against the stored value. An unknown
    /// account number and a wrong credential are indistinguishable to the
    /// caller.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::AuthFailed`] - unknown number or wrong credential.
    pub fn authenticate(
        &self,
        number: &AccountNumber,
        credential: &str,
    ) -> Result<Account, LedgerError> {
        let store = self.store.read();
        let account = store.get(number).ok_or(LedgerError::AuthFailed)?;
        if !account.verify_credential(credential) {
            return Err(LedgerError::AuthFailed);
        }
        Ok(account.clone())
    }

    /// Number of accounts currently in the store.
    pub fn account_count(&self) -> usize {
        self.store.read().len()
    }
}
