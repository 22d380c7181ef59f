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

//! Error types for ledger operations.

use thiserror::Error;

/// Ledger operation errors.
///
/// Every failure is returned to the caller as a typed value; none is fatal to
/// the process. A persistence failure leaves the in-memory state valid and
/// usable, it only means the latest change is not yet durable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A required field is missing or malformed
    #[error("all fields are required")]
    InvalidInput,

    /// Monetary amount is negative
    #[error("invalid amount (must not be negative)")]
    InvalidAmount,

    /// No account exists under the given number
    #[error("account not found")]
    AccountNotFound,

    /// Account number already in use (should be unreachable given the
    /// generator's uniqueness contract)
    #[error("account number already in use")]
    DuplicateAccount,

    /// Transfer or debit would exceed the sender's balance
    #[error("insufficient balance")]
    InsufficientFunds,

    /// Wrong account number or credential
    #[error("wrong account number or PIN")]
    AuthFailed,

    /// Snapshot file is locked or not writable
    #[error("snapshot file is locked or not writable")]
    PersistUnavailable,

    /// Any other I/O or serialization failure while persisting
    #[error("failed to persist snapshot: {0}")]
    PersistFailed(String),
}
