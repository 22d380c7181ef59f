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

//! # EquiTrust Ledger
//!
//! This library provides a retail-banking ledger engine: it opens accounts,
//! records deposits, executes atomic transfers between accounts, and exposes
//! a per-account transaction history ("mutasi") backed by a durable snapshot.
//!
//! ## Core Components
//!
//! - [`Ledger`]: Central engine enacting the business operations
//! - [`AccountStore`]: Exclusive in-memory owner of all account state
//! - [`AccountNumberGenerator`]: Unique `630-NNN-NNN` identifiers
//! - [`SnapshotFile`]: Durable CSV snapshot, rewritten atomically
//! - [`LedgerError`]: Typed failures for every operation
//!
//! ## Example
//!
//! ```
//! use equitrust_ledger::{Ledger, NewAccount, SnapshotFile};
//! use chrono::NaiveDate;
//! use std::collections::HashMap;
//!
//! let snapshot = SnapshotFile::new(std::env::temp_dir().join("equitrust-doc.csv"));
//! let ledger = Ledger::new(HashMap::new(), snapshot);
//!
//! let number = ledger
//!     .open_account(NewAccount {
//!         full_name: "Siti Rahma".to_string(),
//!         date_of_birth: NaiveDate::from_ymd_opt(1994, 3, 21).unwrap(),
//!         address: "Jl. Melati 5, Bandung".to_string(),
//!         national_id: "3273014503940002".to_string(),
//!         credential: "rahasia123".to_string(),
//!     })
//!     .unwrap();
//!
//! ledger.deposit(&number, 50_000).unwrap();
//! assert_eq!(ledger.balance(&number).unwrap(), 50_000);
//! ```
//!
//! ## Thread Safety
//!
//! All mutations go through one mutual-exclusion boundary around the store;
//! a transfer holds it across both legs, so callers never observe a
//! half-applied transfer. Balance and statement queries run under a shared
//! read guard.

pub mod account;
mod base;
pub mod error;
mod generator;
mod ledger;
mod persist;
mod store;

pub use account::{Account, NewAccount};
pub use base::{AccountNumber, Rupiah};
pub use error::LedgerError;
pub use generator::AccountNumberGenerator;
pub use ledger::Ledger;
pub use persist::SnapshotFile;
pub use store::AccountStore;
