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

//! Durable snapshot of the account store.
//!
//! The snapshot is a CSV file with one row per account; the `history` column
//! is a single delimited cell (see the codec in [`crate::account`]). Saves
//! go through a temp file in the same directory followed by a rename, so a
//! failed write never corrupts the previous snapshot.

use crate::account::Account;
use crate::base::AccountNumber;
use crate::error::LedgerError;
use csv::{ReaderBuilder, Writer};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Handle to the durable snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every account from the snapshot.
    ///
    /// Returns an empty map when no snapshot file exists yet; the first save
    /// creates it. Malformed `history` cells are normalized to empty
    /// sequences by the row codec.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::PersistUnavailable`] when the file cannot be read due
    ///   to permissions.
    /// - [`LedgerError::PersistFailed`] for any other I/O or parse failure.
    pub fn load(&self) -> Result<HashMap<AccountNumber, Account>, LedgerError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let mut reader = ReaderBuilder::new()
            .from_path(&self.path)
            .map_err(csv_error)?;

        let mut accounts = HashMap::new();
        for row in reader.deserialize::<Account>() {
            let account = row.map_err(csv_error)?;
            accounts.insert(account.account_number().clone(), account);
        }
        Ok(accounts)
    }

    /// Serializes the full set of accounts, replacing the durable file.
    ///
    /// The rows are written to `<file>.tmp` first and renamed over the
    /// snapshot only after a complete flush, so the previous snapshot
    /// survives any mid-write failure.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::PersistUnavailable`] when the file is locked or not
    ///   writable.
    /// - [`LedgerError::PersistFailed`] for any other I/O or serialization
    ///   failure.
    pub fn save<'a>(
        &self,
        accounts: impl Iterator<Item = &'a Account>,
    ) -> Result<(), LedgerError> {
        let temp = self.path.with_extension("tmp");

        if let Err(e) = write_rows(&temp, accounts) {
            let _ = fs::remove_file(&temp);
            return Err(e);
        }

        fs::rename(&temp, &self.path).map_err(io_error)
    }
}

fn write_rows<'a>(
    path: &Path,
    accounts: impl Iterator<Item = &'a Account>,
) -> Result<(), LedgerError> {
    let mut writer = Writer::from_path(path).map_err(csv_error)?;
    for account in accounts {
        writer.serialize(account).map_err(csv_error)?;
    }
    writer.flush().map_err(io_error)
}

fn io_error(e: io::Error) -> LedgerError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        LedgerError::PersistUnavailable
    } else {
        LedgerError::PersistFailed(e.to_string())
    }
}

fn csv_error(e: csv::Error) -> LedgerError {
    if let csv::ErrorKind::Io(io_err) = e.kind() {
        if io_err.kind() == io::ErrorKind::PermissionDenied {
            return LedgerError::PersistUnavailable;
        }
    }
    LedgerError::PersistFailed(e.to_string())
}
