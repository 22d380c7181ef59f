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

//! Ledger public API integration tests.

use chrono::NaiveDate;
use equitrust_ledger::{AccountNumber, Ledger, LedgerError, NewAccount};
use tempfile::TempDir;

fn new_ledger(dir: &TempDir) -> Ledger {
    Ledger::open(dir.path().join("accounts.csv")).unwrap()
}

fn profile(name: &str) -> NewAccount {
    NewAccount {
        full_name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        address: "Jl. Sudirman 1, Jakarta".to_string(),
        national_id: "3171021506900001".to_string(),
        credential: "pin1234".to_string(),
    }
}

// === Open Account ===

#[test]
fn open_account_assigns_well_formed_number() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let groups: Vec<&str> = number.as_str().split('-').collect();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], "630");
    assert!(groups[1].len() == 3 && groups[1].chars().all(|c| c.is_ascii_digit()));
    assert!(groups[2].len() == 3 && groups[2].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn open_account_starts_at_zero_with_empty_history() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    assert_eq!(ledger.balance(&number).unwrap(), 0);
    assert!(ledger.statement(&number).unwrap().is_empty());
}

#[test]
fn open_account_numbers_are_distinct() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();
    assert_ne!(a, b);
    assert_eq!(ledger.account_count(), 2);
}

#[test]
fn open_account_rejects_empty_fields() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let mut missing_name = profile("Budi Santoso");
    missing_name.full_name.clear();
    assert_eq!(
        ledger.open_account(missing_name),
        Err(LedgerError::InvalidInput)
    );

    let mut missing_address = profile("Budi Santoso");
    missing_address.address.clear();
    assert_eq!(
        ledger.open_account(missing_address),
        Err(LedgerError::InvalidInput)
    );

    let mut missing_nik = profile("Budi Santoso");
    missing_nik.national_id.clear();
    assert_eq!(
        ledger.open_account(missing_nik),
        Err(LedgerError::InvalidInput)
    );

    let mut missing_credential = profile("Budi Santoso");
    missing_credential.credential.clear();
    assert_eq!(
        ledger.open_account(missing_credential),
        Err(LedgerError::InvalidInput)
    );

    assert_eq!(ledger.account_count(), 0);
}

// === Deposit ===

#[test]
fn deposit_credits_balance_and_records_entry() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let new_balance = ledger.deposit(&number, 50_000).unwrap();

    assert_eq!(new_balance, 50_000);
    assert_eq!(ledger.balance(&number).unwrap(), 50_000);
    assert_eq!(ledger.statement(&number).unwrap(), ["Setoran: +Rp50000"]);
}

#[test]
fn deposits_accumulate_in_order() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    ledger.deposit(&number, 100_000).unwrap();
    ledger.deposit(&number, 25_000).unwrap();

    assert_eq!(ledger.balance(&number).unwrap(), 125_000);
    assert_eq!(
        ledger.statement(&number).unwrap(),
        ["Setoran: +Rp100000", "Setoran: +Rp25000"]
    );
}

#[test]
fn deposit_of_zero_is_accepted_and_recorded() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let new_balance = ledger.deposit(&number, 0).unwrap();

    assert_eq!(new_balance, 0);
    assert_eq!(ledger.statement(&number).unwrap(), ["Setoran: +Rp0"]);
}

#[test]
fn deposit_negative_returns_invalid_amount() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let result = ledger.deposit(&number, -1);
    assert_eq!(result, Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.balance(&number).unwrap(), 0);
    assert!(ledger.statement(&number).unwrap().is_empty());
}

#[test]
fn deposit_unknown_account_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let result = ledger.deposit(&AccountNumber::from("630-999-999"), 10_000);
    assert_eq!(result, Err(LedgerError::AccountNotFound));
}

// === Transfer ===

#[test]
fn transfer_moves_funds_and_records_both_sides() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();

    ledger.deposit(&a, 50_000).unwrap();
    ledger.transfer(&a, &b, 20_000).unwrap();

    assert_eq!(ledger.balance(&a).unwrap(), 30_000);
    assert_eq!(ledger.balance(&b).unwrap(), 20_000);
    assert_eq!(
        ledger.statement(&a).unwrap(),
        [
            "Setoran: +Rp50000".to_string(),
            format!("Transfer keluar: -Rp20000 ke {b}"),
        ]
    );
    assert_eq!(
        ledger.statement(&b).unwrap(),
        [format!("Transfer masuk: +Rp20000 dari {a}")]
    );
}

#[test]
fn transfer_insufficient_funds_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();

    ledger.deposit(&a, 50_000).unwrap();
    ledger.transfer(&a, &b, 20_000).unwrap();

    let history_a = ledger.statement(&a).unwrap();
    let history_b = ledger.statement(&b).unwrap();

    let result = ledger.transfer(&a, &b, 100_000);
    assert_eq!(result, Err(LedgerError::InsufficientFunds));

    // Both balances and histories are byte-for-byte unchanged.
    assert_eq!(ledger.balance(&a).unwrap(), 30_000);
    assert_eq!(ledger.balance(&b).unwrap(), 20_000);
    assert_eq!(ledger.statement(&a).unwrap(), history_a);
    assert_eq!(ledger.statement(&b).unwrap(), history_b);
}

#[test]
fn transfer_of_exact_balance_succeeds() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();

    ledger.deposit(&a, 75_000).unwrap();
    ledger.transfer(&a, &b, 75_000).unwrap();

    assert_eq!(ledger.balance(&a).unwrap(), 0);
    assert_eq!(ledger.balance(&b).unwrap(), 75_000);
}

#[test]
fn transfer_unknown_receiver_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    ledger.deposit(&a, 50_000).unwrap();

    let result = ledger.transfer(&a, &AccountNumber::from("630-999-999"), 10_000);
    assert_eq!(result, Err(LedgerError::AccountNotFound));
    assert_eq!(ledger.balance(&a).unwrap(), 50_000);
}

#[test]
fn transfer_unknown_sender_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();

    let result = ledger.transfer(&AccountNumber::from("630-999-999"), &b, 10_000);
    assert_eq!(result, Err(LedgerError::AccountNotFound));
}

#[test]
fn transfer_negative_amount_returns_invalid_amount() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();
    ledger.deposit(&a, 50_000).unwrap();

    let result = ledger.transfer(&a, &b, -10);
    assert_eq!(result, Err(LedgerError::InvalidAmount));
    assert_eq!(ledger.balance(&a).unwrap(), 50_000);
    assert_eq!(ledger.balance(&b).unwrap(), 0);
}

#[test]
fn self_transfer_is_rejected() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    ledger.deposit(&a, 50_000).unwrap();

    let result = ledger.transfer(&a, &a, 10_000);
    assert_eq!(result, Err(LedgerError::InvalidInput));
    assert_eq!(ledger.balance(&a).unwrap(), 50_000);
    assert_eq!(ledger.statement(&a).unwrap().len(), 1);
}

#[test]
fn transfers_conserve_total_balance() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let a = ledger.open_account(profile("Budi Santoso")).unwrap();
    let b = ledger.open_account(profile("Siti Rahma")).unwrap();
    let c = ledger.open_account(profile("Agus Wijaya")).unwrap();

    ledger.deposit(&a, 100_000).unwrap();
    ledger.deposit(&b, 40_000).unwrap();

    ledger.transfer(&a, &b, 30_000).unwrap();
    ledger.transfer(&b, &c, 55_000).unwrap();
    ledger.transfer(&c, &a, 5_000).unwrap();

    let total = ledger.balance(&a).unwrap() + ledger.balance(&b).unwrap()
        + ledger.balance(&c).unwrap();
    assert_eq!(total, 140_000);
}

// === Queries ===

#[test]
fn balance_unknown_account_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let result = ledger.balance(&AccountNumber::from("630-000-000"));
    assert_eq!(result, Err(LedgerError::AccountNotFound));
}

#[test]
fn statement_unknown_account_returns_not_found() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let result = ledger.statement(&AccountNumber::from("630-000-000"));
    assert_eq!(result, Err(LedgerError::AccountNotFound));
}

#[test]
fn statement_without_transactions_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let history = ledger.statement(&number).unwrap();
    assert!(history.is_empty());
}

// === Authenticate ===

#[test]
fn authenticate_with_correct_credential_returns_account() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let account = ledger.authenticate(&number, "pin1234").unwrap();
    assert_eq!(account.account_number(), &number);
    assert_eq!(account.full_name(), "Budi Santoso");
}

#[test]
fn authenticate_with_wrong_credential_fails() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);
    let number = ledger.open_account(profile("Budi Santoso")).unwrap();

    let result = ledger.authenticate(&number, "pin12345");
    assert_eq!(result, Err(LedgerError::AuthFailed));
}

#[test]
fn authenticate_unknown_account_fails_the_same_way() {
    let dir = TempDir::new().unwrap();
    let ledger = new_ledger(&dir);

    let result = ledger.authenticate(&AccountNumber::from("630-999-999"), "pin1234");
    assert_eq!(result, Err(LedgerError::AuthFailed));
}

// === Durability ===

#[test]
fn state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.csv");

    let (a, b) = {
        let ledger = Ledger::open(&path).unwrap();
        let a = ledger.open_account(profile("Budi Santoso")).unwrap();
        let b = ledger.open_account(profile("Siti Rahma")).unwrap();
        ledger.deposit(&a, 50_000).unwrap();
        ledger.transfer(&a, &b, 20_000).unwrap();
        (a, b)
    };

    // Fresh engine instance over the same snapshot.
    let ledger = Ledger::open(&path).unwrap();
    assert_eq!(ledger.account_count(), 2);
    assert_eq!(ledger.balance(&a).unwrap(), 30_000);
    assert_eq!(ledger.balance(&b).unwrap(), 20_000);
    assert_eq!(
        ledger.statement(&a).unwrap(),
        [
            "Setoran: +Rp50000".to_string(),
            format!("Transfer keluar: -Rp20000 ke {b}"),
        ]
    );
    assert_eq!(
        ledger.statement(&b).unwrap(),
        [format!("Transfer masuk: +Rp20000 dari {a}")]
    );
    ledger.authenticate(&a, "pin1234").unwrap();
}
