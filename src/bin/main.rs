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

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use equitrust_ledger::{AccountNumber, Ledger, LedgerError, NewAccount, Rupiah};
use std::path::PathBuf;
use std::process;

/// EquiTrust Ledger - retail banking over a durable account snapshot
///
/// Loads the snapshot, runs one operation, and persists the result.
/// Example: equitrust-ledger deposit 630-123-456 50000
#[derive(Parser, Debug)]
#[command(name = "equitrust-ledger")]
#[command(about = "A banking ledger that operates on a durable account snapshot", long_about = None)]
struct Args {
    /// Path to the account snapshot file
    #[arg(long, value_name = "FILE", default_value = "user_accounts.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a new account
    Open {
        /// Full name of the account holder
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: NaiveDate,
        /// Residential address
        #[arg(long)]
        address: String,
        /// National identity number (NIK)
        #[arg(long)]
        nik: String,
        /// Account PIN
        #[arg(long)]
        password: String,
    },
    /// Deposit money into an account
    Deposit {
        /// Account number
        account: String,
        /// Amount in Rupiah
        amount: Rupiah,
    },
    /// Transfer money between two accounts
    Transfer {
        /// Sender account number
        from: String,
        /// Receiver account number
        to: String,
        /// Amount in Rupiah
        amount: Rupiah,
    },
    /// Show the current balance of an account
    Balance {
        /// Account number
        account: String,
    },
    /// Show the transaction history of an account
    Statement {
        /// Account number
        account: String,
        /// Account PIN
        #[arg(long)]
        password: String,
    },
}

fn main() {
    let args = Args::parse();

    // Hydrate the store from the snapshot before the first operation.
    let ledger = match Ledger::open(&args.data) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error loading '{}': {}", args.data.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&ledger, args.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(ledger: &Ledger, command: Command) -> Result<(), LedgerError> {
    match command {
        Command::Open {
            name,
            dob,
            address,
            nik,
            password,
        } => {
            let number = ledger.open_account(NewAccount {
                full_name: name,
                date_of_birth: dob,
                address,
                national_id: nik,
                credential: password,
            })?;
            println!("Rekening berhasil dibuat! Nomor rekening Anda: {number}");
        }
        Command::Deposit { account, amount } => {
            let number = AccountNumber::from(account);
            let balance = ledger.deposit(&number, amount)?;
            println!("Berhasil menyetor Rp{amount}. Saldo baru: Rp{balance}");
        }
        Command::Transfer { from, to, amount } => {
            let from = AccountNumber::from(from);
            let to = AccountNumber::from(to);
            ledger.transfer(&from, &to, amount)?;
            println!("Berhasil mentransfer Rp{amount} ke {to}.");
        }
        Command::Balance { account } => {
            let balance = ledger.balance(&AccountNumber::from(account))?;
            println!("Saldo Anda: Rp{balance}");
        }
        Command::Statement { account, password } => {
            let number = AccountNumber::from(account);
            // The history is gated behind the account credential.
            ledger.authenticate(&number, &password)?;
            let history = ledger.statement(&number)?;
            if history.is_empty() {
                println!("Belum ada riwayat transaksi.");
            } else {
                for entry in history {
                    println!("{entry}");
                }
            }
        }
    }
    Ok(())
}
