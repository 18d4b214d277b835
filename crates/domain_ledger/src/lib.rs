//! Ledger Domain - Shared Expense Tracking
//!
//! This crate records who paid for what within a group, splits each expense
//! across the group and reports where everyone stands.
//!
//! # Components
//!
//! - **Ledger**: roster of participants and the append-only expense list;
//!   computes net balances by full recompute
//! - **Allocator**: splits an amount evenly or by explicit per-person amounts
//! - **BillBuilder**: per-participant summary (paid, owed, itemized lines)
//! - **Receipt**: paginated bill documents exported to scoped temp files
//! - **Session**: one group's working state with an explicit reset
//!
//! # Sign convention
//!
//! A positive balance means the group owes the participant; a negative
//! balance means the participant owes the group. Bills report
//! `owed = max(0, -balance)` and `receivable = max(0, balance)`.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{Ledger, Distribution};
//!
//! let mut ledger = Ledger::new(Currency::USD);
//! ledger.add_participant("Alice")?;
//! ledger.add_participant("Bob")?;
//! ledger.add_expense("Dinner", "Alice", Money::new(dec!(30), Currency::USD), Distribution::Equal)?;
//!
//! let balances = ledger.compute_balances()?;
//! ```

pub mod participant;
pub mod expense;
pub mod allocation;
pub mod balance;
pub mod ledger;
pub mod bill;
pub mod receipt;
pub mod session;
pub mod error;

pub use participant::{Participant, Roster};
pub use expense::{Distribution, DistributionKind, Expense};
pub use allocation::{Allocator, RoundingPolicy, parse_amount, parse_unequal};
pub use balance::{Balances, BalanceStatus, SummaryLine};
pub use ledger::Ledger;
pub use bill::{BillBuilder, BillSummary};
pub use receipt::{ExportedReceipt, ReceiptDocument, ReceiptExporter, ReceiptPage, ReceiptRenderer};
pub use session::Session;
pub use error::LedgerError;
