//! Core Kernel - Foundational types shared by the expense ledger
//!
//! This crate provides the building blocks used by the domain and API crates:
//! - Money types with precise decimal arithmetic
//! - Typed identifiers for expenses and sessions

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ExpenseId, SessionId};
