//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! split ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built money values, rosters and ledger scenarios
//! - `builders`: Builder patterns for ledgers and sessions
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
