//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data: money values, rosters and a few ledger
//! scenarios with well-known balances.

use core_kernel::{Currency, Money};
use domain_ledger::Ledger;
use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::TestLedgerBuilder;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur(amount: Decimal) -> Money {
        Money::new(amount, Currency::EUR)
    }

    /// Creates a JPY amount (zero decimal places)
    pub fn jpy(amount: Decimal) -> Money {
        Money::new(amount, Currency::JPY)
    }
}

/// Fixture for participant names
pub struct RosterFixtures;

impl RosterFixtures {
    pub fn pair() -> [&'static str; 2] {
        ["Alice", "Bob"]
    }

    pub fn trio() -> [&'static str; 3] {
        ["Alice", "Bob", "Carol"]
    }

    /// `count` distinct random first names
    pub fn random_names(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("{}{}", FirstName().fake::<String>(), i))
            .collect()
    }
}

/// Ledgers with hand-checked balances
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Alice pays 30.00 for dinner, split evenly over Alice, Bob and Carol
    ///
    /// Balances: Alice +20.00, Bob -10.00, Carol -10.00
    pub fn dinner() -> TestLedgerBuilder {
        TestLedgerBuilder::new()
            .with_participants(RosterFixtures::trio())
            .with_equal_expense("Dinner", "Alice", dec!(30))
    }

    /// Bob pays 10.00 for a taxi, Alice's share 3.00 and Bob's 7.00
    ///
    /// Balances: Alice -3.00, Bob +3.00
    pub fn taxi() -> TestLedgerBuilder {
        TestLedgerBuilder::new()
            .with_participants(RosterFixtures::pair())
            .with_unequal_expense("Taxi", "Bob", dec!(10), vec![dec!(3), dec!(7)])
    }

    /// Dinner as above, then Bob pays 12.00 for a taxi shared by Bob and Carol
    ///
    /// Balances: Alice +20.00, Bob -4.00, Carol -16.00
    pub fn trip() -> TestLedgerBuilder {
        Self::dinner().with_unequal_expense("Taxi", "Bob", dec!(12), vec![dec!(0), dec!(6), dec!(6)])
    }

    /// 10.00 split evenly three ways, leaving one cent of rounding drift
    pub fn drifting() -> TestLedgerBuilder {
        TestLedgerBuilder::new()
            .with_participants(RosterFixtures::trio())
            .with_equal_expense("Pizza", "Carol", dec!(10))
    }

    pub fn trip_ledger() -> Ledger {
        Self::trip().build()
    }
}
