//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_ledger::{Balances, BillSummary};
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    assert_decimal_approx_eq(actual.amount(), expected.amount(), tolerance);
}

/// Asserts that two decimals differ by at most `tolerance`
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts one participant's exact net balance
pub fn assert_balance(balances: &Balances, name: &str, expected: Decimal) {
    let actual = balances
        .get(name)
        .unwrap_or_else(|| panic!("No balance for {}", name));
    assert_eq!(
        actual.amount(),
        expected,
        "Balance mismatch for {}: actual={}, expected={}",
        name,
        actual.amount(),
        expected
    );
}

/// Asserts that balances sum to zero up to `tolerance` of rounding drift
pub fn assert_balances_sum_within(balances: &Balances, tolerance: Decimal) {
    let total = balances.total().expect("balances share one currency");
    assert!(
        total.amount().abs() <= tolerance,
        "Balances sum to {} which exceeds tolerance {}",
        total.amount(),
        tolerance
    );
}

/// Asserts a bill's itemized lines, in order
pub fn assert_bill_lines(bill: &BillSummary, expected: &[&str]) {
    let actual: Vec<&str> = bill.detail_lines.iter().map(String::as_str).collect();
    assert_eq!(actual, expected, "Detail lines mismatch for {}", bill.participant);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{MoneyFixtures, ScenarioFixtures};
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_approx_eq_passes() {
        let a = MoneyFixtures::usd(dec!(100.00));
        let b = MoneyFixtures::usd(dec!(100.01));
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Amounts differ")]
    fn test_money_approx_eq_fails() {
        let a = MoneyFixtures::usd(dec!(100.00));
        let b = MoneyFixtures::usd(dec!(101.00));
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_approx_eq_currency_mismatch() {
        let a = MoneyFixtures::usd(dec!(1));
        let b = MoneyFixtures::eur(dec!(1));
        assert_money_approx_eq(&a, &b, dec!(0.01));
    }

    #[test]
    fn test_drift_within_one_cent() {
        let balances = ScenarioFixtures::drifting().build().compute_balances().unwrap();
        assert_balances_sum_within(&balances, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Balance mismatch")]
    fn test_assert_balance_fails() {
        let balances = ScenarioFixtures::dinner().build().compute_balances().unwrap();
        assert_balance(&balances, "Bob", dec!(10));
    }
}
