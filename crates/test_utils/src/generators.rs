//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_ledger::Distribution;
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::{ExpenseSpec, TestLedgerBuilder};

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::ALL.to_vec())
}

/// Strategy for non-negative amounts in cents, up to 10,000.00
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000i64
}

/// Strategy for non-negative two-decimal amounts
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    cents_strategy().prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid USD Money values
pub fn usd_money_strategy() -> impl Strategy<Value = Money> {
    cents_strategy().prop_map(|cents| Money::from_minor(cents, Currency::USD))
}

/// Strategy for a single participant name
pub fn participant_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}"
}

/// Strategy for 1..=`max` distinct names in a stable order
pub fn roster_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(participant_name_strategy(), 1..=max.max(1))
        .prop_map(|names| names.into_iter().collect())
}

/// Strategy for an expense over `roster`, equal or unequal
///
/// Unequal expenses carry one amount per participant; their sum is not tied
/// to the expense amount.
pub fn expense_strategy(roster: Vec<String>) -> impl Strategy<Value = ExpenseSpec> {
    let n = roster.len();
    (
        0..n,
        amount_strategy(),
        any::<bool>(),
        prop::collection::vec(amount_strategy(), n),
    )
        .prop_map(move |(payer, amount, equal, shares)| ExpenseSpec {
            reason: format!("Expense paid by {}", roster[payer]),
            payer: roster[payer].clone(),
            amount,
            distribution: if equal {
                Distribution::Equal
            } else {
                Distribution::Unequal(shares)
            },
        })
}

/// Strategy for a valid ledger: a roster and up to `max_expenses` expenses
pub fn ledger_builder_strategy(max_expenses: usize) -> impl Strategy<Value = TestLedgerBuilder> {
    roster_strategy(6).prop_flat_map(move |roster| {
        prop::collection::vec(expense_strategy(roster.clone()), 0..=max_expenses).prop_map(
            move |expenses| {
                expenses.into_iter().fold(
                    TestLedgerBuilder::new().with_participants(roster.clone()),
                    TestLedgerBuilder::with_expense,
                )
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn test_roster_names_are_unique(names in roster_strategy(8)) {
            let mut sorted = names.clone();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), names.len());
        }

        #[test]
        fn test_generated_ledgers_are_valid(builder in ledger_builder_strategy(8)) {
            prop_assert!(builder.try_build().is_ok());
        }

        #[test]
        fn test_usd_money_is_non_negative(money in usd_money_strategy()) {
            prop_assert!(!money.is_negative());
        }

        #[test]
        fn test_currency_strategy_in_range(currency in currency_strategy()) {
            prop_assert!(Currency::ALL.contains(&currency));
        }
    }
}
