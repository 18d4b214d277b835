//! Expense allocation
//!
//! Splits an expense amount across the roster, either evenly or by explicit
//! per-person amounts. Shares are rounded to the currency's minor unit with
//! banker's rounding.
//!
//! # Rounding drift
//!
//! Rounding each equal share independently can leave the shares summing to
//! slightly more or less than the amount (at most half a minor unit per
//! participant). [`RoundingPolicy::PerShare`] keeps that drift.
//! [`RoundingPolicy::AbsorbRemainder`] rounds every share toward zero and
//! hands the leftover out one minor unit at a time, starting from the last
//! participant, so the split reconciles exactly and no share changes sign.

use indexmap::IndexMap;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use core_kernel::{Currency, Money};
use crate::error::LedgerError;
use crate::expense::Distribution;
use crate::participant::{Participant, Roster};

/// What to do with the rounding remainder of an equal split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Every share rounded on its own; drift is accepted
    #[default]
    PerShare,
    /// Leftover minor units go to the last participants, one each
    AbsorbRemainder,
}

/// Computes per-participant shares for a new expense
#[derive(Debug, Clone, Copy, Default)]
pub struct Allocator {
    policy: RoundingPolicy,
}

impl Allocator {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RoundingPolicy {
        self.policy
    }

    /// Splits `amount` across `roster` according to `distribution`
    ///
    /// # Errors
    ///
    /// - `EmptyRoster` if there is nobody to split between
    /// - `DistributionMismatch` if an unequal split does not carry exactly one
    ///   amount per participant
    /// - `InvalidAmount` if an unequal amount is negative
    pub fn allocate(
        &self,
        amount: Money,
        roster: &Roster,
        distribution: &Distribution,
    ) -> Result<IndexMap<Participant, Money>, LedgerError> {
        if roster.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }

        let shares = match distribution {
            Distribution::Equal => self.split_equal(amount, roster.len())?,
            Distribution::Unequal(values) => split_unequal(amount.currency(), roster.len(), values)?,
        };

        Ok(roster.iter().cloned().zip(shares).collect())
    }

    fn split_equal(&self, amount: Money, count: usize) -> Result<Vec<Money>, LedgerError> {
        let currency = amount.currency();
        let divisor = Decimal::from(count as u64);
        let exact = amount.divide(divisor)?;

        match self.policy {
            RoundingPolicy::PerShare => Ok(vec![exact.round_to_currency(); count]),
            RoundingPolicy::AbsorbRemainder => {
                let total = amount.round_to_currency().amount();
                let base = exact
                    .amount()
                    .round_dp_with_strategy(currency.decimal_places(), RoundingStrategy::ToZero);
                let remainder = total - base * divisor;

                let step = if remainder.is_sign_negative() {
                    -currency.minor_unit()
                } else {
                    currency.minor_unit()
                };
                // Whole minor units left over, always fewer than `count`
                let extra = (remainder / step).trunc().to_usize().unwrap_or(0).min(count);

                Ok((0..count)
                    .map(|i| {
                        let share = if i >= count - extra { base + step } else { base };
                        Money::new(share, currency)
                    })
                    .collect())
            }
        }
    }
}

fn split_unequal(
    currency: Currency,
    count: usize,
    values: &[Decimal],
) -> Result<Vec<Money>, LedgerError> {
    if values.len() != count {
        return Err(LedgerError::DistributionMismatch {
            expected: count,
            actual: values.len(),
        });
    }

    values
        .iter()
        .map(|value| {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(LedgerError::InvalidAmount(format!(
                    "share must not be negative, got {}",
                    value
                )));
            }
            Ok(Money::new(round_share(*value, currency), currency))
        })
        .collect()
}

fn round_share(value: Decimal, currency: Currency) -> Decimal {
    value.round_dp_with_strategy(currency.decimal_places(), RoundingStrategy::MidpointNearestEven)
}

/// Parses a comma-separated list of per-person amounts, e.g. `"3, 7.50"`
///
/// Blank input yields an empty list.
pub fn parse_unequal(input: &str) -> Result<Vec<Decimal>, LedgerError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            Decimal::from_str(part)
                .map_err(|_| LedgerError::InvalidAmount(format!("'{}' is not a number", part)))
        })
        .collect()
}

/// Parses a user-entered expense amount
pub fn parse_amount(input: &str, currency: Currency) -> Result<Money, LedgerError> {
    Money::parse(input, currency).map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn roster_of(n: usize) -> Roster {
        let mut roster = Roster::new();
        for i in 0..n {
            roster.add(&format!("P{}", i)).unwrap();
        }
        roster
    }

    proptest! {
        #[test]
        fn equal_split_drift_is_bounded(cents in 0i64..100_000_000i64, n in 1usize..50) {
            let amount = Money::from_minor(cents, Currency::USD);
            let shares = Allocator::default()
                .allocate(amount, &roster_of(n), &Distribution::Equal)
                .unwrap();

            let total: Decimal = shares.values().map(|s| s.amount()).sum();
            let bound = Decimal::new(5, 3) * Decimal::from(n as u64);
            prop_assert!((total - amount.amount()).abs() <= bound);
        }

        #[test]
        fn absorb_remainder_reconciles_exactly(cents in 0i64..100_000_000i64, n in 1usize..50) {
            let amount = Money::from_minor(cents, Currency::USD);
            let shares = Allocator::new(RoundingPolicy::AbsorbRemainder)
                .allocate(amount, &roster_of(n), &Distribution::Equal)
                .unwrap();

            let total: Decimal = shares.values().map(|s| s.amount()).sum();
            prop_assert_eq!(total, amount.amount());
        }

        #[test]
        fn absorb_remainder_shares_are_non_negative_and_close(
            cents in 0i64..10_000i64,
            n in 1usize..50,
        ) {
            let amount = Money::from_minor(cents, Currency::USD);
            let shares = Allocator::new(RoundingPolicy::AbsorbRemainder)
                .allocate(amount, &roster_of(n), &Distribution::Equal)
                .unwrap();

            let low = shares.values().map(|s| s.amount()).min().unwrap();
            let high = shares.values().map(|s| s.amount()).max().unwrap();
            prop_assert!(low >= Decimal::ZERO);
            prop_assert!(high - low <= Currency::USD.minor_unit());
        }
    }
}
