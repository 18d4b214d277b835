//! Test Data Builders
//!
//! Builders for ledgers and sessions. Tests name only the participants and
//! expenses they care about; currency and rounding policy default to USD and
//! per-share rounding.

use core_kernel::{Currency, Money};
use domain_ledger::{Distribution, Ledger, LedgerError, RoundingPolicy, Session};
use rust_decimal::Decimal;

/// An expense to be recorded by a builder
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSpec {
    pub reason: String,
    pub payer: String,
    pub amount: Decimal,
    pub distribution: Distribution,
}

/// Builder for ledgers and sessions
#[derive(Debug, Clone)]
pub struct TestLedgerBuilder {
    currency: Currency,
    policy: RoundingPolicy,
    participants: Vec<String>,
    expenses: Vec<ExpenseSpec>,
}

impl Default for TestLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLedgerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
            policy: RoundingPolicy::PerShare,
            participants: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_rounding_policy(mut self, policy: RoundingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_participant(mut self, name: impl Into<String>) -> Self {
        self.participants.push(name.into());
        self
    }

    pub fn with_participants<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_expense(mut self, expense: ExpenseSpec) -> Self {
        self.expenses.push(expense);
        self
    }

    /// Adds an expense split evenly over the roster
    pub fn with_equal_expense(self, reason: &str, payer: &str, amount: Decimal) -> Self {
        self.with_expense(ExpenseSpec {
            reason: reason.to_string(),
            payer: payer.to_string(),
            amount,
            distribution: Distribution::Equal,
        })
    }

    /// Adds an expense with explicit per-person amounts, in roster order
    pub fn with_unequal_expense(
        self,
        reason: &str,
        payer: &str,
        amount: Decimal,
        shares: Vec<Decimal>,
    ) -> Self {
        self.with_expense(ExpenseSpec {
            reason: reason.to_string(),
            payer: payer.to_string(),
            amount,
            distribution: Distribution::Unequal(shares),
        })
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn expenses(&self) -> &[ExpenseSpec] {
        &self.expenses
    }

    /// Builds the ledger, stopping at the first rejected operation
    pub fn try_build(&self) -> Result<Ledger, LedgerError> {
        let mut ledger = Ledger::with_rounding_policy(self.currency, self.policy);
        for name in &self.participants {
            ledger.add_participant(name)?;
        }
        for expense in &self.expenses {
            ledger.add_expense(
                expense.reason.as_str(),
                &expense.payer,
                Money::new(expense.amount, self.currency),
                expense.distribution.clone(),
            )?;
        }
        Ok(ledger)
    }

    /// Builds the ledger
    ///
    /// # Panics
    ///
    /// Panics if any participant or expense is rejected.
    pub fn build(&self) -> Ledger {
        self.try_build().expect("builder describes a valid ledger")
    }

    /// Builds a session holding the same roster and expenses
    ///
    /// # Panics
    ///
    /// Panics if any participant or expense is rejected.
    pub fn build_session(&self) -> Session {
        let mut session = Session::new(self.currency, self.policy);
        for name in &self.participants {
            session.add_participant(name).expect("valid participant");
        }
        for expense in &self.expenses {
            session
                .add_expense(
                    expense.reason.as_str(),
                    &expense.payer,
                    Money::new(expense.amount, self.currency),
                    expense.distribution.clone(),
                )
                .expect("valid expense");
        }
        session
    }
}
