//! Shared expense ledger
//!
//! The ledger owns the roster and the append-only expense list. Balances are
//! never stored here; they are recomputed from the full history on request.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

use core_kernel::{Currency, ExpenseId, Money};
use crate::allocation::{Allocator, RoundingPolicy};
use crate::balance::Balances;
use crate::error::LedgerError;
use crate::expense::{Distribution, Expense};
use crate::participant::{Participant, Roster};

/// The roster and expense history of one group
///
/// # Invariants
///
/// - Participant names are unique and never change
/// - Every expense payer and share holder is on the roster
/// - Recorded expenses are never modified or removed (except by [`Ledger::clear`])
/// - A failed operation leaves the ledger untouched
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Participants, in the order they joined
    roster: Roster,
    /// Expenses, in the order they were recorded
    expenses: Vec<Expense>,
    /// Currency of every amount in the ledger
    currency: Currency,
    /// Share calculator
    allocator: Allocator,
}

impl Ledger {
    /// Creates an empty ledger that keeps per-share rounding drift
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let ledger = Ledger::new(Currency::USD);
    /// ```
    pub fn new(currency: Currency) -> Self {
        Self::with_rounding_policy(currency, RoundingPolicy::default())
    }

    /// Creates an empty ledger with an explicit rounding policy
    pub fn with_rounding_policy(currency: Currency, policy: RoundingPolicy) -> Self {
        Self {
            roster: Roster::new(),
            expenses: Vec::new(),
            currency,
            allocator: Allocator::new(policy),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn rounding_policy(&self) -> RoundingPolicy {
        self.allocator.policy()
    }

    pub fn participants(&self) -> &Roster {
        &self.roster
    }

    pub fn contains(&self, name: &str) -> bool {
        self.roster.contains(name)
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// Adds a participant to the end of the roster
    ///
    /// # Errors
    ///
    /// - `DuplicateParticipant` if the name is already on the roster
    /// - `InvalidParticipantName` if the name is blank
    pub fn add_participant(&mut self, name: &str) -> Result<Participant, LedgerError> {
        let participant = self.roster.add(name)?.clone();
        info!(participant = %participant, roster_size = self.roster.len(), "Participant added");
        Ok(participant)
    }

    /// Records an expense
    ///
    /// The amount is rounded to the currency's minor unit and split by the
    /// ledger's [`Allocator`].
    ///
    /// # Arguments
    ///
    /// * `reason` - What the money was spent on
    /// * `payer` - Name of the participant who paid
    /// * `amount` - Amount paid, must not be negative
    /// * `distribution` - How to split the amount
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `EmptyRoster` if no participant exists yet
    /// - `InvalidAmount` if the amount is negative
    /// - `UnknownParticipant` if the payer is not on the roster
    /// - `DistributionMismatch` / `InvalidAmount` from the allocator
    pub fn add_expense(
        &mut self,
        reason: impl Into<String>,
        payer: &str,
        amount: Money,
        distribution: Distribution,
    ) -> Result<ExpenseId, LedgerError> {
        if self.roster.is_empty() {
            return Err(LedgerError::EmptyRoster);
        }

        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "expense amount must not be negative, got {}",
                amount.format_amount()
            )));
        }

        if amount.currency() != self.currency {
            return Err(LedgerError::InvalidAmount(format!(
                "expected an amount in {}, got {}",
                self.currency,
                amount.currency()
            )));
        }

        let payer = match self.roster.require(payer) {
            Ok(p) => p.clone(),
            Err(e) => {
                warn!(payer = %payer, "Rejected expense from unknown payer");
                return Err(e);
            }
        };

        let amount = amount.round_to_currency();
        let shares = self.allocator.allocate(amount, &self.roster, &distribution)?;

        let expense = Expense {
            id: ExpenseId::new_v7(),
            reason: reason.into(),
            payer,
            amount,
            shares,
            distribution: distribution.kind(),
            recorded_at: Utc::now(),
        };
        let id = expense.id;

        info!(
            expense_id = %id,
            payer = %expense.payer,
            amount = %amount.format_amount(),
            distribution = ?expense.distribution,
            "Expense recorded"
        );

        self.expenses.push(expense);
        Ok(id)
    }

    /// Recomputes every participant's net balance from scratch
    ///
    /// Each expense credits its payer with the full amount and debits every
    /// participant by their share. Calling this twice without an intervening
    /// mutation returns identical results.
    pub fn compute_balances(&self) -> Result<Balances, LedgerError> {
        let mut entries: IndexMap<Participant, Money> = self
            .roster
            .iter()
            .map(|p| (p.clone(), Money::zero(self.currency)))
            .collect();

        for expense in &self.expenses {
            if let Some(balance) = entries.get_mut(expense.payer.name()) {
                *balance = balance.checked_add(&expense.amount)?;
            }

            for (participant, share) in &expense.shares {
                if let Some(balance) = entries.get_mut(participant.name()) {
                    *balance = balance.checked_sub(share)?;
                }
            }
        }

        debug!(
            participants = entries.len(),
            expenses = self.expenses.len(),
            "Balances recomputed"
        );

        Ok(Balances::new(self.currency, entries))
    }

    /// Drops every participant and expense
    pub fn clear(&mut self) {
        self.roster.clear();
        self.expenses.clear();
    }
}
