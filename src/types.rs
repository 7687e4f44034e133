//! Common datatypes supporting functions throughout the expense ledger

use std::fmt::Display;

use serde::Deserialize;

use crate::ops;

/// Whole-unit amount of money; there is no fractional currency
pub type Amount = i64;

/// Unique identifier for an expense within a session
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The identifier handed out to the first expense of an empty ledger
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Largest identifier accepted from a saved file.
    ///
    /// Larger ids are rejected on load, so the counter never reaches the end of the range.
    pub const MAX_LOADED: u64 = i64::MAX as u64;

    /// Returns the identifier following this one
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for ExpenseId {
    fn from(expense_id: u64) -> Self {
        Self(expense_id)
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single expense entry.
///
/// Expenses are never mutated once created; they only disappear when the whole ledger is
/// cleared ahead of a reload.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Identifier assigned by the ledger, or read back from a saved file
    pub(crate) id: ExpenseId,
    /// How much was spent
    pub(crate) amount: Amount,
    /// Free text; may contain commas and quotes
    pub(crate) memo: String,
    /// Free text, conventionally `YYYY-MM-DD` but never validated
    pub(crate) date: String,
}

impl Expense {
    /// Creates an expense from its four fields
    #[must_use]
    pub fn new(
        id: ExpenseId,
        amount: Amount,
        memo: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            amount,
            memo: memo.into(),
            date: date.into(),
        }
    }

    /// Returns the identifier of the expense
    #[must_use]
    #[inline]
    pub fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the amount spent
    #[must_use]
    #[inline]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the memo text
    #[must_use]
    #[inline]
    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Returns the date text
    #[must_use]
    #[inline]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID:{} | {}원 | {} | {}",
            self.id, self.amount, self.memo, self.date
        )
    }
}

/// An interface to an ordered collection of expenses
pub trait Ledger {
    /// Records a new expense under the next identifier and returns that identifier
    fn add(&mut self, amount: Amount, memo: String, date: String) -> ExpenseId;

    /// All expenses, in insertion order
    fn expenses(&self) -> &[Expense];

    /// Drops every expense. The identifier counter is left alone until
    /// [`Ledger::resync_next_id`] is called.
    fn clear(&mut self);

    /// Appends an already-identified expense, as read back from a file
    fn restore(&mut self, expense: Expense);

    /// The identifier the next call to [`Ledger::add`] will hand out
    fn next_id(&self) -> ExpenseId;

    /// Resets the identifier counter to one past the greatest identifier present, or to
    /// [`ExpenseId::FIRST`] when the ledger is empty
    fn resync_next_id(&mut self);

    /// All expenses in insertion order, or `None` when there are none
    fn list(&self) -> Option<&[Expense]> {
        let expenses = self.expenses();
        (!expenses.is_empty()).then_some(expenses)
    }

    /// Sum of all amounts, or `None` when there is nothing to sum
    fn total(&self) -> Option<Amount> {
        ops::total(self.expenses())
    }

    /// The expense with the greatest amount. Among equal amounts the earliest one wins.
    fn largest(&self) -> Option<&Expense> {
        ops::largest(self.expenses())
    }
}

/// Holds all expenses in an in-memory structure.
///
/// # Limitations
/// No persistence of its own; see [`crate::io`].
///
/// Duplicate identifiers coming from a loaded file are kept as they are.
#[derive(Debug)]
pub struct MemoryLedger {
    /// Storage for expenses, in insertion order
    pub(crate) expenses: Vec<Expense>,
    /// Identifier for the next added expense
    pub(crate) next_id: ExpenseId,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: ExpenseId::FIRST,
        }
    }
}

impl MemoryLedger {
    /// Creates a new, empty [`MemoryLedger`]
    #[must_use]
    pub fn new() -> Self {
        MemoryLedger::default()
    }
}
