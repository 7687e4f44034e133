use crate::types::{Amount, Expense, ExpenseId, Ledger, MemoryLedger};

/// Sums the amounts of all expenses.
///
/// Returns `None` for an empty slice so callers can tell "nothing recorded" apart from a zero
/// total. The sum wraps on overflow in every build profile.
pub(crate) fn total(expenses: &[Expense]) -> Option<Amount> {
    if expenses.is_empty() {
        return None;
    }
    Some(
        expenses
            .iter()
            .fold(0, |sum: Amount, expense| sum.wrapping_add(expense.amount)),
    )
}

/// Picks the expense with the greatest amount, keeping the first one on ties.
///
/// [`Iterator::max_by_key`] keeps the last of equal maxima, hence the manual fold.
pub(crate) fn largest(expenses: &[Expense]) -> Option<&Expense> {
    expenses.iter().reduce(|largest, expense| {
        if expense.amount > largest.amount {
            expense
        } else {
            largest
        }
    })
}

impl Ledger for MemoryLedger {
    fn add(&mut self, amount: Amount, memo: String, date: String) -> ExpenseId {
        let id = self.next_id;
        self.expenses.push(Expense {
            id,
            amount,
            memo,
            date,
        });
        self.next_id = id.next();
        id
    }

    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn clear(&mut self) {
        self.expenses.clear();
    }

    fn restore(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    fn next_id(&self) -> ExpenseId {
        self.next_id
    }

    fn resync_next_id(&mut self) {
        self.next_id = self
            .expenses
            .iter()
            .map(|expense| expense.id)
            .max()
            .map_or(ExpenseId::FIRST, ExpenseId::next);
    }
}
