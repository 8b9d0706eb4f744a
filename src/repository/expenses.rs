use chrono::Utc;

use crate::models::Expense;
use crate::schemas::NewExpense;
use crate::store::{Store, EXPENSES};

pub fn get_expenses(store: &Store) -> Vec<Expense> {
    store.load(EXPENSES)
}

/// Append-only: expenses are never edited or deleted in this scope.
pub fn add_expense(store: &Store, input: NewExpense) -> Expense {
    let mut expenses = get_expenses(store);
    let expense = Expense {
        id: super::new_id(),
        property_id: input.property_id,
        date: input.date,
        description: input.description,
        amount: input.amount,
        category: input.category,
        service_provider: input.service_provider,
        receipt_number: input.receipt_number,
        notes: input.notes,
        created_at: Utc::now(),
    };
    expenses.push(expense.clone());
    store.save(EXPENSES, &expenses);
    expense
}
