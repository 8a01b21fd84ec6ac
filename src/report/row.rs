use crate::actual::{Account, Transaction};
use crate::resolver::NameResolver;
use serde::Deserialize;

/// Columns of the report, in order.
pub const HEADER: [&str; 7] = [
    "account", "date", "payee", "amount", "category", "notes", "error",
];

/// Rendered in place of a name that could not be resolved.
pub const PLACEHOLDER: &str = "FIXME";

/// Prefix of ledger errors in the `error` column.
pub const ERROR_MARKER: &str = "[FIXME] ";

/// One line of the report.
///
/// Field names match [`HEADER`], so a written report can be read back with
/// `csv::Reader::deserialize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRow {
    pub account: String,
    pub date: String,
    pub payee: String,
    pub amount: String,
    pub category: String,
    pub notes: String,
    pub error: String,
}

impl TransactionRow {
    /**
    Renders a transaction of `account`.

    A transaction in an income category is written as a transfer from the category
    into the account: the category goes in the `account` column, the account in the
    `category` column, and the amount is negated. An unknown category leaves both
    columns as [`PLACEHOLDER`].
    */
    pub fn new(account: &Account, transaction: &Transaction, resolver: &NameResolver) -> Self {
        let payee = resolver
            .payee(transaction.payee.as_deref())
            .map_or(PLACEHOLDER, |p| p.name.as_str());

        let amount = i128::from(transaction.amount);
        let (account_name, category_name, amount) =
            match resolver.category(transaction.category.as_deref()) {
                None => (PLACEHOLDER, PLACEHOLDER, amount),
                Some(category) if category.is_income => {
                    (category.name.as_str(), account.name.as_str(), -amount)
                }
                Some(category) => (account.name.as_str(), category.name.as_str(), amount),
            };

        let error = transaction
            .error
            .as_deref()
            .filter(|e| !e.is_empty())
            .map(|e| format!("{}{}", ERROR_MARKER, e))
            .unwrap_or_default();

        Self {
            account: account_name.to_string(),
            date: transaction.date.clone(),
            payee: payee.to_string(),
            amount: format_amount(amount),
            category: category_name.to_string(),
            notes: transaction.notes.clone().unwrap_or_default(),
            error,
        }
    }

    /// Fields in [`HEADER`] order.
    pub fn as_record(&self) -> [&str; 7] {
        [
            self.account.as_str(),
            self.date.as_str(),
            self.payee.as_str(),
            self.amount.as_str(),
            self.category.as_str(),
            self.notes.as_str(),
            self.error.as_str(),
        ]
    }
}

/// Cents to a decimal with two fraction digits, e.g. `-4200` to `-42.00`.
pub fn format_amount(cents: i128) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
