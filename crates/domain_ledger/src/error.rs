//! Ledger domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::MoneyError;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Debit and credit totals differ beyond tolerance
    #[error("Imbalanced entry: debits={debits}, credits={credits}")]
    Imbalanced { debits: Decimal, credits: Decimal },

    /// Entry has no postings
    #[error("Ledger entry has no postings")]
    EmptyEntry,

    /// Postings mix currencies within one entry
    #[error("Mixed currencies in entry: {0} and {1}")]
    MixedCurrencies(String, String),

    /// Entry is already voided
    #[error("Ledger entry already voided: {0}")]
    AlreadyVoided(String),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
