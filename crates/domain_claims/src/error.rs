//! Claims domain errors
//!
//! Maps the three failure classes of settlement: validation failures abort
//! before any remote call, imbalance failures abort before persistence, and
//! remote failures surface as-is with no retry or rollback.

use thiserror::Error;

use core_kernel::{MoneyError, PortError};
use domain_ledger::LedgerError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// A required account reference is missing
    #[error("Missing required account: {field}")]
    MissingAccount { field: &'static str },

    /// General validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// Claim has no line items
    #[error("Claim has no line items")]
    EmptyItems,

    /// Claim amount is zero
    #[error("Claim amount is zero")]
    ZeroClaimAmount,

    /// Status transition not permitted
    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    /// Ledger entry construction failed (includes imbalance)
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// A document-store call failed
    #[error("Remote operation failed: {0}")]
    Remote(#[from] PortError),
}

impl ClaimError {
    /// Returns true for errors raised before any remote call
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ClaimError::MissingAccount { .. }
                | ClaimError::Validation(_)
                | ClaimError::EmptyItems
                | ClaimError::ZeroClaimAmount
        )
    }
}
