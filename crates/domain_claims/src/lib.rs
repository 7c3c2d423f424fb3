//! Claims Domain - Allocation and Settlement
//!
//! This crate implements the claim lifecycle: a claim is created from a
//! source invoice, its line items carry proportional shares of the claim
//! amount, and reconciliation records a balanced ledger entry that settles
//! the claim.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Invoice -> Claim (Unreconciled) -> reconcile -> Reconciled
//!                        ^                            |
//!                        +------- unreconcile --------+
//! ```

pub mod allocation;
pub mod builder;
pub mod claim;
pub mod error;
pub mod invoice;
pub mod item;
pub mod reconciliation;

pub use allocation::{compute_item_ratios, validate_ratios};
pub use builder::build_balanced_entry;
pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use invoice::{Invoice, InvoiceItem};
pub use item::ClaimItem;
pub use reconciliation::{ReconciliationService, CLAIM_DOCTYPE, LEDGER_ENTRY_DOCTYPE};
