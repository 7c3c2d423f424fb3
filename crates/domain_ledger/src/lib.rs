//! Ledger Domain - Balanced Double-Entry Postings
//!
//! This crate implements the double-entry side of claim settlement: every
//! ledger entry is a set of debit/credit postings whose totals must agree
//! within a small tolerance before the entry can exist at all.
//!
//! # Double-Entry Principles
//!
//! - Each posting is a debit or a credit, never both
//! - The sum of debits must equal the sum of credits (tolerance 0.01)
//! - Posted entries are immutable; corrections go through reversals

pub mod entry;
pub mod error;
pub mod posting;

pub use entry::{EntryBuilder, EntryStatus, LedgerEntry, BALANCE_TOLERANCE};
pub use error::LedgerError;
pub use posting::{Posting, PostingSide};
