//! Core Kernel - Foundational types for the claim settlement core
//!
//! This crate provides the building blocks used across the domain modules:
//! - Money and ratio types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - The document-store port the domain persists through

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use error::CoreError;
pub use identifiers::{
    AccountId, ClaimId, ClaimItemId, CostCenterId, InvoiceId, InvoiceItemId, LedgerEntryId,
    PartyId, PostingId,
};
pub use money::{Currency, Money, MoneyError, Ratio};
pub use ports::{DocumentStore, PortError};
