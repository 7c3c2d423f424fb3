//! Ledger entries
//!
//! A ledger entry is a set of postings recorded together. Entries are
//! validated before they exist: `EntryBuilder::build` refuses to produce an
//! entry whose debit and credit totals differ beyond the balance tolerance.
//!
//! # Invariants
//!
//! - |sum(debits) - sum(credits)| <= 0.01 currency units
//! - All postings share one currency
//! - A posted entry is never modified, only voided and reversed

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AccountId, Currency, LedgerEntryId, Money};

use crate::error::LedgerError;
use crate::posting::{Posting, PostingSide};

/// Debit/credit totals may differ by at most this much, in currency units.
pub const BALANCE_TOLERANCE: Decimal = dec!(0.01);

/// Status of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Recorded and in effect
    Posted,
    /// Voided by a reversal flow
    Voided,
}

/// A balanced set of postings recorded against accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry identifier
    pub id: LedgerEntryId,
    /// Posting date
    pub posting_date: DateTime<Utc>,
    /// Free-form remarks
    pub remarks: String,
    /// Reference type (e.g. "claim")
    pub reference_type: Option<String>,
    /// Reference ID
    pub reference_id: Option<Uuid>,
    /// Individual postings
    pub postings: Vec<Posting>,
    /// Entry status
    pub status: EntryStatus,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Starts building an entry
    pub fn builder(remarks: impl Into<String>) -> EntryBuilder {
        EntryBuilder::new(remarks)
    }

    /// Returns (debit total, credit total)
    pub fn totals(&self) -> (Decimal, Decimal) {
        totals(&self.postings)
    }

    /// Marks the entry voided
    ///
    /// Voiding is a one-way step; a voided entry cannot be voided again.
    pub fn void(&mut self) -> Result<(), LedgerError> {
        if self.status == EntryStatus::Voided {
            return Err(LedgerError::AlreadyVoided(self.id.to_string()));
        }
        self.status = EntryStatus::Voided;
        Ok(())
    }

    /// Builds the reversal of this entry
    ///
    /// Every posting's side is swapped; the reversal references the
    /// original entry. The original keeps its own status; callers void it
    /// separately.
    pub fn reversal(&self, reason: &str) -> Result<LedgerEntry, LedgerError> {
        let reversed: Vec<Posting> = self
            .postings
            .iter()
            .map(|p| Posting {
                id: core_kernel::PostingId::new(),
                account: p.account,
                amount: p.amount,
                side: p.side.opposite(),
                party: p.party,
                cost_center: p.cost_center,
                description: Some(format!("Reversal: {}", reason)),
            })
            .collect();

        EntryBuilder::new(format!("Reversal of {}: {}", self.id, reason))
            .with_reference("ledger-entry", *self.id.as_uuid())
            .postings(reversed)
            .build()
    }
}

/// Fluent builder for ledger entries
///
/// ```rust,ignore
/// let entry = LedgerEntry::builder("Claim settlement")
///     .credit(party_account, claim_amount)
///     .debit(receiving_account, net_amount)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    remarks: String,
    posting_date: Option<DateTime<Utc>>,
    reference_type: Option<String>,
    reference_id: Option<Uuid>,
    postings: Vec<Posting>,
}

impl EntryBuilder {
    /// Creates a new builder
    pub fn new(remarks: impl Into<String>) -> Self {
        Self {
            remarks: remarks.into(),
            posting_date: None,
            reference_type: None,
            reference_id: None,
            postings: Vec::new(),
        }
    }

    /// Sets the posting date
    pub fn dated(mut self, date: DateTime<Utc>) -> Self {
        self.posting_date = Some(date);
        self
    }

    /// Sets the reference
    pub fn with_reference(mut self, ref_type: impl Into<String>, ref_id: Uuid) -> Self {
        self.reference_type = Some(ref_type.into());
        self.reference_id = Some(ref_id);
        self
    }

    /// Adds a debit posting
    pub fn debit(mut self, account: AccountId, amount: Money) -> Self {
        self.postings.push(Posting::debit(account, amount));
        self
    }

    /// Adds a credit posting
    pub fn credit(mut self, account: AccountId, amount: Money) -> Self {
        self.postings.push(Posting::credit(account, amount));
        self
    }

    /// Adds a custom posting
    pub fn posting(mut self, posting: Posting) -> Self {
        self.postings.push(posting);
        self
    }

    /// Adds several postings at once
    pub fn postings(mut self, postings: impl IntoIterator<Item = Posting>) -> Self {
        self.postings.extend(postings);
        self
    }

    /// Returns (debit total, credit total) of the postings so far
    pub fn totals(&self) -> (Decimal, Decimal) {
        totals(&self.postings)
    }

    /// Returns true if debit and credit totals are within tolerance
    pub fn is_balanced(&self) -> bool {
        let (debits, credits) = self.totals();
        (debits - credits).abs() <= BALANCE_TOLERANCE
    }

    /// Validates and produces the entry
    ///
    /// # Errors
    ///
    /// - `LedgerError::EmptyEntry` if no postings were added
    /// - `LedgerError::MixedCurrencies` if postings span currencies
    /// - `LedgerError::Imbalanced` if totals differ beyond tolerance
    pub fn build(self) -> Result<LedgerEntry, LedgerError> {
        if self.postings.is_empty() {
            return Err(LedgerError::EmptyEntry);
        }

        self.validate_single_currency()?;

        let (debits, credits) = self.totals();
        if (debits - credits).abs() > BALANCE_TOLERANCE {
            tracing::warn!(%debits, %credits, "refusing to build imbalanced entry");
            return Err(LedgerError::Imbalanced { debits, credits });
        }

        let now = Utc::now();
        Ok(LedgerEntry {
            id: LedgerEntryId::new_v7(),
            posting_date: self.posting_date.unwrap_or(now),
            remarks: self.remarks,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            postings: self.postings,
            status: EntryStatus::Posted,
            created_at: now,
        })
    }

    fn validate_single_currency(&self) -> Result<(), LedgerError> {
        let mut seen: Option<Currency> = None;
        for posting in &self.postings {
            match seen {
                None => seen = Some(posting.amount.currency()),
                Some(currency) if currency != posting.amount.currency() => {
                    return Err(LedgerError::MixedCurrencies(
                        currency.to_string(),
                        posting.amount.currency().to_string(),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

fn totals(postings: &[Posting]) -> (Decimal, Decimal) {
    let mut debits = Decimal::ZERO;
    let mut credits = Decimal::ZERO;

    for posting in postings {
        match posting.side {
            PostingSide::Debit => debits += posting.amount.amount(),
            PostingSide::Credit => credits += posting.amount.amount(),
        }
    }

    (debits, credits)
}
