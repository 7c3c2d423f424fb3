//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{
    AccountId, ClaimId, Currency, InvoiceId, LedgerEntryId, Money, PartyId,
};

use crate::allocation::compute_item_ratios;
use crate::error::ClaimError;
use crate::invoice::Invoice;
use crate::item::ClaimItem;

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// No ledger entry recorded yet
    Unreconciled,
    /// Settled by a persisted ledger entry
    Reconciled,
}

/// A request for settlement tied to a source invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Human-readable claim number
    pub claim_number: String,
    /// Source invoice
    pub invoice: InvoiceId,
    /// Party the claim settles against
    pub party: PartyId,
    /// Receivable account of the party, credited for the full claim amount
    pub party_account: Option<AccountId>,
    /// Account receiving the claim net of tax
    pub receiving_account: Option<AccountId>,
    /// Tax account, required only when tax amount is positive
    pub tax_account: Option<AccountId>,
    /// Total claim amount
    pub total_amount: Money,
    /// Tax portion of the claim amount
    pub tax_amount: Money,
    /// Outstanding amount copied from the invoice at creation
    pub outstanding_amount: Money,
    /// Paid amount copied from the invoice at creation
    pub paid_amount: Money,
    /// Line items with their percentage shares
    pub items: Vec<ClaimItem>,
    /// Status
    pub status: ClaimStatus,
    /// Ledger entry that reconciled this claim, if any
    pub ledger_entry: Option<LedgerEntryId>,
    /// Currency
    pub currency: Currency,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates an unreconciled claim from a source invoice
    ///
    /// Copies the invoice's monetary position and splits its items into
    /// claim line items proportionally by amount. Account references are
    /// set afterwards by the caller.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let now = Utc::now();
        let amounts: Vec<Money> = invoice.items.iter().map(|item| item.amount).collect();
        let ratios = compute_item_ratios(&amounts);

        let items = invoice
            .items
            .iter()
            .zip(ratios)
            .map(|(item, ratio)| ClaimItem::new(item.id, ratio))
            .collect();

        Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            invoice: invoice.id,
            party: invoice.party,
            party_account: None,
            receiving_account: None,
            tax_account: None,
            total_amount: invoice.total_amount,
            tax_amount: Money::zero(invoice.currency),
            outstanding_amount: invoice.outstanding_amount,
            paid_amount: invoice.paid_amount,
            items,
            status: ClaimStatus::Unreconciled,
            ledger_entry: None,
            currency: invoice.currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the party and receiving accounts
    pub fn with_accounts(mut self, party_account: AccountId, receiving_account: AccountId) -> Self {
        self.party_account = Some(party_account);
        self.receiving_account = Some(receiving_account);
        self
    }

    /// Sets the tax amount and the account it posts to
    pub fn with_tax(mut self, tax_amount: Money, tax_account: AccountId) -> Self {
        self.tax_amount = tax_amount;
        self.tax_account = Some(tax_account);
        self
    }

    /// Transitions Unreconciled -> Reconciled
    ///
    /// Callers invoke this only after the ledger entry was successfully
    /// persisted; the entry id is recorded on the claim.
    pub fn reconcile(&mut self, entry: LedgerEntryId) -> Result<(), ClaimError> {
        self.transition(ClaimStatus::Reconciled)?;
        self.ledger_entry = Some(entry);
        Ok(())
    }

    /// Transitions Reconciled -> Unreconciled after the entry was voided
    ///
    /// Clears the entry reference so the claim can be reconciled again.
    pub fn unreconcile(&mut self) -> Result<(), ClaimError> {
        self.transition(ClaimStatus::Unreconciled)?;
        self.ledger_entry = None;
        Ok(())
    }

    fn transition(&mut self, target: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", self.status),
                to: format!("{:?}", target),
            });
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Unreconciled, Reconciled) | (Reconciled, Unreconciled)
        )
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("PCL-{}", duration.as_millis() % 10_000_000_000)
}
