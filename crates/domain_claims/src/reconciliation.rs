//! Reconciliation service
//!
//! Drives the settlement flow against the document store: build the
//! balanced entry, persist it, then flip the claim's status. Calls are
//! strictly sequential and there is no retry or rollback; if the status
//! update fails after the entry was persisted, the two stay inconsistent
//! and the error is surfaced to the caller.

use serde_json::json;
use tracing::{info, instrument};

use core_kernel::{DocumentStore, LedgerEntryId, PortError};

use crate::builder::build_balanced_entry;
use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;

/// Document type the claim is stored under
pub const CLAIM_DOCTYPE: &str = "Claim";
/// Document type the ledger entry is stored under
pub const LEDGER_ENTRY_DOCTYPE: &str = "Ledger Entry";

/// Settlement operations over a document store
pub struct ReconciliationService<S> {
    store: S,
}

impl<S: DocumentStore> ReconciliationService<S> {
    /// Creates a service backed by the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists a freshly created claim document
    #[instrument(skip(self, claim), fields(claim = %claim.id))]
    pub async fn create(&self, claim: &Claim) -> Result<(), ClaimError> {
        let doc = to_doc(claim)?;
        self.store
            .insert(CLAIM_DOCTYPE, &claim.id.to_string(), doc)
            .await?;
        info!(claim_number = %claim.claim_number, "claim created");
        Ok(())
    }

    /// Reconciles a claim: records its settlement entry and transitions
    /// Unreconciled -> Reconciled
    #[instrument(skip(self, claim), fields(claim = %claim.id))]
    pub async fn reconcile(&self, claim: &mut Claim) -> Result<LedgerEntryId, ClaimError> {
        if claim.status == ClaimStatus::Reconciled {
            return Err(ClaimError::InvalidStatusTransition {
                from: format!("{:?}", claim.status),
                to: format!("{:?}", ClaimStatus::Reconciled),
            });
        }

        // Balance is verified here; nothing is persisted on failure.
        let entry = build_balanced_entry(claim)?;

        self.store
            .insert(LEDGER_ENTRY_DOCTYPE, &entry.id.to_string(), to_doc(&entry)?)
            .await?;

        // Known gap: if this fails the entry above stays persisted.
        self.store
            .set_field(
                CLAIM_DOCTYPE,
                &claim.id.to_string(),
                "status",
                json!("Reconciled"),
            )
            .await?;

        claim.reconcile(entry.id)?;
        info!(entry = %entry.id, "claim reconciled");
        Ok(entry.id)
    }

    /// Reverses a reconciliation: voids the prior entry and transitions
    /// Reconciled -> Unreconciled, permitting re-entry
    #[instrument(skip(self, claim), fields(claim = %claim.id))]
    pub async fn unreconcile(&self, claim: &mut Claim) -> Result<(), ClaimError> {
        let entry_id = claim.ledger_entry.ok_or_else(|| {
            ClaimError::Validation("claim has no ledger entry to void".to_string())
        })?;

        self.store
            .cancel(LEDGER_ENTRY_DOCTYPE, &entry_id.to_string())
            .await?;

        self.store
            .set_field(
                CLAIM_DOCTYPE,
                &claim.id.to_string(),
                "status",
                json!("Unreconciled"),
            )
            .await?;

        claim.unreconcile()?;
        info!(entry = %entry_id, "claim unreconciled");
        Ok(())
    }
}

fn to_doc<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ClaimError> {
    serde_json::to_value(value)
        .map_err(|e| ClaimError::Remote(PortError::internal(e.to_string())))
}
