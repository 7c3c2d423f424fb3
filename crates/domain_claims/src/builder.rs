//! Settlement entry construction
//!
//! Turns a claim into the balanced ledger entry that settles it. All
//! validation happens here, before anything touches the document store.

use domain_ledger::{LedgerEntry, Posting};

use crate::claim::Claim;
use crate::error::ClaimError;

/// Builds the balanced ledger entry that settles a claim
///
/// Posting scheme:
/// 1. credit the party account for the full claim amount
/// 2. debit the receiving account for (claim amount - tax amount)
/// 3. per line item, debit its unearned account and credit its revenue
///    account for (claim amount x ratio / 100)
/// 4. if tax amount > 0, debit the tax account for the tax amount
///
/// # Errors
///
/// Validation failures (`MissingAccount`, `EmptyItems`, `ZeroClaimAmount`)
/// are raised before any posting is produced. An imbalance beyond the
/// ledger tolerance surfaces as `ClaimError::Ledger`.
pub fn build_balanced_entry(claim: &Claim) -> Result<LedgerEntry, ClaimError> {
    let party_account = claim.party_account.ok_or(ClaimError::MissingAccount {
        field: "party_account",
    })?;
    let receiving_account = claim.receiving_account.ok_or(ClaimError::MissingAccount {
        field: "receiving_account",
    })?;

    if claim.items.is_empty() {
        return Err(ClaimError::EmptyItems);
    }
    if claim.total_amount.is_zero() {
        return Err(ClaimError::ZeroClaimAmount);
    }

    let has_tax = claim.tax_amount.is_positive();
    let tax_account = if has_tax {
        Some(claim.tax_account.ok_or(ClaimError::MissingAccount {
            field: "tax_account",
        })?)
    } else {
        None
    };

    let net_amount = claim.total_amount.checked_sub(&claim.tax_amount)?;

    let mut builder =
        LedgerEntry::builder(format!("Settlement of claim {}", claim.claim_number))
            .with_reference("claim", *claim.id.as_uuid())
            .posting(Posting::credit(party_account, claim.total_amount).with_party(claim.party))
            .debit(receiving_account, net_amount);

    for item in &claim.items {
        let unearned = item.unearned_account.ok_or(ClaimError::MissingAccount {
            field: "unearned_account",
        })?;
        let revenue = item.revenue_account.ok_or(ClaimError::MissingAccount {
            field: "revenue_account",
        })?;

        let share = item.ratio.apply(&claim.total_amount);
        builder = builder.debit(unearned, share).credit(revenue, share);
    }

    if let Some(tax_account) = tax_account {
        builder = builder.debit(tax_account, claim.tax_amount);
    }

    Ok(builder.build()?)
}
