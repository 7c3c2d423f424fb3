//! Claim line items

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, ClaimItemId, InvoiceItemId, Ratio};

/// A claim line item carrying its percentage share of the claim amount
///
/// Each item settles against two accounts: its deferred (unearned) account
/// is debited and its revenue account credited for the item's share. The
/// account references are filled in after the item is created from the
/// invoice split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimItem {
    pub id: ClaimItemId,
    /// Invoice item this line was split from
    pub source_item: InvoiceItemId,
    /// Percentage share of the claim amount (0-100)
    pub ratio: Ratio,
    /// Deferred revenue account, debited on settlement
    pub unearned_account: Option<AccountId>,
    /// Revenue account, credited on settlement
    pub revenue_account: Option<AccountId>,
}

impl ClaimItem {
    /// Creates a new claim item
    pub fn new(source_item: InvoiceItemId, ratio: Ratio) -> Self {
        Self {
            id: ClaimItemId::new(),
            source_item,
            ratio,
            unearned_account: None,
            revenue_account: None,
        }
    }

    /// Sets the unearned and revenue accounts
    pub fn with_accounts(mut self, unearned: AccountId, revenue: AccountId) -> Self {
        self.unearned_account = Some(unearned);
        self.revenue_account = Some(revenue);
        self
    }
}
