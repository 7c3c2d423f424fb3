//! Posting types
//!
//! A posting is one side of a double-entry transaction: it touches exactly
//! one account with either a debit or a credit amount, never both.

use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, CostCenterId, Money, PartyId, PostingId};

/// Side of a posting (debit or credit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostingSide {
    /// Debit posting
    Debit,
    /// Credit posting
    Credit,
}

impl PostingSide {
    /// Returns the opposite side
    pub fn opposite(&self) -> PostingSide {
        match self {
            PostingSide::Debit => PostingSide::Credit,
            PostingSide::Credit => PostingSide::Debit,
        }
    }
}

/// A single posting (line) in a ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    /// Unique posting identifier
    pub id: PostingId,
    /// Account the amount is posted against
    pub account: AccountId,
    /// Amount (always positive)
    pub amount: Money,
    /// Debit or credit
    pub side: PostingSide,
    /// Optional party the posting settles against
    pub party: Option<PartyId>,
    /// Optional cost center dimension
    pub cost_center: Option<CostCenterId>,
    /// Optional description for this line
    pub description: Option<String>,
}

impl Posting {
    /// Creates a new debit posting
    pub fn debit(account: AccountId, amount: Money) -> Self {
        Self::new(account, amount, PostingSide::Debit)
    }

    /// Creates a new credit posting
    pub fn credit(account: AccountId, amount: Money) -> Self {
        Self::new(account, amount, PostingSide::Credit)
    }

    fn new(account: AccountId, amount: Money, side: PostingSide) -> Self {
        Self {
            id: PostingId::new(),
            account,
            amount,
            side,
            party: None,
            cost_center: None,
            description: None,
        }
    }

    /// Attaches a party to the posting
    pub fn with_party(mut self, party: PartyId) -> Self {
        self.party = Some(party);
        self
    }

    /// Attaches a cost center to the posting
    pub fn with_cost_center(mut self, cost_center: CostCenterId) -> Self {
        self.cost_center = Some(cost_center);
        self
    }

    /// Adds a description to the posting
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if this is a debit posting
    pub fn is_debit(&self) -> bool {
        self.side == PostingSide::Debit
    }
}
