//! Comprehensive tests for domain_claims

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, PortError};
use domain_claims::{
    build_balanced_entry, compute_item_ratios, Claim, ClaimError, ClaimStatus,
    ReconciliationService, CLAIM_DOCTYPE, LEDGER_ENTRY_DOCTYPE,
};
use domain_ledger::{LedgerEntry, Posting, PostingSide};
use infra_store::{MemoryDocumentStore, CANCELLED_FIELD};
use test_utils::{ClaimFixtures, MoneyFixtures};

fn find_posting(entry: &LedgerEntry, side: PostingSide, amount: Decimal) -> Option<&Posting> {
    entry
        .postings
        .iter()
        .find(|p| p.side == side && p.amount.amount() == amount)
}

// ============================================================================
// Allocation Tests
// ============================================================================

mod allocation_tests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::usd_amount_list_strategy;

    #[test]
    fn ratios_of_positive_amounts_sum_to_one_hundred() {
        let amounts = vec![
            Money::new(dec!(250), Currency::USD),
            Money::new(dec!(250), Currency::USD),
            Money::new(dec!(500), Currency::USD),
        ];

        let total: Decimal = compute_item_ratios(&amounts)
            .iter()
            .map(|r| r.as_percentage())
            .sum();
        assert_eq!(total, dec!(100));
    }

    #[test]
    fn zero_total_yields_all_zero_ratios() {
        let amounts = vec![MoneyFixtures::usd_zero(); 4];
        let ratios = compute_item_ratios(&amounts);

        assert!(ratios.iter().all(|r| r.as_percentage().is_zero()));
    }

    proptest! {
        #[test]
        fn ratio_sum_property(amounts in usd_amount_list_strategy()) {
            let ratios = compute_item_ratios(&amounts);
            prop_assert_eq!(ratios.len(), amounts.len());

            let total: Decimal = ratios.iter().map(|r| r.as_percentage()).sum();
            prop_assert!((total - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 10));
        }
    }
}

// ============================================================================
// Settlement Entry Tests
// ============================================================================

mod settlement_tests {
    use super::*;

    #[test]
    fn worked_example_claim_1000_tax_100_split_60_40() {
        let claim = ClaimFixtures::settleable_claim();
        let entry = build_balanced_entry(&claim).unwrap();

        // party credit for the full claim amount, carrying the party
        let party_credit = find_posting(&entry, PostingSide::Credit, dec!(1000.00)).unwrap();
        assert_eq!(party_credit.account, claim.party_account.unwrap());
        assert_eq!(party_credit.party, Some(claim.party));

        // receiving debit net of tax
        let receiving_debit = find_posting(&entry, PostingSide::Debit, dec!(900.00)).unwrap();
        assert_eq!(receiving_debit.account, claim.receiving_account.unwrap());

        // item pairs at 60% and 40% of the claim amount
        assert!(find_posting(&entry, PostingSide::Debit, dec!(600.00)).is_some());
        assert!(find_posting(&entry, PostingSide::Credit, dec!(600.00)).is_some());
        assert!(find_posting(&entry, PostingSide::Debit, dec!(400.00)).is_some());
        assert!(find_posting(&entry, PostingSide::Credit, dec!(400.00)).is_some());

        // tax debit
        let tax_debit = find_posting(&entry, PostingSide::Debit, dec!(100.00)).unwrap();
        assert_eq!(tax_debit.account, claim.tax_account.unwrap());

        // 1 party credit + 1 receiving debit + 2 item pairs + 1 tax debit
        assert_eq!(entry.postings.len(), 7);

        let (debits, credits) = entry.totals();
        assert_eq!(debits, credits);
    }

    #[test]
    fn entry_references_the_claim() {
        let claim = ClaimFixtures::settleable_claim();
        let entry = build_balanced_entry(&claim).unwrap();

        assert_eq!(entry.reference_type.as_deref(), Some("claim"));
        assert_eq!(entry.reference_id, Some(*claim.id.as_uuid()));
    }

    #[test]
    fn zero_items_fails_validation_with_no_postings() {
        let mut claim = ClaimFixtures::settleable_claim();
        claim.items.clear();

        let result = build_balanced_entry(&claim);
        match result {
            Err(err) => assert!(err.is_validation()),
            Ok(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn missing_accounts_fail_before_any_posting() {
        let claim = ClaimFixtures::bare_claim();
        let result = build_balanced_entry(&claim);

        assert!(matches!(
            result,
            Err(ClaimError::MissingAccount {
                field: "party_account"
            })
        ));
    }

    mod balance_properties {
        use super::*;
        use core_kernel::AccountId;
        use domain_claims::{Invoice, InvoiceItem};
        use core_kernel::PartyId;
        use proptest::prelude::*;

        proptest! {
            // Any claim split from positive invoice items settles into a
            // balanced entry.
            #[test]
            fn settlement_always_balances(
                amounts in prop::collection::vec(1i64..1_000_000i64, 1..15)
            ) {
                let items: Vec<InvoiceItem> = amounts
                    .iter()
                    .map(|minor| InvoiceItem::new(Money::new(Decimal::new(*minor, 2), Currency::USD)))
                    .collect();
                let invoice = Invoice::new(PartyId::new(), Currency::USD, items);

                let mut claim = Claim::from_invoice(&invoice)
                    .with_accounts(AccountId::new(), AccountId::new());
                for item in &mut claim.items {
                    item.unearned_account = Some(AccountId::new());
                    item.revenue_account = Some(AccountId::new());
                }

                let entry = build_balanced_entry(&claim).unwrap();
                let (debits, credits) = entry.totals();
                prop_assert!((debits - credits).abs() <= dec!(0.01));
            }
        }
    }
}

// ============================================================================
// Reconciliation Flow Tests
// ============================================================================

mod reconciliation_tests {
    use super::*;
    use core_kernel::DocumentStore;

    async fn setup() -> (ReconciliationService<MemoryDocumentStore>, Claim) {
        let service = ReconciliationService::new(MemoryDocumentStore::new());
        let claim = ClaimFixtures::settleable_claim();
        service.create(&claim).await.unwrap();
        (service, claim)
    }

    #[tokio::test]
    async fn reconcile_persists_entry_and_flips_status() {
        let (service, mut claim) = setup().await;

        let entry_id = service.reconcile(&mut claim).await.unwrap();

        assert_eq!(claim.status, ClaimStatus::Reconciled);
        assert_eq!(claim.ledger_entry, Some(entry_id));

        let entry_doc = service
            .store()
            .get(LEDGER_ENTRY_DOCTYPE, &entry_id.to_string())
            .await
            .unwrap();
        assert_eq!(entry_doc["status"], "Posted");

        let claim_doc = service
            .store()
            .get(CLAIM_DOCTYPE, &claim.id.to_string())
            .await
            .unwrap();
        assert_eq!(claim_doc["status"], "Reconciled");
    }

    #[tokio::test]
    async fn reconcile_twice_is_rejected() {
        let (service, mut claim) = setup().await;
        service.reconcile(&mut claim).await.unwrap();

        let result = service.reconcile(&mut claim).await;
        assert!(matches!(
            result,
            Err(ClaimError::InvalidStatusTransition { .. })
        ));
    }

    #[tokio::test]
    async fn unreconcile_voids_entry_and_permits_reentry() {
        let (service, mut claim) = setup().await;
        let first_entry = service.reconcile(&mut claim).await.unwrap();

        service.unreconcile(&mut claim).await.unwrap();
        assert_eq!(claim.status, ClaimStatus::Unreconciled);
        assert!(claim.ledger_entry.is_none());

        let entry_doc = service
            .store()
            .get(LEDGER_ENTRY_DOCTYPE, &first_entry.to_string())
            .await
            .unwrap();
        assert_eq!(entry_doc[CANCELLED_FIELD], true);

        // switching payment mode reconciles again with a fresh entry
        let second_entry = service.reconcile(&mut claim).await.unwrap();
        assert_ne!(first_entry, second_entry);
        assert_eq!(claim.status, ClaimStatus::Reconciled);
    }

    #[tokio::test]
    async fn unreconcile_without_entry_is_rejected() {
        let (service, mut claim) = setup().await;

        let result = service.unreconcile(&mut claim).await;
        assert!(matches!(result, Err(ClaimError::Validation(_))));
    }

    #[tokio::test]
    async fn validation_failure_touches_nothing_remote() {
        let service = ReconciliationService::new(MemoryDocumentStore::new());
        let mut claim = ClaimFixtures::bare_claim();

        let result = service.reconcile(&mut claim).await;
        assert!(matches!(result, Err(ClaimError::MissingAccount { .. })));
        assert!(service.store().is_empty().await);
        assert_eq!(claim.status, ClaimStatus::Unreconciled);
    }

    #[tokio::test]
    async fn status_update_failure_leaves_entry_behind() {
        // The claim document was never created, so the status update fails
        // after the entry insert succeeded. The entry stays persisted and
        // the claim stays unreconciled: the known consistency gap.
        let service = ReconciliationService::new(MemoryDocumentStore::new());
        let mut claim = ClaimFixtures::settleable_claim();

        let result = service.reconcile(&mut claim).await;
        assert!(matches!(
            result,
            Err(ClaimError::Remote(PortError::NotFound { .. }))
        ));
        assert_eq!(claim.status, ClaimStatus::Unreconciled);
        assert_eq!(service.store().len().await, 1);
    }
}
