//! Cross-component tests: services + shared store under concurrent callers.
//!
//! Verifies:
//! - concurrent withdrawals on one account never double-spend
//! - concurrent transfers lose no funds and no records
//! - balance equals opening balance plus committed deposits minus committed
//!   withdrawals, for any sequence of requests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use bank_core::{AccountId, LedgerError};
    use proptest::prelude::*;

    use crate::services::{AccountService, TransactionService};
    use crate::store::InMemoryLedgerStore;
    use crate::transaction::TransactionType;

    type Services = (
        AccountService<Arc<InMemoryLedgerStore>>,
        TransactionService<Arc<InMemoryLedgerStore>>,
    );

    fn setup() -> Services {
        let store = Arc::new(InMemoryLedgerStore::new());
        (AccountService::new(store.clone()), TransactionService::new(store))
    }

    #[test]
    fn concurrent_withdrawals_only_spend_what_exists() {
        let (accounts, transactions) = setup();
        let account = accounts.create_account("TestUser", 100.0).unwrap();
        let transactions = Arc::new(transactions);

        // 20 x 10 requested against a balance of 100.
        let handles: Vec<_> = (0..20)
            .map(|_| {
                let transactions = transactions.clone();
                let id = account.id;
                thread::spawn(move || {
                    transactions.create_transaction(id, TransactionType::Withdrawal, 10.0)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let succeeded = results.iter().filter(|r| r.is_ok()).count();
        let rejected = results
            .iter()
            .filter(|r| matches!(r, Err(LedgerError::InsufficientBalance)))
            .count();

        assert_eq!(succeeded, 10);
        assert_eq!(rejected, 10);
        assert_eq!(accounts.get_account(account.id).unwrap().balance, 0.0);
        assert_eq!(transactions.transactions_for_account(account.id).unwrap().len(), 10);
    }

    #[test]
    fn concurrent_mixed_transactions_settle_consistently() {
        let (accounts, transactions) = setup();
        let account = accounts.create_account("TestUser", 100.0).unwrap();
        let transactions = Arc::new(transactions);

        let requests = [
            (TransactionType::Deposit, 50.0),
            (TransactionType::Withdrawal, 20.0),
            (TransactionType::Deposit, 30.0),
            (TransactionType::Withdrawal, 60.0),
        ];

        let handles: Vec<_> = requests
            .into_iter()
            .map(|(kind, amount)| {
                let transactions = transactions.clone();
                let id = account.id;
                thread::spawn(move || transactions.create_transaction(id, kind, amount))
            })
            .collect();
        for h in handles {
            // Scheduling decides which withdrawals fit; the ledger must agree with itself.
            let _ = h.join().unwrap();
        }

        let history = transactions.transactions_for_account(account.id).unwrap();
        let expected = history.iter().fold(100.0, |balance, tx| match tx.kind {
            TransactionType::Deposit => balance + tx.amount,
            TransactionType::Withdrawal => balance - tx.amount,
        });
        let balance = accounts.get_account(account.id).unwrap().balance;
        assert_eq!(balance, expected);
        assert!(balance >= 0.0);
    }

    #[test]
    fn fifty_concurrent_transfers_lose_nothing() {
        let (accounts, transactions) = setup();
        let a = accounts.create_account("Alice", 1000.0).unwrap();
        let b = accounts.create_account("Bob", 100.0).unwrap();
        let transactions = Arc::new(transactions);

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let transactions = transactions.clone();
                let (from, to) = (a.id, b.id);
                thread::spawn(move || transactions.transfer(from, to, 10.0))
            })
            .collect();
        for h in handles {
            h.join().unwrap().unwrap();
        }

        assert_eq!(accounts.get_account(a.id).unwrap().balance, 500.0);
        assert_eq!(accounts.get_account(b.id).unwrap().balance, 600.0);

        let a_history = transactions.transactions_for_account(a.id).unwrap();
        let b_history = transactions.transactions_for_account(b.id).unwrap();
        assert_eq!(a_history.len(), 50);
        assert_eq!(b_history.len(), 50);
        assert!(a_history.iter().all(|t| t.kind == TransactionType::Withdrawal));
        assert!(b_history.iter().all(|t| t.kind == TransactionType::Deposit));
    }

    #[test]
    fn per_account_order_is_kept_while_other_accounts_are_busy() {
        let (accounts, transactions) = setup();
        let quiet = accounts.create_account("Quiet", 0.0).unwrap();
        let busy: Vec<AccountId> = (0..4)
            .map(|i| accounts.create_account(format!("Busy {i}"), 0.0).unwrap().id)
            .collect();
        let transactions = Arc::new(transactions);

        let noise: Vec<_> = busy
            .into_iter()
            .map(|id| {
                let transactions = transactions.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        transactions
                            .create_transaction(id, TransactionType::Deposit, 1.0)
                            .unwrap();
                    }
                })
            })
            .collect();

        for amount in 1..=100 {
            transactions
                .create_transaction(quiet.id, TransactionType::Deposit, amount as f64)
                .unwrap();
        }
        for h in noise {
            h.join().unwrap();
        }

        let amounts: Vec<f64> = transactions
            .transactions_for_account(quiet.id)
            .unwrap()
            .into_iter()
            .map(|t| t.amount)
            .collect();
        let expected: Vec<f64> = (1..=100).map(|a| a as f64).collect();
        assert_eq!(amounts, expected);
    }

    fn request() -> impl Strategy<Value = (TransactionType, f64)> {
        (
            prop_oneof![Just(TransactionType::Deposit), Just(TransactionType::Withdrawal)],
            // Whole amounts keep float sums exact.
            (1u32..1_000u32).prop_map(f64::from),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the balance is the opening balance plus committed deposits
        /// minus committed withdrawals, and never goes negative.
        #[test]
        fn balance_matches_committed_history(
            opening in (0u32..2_000u32).prop_map(f64::from),
            requests in prop::collection::vec(request(), 0..40)
        ) {
            let (accounts, transactions) = setup();
            let account = accounts.create_account("Prop", opening).unwrap();

            let mut expected = opening;
            let mut committed = 0usize;
            for (kind, amount) in requests {
                let before = accounts.get_account(account.id).unwrap().balance;
                match transactions.create_transaction(account.id, kind, amount) {
                    Ok(_) => {
                        committed += 1;
                        match kind {
                            TransactionType::Deposit => expected += amount,
                            TransactionType::Withdrawal => expected -= amount,
                        }
                    }
                    Err(err) => {
                        prop_assert_eq!(err, LedgerError::InsufficientBalance);
                        prop_assert_eq!(kind, TransactionType::Withdrawal);
                        prop_assert!(amount > before);
                    }
                }
                prop_assert!(accounts.get_account(account.id).unwrap().balance >= 0.0);
            }

            prop_assert_eq!(accounts.get_account(account.id).unwrap().balance, expected);
            prop_assert_eq!(
                transactions.transactions_for_account(account.id).unwrap().len(),
                committed
            );
        }
    }
}
