// Transactional transfers on the accounts template table

#[path = "../helpers/mod.rs"]
mod helpers;

use cinescope_harness::accounts::AccountRow;
use cinescope_harness::cleanup::best_effort;
use cinescope_harness::AppError;
use helpers::*;

fn account_name(label: &str) -> String {
    format!("{}-{}", label, uuid::Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_transfer_moves_balance() {
    let db = live_fixtures().db_helper().await.unwrap();
    let accounts = db.accounts();
    let stan = accounts.create(&AccountRow::new(account_name("stan"), 1000)).await.unwrap();
    let bob = accounts.create(&AccountRow::new(account_name("bob"), 500)).await.unwrap();

    let outcome = accounts.transfer(&stan.user, &bob.user, 200).await.unwrap();
    assert_eq!(outcome.from.balance, 800);
    assert_eq!(outcome.to.balance, 700);

    best_effort("delete account", accounts.delete(&stan.user)).await;
    best_effort("delete account", accounts.delete(&bob.user)).await;
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_insufficient_funds_rolls_back() {
    let db = live_fixtures().db_helper().await.unwrap();
    let accounts = db.accounts();
    let stan = accounts.create(&AccountRow::new(account_name("stan"), 100)).await.unwrap();
    let bob = accounts.create(&AccountRow::new(account_name("bob"), 500)).await.unwrap();

    let err = accounts.transfer(&stan.user, &bob.user, 200).await.unwrap_err();
    assert!(
        matches!(err, AppError::InsufficientFunds { balance: 100, requested: 200, .. }),
        "{err:?}"
    );

    assert_eq!(accounts.find(&stan.user).await.unwrap(), Some(stan.clone()));
    assert_eq!(accounts.find(&bob.user).await.unwrap(), Some(bob.clone()));

    best_effort("delete account", accounts.delete(&stan.user)).await;
    best_effort("delete account", accounts.delete(&bob.user)).await;
}

#[tokio::test]
#[ignore = "Requires movies database"]
async fn test_transfer_to_missing_account_is_not_found() {
    let db = live_fixtures().db_helper().await.unwrap();
    let accounts = db.accounts();
    let stan = accounts.create(&AccountRow::new(account_name("stan"), 100)).await.unwrap();

    let err = accounts
        .transfer(&stan.user, &account_name("ghost"), 50)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(accounts.find(&stan.user).await.unwrap().map(|a| a.balance), Some(100));

    best_effort("delete account", accounts.delete(&stan.user)).await;
}
