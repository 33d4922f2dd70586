// Transfers between rows of `accounts_transaction_template`, used to check
// that a failed transfer leaves both balances untouched.

use sqlx::{PgPool, Postgres, Transaction};

use super::models::{AccountRow, TransferOutcome};
use crate::core::{AppError, Result};

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, account: &AccountRow) -> Result<AccountRow> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts_transaction_template ("user", balance)
            VALUES ($1, $2)
            RETURNING "user", balance
            "#,
        )
        .bind(&account.user)
        .bind(account.balance)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(user = %row.user, balance = row.balance, "inserted account row");
        Ok(row)
    }

    pub async fn find(&self, user: &str) -> Result<Option<AccountRow>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"SELECT "user", balance FROM accounts_transaction_template WHERE "user" = $1"#,
        )
        .bind(user)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn delete(&self, user: &str) -> Result<bool> {
        let result =
            sqlx::query(r#"DELETE FROM accounts_transaction_template WHERE "user" = $1"#)
                .bind(user)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move `amount` from one account to another in a single transaction
    ///
    /// Both rows are locked before either balance changes. When the source
    /// cannot cover the amount the transaction is rolled back and
    /// [`AppError::InsufficientFunds`] is returned.
    pub async fn transfer(&self, from: &str, to: &str, amount: i32) -> Result<TransferOutcome> {
        if amount <= 0 {
            return Err(AppError::validation("amount: must be positive"));
        }
        if from == to {
            return Err(AppError::validation("to: must differ from the source account"));
        }

        let mut tx = self.pool.begin().await?;

        // Lock in a stable order so concurrent opposite transfers cannot deadlock.
        let (first, second) = if from < to { (from, to) } else { (to, from) };
        let first_row = lock_account(&mut tx, first).await?;
        let second_row = lock_account(&mut tx, second).await?;
        let source = if first_row.user == from {
            &first_row
        } else {
            &second_row
        };

        if source.balance < amount {
            tracing::warn!(
                from,
                to,
                amount,
                balance = source.balance,
                "transfer rejected, rolling back"
            );
            let err = AppError::InsufficientFunds {
                account: from.to_string(),
                balance: source.balance,
                requested: amount,
            };
            tx.rollback().await?;
            return Err(err);
        }

        let from_row = adjust_balance(&mut tx, from, -amount).await?;
        let to_row = adjust_balance(&mut tx, to, amount).await?;
        tx.commit().await?;

        tracing::info!(from, to, amount, "transfer committed");

        Ok(TransferOutcome {
            from: from_row,
            to: to_row,
        })
    }
}

async fn lock_account(tx: &mut Transaction<'_, Postgres>, user: &str) -> Result<AccountRow> {
    sqlx::query_as::<_, AccountRow>(
        r#"
        SELECT "user", balance FROM accounts_transaction_template
        WHERE "user" = $1
        FOR UPDATE
        "#,
    )
    .bind(user)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| AppError::not_found(format!("account {}", user)))
}

async fn adjust_balance(
    tx: &mut Transaction<'_, Postgres>,
    user: &str,
    delta: i32,
) -> Result<AccountRow> {
    let row = sqlx::query_as::<_, AccountRow>(
        r#"
        UPDATE accounts_transaction_template
        SET balance = balance + $2
        WHERE "user" = $1
        RETURNING "user", balance
        "#,
    )
    .bind(user)
    .bind(delta)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}
