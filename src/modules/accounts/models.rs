use sqlx::FromRow;

/// Row of `accounts_transaction_template`
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AccountRow {
    pub user: String,
    pub balance: i32,
}

impl AccountRow {
    pub fn new(user: impl Into<String>, balance: i32) -> Self {
        Self {
            user: user.into(),
            balance,
        }
    }
}

/// Balances of both accounts after a committed transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOutcome {
    pub from: AccountRow,
    pub to: AccountRow,
}
