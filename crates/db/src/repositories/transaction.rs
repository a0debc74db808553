//! Transaction store: double-entry movements between two accounts.
//!
//! Writes validate the pure rules first, then check that both referenced
//! accounts exist inside the same database transaction as the write.

use bookholder_core::ledger::{
    Period, Transaction, TransactionInput, ValidatedTransaction, ValidationError, net_movement,
    validate_transaction,
};
use bookholder_shared::types::{AccountId, Amount, TransactionId};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::account::find_in;
use crate::entities::transactions;
use crate::error::{StoreError, StoreResult};

impl From<transactions::Model> for Transaction {
    fn from(model: transactions::Model) -> Self {
        Self {
            id: TransactionId(model.id),
            amount: Amount::from_minor_units(model.amount),
            debit: model.debit,
            offset_account: AccountId(model.offset_account),
            account: AccountId(model.account),
            date: model.date,
            description: model.description,
        }
    }
}

/// Transaction repository for CRUD and period queries.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns true if a transaction with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: TransactionId) -> StoreResult<bool> {
        Ok(transactions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .is_some())
    }

    /// Records a new transaction and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// - `Validation` if a ledger rule fails or either account is missing
    pub async fn create(&self, input: &TransactionInput) -> StoreResult<Transaction> {
        let validated = validate_transaction(input)?;

        let txn = self.db.begin().await?;
        check_accounts(&txn, &validated).await?;

        let model = transactions::ActiveModel {
            id: NotSet,
            amount: Set(validated.minor_units),
            debit: Set(validated.debit),
            offset_account: Set(validated.offset_account.into_inner()),
            account: Set(validated.account.into_inner()),
            date: Set(validated.date),
            description: Set(validated.description),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            transaction_id = model.id,
            account = model.account,
            offset_account = model.offset_account,
            "transaction created"
        );
        Ok(model.into())
    }

    /// Replaces every field of an existing transaction.
    ///
    /// # Errors
    ///
    /// - `Validation` if a ledger rule fails or either account is missing
    /// - `NotFound` if no transaction has this id
    pub async fn update(
        &self,
        id: TransactionId,
        input: &TransactionInput,
    ) -> StoreResult<Transaction> {
        let validated = validate_transaction(input)?;

        let txn = self.db.begin().await?;

        if transactions::Entity::find_by_id(id.into_inner())
            .one(&txn)
            .await?
            .is_none()
        {
            return Err(not_found(id));
        }
        check_accounts(&txn, &validated).await?;

        transactions::Entity::update_many()
            .col_expr(transactions::Column::Amount, Expr::value(validated.minor_units))
            .col_expr(transactions::Column::Debit, Expr::value(validated.debit))
            .col_expr(
                transactions::Column::OffsetAccount,
                Expr::value(validated.offset_account.into_inner()),
            )
            .col_expr(
                transactions::Column::Account,
                Expr::value(validated.account.into_inner()),
            )
            .col_expr(transactions::Column::Date, Expr::value(validated.date))
            .col_expr(
                transactions::Column::Description,
                Expr::value(validated.description.clone()),
            )
            .filter(transactions::Column::Id.eq(id.into_inner()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(transaction_id = %id, "transaction updated");
        Ok(Transaction {
            id,
            amount: validated.amount,
            debit: validated.debit,
            offset_account: validated.offset_account,
            account: validated.account,
            date: validated.date,
            description: validated.description,
        })
    }

    /// Deletes a transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this id.
    pub async fn delete(&self, id: TransactionId) -> StoreResult<()> {
        let result = transactions::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!(transaction_id = %id, "transaction deleted");
        Ok(())
    }

    /// Fetches one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no transaction has this id.
    pub async fn get(&self, id: TransactionId) -> StoreResult<Transaction> {
        debug!(transaction_id = %id, "fetching transaction");
        transactions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Lists the transactions booked on `account` within a year, optionally
    /// narrowed to one month, in insertion order.
    ///
    /// # Errors
    ///
    /// - `Validation` if `year` is 0 or out of range, or `month` is not 1-12
    pub async fn list(
        &self,
        account: AccountId,
        year: i32,
        month: Option<u32>,
    ) -> StoreResult<Vec<Transaction>> {
        let period = Period::new(year, month)?;
        let side = Condition::all().add(transactions::Column::Account.eq(account.into_inner()));

        self.list_in(side, &period, account).await
    }

    /// Lists the transactions where `account` is either side, within a year
    /// optionally narrowed to one month, in insertion order.
    ///
    /// # Errors
    ///
    /// Same as [`TransactionRepository::list`].
    pub async fn list_involving(
        &self,
        account: AccountId,
        year: i32,
        month: Option<u32>,
    ) -> StoreResult<Vec<Transaction>> {
        let period = Period::new(year, month)?;
        let side = Condition::any()
            .add(transactions::Column::Account.eq(account.into_inner()))
            .add(transactions::Column::OffsetAccount.eq(account.into_inner()));

        self.list_in(side, &period, account).await
    }

    /// Net movement booked on `account` over the period: debits add,
    /// credits subtract.
    ///
    /// # Errors
    ///
    /// Same as [`TransactionRepository::list`].
    pub async fn balance(
        &self,
        account: AccountId,
        year: i32,
        month: Option<u32>,
    ) -> StoreResult<Amount> {
        let transactions = self.list(account, year, month).await?;
        Ok(net_movement(account, &transactions))
    }

    async fn list_in(
        &self,
        side: Condition,
        period: &Period,
        account: AccountId,
    ) -> StoreResult<Vec<Transaction>> {
        let models = transactions::Entity::find()
            .filter(side)
            .filter(transactions::Column::Date.gte(period.start()))
            .filter(transactions::Column::Date.lt(period.end()))
            .order_by_asc(transactions::Column::Id)
            .all(&self.db)
            .await?;

        debug!(account = %account, period = %period, count = models.len(), "listed transactions");
        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// Checks both sides of a movement exist, holding a shared lock on each row
/// until `txn` ends.
async fn check_accounts(
    txn: &DatabaseTransaction,
    validated: &ValidatedTransaction,
) -> StoreResult<()> {
    if find_in(txn, validated.account, true).await?.is_none() {
        return Err(ValidationError::AccountMissing(validated.account).into());
    }
    if find_in(txn, validated.offset_account, true).await?.is_none() {
        return Err(ValidationError::OffsetAccountMissing(validated.offset_account).into());
    }
    Ok(())
}

fn not_found(id: TransactionId) -> StoreError {
    StoreError::NotFound(format!("transaction {id}"))
}
