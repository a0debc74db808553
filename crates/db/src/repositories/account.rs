//! Account store: the chart of accounts.

use bookholder_core::ledger::{Account, validate_account_id};
use bookholder_shared::types::AccountId;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::entities::accounts;
use crate::error::{StoreError, StoreResult};

impl From<accounts::Model> for Account {
    fn from(model: accounts::Model) -> Self {
        Self::new(AccountId(model.id), model.name, model.kind)
    }
}

/// Account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns true if an account with `id` exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: AccountId) -> StoreResult<bool> {
        Ok(find_in(&self.db, id, false).await?.is_some())
    }

    /// Creates an account under its caller-assigned id.
    ///
    /// # Errors
    ///
    /// - `Validation` if the id is not positive
    /// - `AlreadyExists` if the id is taken
    pub async fn create(&self, account: &Account) -> StoreResult<Account> {
        validate_account_id(account.id)?;

        let txn = self.db.begin().await?;

        if find_in(&txn, account.id, false).await?.is_some() {
            return Err(already_exists(account.id));
        }

        let model = accounts::ActiveModel {
            id: Set(account.id.into_inner()),
            name: Set(account.name.clone()),
            kind: Set(account.kind.clone()),
        }
        .insert(&txn)
        .await
        .map_err(|e| StoreError::from_write(e, || format!("account {}", account.id)))?;

        txn.commit().await?;

        info!(account_id = %account.id, name = %account.name, "account created");
        Ok(model.into())
    }

    /// Renames or reclassifies an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub async fn update(&self, account: &Account) -> StoreResult<Account> {
        let result = accounts::Entity::update_many()
            .col_expr(accounts::Column::Name, Expr::value(account.name.clone()))
            .col_expr(accounts::Column::Kind, Expr::value(account.kind.clone()))
            .filter(accounts::Column::Id.eq(account.id.into_inner()))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(account.id));
        }

        info!(account_id = %account.id, "account updated");
        Ok(account.clone())
    }

    /// Deletes an account. Transactions that reference it are left in place.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub async fn delete(&self, id: AccountId) -> StoreResult<()> {
        let result = accounts::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!(account_id = %id, "account deleted");
        Ok(())
    }

    /// Fetches one account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub async fn get(&self, id: AccountId) -> StoreResult<Account> {
        debug!(account_id = %id, "fetching account");
        find_in(&self.db, id, false)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Lists the chart of accounts ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> StoreResult<Vec<Account>> {
        let models = accounts::Entity::find()
            .order_by_asc(accounts::Column::Id)
            .all(&self.db)
            .await?;

        debug!(count = models.len(), "listed accounts");
        Ok(models.into_iter().map(Into::into).collect())
    }
}

/// Looks up an account on any connection or open transaction.
///
/// With `lock` set the row is read `FOR SHARE` on backends that support it,
/// so it cannot be deleted before the surrounding transaction ends.
pub(crate) async fn find_in<C: ConnectionTrait>(
    conn: &C,
    id: AccountId,
    lock: bool,
) -> StoreResult<Option<accounts::Model>> {
    let mut query = accounts::Entity::find_by_id(id.into_inner());
    if lock {
        query = query.lock_shared();
    }
    Ok(query.one(conn).await?)
}

fn not_found(id: AccountId) -> StoreError {
    StoreError::NotFound(format!("account {id}"))
}

fn already_exists(id: AccountId) -> StoreError {
    StoreError::AlreadyExists(format!("account {id}"))
}
