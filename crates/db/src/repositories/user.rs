//! User store: login names and hashed credentials.

use bookholder_core::auth::{hash_password, verify_decoy, verify_password};
use bookholder_core::ledger::{User, ValidationError};
use bookholder_shared::types::UserId;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use tracing::{debug, info, warn};

use crate::entities::users;
use crate::error::{StoreError, StoreResult};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: UserId(model.id),
            name: model.name,
        }
    }
}

/// User repository for CRUD operations and credential checks.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user, storing only the hash of `password`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name or password is empty
    /// - `AlreadyExists` if the name is taken
    pub async fn create(&self, name: &str, password: &str) -> StoreResult<User> {
        let password_hash = hash_credentials(name, password)?;

        let model = users::ActiveModel {
            id: Set(UserId::new().into_inner()),
            name: Set(name.to_string()),
            password_hash: Set(password_hash),
        }
        .insert(&self.db)
        .await
        .map_err(|e| StoreError::from_write(e, || format!("user {name}")))?;

        info!(user_id = %model.id, name = %model.name, "user created");
        Ok(model.into())
    }

    /// Replaces a user's name and password.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name or password is empty
    /// - `NotFound` if no user has this id
    /// - `AlreadyExists` if another user holds the name
    pub async fn update(&self, id: UserId, name: &str, password: &str) -> StoreResult<User> {
        let password_hash = hash_credentials(name, password)?;

        let result = users::Entity::update_many()
            .col_expr(users::Column::Name, Expr::value(name))
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .filter(users::Column::Id.eq(id.into_inner()))
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::from_write(e, || format!("user {name}")))?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!(user_id = %id, "user updated");
        Ok(User {
            id,
            name: name.to_string(),
        })
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this id.
    pub async fn delete(&self, id: UserId) -> StoreResult<()> {
        let result = users::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// Fetches a user by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this id.
    pub async fn get(&self, id: UserId) -> StoreResult<User> {
        debug!(user_id = %id, "fetching user");
        users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or_else(|| not_found(id))
    }

    /// Fetches a user by login name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no user has this name.
    pub async fn get_by_name(&self, name: &str) -> StoreResult<User> {
        debug!(name, "fetching user by name");
        self.find_by_name(name)
            .await?
            .map(Into::into)
            .ok_or_else(|| StoreError::NotFound(format!("user {name}")))
    }

    /// Verifies a name/password pair.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` for an unknown name and for a wrong password alike.
    /// Both paths run one Argon2 verification.
    pub async fn authenticate(&self, name: &str, password: &str) -> StoreResult<User> {
        let Some(model) = self.find_by_name(name).await? else {
            verify_decoy(password)?;
            warn!(name, "authentication rejected");
            return Err(StoreError::AuthFailed);
        };

        if !verify_password(password, &model.password_hash)? {
            warn!(name, "authentication rejected");
            return Err(StoreError::AuthFailed);
        }

        debug!(user_id = %model.id, "user authenticated");
        Ok(model.into())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await?)
    }
}

fn hash_credentials(name: &str, password: &str) -> StoreResult<String> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }
    Ok(hash_password(password)?)
}

fn not_found(id: UserId) -> StoreError {
    StoreError::NotFound(format!("user {id}"))
}
