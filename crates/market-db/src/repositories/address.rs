//! PostgreSQL implementation of AddressRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::{Address, NewAddress};
use market_core::traits::{AddressRepository, RepoResult};

use crate::models::AddressModel;

use super::error::{address_not_found, map_db_error};

/// PostgreSQL implementation of AddressRepository
#[derive(Clone)]
pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    /// Create a new PgAddressRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Address>> {
        let result = sqlx::query_as::<_, AddressModel>(
            r"
            SELECT id, user_id, full_name, street_address, city, state, zip_code,
                   country, phone, is_default, created_at, updated_at
            FROM addresses
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Address::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Address>> {
        let result = sqlx::query_as::<_, AddressModel>(
            r"
            SELECT id, user_id, full_name, street_address, city, state, zip_code,
                   country, phone, is_default, created_at, updated_at
            FROM addresses
            WHERE user_id = $1
            ORDER BY is_default DESC, created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Address::from).collect())
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewAddress) -> RepoResult<Address> {
        // The clear-old/insert-new pair must commit together so that no
        // reader ever sees two defaults (or none) for this user.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if new.is_default {
            sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1")
                .bind(new.user_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let result = sqlx::query_as::<_, AddressModel>(
            r"
            INSERT INTO addresses (user_id, full_name, street_address, city, state,
                                   zip_code, country, phone, is_default)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, full_name, street_address, city, state, zip_code,
                      country, phone, is_default, created_at, updated_at
            ",
        )
        .bind(new.user_id)
        .bind(&new.full_name)
        .bind(&new.street_address)
        .bind(&new.city)
        .bind(&new.state)
        .bind(&new.zip_code)
        .bind(&new.country)
        .bind(&new.phone)
        .bind(new.is_default)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(Address::from(result))
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: &NewAddress) -> RepoResult<Address> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if changes.is_default {
            sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1 AND id != $2")
                .bind(changes.user_id)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        let result = sqlx::query_as::<_, AddressModel>(
            r"
            UPDATE addresses
            SET full_name = $2, street_address = $3, city = $4, state = $5,
                zip_code = $6, country = $7, phone = $8, is_default = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, user_id, full_name, street_address, city, state, zip_code,
                      country, phone, is_default, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&changes.full_name)
        .bind(&changes.street_address)
        .bind(&changes.city)
        .bind(&changes.state)
        .bind(&changes.zip_code)
        .bind(&changes.country)
        .bind(&changes.phone)
        .bind(changes.is_default)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(model) = result else {
            return Err(address_not_found(id));
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(Address::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(address_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_default(&self, user_id: i64, address_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("UPDATE addresses SET is_default = FALSE WHERE user_id = $1 AND id != $2")
            .bind(user_id)
            .bind(address_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE addresses
            SET is_default = TRUE, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(address_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(address_not_found(address_id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
