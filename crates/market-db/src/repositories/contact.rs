//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use market_core::entities::{Contact, NewContact};
use market_core::traits::{ContactRepository, RepoResult};

use crate::models::ContactModel;

use super::error::{contact_not_found, map_db_error};

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Contact>> {
        let result = sqlx::query_as::<_, ContactModel>(
            r"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Contact::from).collect())
    }

    #[instrument(skip(self, new))]
    async fn create(&self, new: &NewContact) -> RepoResult<Contact> {
        let result = sqlx::query_as::<_, ContactModel>(
            r"
            INSERT INTO contacts (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            ",
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.message)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Contact::from(result))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(contact_not_found(id));
        }

        Ok(())
    }
}
