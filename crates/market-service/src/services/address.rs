//! Address book service
//!
//! Every mutation checks ownership first; another user's address id surfaces
//! as not-found so existence is never leaked.

use market_core::entities::{NewAddress, DEFAULT_COUNTRY};
use market_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{AddressPayload, AddressResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Address book service
pub struct AddressService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AddressService<'a> {
    /// Create a new AddressService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's addresses, default first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i64) -> ServiceResult<Vec<AddressResponse>> {
        let addresses = self.ctx.address_repo().find_by_user(user_id).await?;
        Ok(addresses.iter().map(AddressResponse::from).collect())
    }

    /// Create an address for the caller
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        user_id: i64,
        payload: AddressPayload,
    ) -> ServiceResult<AddressResponse> {
        let new = to_new_address(user_id, payload);
        let address = self.ctx.address_repo().create(&new).await?;

        info!(address_id = address.id, user_id, "Address created");
        Ok(AddressResponse::from(&address))
    }

    /// Update one of the caller's addresses
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        user_id: i64,
        address_id: i64,
        payload: AddressPayload,
    ) -> ServiceResult<AddressResponse> {
        self.require_owned(user_id, address_id).await?;

        let changes = to_new_address(user_id, payload);
        let address = self.ctx.address_repo().update(address_id, &changes).await?;

        info!(address_id, user_id, "Address updated");
        Ok(AddressResponse::from(&address))
    }

    /// Delete one of the caller's addresses
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, address_id: i64) -> ServiceResult<()> {
        self.require_owned(user_id, address_id).await?;

        self.ctx.address_repo().delete(address_id).await?;

        info!(address_id, user_id, "Address deleted");
        Ok(())
    }

    /// Make one of the caller's addresses the default
    #[instrument(skip(self))]
    pub async fn set_default(
        &self,
        user_id: i64,
        address_id: i64,
    ) -> ServiceResult<AddressResponse> {
        self.require_owned(user_id, address_id).await?;

        self.ctx
            .address_repo()
            .set_default(user_id, address_id)
            .await?;

        let address = self
            .ctx
            .address_repo()
            .find_by_id(address_id)
            .await?
            .ok_or(DomainError::AddressNotFound(address_id))?;

        info!(address_id, user_id, "Default address updated");
        Ok(AddressResponse::from(&address))
    }

    /// Resolve the address and require that `user_id` owns it. A missing row
    /// and a foreign row produce the same not-found error.
    async fn require_owned(&self, user_id: i64, address_id: i64) -> ServiceResult<()> {
        match self.ctx.address_repo().find_by_id(address_id).await? {
            Some(address) if address.is_owned_by(user_id) => Ok(()),
            _ => Err(ServiceError::not_found("Address", address_id.to_string())),
        }
    }
}

/// Apply the country default and shape the payload for the repository
pub(crate) fn to_new_address(user_id: i64, payload: AddressPayload) -> NewAddress {
    NewAddress {
        user_id,
        full_name: payload.full_name,
        street_address: payload.street_address,
        city: payload.city,
        state: payload.state,
        zip_code: payload.zip_code,
        country: payload
            .country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        phone: payload.phone,
        is_default: payload.is_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_defaults_when_missing() {
        let payload = AddressPayload {
            full_name: "Amira K".to_string(),
            street_address: "5 Bliss St".to_string(),
            city: "Beirut".to_string(),
            state: None,
            zip_code: None,
            country: None,
            phone: None,
            is_default: false,
        };
        let new = to_new_address(3, payload);
        assert_eq!(new.country, "Lebanon");
        assert_eq!(new.user_id, 3);
    }

    #[test]
    fn test_country_defaults_when_blank() {
        let payload = AddressPayload {
            full_name: "Amira K".to_string(),
            street_address: "5 Bliss St".to_string(),
            city: "Beirut".to_string(),
            state: None,
            zip_code: None,
            country: Some("   ".to_string()),
            phone: None,
            is_default: false,
        };
        assert_eq!(to_new_address(3, payload).country, "Lebanon");
    }

    #[test]
    fn test_explicit_country_kept() {
        let payload = AddressPayload {
            full_name: "Amira K".to_string(),
            street_address: "5 Bliss St".to_string(),
            city: "Accra".to_string(),
            state: None,
            zip_code: None,
            country: Some("Ghana".to_string()),
            phone: None,
            is_default: true,
        };
        let new = to_new_address(3, payload);
        assert_eq!(new.country, "Ghana");
        assert!(new.is_default);
    }
}
