//! Address entity <-> model mapper

use market_core::entities::Address;

use crate::models::AddressModel;

impl From<AddressModel> for Address {
    fn from(model: AddressModel) -> Self {
        Address {
            id: model.id,
            user_id: model.user_id,
            full_name: model.full_name,
            street_address: model.street_address,
            city: model.city,
            state: model.state,
            zip_code: model.zip_code,
            country: model.country,
            phone: model.phone,
            is_default: model.is_default,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
