//! Contact entity <-> model mapper

use market_core::entities::Contact;

use crate::models::ContactModel;

impl From<ContactModel> for Contact {
    fn from(model: ContactModel) -> Self {
        Contact {
            id: model.id,
            name: model.name,
            email: model.email,
            message: model.message,
            created_at: model.created_at,
        }
    }
}
