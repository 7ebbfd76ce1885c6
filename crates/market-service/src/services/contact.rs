//! Contact form service

use market_core::entities::NewContact;
use tracing::{info, instrument};

use crate::dto::{ContactRequest, ContactResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Contact form service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a contact form submission (public)
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: ContactRequest) -> ServiceResult<ContactResponse> {
        let contact = self
            .ctx
            .contact_repo()
            .create(&NewContact {
                name: request.name,
                email: request.email,
                message: request.message,
            })
            .await?;

        info!(contact_id = contact.id, "Contact submission received");
        Ok(ContactResponse::from(&contact))
    }

    /// List all submissions (admin)
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ContactResponse>> {
        let contacts = self.ctx.contact_repo().list().await?;
        Ok(contacts.iter().map(ContactResponse::from).collect())
    }

    /// Delete a submission (admin)
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.contact_repo().delete(id).await?;

        info!(contact_id = id, "Contact submission deleted");
        Ok(())
    }
}
