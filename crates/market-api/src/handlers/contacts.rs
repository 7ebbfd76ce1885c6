//! Contact form handlers

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    ApiResponse, ContactData, ContactRequest, ContactService, ContactsData, MessageResponse,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit the contact form (public)
///
/// POST /api/contact
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Created<Json<ApiResponse<ContactData>>>> {
    let service = ContactService::new(state.service_context());
    let contact = service.create(request).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "Contact submission received successfully",
        ContactData { contact },
    ))))
}

/// List contact submissions (admin)
///
/// GET /api/admin/contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<ContactsData>>> {
    let service = ContactService::new(state.service_context());
    let contacts = service.list().await?;
    Ok(Json(ApiResponse::new(ContactsData { contacts })))
}

/// Delete a contact submission (admin)
///
/// DELETE /api/admin/contacts/:id
pub async fn delete_contact(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ContactService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Contact deleted successfully")))
}
