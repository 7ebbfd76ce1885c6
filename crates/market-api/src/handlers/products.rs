//! Product handlers
//!
//! The catalog listing is public; everything else is admin-only.

use axum::{
    extract::{Path, State},
    Json,
};
use market_service::{
    ApiResponse, CreateProductRequest, MessageResponse, ProductData, ProductService, ProductsData,
    UpdateProductRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the product catalog
///
/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ProductsData>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list().await?;
    Ok(Json(ApiResponse::new(ProductsData { products })))
}

/// List the product catalog (admin)
///
/// GET /api/admin/products
pub async fn list_products_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<ApiResponse<ProductsData>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list().await?;
    Ok(Json(ApiResponse::new(ProductsData { products })))
}

/// Get one product (admin)
///
/// GET /api/admin/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse<ProductData>>> {
    let service = ProductService::new(state.service_context());
    let product = service.get(id).await?;
    Ok(Json(ApiResponse::new(ProductData { product })))
}

/// Create a product (admin)
///
/// POST /api/admin/products
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ApiResponse<ProductData>>>> {
    let service = ProductService::new(state.service_context());
    let product = service.create(request).await?;
    Ok(Created(Json(ApiResponse::with_message(
        "Product created successfully",
        ProductData { product },
    ))))
}

/// Update a product (admin)
///
/// PUT /api/admin/products/:id
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ApiResponse<ProductData>>> {
    let service = ProductService::new(state.service_context());
    let product = service.update(id, request).await?;
    Ok(Json(ApiResponse::with_message(
        "Product updated successfully",
        ProductData { product },
    )))
}

/// Delete a product (admin)
///
/// DELETE /api/admin/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ProductService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
