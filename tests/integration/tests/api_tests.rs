//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, extract_token, fixtures::*, promote_to_admin,
    Envelope, ErrorEnvelope, TestServer,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;

fn dec(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Register a user and return (token, user)
async fn register_user(server: &TestServer) -> (String, UserResponse, RegisterRequest) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    let token = extract_token(&response).expect("register should set the token cookie");
    let body: Envelope<AuthData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    (token, body.data.user, request)
}

/// Register a user, promote it to admin, and log back in for an admin token
async fn register_admin(server: &TestServer) -> String {
    let request = RegisterRequest::unique();
    let response = server.post("/api/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    promote_to_admin(&request.email).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    extract_token(&response).expect("login should set the token cookie")
}

/// Create a product through the admin API and return its id
async fn create_product(server: &TestServer, admin_token: &str, price: Decimal) -> i64 {
    let request = CreateProductRequest::unique(price);
    let response = server
        .post_auth("/api/admin/products", admin_token, &request)
        .await
        .unwrap();
    let body: Envelope<ProductData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.data.product.id
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, user, request) = register_user(&server).await;

    assert!(!token.is_empty());
    assert_eq!(user.username, request.username);
    assert_eq!(user.email, request.email);
    // Client input never selects a role
    assert_eq!(user.role, "user");
    assert!(user.is_active);
}

#[tokio::test]
async fn test_register_duplicate_email_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, request) = register_user(&server).await;

    let mut duplicate = request.clone();
    duplicate.username = format!("{}x", request.username);
    let response = server.post("/api/auth/register", &duplicate).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(!body.success);
    assert!(body.message.contains("email"));
}

#[tokio::test]
async fn test_login_and_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user, request) = register_user(&server).await;

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let token = extract_token(&response).expect("login should set the token cookie");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/auth/profile", &token).await.unwrap();
    let body: Envelope<AuthData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.user.id, user.id);
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, request) = register_user(&server).await;

    let response = server
        .post(
            "/api/auth/login",
            &LoginRequest {
                email: request.email,
                password: "wrong-password".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_profile_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/auth/profile").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_disabled_account_cannot_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (_, user, request) = register_user(&server).await;

    let response = server
        .put_auth(
            &format!("/api/admin/users/{}/toggle-active", user.id),
            &admin_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/api/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(body.message.contains("disabled"));
}

// ============================================================================
// Checkout Tests
// ============================================================================

#[tokio::test]
async fn test_checkout_empty_cart_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _, _) = register_user(&server).await;

    let body = checkout_body_inline(&[], &AddressPayload::unique(), false);
    let response = server.post_auth("/api/user/checkout", &token, &body).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Cart is empty");
}

#[tokio::test]
async fn test_checkout_requires_address() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (token, _, _) = register_user(&server).await;
    let product_id = create_product(&server, &admin_token, dec(1000)).await;

    let body = serde_json::json!({
        "items": [{"id": product_id, "quantity": 1, "price": dec(1000)}],
    });
    let response = server.post_auth("/api/user/checkout", &token, &body).await.unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.message, "Shipping address is required");
}

#[tokio::test]
async fn test_checkout_computes_totals_and_creates_items() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (token, user, _) = register_user(&server).await;

    // Cart: 2 x 10.00 + 1 x 5.50, shipping omitted
    let first = create_product(&server, &admin_token, dec(1000)).await;
    let second = create_product(&server, &admin_token, dec(550)).await;

    let body = checkout_body_inline(
        &[(first, 2, dec(1000)), (second, 1, dec(550))],
        &AddressPayload::unique(),
        false,
    );
    let response = server.post_auth("/api/user/checkout", &token, &body).await.unwrap();
    let body: Envelope<OrderData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let order = body.data.order;
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.status, "delivering");
    assert_eq!(order.subtotal, dec(2550));
    assert_eq!(order.shipping_cost, dec(500));
    assert_eq!(order.total, dec(3050));
    assert_eq!(order.items.len(), 2);
    assert!(order.shipping_address.contains("Beirut"));
    // Country defaulted
    assert!(order.shipping_address.ends_with("Lebanon"));

    // Read-your-writes: the order is immediately visible with all its items
    let response = server.get_auth("/api/user/orders", &token).await.unwrap();
    let listed: Envelope<OrdersData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.data.orders.len(), 1);
    assert_eq!(listed.data.orders[0].id, order.id);
    assert_eq!(listed.data.orders[0].items.len(), 2);
}

#[tokio::test]
async fn test_checkout_with_saved_address() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (token, _, _) = register_user(&server).await;
    let product_id = create_product(&server, &admin_token, dec(1999)).await;

    let response = server
        .post_auth("/api/user/addresses", &token, &AddressPayload::unique())
        .await
        .unwrap();
    let saved: Envelope<AddressData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = checkout_body_with_address_id(&[(product_id, 1, dec(1999))], saved.data.address.id);
    let response = server.post_auth("/api/user/checkout", &token, &body).await.unwrap();
    let created: Envelope<OrderData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.data.order.shipping_address.contains("Hamra"));
}

#[tokio::test]
async fn test_checkout_with_foreign_address_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (owner_token, _, _) = register_user(&server).await;
    let (intruder_token, _, _) = register_user(&server).await;
    let product_id = create_product(&server, &admin_token, dec(1000)).await;

    let response = server
        .post_auth("/api/user/addresses", &owner_token, &AddressPayload::unique())
        .await
        .unwrap();
    let saved: Envelope<AddressData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Another user references the owner's address
    let body = checkout_body_with_address_id(&[(product_id, 1, dec(1000))], saved.data.address.id);
    let response = server
        .post_auth("/api/user/checkout", &intruder_token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // No order was created
    let response = server.get_auth("/api/user/orders", &intruder_token).await.unwrap();
    let listed: Envelope<OrdersData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.data.orders.is_empty());
}

#[tokio::test]
async fn test_order_item_price_survives_product_price_change() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (token, _, _) = register_user(&server).await;
    let product_id = create_product(&server, &admin_token, dec(1000)).await;

    let body = checkout_body_inline(&[(product_id, 1, dec(1000))], &AddressPayload::unique(), false);
    let response = server.post_auth("/api/user/checkout", &token, &body).await.unwrap();
    let created: Envelope<OrderData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let order_id = created.data.order.id;

    // Reprice the product after the sale
    let response = server
        .put_auth(
            &format!("/api/admin/products/{product_id}"),
            &admin_token,
            &serde_json::json!({"price": dec(9999)}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The captured unit price is unchanged
    let response = server
        .get_auth(&format!("/api/admin/orders/{order_id}"), &admin_token)
        .await
        .unwrap();
    let fetched: Envelope<OrderData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.order.items[0].price, dec(1000));
}

// ============================================================================
// Address Tests
// ============================================================================

#[tokio::test]
async fn test_default_address_swap_keeps_exactly_one_default() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (token, _, _) = register_user(&server).await;

    let response = server
        .post_auth("/api/user/addresses", &token, &AddressPayload::default_address())
        .await
        .unwrap();
    let first: Envelope<AddressData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(first.data.address.is_default);

    let response = server
        .post_auth("/api/user/addresses", &token, &AddressPayload::default_address())
        .await
        .unwrap();
    let second: Envelope<AddressData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/user/addresses", &token).await.unwrap();
    let listed: Envelope<AddressesData> = assert_json(response, StatusCode::OK).await.unwrap();
    let defaults: Vec<_> = listed
        .data
        .addresses
        .iter()
        .filter(|a| a.is_default)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.data.address.id);

    // Flip the default back through the dedicated endpoint
    let response = server
        .put_auth(
            &format!("/api/user/addresses/{}/default", first.data.address.id),
            &token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/user/addresses", &token).await.unwrap();
    let listed: Envelope<AddressesData> = assert_json(response, StatusCode::OK).await.unwrap();
    let defaults: Vec<_> = listed
        .data
        .addresses
        .iter()
        .filter(|a| a.is_default)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, first.data.address.id);
}

#[tokio::test]
async fn test_foreign_address_mutation_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (owner_token, _, _) = register_user(&server).await;
    let (intruder_token, _, _) = register_user(&server).await;

    let response = server
        .post_auth("/api/user/addresses", &owner_token, &AddressPayload::unique())
        .await
        .unwrap();
    let saved: Envelope<AddressData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/user/addresses/{}", saved.data.address.id),
            &intruder_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Order Status Tests
// ============================================================================

/// Create an order and return its id
async fn place_order(server: &TestServer, admin_token: &str, user_token: &str) -> i64 {
    let product_id = create_product(server, admin_token, dec(1000)).await;
    let body = checkout_body_inline(&[(product_id, 1, dec(1000))], &AddressPayload::unique(), false);
    let response = server
        .post_auth("/api/user/checkout", user_token, &body)
        .await
        .unwrap();
    let created: Envelope<OrderData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.data.order.id
}

#[tokio::test]
async fn test_update_status_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (user_token, _, _) = register_user(&server).await;
    let order_id = place_order(&server, &admin_token, &user_token).await;

    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &user_token,
            &serde_json::json!({"status": "delivered"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_update_status_rejects_unknown_value() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (user_token, _, _) = register_user(&server).await;
    let order_id = place_order(&server, &admin_token, &user_token).await;

    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &admin_token,
            &serde_json::json!({"status": "refunded"}),
        )
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.contains("Invalid status"));

    // Stored status untouched
    let response = server
        .get_auth(&format!("/api/admin/orders/{order_id}"), &admin_token)
        .await
        .unwrap();
    let fetched: Envelope<OrderData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.data.order.status, "delivering");
}

#[tokio::test]
async fn test_update_status_unknown_order_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;

    let response = server
        .put_auth(
            "/api/admin/orders/999999999/status",
            &admin_token,
            &serde_json::json!({"status": "delivered"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delivered_is_terminal_but_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (user_token, _, _) = register_user(&server).await;
    let order_id = place_order(&server, &admin_token, &user_token).await;

    // delivering -> delivered
    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &admin_token,
            &serde_json::json!({"status": "delivered"}),
        )
        .await
        .unwrap();
    let updated: Envelope<OrderData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.order.status, "delivered");

    // delivered -> delivered is an accepted no-op
    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &admin_token,
            &serde_json::json!({"status": "delivered"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Leaving the terminal state is rejected
    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &admin_token,
            &serde_json::json!({"status": "pending"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_cancel_from_non_terminal_state() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let (user_token, _, _) = register_user(&server).await;
    let order_id = place_order(&server, &admin_token, &user_token).await;

    let response = server
        .put_auth(
            &format!("/api/admin/orders/{order_id}/status"),
            &admin_token,
            &serde_json::json!({"status": "cancelled"}),
        )
        .await
        .unwrap();
    let updated: Envelope<OrderData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.order.status, "cancelled");
}

// ============================================================================
// Contact / Booking Tests
// ============================================================================

#[tokio::test]
async fn test_contact_form_submission() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let suffix = unique_suffix();
    let response = server
        .post(
            "/api/contact",
            &serde_json::json!({
                "name": format!("Visitor {suffix}"),
                "email": format!("visitor{suffix}@example.com"),
                "message": "Do you ship to Tripoli?",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_booking_submission_and_admin_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;
    let suffix = unique_suffix();

    let response = server
        .post(
            "/api/booking",
            &serde_json::json!({
                "name": format!("Visitor {suffix}"),
                "phone": "+961 1 234 567",
                "order_type": "bulk order",
                "appointment_date": "2026-09-01",
                "appointment_time": "14:30:00",
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/admin/bookings", &admin_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_product_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/products").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_product_crud_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (user_token, _, _) = register_user(&server).await;

    let response = server
        .post_auth(
            "/api/admin/products",
            &user_token,
            &CreateProductRequest::unique(dec(1000)),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_product_price_must_be_positive() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin_token = register_admin(&server).await;

    let response = server
        .post_auth(
            "/api/admin/products",
            &admin_token,
            &CreateProductRequest::unique(Decimal::ZERO),
        )
        .await
        .unwrap();
    let error: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.contains("Price"));
}
