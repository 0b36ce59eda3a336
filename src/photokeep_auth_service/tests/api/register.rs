use fake::{Fake, faker::internet::en::SafeEmail};
use photokeep_axum::ErrorResponse;

use crate::helpers::spawn_app;

#[tokio::test]
async fn register_new_user_returns_created() {
    let app = spawn_app().await;
    let email: String = SafeEmail().fake();

    let response = app.post_register(&email, "123").await;

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn registered_user_can_log_in() {
    let app = spawn_app().await;
    let email: String = SafeEmail().fake();
    app.post_register(&email, "123").await;

    let response = app.post_login(&email, "123").await;

    assert_eq!(response.status().as_u16(), 303);
}

#[tokio::test]
async fn register_with_existing_email_returns_duplicate_message() {
    let app = spawn_app().await;
    app.post_register("a@b.com", "123").await;

    let response = app.post_register("a@b.com", "123").await;

    assert_eq!(response.status().as_u16(), 409);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "This email adress is already registered");
}

#[tokio::test]
async fn register_with_empty_password_returns_invalid_user_details() {
    let app = spawn_app().await;

    let response = app.post_register("a@b.com", "").await;

    assert_eq!(response.status().as_u16(), 422);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Invalid user details");
}

#[tokio::test]
async fn register_with_malformed_email_returns_invalid_user_details() {
    let app = spawn_app().await;

    let response = app.post_register("ab.com", "123").await;

    assert_eq!(response.status().as_u16(), 422);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Invalid user details");
}
