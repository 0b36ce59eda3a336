use photokeep_axum::{ErrorResponse, PHOTO_DISPLAY_PATH};

use crate::helpers::spawn_app;

#[tokio::test]
async fn login_with_correct_password_redirects_to_photo_display() {
    let app = spawn_app().await;
    app.post_register("a@b.com", "123").await;

    let response = app.post_login("a@b.com", "123").await;

    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(
        response
            .headers()
            .get("Location")
            .expect("redirect has a Location header")
            .to_str()
            .unwrap(),
        PHOTO_DISPLAY_PATH
    );
}

#[tokio::test]
async fn login_with_incorrect_password_returns_invalid_password() {
    let app = spawn_app().await;
    app.post_register("a@b.com", "456").await;

    let response = app.post_login("a@b.com", "123").await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "Invalid password");
}

#[tokio::test]
async fn login_with_unknown_email_returns_user_not_found() {
    let app = spawn_app().await;

    let response = app.post_login("a@b.com", "123").await;

    assert_eq!(response.status().as_u16(), 401);
    let body = response.json::<ErrorResponse>().await.unwrap();
    assert_eq!(body.error, "User was not found");
}

#[tokio::test]
async fn login_with_malformed_email_is_rejected_before_lookup() {
    let app = spawn_app().await;

    let response = app.post_login("not-an-email", "123").await;

    assert_eq!(response.status().as_u16(), 422);
}
