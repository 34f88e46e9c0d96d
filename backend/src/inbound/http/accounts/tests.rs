//! Tests for registration and login handlers.

use super::*;
use crate::domain::ports::MockCredentialStore;
use crate::inbound::http::test_utils::{test_state, test_state_with};
use std::sync::Arc;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(crate::inbound::http::payload::json_config())
        .service(web::scope("/api").service(register).service(login))
}

fn request(uri: &str, body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri(uri).set_json(body)
}

#[actix_web::test]
async fn register_then_login_returns_tokens_for_the_same_user() {
    let state = test_state();
    let tokens = state.tokens.clone();
    let app = actix_test::init_service(test_app(state)).await;
    let credentials = json!({ "email": "a@b.com", "password": "pw123456" });

    let response =
        actix_test::call_service(&app, request("/api/auth/register", credentials.clone()).to_request()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let registered: AuthResponse = actix_test::read_body_json(response).await;
    assert_eq!(registered.message, REGISTERED_MESSAGE);
    assert_eq!(registered.user.email().as_ref(), "a@b.com");

    let response = actix_test::call_service(&app, request("/api/auth/login", credentials).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let logged_in: AuthResponse = actix_test::read_body_json(response).await;
    assert_eq!(logged_in.message, LOGGED_IN_MESSAGE);
    assert_eq!(logged_in.user.id(), registered.user.id());

    let claims = tokens.verify(&logged_in.token).expect("token verifies");
    assert_eq!(claims.email().as_ref(), "a@b.com");
    assert_eq!(claims.user_id(), registered.user.id());
}

#[actix_web::test]
async fn duplicate_registration_is_a_bad_request() {
    let app = actix_test::init_service(test_app(test_state())).await;
    let credentials = json!({ "email": "a@b.com", "password": "pw123456" });
    let first =
        actix_test::call_service(&app, request("/api/auth/register", credentials.clone()).to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = actix_test::call_service(&app, request("/api/auth/register", credentials).to_request()).await;

    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(second).await;
    assert_eq!(body["message"], "User already exists");
    assert_eq!(body["code"], "conflict");
}

#[rstest]
#[case(json!({ "email": "a@b.com" }), "password")]
#[case(json!({ "password": "pw123456" }), "email")]
#[case(json!({ "email": "   ", "password": "pw123456" }), "email")]
#[actix_web::test]
async fn missing_fields_are_rejected(#[case] body: Value, #[case] field: &str) {
    let app = actix_test::init_service(test_app(test_state())).await;

    let response = actix_test::call_service(&app, request("/api/auth/register", body).to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Email and password required");
    assert_eq!(body["details"]["field"], field);
}

#[rstest]
#[case("a@b.com", "wrong-password")]
#[case("nobody@b.com", "pw123456")]
#[actix_web::test]
async fn login_mismatch_is_indistinguishable(#[case] email: &str, #[case] password: &str) {
    let app = actix_test::init_service(test_app(test_state())).await;
    let credentials = json!({ "email": "a@b.com", "password": "pw123456" });
    let registered =
        actix_test::call_service(&app, request("/api/auth/register", credentials).to_request())
            .await;
    assert_eq!(registered.status(), StatusCode::CREATED);

    let response = actix_test::call_service(
        &app,
        request(
            "/api/auth/login",
            json!({ "email": email, "password": password }),
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
    assert_eq!(body["code"], "invalid_credentials");
}

#[actix_web::test]
async fn store_failure_during_login_is_internal() {
    let mut credentials = MockCredentialStore::new();
    credentials
        .expect_verify()
        .times(1)
        .returning(|_| Err(Error::internal("users query failed")));
    let state = test_state_with(|ports| ports.credentials = Arc::new(credentials));
    let app = actix_test::init_service(test_app(state)).await;

    let response = actix_test::call_service(
        &app,
        request(
            "/api/auth/login",
            json!({ "email": "a@b.com", "password": "pw123456" }),
        )
        .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["message"], "users query failed");
    assert!(body.get("token").is_none());
}
