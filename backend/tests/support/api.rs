//! In-process API harness over in-memory storage.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use backend::Trace;
use backend::domain::ports::BackendState;
use backend::inbound::http::configure_api;
use backend::test_support::{SwitchableProbe, memory_http_state, switchable_storage};
use mockable::DefaultClock;
use serde_json::{Value, json};

pub const SECRET: &str = "integration-secret";
pub const PASSWORD: &str = "pw123456";

/// Build the API over two in-memory backings switched by `probe`.
pub fn api(
    probe: Arc<SwitchableProbe>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = memory_http_state(switchable_storage(probe), SECRET, Arc::new(DefaultClock));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
}

/// API whose durable stand-in is unreachable.
pub fn fallback_api() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    api(Arc::new(SwitchableProbe::new(BackendState::Disconnected)))
}

/// Send `request` and decode the JSON body (`Null` when empty).
pub async fn send<S, B>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}

/// Attach `token` as a bearer credential.
pub fn authorised(request: TestRequest, token: &str) -> TestRequest {
    request.insert_header((AUTHORIZATION, format!("Bearer {token}")))
}

/// Register `email` and return the issued token.
pub async fn register<S, B>(app: &S, email: &str) -> String
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "email": email, "password": PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body["token"].as_str().expect("token").to_owned()
}

/// Car body with every required field.
pub fn car(model: &str, status: &str) -> Value {
    json!({
        "model": model,
        "type": "Sedan",
        "year": 2022,
        "dailyRate": 45.0,
        "status": status,
        "description": "Integration fixture",
    })
}
