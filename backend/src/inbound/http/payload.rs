//! JSON body extraction settings.
//!
//! Malformed bodies are reported with the shared error payload rather than
//! Actix's plain-text default.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Upper bound on accepted JSON bodies.
pub const JSON_LIMIT_BYTES: usize = 64 * 1024;

/// JSON extractor configuration mapping every payload failure to a 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reason = err.to_string();
    Error::invalid_request("Invalid JSON body")
        .with_details(json!({ "reason": reason, "code": "invalid_json" }))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::Value;

    #[derive(Deserialize)]
    struct Body {
        #[serde(rename = "year")]
        _year: i32,
    }

    async fn echo(_body: web::Json<Body>) -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    #[rstest]
    #[case("{not json")]
    #[case(r#"{"year":"twenty"}"#)]
    #[actix_web::test]
    async fn malformed_bodies_become_invalid_request(#[case] raw: &'static str) {
        let app = actix_test::init_service(
            App::new()
                .app_data(json_config())
                .route("/", web::post().to(echo)),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/")
            .insert_header(("content-type", "application/json"))
            .set_payload(raw)
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["message"], "Invalid JSON body");
        assert_eq!(body["details"]["code"], "invalid_json");
    }
}
