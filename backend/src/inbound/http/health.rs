//! Service health report.
//!
//! `GET /api/health` always answers 200; the body says which backing is
//! serving requests right now.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::HttpState;

const SERVER_STATUS: &str = "AutoRent API is running";
const DURABLE_LABEL: &str = "PostgreSQL (connected)";
const FALLBACK_LABEL: &str = "In-Memory Storage";

/// Body returned by the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub server: String,
    pub database: String,
    /// 0 disconnected, 1 connected, 2 connecting.
    pub db_state: u8,
    pub timestamp: DateTime<Utc>,
}

/// Report liveness and the active storage mode.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::health::health;
///
/// let app = App::new().service(health);
/// ```
#[get("/health")]
pub async fn health(state: web::Data<HttpState>) -> HttpResponse {
    let backend = state.storage.state();
    let database = if backend.is_available() {
        DURABLE_LABEL
    } else {
        FALLBACK_LABEL
    };
    let report = HealthReport {
        status: "OK".to_owned(),
        server: SERVER_STATUS.to_owned(),
        database: database.to_owned(),
        db_state: backend.code(),
        timestamp: state.clock.utc(),
    };
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{BackendState, MockDurableStoreProbe};
    use crate::inbound::http::test_utils::test_state;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case(BackendState::Connected, DURABLE_LABEL, 1)]
    #[case(BackendState::Disconnected, FALLBACK_LABEL, 0)]
    #[case(BackendState::Connecting, FALLBACK_LABEL, 2)]
    #[actix_web::test]
    async fn reports_active_storage(
        #[case] backend: BackendState,
        #[case] label: &str,
        #[case] code: u8,
    ) {
        let mut probe = MockDurableStoreProbe::new();
        probe.expect_state().return_const(backend);
        let mut state = test_state();
        state.storage = Arc::new(probe);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api").service(health)),
        )
        .await;

        let request = actix_test::TestRequest::get().uri("/api/health").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|value| value.to_str().ok()),
            Some("no-store")
        );
        let report: HealthReport = actix_test::read_body_json(response).await;
        assert_eq!(report.status, "OK");
        assert_eq!(report.server, SERVER_STATUS);
        assert_eq!(report.database, label);
        assert_eq!(report.db_state, code);
    }
}
