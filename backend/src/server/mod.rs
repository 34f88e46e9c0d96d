//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::{build_http_state, build_storage};

use actix_cors::Cors;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use std::sync::Arc;
use tracing::info;

use backend::Trace;
use backend::inbound::http::configure_api;
use backend::inbound::http::frontend::{FrontendAssets, frontend};
use backend::inbound::http::state::HttpState;

#[derive(Clone)]
struct AppDependencies {
    http_state: web::Data<HttpState>,
    frontend: web::Data<FrontendAssets>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        http_state,
        frontend: assets,
    } = deps;

    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header();

    App::new()
        .app_data(http_state)
        .app_data(assets.clone())
        .wrap(cors)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
        .configure(|cfg| assets.configure(cfg))
        .default_service(web::to(frontend))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let storage = build_storage(&config);
    info!(
        durable = storage.is_durable_store_available(),
        "storage selector ready"
    );
    let http_state = web::Data::new(build_http_state(
        &config,
        storage,
        Arc::new(DefaultClock),
    ));
    let frontend = web::Data::new(config.frontend.clone());
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            http_state: http_state.clone(),
            frontend: frontend.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    Ok(server)
}
