//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers only depend on the driving ports carried by [`state::HttpState`];
//! the binary decides which adapters sit behind them.

pub mod accounts;
pub mod auth;
pub mod cars;
pub mod error;
pub mod frontend;
pub mod health;
pub mod payload;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

/// Register every `/api` route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::configure_api;
///
/// let app = App::new().service(web::scope("/api").configure(configure_api));
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(payload::json_config())
        .service(health::health)
        .service(accounts::register)
        .service(accounts::login)
        .service(cars::list_cars)
        .service(cars::list_available_cars)
        .service(cars::get_car)
        .service(cars::create_car)
        .service(cars::update_car)
        .service(cars::delete_car);
}
