//! Car inventory handlers.
//!
//! ```text
//! GET    /api/cars
//! GET    /api/cars/available
//! GET    /api/cars/{id}
//! POST   /api/cars        (bearer token)
//! PUT    /api/cars/{id}   (bearer token)
//! DELETE /api/cars/{id}   (bearer token)
//! ```
//!
//! `/cars/available` must be registered ahead of `/cars/{id}` so the literal
//! segment is not captured as an identifier.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{
    ApiResult, CAR_NOT_FOUND_MESSAGE, Car, CarDraft, CarId, CarPatch, CarValidationError, Error,
    NewCar,
};

use super::auth::AuthenticatedUser;
use super::state::HttpState;

/// Message returned after a car is removed.
pub const CAR_DELETED_MESSAGE: &str = "Car deleted successfully";

/// Car fields accepted by create and update.
///
/// Only these keys are read; anything else in the body (for example `id` or
/// `createdAt`) is ignored.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub car_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<CarPayload> for CarDraft {
    fn from(value: CarPayload) -> Self {
        Self {
            model: value.model,
            car_type: value.car_type,
            year: value.year,
            daily_rate: value.daily_rate,
            status: value.status,
            description: value.description,
        }
    }
}

fn map_car_validation_error(err: CarValidationError) -> Error {
    let details = match &err {
        CarValidationError::MissingFields { fields } => json!({ "missing": fields }),
        CarValidationError::EmptyField { field } => json!({ "field": field }),
        CarValidationError::TooLong { field, max } => json!({ "field": field, "max": max }),
        CarValidationError::InvalidYear => json!({ "field": "year" }),
        CarValidationError::InvalidDailyRate => json!({ "field": "dailyRate" }),
        CarValidationError::InvalidStatus { value } => {
            json!({ "field": "status", "value": value })
        }
        CarValidationError::InvalidId => json!({ "field": "id" }),
    };
    Error::invalid_request(err.to_string()).with_details(details)
}

/// A malformed identifier cannot name a stored car.
fn parse_car_id(raw: &str) -> ApiResult<CarId> {
    CarId::new(raw).map_err(|_| Error::not_found(CAR_NOT_FOUND_MESSAGE))
}

/// List every car, newest first.
#[get("/cars")]
pub async fn list_cars(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Car>>> {
    Ok(web::Json(state.inventory.list().await?))
}

/// List cars whose status is `Available`, newest first.
#[get("/cars/available")]
pub async fn list_available_cars(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Car>>> {
    Ok(web::Json(state.inventory.list_available().await?))
}

/// Fetch one car.
#[get("/cars/{id}")]
pub async fn get_car(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Car>> {
    let id = parse_car_id(&path.into_inner())?;
    Ok(web::Json(state.inventory.get(&id).await?))
}

/// Create a car. All fields except `description` are required.
#[post("/cars")]
pub async fn create_car(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    payload: web::Json<CarPayload>,
) -> ApiResult<HttpResponse> {
    let fields = NewCar::try_from_draft(payload.into_inner().into())
        .map_err(map_car_validation_error)?;
    let car = state.inventory.create(fields).await?;
    info!(car_id = %car.id(), user_id = %user.claims().user_id(), "car created");
    Ok(HttpResponse::Created().json(car))
}

/// Merge the supplied fields into an existing car.
#[put("/cars/{id}")]
pub async fn update_car(
    _user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CarPayload>,
) -> ApiResult<web::Json<Car>> {
    let id = parse_car_id(&path.into_inner())?;
    let patch = CarPatch::try_from_draft(payload.into_inner().into())
        .map_err(map_car_validation_error)?;
    Ok(web::Json(state.inventory.update(&id, &patch).await?))
}

/// Remove a car.
#[delete("/cars/{id}")]
pub async fn delete_car(
    user: AuthenticatedUser,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_car_id(&path.into_inner())?;
    state.inventory.delete(&id).await?;
    info!(car_id = %id, user_id = %user.claims().user_id(), "car deleted");
    Ok(HttpResponse::Ok().json(json!({ "message": CAR_DELETED_MESSAGE })))
}
