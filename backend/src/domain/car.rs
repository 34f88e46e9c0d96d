//! Car inventory model.
//!
//! Purpose: describe a rentable vehicle and the validated inputs used to
//! create or partially update one. Constructors enforce the field rules so
//! every backing store receives the same, already-checked values.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised while building car inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarValidationError {
    InvalidId,
    MissingFields { fields: Vec<&'static str> },
    EmptyField { field: &'static str },
    TooLong { field: &'static str, max: usize },
    InvalidYear,
    InvalidDailyRate,
    InvalidStatus { value: String },
}

impl fmt::Display for CarValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "car id must be a valid UUID"),
            Self::MissingFields { .. } => write!(f, "Missing required car fields"),
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::InvalidYear => write!(f, "year must be a positive integer"),
            Self::InvalidDailyRate => write!(f, "dailyRate must be a non-negative number"),
            Self::InvalidStatus { value } => write!(
                f,
                "status `{value}` is not one of Available, Rented, Maintenance"
            ),
        }
    }
}

impl std::error::Error for CarValidationError {}

/// Stable car identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CarId(Uuid);

impl CarId {
    /// Parse a car identifier from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, CarValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| CarValidationError::InvalidId)
    }

    /// Generate a new random [`CarId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CarId> for String {
    fn from(value: CarId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CarId {
    type Error = CarValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Rental status of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
}

impl CarStatus {
    /// Canonical string form, as stored and serialised.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarStatus {
    type Err = CarValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Available" => Ok(Self::Available),
            "Rented" => Ok(Self::Rented),
            "Maintenance" => Ok(Self::Maintenance),
            other => Err(CarValidationError::InvalidStatus {
                value: other.to_owned(),
            }),
        }
    }
}

/// Unvalidated car fields as supplied by a caller.
///
/// Every field is optional so the same shape serves create (all required
/// except `description`) and partial update (any subset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarDraft {
    pub model: Option<String>,
    pub car_type: Option<String>,
    pub year: Option<i32>,
    pub daily_rate: Option<f64>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Longest `model` or `type`, in characters; matches the column width.
pub const MAX_CAR_TEXT_LEN: usize = 255;

fn required_text(value: String, field: &'static str) -> Result<String, CarValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CarValidationError::EmptyField { field });
    }
    if trimmed.chars().count() > MAX_CAR_TEXT_LEN {
        return Err(CarValidationError::TooLong {
            field,
            max: MAX_CAR_TEXT_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

fn validate_year(year: i32) -> Result<i32, CarValidationError> {
    if year <= 0 {
        return Err(CarValidationError::InvalidYear);
    }
    Ok(year)
}

fn validate_daily_rate(rate: f64) -> Result<f64, CarValidationError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(CarValidationError::InvalidDailyRate);
    }
    Ok(rate)
}

/// Validated fields for a car that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    model: String,
    car_type: String,
    year: i32,
    daily_rate: f64,
    status: CarStatus,
    description: String,
}

impl NewCar {
    /// Validate a draft for creation.
    ///
    /// `model`, `type`, `year`, `dailyRate` and `status` are required; blank
    /// strings count as missing. `description` defaults to empty.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{CarDraft, CarStatus, NewCar};
    ///
    /// let car = NewCar::try_from_draft(CarDraft {
    ///     model: Some("Corolla".into()),
    ///     car_type: Some("Sedan".into()),
    ///     year: Some(2022),
    ///     daily_rate: Some(45.0),
    ///     status: Some("Available".into()),
    ///     description: None,
    /// })
    /// .unwrap();
    /// assert_eq!(car.status(), CarStatus::Available);
    /// assert_eq!(car.description(), "");
    /// ```
    pub fn try_from_draft(draft: CarDraft) -> Result<Self, CarValidationError> {
        let CarDraft {
            model,
            car_type,
            year,
            daily_rate,
            status,
            description,
        } = draft;

        let blank = |value: &Option<String>| value.as_deref().is_none_or(|v| v.trim().is_empty());
        let mut missing = Vec::new();
        if blank(&model) {
            missing.push("model");
        }
        if blank(&car_type) {
            missing.push("type");
        }
        if year.is_none() {
            missing.push("year");
        }
        if daily_rate.is_none() {
            missing.push("dailyRate");
        }
        if blank(&status) {
            missing.push("status");
        }

        match (model, car_type, year, daily_rate, status) {
            (Some(model), Some(car_type), Some(year), Some(daily_rate), Some(status))
                if missing.is_empty() =>
            {
                Ok(Self {
                    model: required_text(model, "model")?,
                    car_type: required_text(car_type, "type")?,
                    year: validate_year(year)?,
                    daily_rate: validate_daily_rate(daily_rate)?,
                    status: status.trim().parse()?,
                    description: description.unwrap_or_default(),
                })
            }
            _ => Err(CarValidationError::MissingFields { fields: missing }),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn status(&self) -> CarStatus {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Validated partial update. Only `Some` fields are applied.
///
/// The mutable surface is closed: identifiers and timestamps cannot be set
/// through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarPatch {
    model: Option<String>,
    car_type: Option<String>,
    year: Option<i32>,
    daily_rate: Option<f64>,
    status: Option<CarStatus>,
    description: Option<String>,
}

impl CarPatch {
    /// Validate every supplied field with the same rules used on create.
    pub fn try_from_draft(draft: CarDraft) -> Result<Self, CarValidationError> {
        Ok(Self {
            model: draft
                .model
                .map(|v| required_text(v, "model"))
                .transpose()?,
            car_type: draft
                .car_type
                .map(|v| required_text(v, "type"))
                .transpose()?,
            year: draft.year.map(validate_year).transpose()?,
            daily_rate: draft.daily_rate.map(validate_daily_rate).transpose()?,
            status: draft.status.map(|v| v.trim().parse()).transpose()?,
            description: draft.description,
        })
    }

    /// Patch that only changes the status.
    #[cfg(test)]
    pub(crate) fn status_only(status: CarStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn car_type(&self) -> Option<&str> {
        self.car_type.as_deref()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn daily_rate(&self) -> Option<f64> {
        self.daily_rate
    }

    pub fn status(&self) -> Option<CarStatus> {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Stored car record.
///
/// Serialised with camelCase keys; the vehicle kind is exposed as `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    id: CarId,
    model: String,
    #[serde(rename = "type")]
    car_type: String,
    year: i32,
    daily_rate: f64,
    status: CarStatus,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Raw parts for rebuilding a stored [`Car`], e.g. from a database row.
#[derive(Debug, Clone)]
pub struct CarParts {
    pub id: CarId,
    pub model: String,
    pub car_type: String,
    pub year: i32,
    pub daily_rate: f64,
    pub status: CarStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Materialise a new record with system-managed fields.
    pub fn create(id: CarId, fields: NewCar, now: DateTime<Utc>) -> Self {
        let NewCar {
            model,
            car_type,
            year,
            daily_rate,
            status,
            description,
        } = fields;
        Self {
            id,
            model,
            car_type,
            year,
            daily_rate,
            status,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a record from stored parts.
    pub fn from_parts(parts: CarParts) -> Self {
        let CarParts {
            id,
            model,
            car_type,
            year,
            daily_rate,
            status,
            description,
            created_at,
            updated_at,
        } = parts;
        Self {
            id,
            model,
            car_type,
            year,
            daily_rate,
            status,
            description,
            created_at,
            updated_at,
        }
    }

    /// Merge `patch` over this record; unspecified fields keep their values.
    pub fn apply(&mut self, patch: &CarPatch, now: DateTime<Utc>) {
        if let Some(model) = patch.model() {
            model.clone_into(&mut self.model);
        }
        if let Some(car_type) = patch.car_type() {
            car_type.clone_into(&mut self.car_type);
        }
        if let Some(year) = patch.year() {
            self.year = year;
        }
        if let Some(rate) = patch.daily_rate() {
            self.daily_rate = rate;
        }
        if let Some(status) = patch.status() {
            self.status = status;
        }
        if let Some(description) = patch.description() {
            description.clone_into(&mut self.description);
        }
        self.updated_at = now;
    }

    pub fn id(&self) -> &CarId {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn car_type(&self) -> &str {
        &self.car_type
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn daily_rate(&self) -> f64 {
        self.daily_rate
    }

    pub fn status(&self) -> CarStatus {
        self.status
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests;
