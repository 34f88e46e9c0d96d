//! Tests for car validation and patch merging.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};

#[fixture]
fn draft() -> CarDraft {
    CarDraft {
        model: Some("Corolla".into()),
        car_type: Some("Sedan".into()),
        year: Some(2022),
        daily_rate: Some(45.0),
        status: Some("Available".into()),
        description: Some("Reliable".into()),
    }
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0)
        .single()
        .expect("timestamp")
}

#[rstest]
fn new_car_accepts_complete_draft(draft: CarDraft) {
    let car = NewCar::try_from_draft(draft).expect("valid draft");
    assert_eq!(car.model(), "Corolla");
    assert_eq!(car.car_type(), "Sedan");
    assert_eq!(car.year(), 2022);
    assert_eq!(car.status(), CarStatus::Available);
    assert_eq!(car.description(), "Reliable");
}

#[rstest]
fn new_car_reports_every_missing_field() {
    let err = NewCar::try_from_draft(CarDraft {
        model: Some("  ".into()),
        ..CarDraft::default()
    })
    .expect_err("missing fields");
    assert_eq!(
        err,
        CarValidationError::MissingFields {
            fields: vec!["model", "type", "year", "dailyRate", "status"],
        }
    );
    assert_eq!(err.to_string(), "Missing required car fields");
}

#[rstest]
#[case(CarDraft { year: Some(0), ..draft() }, CarValidationError::InvalidYear)]
#[case(CarDraft { daily_rate: Some(-1.0), ..draft() }, CarValidationError::InvalidDailyRate)]
#[case(
    CarDraft { status: Some("Sold".into()), ..draft() },
    CarValidationError::InvalidStatus { value: "Sold".into() }
)]
fn new_car_rejects_out_of_range_values(
    #[case] input: CarDraft,
    #[case] expected: CarValidationError,
) {
    assert_eq!(NewCar::try_from_draft(input).expect_err("invalid"), expected);
}

#[rstest]
#[case(CarDraft { model: Some("x".repeat(256)), ..draft() }, "model")]
#[case(CarDraft { car_type: Some("é".repeat(256)), ..draft() }, "type")]
fn new_car_rejects_overlong_text(#[case] input: CarDraft, #[case] field: &'static str) {
    assert_eq!(
        NewCar::try_from_draft(input).expect_err("too long"),
        CarValidationError::TooLong {
            field,
            max: MAX_CAR_TEXT_LEN
        }
    );
}

#[rstest]
fn text_at_the_column_width_is_accepted(draft: CarDraft) {
    let model = "é".repeat(MAX_CAR_TEXT_LEN);
    let car = NewCar::try_from_draft(CarDraft {
        model: Some(model.clone()),
        ..draft
    })
    .expect("fits");
    assert_eq!(car.model(), model);

    let err = CarPatch::try_from_draft(CarDraft {
        model: Some(format!("{model}x")),
        ..CarDraft::default()
    })
    .expect_err("patch too long");
    assert_eq!(
        err,
        CarValidationError::TooLong {
            field: "model",
            max: MAX_CAR_TEXT_LEN
        }
    );
}

#[rstest]
fn zero_daily_rate_is_allowed(draft: CarDraft) {
    let car = NewCar::try_from_draft(CarDraft {
        daily_rate: Some(0.0),
        ..draft
    })
    .expect("zero rate");
    assert_eq!(car.daily_rate(), 0.0);
}

#[rstest]
fn patch_validates_only_supplied_fields() {
    let patch = CarPatch::try_from_draft(CarDraft {
        status: Some("Rented".into()),
        ..CarDraft::default()
    })
    .expect("valid patch");
    assert_eq!(patch, CarPatch::status_only(CarStatus::Rented));

    let err = CarPatch::try_from_draft(CarDraft {
        model: Some(String::new()),
        ..CarDraft::default()
    })
    .expect_err("blank model");
    assert_eq!(err, CarValidationError::EmptyField { field: "model" });
}

#[rstest]
fn empty_draft_yields_an_empty_patch() {
    let patch = CarPatch::try_from_draft(CarDraft::default()).expect("empty patch");
    assert_eq!(patch, CarPatch::default());
}

#[rstest]
fn apply_merges_fields_and_refreshes_updated_at(draft: CarDraft) {
    let fields = NewCar::try_from_draft(draft).expect("valid draft");
    let mut car = Car::create(CarId::random(), fields, at(8));
    let patch = CarPatch::try_from_draft(CarDraft {
        daily_rate: Some(50.0),
        status: Some("Maintenance".into()),
        ..CarDraft::default()
    })
    .expect("valid patch");

    car.apply(&patch, at(9));

    assert_eq!(car.daily_rate(), 50.0);
    assert_eq!(car.status(), CarStatus::Maintenance);
    assert_eq!(car.model(), "Corolla");
    assert_eq!(car.created_at(), at(8));
    assert_eq!(car.updated_at(), at(9));
}

#[rstest]
fn car_serialises_with_type_key(draft: CarDraft) {
    let fields = NewCar::try_from_draft(draft).expect("valid draft");
    let car = Car::create(CarId::random(), fields, at(8));
    let value = serde_json::to_value(&car).expect("serialise");
    assert_eq!(value["type"], "Sedan");
    assert_eq!(value["dailyRate"], 45.0);
    assert_eq!(value["status"], "Available");
    assert!(value.get("createdAt").is_some());
    assert!(value.get("carType").is_none());
}

#[rstest]
fn car_id_rejects_non_uuid() {
    assert_eq!(
        CarId::new("123").expect_err("invalid"),
        CarValidationError::InvalidId
    );
}
