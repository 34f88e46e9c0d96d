//! Port-level contract checks shared by adapters.

use super::*;
use crate::domain::{CarId, CarPatch, CarStatus};
use actix_rt::System;
use mockall::predicate::eq;
use rstest::rstest;

#[rstest]
#[case(UserPersistenceError::connection("refused"), "user repository connection failed: refused")]
#[case(UserPersistenceError::query("syntax"), "user repository query failed: syntax")]
#[case(
    UserPersistenceError::duplicate_email("a@b.com"),
    "user with email a@b.com already exists"
)]
fn user_errors_render_messages(#[case] error: UserPersistenceError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn token_errors_render_messages() {
    assert_eq!(TokenError::expired().to_string(), "token expired");
    assert_eq!(
        TokenError::invalid("bad signature").to_string(),
        "token rejected: bad signature"
    );
}

#[rstest]
fn mock_car_repository_honours_expectations() {
    let id = CarId::random();
    let mut repo = MockCarRepository::new();
    repo.expect_delete()
        .with(eq(id))
        .times(1)
        .return_once(|_| Ok(false));
    repo.expect_update()
        .withf(|_, patch, _| patch.status() == Some(CarStatus::Rented))
        .return_once(|_, _, _| Ok(None));

    System::new().block_on(async move {
        assert!(!repo.delete(&id).await.expect("delete"));
        let patch = CarPatch::status_only(CarStatus::Rented);
        let merged = repo
            .update(&id, &patch, chrono::Utc::now())
            .await
            .expect("update");
        assert!(merged.is_none());
    });
}
