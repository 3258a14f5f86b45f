use crate::UserPayload;

use gm_core::{Gender, UserStatus};

use googletest::prelude::*;

#[test]
fn given_payload_without_id_when_split_then_id_is_none() {
    // Given
    let payload: UserPayload = serde_json::from_str(
        r#"{"name":"Ada","email":"ada@example.test","gender":"female","status":"inactive"}"#,
    )
    .unwrap();

    // When
    let (id, draft) = payload.into_parts();

    // Then
    assert_that!(id, none());
    assert_that!(draft.name, eq("Ada"));
    assert_that!(draft.gender, eq(Gender::Female));
    assert_that!(draft.status, eq(UserStatus::Inactive));
}

#[test]
fn given_payload_with_id_and_no_status_when_split_then_defaults_active() {
    // Given
    let payload: UserPayload = serde_json::from_str(
        r#"{"id":42,"name":"Bo","email":"bo@example.test","gender":"male"}"#,
    )
    .unwrap();

    // When
    let (id, draft) = payload.into_parts();

    // Then
    assert_that!(id, some(eq(42)));
    assert_that!(draft.status, eq(UserStatus::Active));
}

#[test]
fn given_unknown_gender_when_deserialized_then_rejected() {
    let result = serde_json::from_str::<UserPayload>(
        r#"{"name":"Cy","email":"cy@example.test","gender":"other"}"#,
    );

    assert_that!(result.is_err(), eq(true));
}
