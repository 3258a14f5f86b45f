use crate::{Gender, NewUser, User, UserStatus};

#[test]
fn test_user_deserializes_remote_payload() {
    let json = r#"{
        "id": 7441432,
        "name": "Chandrakala Gill",
        "email": "gill_chandrakala@runolfsdottir.test",
        "gender": "female",
        "status": "inactive"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, 7441432);
    assert_eq!(user.name, "Chandrakala Gill");
    assert_eq!(user.gender, Gender::Female);
    assert_eq!(user.status, UserStatus::Inactive);
}

#[test]
fn test_user_rejects_unknown_gender() {
    let json = r#"{"id":1,"name":"a","email":"a@b.test","gender":"other","status":"active"}"#;
    let result: Result<User, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_new_user_status_defaults_to_active() {
    let json = r#"{"name":"a","email":"a@b.test","gender":"male"}"#;
    let draft: NewUser = serde_json::from_str(json).unwrap();
    assert_eq!(draft.status, UserStatus::Active);
}

#[test]
fn test_from_draft_keeps_fields() {
    let draft = NewUser {
        name: "Ada".into(),
        email: "ada@example.test".into(),
        gender: Gender::Female,
        status: UserStatus::Inactive,
    };

    let user = User::from_draft(42, draft.clone());

    assert_eq!(user.id, 42);
    assert_eq!(user.name, draft.name);
    assert_eq!(user.email, draft.email);
    assert_eq!(user.gender, draft.gender);
    assert_eq!(user.status, draft.status);
}
