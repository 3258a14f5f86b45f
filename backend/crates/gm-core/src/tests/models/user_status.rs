use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Active.as_str(), "active");
    assert_eq!(UserStatus::Inactive.as_str(), "inactive");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(
        UserStatus::from_str("active").unwrap(),
        UserStatus::Active
    );
    assert_eq!(
        UserStatus::from_str("inactive").unwrap(),
        UserStatus::Inactive
    );
    assert!(UserStatus::from_str("suspended").is_err());
}

#[test]
fn test_user_status_default() {
    assert_eq!(UserStatus::default(), UserStatus::Active);
}
