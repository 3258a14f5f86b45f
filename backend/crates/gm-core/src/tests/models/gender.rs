use crate::Gender;

use std::str::FromStr;

#[test]
fn test_gender_as_str() {
    assert_eq!(Gender::Male.as_str(), "male");
    assert_eq!(Gender::Female.as_str(), "female");
}

#[test]
fn test_gender_from_str() {
    assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("female").unwrap(), Gender::Female);
    assert!(Gender::from_str("Male").is_err());
    assert!(Gender::from_str("").is_err());
}
