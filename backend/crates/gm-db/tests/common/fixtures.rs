use gm_core::{Gender, NewUser, User, UserStatus};

pub fn create_test_user(id: i64) -> User {
    User {
        id,
        name: format!("Test User {}", id),
        email: format!("test{}@example.test", id),
        gender: Gender::Female,
        status: UserStatus::Active,
    }
}

pub fn create_test_draft(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase().replace(' ', ".")),
        gender: Gender::Male,
        status: UserStatus::Inactive,
    }
}
