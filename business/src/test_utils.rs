//! Fixtures shared by the business unit tests and the UI integration tests.
//!
//! Enabled for `cfg(test)` and through the `test-utils` feature.

use crate::user::{Address, UserRecord};

/// A user with fixed contact data; only name, id and age vary.
pub fn sample_user(id: u64, first_name: &str, last_name: &str, age: u32) -> UserRecord {
    UserRecord {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        maiden_name: String::new(),
        age,
        gender: "female".to_owned(),
        phone: "+81 965-431-3024".to_owned(),
        address: Address {
            address: "626 Main Street".to_owned(),
            city: "Phoenix".to_owned(),
        },
        height: 170.0,
        weight: 60.5,
        email: format!("{}@example.com", first_name.to_lowercase()),
    }
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: u64,
    first_name: &str,
    last_name: &str,
    age: u32,
    gender: &str,
    phone: &str,
    city: &str,
    street: &str,
) -> UserRecord {
    UserRecord {
        gender: gender.to_owned(),
        phone: phone.to_owned(),
        address: Address {
            address: street.to_owned(),
            city: city.to_owned(),
        },
        ..sample_user(id, first_name, last_name, age)
    }
}

/// Four users in id order. `"ann"` matches ids 2 and 4, `"bob"` matches id 1.
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user(1, "Bob", "Stone", 40, "male", "+1 555-0100", "Houston", "12 Elm Street"),
        user(2, "Ann", "Lee", 31, "female", "+44 20-7946", "Phoenix", "626 Main Street"),
        user(3, "Cid", "Moe", 19, "male", "+7 912-0000", "Austin", "9 Oak Avenue"),
        user(4, "Joanna", "Banner", 25, "female", "+33 1-4000", "Denver", "77 Pine Road"),
    ]
}

/// [`sample_users`] as the users endpoint serves them.
pub fn sample_users_json() -> serde_json::Value {
    serde_json::json!({
        "users": sample_users(),
        "total": 4,
        "skip": 0,
        "limit": 30
    })
}
