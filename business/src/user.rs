//! User records as served by the users endpoint.

use serde::{Deserialize, Serialize};

/// Postal address of a user. Only the fields the table shows are kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Street part, e.g. `"626 Main Street"`.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
}

/// A user item from the users endpoint.
///
/// Immutable once fetched. `height`, `weight` and `email` are only shown in the
/// detail overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub address: Address,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub email: String,
}

/// Response from listing users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserRecord>,
}

impl UserRecord {
    /// `"first last maiden"`, as rendered in the table.
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.maiden_name)
    }

    /// `"city, street"`, as rendered in the table.
    pub fn display_address(&self) -> String {
        format!("{}, {}", self.address.city, self.address.address)
    }

    /// Substring match against an already lowercased query.
    ///
    /// Phone is compared as-is, every other field is lowercased first.
    pub fn matches(&self, query: &str) -> bool {
        self.full_name().to_lowercase().contains(query)
            || self.age.to_string().contains(query)
            || self.gender.to_lowercase().contains(query)
            || self.phone.contains(query)
            || self.display_address().to_lowercase().contains(query)
    }
}

/// Keeps the records matching `query`, in input order.
pub fn filter_users(users: &[UserRecord], query: &str) -> Vec<UserRecord> {
    users
        .iter()
        .filter(|user| user.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_user;

    #[test]
    fn test_deserialize_users_response() {
        let body = serde_json::json!({
            "users": [{
                "id": 1,
                "firstName": "Emily",
                "lastName": "Johnson",
                "maidenName": "Smith",
                "age": 28,
                "gender": "female",
                "email": "emily.johnson@x.dummyjson.com",
                "phone": "+81 965-431-3024",
                "height": 193.24,
                "weight": 63.16,
                "address": {
                    "address": "626 Main Street",
                    "city": "Phoenix",
                    "state": "Mississippi"
                },
                "bank": { "cardType": "Elo" }
            }],
            "total": 208,
            "skip": 0,
            "limit": 30
        });

        let response: UsersResponse =
            serde_json::from_value(body).expect("users response should parse");
        assert_eq!(response.users.len(), 1);

        let user = &response.users[0];
        assert_eq!(user.full_name(), "Emily Johnson Smith");
        assert_eq!(user.display_address(), "Phoenix, 626 Main Street");
        assert_eq!(user.email, "emily.johnson@x.dummyjson.com");
    }

    #[test]
    fn test_missing_maiden_name_defaults_to_empty() {
        let body = serde_json::json!({
            "id": 2,
            "firstName": "Michael",
            "lastName": "Williams",
            "age": 35,
            "gender": "male",
            "phone": "+49 258-627-6644",
            "address": { "address": "385 Fifth Street", "city": "Houston" }
        });

        let user: UserRecord = serde_json::from_value(body).expect("user should parse");
        assert_eq!(user.maiden_name, "");
        assert_eq!(user.full_name(), "Michael Williams ");
    }

    #[test]
    fn test_matches_each_field() {
        let user = sample_user(1, "Emily", "Johnson", 28);

        assert!(user.matches("emily johnson"));
        assert!(user.matches("28"));
        assert!(user.matches("fem"));
        assert!(user.matches("+81 965"));
        assert!(user.matches("phoenix, 626"));
        assert!(!user.matches("zzz"));
    }

    #[test]
    fn test_matches_expects_lowercased_query() {
        let user = sample_user(1, "Emily", "Johnson", 28);

        assert!(!user.matches("Emily"));
        assert!(user.matches("emily"));
    }

    #[test]
    fn test_filter_users_keeps_order() {
        let users = vec![
            sample_user(1, "Ann", "Lee", 25),
            sample_user(2, "Bob", "Stone", 40),
            sample_user(3, "Annette", "Wu", 31),
        ];

        let ids: Vec<u64> = filter_users(&users, "ann").iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
