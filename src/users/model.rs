use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Synthetic user document as stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>, // assigned by the server on insert
    pub first_name: String,
    pub last_name: String,
    pub email: String,        // derived from first/last name, lowercase
    pub username: String,     // lowercase
    pub password: String,     // plain placeholder, not a hash
    pub date_of_birth: DateTime,
    pub phone: String,
    pub address: Address,
    pub bio: String,
    pub avatar: String,
    pub created_at: DateTime,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl UserRecord {
    /// True when every string field, nested address included, is non-empty.
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.username,
            &self.password,
            &self.phone,
            &self.bio,
            &self.avatar,
        ]
        .iter()
        .all(|s| !s.is_empty())
            && self.address.is_complete()
    }
}

impl Address {
    pub fn is_complete(&self) -> bool {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip_code,
            &self.country,
        ]
        .iter()
        .all(|s| !s.is_empty())
    }
}

#[cfg(test)]
pub(crate) fn sample_record(first: &str, last: &str, username: &str) -> UserRecord {
    UserRecord {
        id: None,
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}.{}@example.com", first, last).to_lowercase(),
        username: username.to_lowercase(),
        password: "abcDEF123456".into(),
        date_of_birth: DateTime::from_millis(631_152_000_000),
        phone: "(555) 010-0000".into(),
        address: Address {
            street: "1 Main Street".into(),
            city: "Springfield".into(),
            state: "Oregon".into(),
            zip_code: "97477".into(),
            country: "United States".into(),
        },
        bio: "Lorem ipsum dolor sit amet.".into(),
        avatar: "https://avatars.githubusercontent.com/u/1".into(),
        created_at: DateTime::from_millis(1_700_000_000_000),
        is_active: true,
    }
}
