//! Types for the profile endpoints.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned id; comment ownership checks compare against it.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: u8,
    pub email: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub age: u8,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::Profile;

    #[test]
    fn full_name_joins_and_trims() {
        let profile = Profile {
            id: Some("u-1".to_string()),
            first_name: "Ana".to_string(),
            last_name: String::new(),
            age: 30,
            email: "ana@mail.com".to_string(),
        };
        assert_eq!(profile.full_name(), "Ana");
    }
}
