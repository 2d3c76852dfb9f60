//! Types for the comments endpoints.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
    pub text: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
}

impl Comment {
    /// Whether the given profile id may edit or delete this comment.
    pub fn is_owned_by(&self, profile_id: Option<&str>) -> bool {
        profile_id.is_some_and(|id| id == self.user_id)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    #[serde(rename = "moviePexelsId")]
    pub movie_pexels_id: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateCommentRequest {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::Comment;

    #[test]
    fn ownership_requires_a_matching_profile_id() {
        let comment = Comment {
            id: 7,
            user_id: "u-1".to_string(),
            user_name: "Ana".to_string(),
            text: "Buena peli".to_string(),
            created_at: "2024-05-01T10:00:00Z".to_string(),
        };

        assert!(comment.is_owned_by(Some("u-1")));
        assert!(!comment.is_owned_by(Some("u-2")));
        assert!(!comment.is_owned_by(None));
    }
}
