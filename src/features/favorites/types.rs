//! Types for the favorites endpoints. A favorite stores a snapshot of the
//! catalog video so the favorites page renders without re-querying the proxy.

use crate::features::catalog::title::title_from_url;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FavoriteMovie {
    #[serde(rename = "pexelsId")]
    pub pexels_id: u64,
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
}

impl FavoriteMovie {
    /// Display title derived from the stored source URL slug.
    pub fn title(&self) -> String {
        let title = title_from_url(&self.url);
        if title.is_empty() {
            "Sin título".to_string()
        } else {
            title
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub image: String,
    pub url: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

#[cfg(test)]
mod tests {
    use super::FavoriteMovie;

    #[test]
    fn favorite_wire_format_round_trips() {
        let json = r#"{"pexelsId":855321,"image":"https://img.test/1.jpg","url":"https://www.pexels.com/video/city-lights-855321/","userName":"Ana"}"#;
        let favorite: FavoriteMovie = serde_json::from_str(json).unwrap();
        assert_eq!(favorite.pexels_id, 855321);
        assert_eq!(favorite.title(), "City Lights");
    }
}
