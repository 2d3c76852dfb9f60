//! Types for the ratings endpoints.

use serde::{Deserialize, Serialize};

/// Aggregate rating for one movie plus the signed-in user's own vote.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RatingSummary {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub count: u32,
    #[serde(rename = "ownValue", default)]
    pub own_value: Option<u8>,
}

impl RatingSummary {
    /// Average formatted for display with one decimal, or a dash when no one
    /// has rated yet.
    pub fn display_average(&self) -> String {
        if self.count == 0 {
            "–".to_string()
        } else {
            format!("{:.1}", self.average)
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateRequest {
    pub value: u8,
    #[serde(rename = "moviePexelsId")]
    pub movie_pexels_id: u64,
}

#[cfg(test)]
mod tests {
    use super::RatingSummary;

    #[test]
    fn display_average_handles_empty_and_rounds() {
        let empty = RatingSummary {
            average: 0.0,
            count: 0,
            own_value: None,
        };
        assert_eq!(empty.display_average(), "–");

        let rated = RatingSummary {
            average: 4.25,
            count: 8,
            own_value: Some(5),
        };
        assert_eq!(rated.display_average(), "4.2");
    }
}
