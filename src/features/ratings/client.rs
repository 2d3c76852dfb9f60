//! Client helpers for the ratings endpoints.

use crate::{
    app_lib::{AppError, get_json, post_json},
    features::ratings::types::{RateRequest, RatingSummary},
};

/// Fetches the aggregate rating for a movie.
pub async fn for_movie(pexels_id: u64) -> Result<RatingSummary, AppError> {
    get_json(&format!("/ratings/movie/{pexels_id}")).await
}

/// Submits the signed-in user's 1–5 rating. Callers re-fetch the aggregate
/// afterwards; the endpoint upserts per (user, movie).
pub async fn rate(request: &RateRequest) -> Result<(), AppError> {
    post_json("/ratings", request).await
}
