//! Client helpers for the favorites endpoints.

use crate::{
    app_lib::{AppError, delete, get_json, get_optional_json, post_json},
    features::favorites::types::{AddFavoriteRequest, FavoriteMovie},
};

/// Lists the signed-in user's favorites.
pub async fn list() -> Result<Vec<FavoriteMovie>, AppError> {
    get_json("/movies").await
}

/// Looks up one favorite by catalog id; absence means the movie is not saved.
pub async fn find(pexels_id: u64) -> Result<Option<FavoriteMovie>, AppError> {
    get_optional_json(&format!("/movies/{pexels_id}")).await
}

/// Saves a movie as a favorite.
pub async fn add(pexels_id: u64, request: &AddFavoriteRequest) -> Result<(), AppError> {
    post_json(&format!("/movies/{pexels_id}"), request).await
}

/// Removes a movie from favorites.
pub async fn remove(pexels_id: u64) -> Result<(), AppError> {
    delete(&format!("/movies/{pexels_id}")).await
}
