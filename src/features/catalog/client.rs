//! Client helpers for the catalog proxy endpoints.

use crate::{
    app_lib::{AppError, get_json},
    features::catalog::types::{SearchPage, Video},
};

/// Searches the catalog proxy for a page of videos matching the query.
pub async fn search(query: &str, page: u32, per_page: u32) -> Result<SearchPage, AppError> {
    let path = format!("/pexels/search?query={query}&page={page}&per_page={per_page}");
    get_json(&path).await
}

/// Fetches a single video by its catalog id.
pub async fn find_by_id(id: u64) -> Result<Video, AppError> {
    get_json(&format!("/pexels/searchById/{id}")).await
}
