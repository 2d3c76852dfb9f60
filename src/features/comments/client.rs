//! Client helpers for the comments endpoints.

use crate::{
    app_lib::{AppError, delete, get_json, post_json, put_json},
    features::comments::types::{Comment, CreateCommentRequest, UpdateCommentRequest},
};

/// Lists the comments for a movie, newest first as the API returns them.
pub async fn list_for_movie(pexels_id: u64) -> Result<Vec<Comment>, AppError> {
    get_json(&format!("/comments/movie/{pexels_id}")).await
}

/// Creates a comment on a movie.
pub async fn create(request: &CreateCommentRequest) -> Result<(), AppError> {
    post_json("/comments", request).await
}

/// Updates the text of an existing comment; the API enforces authorship.
pub async fn update(comment_id: u64, request: &UpdateCommentRequest) -> Result<(), AppError> {
    put_json(&format!("/comments/{comment_id}"), request).await
}

/// Deletes a comment; the API enforces authorship.
pub async fn remove(comment_id: u64) -> Result<(), AppError> {
    delete(&format!("/comments/{comment_id}")).await
}
