//! Client helpers for the profile endpoints.

use crate::{
    app_lib::{AppError, delete, get_json, post_json, put_json},
    features::auth::types::ChangePasswordRequest,
    features::profile::types::{Profile, UpdateProfileRequest},
};

/// Fetches the signed-in user's profile.
pub async fn fetch() -> Result<Profile, AppError> {
    get_json("/auth/profile/").await
}

/// Updates the signed-in user's profile.
pub async fn update(request: &UpdateProfileRequest) -> Result<(), AppError> {
    put_json("/auth/profile/", request).await
}

/// Deletes the account. Callers sign the user out afterwards.
pub async fn delete_account() -> Result<(), AppError> {
    delete("/auth/profile/").await
}

/// Changes the password for the signed-in user.
pub async fn change_password(request: &ChangePasswordRequest) -> Result<(), AppError> {
    post_json("/auth/change-password", request).await
}
