//! Client wrappers for the auth API endpoints. These helpers centralize paths
//! and session-aware requests so auth flows stay consistent across routes.

use crate::{
    app_lib::{AppError, get_status, post_empty, post_json, post_json_response},
    features::auth::types::{
        LoginRequest, LoginResponse, NewPasswordRequest, RecoverPasswordRequest, RegisterRequest,
        RegisterResponse,
    },
};

/// Signs in with email and password. The server sets the session cookie on
/// success; the response body differs between service versions and is not
/// relied upon beyond logging the user in.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AppError> {
    post_json_response("/auth/login/", request).await
}

/// Registers a new account.
pub async fn register(request: &RegisterRequest) -> Result<RegisterResponse, AppError> {
    post_json_response("/auth/register/", request).await
}

/// Probes the current session. Only the HTTP status matters: 401 means
/// anonymous, any other delivered status means signed in.
pub async fn session_status() -> Result<u16, AppError> {
    get_status("/auth/session/").await
}

/// Clears the current session on the server.
pub async fn logout() -> Result<(), AppError> {
    post_empty("/auth/logout/").await
}

/// Requests a password-reset email.
pub async fn request_password_reset(request: &RecoverPasswordRequest) -> Result<(), AppError> {
    post_json("/auth/recover-password/", request).await
}

/// Submits a new password using the token from the reset email.
pub async fn submit_new_password(request: &NewPasswordRequest) -> Result<(), AppError> {
    post_json("/auth/change-password", request).await
}
