//! Shared frontend utilities for API access, configuration, errors, and
//! validation.
//!
//! ## Session model
//!
//! The API authenticates with an `HttpOnly` session cookie. On boot the app
//! probes `GET auth/session/` and reads only the HTTP status: 401 means
//! anonymous, anything else that arrives means signed in. Mutating endpoints
//! simply include credentials; no token handling happens in the client.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod validate;

pub(crate) use api::{
    delete, get_json, get_optional_json, get_status, post_empty, post_json, post_json_response,
    put_json,
};
pub(crate) use errors::AppError;
