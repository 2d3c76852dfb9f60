//! Auth feature module covering login, registration, password recovery, and
//! session hydration. It keeps authentication logic out of the UI and stays
//! aligned with the backend's cookie-session expectations.
//!
//! Flow Overview: Login and register post JSON payloads and rely on the
//! session cookie the server sets. The session probe reads only the HTTP
//! status. Password recovery mails a token; the new-password form submits it.

pub(crate) mod client;
pub(crate) mod guards;
pub(crate) mod state;
pub(crate) mod types;
