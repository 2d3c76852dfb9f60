//! Auth overlay routes: sign-in, registration, and the password-reset pair.

mod login;
mod new_password;
mod recover;
mod register;

pub(crate) use login::LoginModal;
pub(crate) use new_password::NewPasswordModal;
pub(crate) use recover::RecoverPasswordModal;
pub(crate) use register::RegisterModal;
