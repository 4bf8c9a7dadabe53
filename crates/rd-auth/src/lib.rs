pub mod auth_session;
pub mod error;
pub mod registration_form;

pub use auth_session::AuthSession;
pub use error::{AuthError, Result};
pub use registration_form::RegistrationForm;

#[cfg(test)]
mod tests;
