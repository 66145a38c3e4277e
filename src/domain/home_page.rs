use secrecy::ExposeSecret;
use serde::Serialize;

use super::User;
use crate::configuration::PasswordDisplay;

pub const PASSWORD_MASK: &str = "********";

/// Data handed to `home.html`. Missing values render as empty slots.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HomePage {
    pub username: String,
    pub password: String,
}

impl HomePage {
    pub fn new(user: Option<&User>, display: PasswordDisplay) -> Self {
        let username = user
            .and_then(|u| u.username.clone())
            .unwrap_or_default();
        let password = match user.and_then(|u| u.password.as_ref()) {
            Some(password) => match display {
                PasswordDisplay::Plain => password.expose_secret().clone(),
                PasswordDisplay::Masked if password.expose_secret().is_empty() => String::new(),
                PasswordDisplay::Masked => PASSWORD_MASK.to_string(),
            },
            None => String::new(),
        };
        Self { username, password }
    }
}
