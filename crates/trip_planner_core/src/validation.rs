//! crates/trip_planner_core/src/validation.rs
//!
//! Local input checks that run before anything is sent to the remote service.
//! Messages are shown to the user verbatim, so they are written in the
//! product's language.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::domain::SignupRequest;
use regex::Regex;
use std::sync::OnceLock;

/// Characters the password policy treats as "special".
const PASSWORD_SPECIALS: &str = "@$!%*?&";
const NAME_MAX_CHARS: usize = 50;

/// A rejected local input. Never sent to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch,
    #[error("비밀번호는 대문자, 소문자, 숫자, 특수문자를 포함한 8~20자여야 합니다.")]
    PasswordPolicy,
    #[error("올바른 이메일 형식이어야 합니다.")]
    InvalidEmail,
    #[error("이름은 50자 이하여야 합니다.")]
    NameTooLong,
    #[error("{0} 항목은 필수입니다.")]
    MissingField(&'static str),
    #[error("출발일은 귀가일보다 늦을 수 없습니다.")]
    DateOrder,
}

fn password_charset() -> &'static Regex {
    static CHARSET: OnceLock<Regex> = OnceLock::new();
    CHARSET.get_or_init(|| {
        Regex::new(r"^[A-Za-z\d@$!%*?&]{8,20}$").expect("password charset pattern is valid")
    })
}

fn email_shape() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Checks the signup password policy: 8 to 20 characters drawn from
/// letters, digits and `@$!%*?&`, with at least one of each class.
pub fn validate_password(password: &str) -> bool {
    password_charset().is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

pub fn validate_email(email: &str) -> bool {
    email_shape().is_match(email.trim())
}

/// The raw contents of the signup form, including the confirmation field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
}

impl SignupForm {
    /// Validates the form and produces the request to send.
    ///
    /// Confirmation is checked before the password policy so a typo in the
    /// second field is reported as a mismatch.
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("이름"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField("이메일"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("비밀번호"));
        }
        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        if !validate_password(&self.password) {
            return Err(ValidationError::PasswordPolicy);
        }
        if !validate_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong);
        }

        Ok(SignupRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            name: name.to_string(),
        })
    }
}
