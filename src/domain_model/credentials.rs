use secrecy::SecretString;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginKind {
    Email,
    Username,
}

impl LoginKind {
    /// Column the identifier is matched against.
    pub fn column(&self) -> &'static str {
        match self {
            LoginKind::Email => "email",
            LoginKind::Username => "username",
        }
    }
}

impl fmt::Display for LoginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// The credential pair handed to the authentication backend.
///
/// Lives for a single login attempt.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub kind: LoginKind,
    pub identifier: String,
    pub password: SecretString,
}

/// A validation message attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let credentials = LoginCredentials {
            kind: LoginKind::Username,
            identifier: "jdoe".to_string(),
            password: SecretString::from("hunter2"),
        };
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("jdoe"));
        assert!(!printed.contains("hunter2"));
    }
}
