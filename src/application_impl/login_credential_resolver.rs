use crate::application_port::LoginCredentialResolver;
use crate::domain_model::{FieldError, LoginCredentials, LoginKind};
use regex::Regex;
use secrecy::SecretString;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Form field holding the raw identifier on the login page.
pub const IDENTIFIER_FIELD: &str = "data.username";

pub const DEFAULT_FAILURE_MESSAGE: &str = "These credentials do not match our records.";

const LOCAL_PART_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~.-]+$";

// Dotted LDH labels; the top-level label has to start with a letter, so
// `10.0.0.1` is not a host name.
const HOST_PATTERN: &str = r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$";

const MAX_LOCAL_PART: usize = 64;
const MAX_ADDRESS: usize = 254;

pub struct DefaultLoginCredentialResolver {
    local_part: Regex,
    host: Regex,
    failure_message: String,
}

impl DefaultLoginCredentialResolver {
    pub fn new(failure_message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            local_part: Regex::new(LOCAL_PART_PATTERN)?,
            host: Regex::new(HOST_PATTERN)?,
            failure_message: failure_message.into(),
        })
    }

    /// Syntax only. Says nothing about whether the mailbox exists.
    pub fn is_email(&self, identifier: &str) -> bool {
        if identifier.len() > MAX_ADDRESS {
            return false;
        }
        let Some((local, domain)) = identifier.rsplit_once('@') else {
            return false;
        };
        self.is_local_part(local) && self.is_domain(domain)
    }

    fn is_local_part(&self, local: &str) -> bool {
        local.len() <= MAX_LOCAL_PART
            && self.local_part.is_match(local)
            && !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
    }

    fn is_domain(&self, domain: &str) -> bool {
        match domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
            Some(literal) => match literal.strip_prefix("IPv6:") {
                Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
                None => literal.parse::<Ipv4Addr>().is_ok(),
            },
            None => self.host.is_match(domain),
        }
    }
}

impl LoginCredentialResolver for DefaultLoginCredentialResolver {
    fn resolve(&self, identifier: &str, password: &SecretString) -> LoginCredentials {
        let kind = if self.is_email(identifier) {
            LoginKind::Email
        } else {
            LoginKind::Username
        };
        LoginCredentials {
            kind,
            identifier: identifier.to_string(),
            password: password.clone(),
        }
    }

    fn failure(&self) -> FieldError {
        FieldError {
            field: IDENTIFIER_FIELD.to_string(),
            message: self.failure_message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn resolver() -> DefaultLoginCredentialResolver {
        DefaultLoginCredentialResolver::new(DEFAULT_FAILURE_MESSAGE).unwrap()
    }

    fn kind_of(identifier: &str) -> LoginKind {
        resolver()
            .resolve(identifier, &SecretString::from("p"))
            .kind
    }

    #[test]
    fn classifies_email_and_username() {
        assert_eq!(kind_of("user@example.com"), LoginKind::Email);
        assert_eq!(kind_of("jdoe"), LoginKind::Username);
    }

    #[test]
    fn accepts_common_address_shapes() {
        let resolver = resolver();
        for address in [
            "first.last@example.com",
            "user+tag@sub.example.co.uk",
            "o'brien@example.ie",
            "x@a-b.io",
            "user@xn--80ak6aa92e.xn--p1ai",
            "user@[127.0.0.1]",
            "user@[IPv6:2001:db8::1]",
            "user@[IPv6:::1]",
        ] {
            assert!(resolver.is_email(address), "{address}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        let resolver = resolver();
        for identifier in [
            "",
            "jdoe",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "user name@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@-example.com",
            "user@example..com",
            "jdoe@10.0.0.1",
            "user@example.123",
            "user@[300.0.0.1]",
            "user@[IPv6:not-an-address]",
            "user@[2001:db8::1]",
            "user@[127.0.0.1",
        ] {
            assert!(!resolver.is_email(identifier), "{identifier}");
        }
    }

    #[test]
    fn ip_hosts_without_brackets_are_usernames() {
        assert_eq!(kind_of("jdoe@10.0.0.1"), LoginKind::Username);
        assert_eq!(kind_of("user@[127.0.0.1]"), LoginKind::Email);
    }

    #[test]
    fn rejects_overlong_local_part() {
        let resolver = resolver();
        let local = "a".repeat(MAX_LOCAL_PART + 1);
        assert!(!resolver.is_email(&format!("{local}@example.com")));
        let local = "a".repeat(MAX_LOCAL_PART);
        assert!(resolver.is_email(&format!("{local}@example.com")));
    }

    #[test]
    fn passes_values_through_untouched() {
        let credentials = resolver().resolve(" jdoe ", &SecretString::from("  secret\t"));
        assert_eq!(credentials.kind, LoginKind::Username);
        assert_eq!(credentials.identifier, " jdoe ");
        assert_eq!(credentials.password.expose_secret(), "  secret\t");
    }

    #[test]
    fn failure_targets_identifier_field() {
        let failure = resolver().failure();
        assert_eq!(failure.field, IDENTIFIER_FIELD);
        assert_eq!(failure.message, DEFAULT_FAILURE_MESSAGE);
    }

    #[test]
    fn failure_does_not_depend_on_identifier_kind() {
        let resolver = resolver();
        let password = SecretString::from("p");
        let _ = resolver.resolve("user@example.com", &password);
        let after_email = resolver.failure();
        let _ = resolver.resolve("jdoe", &password);
        let after_username = resolver.failure();
        assert_eq!(after_email, after_username);
    }
}
