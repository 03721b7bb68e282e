use crate::domain::credential::CredentialError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pushover application token (`token`).
///
/// Invariant: non-empty after trimming.
pub struct AppToken(String);

impl AppToken {
    /// Form field name used by Pushover (`token`).
    pub const FIELD: &'static str = "token";

    /// Environment variable consulted when no explicit token is supplied.
    pub const ENV: &'static str = "PUSHOVER_APP_TOKEN";

    /// Create a validated [`AppToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pushover user key (`user`) identifying the recipient account.
///
/// Invariant: non-empty after trimming.
pub struct UserToken(String);

impl UserToken {
    /// Form field name used by Pushover (`user`).
    pub const FIELD: &'static str = "user";

    /// Environment variable consulted when no explicit user token is supplied.
    pub const ENV: &'static str = "PUSHOVER_USER_TOKEN";

    /// Create a validated [`UserToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Registered device name (`device`) narrowing delivery to one device under a
/// user account.
///
/// Invariant: non-empty after trimming.
pub struct DeviceName(String);

impl DeviceName {
    /// Form field name used by Pushover (`device`).
    pub const FIELD: &'static str = "device";

    /// Create a validated [`DeviceName`].
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CredentialError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated device name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_reject() {
        let token = AppToken::new("  app-token ").unwrap();
        assert_eq!(token.as_str(), "app-token");
        assert!(AppToken::new("  ").is_err());

        let user = UserToken::new(" user-key ").unwrap();
        assert_eq!(user.as_str(), "user-key");
        assert!(UserToken::new("").is_err());

        let device = DeviceName::new(" phone ").unwrap();
        assert_eq!(device.as_str(), "phone");
        assert!(DeviceName::new("   ").is_err());
    }

    #[test]
    fn field_and_env_names_match_the_wire_protocol() {
        assert_eq!(AppToken::FIELD, "token");
        assert_eq!(AppToken::ENV, "PUSHOVER_APP_TOKEN");
        assert_eq!(UserToken::FIELD, "user");
        assert_eq!(UserToken::ENV, "PUSHOVER_USER_TOKEN");
        assert_eq!(DeviceName::FIELD, "device");
    }
}
