//! Domain layer: strong types with validation and invariants (no I/O).

mod credential;
mod message;
mod response;
mod value;

pub use credential::CredentialError;
pub use message::{Message, TextOptions};
pub use response::{MessageResponse, Status};
pub use value::{AppToken, DeviceName, UserToken};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_always_contains_its_text() {
        let message = Message::new("backup finished");
        assert_eq!(
            message.fields().get(Message::FIELD).map(String::as_str),
            Some("backup finished")
        );
    }

    #[test]
    fn set_with_none_never_mutates() {
        let mut message = Message::new("hello");
        let before = message.fields().clone();

        message.set("title", None::<&str>);
        assert_eq!(message.fields(), &before);

        message.set("title", Some("Alert"));
        let decorated = message.fields().clone();
        message.set("title", None::<&str>);
        assert_eq!(message.fields(), &decorated);
    }

    #[test]
    fn set_overwrites_existing_fields() {
        let mut message = Message::new("hello");
        message.set("priority", Some(1));
        message.set("priority", Some(2));
        assert_eq!(
            message.fields().get("priority").map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn set_stringifies_scalar_values() {
        let mut message = Message::new("hello");
        message.set("priority", Some(1));
        message.set("timestamp", Some(1_700_000_000_u64));
        assert_eq!(
            message.fields().get("priority").map(String::as_str),
            Some("1")
        );
        assert_eq!(
            message.fields().get("timestamp").map(String::as_str),
            Some("1700000000")
        );
    }

    #[test]
    fn user_sets_recipient_and_optional_device() {
        let mut message = Message::new("hello");
        message.user("user-key", Some("phone"));
        assert_eq!(
            message.fields().get(UserToken::FIELD).map(String::as_str),
            Some("user-key")
        );
        assert_eq!(
            message.fields().get(DeviceName::FIELD).map(String::as_str),
            Some("phone")
        );

        let mut message = Message::new("hello");
        message.user("user-key", None::<&str>);
        assert!(!message.fields().contains_key(DeviceName::FIELD));
    }

    #[test]
    fn credential_error_reports_missing_source() {
        let err = CredentialError::Missing {
            field: UserToken::FIELD,
            env: UserToken::ENV,
        };
        assert_eq!(
            err.to_string(),
            "no user supplied and PUSHOVER_USER_TOKEN is not set"
        );
    }
}
