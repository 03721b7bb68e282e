use std::collections::BTreeMap;

use url::Url;

use crate::domain::value::{DeviceName, UserToken};

/// Accumulator of form fields destined for one notification.
///
/// Every message carries at least the `message` field set at construction.
/// Field names are not validated; the caller is responsible for using names
/// the Pushover API recognizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    fields: BTreeMap<String, String>,
}

impl Message {
    /// Form field name holding the notification text (`message`).
    pub const FIELD: &'static str = "message";

    /// Create a message with its notification text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(Self::FIELD.to_owned(), text.into());
        Self { fields }
    }

    /// Store `value` under `key`. A `None` value leaves the message untouched.
    pub fn set(&mut self, key: impl Into<String>, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.fields.insert(key.into(), value.to_string());
        }
    }

    /// Address this message to a single recipient, optionally narrowed to one
    /// registered device.
    pub fn user(&mut self, user_token: impl ToString, user_device: Option<impl ToString>) {
        self.set(UserToken::FIELD, Some(user_token));
        self.set(DeviceName::FIELD, user_device);
    }

    /// The full field mapping as it will be dispatched.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}

#[derive(Debug, Clone, Default)]
/// Optional decorations for [`send_text`](crate::PushoverClient::send_text).
///
/// `url_title` is only applied when `url` is present.
pub struct TextOptions {
    pub title: Option<String>,
    pub url: Option<Url>,
    pub url_title: Option<String>,
}
