//! Client layer: credential resolution, message dispatch, and error mapping.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    AppToken, CredentialError, DeviceName, Message, Status, TextOptions, UserToken,
};

const DEFAULT_MESSAGES_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// Last-resort recipient variable read inside dispatch when no default user
/// token was ever resolved. This is a separate lookup from [`UserToken::ENV`],
/// which is only consulted at construction/default-user-set time.
const FALLBACK_USER_ENV: &str = "PUSHOVER_USER";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).form(&params).send().await?;
            let body = response.text().await?;
            Ok(body)
        })
    }
}

trait EnvLookup: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone)]
struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PushoverClient`].
///
/// Transport-level failures (DNS, TLS, timeouts) and malformed response
/// bodies surface directly through the passthrough variants; they are never
/// retried or rewrapped beyond that.
pub enum PushoverError {
    /// A required credential could not be resolved from an argument or the
    /// environment, or a supplied credential value was blank.
    #[error("credential error: {0}")]
    Credential(#[from] CredentialError),

    /// Pushover parsed the request but rejected it (`status != 1`). Carries
    /// the raw response body for diagnostics.
    #[error("delivery rejected by Pushover: {body}")]
    Delivery { body: String },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be parsed as JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),
}

#[derive(Debug, Clone, Default)]
/// Builder for [`PushoverClient`].
///
/// Credentials left unset here are resolved from the environment at
/// [`build`](PushoverClientBuilder::build) time: [`AppToken::ENV`] for the
/// application token and [`UserToken::ENV`] for the default user.
pub struct PushoverClientBuilder {
    token: Option<String>,
    user_token: Option<String>,
    user_device: Option<String>,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PushoverClientBuilder {
    /// Create a builder with no explicit credentials or overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the application token explicitly.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Supply the default user token explicitly.
    pub fn user_token(mut self, user_token: impl Into<String>) -> Self {
        self.user_token = Some(user_token.into());
        self
    }

    /// Narrow the default recipient to one registered device.
    pub fn user_device(mut self, user_device: impl Into<String>) -> Self {
        self.user_device = Some(user_device.into());
        self
    }

    /// Override the messages endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`PushoverClient`], resolving credentials from the supplied
    /// arguments and the process environment.
    pub fn build(self) -> Result<PushoverClient, PushoverError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent.clone() {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| PushoverError::Transport(Box::new(err)))?;

        self.build_with(
            Arc::new(ReqwestTransport { client }),
            Arc::new(ProcessEnv),
        )
    }

    fn build_with(
        self,
        http: Arc<dyn HttpTransport>,
        env: Arc<dyn EnvLookup>,
    ) -> Result<PushoverClient, PushoverError> {
        let token = match self.token {
            Some(value) => AppToken::new(value)?,
            None => match env.var(AppToken::ENV) {
                Some(value) => AppToken::new(value)?,
                None => {
                    return Err(CredentialError::Missing {
                        field: AppToken::FIELD,
                        env: AppToken::ENV,
                    }
                    .into());
                }
            },
        };

        let mut client = PushoverClient {
            token,
            user_token: None,
            user_device: None,
            messages: Vec::new(),
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_MESSAGES_ENDPOINT.to_owned()),
            http,
            env,
        };
        client.set_default_user(self.user_token.as_deref(), self.user_device.as_deref())?;
        Ok(client)
    }
}

#[derive(Clone)]
/// High-level Pushover client.
///
/// Holds the application token, an optional default recipient, and the
/// messages created through [`create_message`](PushoverClient::create_message).
/// Each send is one HTTPS POST to `api.pushover.net:443` at
/// `/1/messages.json` with a form-encoded body and a JSON status response.
///
/// The client is not synchronized; share it across tasks by cloning, or
/// guard a single instance externally when mutating it.
pub struct PushoverClient {
    token: AppToken,
    user_token: Option<UserToken>,
    user_device: Option<DeviceName>,
    messages: Vec<Message>,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
    env: Arc<dyn EnvLookup>,
}

impl std::fmt::Debug for PushoverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverClient")
            .field("token", &self.token)
            .field("user_token", &self.user_token)
            .field("user_device", &self.user_device)
            .field("messages", &self.messages)
            .field("endpoint", &self.endpoint)
            .field("http", &"Arc<dyn HttpTransport>")
            .field("env", &"Arc<dyn EnvLookup>")
            .finish()
    }
}

impl PushoverClient {
    /// Create a client resolving every credential from the environment
    /// ([`AppToken::ENV`] and [`UserToken::ENV`]).
    pub fn from_env() -> Result<Self, PushoverError> {
        Self::builder().build()
    }

    /// Start building a client with explicit credentials or custom settings.
    pub fn builder() -> PushoverClientBuilder {
        PushoverClientBuilder::new()
    }

    /// Replace the default recipient for all future sends.
    ///
    /// Resolution: explicit `user_token`, else [`UserToken::ENV`]; fails with
    /// [`PushoverError::Credential`] when neither is present. The default
    /// device is reset to `None` unless one is supplied.
    pub fn set_default_user(
        &mut self,
        user_token: Option<&str>,
        user_device: Option<&str>,
    ) -> Result<(), PushoverError> {
        let resolved = match user_token {
            Some(value) => UserToken::new(value)?,
            None => match self.env.var(UserToken::ENV) {
                Some(value) => UserToken::new(value)?,
                None => {
                    return Err(CredentialError::Missing {
                        field: UserToken::FIELD,
                        env: UserToken::ENV,
                    }
                    .into());
                }
            },
        };

        self.user_token = Some(resolved);
        self.user_device = match user_device {
            Some(value) => Some(DeviceName::new(value)?),
            None => None,
        };
        Ok(())
    }

    /// Create a [`Message`], register it for [`send_all`](PushoverClient::send_all),
    /// and return it for further field setting.
    pub fn create_message(&mut self, text: impl Into<String>) -> &mut Message {
        let index = self.messages.len();
        self.messages.push(Message::new(text));
        &mut self.messages[index]
    }

    /// Messages accumulated through [`create_message`](PushoverClient::create_message),
    /// in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Dispatch a message exactly as built.
    ///
    /// The message's own fields win: the client only injects its application
    /// token, plus the default user/device when the message carries no `user`
    /// field. Returns `true` when Pushover accepted the message.
    pub async fn send(&self, message: &Message) -> Result<bool, PushoverError> {
        self.dispatch(message).await
    }

    /// Build and dispatch a transient message from plain text.
    ///
    /// Applies `options.title` when present, `options.url` when present, and
    /// `options.url_title` only when `options.url` is also present. The
    /// client's default recipient is attached when one is set.
    pub async fn send_text(
        &self,
        text: impl Into<String>,
        options: TextOptions,
    ) -> Result<bool, PushoverError> {
        let mut message = Message::new(text);
        message.set("title", options.title.as_deref());
        if let Some(url) = options.url.as_ref() {
            message.set("url", Some(url.as_str()));
            message.set("url_title", options.url_title.as_deref());
        }
        if let Some(user) = self.user_token.as_ref() {
            message.user(
                user.as_str(),
                self.user_device.as_ref().map(DeviceName::as_str),
            );
        }
        self.dispatch(&message).await
    }

    /// Dispatch every accumulated message in insertion order, collecting one
    /// success flag per message.
    ///
    /// The first failure propagates immediately; later messages are never
    /// dispatched.
    pub async fn send_all(&self) -> Result<Vec<bool>, PushoverError> {
        let mut results = Vec::with_capacity(self.messages.len());
        for message in &self.messages {
            results.push(self.dispatch(message).await?);
        }
        Ok(results)
    }

    async fn dispatch(&self, message: &Message) -> Result<bool, PushoverError> {
        let mut fields = message.fields().clone();
        fields.insert(AppToken::FIELD.to_owned(), self.token.as_str().to_owned());

        if !fields.contains_key(UserToken::FIELD) {
            match self.user_token.as_ref() {
                Some(user) => {
                    fields.insert(UserToken::FIELD.to_owned(), user.as_str().to_owned());
                    if let Some(device) = self.user_device.as_ref() {
                        fields.insert(DeviceName::FIELD.to_owned(), device.as_str().to_owned());
                    }
                }
                None => match self.env.var(FALLBACK_USER_ENV) {
                    Some(user) => {
                        fields.insert(UserToken::FIELD.to_owned(), user);
                    }
                    None => {
                        return Err(CredentialError::Missing {
                            field: UserToken::FIELD,
                            env: FALLBACK_USER_ENV,
                        }
                        .into());
                    }
                },
            }
        }

        let params = crate::transport::encode_message_form(&fields);
        let body = self
            .http
            .post_form(&self.endpoint, params)
            .await
            .map_err(PushoverError::Transport)?;

        let parsed = crate::transport::decode_message_json_response(&body)
            .map_err(|err| PushoverError::Parse(Box::new(err)))?;

        if parsed.status != Status::Ok {
            return Err(PushoverError::Delivery { body });
        }

        Ok(true)
    }
}
