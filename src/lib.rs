//! Typed Rust client for the Pushover notification HTTP API.
//!
//! The design follows a small layered layout: a domain layer of strong types,
//! a transport layer for wire-format details, and a client layer resolving
//! credentials and performing the form-encoded POST to
//! `api.pushover.net/1/messages.json`.
//!
//! Credentials left unspecified are resolved from the environment
//! (`PUSHOVER_APP_TOKEN`, `PUSHOVER_USER_TOKEN`).
//!
//! ```rust,no_run
//! use pushover::{PushoverClient, TextOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushover::PushoverError> {
//!     let client = PushoverClient::builder()
//!         .token("...")
//!         .user_token("...")
//!         .build()?;
//!
//!     client
//!         .send_text(
//!             "Server backup completed successfully",
//!             TextOptions::default(),
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! Network-level failures (connection refused, TLS errors) surface directly
//! through [`PushoverError::Transport`]; the client performs no retries.
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushoverClient, PushoverClientBuilder, PushoverError};
pub use domain::{
    AppToken, CredentialError, DeviceName, Message, MessageResponse, Status, TextOptions, UserToken,
};
