//! # Beget Client
//! Asynchronous wrapper around the Beget hosting HTTP API, providing typed methods to manage mailboxes, forwarding lists, and domain mail from Rust using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers automating mail setup on Beget-hosted domains: configure credentials with [`ClientBuilder`], then create, list, reconfigure, and drop mailboxes ([`Mailbox`]).
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Dropping a pending call future cancels the request; use [`ClientBuilder::timeout`] or `tokio::time::timeout` for deadlines.
//!
//! ## Out of scope
//! Only the mail functions are wrapped. Other Beget endpoints can be reached through [`Client::call`], which handles authentication and the response envelope for any endpoint. No retries or rate limiting are performed.
//!
//! ## Errors
//! Failures reported by Beget surface as [`Error::Api`] holding an [`ApiErrors`] list of `(code, text)` pairs. Transport failures and non-2xx statuses are [`Error::Request`]; malformed responses are [`Error::Decode`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use beget_client::{Client, Error};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::new("login", "password")?;
//!
//!     match client.drop_mailbox("example.com", "old").await {
//!         Ok(_) => println!("dropped"),
//!         Err(Error::Api(errors)) if errors.has_code("INVALID_DATA") => {
//!             println!("no such mailbox");
//!         }
//!         Err(e) => return Err(e),
//!     }
//!
//!     for mailbox in client.get_mailbox_list("example.com").await? {
//!         println!("{}: {:?}", mailbox.mailbox, mailbox.forward_mail_status);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod mail;
mod response;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
pub use mail::{ForwardMailStatus, ForwardMailbox, Mailbox, MailboxSettings, SpamFilterStatus};
pub use response::{Answer, ApiError, ApiErrors, Envelope, ErrorCode, Outcome, Status};

/// Result type alias for Beget operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
