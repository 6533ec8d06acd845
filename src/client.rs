//! Beget async client implementation.

use crate::response::{Envelope, Outcome};
use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _};
use std::time::Duration;
use url::Url;

/// Default root of the Beget API.
pub const DEFAULT_BASE_URL: &str = "https://api.beget.com/api";

const USER_AGENT_VALUE: &str = concat!("beget-client/", env!("CARGO_PKG_VERSION"));

/// Async client for the Beget hosting API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a base URL, proxy, timeout, or your own `reqwest::Client`.
///
/// Cloning is cheap and clones share the underlying connection pool, so one
/// client can serve many concurrent tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    login: String,
    password: SecretString,
    base_url: Url,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Beget client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use beget_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), beget_client::Error> {
    /// let client = Client::new("login", "password")?;
    /// let mailboxes = client.get_mailbox_list("example.com").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().login(login).password(password).build()
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the configured login.
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Call a Beget endpoint and return its typed result.
    ///
    /// `endpoint` is the path below the base URL, e.g. `"mail/dropMailbox"`.
    /// `input` is serialized to JSON and sent as `input_data`.
    ///
    /// Every mail method is a thin wrapper around this; use it directly for
    /// endpoints the crate does not cover.
    ///
    /// # Errors
    /// Returns [`Error::Api`] when Beget reports a failure on either level of
    /// the response, and the other variants for encoding, transport, or
    /// decoding failures.
    ///
    /// # Examples
    /// ```no_run
    /// # use beget_client::Client;
    /// # use std::collections::HashMap;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), beget_client::Error> {
    /// let client = Client::new("login", "password")?;
    /// let input = HashMap::from([("domain", "example.com")]);
    /// let dropped: bool = client.call("mail/clearDomainMail", &input).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn call<I, T>(&self, endpoint: &str, input: &I) -> Result<T>
    where
        I: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope = self.send(endpoint, input).await?;

        match envelope.into_outcome() {
            Outcome::Success(Some(result)) => {
                serde_json::from_value(result).map_err(Error::Decode)
            }
            Outcome::Success(None) => Err(Error::Decode(serde_json::Error::custom(
                "successful response is missing `answer.result`",
            ))),
            Outcome::Failure(errors) => Err(Error::Api(errors)),
        }
    }

    /// Build the full request URL for `endpoint` with `input` as payload.
    ///
    /// The query carries exactly `login`, `passwd`, `input_format`,
    /// `output_format` and `input_data`.
    pub fn request_url<I>(&self, endpoint: &str, input: &I) -> Result<Url>
    where
        I: Serialize + ?Sized,
    {
        let data = serde_json::to_string(input).map_err(Error::Encode)?;

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|s| !s.is_empty()));

        url.query_pairs_mut()
            .clear()
            .append_pair("login", &self.login)
            .append_pair("passwd", self.password.expose_secret())
            .append_pair("input_format", "json")
            .append_pair("output_format", "json")
            .append_pair("input_data", &data);

        Ok(url)
    }

    /// Perform the round trip and decode the envelope, leaving `result` raw.
    async fn send<I>(&self, endpoint: &str, input: &I) -> Result<Envelope>
    where
        I: Serialize + ?Sized,
    {
        let url = self.request_url(endpoint, input)?;

        tracing::debug!(endpoint, "sending Beget API request");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let envelope: Envelope = serde_json::from_slice(&body).map_err(Error::Decode)?;

        tracing::debug!(endpoint, status = ?envelope.status, "received Beget API response");

        Ok(envelope)
    }
}

/// Builder for configuring a Beget client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    login: String,
    password: SecretString,
    base_url: String,
    http: Option<reqwest::Client>,
    proxy: Option<String>,
    danger_accept_invalid_certs: bool,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Empty login and password
    /// - [`DEFAULT_BASE_URL`]
    /// - No proxy, no timeout
    /// - `danger_accept_invalid_certs = false`
    /// - `beget-client/<version>` user agent
    pub fn new() -> Self {
        Self {
            login: String::new(),
            password: SecretString::from(String::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: None,
            proxy: None,
            danger_accept_invalid_certs: false,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// Set the account login.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    /// Set the account password (or API password).
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = SecretString::from(password.into());
        self
    }

    /// Override the API root.
    ///
    /// Useful for testing against a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    ///
    /// When set, [`proxy`](Self::proxy), [`user_agent`](Self::user_agent),
    /// [`timeout`](Self::timeout) and
    /// [`danger_accept_invalid_certs`](Self::danger_accept_invalid_certs)
    /// are ignored.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Set a proxy URL (e.g., "http://127.0.0.1:8080").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Control whether to accept invalid TLS certificates (default: false).
    pub fn danger_accept_invalid_certs(mut self, value: bool) -> Self {
        self.danger_accept_invalid_certs = value;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Abort every request that takes longer than `timeout`.
    ///
    /// An expired request fails with [`Error::Request`], see
    /// [`Error::is_timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    ///
    /// No network request is made here.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBaseUrl`] if the base URL does not parse or
    /// cannot carry a path, and [`Error::Request`] if the HTTP client cannot
    /// be constructed.
    ///
    /// # Examples
    /// ```no_run
    /// # use beget_client::Client;
    /// # fn main() -> Result<(), beget_client::Error> {
    /// let client = Client::builder()
    ///     .login("login")
    ///     .password("password")
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let base_url = parse_base_url(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder()
                    .user_agent(self.user_agent)
                    .danger_accept_invalid_certs(self.danger_accept_invalid_certs);

                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                builder.build()?
            }
        };

        Ok(Client {
            http,
            login: self.login,
            password: self.password,
            base_url,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }

    Ok(url)
}
