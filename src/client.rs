use super::error::{Error, Result};
use super::filter::Filters;
use super::url_builder::{UrlBuilder, API_KEY_PARAM};

use reqwest::{
    blocking,
    header::{self, HeaderMap, HeaderValue},
    StatusCode,
};

use serde::{de::DeserializeOwned, Deserialize};

use std::time::Duration;

use tracing::{debug, warn};

/// Root of the official API.
pub const WALLHAVEN_API_URL: &str = "https://wallhaven.cc/api/v1";

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("wallhaven-rs/", env!("CARGO_PKG_VERSION"));

/// Single-resource responses wrap their payload in a `data` field.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Configuration for a [`Client`].
///
/// ```no_run
/// # use wallhaven::client::Client;
/// # use std::time::Duration;
/// # fn main() -> wallhaven::error::Result<()> {
/// let client = Client::builder()
///     .user_agent("MyProject/1.0")
///     .api_key("my-api-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            base_url: WALLHAVEN_API_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            api_key: None,
            timeout: None,
        }
    }
}

impl ClientBuilder {
    /// Same as [`ClientBuilder::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of the API, [`WALLHAVEN_API_URL`] by default. A trailing `/` is removed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Value of the User-Agent header. Mustn't be empty.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// API key, found in the account settings on the website. Required for NSFW content and the
    /// user endpoints.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Timeout for whole requests. There is none by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create the [`Client`].
    ///
    /// Fails with [`Error::CannotCreateClient`] if the User-Agent is empty or isn't a valid
    /// header value, or if the HTTP client can't be initialized.
    pub fn build(self) -> Result<Client> {
        if self.user_agent.is_empty() {
            return Err(Error::CannotCreateClient(String::from(
                "User Agent mustn't be empty",
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        let http = match blocking::Client::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()
        {
            Ok(c) => c,
            Err(e) => return Err(Error::CannotCreateClient(format!("{:?}", e))),
        };

        let mut url = UrlBuilder::new(self.base_url.trim_end_matches('/'));
        if let Some(api_key) = self.api_key {
            url.set_string(API_KEY_PARAM, api_key);
        }

        Ok(Client { http, url })
    }
}

/// Client struct.
///
/// The client owns the base configuration (API key and global filters). Every request starts
/// from a snapshot of it, so per-request state such as page numbers never leaks back into the
/// client.
///
/// Filters are set through `&mut self` while queries borrow the client, so the configuration
/// can't change under a live [`Query`]. Sharing a client across threads while mutating it
/// requires external synchronization, e.g. a `Mutex`.
///
/// [`Query`]: crate::search::Query
#[derive(Debug, Clone)]
pub struct Client {
    http: blocking::Client,
    url: UrlBuilder,
}

impl Client {
    /// Create a new client for the API at `base_url` (usually [`WALLHAVEN_API_URL`]), with the
    /// specified value for the User-Agent header.
    pub fn new(base_url: &str, user_agent: impl Into<String>) -> Result<Self> {
        ClientBuilder::new()
            .base_url(base_url)
            .user_agent(user_agent)
            .build()
    }

    /// Configure a client with a [`ClientBuilder`].
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Set the API key used for every following request.
    pub fn api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.url.set_string(API_KEY_PARAM, api_key);
        self
    }

    /// Whether an API key is configured. This doesn't check that the key is valid.
    pub fn has_api_key(&self) -> bool {
        self.url.has(API_KEY_PARAM)
    }

    /// A snapshot of the base configuration, to be extended into one request.
    pub(crate) fn snapshot(&self) -> UrlBuilder {
        self.url.clone()
    }

    /// Perform a GET request on `url` and decode the response body as `T`.
    ///
    /// `404` and `401` are reported as [`Error::NotFound`] and [`Error::Unauthorized`]. Any other
    /// status is decoded like a success.
    pub(crate) fn get_json<T: DeserializeOwned>(&self, url: &UrlBuilder) -> Result<T> {
        debug!(url = %url.redacted(), "GET");

        let response = self.http.get(url.build()).send()?;
        let status = response.status();

        debug!(status = status.as_u16(), "response received");

        match status {
            StatusCode::NOT_FOUND => return Err(Error::NotFound),
            StatusCode::UNAUTHORIZED => return Err(Error::Unauthorized),
            s if !s.is_success() => warn!(
                status = s.as_u16(),
                "unexpected status, decoding the body anyway"
            ),
            _ => {}
        }

        let body = response.bytes()?;

        Ok(serde_json::from_slice(&body)?)
    }

    /// Perform a GET request on `url` and unwrap the `data` field of the response.
    pub(crate) fn get_data<T: DeserializeOwned>(&self, url: &UrlBuilder) -> Result<T> {
        let envelope: Envelope<T> = self.get_json(url)?;
        Ok(envelope.data)
    }

    /// Fail with [`Error::CredentialRequired`] if no API key is configured.
    pub(crate) fn require_api_key(&self, what: &'static str) -> Result<()> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(Error::CredentialRequired(what))
        }
    }
}

impl Filters for Client {
    fn url_builder(&mut self) -> &mut UrlBuilder {
        &mut self.url
    }
}
