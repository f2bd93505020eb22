// src/core/net.rs
//
// Page Fetcher: one blocking GET, no retries.

use reqwest::{StatusCode, Url, blocking::Client};

use crate::{config::consts::USER_AGENT, error::FetchError};

/// Markup of one fetched page. Consumed once by the extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPage {
    pub url: String,
    pub body: String,
}

/// Anything that can turn a URL into a page. `HttpFetcher` in production,
/// canned pages in tests.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<RawPage, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Certificate checks are off: the booking site's chain is not always
    /// complete. Timeout is the client default.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<RawPage, FetchError> {
        logd!("Fetch: GET {}", url);

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Transport { url: s!(url.as_str()), source })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: s!(url.as_str()),
                status: status.as_u16(),
            });
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Body { url: s!(url.as_str()), source })?;
        logd!("Fetch: OK bytes={}", body.len());

        Ok(RawPage { url: s!(url.as_str()), body })
    }
}
