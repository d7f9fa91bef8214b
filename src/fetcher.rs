use crate::document::Document;
use crate::error::FetchError;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};
use url::Url;

/// Blocking page retrieval over HTTP(S)
///
/// Every call is a single request with the client's default settings: no
/// retries, no caching. Error statuses are logged and their bodies parsed like
/// any other page.
pub struct Fetcher {
    client: Client,
}

/// A fetched response body and how long it took to arrive
struct TimedBody {
    body: String,
    elapsed: Duration,
}

impl Fetcher {
    /// Create a fetcher with a fresh HTTP client
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Retrieve `url` and parse the body into a document
    pub fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        let TimedBody { body, .. } = self.get(url)?;
        Ok(Document::parse(&body))
    }

    /// Retrieve `url`, returning the document together with the request time
    pub fn fetch_with_timing(&self, url: &str) -> Result<(Document, Duration), FetchError> {
        let TimedBody { body, elapsed } = self.get(url)?;
        Ok((Document::parse(&body), elapsed))
    }

    /// Issue an independent request to `url` and measure it
    ///
    /// The clock starts just before the request is sent and stops once the
    /// whole body has been read.
    pub fn time_request(&self, url: &str) -> Result<Duration, FetchError> {
        self.get(url).map(|timed| timed.elapsed)
    }

    fn get(&self, url: &str) -> Result<TimedBody, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!("GET {}", parsed);
        let start = Instant::now();

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| transport_error(url, source))?;

        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} returned {}, analysing the body anyway", url, status);
        }

        let body = response
            .text()
            .map_err(|source| transport_error(url, source))?;
        let elapsed = start.elapsed();

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2}s",
            body.len(),
            url,
            elapsed.as_secs_f64()
        );

        Ok(TimedBody { body, elapsed })
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        source,
    }
}
