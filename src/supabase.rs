use reqwest::{Method, RequestBuilder, Response};
use url::Url;

use crate::consts::API_KEY_HEADER;
use crate::types::{BackendError, GalleryError, Result};

/// Pre-configured http handle to a hosted project. Shared by the storage and
/// table backends.
#[derive(Clone, Debug)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
        })
    }

    /// Appends each segment to the project url, percent-encoding as needed.
    pub fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                GalleryError::InvalidConfig(format!("{} cannot be used as a base url", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::trace!("{} {}", method, url);

        self.http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Passes 2xx responses through, turns anything else into a [BackendError].
    pub async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().await?;
        log::warn!("{} responded {} {}", url, status, body);

        Err(BackendError::from_body(status.as_u16(), &body).into())
    }
}
