//! Blocking Flickr REST client.
//!
//! Thin wrapper over `reqwest::blocking` for the three methods the fetcher
//! needs. Credentials are held by the client instance and sent with every
//! call; the endpoint is injectable so tests can point at a mock server.

use std::time::Duration;

use crate::config::Credentials;
use crate::error::{FlickrsetError, Result};

use super::types::{Envelope, PhotosetPhotos, PhotosetPhotosResponse, SizeEntry, SizesResponse};

/// Public Flickr REST endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the Flickr REST API.
pub struct FlickrClient {
    endpoint: String,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl FlickrClient {
    /// Create a client against the public Flickr endpoint.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoint(credentials, DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_endpoint(credentials: Credentials, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// The access token this client authenticates with.
    pub fn access_token(&self) -> &str {
        &self.credentials.access_token
    }

    /// Verify the configured credentials (`flickr.test.login`).
    pub fn test_login(&self) -> Result<()> {
        self.call("flickr.test.login", &[])?;
        Ok(())
    }

    /// Fetch the ordered photo list of a photoset
    /// (`flickr.photosets.getPhotos`).
    pub fn photoset_photos(&self, photoset_id: &str) -> Result<PhotosetPhotos> {
        let body = self.call(
            "flickr.photosets.getPhotos",
            &[("photoset_id", photoset_id)],
        )?;
        let response: PhotosetPhotosResponse =
            serde_json::from_value(body).map_err(|e| FlickrsetError::Api {
                message: format!("Malformed flickr.photosets.getPhotos response: {e}"),
            })?;
        Ok(response.photoset)
    }

    /// Fetch all size variants of a photo (`flickr.photos.getSizes`).
    pub fn photo_sizes(&self, photo_id: &str) -> Result<Vec<SizeEntry>> {
        let body = self.call("flickr.photos.getSizes", &[("photo_id", photo_id)])?;
        let response: SizesResponse =
            serde_json::from_value(body).map_err(|e| FlickrsetError::Api {
                message: format!("Malformed flickr.photos.getSizes response: {e}"),
            })?;
        Ok(response.sizes.size)
    }

    /// Issue one REST call and return the parsed JSON body.
    ///
    /// Handles the JSON envelope: an HTTP failure or a `stat: "fail"` body
    /// both surface as [`FlickrsetError::Api`].
    fn call(&self, method: &str, params: &[(&str, &str)]) -> Result<serde_json::Value> {
        tracing::debug!(method, "calling Flickr API");

        let mut query: Vec<(&str, &str)> = vec![
            ("method", method),
            ("api_key", &self.credentials.api_key),
            ("auth_token", &self.credentials.access_token),
            ("format", "json"),
            ("nojsoncallback", "1"),
        ];
        query.extend_from_slice(params);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .map_err(|e| FlickrsetError::Api {
                message: format!("{method} request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlickrsetError::Api {
                message: format!("{method} returned HTTP {status}"),
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| FlickrsetError::Api {
            message: format!("{method} returned unreadable body: {e}"),
        })?;

        let envelope: Envelope =
            serde_json::from_value(body.clone()).map_err(|e| FlickrsetError::Api {
                message: format!("{method} returned malformed envelope: {e}"),
            })?;
        if envelope.stat != "ok" {
            return Err(FlickrsetError::Api {
                message: format!(
                    "{method} failed: {} (code {})",
                    envelope.message.unwrap_or_else(|| "unknown error".into()),
                    envelope.code.unwrap_or(0),
                ),
            });
        }

        Ok(body)
    }
}
