//! Figma REST API client.
//!
//! Retrieves file JSON, resolves image-fill nodes to rendered image URLs, and
//! downloads the images. Requests are blocking and issued one after another;
//! the extraction core only ever sees their completed results.

use crate::error::{Error, Result};
use crate::extractors::ImageMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

/// Default API root.
pub const FIGMA_API_BASE: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
const TOKEN_HEADER: &str = "X-Figma-Token";

lazy_static! {
    /// Regex for file keys embedded in Figma URLs (`/file/<key>` or `/design/<key>`)
    static ref RE_FILE_URL: Regex =
        Regex::new(r"figma\.com/(?:file|design|proto)/([A-Za-z0-9]+)").unwrap();

    /// Regex for bare file keys
    static ref RE_FILE_KEY: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Response of the images endpoint.
#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    images: ImageMap,
}

/// Blocking client for the Figma REST API.
#[derive(Debug, Clone)]
pub struct FigmaClient {
    token: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl FigmaClient {
    /// Create a client authenticating with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::MissingToken);
        }

        Ok(Self {
            token,
            base_url: FIGMA_API_BASE.to_string(),
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Point the client at a different API root (builder pattern).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full JSON of a file.
    pub fn fetch_file(&self, file_key: &str) -> Result<Value> {
        let url = format!("{}/files/{}", self.base_url, file_key);
        log::info!("Fetching Figma file {}", file_key);
        self.get_json(&url)
    }

    /// Resolve image-fill nodes to rendered PNG URLs.
    ///
    /// No request is made when `node_ids` is empty.
    pub fn fetch_image_urls(&self, file_key: &str, node_ids: &[String]) -> Result<ImageMap> {
        if node_ids.is_empty() {
            return Ok(ImageMap::new());
        }

        let url = image_urls_endpoint(&self.base_url, file_key, node_ids);
        log::info!("Fetching {} image URLs", node_ids.len());

        let response: ImagesResponse = serde_json::from_value(self.get_json(&url)?)?;
        if let Some(err) = response.err {
            log::warn!("Images endpoint reported: {}", err);
        }
        Ok(response.images)
    }

    /// Download an image.
    pub fn download_image(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.bytes()?.to_vec())
    }

    fn get_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).header(TOKEN_HEADER, &self.token).send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            let body = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Build the images endpoint URL for a set of node ids.
fn image_urls_endpoint(base_url: &str, file_key: &str, node_ids: &[String]) -> String {
    let ids = node_ids.join(",");
    format!(
        "{}/images/{}?format=png&ids={}",
        base_url,
        file_key,
        urlencoding::encode(&ids)
    )
}

/// Extract a file key from a bare key or a Figma file URL.
///
/// # Examples
///
/// ```
/// use figma_oxide::fetch::parse_file_key;
///
/// assert_eq!(parse_file_key("j1Y7dKEiGpTOEP07zZoXEQ")?, "j1Y7dKEiGpTOEP07zZoXEQ");
/// assert_eq!(
///     parse_file_key("https://www.figma.com/design/j1Y7dKEiGpTOEP07zZoXEQ/Landing?node-id=0-1")?,
///     "j1Y7dKEiGpTOEP07zZoXEQ"
/// );
/// # Ok::<(), figma_oxide::Error>(())
/// ```
pub fn parse_file_key(input: &str) -> Result<String> {
    let input = input.trim();

    if let Some(caps) = RE_FILE_URL.captures(input) {
        return Ok(caps[1].to_string());
    }
    if RE_FILE_KEY.is_match(input) {
        return Ok(input.to_string());
    }

    Err(Error::InvalidFileKey(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        assert!(matches!(FigmaClient::new(""), Err(Error::MissingToken)));
        assert!(matches!(FigmaClient::new("   "), Err(Error::MissingToken)));
    }

    #[test]
    fn test_base_url_override() {
        let client = FigmaClient::new("token").unwrap();
        assert_eq!(client.base_url(), FIGMA_API_BASE);

        let client = client.with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_no_request_for_empty_ids() {
        // Unroutable base URL: any request would fail
        let client = FigmaClient::new("token")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let images = client.fetch_image_urls("KEY", &[]).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_image_urls_endpoint() {
        let ids = vec!["1:2".to_string(), "3:4".to_string()];
        assert_eq!(
            image_urls_endpoint(FIGMA_API_BASE, "KEY", &ids),
            "https://api.figma.com/v1/images/KEY?format=png&ids=1%3A2%2C3%3A4"
        );

        // Instance ids carry `;` separators
        let ids = vec!["I5:6;7:8".to_string()];
        assert_eq!(
            image_urls_endpoint("http://localhost/v1", "KEY", &ids),
            "http://localhost/v1/images/KEY?format=png&ids=I5%3A6%3B7%3A8"
        );
    }

    #[test]
    fn test_parse_file_key_variants() {
        assert_eq!(parse_file_key("abc123").unwrap(), "abc123");
        assert_eq!(
            parse_file_key("https://www.figma.com/file/abc123/My-File").unwrap(),
            "abc123"
        );
        assert_eq!(parse_file_key("figma.com/proto/XyZ9/Flow").unwrap(), "XyZ9");
        assert!(matches!(parse_file_key("not a key"), Err(Error::InvalidFileKey(_))));
        assert!(parse_file_key("").is_err());
    }

    #[test]
    fn test_images_response_with_nulls() {
        let json = r#"{"err": null, "images": {"1:2": "https://s3/img.png", "3:4": null}}"#;
        let response: ImagesResponse = serde_json::from_str(json).unwrap();
        assert!(response.err.is_none());
        assert_eq!(response.images.len(), 2);
        assert_eq!(response.images["1:2"].as_deref(), Some("https://s3/img.png"));
        assert!(response.images["3:4"].is_none());
    }
}
