//! HTTP implementation of the catalog provider
//!
//! Endpoints (relative to the base URL):
//! - `GET {base}/all?fields=...` returns the full catalog
//! - `GET {base}/name/{percent-encoded name}` returns the matches for a name
//!
//! Both return a JSON array of country records.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use atlas_core::prelude::*;
use atlas_core::{Country, RawCountry};

use crate::provider::CatalogProvider;

/// Public REST Countries v3.1 endpoint
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested for the list view.
///
/// The provider refuses unfiltered `/all` requests, and the list only needs
/// these; detail fields come from the name lookup.
pub const DEFAULT_LIST_FIELDS: &[&str] = &["name", "capital", "region", "population", "flags"];

/// Characters left untouched, matching the browser's `encodeURIComponent`
const NAME_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a display name for use as a single path segment
pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, NAME_ENCODE_SET).to_string()
}

/// Decode a provider response body into normalized countries
pub fn parse_countries(body: &str) -> Result<Vec<Country>> {
    let raw: Vec<RawCountry> =
        serde_json::from_str(body).map_err(|e| Error::malformed(e.to_string()))?;
    Ok(raw.into_iter().map(Country::from).collect())
}

/// reqwest-backed catalog client
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    base_url: String,
    list_fields: Vec<String>,
}

impl HttpCatalogClient {
    /// Create a client for `base_url` with no request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// Create a client, optionally bounding every request by `timeout`.
    ///
    /// Without a timeout a hung request hangs the view that issued it.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid catalog URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Catalog URL must be http or https: {base_url}"
            )));
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("atlas-explorer/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            list_fields: DEFAULT_LIST_FIELDS.iter().map(|f| f.to_string()).collect(),
        })
    }

    /// Override the `fields` filter sent with the full-list request.
    /// An empty list requests plain `/all`.
    pub fn with_list_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the full-list endpoint
    pub fn all_url(&self) -> String {
        if self.list_fields.is_empty() {
            format!("{}/all", self.base_url)
        } else {
            format!("{}/all?fields={}", self.base_url, self.list_fields.join(","))
        }
    }

    /// URL of the name lookup endpoint for `name`
    pub fn name_url(&self, name: &str) -> String {
        format!("{}/name/{}", self.base_url, encode_name(name))
    }

    /// GET `url` and decode the country array, mapping failures once
    async fn get_countries(&self, url: &str) -> Result<Vec<Country>> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Catalog request returned HTTP {} for {}", status, url);
            return Err(Error::http_status(status.as_u16(), url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read response body: {e}")))?;

        parse_countries(&body)
    }
}

impl CatalogProvider for HttpCatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = self.all_url();
        let countries = self.get_countries(&url).await?;
        info!("Fetched {} countries", countries.len());
        Ok(countries)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Country> {
        let url = self.name_url(name);
        let matches = match self.get_countries(&url).await {
            Ok(matches) => matches,
            // The provider answers an unknown name with 404 rather than []
            Err(Error::HttpStatus { status: 404, .. }) => Vec::new(),
            Err(e) => return Err(e),
        };

        if matches.len() > 1 {
            debug!(
                "Name lookup for '{}' returned {} matches, using the first",
                name,
                matches.len()
            );
        }

        matches
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::FetchErrorKind;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const TWO_COUNTRIES: &str = r#"[
        {"name":{"common":"Chad"},"region":"Africa","capital":["N'Djamena"],"population":16425859},
        {"name":{"common":"Mali"},"region":"Africa","capital":["Bamako"],"population":20250834}
    ]"#;

    /// Serve one canned response per connection, returning the request lines seen.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut request_lines = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap();
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                request_lines.push(request.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
            request_lines
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_encode_name_matches_uri_component_rules() {
        assert_eq!(encode_name("France"), "France");
        assert_eq!(encode_name("United States"), "United%20States");
        assert_eq!(encode_name("Côte d'Ivoire"), "C%C3%B4te%20d'Ivoire");
        assert_eq!(encode_name("Bosnia/Herzegovina"), "Bosnia%2FHerzegovina");
        assert_eq!(encode_name("a?b#c&d"), "a%3Fb%23c%26d");
    }

    #[test]
    fn test_urls() {
        let client = HttpCatalogClient::new("https://example.test/v3.1/").unwrap();
        assert_eq!(client.base_url(), "https://example.test/v3.1");
        assert_eq!(
            client.all_url(),
            "https://example.test/v3.1/all?fields=name,capital,region,population,flags"
        );
        assert_eq!(
            client.name_url("Papua New Guinea"),
            "https://example.test/v3.1/name/Papua%20New%20Guinea"
        );

        let plain = client.with_list_fields(Vec::<String>::new());
        assert_eq!(plain.all_url(), "https://example.test/v3.1/all");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        assert!(matches!(
            HttpCatalogClient::new("not a url"),
            Err(Error::Config { .. })
        ));
        assert!(matches!(
            HttpCatalogClient::new("ftp://example.test"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_parse_countries_rejects_non_array() {
        let err = parse_countries(r#"{"status":404}"#).unwrap_err();
        assert_eq!(err.fetch_kind(), FetchErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_fetch_all_success() {
        let (base, server) = serve(vec![(200, TWO_COUNTRIES)]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let countries = client.fetch_all().await.unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name, "Chad");
        assert_eq!(countries[1].capitals, vec!["Bamako"]);

        let lines = server.await.unwrap();
        assert!(lines[0].starts_with("GET /all?fields=name,capital,region,population,flags "));
    }

    #[tokio::test]
    async fn test_fetch_all_server_error_is_network_error() {
        let (base, _server) = serve(vec![(500, r#"{"message":"boom"}"#)]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let err = client.fetch_all().await.unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
        assert_eq!(err.fetch_kind(), FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_fetch_all_malformed_body() {
        let (base, _server) = serve(vec![(200, "[{\"name\":")]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let err = client.fetch_all().await.unwrap_err();

        assert_eq!(err.fetch_kind(), FetchErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_fetch_all_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpCatalogClient::new(&format!("http://{addr}")).unwrap();
        let err = client.fetch_all().await.unwrap_err();

        assert!(matches!(err, Error::Network { .. }));
    }

    #[tokio::test]
    async fn test_fetch_by_name_takes_first_match_and_encodes_path() {
        let (base, server) = serve(vec![(200, TWO_COUNTRIES)]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let country = client.fetch_by_name("Ch ad").await.unwrap();

        assert_eq!(country.name, "Chad");
        let lines = server.await.unwrap();
        assert!(lines[0].starts_with("GET /name/Ch%20ad "));
    }

    #[tokio::test]
    async fn test_fetch_by_name_empty_result_is_not_found() {
        let (base, _server) = serve(vec![(200, "[]")]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let err = client.fetch_by_name("Atlantis").await.unwrap_err();

        assert!(matches!(err, Error::NotFound { ref name } if name == "Atlantis"));
    }

    #[tokio::test]
    async fn test_fetch_by_name_404_is_not_found() {
        let (base, _server) =
            serve(vec![(404, r#"{"status":404,"message":"Not Found"}"#)]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let err = client.fetch_by_name("Atlantis").await.unwrap_err();

        assert_eq!(err.fetch_kind(), FetchErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_by_name_server_error_stays_network_error() {
        let (base, _server) = serve(vec![(502, "")]).await;
        let client = HttpCatalogClient::new(&base).unwrap();

        let err = client.fetch_by_name("Chad").await.unwrap_err();

        assert_eq!(err.fetch_kind(), FetchErrorKind::Network);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            // Accept and never answer
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let client = HttpCatalogClient::with_timeout(
            &format!("http://{addr}"),
            Some(Duration::from_millis(200)),
        )
        .unwrap();
        let err = client.fetch_all().await.unwrap_err();

        assert!(matches!(err, Error::Network { .. }));
    }
}
