//! HTTP access to a Solr core.
//!
//! [`SolrClient`] turns raw responses into typed values and the error
//! taxonomy of this crate. The network itself sits behind [`Transport`], so
//! the pipeline can be driven without a running server.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::connection::SolrConnection;
use crate::error::{FstatsError, Result};

/// User agent string for Solr requests.
const USER_AGENT_VALUE: &str = concat!("solr-fstats/", env!("CARGO_PKG_VERSION"));

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Body decoded as UTF-8.
    pub body: String,
}

impl RawResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Creates a `200 OK` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Issues GET requests.
pub trait Transport {
    /// Performs a GET request and returns the status and body.
    ///
    /// Non-success statuses are returned as responses, not errors.
    fn get(&self, url: &Url) -> Result<RawResponse>;
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the client's default timeout.
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .default_headers(headers)
            .build()
            .map_err(|source| FstatsError::Network {
                url: String::new(),
                source,
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        let network = |source: reqwest::Error| FstatsError::Network {
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url.clone()).send().map_err(network)?;
        let status = response.status();
        let body = response.text().map_err(network)?;
        Ok(RawResponse { status, body })
    }
}

/// Client for the query endpoints of one Solr core.
#[derive(Debug, Clone)]
pub struct SolrClient<T> {
    transport: T,
    connection: SolrConnection,
}

impl SolrClient<HttpTransport> {
    /// Creates a client that talks to the network.
    pub fn connect(connection: SolrConnection) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?, connection))
    }
}

impl<T: Transport> SolrClient<T> {
    /// Creates a client over an arbitrary transport.
    pub fn with_transport(transport: T, connection: SolrConnection) -> Self {
        Self {
            transport,
            connection,
        }
    }

    /// Connection parameters of this client.
    pub fn connection(&self) -> &SolrConnection {
        &self.connection
    }

    /// Fetches `url` and decodes the body as `R`.
    pub fn get_json<R: DeserializeOwned>(&self, url: &Url) -> Result<R> {
        let body = self.get_text(url)?;
        serde_json::from_str(&body).map_err(|source| FstatsError::UnexpectedResponseShape {
            url: url.to_string(),
            body,
            source,
        })
    }

    /// Fetches `url` and returns the raw body.
    pub fn get_text(&self, url: &Url) -> Result<String> {
        debug!(%url, "requesting");
        let response = self.transport.get(url)?;
        trace!(status = %response.status, bytes = response.body.len(), "response received");

        if !response.status.is_success() {
            return Err(FstatsError::ServiceUnavailable {
                core: self.connection.core.clone(),
                instance: self.connection.instance_url(),
                url: url.to_string(),
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::SelectResponse;

    struct Fixed(RawResponse);

    impl Transport for Fixed {
        fn get(&self, _url: &Url) -> Result<RawResponse> {
            Ok(self.0.clone())
        }
    }

    fn client(response: RawResponse) -> SolrClient<Fixed> {
        SolrClient::with_transport(Fixed(response), SolrConnection::local("books"))
    }

    #[test]
    fn test_client_creation() {
        assert!(SolrClient::connect(SolrConnection::local("books")).is_ok());
    }

    #[test]
    fn test_get_json_decodes() {
        let client = client(RawResponse::ok(r#"{"response":{"numFound":7}}"#));
        let url = client.connection().total_url().unwrap();
        let parsed: SelectResponse = client.get_json(&url).unwrap();
        assert_eq!(parsed.response.num_found, 7);
    }

    #[test]
    fn test_non_success_is_service_unavailable() {
        let client = client(RawResponse::new(StatusCode::NOT_FOUND, "no such core"));
        let url = client.connection().schema_url().unwrap();
        let err = client.get_text(&url).unwrap_err();
        match err {
            FstatsError::ServiceUnavailable {
                core,
                instance,
                status,
                body,
                ..
            } => {
                assert_eq!(core, "books");
                assert_eq!(instance, "http://localhost:8983/solr/");
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(body, "no such core");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bad_json_is_unexpected_shape() {
        let client = client(RawResponse::ok("<html>proxy error</html>"));
        let url = client.connection().total_url().unwrap();
        let err = client.get_json::<SelectResponse>(&url).unwrap_err();
        assert!(matches!(
            err,
            FstatsError::UnexpectedResponseShape { ref body, .. } if body == "<html>proxy error</html>"
        ));
    }
}
