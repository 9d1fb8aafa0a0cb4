//! Error types for field statistics collection.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while querying a Solr core or writing the report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FstatsError {
    /// The server answered with a non-success status.
    #[error(
        "Solr core \"{core}\" at solr instance \"{instance}\" is not available \
         (request \"{url}\" returned {status}, got response \"{body}\")"
    )]
    ServiceUnavailable {
        /// Core the request was addressed to.
        core: String,
        /// Base URL of the Solr instance.
        instance: String,
        /// Full request URL.
        url: String,
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// The JSON body did not have the expected keys or types.
    #[error("unexpected response shape from \"{url}\": {source}, got response \"{body}\"")]
    UnexpectedResponseShape {
        /// Full request URL.
        url: String,
        /// Raw response body.
        body: String,
        /// Decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// The observed-fields query did not return exactly one header line.
    #[error(
        "expected exactly one field list line from \"{url}\", found {lines}, got response \"{body}\""
    )]
    MalformedFieldListResponse {
        /// Full request URL.
        url: String,
        /// Number of non-blank lines in the body.
        lines: usize,
        /// Raw response body.
        body: String,
    },

    /// The request never produced a response.
    #[error("request \"{url}\" failed: {source}")]
    Network {
        /// Full request URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The connection parameters do not form a valid URL.
    #[error("invalid Solr URL \"{url}\": {reason}")]
    InvalidUrl {
        /// URL that failed to parse.
        url: String,
        /// Parser message.
        reason: String,
    },

    /// Failed to encode the CSV report.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing the report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FstatsError {
    /// Returns the request URL this error is tied to, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::ServiceUnavailable { url, .. }
            | Self::UnexpectedResponseShape { url, .. }
            | Self::MalformedFieldListResponse { url, .. }
            | Self::Network { url, .. }
            | Self::InvalidUrl { url, .. } => Some(url),
            Self::Csv(_) | Self::Io(_) => None,
        }
    }
}

/// Result type alias for field statistics operations.
pub type Result<T> = std::result::Result<T, FstatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_unavailable_display() {
        let err = FstatsError::ServiceUnavailable {
            core: "books".to_string(),
            instance: "http://localhost:8983/solr/".to_string(),
            url: "http://localhost:8983/solr/books/schema?wt=json".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "down".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with(
            "Solr core \"books\" at solr instance \"http://localhost:8983/solr/\" is not available"
        ));
        assert!(message.contains("503"));
        assert!(message.contains("\"down\""));
    }

    #[test]
    fn test_malformed_field_list_display() {
        let err = FstatsError::MalformedFieldListResponse {
            url: "http://h:1/solr/c/select".to_string(),
            lines: 2,
            body: "a,b\n1,2\n".to_string(),
        };
        assert!(err.to_string().contains("found 2"));
        assert_eq!(err.url(), Some("http://h:1/solr/c/select"));
    }

    #[test]
    fn test_io_error_has_no_url() {
        let err: FstatsError = std::io::Error::other("broken pipe").into();
        assert!(err.url().is_none());
    }
}
