//! Connection parameters and request URL construction.

use std::fmt;

use reqwest::Url;

use crate::error::{FstatsError, Result};

/// Default Solr host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default Solr port.
pub const DEFAULT_PORT: u16 = 8983;

/// Filter value matching any non-null value of a field.
const RANGE_EXISTS: &str = "[* TO *]";

/// Prefix that inverts a field filter.
const NEGATION_MARKER: char = '-';

/// Address of a single Solr core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolrConnection {
    /// Hostname or IP address of the Solr instance.
    pub host: String,
    /// Port of the Solr instance.
    pub port: u16,
    /// Core (collection) name.
    pub core: String,
}

/// Response writer requested from Solr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseWriter {
    Json,
    Csv,
}

impl ResponseWriter {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl SolrConnection {
    /// Creates a connection for the given core.
    pub fn new(host: impl Into<String>, port: u16, core: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            core: core.into(),
        }
    }

    /// Creates a connection to `localhost:8983`.
    pub fn local(core: impl Into<String>) -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, core)
    }

    /// Base URL of the Solr instance, used in error messages.
    #[must_use]
    pub fn instance_url(&self) -> String {
        format!("http://{}:{}/solr/", self.host, self.port)
    }

    /// `GET /solr/{core}/schema?wt=json`
    pub fn schema_url(&self) -> Result<Url> {
        let mut url = self.core_url("schema")?;
        url.query_pairs_mut()
            .append_pair("wt", ResponseWriter::Json.as_str());
        Ok(url)
    }

    /// `GET /solr/{core}/select?q=*:*&rows=0&wt=json`
    pub fn total_url(&self) -> Result<Url> {
        self.select_url(None, ResponseWriter::Json)
    }

    /// `GET /solr/{core}/select?q=*:*&rows=0&wt=csv`
    pub fn observed_fields_url(&self) -> Result<Url> {
        self.select_url(None, ResponseWriter::Csv)
    }

    /// `GET /solr/{core}/select?q=*:*&fq={field}:[* TO *]&rows=0&wt=json`
    ///
    /// With `negate` set the field is prefixed with `-`, matching records
    /// without a value.
    pub fn field_total_url(&self, field: &str, negate: bool) -> Result<Url> {
        let filter = if negate {
            format!("{NEGATION_MARKER}{field}:{RANGE_EXISTS}")
        } else {
            format!("{field}:{RANGE_EXISTS}")
        };
        self.select_url(Some(&filter), ResponseWriter::Json)
    }

    fn select_url(&self, filter: Option<&str>, writer: ResponseWriter) -> Result<Url> {
        let mut url = self.core_url("select")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", "*:*");
            if let Some(filter) = filter {
                query.append_pair("fq", filter);
            }
            query
                .append_pair("rows", "0")
                .append_pair("wt", writer.as_str());
        }
        Ok(url)
    }

    fn core_url(&self, handler: &str) -> Result<Url> {
        let base = format!("http://{}:{}/", self.host, self.port);
        let mut url = Url::parse(&base).map_err(|e| FstatsError::InvalidUrl {
            url: base.clone(),
            reason: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|()| FstatsError::InvalidUrl {
                url: base.clone(),
                reason: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(["solr", self.core.as_str(), handler]);
        Ok(url)
    }
}

impl fmt::Display for SolrConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.instance_url(), self.core)
    }
}
