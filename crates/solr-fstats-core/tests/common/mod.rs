//! In-memory Solr stand-in for pipeline tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use reqwest::{StatusCode, Url};
use solr_fstats_core::{RawResponse, Result, SolrClient, SolrConnection, Transport};

/// Serves canned responses keyed by request URL and records every request.
#[derive(Debug, Default)]
pub struct StubSolr {
    responses: HashMap<String, RawResponse>,
    requests: RefCell<Vec<String>>,
}

impl StubSolr {
    pub fn connection() -> SolrConnection {
        SolrConnection::new("solr.test", 8983, "books")
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: Url, response: RawResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    pub fn schema(self, fields: &[&str]) -> Self {
        let fields: Vec<_> = fields
            .iter()
            .map(|name| serde_json::json!({"name": name, "type": "string"}))
            .collect();
        let body = serde_json::json!({
            "responseHeader": {"status": 0, "QTime": 0},
            "schema": {"name": "books", "version": 1.6, "fields": fields}
        });
        let url = Self::connection().schema_url().unwrap();
        self.respond(url, RawResponse::ok(body.to_string()))
    }

    pub fn observed(self, body: &str) -> Self {
        let url = Self::connection().observed_fields_url().unwrap();
        self.respond(url, RawResponse::ok(body))
    }

    pub fn total(self, count: u64) -> Self {
        let url = Self::connection().total_url().unwrap();
        self.respond(url, RawResponse::ok(num_found(count)))
    }

    pub fn field(self, name: &str, existing: u64, missing: u64) -> Self {
        let present = Self::connection().field_total_url(name, false).unwrap();
        let absent = Self::connection().field_total_url(name, true).unwrap();
        self.respond(present, RawResponse::ok(num_found(existing)))
            .respond(absent, RawResponse::ok(num_found(missing)))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for StubSolr {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self
            .responses
            .get(url.as_str())
            .cloned()
            .unwrap_or_else(|| RawResponse::new(StatusCode::NOT_FOUND, "not found")))
    }
}

impl Transport for &StubSolr {
    fn get(&self, url: &Url) -> Result<RawResponse> {
        (**self).get(url)
    }
}

pub fn client(stub: &StubSolr) -> SolrClient<&StubSolr> {
    SolrClient::with_transport(stub, StubSolr::connection())
}

pub fn num_found(count: u64) -> String {
    serde_json::json!({
        "responseHeader": {"status": 0, "QTime": 0},
        "response": {"numFound": count, "start": 0, "numFoundExact": true, "docs": []}
    })
    .to_string()
}
