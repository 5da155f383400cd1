//! Thin query client for the Cosmos DB SQL REST API.
//!
//! Covers exactly what the demo needs: executing a query against one
//! container, one page at a time, surfacing the per-page RU charge and
//! the continuation token. Everything else (retries, cancellation,
//! non-query operations) is deliberately absent.

mod auth;
mod query;

pub use auth::MasterKey;
pub use query::{QueryDefinition, QueryPage, QueryParameter};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::error::{DemoError, DemoResult};
use query::QueryResponseBody;

const API_VERSION: &str = "2018-12-31";

/// One page fetch against a preconfigured container. The runner is
/// generic over this so tests can drive it with a scripted page source.
#[async_trait]
pub trait QueryTransport {
    async fn query_page(
        &self,
        query: &QueryDefinition,
        continuation: Option<&str>,
    ) -> DemoResult<QueryPage>;
}

#[derive(Debug)]
pub struct CosmosClient {
    http: reqwest::Client,
    endpoint: String,
    key: MasterKey,
    // "dbs/{database}/colls/{container}", used both as request path and
    // as the signed resource link.
    collection_link: String,
}

impl CosmosClient {
    pub fn new(
        endpoint: &str,
        master_key: &str,
        database: &str,
        container: &str,
    ) -> DemoResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                DemoError::ConnectionError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: MasterKey::from_base64(master_key)?,
            collection_link: format!("dbs/{}/colls/{}", database, container),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query_headers(&self, continuation: Option<&str>) -> DemoResult<HeaderMap> {
        let date = auth::rfc1123_date();
        let token = self.key.sign("POST", "docs", &self.collection_link, &date)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/query+json"),
        );
        headers.insert(
            "authorization",
            HeaderValue::from_str(&token)
                .map_err(|e| DemoError::AuthError(format!("Invalid auth token: {}", e)))?,
        );
        headers.insert(
            "x-ms-date",
            HeaderValue::from_str(&date)
                .map_err(|e| DemoError::ProtocolError(format!("Invalid date header: {}", e)))?,
        );
        headers.insert("x-ms-version", HeaderValue::from_static(API_VERSION));
        headers.insert("x-ms-documentdb-isquery", HeaderValue::from_static("True"));
        headers.insert(
            "x-ms-documentdb-query-enablecrosspartition",
            HeaderValue::from_static("True"),
        );
        headers.insert("x-ms-max-item-count", HeaderValue::from_static("-1"));

        if let Some(token) = continuation {
            headers.insert(
                "x-ms-continuation",
                HeaderValue::from_str(token).map_err(|e| {
                    DemoError::ProtocolError(format!("Invalid continuation token: {}", e))
                })?,
            );
        }

        Ok(headers)
    }
}

#[async_trait]
impl QueryTransport for CosmosClient {
    async fn query_page(
        &self,
        query: &QueryDefinition,
        continuation: Option<&str>,
    ) -> DemoResult<QueryPage> {
        let url = format!("{}/{}/docs", self.endpoint, self.collection_link);
        let headers = self.query_headers(continuation)?;

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(query)
            .send()
            .await
            .map_err(|e| DemoError::ConnectionError(format!("Query request failed: {}", e)))?;

        let status = response.status();
        let request_charge = header_f64(response.headers(), "x-ms-request-charge");
        let next_continuation = response
            .headers()
            .get("x-ms-continuation")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(DemoError::AuthError(message));
            }
            return Err(DemoError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: QueryResponseBody = response.json().await.map_err(|e| {
            DemoError::ProtocolError(format!("Failed to parse query response: {}", e))
        })?;

        tracing::debug!(
            charge = request_charge,
            count = body.count,
            has_more = next_continuation.is_some(),
            "Fetched query page"
        );

        Ok(QueryPage {
            documents: body.documents,
            request_charge,
            continuation: next_continuation,
        })
    }
}

fn header_f64(headers: &HeaderMap, name: &str) -> f64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}
