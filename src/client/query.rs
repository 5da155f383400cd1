//! Query wire types for the SQL API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A SQL query plus optional bind parameters, in the body shape the
/// query endpoint expects: `{"query": ..., "parameters": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryDefinition {
    pub query: String,
    pub parameters: Vec<QueryParameter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryParameter {
    pub name: String,
    pub value: Value,
}

impl QueryDefinition {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: Value) -> Self {
        self.parameters.push(QueryParameter {
            name: name.into(),
            value,
        });
        self
    }
}

/// One page of query results together with its cost metadata.
#[derive(Debug, Clone)]
pub struct QueryPage {
    pub documents: Vec<Value>,
    /// RU charge of this page, from the `x-ms-request-charge` header.
    pub request_charge: f64,
    /// Continuation token for the next page, absent on the last one.
    pub continuation: Option<String>,
}

/// Wire shape of a query response body.
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponseBody {
    #[serde(rename = "Documents", default)]
    pub documents: Vec<Value>,
    #[serde(rename = "_count", default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_body_shape() {
        let query = QueryDefinition::new("SELECT * FROM c");
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body, json!({"query": "SELECT * FROM c", "parameters": []}));
    }

    #[test]
    fn test_query_body_with_parameters() {
        let query = QueryDefinition::new("SELECT * FROM c WHERE c.Price > @minPrice")
            .with_parameter("@minPrice", json!(500));
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(
            body,
            json!({
                "query": "SELECT * FROM c WHERE c.Price > @minPrice",
                "parameters": [{"name": "@minPrice", "value": 500}]
            })
        );
    }

    #[test]
    fn test_response_body_parsing() {
        let body: QueryResponseBody = serde_json::from_str(
            r#"{"_rid": "abcd==", "Documents": [{"Category": "Music"}, {"Category": "Books"}], "_count": 2}"#,
        )
        .unwrap();
        assert_eq!(body.documents.len(), 2);
        assert_eq!(body.count, 2);
    }

    #[test]
    fn test_response_body_defaults() {
        // An aggregate-only response may omit both fields.
        let body: QueryResponseBody = serde_json::from_str(r#"{"_rid": "abcd=="}"#).unwrap();
        assert!(body.documents.is_empty());
        assert_eq!(body.count, 0);
    }
}
