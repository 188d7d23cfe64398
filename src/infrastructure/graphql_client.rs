// GraphQL over HTTP client, built once and shared
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphQlError {
    #[error("failed to send request to GraphQL endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GraphQL endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("GraphQL errors: {}", .0.join("; "))]
    Response(Vec<String>),

    #[error("GraphQL response has no '{0}' field")]
    MissingField(String),

    #[error("failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GraphQlError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` and decode `data.<field>` into `T`
    pub async fn query<V, T>(&self, query: &str, variables: V, field: &str) -> Result<T, GraphQlError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request = GraphQlRequest { query, variables };

        let response = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GraphQlError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        tracing::trace!("GraphQL response for '{}': {} bytes", field, body.len());
        extract_field(&body, field)
    }
}

/// Pull one top-level field out of a GraphQL response body.
///
/// Any entry in `errors` fails the whole response, even when `data` is present.
fn extract_field<T: DeserializeOwned>(body: &str, field: &str) -> Result<T, GraphQlError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        return Err(GraphQlError::Response(
            errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    let value = response
        .data
        .and_then(|mut data| data.get_mut(field).map(serde_json::Value::take))
        .filter(|v| !v.is_null())
        .ok_or_else(|| GraphQlError::MissingField(field.to_string()))?;

    Ok(serde_json::from_value(value)?)
}
