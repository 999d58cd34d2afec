//! Supabase (PostgREST) client.
//!
//! Thin HTTP wrapper over `/rest/v1/{table}`. Pure parsing in
//! `parse_registros` and `parse_error` for testability.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::warn;

use super::Backend;
use super::types::{BackendError, LogEntry, NewFichaje, NewRegistro, Registro};
use crate::config::BackendConfig;

const REST_PATH: &str = "rest/v1";
const TABLE_REGISTROS: &str = "registros";
const TABLE_FICHAJES: &str = "fichajes";
const TABLE_LOGS: &str = "logs_registro";

const RETURN_REPRESENTATION: &str = "return=representation";
const RETURN_MINIMAL: &str = "return=minimal";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
}

impl SupabaseClient {
    /// Build a client with the `apikey` and bearer headers preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.anon_key)
            .map_err(|e| BackendError::HttpClientBuild(format!("invalid api key header: {e}")))?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key))
            .map_err(|e| BackendError::HttpClientBuild(format!("invalid api key header: {e}")))?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, rest_url: rest_url(&config.url) })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    /// POST a single-row array body; returns the response text on success.
    async fn insert<T: serde::Serialize + Sync>(
        &self,
        table: &str,
        row: &T,
        prefer: &'static str,
    ) -> Result<String, BackendError> {
        let response = self
            .http
            .post(self.table_url(table))
            .header("Prefer", prefer)
            .json(&[row])
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        read_body(response).await
    }
}

async fn read_body(response: reqwest::Response) -> Result<String, BackendError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Request(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(parse_error(status, &text));
    }

    Ok(text)
}

#[async_trait::async_trait]
impl Backend for SupabaseClient {
    async fn insert_registro(&self, registro: &NewRegistro) -> Result<Option<Registro>, BackendError> {
        let text = self
            .insert(TABLE_REGISTROS, registro, RETURN_REPRESENTATION)
            .await?;
        Ok(parse_inserted(&text))
    }

    async fn list_registros(&self) -> Result<Vec<Registro>, BackendError> {
        let response = self
            .http
            .get(self.table_url(TABLE_REGISTROS))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let text = read_body(response).await?;
        parse_registros(&text)
    }

    async fn insert_fichaje(&self, fichaje: &NewFichaje) -> Result<(), BackendError> {
        self.insert(TABLE_FICHAJES, fichaje, RETURN_MINIMAL)
            .await
            .map(drop)
    }

    async fn insert_log(&self, entry: &LogEntry) -> Result<(), BackendError> {
        self.insert(TABLE_LOGS, entry, RETURN_MINIMAL)
            .await
            .map(drop)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// PostgREST error body. Every field is optional across server versions.
#[derive(serde::Deserialize)]
struct ApiError {
    code: Option<String>,
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn rest_url(base: &str) -> String {
    format!("{}/{REST_PATH}", base.trim_end_matches('/'))
}

fn parse_registros(json: &str) -> Result<Vec<Registro>, BackendError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))
}

/// The insert already succeeded; a missing or odd representation is not an error.
fn parse_inserted(json: &str) -> Option<Registro> {
    match parse_registros(json) {
        Ok(rows) => rows.into_iter().next(),
        Err(e) => {
            warn!(error = %e, "registro insert accepted but representation unreadable");
            None
        }
    }
}

fn parse_error(status: u16, body: &str) -> BackendError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api) => BackendError::Api {
            status,
            code: api.code.filter(|c| !c.is_empty()),
            message: api.message.unwrap_or_default(),
        },
        Err(_) => BackendError::Api { status, code: None, message: body.trim().to_owned() },
    }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
