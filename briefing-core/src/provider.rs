use crate::error::FetchError;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::{convert::TryFrom, fmt::Debug};
use tracing::debug;

pub mod newsapi;
pub mod openweather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    NewsApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::NewsApi => "newsapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::NewsApi]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "newsapi" => Ok(ProviderId::NewsApi),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: openweather, newsapi."
            )),
        }
    }
}

/// One REST endpoint: how to turn a query into parameters and a decoded
/// document into output.
pub trait Endpoint: Debug {
    type Query;
    type Output;

    fn provider(&self) -> ProviderId;

    fn url(&self) -> &str;

    /// Flat name/value pairs; absent or empty values are left out entirely.
    fn query_params(&self, query: &Self::Query) -> Vec<(&'static str, String)>;

    fn extract(&self, document: Value) -> Result<Self::Output, FetchError>;
}

/// Sends exactly one GET per call; no retries.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    http: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// `Ok(None)` means the provider answered with a 2xx other than 200.
    pub async fn fetch<E: Endpoint>(
        &self,
        endpoint: &E,
        query: &E::Query,
    ) -> Result<Option<E::Output>, FetchError> {
        let params = endpoint.query_params(query);
        let names: Vec<&str> = params.iter().map(|(name, _)| *name).collect();
        debug!(provider = %endpoint.provider(), url = endpoint.url(), params = ?names, "sending request");

        let res = self
            .http
            .get(endpoint.url())
            .query(&params)
            .send()
            .await
            .map_err(connection_error)?;

        let status = res.status();
        let body = res.bytes().await.map_err(connection_error)?;

        debug!(provider = %endpoint.provider(), %status, bytes = body.len(), "received response");

        interpret(status, &body, |document| endpoint.extract(document))
    }
}

// reqwest puts the full URL, API key included, into its error text.
fn connection_error(err: reqwest::Error) -> FetchError {
    FetchError::Connection { reason: err.without_url().to_string() }
}

/// Decide what a response means before any field is looked at.
pub fn interpret<T>(
    status: StatusCode,
    body: &[u8],
    extract: impl FnOnce(Value) -> Result<T, FetchError>,
) -> Result<Option<T>, FetchError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(FetchError::Authentication);
    }

    if !status.is_success() {
        debug!(%status, body = %truncate_body(&String::from_utf8_lossy(body)), "request failed");
        return Err(FetchError::Transport {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    if status != StatusCode::OK {
        debug!(%status, "success status without a document, nothing to print");
        return Ok(None);
    }

    let document: Value = serde_json::from_slice(body).map_err(FetchError::Parse)?;
    extract(document).map(Some)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn provider_id_is_case_insensitive() {
        assert_eq!(ProviderId::try_from("NewsAPI").unwrap(), ProviderId::NewsApi);
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    fn passthrough(document: Value) -> Result<Value, FetchError> {
        Ok(document)
    }

    #[test]
    fn unauthorized_wins_over_body() {
        let err = interpret(StatusCode::UNAUTHORIZED, b"{}", passthrough).unwrap_err();
        assert!(matches!(err, FetchError::Authentication));
    }

    #[rstest]
    #[case(StatusCode::NOT_FOUND, "404 Not Found")]
    #[case(StatusCode::TOO_MANY_REQUESTS, "429 Too Many Requests")]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, "500 Internal Server Error")]
    #[case(StatusCode::NOT_MODIFIED, "304 Not Modified")]
    fn non_success_is_transport_error(#[case] status: StatusCode, #[case] message: &str) {
        let err = interpret(status, b"nope", passthrough).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    #[case(StatusCode::CREATED)]
    #[case(StatusCode::ACCEPTED)]
    #[case(StatusCode::NO_CONTENT)]
    fn other_success_codes_yield_nothing(#[case] status: StatusCode) {
        let called = std::cell::Cell::new(false);
        let out = interpret(status, b"not even json", |doc| {
            called.set(true);
            Ok(doc)
        })
        .unwrap();

        assert!(out.is_none());
        assert!(!called.get());
    }

    #[test]
    fn ok_with_garbage_is_parse_error() {
        let err = interpret(StatusCode::OK, b"<html>", passthrough).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(err.to_string(), "Error interpreting HTTP response as JSON");
    }

    #[test]
    fn ok_with_json_reaches_extractor() {
        let out = interpret(StatusCode::OK, br#"{"a":1}"#, passthrough).unwrap();
        assert_eq!(out, Some(serde_json::json!({"a": 1})));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        let short = truncate_body(&long);
        assert!(short.ends_with("..."));
        assert_eq!(short.chars().count(), 203);
        assert_eq!(truncate_body("tiny"), "tiny");
    }
}
