pub mod imp;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;
    fn post(&self, url: &str) -> RequestBuilder;
    fn patch(&self, url: &str) -> RequestBuilder;
    fn delete(&self, url: &str) -> RequestBuilder;

    async fn send(
        &self,
        url: &str,
        body: Option<Vec<u8>>,
        headers: Option<Headers>,
        method: Method,
    ) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone, Copy)]
pub struct StatusCode(pub u16);

#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status: StatusCode,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
    #[error("Url encoding error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
}

impl Response {
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_client_error() || self.status.is_server_error() {
            Err(Error::StatusCodeIsError(self.status))
        } else {
            Ok(self)
        }
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(Error::JsonError)
    }
}

impl StatusCode {
    pub fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    pub fn is_redirection(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }

    pub fn is_client_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }

    pub fn is_server_error(&self) -> bool {
        self.0 >= 500 && self.0 < 600
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    body: Option<Vec<u8>>,
    headers: Headers,
    method: Method,
    url: String,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            body: None,
            headers: Headers::default(),
            method,
            url: url.to_string(),
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends the serialized pairs to the URL's query string.
    pub fn query<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        let encoded = serde_urlencoded::to_string(value)?;
        if !encoded.is_empty() {
            let separator = if self.url.contains('?') { '&' } else { '?' };
            self.url = format!("{}{separator}{encoded}", self.url);
        }
        Ok(self)
    }

    pub fn json<T: Serialize>(mut self, value: T) -> Result<Self, Error> {
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_owned());
        self.body = Some(serde_json::to_vec(&value).map_err(Error::JsonError)?);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, Error> {
        let headers = if self.headers.is_empty() {
            None
        } else {
            Some(self.headers)
        };

        self.client
            .send(&self.url, self.body, headers, self.method)
            .await
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            body: body.to_vec(),
            headers: Headers::default(),
            status: StatusCode(status),
        }
    }

    #[test]
    fn test_status_code_ranges() {
        assert!(StatusCode(200).is_success());
        assert!(StatusCode(204).is_success());
        assert!(StatusCode(301).is_redirection());
        assert!(StatusCode(404).is_client_error());
        assert!(StatusCode(500).is_server_error());
        assert!(!StatusCode(500).is_success());
    }

    #[test]
    fn test_error_for_status_passes_success_through() {
        assert!(response(200, b"{}").error_for_status().is_ok());
        assert!(matches!(
            response(400, b"{}").error_for_status(),
            Err(Error::StatusCodeIsError(StatusCode(400)))
        ));
    }

    #[test]
    fn test_response_json_decodes_body() {
        let decoded: serde_json::Value = response(200, br#"{"ok":true}"#).json().unwrap();
        assert_eq!(decoded["ok"], serde_json::Value::Bool(true));

        let malformed = response(200, b"not json").json::<serde_json::Value>();
        assert!(matches!(malformed, Err(Error::JsonError(_))));
    }

    #[tokio::test]
    async fn test_query_appends_pairs_to_the_url() {
        let mut client = MockHttpClient::default();
        client
            .expect_send()
            .withf(|url, _, _, _| url == "http://backend.test/claims?status=Draft")
            .returning(|_, _, _, _| Ok(response(200, b"")));

        RequestBuilder::new(Arc::new(client), Method::Get, "http://backend.test/claims")
            .query([("status", "Draft")])
            .unwrap()
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_query_leaves_the_url_alone() {
        let mut client = MockHttpClient::default();
        client
            .expect_send()
            .withf(|url, _, _, _| url == "http://backend.test/claims")
            .returning(|_, _, _, _| Ok(response(200, b"")));

        RequestBuilder::new(Arc::new(client), Method::Get, "http://backend.test/claims")
            .query(Vec::<(&str, &str)>::new())
            .unwrap()
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_json_body_sets_the_content_type() {
        let mut client = MockHttpClient::default();
        client
            .expect_send()
            .withf(|_, body, headers, _| {
                body.as_deref() == Some(br#"{"name":"x"}"#.as_slice())
                    && headers
                        .as_ref()
                        .is_some_and(|h| h.get("Content-Type").map(String::as_str)
                            == Some("application/json"))
            })
            .returning(|_, _, _, _| Ok(response(201, b"")));

        RequestBuilder::new(Arc::new(client), Method::Post, "http://backend.test/projects")
            .json(serde_json::json!({"name": "x"}))
            .unwrap()
            .send()
            .await
            .unwrap();
    }
}
