//! Shared HTTP transport for the entity clients

use reqwest::blocking::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ApiError;

/// Thin wrapper over a blocking reqwest client with a fixed base URL
///
/// The base URL is injectable so tests and alternate deployments can point
/// the same client elsewhere.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-2xx response into an `ApiError`, pulling the backend's
    /// `detail` field out of the JSON error body when present
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from));

        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send()?;
        Ok(Self::check(response)?.json()?)
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send()?;
        Ok(Self::check(response)?.json()?)
    }

    pub fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.put(self.url(path)).json(body).send()?;
        Ok(Self::check(response)?.json()?)
    }

    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.http.delete(self.url(path)).send()?;
        Self::check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/tenpistas"), "http://localhost:8080/tenpistas");
    }
}
