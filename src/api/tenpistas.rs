//! Tenpista API client

#[cfg(test)]
use mockall::automock;

use super::{ApiClient, ApiError};
use crate::entities::{CreateTenpistaDto, Tenpista, UpdateTenpistaDto};

/// The five tenpista operations exposed by the backend
///
/// Kept as a trait so stores and forms depend on a capability, not on the
/// HTTP transport.
#[cfg_attr(test, automock)]
pub trait TenpistaApi {
    fn get_all(&self) -> Result<Vec<Tenpista>, ApiError>;
    fn get_by_id(&self, id: i64) -> Result<Tenpista, ApiError>;
    fn create(&self, tenpista: &CreateTenpistaDto) -> Result<Tenpista, ApiError>;
    fn update(&self, id: i64, tenpista: &UpdateTenpistaDto) -> Result<Tenpista, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// `TenpistaApi` over the REST backend
pub struct HttpTenpistaApi {
    client: ApiClient,
}

impl HttpTenpistaApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl TenpistaApi for HttpTenpistaApi {
    fn get_all(&self) -> Result<Vec<Tenpista>, ApiError> {
        self.client.get("/tenpistas")
    }

    fn get_by_id(&self, id: i64) -> Result<Tenpista, ApiError> {
        self.client.get(&format!("/tenpistas/{}", id))
    }

    fn create(&self, tenpista: &CreateTenpistaDto) -> Result<Tenpista, ApiError> {
        self.client.post("/tenpistas", tenpista)
    }

    fn update(&self, id: i64, tenpista: &UpdateTenpistaDto) -> Result<Tenpista, ApiError> {
        self.client.put(&format!("/tenpistas/{}", id), tenpista)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/tenpistas/{}", id))
    }
}
