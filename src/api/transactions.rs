//! Transaction API client

#[cfg(test)]
use mockall::automock;

use super::{ApiClient, ApiError};
use crate::entities::{CreateTransactionDto, Transaction, UpdateTransactionDto};

/// The five transaction operations exposed by the backend
#[cfg_attr(test, automock)]
pub trait TransactionApi {
    fn get_all(&self) -> Result<Vec<Transaction>, ApiError>;
    fn get_by_id(&self, id: i64) -> Result<Transaction, ApiError>;
    fn create(&self, transaction: &CreateTransactionDto) -> Result<Transaction, ApiError>;
    fn update(&self, id: i64, transaction: &UpdateTransactionDto)
        -> Result<Transaction, ApiError>;
    fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// `TransactionApi` over the REST backend
pub struct HttpTransactionApi {
    client: ApiClient,
}

impl HttpTransactionApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl TransactionApi for HttpTransactionApi {
    fn get_all(&self) -> Result<Vec<Transaction>, ApiError> {
        self.client.get("/transactions")
    }

    fn get_by_id(&self, id: i64) -> Result<Transaction, ApiError> {
        self.client.get(&format!("/transactions/{}", id))
    }

    fn create(&self, transaction: &CreateTransactionDto) -> Result<Transaction, ApiError> {
        self.client.post("/transactions", transaction)
    }

    fn update(
        &self,
        id: i64,
        transaction: &UpdateTransactionDto,
    ) -> Result<Transaction, ApiError> {
        self.client.put(&format!("/transactions/{}", id), transaction)
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/transactions/{}", id))
    }
}
