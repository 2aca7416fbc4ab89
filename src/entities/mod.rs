//! Entity models and the DTO shapes accepted by the API

pub mod tenpista;
pub mod transaction;

pub use tenpista::{CreateTenpistaDto, Tenpista, UpdateTenpistaDto};
pub use transaction::{CreateTransactionDto, Transaction, UpdateTransactionDto};
