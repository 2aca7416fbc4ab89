//! Transaction entity - a purchase made by a tenpista

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transaction as returned by the API
///
/// `tenpista_name` is denormalized by the backend from the owning tenpista;
/// it is read-only and never part of a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: f64,
    pub merchant_or_business: String,
    /// Foreign key to an existing `Tenpista`
    pub tenpista_id: i64,
    pub date: DateTime<Utc>,
    pub tenpista_name: String,
}

/// Body for `POST /transactions` - full shape minus `id` and `tenpista_name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionDto {
    pub amount: f64,
    pub merchant_or_business: String,
    pub tenpista_id: i64,
    pub date: DateTime<Utc>,
}

/// Body for `PUT /transactions/{id}` - every field optional, omitted when unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTransactionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_or_business: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenpista_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl From<CreateTransactionDto> for UpdateTransactionDto {
    fn from(dto: CreateTransactionDto) -> Self {
        UpdateTransactionDto {
            amount: Some(dto.amount),
            merchant_or_business: Some(dto.merchant_or_business),
            tenpista_id: Some(dto.tenpista_id),
            date: Some(dto.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_dto_never_carries_tenpista_name() {
        let dto = CreateTransactionDto {
            amount: 5000.0,
            merchant_or_business: "Starbuck Plaza Italia".to_string(),
            tenpista_id: 1,
            date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("tenpista_name").is_none());
        assert!(json.get("id").is_none());
        assert_eq!(json["tenpista_id"], 1);
    }

    #[test]
    fn test_transaction_parses_iso_8601_date() {
        let raw = r#"{
            "id": 7,
            "amount": 12990.5,
            "merchant_or_business": "Jumbo",
            "tenpista_id": 2,
            "date": "2024-05-12T15:30:00Z",
            "tenpista_name": "Tenpista 2"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.date, Utc.with_ymd_and_hms(2024, 5, 12, 15, 30, 0).unwrap());
        assert_eq!(tx.tenpista_name, "Tenpista 2");
    }

    #[test]
    fn test_update_dto_omits_unset_fields() {
        let dto = UpdateTransactionDto {
            amount: Some(100.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"amount":100.0}"#);
    }
}
