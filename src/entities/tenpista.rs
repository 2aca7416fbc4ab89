//! Tenpista entity - a tracked spender in the Tenpo system

use serde::{Deserialize, Serialize};

/// A tenpista as returned by the API
///
/// The `id` is assigned by the backend on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenpista {
    pub id: i64,
    pub name: String,
    /// Chilean RUT, stored exactly as entered (e.g. "12345678-9")
    pub rut: String,
}

/// Body for `POST /tenpistas` - the full shape minus `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTenpistaDto {
    pub name: String,
    pub rut: String,
}

/// Body for `PUT /tenpistas/{id}` - every field optional, omitted when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTenpistaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
}

impl From<CreateTenpistaDto> for UpdateTenpistaDto {
    fn from(dto: CreateTenpistaDto) -> Self {
        UpdateTenpistaDto {
            name: Some(dto.name),
            rut: Some(dto.rut),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_dto_omits_unset_fields() {
        let dto = UpdateTenpistaDto {
            name: Some("Maria Lopez".to_string()),
            rut: None,
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"name":"Maria Lopez"}"#);
    }

    #[test]
    fn test_create_dto_round_trips_name_and_rut() {
        let dto = CreateTenpistaDto {
            name: "New Tenpista".to_string(),
            rut: "12345678-9".to_string(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["name"], "New Tenpista");
        assert_eq!(json["rut"], "12345678-9");
        assert!(json.get("id").is_none());
    }
}
