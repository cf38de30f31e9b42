//! The Part data model: one row of the remote `parts` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single inventory item record as stored in the remote table.
///
/// `id`, `serial_number`, `created_at`, and `updated_at` are assigned by the
/// storage layer and never sent by the client; `NewPart` and `PartPatch`
/// carry only the client-settable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub serial_number: i64,
    pub part_name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub rate: f64,
    pub image_url: Option<String>,
    pub warehouse_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a new part
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPart {
    pub part_name: String,
    pub description: Option<String>,
    pub quantity: i64,
    pub rate: f64,
    pub image_url: Option<String>,
    pub warehouse_location: Option<String>,
}

/// Partial update for an existing part.
///
/// Unset fields are omitted from the serialized body, so the remote table
/// leaves them untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_location: Option<Option<String>>,
}

impl PartPatch {
    /// Patch that sets only the quantity
    pub fn quantity(q: i64) -> Self {
        Self {
            quantity: Some(q),
            ..Default::default()
        }
    }

    /// True when no field would be patched
    pub fn is_empty(&self) -> bool {
        self.part_name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.rate.is_none()
            && self.image_url.is_none()
            && self.warehouse_location.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = PartPatch::quantity(80);
        let json = serde_json::to_value(&patch).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["quantity"], 80);
    }

    #[test]
    fn test_patch_can_clear_optional_field() {
        let patch = PartPatch {
            warehouse_location: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();

        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj["warehouse_location"].is_null());
    }

    #[test]
    fn test_empty_patch() {
        assert!(PartPatch::default().is_empty());
        assert!(!PartPatch::quantity(1).is_empty());
    }

    #[test]
    fn test_part_round_trips_table_row() {
        let row = serde_json::json!({
            "id": 7,
            "serial_number": 1007,
            "part_name": "Bolt M6",
            "description": null,
            "quantity": 100,
            "rate": 2.5,
            "image_url": null,
            "warehouse_location": "Aisle 3",
            "created_at": "2025-01-10T09:30:00Z",
            "updated_at": "2025-01-10T09:30:00Z"
        });

        let part: Part = serde_json::from_value(row).unwrap();
        assert_eq!(part.id, 7);
        assert_eq!(part.part_name, "Bolt M6");
        assert_eq!(part.warehouse_location.as_deref(), Some("Aisle 3"));
        assert!(part.description.is_none());
    }
}
