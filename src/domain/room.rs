use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Single,
    Double,
    Suite,
    Deluxe,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    pub status: RoomStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub max_occupancy: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn new(draft: RoomDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_number: draft.room_number,
            room_type: draft.room_type,
            price_per_night: draft.price_per_night,
            status: RoomStatus::Available,
            description: draft.description,
            max_occupancy: draft.max_occupancy,
            amenities: draft.amenities,
            created_at: Utc::now(),
        }
    }
}

/// Fields accepted when creating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDraft {
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "RoomDraft::default_occupancy")]
    pub max_occupancy: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl RoomDraft {
    pub fn new(
        room_number: impl Into<String>,
        room_type: RoomType,
        price_per_night: f64,
    ) -> Self {
        Self {
            room_number: room_number.into(),
            room_type,
            price_per_night,
            description: None,
            max_occupancy: Self::default_occupancy(),
            amenities: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_occupancy(mut self, max_occupancy: u32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    fn default_occupancy() -> u32 {
        2
    }
}

/// Partial update applied to an existing room; unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type: Option<RoomType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_night: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_occupancy: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}
