//! Court model and related functionality

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Day of the week a court opens for play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Playing surface dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub length: f64,
}

/// Weekly opening window of a court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub day_of_week: DayOfWeek,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Court entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub neighborhood: String,
    /// Phone number in international format, digits only
    pub whatsapp: String,
    pub photo_url: Option<String>,
    pub responsible: String,
    pub is_available: bool,
    pub surface: String,
    pub dimensions: Dimensions,
    pub schedule: Schedule,
    /// `None` for courts inserted by the demo seeder
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New court creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourt {
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub neighborhood: String,
    pub whatsapp: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub responsible: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
    pub surface: String,
    pub dimensions: Dimensions,
    pub schedule: Schedule,
}

fn default_available() -> bool {
    true
}

/// Court update payload; `None` fields are left unchanged
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateCourt {
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub whatsapp: Option<String>,
    pub photo_url: Option<String>,
    pub responsible: Option<String>,
    pub is_available: Option<bool>,
    pub surface: Option<String>,
    pub dimensions: Option<Dimensions>,
    pub schedule: Option<Schedule>,
}

/// Response for court operations
///
/// Adds the `wa.me` deep link clients open to contact the person
/// responsible for the court.
#[derive(Debug, Clone, Serialize)]
pub struct CourtResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub address: String,
    pub city: String,
    pub neighborhood: String,
    pub whatsapp: String,
    pub whatsapp_link: String,
    pub photo_url: Option<String>,
    pub responsible: String,
    pub is_available: bool,
    pub surface: String,
    pub dimensions: Dimensions,
    pub schedule: Schedule,
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Court> for CourtResponse {
    fn from(court: Court) -> Self {
        let whatsapp_link = format!("https://wa.me/{}", court.whatsapp);

        Self {
            id: court.id,
            name: court.name,
            location: court.location,
            address: court.address,
            city: court.city,
            neighborhood: court.neighborhood,
            whatsapp: court.whatsapp,
            whatsapp_link,
            photo_url: court.photo_url,
            responsible: court.responsible,
            is_available: court.is_available,
            surface: court.surface,
            dimensions: court.dimensions,
            schedule: court.schedule,
            creator_id: court.creator_id,
            created_at: court.created_at,
            updated_at: court.updated_at,
        }
    }
}
