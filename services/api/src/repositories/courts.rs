//! Court repository backed by process memory

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use common::error::{StoreError, StoreResult};

use crate::models::{Court, NewCourt, UpdateCourt};

/// Court repository for registry operations
#[derive(Clone, Default)]
pub struct CourtStore {
    courts: Arc<RwLock<Vec<Court>>>,
}

impl CourtStore {
    /// Create a new, empty court store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new court
    pub async fn add(&self, payload: NewCourt, creator_id: Option<Uuid>) -> Court {
        let now = Utc::now();
        let court = Court {
            id: Uuid::new_v4(),
            name: payload.name,
            location: payload.location,
            address: payload.address,
            city: payload.city,
            neighborhood: payload.neighborhood,
            whatsapp: payload.whatsapp,
            photo_url: payload.photo_url,
            responsible: payload.responsible,
            is_available: payload.is_available,
            surface: payload.surface,
            dimensions: payload.dimensions,
            schedule: payload.schedule,
            creator_id,
            created_at: now,
            updated_at: now,
        };

        info!("Registering court: {}", court.name);
        self.courts.write().await.push(court.clone());
        court
    }

    /// All courts in insertion order
    pub async fn all(&self) -> Vec<Court> {
        self.courts.read().await.clone()
    }

    /// Find a court by ID
    pub async fn find(&self, id: Uuid) -> Option<Court> {
        self.courts
            .read()
            .await
            .iter()
            .find(|court| court.id == id)
            .cloned()
    }

    /// Whether a court with this ID exists
    pub async fn exists(&self, id: Uuid) -> bool {
        self.courts.read().await.iter().any(|court| court.id == id)
    }

    /// Whether the store holds no courts yet
    pub async fn is_empty(&self) -> bool {
        self.courts.read().await.is_empty()
    }

    /// Courts registered by the given user
    pub async fn by_creator(&self, creator_id: Uuid) -> Vec<Court> {
        self.courts
            .read()
            .await
            .iter()
            .filter(|court| court.creator_id == Some(creator_id))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search on city and neighborhood
    ///
    /// An absent or empty filter matches every court.
    pub async fn search(&self, city: Option<&str>, neighborhood: Option<&str>) -> Vec<Court> {
        self.courts
            .read()
            .await
            .iter()
            .filter(|court| {
                matches_filter(&court.city, city) && matches_filter(&court.neighborhood, neighborhood)
            })
            .cloned()
            .collect()
    }

    /// Apply a partial update; only the creator may edit
    pub async fn update(&self, id: Uuid, actor: Uuid, changes: UpdateCourt) -> StoreResult<Court> {
        let mut courts = self.courts.write().await;
        let court = courts
            .iter_mut()
            .find(|court| court.id == id)
            .ok_or(StoreError::CourtNotFound)?;

        if court.creator_id != Some(actor) {
            return Err(StoreError::Forbidden("Only court creator can edit this court"));
        }

        if let Some(name) = changes.name {
            court.name = name;
        }
        if let Some(location) = changes.location {
            court.location = location;
        }
        if let Some(address) = changes.address {
            court.address = address;
        }
        if let Some(city) = changes.city {
            court.city = city;
        }
        if let Some(neighborhood) = changes.neighborhood {
            court.neighborhood = neighborhood;
        }
        if let Some(whatsapp) = changes.whatsapp {
            court.whatsapp = whatsapp;
        }
        if let Some(photo_url) = changes.photo_url {
            court.photo_url = Some(photo_url);
        }
        if let Some(responsible) = changes.responsible {
            court.responsible = responsible;
        }
        if let Some(is_available) = changes.is_available {
            court.is_available = is_available;
        }
        if let Some(surface) = changes.surface {
            court.surface = surface;
        }
        if let Some(dimensions) = changes.dimensions {
            court.dimensions = dimensions;
        }
        if let Some(schedule) = changes.schedule {
            court.schedule = schedule;
        }
        court.updated_at = Utc::now();

        Ok(court.clone())
    }

    /// Remove a court; only the creator may delete
    pub async fn remove(&self, id: Uuid, actor: Uuid) -> StoreResult<()> {
        let mut courts = self.courts.write().await;
        let index = courts
            .iter()
            .position(|court| court.id == id)
            .ok_or(StoreError::CourtNotFound)?;

        if courts[index].creator_id != Some(actor) {
            return Err(StoreError::Forbidden("Only court creator can delete this court"));
        }

        let removed = courts.remove(index);
        info!("Removed court: {}", removed.name);
        Ok(())
    }
}

fn matches_filter(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(term) if !term.is_empty() => value.to_lowercase().contains(&term.to_lowercase()),
        _ => true,
    }
}
