//! Demo data inserted at startup
//!
//! The seeded courts have no creator, so nobody can edit them or schedule
//! matches there.

use chrono::NaiveTime;
use tracing::info;

use crate::models::{DayOfWeek, Dimensions, NewCourt, Schedule};
use crate::state::AppState;

/// Insert the demo courts unless the store already holds courts
pub async fn seed_demo_courts(state: &AppState) {
    if !state.courts.is_empty().await {
        return;
    }

    state
        .courts
        .add(
            NewCourt {
                name: "Central Court".to_string(),
                location: "Main Complex".to_string(),
                address: "Rua das Quadras, 123".to_string(),
                city: "São Paulo".to_string(),
                neighborhood: "Vila Olímpia".to_string(),
                whatsapp: "5511999999999".to_string(),
                photo_url: Some("https://example.com/court1.jpg".to_string()),
                responsible: "João Silva".to_string(),
                is_available: true,
                surface: "Hard".to_string(),
                dimensions: Dimensions {
                    width: 10.97,
                    length: 23.77,
                },
                schedule: Schedule {
                    day_of_week: DayOfWeek::Saturday,
                    start_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time literal"),
                    end_time: NaiveTime::from_hms_opt(12, 0, 0).expect("valid time literal"),
                },
            },
            None,
        )
        .await;

    state
        .courts
        .add(
            NewCourt {
                name: "Practice Court 1".to_string(),
                location: "Training Area".to_string(),
                address: "Avenida do Esporte, 456".to_string(),
                city: "São Paulo".to_string(),
                neighborhood: "Moema".to_string(),
                whatsapp: "5511988888888".to_string(),
                photo_url: Some("https://example.com/court2.jpg".to_string()),
                responsible: "Maria Santos".to_string(),
                is_available: true,
                surface: "Clay".to_string(),
                dimensions: Dimensions {
                    width: 10.97,
                    length: 23.77,
                },
                schedule: Schedule {
                    day_of_week: DayOfWeek::Sunday,
                    start_time: NaiveTime::from_hms_opt(15, 0, 0).expect("valid time literal"),
                    end_time: NaiveTime::from_hms_opt(18, 0, 0).expect("valid time literal"),
                },
            },
            None,
        )
        .await;

    info!("Seeded demo courts");
}
