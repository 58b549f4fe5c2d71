use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub instagram_handle: String,
    pub instagram_slug: String,
    pub display_name: String,
    pub last_submission_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Leaderboard row: a participant with the number of handles they submitted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipantStanding {
    pub id: Uuid,
    pub display_name: String,
    pub handles_count: i64,
    pub last_submission_at: DateTime<Utc>,
}
