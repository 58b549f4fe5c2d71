use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TelegramHandle {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub value: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
