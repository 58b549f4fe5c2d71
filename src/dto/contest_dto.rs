use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::participant::ParticipantStanding;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[validate(length(min = 3, max = 50))]
    pub instagram_handle: String,
    #[validate(length(min = 3, max = 10000))]
    pub telegram_handles: String,
    #[validate(length(min = 3, max = 40))]
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedParticipant {
    pub instagram_handle: String,
    pub instagram_slug: String,
    pub display_name: String,
    pub last_submission_at: DateTime<Utc>,
    pub total_handles: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub participant: SubmittedParticipant,
    pub added_handles: i64,
    pub skipped_handles: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub participant_id: Uuid,
    pub display_name: String,
    pub handles_count: i64,
    pub last_submission_at: DateTime<Utc>,
}

impl From<ParticipantStanding> for LeaderboardEntry {
    fn from(row: ParticipantStanding) -> Self {
        Self {
            participant_id: row.id,
            display_name: row.display_name,
            handles_count: row.handles_count,
            last_submission_at: row.last_submission_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSummary {
    pub total_participants: i64,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub submission: SubmissionResult,
    pub leaderboard: LeaderboardSummary,
}
