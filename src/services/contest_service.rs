use sqlx::PgPool;
use std::collections::HashSet;
use tracing::info;
use uuid::Uuid;

use crate::dto::contest_dto::{
    LeaderboardEntry, LeaderboardSummary, SubmissionPayload, SubmissionResult,
    SubmittedParticipant,
};
use crate::error::{Error, Result};
use crate::models::participant::{Participant, ParticipantStanding};
use crate::models::telegram_handle::TelegramHandle;
use crate::utils::validation::{is_handle_charset, strip_handle};

const MAX_HANDLES_PER_SUBMISSION: usize = 200;
const DISPLAY_NAME_MIN: usize = 3;
const DISPLAY_NAME_MAX: usize = 40;
const LEADERBOARD_SIZE: i64 = 10;

/// A handle as the participant spelled it plus its case-folded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHandle {
    pub value: String,
    pub slug: String,
}

pub fn normalize_instagram(raw: &str) -> Result<NormalizedHandle> {
    if raw.trim().is_empty() {
        return Err(Error::BadRequest("Instagram handle is required".to_string()));
    }
    let value = strip_handle(raw);
    let len = value.chars().count();
    if !(3..=30).contains(&len) || !is_handle_charset(value, &['.', '_']) {
        return Err(Error::BadRequest(
            "Instagram handle must be 3-30 characters (letters, digits, . or _)".to_string(),
        ));
    }
    Ok(NormalizedHandle {
        value: value.to_string(),
        slug: value.to_lowercase(),
    })
}

pub fn normalize_display_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::BadRequest("Display name is required".to_string()));
    }
    let len = trimmed.chars().count();
    if !(DISPLAY_NAME_MIN..=DISPLAY_NAME_MAX).contains(&len) {
        return Err(Error::BadRequest(format!(
            "Display name must be between {} and {} characters",
            DISPLAY_NAME_MIN, DISPLAY_NAME_MAX
        )));
    }
    if trimmed.contains('\n') {
        return Err(Error::BadRequest(
            "Display name must fit on a single line".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Splits on whitespace and commas, validates every token and drops
/// case-insensitive duplicates, keeping the first spelling.
pub fn normalize_telegram_handles(raw: &str) -> Result<Vec<NormalizedHandle>> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(Error::BadRequest(
            "Add at least one Telegram handle".to_string(),
        ));
    }
    if tokens.len() > MAX_HANDLES_PER_SUBMISSION {
        return Err(Error::BadRequest(format!(
            "At most {} handles can be submitted at once",
            MAX_HANDLES_PER_SUBMISSION
        )));
    }

    let mut seen = HashSet::new();
    let mut handles = Vec::new();
    for token in tokens {
        let value = token.trim_start_matches('@');
        let len = value.chars().count();
        if !(4..=32).contains(&len) || !is_handle_charset(value, &['_']) {
            return Err(Error::BadRequest(format!("Invalid Telegram handle: {}", token)));
        }
        let slug = value.to_lowercase();
        if seen.insert(slug.clone()) {
            handles.push(NormalizedHandle {
                value: value.to_string(),
                slug,
            });
        }
    }

    Ok(handles)
}

#[derive(Clone)]
pub struct ContestService {
    pool: PgPool,
}

impl ContestService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn submit(&self, payload: SubmissionPayload) -> Result<SubmissionResult> {
        let instagram = normalize_instagram(&payload.instagram_handle)?;
        let display_name = normalize_display_name(&payload.display_name)?;
        let handles = normalize_telegram_handles(&payload.telegram_handles)?;

        let mut tx = self.pool.begin().await?;

        let participant = sqlx::query_as::<_, Participant>(
            r#"
            INSERT INTO contest_participants (instagram_handle, instagram_slug, display_name)
            VALUES ($1, $2, $3)
            ON CONFLICT (instagram_slug) DO UPDATE SET
                instagram_handle = EXCLUDED.instagram_handle,
                display_name = EXCLUDED.display_name,
                last_submission_at = NOW(),
                updated_at = NOW()
            RETURNING id, instagram_handle, instagram_slug, display_name,
                      last_submission_at, created_at, updated_at
            "#,
        )
        .bind(&instagram.value)
        .bind(&instagram.slug)
        .bind(&display_name)
        .fetch_one(&mut *tx)
        .await?;

        let (values, slugs): (Vec<String>, Vec<String>) = handles
            .iter()
            .map(|h| (h.value.clone(), h.slug.clone()))
            .unzip();

        let inserted = sqlx::query(
            r#"
            INSERT INTO contest_telegram_handles (participant_id, value, slug)
            SELECT $1, v, s FROM UNNEST($2::text[], $3::text[]) AS t(v, s)
            ON CONFLICT (participant_id, slug) DO NOTHING
            "#,
        )
        .bind(participant.id)
        .bind(&values)
        .bind(&slugs)
        .execute(&mut *tx)
        .await?
        .rows_affected() as i64;

        let total_handles: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM contest_telegram_handles WHERE participant_id = $1",
        )
        .bind(participant.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            participant = %participant.id,
            added = inserted,
            total = total_handles,
            "Contest submission stored"
        );

        Ok(SubmissionResult {
            participant: SubmittedParticipant {
                instagram_handle: participant.instagram_handle,
                instagram_slug: participant.instagram_slug,
                display_name: participant.display_name,
                last_submission_at: participant.last_submission_at,
                total_handles,
            },
            added_handles: inserted,
            skipped_handles: (handles.len() as i64 - inserted).max(0),
        })
    }

    pub async fn leaderboard(&self) -> Result<LeaderboardSummary> {
        let top = sqlx::query_as::<_, ParticipantStanding>(
            r#"
            SELECT p.id, p.display_name, p.last_submission_at,
                   COUNT(h.id) AS handles_count
            FROM contest_participants p
            LEFT JOIN contest_telegram_handles h ON h.participant_id = p.id
            GROUP BY p.id
            ORDER BY handles_count DESC, p.last_submission_at ASC
            LIMIT $1
            "#,
        )
        .bind(LEADERBOARD_SIZE)
        .fetch_all(&self.pool);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contest_participants")
            .fetch_one(&self.pool);

        let (top, total_participants) = tokio::try_join!(top, total)?;

        Ok(LeaderboardSummary {
            total_participants,
            entries: top.into_iter().map(LeaderboardEntry::from).collect(),
        })
    }

    pub async fn handles_for(&self, participant_id: Uuid) -> Result<Vec<TelegramHandle>> {
        let handles = sqlx::query_as::<_, TelegramHandle>(
            r#"
            SELECT id, participant_id, value, slug, created_at
            FROM contest_telegram_handles
            WHERE participant_id = $1
            ORDER BY created_at, slug
            "#,
        )
        .bind(participant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(handles)
    }

    pub async fn find_by_slug(&self, instagram_slug: &str) -> Result<Participant> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, instagram_handle, instagram_slug, display_name,
                   last_submission_at, created_at, updated_at
            FROM contest_participants
            WHERE instagram_slug = $1
            "#,
        )
        .bind(instagram_slug)
        .fetch_one(&self.pool)
        .await?;
        Ok(participant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instagram_is_stripped_and_slugged() {
        let handle = normalize_instagram("  @@Night.Owl_ ").unwrap();
        assert_eq!(handle.value, "Night.Owl_");
        assert_eq!(handle.slug, "night.owl_");
    }

    #[test]
    fn instagram_rejects_bad_input() {
        for raw in ["   ", "@ab", "has space", "dash-name", &"a".repeat(31)] {
            assert!(
                matches!(normalize_instagram(raw), Err(Error::BadRequest(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn display_name_rules() {
        assert_eq!(normalize_display_name("  Ivan  ").unwrap(), "Ivan");
        assert_eq!(normalize_display_name("Жора").unwrap(), "Жора");
        assert!(normalize_display_name("ab").is_err());
        assert!(normalize_display_name(&"x".repeat(41)).is_err());
        assert!(normalize_display_name("two\nlines").is_err());
        assert!(normalize_display_name(" ").is_err());
    }

    #[test]
    fn telegram_handles_are_split_and_deduplicated() {
        let handles =
            normalize_telegram_handles("@First_one, second_two\nFIRST_ONE\t@@third_3").unwrap();
        let values: Vec<_> = handles.iter().map(|h| h.value.as_str()).collect();
        assert_eq!(values, vec!["First_one", "second_two", "third_3"]);
        assert_eq!(handles[0].slug, "first_one");
    }

    #[test]
    fn telegram_handles_reject_invalid_tokens() {
        let err = normalize_telegram_handles("good_handle bad.handle").unwrap_err();
        assert!(err.to_string().contains("bad.handle"));
        assert!(normalize_telegram_handles(" , , ").is_err());
        assert!(normalize_telegram_handles("abc").is_err());
    }

    #[test]
    fn telegram_handles_cap_per_submission() {
        let many = (0..201).map(|i| format!("user_{:04}", i)).collect::<Vec<_>>();
        assert!(normalize_telegram_handles(&many.join(" ")).is_err());
        assert_eq!(
            normalize_telegram_handles(&many[..200].join(",")).unwrap().len(),
            200
        );
    }
}
