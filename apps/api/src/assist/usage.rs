//! Per-user daily quota for assist calls.
//!
//! The persisted usage log is the source of truth: there is no counter to
//! reset, "today's usage" is a COUNT over rows whose timestamp falls in the
//! current UTC day. The window is half-open — `[00:00, next 00:00)` — so a
//! call logged at 23:59:59 counts today and one at 00:00:00 counts tomorrow.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;

use crate::errors::AppError;

/// AI calls allowed per user per UTC day.
pub const DAILY_CALL_LIMIT: i64 = 10;

/// Which assist operation a usage row was charged for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "assist_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssistKind {
    Transcribe,
    ReflectionPrompts,
    Reflection,
    Chat,
    AnalyzeJd,
    Recommendations,
}

/// Quota state reported back with every assist response.
#[derive(Debug, Clone, Serialize)]
pub struct UsageSnapshot {
    pub calls_today: i64,
    pub limit: i64,
    pub remaining: i64,
}

/// The UTC day window containing `now`.
pub fn day_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    (start, start + Duration::days(1))
}

pub fn quota_exhausted(used: i64) -> bool {
    used >= DAILY_CALL_LIMIT
}

/// Rough token estimate for usage accounting: ~4 characters per token.
pub fn estimate_tokens(input: &str, output: &str) -> i64 {
    (((input.len() + output.len()) as f64) / 4.0).ceil() as i64
}

pub async fn count_calls_in_window(
    pool: &PgPool,
    user_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM assist_usage WHERE user_id = $1 AND created_at >= $2 AND created_at < $3",
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await
}

/// Gate for every assist handler. Rejects with the distinguishable 429
/// before any upstream call is made; on success returns the snapshot as it
/// will look once the in-flight call is logged.
pub async fn ensure_within_limit(
    pool: &PgPool,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<UsageSnapshot, AppError> {
    let (start, end) = day_window(now);
    let used = count_calls_in_window(pool, user_id, start, end).await?;

    if quota_exhausted(used) {
        return Err(AppError::RateLimited {
            limit: DAILY_CALL_LIMIT,
            used,
            reset: end,
        });
    }

    Ok(UsageSnapshot {
        calls_today: used + 1,
        limit: DAILY_CALL_LIMIT,
        remaining: DAILY_CALL_LIMIT - (used + 1),
    })
}

/// Usage so far today, for the read-only usage endpoint.
pub async fn usage_today(
    pool: &PgPool,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<UsageSnapshot, sqlx::Error> {
    let (start, end) = day_window(now);
    let used = count_calls_in_window(pool, user_id, start, end).await?;

    Ok(UsageSnapshot {
        calls_today: used,
        limit: DAILY_CALL_LIMIT,
        remaining: (DAILY_CALL_LIMIT - used).max(0),
    })
}

/// Logs a completed call. A failed insert must not fail the response the
/// user already earned, so errors are logged and swallowed.
pub async fn record_usage(pool: &PgPool, user_id: Uuid, kind: AssistKind, tokens_used: i64) {
    let result = sqlx::query(
        "INSERT INTO assist_usage (user_id, kind, tokens_used) VALUES ($1, $2, $3)",
    )
    .bind(user_id)
    .bind(kind)
    .bind(tokens_used)
    .execute(pool)
    .await;

    if let Err(e) = result {
        error!("Failed to record assist usage for user {user_id}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn window_is_the_utc_calendar_day() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap();
        let (start, end) = day_window(now);

        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap());
    }

    #[test]
    fn window_is_half_open_at_midnight() {
        let last_second = Utc.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 2, 0, 0, 0).unwrap();

        let (start, end) = day_window(last_second);
        assert!(last_second >= start && last_second < end);
        // The first instant of the next day belongs to the next window.
        assert!(midnight >= end);
        let (next_start, _) = day_window(midnight);
        assert_eq!(next_start, end);
    }

    #[test]
    fn quota_boundary() {
        assert!(!quota_exhausted(DAILY_CALL_LIMIT - 1));
        assert!(quota_exhausted(DAILY_CALL_LIMIT));
        assert!(quota_exhausted(DAILY_CALL_LIMIT + 1));
    }

    #[test]
    fn token_estimate_rounds_up() {
        assert_eq!(estimate_tokens("abcd", ""), 1);
        assert_eq!(estimate_tokens("abcde", ""), 2);
        assert_eq!(estimate_tokens("", ""), 0);
        assert_eq!(estimate_tokens("ab", "cd"), 1);
    }
}
