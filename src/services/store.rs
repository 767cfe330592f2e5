use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::{MatchResult, Respondent, SurveyAnswers};

/// Errors that can occur when interacting with the survey store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL-backed repository for survey rosters, submissions, and match
/// results.
///
/// The matching core never touches storage; this store is injected at the
/// route layer so a matching run always operates on its own snapshot of the
/// response set. Re-running matching replaces the stored result wholesale.
pub struct MatchStore {
    pool: PgPool,
}

impl MatchStore {
    /// Create a new store from a connection string.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings.
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 AS ok").fetch_one(&self.pool).await?;
        let ok: i32 = row.get("ok");
        Ok(ok == 1)
    }

    /// Number of students invited to a survey (the roster, not the completions).
    pub async fn count_participants(&self, form_id: &str) -> Result<u32, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM survey_participants WHERE form_id = $1")
            .bind(form_id)
            .fetch_one(&self.pool)
            .await?;

        let total: i64 = row.get("total");
        Ok(total as u32)
    }

    /// Fetch all completed submissions for a survey.
    ///
    /// Ordered by submission time then student id: the solver's output depends
    /// on input order, so this ordering is what makes re-runs reproducible.
    pub async fn fetch_submissions(&self, form_id: &str) -> Result<Vec<Respondent>, StoreError> {
        let query = r#"
            SELECT student_id, name, gender,
                   wake_time, bed_time, smoking, sleep_habit,
                   personality, major, notes, submitted_at
            FROM survey_submissions
            WHERE form_id = $1
            ORDER BY submitted_at, student_id
        "#;

        let rows = sqlx::query(query).bind(form_id).fetch_all(&self.pool).await?;

        let respondents: Vec<Respondent> = rows
            .iter()
            .map(|row| Respondent {
                student_id: row.get("student_id"),
                name: row.get("name"),
                gender: row.get("gender"),
                answers: SurveyAnswers {
                    wake_time: row.get("wake_time"),
                    bed_time: row.get("bed_time"),
                    smoking: row.get("smoking"),
                    sleep_habit: row.get("sleep_habit"),
                    personality: row.get("personality"),
                    major: row.get("major"),
                    notes: row.get("notes"),
                },
                submitted_at: row.get("submitted_at"),
            })
            .collect();

        tracing::debug!(
            "Survey {} has {} completed submissions",
            form_id,
            respondents.len()
        );

        Ok(respondents)
    }

    /// Persist a match result, replacing any prior result for the survey.
    pub async fn save_result(&self, result: &MatchResult) -> Result<(), StoreError> {
        let payload = serde_json::to_value(result)?;

        let query = r#"
            INSERT INTO match_results (form_id, payload, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (form_id)
            DO UPDATE SET
                payload = EXCLUDED.payload,
                created_at = EXCLUDED.created_at
        "#;

        sqlx::query(query)
            .bind(&result.form_id)
            .bind(payload)
            .bind(result.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "Stored match result for survey {} ({} male rooms, {} female rooms)",
            result.form_id,
            result.male_results.len(),
            result.female_results.len()
        );

        Ok(())
    }

    /// Fetch the stored match result for a survey, if any.
    pub async fn get_result(&self, form_id: &str) -> Result<Option<MatchResult>, StoreError> {
        let row = sqlx::query("SELECT payload FROM match_results WHERE form_id = $1")
            .bind(form_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let payload: serde_json::Value = row.get("payload");
                let result: MatchResult = serde_json::from_value(payload)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Delete the stored match result for a survey. Returns whether one existed.
    pub async fn delete_result(&self, form_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM match_results WHERE form_id = $1")
            .bind(form_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!("Deleted match result for survey {}", form_id);
        }

        Ok(deleted)
    }
}
