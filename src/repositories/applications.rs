// src/repositories/applications.rs
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::models::{Application, ApplicationStatus, ApplicationWithOffer};

pub struct ApplicationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All of a user's applications joined with their offer headline,
    /// ordered for board assembly.
    pub async fn list_board_cards(&self, user_id: &str) -> Result<Vec<ApplicationWithOffer>> {
        let cards = sqlx::query_as::<_, ApplicationWithOffer>(
            r#"
            SELECT a.*,
                   j.title AS job_title,
                   j.company_name AS job_company,
                   j.location AS job_location,
                   j.contract_type AS job_contract_type
            FROM applications a
            JOIN job_offers j ON j.id = a.job_offer_id
            WHERE a.user_id = ?
            ORDER BY a.kanban_position ASC, a.created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(cards)
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(applications)
    }

    /// Most recent applications with offer headlines, for the dashboard.
    pub async fn recent_for_user(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<ApplicationWithOffer>> {
        let cards = sqlx::query_as::<_, ApplicationWithOffer>(
            r#"
            SELECT a.*,
                   j.title AS job_title,
                   j.company_name AS job_company,
                   j.location AS job_location,
                   j.contract_type AS job_contract_type
            FROM applications a
            JOIN job_offers j ON j.id = a.job_offer_id
            WHERE a.user_id = ?
            ORDER BY a.created_at DESC
            LIMIT ?
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(cards)
    }

    /// Create a draft application at the bottom of the draft column.
    pub async fn create(&self, user_id: &str, job_offer_id: &str) -> Result<Application> {
        let now = Utc::now();
        let position: i64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(MAX(kanban_position) + 1, 0)
            FROM applications
            WHERE user_id = ? AND status = 'draft'
            "#,
        )
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        let application = Application {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            job_offer_id: job_offer_id.to_string(),
            status: ApplicationStatus::Draft,
            kanban_position: position,
            generated_cv_url: None,
            generated_cover_letter_url: None,
            custom_cv_url: None,
            custom_cover_letter_url: None,
            additional_documents: Json(Vec::new()),
            application_sent_at: None,
            interview_date: None,
            interview_notes: None,
            feedback: None,
            follow_up_date: None,
            auto_generated: false,
            created_at: now,
            updated_at: now,
        };
        self.insert(&application).await?;

        info!(
            "Created application {} for user {} on offer {}",
            application.id, user_id, job_offer_id
        );
        Ok(application)
    }

    pub async fn insert(&self, application: &Application) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO applications (
                id, user_id, job_offer_id, status, kanban_position,
                generated_cv_url, generated_cover_letter_url,
                custom_cv_url, custom_cover_letter_url, additional_documents,
                application_sent_at, interview_date, interview_notes,
                feedback, follow_up_date, auto_generated, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&application.id)
        .bind(&application.user_id)
        .bind(&application.job_offer_id)
        .bind(application.status)
        .bind(application.kanban_position)
        .bind(&application.generated_cv_url)
        .bind(&application.generated_cover_letter_url)
        .bind(&application.custom_cv_url)
        .bind(&application.custom_cover_letter_url)
        .bind(&application.additional_documents)
        .bind(application.application_sent_at)
        .bind(application.interview_date)
        .bind(application.interview_notes.as_deref())
        .bind(&application.feedback)
        .bind(application.follow_up_date)
        .bind(application.auto_generated)
        .bind(application.created_at)
        .bind(application.updated_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Drop the application on a column: write the new status and the drop
    /// index. Concurrent movers are last-write-wins.
    pub async fn move_to(
        &self,
        id: &str,
        user_id: &str,
        status: ApplicationStatus,
        position: i64,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET status = ?, kanban_position = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(status)
        .bind(position)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn update_notes(
        &self,
        id: &str,
        user_id: &str,
        interview_date: Option<DateTime<Utc>>,
        interview_notes: Option<&str>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE applications
            SET interview_date = ?, interview_notes = ?, updated_at = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(interview_date)
        .bind(interview_notes)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: &str, user_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM applications WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
