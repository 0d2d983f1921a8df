// src/repositories/assessments.rs
use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{EnneagramQuestion, EnneagramResult, RiasecQuestion, RiasecResult};

pub struct AssessmentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AssessmentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// RIASEC questionnaire in presentation order. A row with a malformed
    /// category tag fails decoding here, before any scoring.
    pub async fn riasec_questions(&self) -> Result<Vec<RiasecQuestion>> {
        let questions = sqlx::query_as::<_, RiasecQuestion>(
            r#"
            SELECT * FROM riasec_questions ORDER BY question_number ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn enneagram_questions(&self) -> Result<Vec<EnneagramQuestion>> {
        let questions = sqlx::query_as::<_, EnneagramQuestion>(
            r#"
            SELECT * FROM enneagram_questions ORDER BY question_number ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn insert_riasec_question(&self, question: &RiasecQuestion) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO riasec_questions (id, question_number, question_text, category, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&question.id)
        .bind(question.question_number)
        .bind(&question.question_text)
        .bind(question.category)
        .bind(question.created_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    pub async fn insert_enneagram_question(&self, question: &EnneagramQuestion) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO enneagram_questions (
                id, question_number, question_text,
                type_1_weight, type_2_weight, type_3_weight,
                type_4_weight, type_5_weight, type_6_weight,
                type_7_weight, type_8_weight, type_9_weight,
                created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&question.id)
        .bind(question.question_number)
        .bind(&question.question_text)
        .bind(question.type_1_weight)
        .bind(question.type_2_weight)
        .bind(question.type_3_weight)
        .bind(question.type_4_weight)
        .bind(question.type_5_weight)
        .bind(question.type_6_weight)
        .bind(question.type_7_weight)
        .bind(question.type_8_weight)
        .bind(question.type_9_weight)
        .bind(question.created_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Results are create-once: every completed run inserts a new row and
    /// readers only ever surface the latest.
    pub async fn insert_riasec_result(&self, result: &RiasecResult) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO riasec_results (
                id, user_id, realistic_score, investigative_score,
                artistic_score, social_score, enterprising_score,
                conventional_score, dominant_type, recommended_sectors,
                completed_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&result.id)
        .bind(&result.user_id)
        .bind(result.realistic_score)
        .bind(result.investigative_score)
        .bind(result.artistic_score)
        .bind(result.social_score)
        .bind(result.enterprising_score)
        .bind(result.conventional_score)
        .bind(result.dominant_type)
        .bind(&result.recommended_sectors)
        .bind(result.completed_at)
        .execute(self.pool)
        .await?;

        info!("Stored RIASEC result for user {}", result.user_id);
        Ok(())
    }

    pub async fn latest_riasec_result(&self, user_id: &str) -> Result<Option<RiasecResult>> {
        let result = sqlx::query_as::<_, RiasecResult>(
            r#"
            SELECT * FROM riasec_results
            WHERE user_id = ?
            ORDER BY completed_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }

    pub async fn insert_enneagram_result(&self, result: &EnneagramResult) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO enneagram_results (
                id, user_id,
                type_1_score, type_2_score, type_3_score,
                type_4_score, type_5_score, type_6_score,
                type_7_score, type_8_score, type_9_score,
                dominant_type, wing_type, description,
                career_recommendations, completed_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&result.id)
        .bind(&result.user_id)
        .bind(result.type_1_score)
        .bind(result.type_2_score)
        .bind(result.type_3_score)
        .bind(result.type_4_score)
        .bind(result.type_5_score)
        .bind(result.type_6_score)
        .bind(result.type_7_score)
        .bind(result.type_8_score)
        .bind(result.type_9_score)
        .bind(result.dominant_type)
        .bind(result.wing_type)
        .bind(&result.description)
        .bind(&result.career_recommendations)
        .bind(result.completed_at)
        .execute(self.pool)
        .await?;

        info!("Stored Enneagram result for user {}", result.user_id);
        Ok(())
    }

    pub async fn latest_enneagram_result(&self, user_id: &str) -> Result<Option<EnneagramResult>> {
        let result = sqlx::query_as::<_, EnneagramResult>(
            r#"
            SELECT * FROM enneagram_results
            WHERE user_id = ?
            ORDER BY completed_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(result)
    }
}
