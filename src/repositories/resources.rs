// src/repositories/resources.rs
use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::InterviewResource;

pub struct ResourceRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResourceRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_public(&self) -> Result<Vec<InterviewResource>> {
        let resources = sqlx::query_as::<_, InterviewResource>(
            r#"
            SELECT * FROM interview_resources
            WHERE is_public = TRUE
            ORDER BY category ASC, title ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(resources)
    }
}
