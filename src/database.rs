// src/database.rs
//! Pooled SQLite handle with schema migrations.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

use crate::utils;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection with automatic setup.
    pub async fn new(database_path: &Path) -> Result<Self> {
        if let Some(parent) = database_path.parent() {
            utils::ensure_dir_exists(parent).await?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());
        let pool = SqlitePool::connect(&database_url).await.with_context(|| {
            format!("Failed to connect to database: {}", database_path.display())
        })?;

        info!(
            "Database connection established: {}",
            database_path.display()
        );

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get pool reference for repository construction.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check database health.
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Database health check failed")?;
        Ok(())
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_profiles (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                first_name TEXT,
                last_name TEXT,
                phone TEXT,
                address TEXT,
                canton_id TEXT,
                commune_id TEXT,
                preferred_sectors TEXT NOT NULL DEFAULT '[]',
                experience_level TEXT NOT NULL DEFAULT 'intermediate',
                availability TEXT NOT NULL DEFAULT 'immediate',
                contract_types TEXT NOT NULL DEFAULT '["cdi"]',
                salary_min INTEGER,
                salary_max INTEGER,
                profile_photo_url TEXT,
                cv_url TEXT,
                cover_letter_template TEXT,
                subscription_type TEXT NOT NULL DEFAULT 'free',
                subscription_expires_at TEXT,
                automation_level TEXT NOT NULL DEFAULT 'semi',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS cantons (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS communes (
                id TEXT PRIMARY KEY,
                canton_id TEXT NOT NULL REFERENCES cantons(id),
                name TEXT NOT NULL,
                postal_code TEXT,
                bfs_number INTEGER,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sectors (
                id TEXT PRIMARY KEY,
                parent_id TEXT REFERENCES sectors(id),
                noga_code TEXT,
                name TEXT NOT NULL,
                level INTEGER NOT NULL DEFAULT 1,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS job_offers (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                company_name TEXT NOT NULL,
                description TEXT,
                requirements TEXT,
                salary_min INTEGER,
                salary_max INTEGER,
                contract_type TEXT NOT NULL,
                location TEXT,
                canton_id TEXT REFERENCES cantons(id),
                commune_id TEXT REFERENCES communes(id),
                sector_id TEXT REFERENCES sectors(id),
                source_url TEXT,
                source_platform TEXT,
                application_url TEXT,
                application_email TEXT,
                contact_person TEXT,
                deadline TEXT,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                matching_score REAL,
                extracted_at TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES user_profiles(id),
                job_offer_id TEXT NOT NULL REFERENCES job_offers(id),
                status TEXT NOT NULL DEFAULT 'draft',
                kanban_position INTEGER NOT NULL DEFAULT 0,
                generated_cv_url TEXT,
                generated_cover_letter_url TEXT,
                custom_cv_url TEXT,
                custom_cover_letter_url TEXT,
                additional_documents TEXT NOT NULL DEFAULT '[]',
                application_sent_at TEXT,
                interview_date TEXT,
                interview_notes TEXT,
                feedback TEXT,
                follow_up_date TEXT,
                auto_generated BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS riasec_questions (
                id TEXT PRIMARY KEY,
                question_number INTEGER NOT NULL UNIQUE,
                question_text TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS riasec_results (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES user_profiles(id),
                realistic_score INTEGER NOT NULL,
                investigative_score INTEGER NOT NULL,
                artistic_score INTEGER NOT NULL,
                social_score INTEGER NOT NULL,
                enterprising_score INTEGER NOT NULL,
                conventional_score INTEGER NOT NULL,
                dominant_type TEXT NOT NULL,
                recommended_sectors TEXT NOT NULL DEFAULT '[]',
                completed_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS enneagram_questions (
                id TEXT PRIMARY KEY,
                question_number INTEGER NOT NULL UNIQUE,
                question_text TEXT NOT NULL,
                type_1_weight REAL NOT NULL DEFAULT 0,
                type_2_weight REAL NOT NULL DEFAULT 0,
                type_3_weight REAL NOT NULL DEFAULT 0,
                type_4_weight REAL NOT NULL DEFAULT 0,
                type_5_weight REAL NOT NULL DEFAULT 0,
                type_6_weight REAL NOT NULL DEFAULT 0,
                type_7_weight REAL NOT NULL DEFAULT 0,
                type_8_weight REAL NOT NULL DEFAULT 0,
                type_9_weight REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS enneagram_results (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES user_profiles(id),
                type_1_score REAL NOT NULL,
                type_2_score REAL NOT NULL,
                type_3_score REAL NOT NULL,
                type_4_score REAL NOT NULL,
                type_5_score REAL NOT NULL,
                type_6_score REAL NOT NULL,
                type_7_score REAL NOT NULL,
                type_8_score REAL NOT NULL,
                type_9_score REAL NOT NULL,
                dominant_type INTEGER NOT NULL,
                wing_type INTEGER NOT NULL,
                description TEXT NOT NULL,
                career_recommendations TEXT NOT NULL,
                completed_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS interview_resources (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                resource_type TEXT NOT NULL,
                file_url TEXT,
                thumbnail_url TEXT,
                duration_seconds INTEGER,
                category TEXT,
                tags TEXT NOT NULL DEFAULT '[]',
                is_public BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_applications_user ON applications(user_id);")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_applications_user_status ON applications(user_id, status, kanban_position);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_job_offers_active ON job_offers(is_active, created_at);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_riasec_results_user ON riasec_results(user_id, completed_at);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_enneagram_results_user ON enneagram_results(user_id, completed_at);",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_communes_canton ON communes(canton_id);")
            .execute(&self.pool)
            .await?;

        info!("Database migrations completed");
        Ok(())
    }
}
