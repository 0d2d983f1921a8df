// src/repositories/profiles.rs
use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{ProfileUpdate, UserProfile};

pub struct ProfileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT * FROM user_profiles WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        let profile = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT * FROM user_profiles WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(profile)
    }

    /// Insert a complete profile row.
    pub async fn insert(&self, profile: &UserProfile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles (
                id, email, first_name, last_name, phone, address,
                canton_id, commune_id, preferred_sectors, experience_level,
                availability, contract_types, salary_min, salary_max,
                profile_photo_url, cv_url, cover_letter_template,
                subscription_type, subscription_expires_at, automation_level,
                created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.email)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(&profile.address)
        .bind(&profile.canton_id)
        .bind(&profile.commune_id)
        .bind(&profile.preferred_sectors)
        .bind(profile.experience_level)
        .bind(profile.availability)
        .bind(&profile.contract_types)
        .bind(profile.salary_min)
        .bind(profile.salary_max)
        .bind(&profile.profile_photo_url)
        .bind(&profile.cv_url)
        .bind(&profile.cover_letter_template)
        .bind(profile.subscription_type)
        .bind(profile.subscription_expires_at)
        .bind(profile.automation_level)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(self.pool)
        .await?;

        info!("Created profile for {}", profile.email);
        Ok(())
    }

    /// Load the profile for a verified identity, provisioning a fresh row
    /// with defaults on first sight.
    pub async fn get_or_create(&self, subject: &str, email: &str) -> Result<UserProfile> {
        if let Some(profile) = self.find_by_id(subject).await? {
            return Ok(profile);
        }

        let profile = UserProfile::provision(subject, email, Utc::now());
        self.insert(&profile).await?;
        Ok(profile)
    }

    /// Merge a partial update into the stored profile and return the new
    /// row state.
    pub async fn update(&self, user_id: &str, update: ProfileUpdate) -> Result<Option<UserProfile>> {
        let Some(mut profile) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };
        profile.apply(update, Utc::now());

        sqlx::query(
            r#"
            UPDATE user_profiles SET
                first_name = ?, last_name = ?, phone = ?, address = ?,
                canton_id = ?, commune_id = ?, preferred_sectors = ?,
                experience_level = ?, availability = ?, contract_types = ?,
                salary_min = ?, salary_max = ?, profile_photo_url = ?,
                cv_url = ?, cover_letter_template = ?, automation_level = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(&profile.address)
        .bind(&profile.canton_id)
        .bind(&profile.commune_id)
        .bind(&profile.preferred_sectors)
        .bind(profile.experience_level)
        .bind(profile.availability)
        .bind(&profile.contract_types)
        .bind(profile.salary_min)
        .bind(profile.salary_max)
        .bind(&profile.profile_photo_url)
        .bind(&profile.cv_url)
        .bind(&profile.cover_letter_template)
        .bind(profile.automation_level)
        .bind(profile.updated_at)
        .bind(&profile.id)
        .execute(self.pool)
        .await?;

        Ok(Some(profile))
    }

    /// List all profiles, newest first.
    pub async fn list(&self) -> Result<Vec<UserProfile>> {
        let profiles = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT * FROM user_profiles ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(profiles)
    }

    /// Remove a profile and everything hanging off it.
    pub async fn remove_by_email(&self, email: &str) -> Result<bool> {
        let Some(profile) = self.find_by_email(email).await? else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM applications WHERE user_id = ?")
            .bind(&profile.id)
            .execute(self.pool)
            .await?;
        sqlx::query("DELETE FROM riasec_results WHERE user_id = ?")
            .bind(&profile.id)
            .execute(self.pool)
            .await?;
        sqlx::query("DELETE FROM enneagram_results WHERE user_id = ?")
            .bind(&profile.id)
            .execute(self.pool)
            .await?;
        sqlx::query("DELETE FROM user_profiles WHERE id = ?")
            .bind(&profile.id)
            .execute(self.pool)
            .await?;

        info!("Removed profile and related rows for {}", email);
        Ok(true)
    }
}
