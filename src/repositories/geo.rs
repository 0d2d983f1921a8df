// src/repositories/geo.rs
use anyhow::Result;
use sqlx::SqlitePool;

use crate::models::{Canton, Commune, Sector};

/// Read-only access to the reference geography seeded out of band.
pub struct GeoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> GeoRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_cantons(&self) -> Result<Vec<Canton>> {
        let cantons = sqlx::query_as::<_, Canton>(
            r#"
            SELECT * FROM cantons ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(cantons)
    }

    pub async fn find_canton_by_code(&self, code: &str) -> Result<Option<Canton>> {
        let canton = sqlx::query_as::<_, Canton>(
            r#"
            SELECT * FROM cantons WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await?;

        Ok(canton)
    }

    /// Communes, optionally restricted to one canton.
    pub async fn list_communes(&self, canton_id: Option<&str>) -> Result<Vec<Commune>> {
        let communes = match canton_id {
            Some(canton_id) => {
                sqlx::query_as::<_, Commune>(
                    r#"
                    SELECT * FROM communes WHERE canton_id = ? ORDER BY name ASC
                    "#,
                )
                .bind(canton_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Commune>(
                    r#"
                    SELECT * FROM communes ORDER BY name ASC
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(communes)
    }

    /// Top-level NOGA sections only, as shown in the search filters.
    pub async fn list_top_level_sectors(&self) -> Result<Vec<Sector>> {
        let sectors = sqlx::query_as::<_, Sector>(
            r#"
            SELECT * FROM sectors WHERE level = 1 ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(sectors)
    }
}
