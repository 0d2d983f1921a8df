// src/repositories/jobs.rs
use anyhow::Result;
use chrono::{Duration, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::{JobOffer, JobSearchFilters};
use crate::utils;

/// Hard cap on search results; the UI paginates well below this.
const SEARCH_LIMIT: i64 = 50;

pub struct JobOfferRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> JobOfferRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<JobOffer>> {
        let offer = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT * FROM job_offers WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(offer)
    }

    /// Filtered search over active offers, newest first.
    pub async fn search(&self, filters: &JobSearchFilters) -> Result<Vec<JobOffer>> {
        let mut query = build_search_query(filters, Utc::now());
        let offers = query
            .build_query_as::<JobOffer>()
            .fetch_all(self.pool)
            .await?;

        Ok(offers)
    }

    /// Best-matching active offers for the dashboard.
    pub async fn list_recommended(&self, limit: i64) -> Result<Vec<JobOffer>> {
        let offers = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT * FROM job_offers
            WHERE is_active = TRUE
            ORDER BY matching_score DESC NULLS LAST, created_at DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(offers)
    }

    /// A few active offers, used when seeding sample applications.
    pub async fn list_any_active(&self, limit: i64) -> Result<Vec<JobOffer>> {
        let offers = sqlx::query_as::<_, JobOffer>(
            r#"
            SELECT * FROM job_offers WHERE is_active = TRUE ORDER BY created_at DESC LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(offers)
    }

    pub async fn insert(&self, offer: &JobOffer) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO job_offers (
                id, title, company_name, description, requirements,
                salary_min, salary_max, contract_type, location,
                canton_id, commune_id, sector_id, source_url, source_platform,
                application_url, application_email, contact_person, deadline,
                is_active, matching_score, extracted_at, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&offer.id)
        .bind(&offer.title)
        .bind(&offer.company_name)
        .bind(&offer.description)
        .bind(&offer.requirements)
        .bind(offer.salary_min)
        .bind(offer.salary_max)
        .bind(offer.contract_type)
        .bind(&offer.location)
        .bind(&offer.canton_id)
        .bind(&offer.commune_id)
        .bind(&offer.sector_id)
        .bind(&offer.source_url)
        .bind(&offer.source_platform)
        .bind(&offer.application_url)
        .bind(&offer.application_email)
        .bind(&offer.contact_person)
        .bind(offer.deadline)
        .bind(offer.is_active)
        .bind(offer.matching_score)
        .bind(offer.extracted_at)
        .bind(offer.created_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}

/// Assemble the search query for the given filters. Every user-supplied
/// value is bound, never spliced into the SQL text.
fn build_search_query(
    filters: &JobSearchFilters,
    now: chrono::DateTime<Utc>,
) -> QueryBuilder<'static, Sqlite> {
    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT * FROM job_offers WHERE is_active = TRUE");

    if let Some(keyword) = filters.keyword() {
        let pattern = format!("%{}%", utils::escape_like(keyword));
        query.push(" AND (title LIKE ");
        query.push_bind(pattern.clone());
        query.push(" ESCAPE '\\' OR description LIKE ");
        query.push_bind(pattern.clone());
        query.push(" ESCAPE '\\' OR company_name LIKE ");
        query.push_bind(pattern);
        query.push(" ESCAPE '\\')");
    }

    push_id_filter(&mut query, "canton_id", &filters.canton_ids);
    push_id_filter(&mut query, "commune_id", &filters.commune_ids);
    push_id_filter(&mut query, "sector_id", &filters.sector_ids);

    if !filters.contract_types.is_empty() {
        query.push(" AND contract_type IN (");
        let mut separated = query.separated(", ");
        for contract in &filters.contract_types {
            separated.push_bind(*contract);
        }
        query.push(")");
    }

    if let Some(salary_min) = filters.salary_min {
        query.push(" AND salary_min >= ");
        query.push_bind(salary_min);
    }

    if let Some(salary_max) = filters.salary_max {
        query.push(" AND salary_max <= ");
        query.push_bind(salary_max);
    }

    if let Some(days) = filters.posted_within_days {
        query.push(" AND created_at >= ");
        query.push_bind(now - Duration::days(days));
    }

    query.push(" ORDER BY created_at DESC LIMIT ");
    query.push_bind(SEARCH_LIMIT);

    query
}

fn push_id_filter(query: &mut QueryBuilder<'static, Sqlite>, column: &str, ids: &[String]) {
    if ids.is_empty() {
        return;
    }
    query.push(format!(" AND {} IN (", column));
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id.clone());
    }
    query.push(")");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContractType;

    #[test]
    fn test_empty_filters_only_gate_on_active() {
        let sql = build_search_query(&JobSearchFilters::default(), Utc::now()).into_sql();
        assert!(sql.starts_with("SELECT * FROM job_offers WHERE is_active = TRUE"));
        assert!(!sql.contains("LIKE"));
        assert!(!sql.contains("IN ("));
        assert!(sql.contains("ORDER BY created_at DESC LIMIT"));
    }

    #[test]
    fn test_keyword_searches_title_description_and_company() {
        let filters = JobSearchFilters {
            keywords: Some("infirmier".to_string()),
            ..JobSearchFilters::default()
        };
        let sql = build_search_query(&filters, Utc::now()).into_sql();
        assert!(sql.contains("title LIKE"));
        assert!(sql.contains("description LIKE"));
        assert!(sql.contains("company_name LIKE"));
    }

    #[test]
    fn test_set_filters_become_in_clauses() {
        let filters = JobSearchFilters {
            canton_ids: vec!["c1".to_string(), "c2".to_string()],
            contract_types: vec![ContractType::Cdi, ContractType::Stage],
            salary_min: Some(70_000),
            posted_within_days: Some(7),
            ..JobSearchFilters::default()
        };
        let sql = build_search_query(&filters, Utc::now()).into_sql();
        assert!(sql.contains("canton_id IN ("));
        assert!(sql.contains("contract_type IN ("));
        assert!(sql.contains("salary_min >= "));
        assert!(sql.contains("created_at >= "));
        assert!(!sql.contains("commune_id IN ("));
    }

    #[test]
    fn test_keyword_is_bound_not_spliced() {
        let filters = JobSearchFilters {
            keywords: Some("'; DROP TABLE job_offers; --".to_string()),
            ..JobSearchFilters::default()
        };
        let sql = build_search_query(&filters, Utc::now()).into_sql();
        assert!(!sql.contains("DROP TABLE"));
    }
}
