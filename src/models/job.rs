// src/models/job.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::ContractType;

/// A job offer ingested from an external platform.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobOffer {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub contract_type: ContractType,
    pub location: Option<String>,
    pub canton_id: Option<String>,
    pub commune_id: Option<String>,
    pub sector_id: Option<String>,
    pub source_url: Option<String>,
    pub source_platform: Option<String>,
    pub application_url: Option<String>,
    pub application_email: Option<String>,
    pub contact_person: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub matching_score: Option<f64>,
    pub extracted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Search criteria from the job-search page. Empty filters match every
/// active offer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSearchFilters {
    pub keywords: Option<String>,
    #[serde(default)]
    pub canton_ids: Vec<String>,
    #[serde(default)]
    pub commune_ids: Vec<String>,
    #[serde(default)]
    pub sector_ids: Vec<String>,
    #[serde(default)]
    pub contract_types: Vec<ContractType>,
    pub salary_min: Option<i64>,
    pub salary_max: Option<i64>,
    pub posted_within_days: Option<i64>,
}

impl JobSearchFilters {
    /// Keyword trimmed for matching; a blank string counts as no keyword.
    pub fn keyword(&self) -> Option<&str> {
        self.keywords
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keyword_is_ignored() {
        let filters = JobSearchFilters {
            keywords: Some("   ".to_string()),
            ..JobSearchFilters::default()
        };
        assert_eq!(filters.keyword(), None);

        let filters = JobSearchFilters {
            keywords: Some(" infirmier ".to_string()),
            ..JobSearchFilters::default()
        };
        assert_eq!(filters.keyword(), Some("infirmier"));
    }
}
