// src/admin_cli.rs
//! Operator CLI: schema init, CSV seeding of questionnaires and job offers,
//! and user administration.

use crate::database::Database;
use crate::models::{EnneagramQuestion, JobOffer, RiasecQuestion};
use crate::repositories::{AssessmentRepository, GeoRepository, JobOfferRepository, ProfileRepository};
use crate::scoring::RiasecCategory;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "emploi-admin")]
#[command(about = "Operator tooling for the Emploi Romand backend")]
pub struct AdminCli {
    #[command(subcommand)]
    pub command: AdminCommand,

    #[arg(long, default_value = "data/emploi_romand.db")]
    pub database_path: PathBuf,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Initialize the database schema
    Init,
    /// Import RIASEC questionnaire rows from a CSV file
    ImportRiasec { csv_file: PathBuf },
    /// Import Enneagram questionnaire rows from a CSV file
    ImportEnneagram { csv_file: PathBuf },
    /// Import job offers from a CSV file
    ImportJobs { csv_file: PathBuf },
    /// List all user profiles
    ListUsers,
    /// Remove a user profile and everything attached to it
    RemoveUser { email: String },
}

pub async fn handle_admin_command(cli: AdminCli) -> Result<()> {
    // Connecting runs migrations, so `Init` is done by the time we match.
    let db = Database::new(&cli.database_path).await?;
    let pool = db.pool();

    match cli.command {
        AdminCommand::Init => {
            info!("Database initialized at {}", cli.database_path.display());
        }
        AdminCommand::ImportRiasec { csv_file } => {
            let count = import_riasec_questions(&db, &csv_file).await?;
            info!("Imported {} RIASEC question(s)", count);
        }
        AdminCommand::ImportEnneagram { csv_file } => {
            let count = import_enneagram_questions(&db, &csv_file).await?;
            info!("Imported {} Enneagram question(s)", count);
        }
        AdminCommand::ImportJobs { csv_file } => {
            let count = import_job_offers(&db, &csv_file).await?;
            info!("Imported {} job offer(s)", count);
        }
        AdminCommand::ListUsers => {
            let repo = ProfileRepository::new(pool);
            let profiles = repo.list().await?;
            if profiles.is_empty() {
                info!("No user profiles found");
            }
            for profile in profiles {
                info!(
                    "{} | {} {} | since {}",
                    profile.email,
                    profile.first_name.as_deref().unwrap_or("-"),
                    profile.last_name.as_deref().unwrap_or("-"),
                    profile.created_at.format("%Y-%m-%d")
                );
            }
        }
        AdminCommand::RemoveUser { email } => {
            let repo = ProfileRepository::new(pool);
            if repo.remove_by_email(&email).await? {
                info!("Removed user {}", email);
            } else {
                warn!("No profile found for {}", email);
            }
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct RiasecCsvRow {
    question_number: i64,
    question_text: String,
    category: String,
}

async fn import_riasec_questions(db: &Database, csv_file: &PathBuf) -> Result<usize> {
    let mut reader = csv::Reader::from_path(csv_file)
        .with_context(|| format!("Failed to open CSV file: {}", csv_file.display()))?;
    let repo = AssessmentRepository::new(db.pool());

    let mut count = 0;
    for (line, record) in reader.deserialize::<RiasecCsvRow>().enumerate() {
        let row = record.with_context(|| format!("Invalid CSV record at line {}", line + 2))?;

        let mut tags = row.category.trim().chars();
        let (Some(tag), None) = (tags.next(), tags.next()) else {
            bail!(
                "line {}: category must be a single letter, got '{}'",
                line + 2,
                row.category
            );
        };
        let category = RiasecCategory::from_code(tag)
            .with_context(|| format!("line {}: bad category tag", line + 2))?;

        let question = RiasecQuestion {
            id: Uuid::new_v4().to_string(),
            question_number: row.question_number,
            question_text: row.question_text,
            category,
            created_at: Utc::now(),
        };
        repo.insert_riasec_question(&question).await?;
        count += 1;
    }

    Ok(count)
}

#[derive(Debug, Deserialize)]
struct EnneagramCsvRow {
    question_number: i64,
    question_text: String,
    type_1_weight: f64,
    type_2_weight: f64,
    type_3_weight: f64,
    type_4_weight: f64,
    type_5_weight: f64,
    type_6_weight: f64,
    type_7_weight: f64,
    type_8_weight: f64,
    type_9_weight: f64,
}

async fn import_enneagram_questions(db: &Database, csv_file: &PathBuf) -> Result<usize> {
    let mut reader = csv::Reader::from_path(csv_file)
        .with_context(|| format!("Failed to open CSV file: {}", csv_file.display()))?;
    let repo = AssessmentRepository::new(db.pool());

    let mut count = 0;
    for (line, record) in reader.deserialize::<EnneagramCsvRow>().enumerate() {
        let row = record.with_context(|| format!("Invalid CSV record at line {}", line + 2))?;

        let question = EnneagramQuestion {
            id: Uuid::new_v4().to_string(),
            question_number: row.question_number,
            question_text: row.question_text,
            type_1_weight: row.type_1_weight,
            type_2_weight: row.type_2_weight,
            type_3_weight: row.type_3_weight,
            type_4_weight: row.type_4_weight,
            type_5_weight: row.type_5_weight,
            type_6_weight: row.type_6_weight,
            type_7_weight: row.type_7_weight,
            type_8_weight: row.type_8_weight,
            type_9_weight: row.type_9_weight,
            created_at: Utc::now(),
        };
        // Weight sanity check before the row can ever reach the scorer.
        question
            .scoring_item()
            .with_context(|| format!("line {}: bad weights", line + 2))?;

        repo.insert_enneagram_question(&question).await?;
        count += 1;
    }

    Ok(count)
}

#[derive(Debug, Deserialize)]
struct JobOfferCsvRow {
    title: String,
    company_name: String,
    description: Option<String>,
    contract_type: crate::models::ContractType,
    location: Option<String>,
    canton_code: Option<String>,
    salary_min: Option<i64>,
    salary_max: Option<i64>,
    source_platform: Option<String>,
    source_url: Option<String>,
}

async fn import_job_offers(db: &Database, csv_file: &PathBuf) -> Result<usize> {
    let mut reader = csv::Reader::from_path(csv_file)
        .with_context(|| format!("Failed to open CSV file: {}", csv_file.display()))?;
    let job_repo = JobOfferRepository::new(db.pool());
    let geo_repo = GeoRepository::new(db.pool());

    let mut count = 0;
    for (line, record) in reader.deserialize::<JobOfferCsvRow>().enumerate() {
        let row = record.with_context(|| format!("Invalid CSV record at line {}", line + 2))?;

        let canton_id = match row.canton_code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => {
                match geo_repo.find_canton_by_code(code).await? {
                    Some(canton) => Some(canton.id),
                    None => {
                        warn!("line {}: unknown canton code '{}', leaving empty", line + 2, code);
                        None
                    }
                }
            }
            _ => None,
        };

        let now = Utc::now();
        let offer = JobOffer {
            id: Uuid::new_v4().to_string(),
            title: row.title,
            company_name: row.company_name,
            description: row.description,
            requirements: None,
            salary_min: row.salary_min,
            salary_max: row.salary_max,
            contract_type: row.contract_type,
            location: row.location,
            canton_id,
            commune_id: None,
            sector_id: None,
            source_url: row.source_url,
            source_platform: row.source_platform,
            application_url: None,
            application_email: None,
            contact_person: None,
            deadline: None,
            is_active: true,
            matching_score: None,
            extracted_at: now,
            created_at: now,
        };
        job_repo.insert(&offer).await?;
        count += 1;
    }

    Ok(count)
}
