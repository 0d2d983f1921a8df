// src/web/handlers/admin_handlers.rs
//! Test-account provisioning, gated by the service key. Credentials stay at
//! the identity provider; this seeds the profile row and a few sample
//! applications so a fresh test account lands on a populated board.

use crate::auth::ServiceAuth;
use crate::database::Database;
use crate::models::{Application, ApplicationStatus, UserProfile};
use crate::repositories::{ApplicationRepository, JobOfferRepository, ProfileRepository};
use crate::web::types::{CreateTestUserRequest, DataResponse, StandardErrorResponse};
use chrono::{Duration, Utc};
use rocket::serde::json::Json;
use rocket::State;
use sqlx::types::Json as SqlJson;
use tracing::{error, info, warn};
use uuid::Uuid;

const SAMPLE_STATUSES: [ApplicationStatus; 3] = [
    ApplicationStatus::Applied,
    ApplicationStatus::InterviewScheduled,
    ApplicationStatus::Draft,
];

const SAMPLE_NOTES: [&str; 3] = [
    "Candidature envoyée avec CV personnalisé",
    "Entretien prévu le 15 octobre à 14h",
    "Brouillon - À finaliser",
];

pub async fn create_test_user_handler(
    request: Json<CreateTestUserRequest>,
    _service: ServiceAuth,
    db: &State<Database>,
) -> Result<Json<DataResponse<UserProfile>>, Json<StandardErrorResponse>> {
    let email = request.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(Json(StandardErrorResponse::new(
            "A valid email is required".to_string(),
            "INVALID_EMAIL".to_string(),
            vec!["Send { \"email\": \"info@grandire.ch\", ... }".to_string()],
        )));
    }

    let profile_repo = ProfileRepository::new(db.pool());
    match profile_repo.find_by_email(&email).await {
        Ok(Some(_)) => {
            return Err(Json(StandardErrorResponse::new(
                format!("A profile already exists for {}", email),
                "ALREADY_EXISTS".to_string(),
                vec!["Remove the existing test user first".to_string()],
            )))
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check existing profile: {}", e);
            return Err(Json(provisioning_error()));
        }
    }

    let now = Utc::now();
    let mut profile = UserProfile::provision(&Uuid::new_v4().to_string(), &email, now);
    profile.first_name = Some(
        request
            .first_name
            .clone()
            .unwrap_or_else(|| "Test".to_string()),
    );
    profile.last_name = Some(
        request
            .last_name
            .clone()
            .unwrap_or_else(|| "Utilisateur".to_string()),
    );

    if let Err(e) = profile_repo.insert(&profile).await {
        error!("Failed to create test profile: {}", e);
        return Err(Json(provisioning_error()));
    }

    // Seed demo applications over whatever offers exist; a test account
    // without offers just starts with an empty board.
    let job_repo = JobOfferRepository::new(db.pool());
    match job_repo.list_any_active(SAMPLE_STATUSES.len() as i64).await {
        Ok(offers) => {
            let app_repo = ApplicationRepository::new(db.pool());
            for (index, offer) in offers.iter().enumerate() {
                let created_at = now - Duration::days(index as i64 + 1);
                let application = Application {
                    id: Uuid::new_v4().to_string(),
                    user_id: profile.id.clone(),
                    job_offer_id: offer.id.clone(),
                    status: SAMPLE_STATUSES[index],
                    kanban_position: 0,
                    generated_cv_url: None,
                    generated_cover_letter_url: None,
                    custom_cv_url: None,
                    custom_cover_letter_url: None,
                    additional_documents: SqlJson(Vec::new()),
                    application_sent_at: (SAMPLE_STATUSES[index] != ApplicationStatus::Draft)
                        .then_some(created_at),
                    interview_date: None,
                    interview_notes: Some(SAMPLE_NOTES[index].to_string()),
                    feedback: None,
                    follow_up_date: None,
                    auto_generated: true,
                    created_at,
                    updated_at: created_at,
                };
                if let Err(e) = app_repo.insert(&application).await {
                    warn!("Failed to seed sample application: {}", e);
                }
            }
        }
        Err(e) => warn!("Failed to load offers for sample applications: {}", e),
    }

    info!("Provisioned test user {}", email);

    Ok(Json(DataResponse::success(
        "Utilisateur créé avec succès. Vous pouvez maintenant vous connecter.".to_string(),
        profile,
    )))
}

fn provisioning_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Failed to provision test user".to_string(),
        "PROVISIONING_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}
