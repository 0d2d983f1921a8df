// src/web/handlers/dashboard_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::models::DashboardStats;
use crate::repositories::{ApplicationRepository, JobOfferRepository};
use crate::web::types::{DashboardData, DataResponse, StandardErrorResponse};
use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

const RECENT_LIMIT: i64 = 5;
const RECOMMENDED_LIMIT: i64 = 6;

pub async fn dashboard_handler(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<DashboardData>>, Json<StandardErrorResponse>> {
    let app_repo = ApplicationRepository::new(db.pool());
    let job_repo = JobOfferRepository::new(db.pool());

    let applications = match app_repo.list_for_user(auth.user_id()).await {
        Ok(applications) => applications,
        Err(e) => {
            error!("Failed to load applications for {}: {}", auth.email(), e);
            return Err(Json(dashboard_error()));
        }
    };

    let recent = match app_repo.recent_for_user(auth.user_id(), RECENT_LIMIT).await {
        Ok(recent) => recent,
        Err(e) => {
            error!(
                "Failed to load recent applications for {}: {}",
                auth.email(),
                e
            );
            return Err(Json(dashboard_error()));
        }
    };

    let recommended = match job_repo.list_recommended(RECOMMENDED_LIMIT).await {
        Ok(jobs) => jobs,
        Err(e) => {
            error!("Failed to load recommended offers: {}", e);
            return Err(Json(dashboard_error()));
        }
    };

    let stats = DashboardStats::from_applications(&applications, Utc::now());

    Ok(Json(DataResponse::success(
        "Tableau de bord chargé".to_string(),
        DashboardData {
            stats,
            recent_applications: recent,
            recommended_jobs: recommended,
        },
    )))
}

fn dashboard_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Failed to load dashboard".to_string(),
        "DASHBOARD_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}
