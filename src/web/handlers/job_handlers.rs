// src/web/handlers/job_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::models::{JobOffer, JobSearchFilters};
use crate::repositories::JobOfferRepository;
use crate::web::types::{DataResponse, StandardErrorResponse};
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn search_jobs_handler(
    request: Json<JobSearchFilters>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<JobOffer>>>, Json<StandardErrorResponse>> {
    let filters = request.into_inner();
    info!(
        "Job search by {} (keyword: {:?})",
        auth.email(),
        filters.keyword()
    );

    let repo = JobOfferRepository::new(db.pool());
    match repo.search(&filters).await {
        Ok(offers) => {
            let message = format!("{} offre(s) trouvée(s)", offers.len());
            Ok(Json(DataResponse::success(message, offers)))
        }
        Err(e) => {
            error!("Job search failed: {}", e);
            Err(Json(StandardErrorResponse::new(
                "Job search failed".to_string(),
                "SEARCH_ERROR".to_string(),
                vec![
                    "Simplify the filters and retry".to_string(),
                    "Contact support if the problem persists".to_string(),
                ],
            )))
        }
    }
}
