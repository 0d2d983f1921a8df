// src/web/handlers/application_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::models::{Application, KanbanBoard};
use crate::repositories::{ApplicationRepository, JobOfferRepository};
use crate::utils;
use crate::web::types::{
    ActionResponse, ApplicationNotesRequest, CreateApplicationRequest, DataResponse,
    MoveApplicationRequest, StandardErrorResponse,
};
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn get_board_handler(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<KanbanBoard>>, Json<StandardErrorResponse>> {
    let repo = ApplicationRepository::new(db.pool());
    match repo.list_board_cards(auth.user_id()).await {
        Ok(cards) => Ok(Json(DataResponse::success(
            "Candidatures chargées".to_string(),
            KanbanBoard::build(cards),
        ))),
        Err(e) => {
            error!("Failed to load board for {}: {}", auth.email(), e);
            Err(Json(StandardErrorResponse::new(
                "Failed to load applications".to_string(),
                "BOARD_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}

pub async fn create_application_handler(
    request: Json<CreateApplicationRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Application>>, Json<StandardErrorResponse>> {
    let job_repo = JobOfferRepository::new(db.pool());
    match job_repo.find_by_id(&request.job_offer_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(Json(StandardErrorResponse::new(
                "Job offer not found".to_string(),
                "NOT_FOUND".to_string(),
                vec!["Refresh the job list and retry".to_string()],
            )))
        }
        Err(e) => {
            error!("Failed to look up job offer: {}", e);
            return Err(Json(create_error()));
        }
    }

    let repo = ApplicationRepository::new(db.pool());
    match repo.create(auth.user_id(), &request.job_offer_id).await {
        Ok(application) => Ok(Json(DataResponse::success(
            "Candidature créée".to_string(),
            application,
        ))),
        Err(e) => {
            error!("Failed to create application for {}: {}", auth.email(), e);
            Err(Json(create_error()))
        }
    }
}

pub async fn move_application_handler(
    id: String,
    request: Json<MoveApplicationRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    if request.position < 0 {
        return Err(Json(StandardErrorResponse::new(
            "Position must not be negative".to_string(),
            "INVALID_POSITION".to_string(),
            vec!["Send the drop index within the target column".to_string()],
        )));
    }

    let repo = ApplicationRepository::new(db.pool());
    match repo
        .move_to(&id, auth.user_id(), request.status, request.position)
        .await
    {
        Ok(true) => {
            info!(
                "User {} moved application {} to {:?}",
                auth.email(),
                id,
                request.status
            );
            Ok(Json(ActionResponse::success(
                format!("Statut changé vers \"{}\"", request.status.title()),
                "moved".to_string(),
            )))
        }
        Ok(false) => Err(Json(not_found(&id))),
        Err(e) => {
            error!("Failed to move application {}: {}", id, e);
            Err(Json(StandardErrorResponse::new(
                "Failed to update application".to_string(),
                "MOVE_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}

pub async fn update_notes_handler(
    id: String,
    request: Json<ApplicationNotesRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let interview_date = match utils::parse_datetime_opt(request.interview_date.as_deref()) {
        Ok(date) => date,
        Err(e) => {
            return Err(Json(StandardErrorResponse::new(
                e.to_string(),
                "INVALID_DATE".to_string(),
                vec!["Use an RFC 3339 timestamp, e.g. 2026-10-15T14:00:00+02:00".to_string()],
            )))
        }
    };

    let repo = ApplicationRepository::new(db.pool());
    match repo
        .update_notes(
            &id,
            auth.user_id(),
            interview_date,
            request.interview_notes.as_deref(),
        )
        .await
    {
        Ok(true) => Ok(Json(ActionResponse::success(
            "Vos notes ont été sauvegardées".to_string(),
            "notes_updated".to_string(),
        ))),
        Ok(false) => Err(Json(not_found(&id))),
        Err(e) => {
            error!("Failed to update notes on application {}: {}", id, e);
            Err(Json(StandardErrorResponse::new(
                "Failed to save notes".to_string(),
                "NOTES_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}

pub async fn delete_application_handler(
    id: String,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    let repo = ApplicationRepository::new(db.pool());
    match repo.delete(&id, auth.user_id()).await {
        Ok(true) => {
            info!("User {} deleted application {}", auth.email(), id);
            Ok(Json(ActionResponse::success(
                "Candidature supprimée".to_string(),
                "deleted".to_string(),
            )))
        }
        Ok(false) => Err(Json(not_found(&id))),
        Err(e) => {
            error!("Failed to delete application {}: {}", id, e);
            Err(Json(StandardErrorResponse::new(
                "Failed to delete application".to_string(),
                "DELETE_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}

fn create_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Failed to create application".to_string(),
        "CREATION_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}

fn not_found(id: &str) -> StandardErrorResponse {
    StandardErrorResponse::new(
        format!("Application '{}' not found", id),
        "NOT_FOUND".to_string(),
        vec!["Refresh the board and retry".to_string()],
    )
}
