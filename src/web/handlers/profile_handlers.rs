// src/web/handlers/profile_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::models::{ProfileUpdate, UserProfile};
use crate::repositories::ProfileRepository;
use crate::web::types::{DataResponse, StandardErrorResponse};
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn update_profile_handler(
    request: Json<ProfileUpdate>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<UserProfile>>, Json<StandardErrorResponse>> {
    info!("Updating profile for {}", auth.email());

    let repo = ProfileRepository::new(db.pool());
    match repo.update(auth.user_id(), request.into_inner()).await {
        Ok(Some(profile)) => Ok(Json(DataResponse::success(
            "Vos informations ont été sauvegardées avec succès".to_string(),
            profile,
        ))),
        Ok(None) => Err(Json(StandardErrorResponse::new(
            "Profile not found".to_string(),
            "NOT_FOUND".to_string(),
            vec!["Sign in again to re-provision your profile".to_string()],
        ))),
        Err(e) => {
            error!("Failed to update profile for {}: {}", auth.email(), e);
            Err(Json(StandardErrorResponse::new(
                "Failed to update profile".to_string(),
                "UPDATE_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}
