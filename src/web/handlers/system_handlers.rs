// src/web/handlers/system_handlers.rs
use crate::auth::{AuthenticatedUser, OptionalAuth};
use crate::database::Database;
use crate::models::UserProfile;
use crate::web::types::{DataResponse, StandardErrorResponse, TextResponse};
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

pub async fn health_handler(db: &State<Database>, auth: OptionalAuth) -> Json<TextResponse> {
    if let Err(e) = db.health_check().await {
        error!("Health check failed: {}", e);
        return Json(TextResponse {
            response_type: crate::web::types::ResponseType::Text,
            success: false,
            message: "Service degraded: database unreachable".to_string(),
        });
    }

    let message = match auth.user {
        Some(user) => format!("Service en ligne. Connecté en tant que {}", user.email()),
        None => "Service en ligne".to_string(),
    };

    Json(TextResponse::success(message))
}

pub async fn get_current_user_handler(auth: AuthenticatedUser) -> Json<DataResponse<UserProfile>> {
    Json(DataResponse::success(
        "Profil chargé".to_string(),
        auth.profile,
    ))
}

pub async fn get_current_user_error_handler() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Authentication required".to_string(),
        "UNAUTHORIZED".to_string(),
        vec!["Provide a valid bearer token".to_string()],
    ))
}
