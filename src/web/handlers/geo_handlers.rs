// src/web/handlers/geo_handlers.rs
use crate::database::Database;
use crate::models::{Canton, Commune, Sector};
use crate::repositories::GeoRepository;
use crate::web::types::{DataResponse, StandardErrorResponse};
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

pub async fn list_cantons_handler(
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Canton>>>, Json<StandardErrorResponse>> {
    let repo = GeoRepository::new(db.pool());
    match repo.list_cantons().await {
        Ok(cantons) => Ok(Json(DataResponse::success(
            "Cantons chargés".to_string(),
            cantons,
        ))),
        Err(e) => {
            error!("Failed to list cantons: {}", e);
            Err(Json(list_error("cantons")))
        }
    }
}

pub async fn list_communes_handler(
    canton: Option<String>,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Commune>>>, Json<StandardErrorResponse>> {
    let repo = GeoRepository::new(db.pool());
    match repo.list_communes(canton.as_deref()).await {
        Ok(communes) => Ok(Json(DataResponse::success(
            "Communes chargées".to_string(),
            communes,
        ))),
        Err(e) => {
            error!("Failed to list communes: {}", e);
            Err(Json(list_error("communes")))
        }
    }
}

pub async fn list_sectors_handler(
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Sector>>>, Json<StandardErrorResponse>> {
    let repo = GeoRepository::new(db.pool());
    match repo.list_top_level_sectors().await {
        Ok(sectors) => Ok(Json(DataResponse::success(
            "Secteurs chargés".to_string(),
            sectors,
        ))),
        Err(e) => {
            error!("Failed to list sectors: {}", e);
            Err(Json(list_error("sectors")))
        }
    }
}

fn list_error(what: &str) -> StandardErrorResponse {
    StandardErrorResponse::new(
        format!("Failed to load {}", what),
        "LIST_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}
