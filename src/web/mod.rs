// src/web/mod.rs - route declarations and server assembly

pub mod handlers;
pub mod types;

pub use types::*;

use crate::auth::{AuthConfig, AuthenticatedUser, OptionalAuth, ServiceAuth};
use crate::config::ConfigManager;
use crate::database::Database;
use crate::models::{
    Application, Canton, Commune, JobOffer, JobSearchFilters, KanbanBoard, ProfileUpdate, Sector,
    UserProfile,
};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, options, patch, post, routes, Request, Response, State};
use tracing::{error, info};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, PATCH, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/health")]
pub async fn health(db: &State<Database>, auth: OptionalAuth) -> Json<TextResponse> {
    handlers::health_handler(db, auth).await
}

#[get("/me")]
pub async fn get_current_user(auth: AuthenticatedUser) -> Json<DataResponse<UserProfile>> {
    handlers::get_current_user_handler(auth).await
}

#[get("/me", rank = 2)]
pub async fn get_current_user_error() -> Json<StandardErrorResponse> {
    handlers::get_current_user_error_handler().await
}

#[patch("/profile", data = "<request>")]
pub async fn update_profile(
    request: Json<ProfileUpdate>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<UserProfile>>, Json<StandardErrorResponse>> {
    handlers::update_profile_handler(request, auth, db).await
}

#[get("/geo/cantons")]
pub async fn list_cantons(
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Canton>>>, Json<StandardErrorResponse>> {
    handlers::list_cantons_handler(db).await
}

#[get("/geo/communes?<canton>")]
pub async fn list_communes(
    canton: Option<String>,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Commune>>>, Json<StandardErrorResponse>> {
    handlers::list_communes_handler(canton, db).await
}

#[get("/sectors")]
pub async fn list_sectors(
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<Sector>>>, Json<StandardErrorResponse>> {
    handlers::list_sectors_handler(db).await
}

#[post("/jobs/search", data = "<request>")]
pub async fn search_jobs(
    request: Json<JobSearchFilters>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<JobOffer>>>, Json<StandardErrorResponse>> {
    handlers::search_jobs_handler(request, auth, db).await
}

#[get("/applications/board")]
pub async fn get_board(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<KanbanBoard>>, Json<StandardErrorResponse>> {
    handlers::get_board_handler(auth, db).await
}

#[post("/applications", data = "<request>")]
pub async fn create_application(
    request: Json<CreateApplicationRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Application>>, Json<StandardErrorResponse>> {
    handlers::create_application_handler(request, auth, db).await
}

#[patch("/applications/<id>/move", data = "<request>")]
pub async fn move_application(
    id: String,
    request: Json<MoveApplicationRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::move_application_handler(id, request, auth, db).await
}

#[patch("/applications/<id>/notes", data = "<request>")]
pub async fn update_application_notes(
    id: String,
    request: Json<ApplicationNotesRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::update_notes_handler(id, request, auth, db).await
}

#[delete("/applications/<id>")]
pub async fn delete_application(
    id: String,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<ActionResponse>, Json<StandardErrorResponse>> {
    handlers::delete_application_handler(id, auth, db).await
}

#[get("/tests/riasec/questions")]
pub async fn riasec_questions(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<crate::models::RiasecQuestion>>>, Json<StandardErrorResponse>> {
    handlers::riasec_questions_handler(auth, db).await
}

#[post("/tests/riasec/submit", data = "<request>")]
pub async fn submit_riasec(
    request: Json<SubmitTestRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<crate::models::RiasecResult>>, Json<StandardErrorResponse>> {
    handlers::submit_riasec_handler(request, auth, db).await
}

#[get("/tests/riasec/result")]
pub async fn riasec_result(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Option<crate::models::RiasecResult>>>, Json<StandardErrorResponse>> {
    handlers::riasec_result_handler(auth, db).await
}

#[get("/tests/enneagram/questions")]
pub async fn enneagram_questions(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<crate::models::EnneagramQuestion>>>, Json<StandardErrorResponse>>
{
    handlers::enneagram_questions_handler(auth, db).await
}

#[post("/tests/enneagram/submit", data = "<request>")]
pub async fn submit_enneagram(
    request: Json<SubmitTestRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<crate::models::EnneagramResult>>, Json<StandardErrorResponse>> {
    handlers::submit_enneagram_handler(request, auth, db).await
}

#[get("/tests/enneagram/result")]
pub async fn enneagram_result(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Option<crate::models::EnneagramResult>>>, Json<StandardErrorResponse>>
{
    handlers::enneagram_result_handler(auth, db).await
}

#[get("/interview/resources")]
pub async fn interview_resources(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<crate::models::InterviewResource>>>, Json<StandardErrorResponse>>
{
    handlers::list_resources_handler(auth, db).await
}

#[get("/interview/guide")]
pub async fn interview_guide(
    auth: AuthenticatedUser,
) -> Json<DataResponse<handlers::InterviewGuide>> {
    handlers::interview_guide_handler(auth).await
}

#[post("/interview/chat", data = "<request>")]
pub async fn interview_chat(
    request: Json<ChatRequest>,
    auth: AuthenticatedUser,
) -> Result<Json<DataResponse<ChatReply>>, Json<StandardErrorResponse>> {
    handlers::chat_handler(request, auth).await
}

#[get("/dashboard")]
pub async fn dashboard(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<DashboardData>>, Json<StandardErrorResponse>> {
    handlers::dashboard_handler(auth, db).await
}

#[post("/admin/test-user", data = "<request>")]
pub async fn create_test_user(
    request: Json<CreateTestUserRequest>,
    service: ServiceAuth,
    db: &State<Database>,
) -> Result<Json<DataResponse<UserProfile>>, Json<StandardErrorResponse>> {
    handlers::create_test_user_handler(request, service, db).await
}

#[options("/<_..>")]
pub async fn options_catchall() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Resource not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the request path".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body could not be parsed".to_string(),
        "UNPROCESSABLE".to_string(),
        vec!["Check field names and value types".to_string()],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let db = match Database::new(&config.environment.database_path).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e);
        }
    };

    let mut auth_config = AuthConfig::new(config.auth.clone());

    if let Err(e) = auth_config.refresh_keys().await {
        error!("Failed to fetch identity provider keys: {}", e);
        return Err(e);
    }

    info!("Starting Emploi Romand API server");
    info!("Database: {}", config.environment.database_path.display());

    let _rocket = rocket::build()
        .attach(Cors)
        .manage(auth_config)
        .manage(db)
        .register(
            "/api",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/api",
            routes![
                health,
                get_current_user,
                get_current_user_error,
                update_profile,
                list_cantons,
                list_communes,
                list_sectors,
                search_jobs,
                get_board,
                create_application,
                move_application,
                update_application_notes,
                delete_application,
                riasec_questions,
                submit_riasec,
                riasec_result,
                enneagram_questions,
                submit_enneagram,
                enneagram_result,
                interview_resources,
                interview_guide,
                interview_chat,
                dashboard,
                create_test_user,
                options_catchall,
            ],
        )
        .launch()
        .await;

    Ok(())
}
