// src/web/handlers/interview_handlers.rs
use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::interview::{self, QuestionGroup, TipGroup};
use crate::models::InterviewResource;
use crate::repositories::ResourceRepository;
use crate::web::types::{ChatReply, ChatRequest, DataResponse, StandardErrorResponse};
use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;
use tracing::error;

pub async fn list_resources_handler(
    _auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<InterviewResource>>>, Json<StandardErrorResponse>> {
    let repo = ResourceRepository::new(db.pool());
    match repo.list_public().await {
        Ok(resources) => Ok(Json(DataResponse::success(
            "Ressources chargées".to_string(),
            resources,
        ))),
        Err(e) => {
            error!("Failed to list interview resources: {}", e);
            Err(Json(StandardErrorResponse::new(
                "Failed to load resources".to_string(),
                "LIST_ERROR".to_string(),
                vec!["Try again or contact support".to_string()],
            )))
        }
    }
}

#[derive(Serialize)]
pub struct InterviewGuide {
    pub common_questions: &'static [QuestionGroup],
    pub tips: &'static [TipGroup],
}

pub async fn interview_guide_handler(
    _auth: AuthenticatedUser,
) -> Json<DataResponse<InterviewGuide>> {
    Json(DataResponse::success(
        "Guide de préparation".to_string(),
        InterviewGuide {
            common_questions: interview::COMMON_QUESTIONS,
            tips: interview::INTERVIEW_TIPS,
        },
    ))
}

pub async fn chat_handler(
    request: Json<ChatRequest>,
    _auth: AuthenticatedUser,
) -> Result<Json<DataResponse<ChatReply>>, Json<StandardErrorResponse>> {
    let content = match &request.practice_question {
        Some(question) if !question.trim().is_empty() => {
            interview::practice_prompt(question.trim())
        }
        _ => {
            let message = request.message.trim();
            if message.is_empty() {
                return Err(Json(StandardErrorResponse::new(
                    "Message must not be empty".to_string(),
                    "EMPTY_MESSAGE".to_string(),
                    vec!["Type a question about interview preparation".to_string()],
                )));
            }
            interview::coach_reply(message).to_string()
        }
    };

    Ok(Json(DataResponse::success(
        "Réponse de l'assistant".to_string(),
        ChatReply {
            role: "assistant",
            content,
        },
    )))
}
