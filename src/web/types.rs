// src/web/types.rs - request/response envelopes shared by every endpoint

use rocket::serde::{Deserialize, Serialize};

use crate::models::{ApplicationWithOffer, DashboardStats, JobOffer};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ActionResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub message: String,
    pub action: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ResponseType {
    Text,
    Data,
    Action,
    Error,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            response_type: ResponseType::Text,
            success: true,
            message,
        }
    }
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            response_type: ResponseType::Data,
            success: true,
            message,
            data,
        }
    }
}

impl ActionResponse {
    pub fn success(message: String, action: String) -> Self {
        Self {
            response_type: ResponseType::Action,
            success: true,
            message,
            action,
        }
    }
}

impl StandardErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            response_type: ResponseType::Error,
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

// ===== Request bodies =====

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateApplicationRequest {
    pub job_offer_id: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct MoveApplicationRequest {
    pub status: crate::models::ApplicationStatus,
    pub position: i64,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ApplicationNotesRequest {
    pub interview_date: Option<String>,
    pub interview_notes: Option<String>,
}

/// One answered question in a test submission.
#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct AnswerInput {
    pub question_id: String,
    pub score: u8,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct SubmitTestRequest {
    pub answers: Vec<AnswerInput>,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatRequest {
    pub message: String,
    /// Set when the user picked a guide question to practice rather than
    /// typing a free-form message.
    pub practice_question: Option<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatReply {
    pub role: &'static str,
    pub content: String,
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct CreateTestUserRequest {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ===== Composite response data =====

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_applications: Vec<ApplicationWithOffer>,
    pub recommended_jobs: Vec<JobOffer>,
}
