// src/web/handlers/assessment_handlers.rs
//! Questionnaire delivery and test submission for both assessments.
//!
//! Submission is where the completeness gate lives: the scorer itself
//! accepts partial answer sets, so we reject them here before scoring.

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::models::{EnneagramQuestion, EnneagramResult, RiasecQuestion, RiasecResult};
use crate::repositories::AssessmentRepository;
use crate::scoring::{score_enneagram, score_riasec, AnswerSheet};
use crate::web::types::{AnswerInput, DataResponse, StandardErrorResponse, SubmitTestRequest};
use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn riasec_questions_handler(
    _auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<RiasecQuestion>>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    match repo.riasec_questions().await {
        Ok(questions) => Ok(Json(DataResponse::success(
            "Questions chargées".to_string(),
            questions,
        ))),
        Err(e) => {
            error!("Failed to load RIASEC questionnaire: {}", e);
            Err(Json(questionnaire_error()))
        }
    }
}

pub async fn submit_riasec_handler(
    request: Json<SubmitTestRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<RiasecResult>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    let questions = match repo.riasec_questions().await {
        Ok(questions) => questions,
        Err(e) => {
            error!("Failed to load RIASEC questionnaire: {}", e);
            return Err(Json(questionnaire_error()));
        }
    };

    let answers = build_answer_sheet(&request.answers)?;
    ensure_complete(&answers, questions.iter().map(|q| q.id.as_str()))?;

    let items: Vec<_> = questions.iter().map(|q| q.scoring_item()).collect();
    let outcome = score_riasec(&items, &answers);
    let result = RiasecResult::from_outcome(auth.user_id(), &outcome, Utc::now());

    if let Err(e) = repo.insert_riasec_result(&result).await {
        error!("Failed to store RIASEC result for {}: {}", auth.email(), e);
        return Err(Json(persist_error()));
    }

    info!(
        "RIASEC completed by {} (dominant: {})",
        auth.email(),
        result.dominant_type.code()
    );

    Ok(Json(DataResponse::success(
        "Vos résultats RIASEC ont été calculés avec succès".to_string(),
        result,
    )))
}

pub async fn riasec_result_handler(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Option<RiasecResult>>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    match repo.latest_riasec_result(auth.user_id()).await {
        Ok(result) => Ok(Json(DataResponse::success(
            "Dernier résultat chargé".to_string(),
            result,
        ))),
        Err(e) => {
            error!("Failed to load RIASEC result for {}: {}", auth.email(), e);
            Err(Json(result_error()))
        }
    }
}

pub async fn enneagram_questions_handler(
    _auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Vec<EnneagramQuestion>>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    match repo.enneagram_questions().await {
        Ok(questions) => Ok(Json(DataResponse::success(
            "Questions chargées".to_string(),
            questions,
        ))),
        Err(e) => {
            error!("Failed to load Enneagram questionnaire: {}", e);
            Err(Json(questionnaire_error()))
        }
    }
}

pub async fn submit_enneagram_handler(
    request: Json<SubmitTestRequest>,
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<EnneagramResult>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    let questions = match repo.enneagram_questions().await {
        Ok(questions) => questions,
        Err(e) => {
            error!("Failed to load Enneagram questionnaire: {}", e);
            return Err(Json(questionnaire_error()));
        }
    };

    let answers = build_answer_sheet(&request.answers)?;
    ensure_complete(&answers, questions.iter().map(|q| q.id.as_str()))?;

    // A row with a non-finite weight is a data defect; reject it rather
    // than let it poison every accumulator.
    let mut items = Vec::with_capacity(questions.len());
    for question in &questions {
        match question.scoring_item() {
            Ok(item) => items.push(item),
            Err(e) => {
                error!("Rejecting Enneagram questionnaire: {}", e);
                return Err(Json(StandardErrorResponse::new(
                    "Questionnaire data is invalid".to_string(),
                    "QUESTIONNAIRE_INVALID".to_string(),
                    vec!["Contact support".to_string()],
                )));
            }
        }
    }

    let outcome = score_enneagram(&items, &answers);
    let result = EnneagramResult::from_outcome(auth.user_id(), &outcome, Utc::now());

    if let Err(e) = repo.insert_enneagram_result(&result).await {
        error!(
            "Failed to store Enneagram result for {}: {}",
            auth.email(),
            e
        );
        return Err(Json(persist_error()));
    }

    info!(
        "Enneagram completed by {} (dominant: {}, wing: {})",
        auth.email(),
        result.dominant_type,
        result.wing_type
    );

    Ok(Json(DataResponse::success(
        "Vos résultats Ennéagramme ont été calculés avec succès".to_string(),
        result,
    )))
}

pub async fn enneagram_result_handler(
    auth: AuthenticatedUser,
    db: &State<Database>,
) -> Result<Json<DataResponse<Option<EnneagramResult>>>, Json<StandardErrorResponse>> {
    let repo = AssessmentRepository::new(db.pool());
    match repo.latest_enneagram_result(auth.user_id()).await {
        Ok(result) => Ok(Json(DataResponse::success(
            "Dernier résultat chargé".to_string(),
            result,
        ))),
        Err(e) => {
            error!(
                "Failed to load Enneagram result for {}: {}",
                auth.email(),
                e
            );
            Err(Json(result_error()))
        }
    }
}

fn build_answer_sheet(answers: &[AnswerInput]) -> Result<AnswerSheet, Json<StandardErrorResponse>> {
    let mut sheet = AnswerSheet::new();
    for answer in answers {
        if let Err(e) = sheet.record(&answer.question_id, answer.score) {
            return Err(Json(StandardErrorResponse::new(
                e.to_string(),
                "INVALID_ANSWER".to_string(),
                vec!["Answers must be whole numbers from 1 to 5".to_string()],
            )));
        }
    }
    Ok(sheet)
}

fn ensure_complete<'a>(
    answers: &AnswerSheet,
    question_ids: impl Iterator<Item = &'a str>,
) -> Result<(), Json<StandardErrorResponse>> {
    if answers.covers(question_ids) {
        return Ok(());
    }
    Err(Json(StandardErrorResponse::new(
        "Every question must be answered before submitting".to_string(),
        "INCOMPLETE_ANSWERS".to_string(),
        vec!["Answer the remaining questions and submit again".to_string()],
    )))
}

fn questionnaire_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Failed to load questionnaire".to_string(),
        "QUESTIONNAIRE_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}

fn persist_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Impossible de sauvegarder vos résultats".to_string(),
        "PERSIST_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}

fn result_error() -> StandardErrorResponse {
    StandardErrorResponse::new(
        "Failed to load test result".to_string(),
        "RESULT_ERROR".to_string(),
        vec!["Try again or contact support".to_string()],
    )
}
