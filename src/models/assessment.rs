// src/models/assessment.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::scoring::{
    catalog, EnneagramItem, EnneagramOutcome, EnneagramType, RiasecCategory, RiasecItem,
    RiasecOutcome,
};

/// RIASEC questionnaire row. The category tag is decoded into the typed
/// enum at the database boundary, so a malformed tag surfaces as a decode
/// error before any scoring happens.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RiasecQuestion {
    pub id: String,
    pub question_number: i64,
    pub question_text: String,
    pub category: RiasecCategory,
    pub created_at: DateTime<Utc>,
}

impl RiasecQuestion {
    pub fn scoring_item(&self) -> RiasecItem {
        RiasecItem {
            id: self.id.clone(),
            category: self.category,
        }
    }
}

/// Enneagram questionnaire row with one weight column per type.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EnneagramQuestion {
    pub id: String,
    pub question_number: i64,
    pub question_text: String,
    pub type_1_weight: f64,
    pub type_2_weight: f64,
    pub type_3_weight: f64,
    pub type_4_weight: f64,
    pub type_5_weight: f64,
    pub type_6_weight: f64,
    pub type_7_weight: f64,
    pub type_8_weight: f64,
    pub type_9_weight: f64,
    pub created_at: DateTime<Utc>,
}

impl EnneagramQuestion {
    pub fn weights(&self) -> [f64; 9] {
        [
            self.type_1_weight,
            self.type_2_weight,
            self.type_3_weight,
            self.type_4_weight,
            self.type_5_weight,
            self.type_6_weight,
            self.type_7_weight,
            self.type_8_weight,
            self.type_9_weight,
        ]
    }

    /// Typed scoring item; rejects rows carrying non-finite weights.
    pub fn scoring_item(&self) -> anyhow::Result<EnneagramItem> {
        EnneagramItem::new(self.id.clone(), self.weights())
    }
}

/// Persisted outcome of one completed RIASEC test. Create-once, read-many;
/// the API surfaces only the most recent row per user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RiasecResult {
    pub id: String,
    pub user_id: String,
    pub realistic_score: i64,
    pub investigative_score: i64,
    pub artistic_score: i64,
    pub social_score: i64,
    pub enterprising_score: i64,
    pub conventional_score: i64,
    pub dominant_type: RiasecCategory,
    pub recommended_sectors: Json<Vec<String>>,
    pub completed_at: DateTime<Utc>,
}

impl RiasecResult {
    pub fn from_outcome(user_id: &str, outcome: &RiasecOutcome, now: DateTime<Utc>) -> Self {
        let scores = &outcome.scores;
        let recommended = catalog::riasec_profile(outcome.dominant)
            .careers
            .iter()
            .map(|c| c.to_string())
            .collect();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            realistic_score: i64::from(scores.get(RiasecCategory::Realistic)),
            investigative_score: i64::from(scores.get(RiasecCategory::Investigative)),
            artistic_score: i64::from(scores.get(RiasecCategory::Artistic)),
            social_score: i64::from(scores.get(RiasecCategory::Social)),
            enterprising_score: i64::from(scores.get(RiasecCategory::Enterprising)),
            conventional_score: i64::from(scores.get(RiasecCategory::Conventional)),
            dominant_type: outcome.dominant,
            recommended_sectors: Json(recommended),
            completed_at: now,
        }
    }
}

/// Persisted outcome of one completed Enneagram test.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EnneagramResult {
    pub id: String,
    pub user_id: String,
    pub type_1_score: f64,
    pub type_2_score: f64,
    pub type_3_score: f64,
    pub type_4_score: f64,
    pub type_5_score: f64,
    pub type_6_score: f64,
    pub type_7_score: f64,
    pub type_8_score: f64,
    pub type_9_score: f64,
    pub dominant_type: i64,
    pub wing_type: i64,
    pub description: String,
    pub career_recommendations: String,
    pub completed_at: DateTime<Utc>,
}

impl EnneagramResult {
    pub fn from_outcome(user_id: &str, outcome: &EnneagramOutcome, now: DateTime<Utc>) -> Self {
        let scores = &outcome.scores;
        let profile = catalog::enneagram_profile(outcome.dominant);
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            type_1_score: scores.get(EnneagramType::One),
            type_2_score: scores.get(EnneagramType::Two),
            type_3_score: scores.get(EnneagramType::Three),
            type_4_score: scores.get(EnneagramType::Four),
            type_5_score: scores.get(EnneagramType::Five),
            type_6_score: scores.get(EnneagramType::Six),
            type_7_score: scores.get(EnneagramType::Seven),
            type_8_score: scores.get(EnneagramType::Eight),
            type_9_score: scores.get(EnneagramType::Nine),
            dominant_type: i64::from(outcome.dominant.number()),
            wing_type: i64::from(outcome.wing.number()),
            description: profile.description.to_string(),
            career_recommendations: profile.careers.join(", "),
            completed_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{score_enneagram, score_riasec, AnswerSheet};

    #[test]
    fn test_riasec_result_mirrors_outcome() {
        let questions = vec![
            RiasecQuestion {
                id: "q1".to_string(),
                question_number: 1,
                question_text: "J'aime réparer des machines".to_string(),
                category: RiasecCategory::Realistic,
                created_at: Utc::now(),
            },
            RiasecQuestion {
                id: "q2".to_string(),
                question_number: 2,
                question_text: "J'aime analyser des données".to_string(),
                category: RiasecCategory::Investigative,
                created_at: Utc::now(),
            },
        ];
        let items: Vec<_> = questions.iter().map(|q| q.scoring_item()).collect();
        let mut answers = AnswerSheet::new();
        answers.record("q1", 5).unwrap();
        answers.record("q2", 2).unwrap();

        let outcome = score_riasec(&items, &answers);
        let result = RiasecResult::from_outcome("user-1", &outcome, Utc::now());
        assert_eq!(result.realistic_score, 5);
        assert_eq!(result.investigative_score, 2);
        assert_eq!(result.dominant_type, RiasecCategory::Realistic);
        assert!(!result.recommended_sectors.0.is_empty());
    }

    #[test]
    fn test_enneagram_result_carries_descriptive_fields() {
        let question = EnneagramQuestion {
            id: "q1".to_string(),
            question_number: 1,
            question_text: "Je cherche à tout améliorer".to_string(),
            type_1_weight: 1.0,
            type_2_weight: 0.0,
            type_3_weight: 0.0,
            type_4_weight: 0.0,
            type_5_weight: 0.5,
            type_6_weight: 0.0,
            type_7_weight: 0.0,
            type_8_weight: 0.0,
            type_9_weight: 0.0,
            created_at: Utc::now(),
        };
        let items = vec![question.scoring_item().unwrap()];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 4).unwrap();

        let outcome = score_enneagram(&items, &answers);
        let result = EnneagramResult::from_outcome("user-1", &outcome, Utc::now());
        assert_eq!(result.type_1_score, 4.0);
        assert_eq!(result.type_5_score, 2.0);
        assert_eq!(result.dominant_type, 1);
        assert_eq!(result.wing_type, 2);
        assert!(result.career_recommendations.contains("Juge"));
    }

    #[test]
    fn test_scoring_item_rejects_non_finite_weight() {
        let mut question = EnneagramQuestion {
            id: "q1".to_string(),
            question_number: 1,
            question_text: "".to_string(),
            type_1_weight: 0.0,
            type_2_weight: 0.0,
            type_3_weight: 0.0,
            type_4_weight: 0.0,
            type_5_weight: 0.0,
            type_6_weight: 0.0,
            type_7_weight: 0.0,
            type_8_weight: 0.0,
            type_9_weight: 0.0,
            created_at: Utc::now(),
        };
        question.type_4_weight = f64::NAN;
        assert!(question.scoring_item().is_err());
    }
}
