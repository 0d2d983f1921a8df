// src/scoring/mod.rs
//! Scoring for the two self-assessment tests (RIASEC and Enneagram).
//!
//! Everything in here is a pure, synchronous computation over an
//! already-fetched questionnaire and a validated answer sheet. Fetching the
//! questions and persisting the result belong to the repository layer;
//! gating on "all questions answered" belongs to the submit handlers.

pub mod answers;
pub mod catalog;
pub mod enneagram;
pub mod riasec;

pub use answers::{AnswerSheet, LIKERT_MAX, LIKERT_MIN};
pub use enneagram::{
    score_enneagram, EnneagramItem, EnneagramOutcome, EnneagramScores, EnneagramType,
};
pub use riasec::{score_riasec, RiasecCategory, RiasecItem, RiasecOutcome, RiasecScores};
