// src/scoring/riasec.rs
//! Holland (RIASEC) vocational-interest scoring.

use serde::{Deserialize, Serialize};

use super::AnswerSheet;

/// The six Holland categories, in canonical enumeration order.
///
/// The order matters: dominant-type selection on tied scores keeps the
/// first category encountered in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum RiasecCategory {
    #[serde(rename = "R")]
    #[sqlx(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    #[sqlx(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    #[sqlx(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    #[sqlx(rename = "S")]
    Social,
    #[serde(rename = "E")]
    #[sqlx(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    #[sqlx(rename = "C")]
    Conventional,
}

impl RiasecCategory {
    pub const ALL: [RiasecCategory; 6] = [
        RiasecCategory::Realistic,
        RiasecCategory::Investigative,
        RiasecCategory::Artistic,
        RiasecCategory::Social,
        RiasecCategory::Enterprising,
        RiasecCategory::Conventional,
    ];

    /// Single-letter tag used in questionnaire rows and result records.
    pub fn code(self) -> char {
        match self {
            RiasecCategory::Realistic => 'R',
            RiasecCategory::Investigative => 'I',
            RiasecCategory::Artistic => 'A',
            RiasecCategory::Social => 'S',
            RiasecCategory::Enterprising => 'E',
            RiasecCategory::Conventional => 'C',
        }
    }

    pub fn from_code(code: char) -> anyhow::Result<Self> {
        match code.to_ascii_uppercase() {
            'R' => Ok(RiasecCategory::Realistic),
            'I' => Ok(RiasecCategory::Investigative),
            'A' => Ok(RiasecCategory::Artistic),
            'S' => Ok(RiasecCategory::Social),
            'E' => Ok(RiasecCategory::Enterprising),
            'C' => Ok(RiasecCategory::Conventional),
            other => anyhow::bail!("unknown RIASEC category tag: '{}'", other),
        }
    }

    const fn index(self) -> usize {
        match self {
            RiasecCategory::Realistic => 0,
            RiasecCategory::Investigative => 1,
            RiasecCategory::Artistic => 2,
            RiasecCategory::Social => 3,
            RiasecCategory::Enterprising => 4,
            RiasecCategory::Conventional => 5,
        }
    }
}

/// The slice of a questionnaire row the scorer needs.
#[derive(Debug, Clone)]
pub struct RiasecItem {
    pub id: String,
    pub category: RiasecCategory,
}

/// Per-category answer sums, indexed by [`RiasecCategory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiasecScores([u32; 6]);

impl RiasecScores {
    pub fn get(&self, category: RiasecCategory) -> u32 {
        self.0[category.index()]
    }

    fn add(&mut self, category: RiasecCategory, value: u32) {
        self.0[category.index()] += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (RiasecCategory, u32)> + '_ {
        RiasecCategory::ALL.iter().map(|&c| (c, self.get(c)))
    }

    /// Category with the highest sum. Ties keep the incumbent: the first
    /// category in canonical order wins, so the pick is deterministic and
    /// well-defined even when every sum is zero.
    pub fn dominant(&self) -> RiasecCategory {
        let mut best = RiasecCategory::ALL[0];
        for &candidate in &RiasecCategory::ALL[1..] {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }
}

#[derive(Debug, Clone)]
pub struct RiasecOutcome {
    pub scores: RiasecScores,
    pub dominant: RiasecCategory,
}

/// Sum each answered item's value into its category accumulator.
///
/// Items without a recorded answer are skipped, not scored as zero; an empty
/// answer sheet yields all-zero scores with Realistic as the dominant pick.
pub fn score_riasec(items: &[RiasecItem], answers: &AnswerSheet) -> RiasecOutcome {
    let mut scores = RiasecScores::default();
    for item in items {
        if let Some(value) = answers.get(&item.id) {
            scores.add(item.category, u32::from(value));
        }
    }
    let dominant = scores.dominant();
    RiasecOutcome { scores, dominant }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RiasecCategory::*;

    fn item(id: &str, category: RiasecCategory) -> RiasecItem {
        RiasecItem {
            id: id.to_string(),
            category,
        }
    }

    #[test]
    fn test_scores_sum_per_category() {
        let items = vec![
            item("q1", Realistic),
            item("q2", Realistic),
            item("q3", Realistic),
            item("q4", Investigative),
            item("q5", Investigative),
        ];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 5).unwrap();
        answers.record("q2", 5).unwrap();
        answers.record("q3", 5).unwrap();
        answers.record("q4", 1).unwrap();
        answers.record("q5", 1).unwrap();

        let outcome = score_riasec(&items, &answers);
        assert_eq!(outcome.scores.get(Realistic), 15);
        assert_eq!(outcome.scores.get(Investigative), 2);
        assert_eq!(outcome.scores.get(Artistic), 0);
        assert_eq!(outcome.scores.get(Social), 0);
        assert_eq!(outcome.scores.get(Enterprising), 0);
        assert_eq!(outcome.scores.get(Conventional), 0);
        assert_eq!(outcome.dominant, Realistic);
    }

    #[test]
    fn test_unanswered_items_contribute_nothing() {
        let items = vec![item("q1", Artistic), item("q2", Artistic)];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 3).unwrap();

        let outcome = score_riasec(&items, &answers);
        assert_eq!(outcome.scores.get(Artistic), 3);
    }

    #[test]
    fn test_empty_answer_sheet_is_degenerate_but_valid() {
        let items = vec![item("q1", Social), item("q2", Conventional)];
        let outcome = score_riasec(&items, &AnswerSheet::new());
        for (_, score) in outcome.scores.iter() {
            assert_eq!(score, 0);
        }
        assert_eq!(outcome.dominant, Realistic);
    }

    #[test]
    fn test_tie_break_keeps_first_in_canonical_order() {
        let items = vec![item("q1", Social), item("q2", Investigative)];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 4).unwrap();
        answers.record("q2", 4).unwrap();

        // I and S tie at 4; I comes first in R,I,A,S,E,C order.
        let outcome = score_riasec(&items, &answers);
        assert_eq!(outcome.dominant, Investigative);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let items = vec![
            item("q1", Enterprising),
            item("q2", Conventional),
            item("q3", Realistic),
        ];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 2).unwrap();
        answers.record("q2", 5).unwrap();
        answers.record("q3", 1).unwrap();

        let first = score_riasec(&items, &answers);
        let second = score_riasec(&items, &answers);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.dominant, second.dominant);
    }

    #[test]
    fn test_category_codes_round_trip() {
        for category in RiasecCategory::ALL {
            assert_eq!(
                RiasecCategory::from_code(category.code()).unwrap(),
                category
            );
        }
        assert!(RiasecCategory::from_code('X').is_err());
    }
}
