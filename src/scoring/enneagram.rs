// src/scoring/enneagram.rs
//! Enneagram nine-type scoring with wing selection.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::AnswerSheet;

/// The nine Enneagram types, arranged on a ring where 1 and 9 are adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnneagramType {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl EnneagramType {
    pub const ALL: [EnneagramType; 9] = [
        EnneagramType::One,
        EnneagramType::Two,
        EnneagramType::Three,
        EnneagramType::Four,
        EnneagramType::Five,
        EnneagramType::Six,
        EnneagramType::Seven,
        EnneagramType::Eight,
        EnneagramType::Nine,
    ];

    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1..=9 => Ok(Self::ALL[usize::from(number) - 1]),
            other => bail!("Enneagram type must be 1-9, got {}", other),
        }
    }

    const fn index(self) -> usize {
        match self {
            EnneagramType::One => 0,
            EnneagramType::Two => 1,
            EnneagramType::Three => 2,
            EnneagramType::Four => 3,
            EnneagramType::Five => 4,
            EnneagramType::Six => 5,
            EnneagramType::Seven => 6,
            EnneagramType::Eight => 7,
            EnneagramType::Nine => 8,
        }
    }

    /// Ring neighbour on the low side (1 wraps to 9).
    pub fn left_neighbour(self) -> EnneagramType {
        Self::ALL[(self.index() + 8) % 9]
    }

    /// Ring neighbour on the high side (9 wraps to 1).
    pub fn right_neighbour(self) -> EnneagramType {
        Self::ALL[(self.index() + 1) % 9]
    }
}

/// The slice of a questionnaire row the scorer needs: one weight per type.
///
/// Weights may be negative or zero. Construction rejects non-finite values
/// so the accumulators below never see NaN or infinity.
#[derive(Debug, Clone)]
pub struct EnneagramItem {
    pub id: String,
    weights: [f64; 9],
}

impl EnneagramItem {
    pub fn new(id: impl Into<String>, weights: [f64; 9]) -> Result<Self> {
        let id = id.into();
        for (i, weight) in weights.iter().enumerate() {
            if !weight.is_finite() {
                bail!(
                    "question '{}' has a non-finite weight for type {}",
                    id,
                    i + 1
                );
            }
        }
        Ok(Self { id, weights })
    }

    pub fn weight(&self, personality: EnneagramType) -> f64 {
        self.weights[personality.index()]
    }
}

/// Per-type weighted sums, indexed by [`EnneagramType`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnneagramScores([f64; 9]);

impl EnneagramScores {
    pub fn get(&self, personality: EnneagramType) -> f64 {
        self.0[personality.index()]
    }

    fn add(&mut self, personality: EnneagramType, value: f64) {
        self.0[personality.index()] += value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnneagramType, f64)> + '_ {
        EnneagramType::ALL.iter().map(|&t| (t, self.get(t)))
    }

    /// Type with the highest sum; ties keep the incumbent, so the first type
    /// in 1..9 order wins.
    pub fn dominant(&self) -> EnneagramType {
        let mut best = EnneagramType::ALL[0];
        for &candidate in &EnneagramType::ALL[1..] {
            if self.get(candidate) > self.get(best) {
                best = candidate;
            }
        }
        best
    }

    /// Higher-scoring of the two ring neighbours of `dominant`. On an exact
    /// tie the right neighbour (dominant + 1, wrapping) wins.
    pub fn wing(&self, dominant: EnneagramType) -> EnneagramType {
        let left = dominant.left_neighbour();
        let right = dominant.right_neighbour();
        if self.get(left) > self.get(right) {
            left
        } else {
            right
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnneagramOutcome {
    pub scores: EnneagramScores,
    pub dominant: EnneagramType,
    pub wing: EnneagramType,
}

/// Accumulate answer × weight into every type's score for each answered
/// item. Unanswered items contribute zero to every type.
pub fn score_enneagram(items: &[EnneagramItem], answers: &AnswerSheet) -> EnneagramOutcome {
    let mut scores = EnneagramScores::default();
    for item in items {
        if let Some(value) = answers.get(&item.id) {
            for personality in EnneagramType::ALL {
                scores.add(personality, f64::from(value) * item.weight(personality));
            }
        }
    }
    let dominant = scores.dominant();
    let wing = scores.wing(dominant);
    EnneagramOutcome {
        scores,
        dominant,
        wing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EnneagramType::*;

    fn item(id: &str, weights: [f64; 9]) -> EnneagramItem {
        EnneagramItem::new(id, weights).unwrap()
    }

    #[test]
    fn test_single_item_weighted_scores() {
        let items = vec![item("q1", [1.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0])];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 4).unwrap();

        let outcome = score_enneagram(&items, &answers);
        assert_eq!(outcome.scores.get(One), 4.0);
        assert_eq!(outcome.scores.get(Five), 2.0);
        assert_eq!(outcome.scores.get(Two), 0.0);
        assert_eq!(outcome.dominant, One);
        // Both neighbours of type 1 (9 and 2) score zero; the right
        // neighbour wins the tie.
        assert_eq!(outcome.wing, Two);
    }

    #[test]
    fn test_negative_weights_accumulate() {
        let items = vec![
            item("q1", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5]),
            item("q2", [0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
        ];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 4).unwrap();
        answers.record("q2", 2).unwrap();

        let outcome = score_enneagram(&items, &answers);
        assert_eq!(outcome.scores.get(Two), 5.0);
        assert_eq!(outcome.scores.get(Nine), 0.0);
    }

    #[test]
    fn test_unanswered_items_contribute_zero_to_every_type() {
        let items = vec![
            item("q1", [1.0; 9]),
            item("q2", [2.0; 9]),
        ];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 3).unwrap();

        let outcome = score_enneagram(&items, &answers);
        for (_, score) in outcome.scores.iter() {
            assert_eq!(score, 3.0);
        }
    }

    #[test]
    fn test_empty_answer_sheet_picks_type_one() {
        let items = vec![item("q1", [0.5; 9])];
        let outcome = score_enneagram(&items, &AnswerSheet::new());
        assert_eq!(outcome.dominant, One);
        assert_eq!(outcome.wing, Two);
    }

    #[test]
    fn test_dominant_tie_keeps_lower_type() {
        let items = vec![item("q1", [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0])];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 5).unwrap();

        // Types 3 and 6 tie; 3 comes first.
        let outcome = score_enneagram(&items, &answers);
        assert_eq!(outcome.dominant, Three);
    }

    #[test]
    fn test_wing_adjacency_on_the_ring() {
        assert_eq!(One.left_neighbour(), Nine);
        assert_eq!(One.right_neighbour(), Two);
        assert_eq!(Nine.left_neighbour(), Eight);
        assert_eq!(Nine.right_neighbour(), One);
        assert_eq!(Five.left_neighbour(), Four);
        assert_eq!(Five.right_neighbour(), Six);
    }

    #[test]
    fn test_wing_prefers_higher_scoring_neighbour() {
        // Dominant is 5; neighbour 4 outscores neighbour 6.
        let items = vec![item("q1", [0.0, 0.0, 0.0, 0.8, 1.0, 0.2, 0.0, 0.0, 0.0])];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 5).unwrap();

        let outcome = score_enneagram(&items, &answers);
        assert_eq!(outcome.dominant, Five);
        assert_eq!(outcome.wing, Four);
    }

    #[test]
    fn test_wing_tie_prefers_right_neighbour() {
        // Dominant is 9; neighbours 8 and 1 tie exactly.
        let items = vec![item("q1", [0.3, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.3, 1.0])];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 5).unwrap();

        let outcome = score_enneagram(&items, &answers);
        assert_eq!(outcome.dominant, Nine);
        assert_eq!(outcome.wing, One);
    }

    #[test]
    fn test_item_rejects_non_finite_weights() {
        assert!(EnneagramItem::new("q1", [f64::NAN, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
        assert!(EnneagramItem::new("q1", [0.0, f64::INFINITY, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_type_numbers_round_trip() {
        for personality in EnneagramType::ALL {
            assert_eq!(
                EnneagramType::from_number(personality.number()).unwrap(),
                personality
            );
        }
        assert!(EnneagramType::from_number(0).is_err());
        assert!(EnneagramType::from_number(10).is_err());
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let items = vec![
            item("q1", [0.2, -0.1, 0.4, 0.0, 0.3, 0.0, 0.1, 0.0, 0.6]),
            item("q2", [0.0, 0.7, 0.0, 0.5, 0.0, 0.2, 0.0, 0.9, 0.0]),
        ];
        let mut answers = AnswerSheet::new();
        answers.record("q1", 3).unwrap();
        answers.record("q2", 4).unwrap();

        let first = score_enneagram(&items, &answers);
        let second = score_enneagram(&items, &answers);
        assert_eq!(first.scores, second.scores);
        assert_eq!(first.dominant, second.dominant);
        assert_eq!(first.wing, second.wing);
    }
}
