use crate::models::{Respondent, ScoringWeights};

/// Calculate the compatibility score (0-100) for a pair of respondents
///
/// Scoring formula (weighted exact-match accumulation):
///
/// | attribute    | points | rule                          |
/// |--------------|--------|-------------------------------|
/// | wake_time    | 25     | equal                         |
/// | bed_time     | 25     | equal                         |
/// | smoking      | 20     | equal                         |
/// | sleep_habit  | 15     | equal                         |
/// | personality  | 15     | both present and equal        |
///
/// Deterministic, symmetric, and a pure function of the two answer sets.
/// Missing optional answers contribute 0, never an error. Intentionally simple:
/// matches are reviewed by an administrator before finalization, so
/// explainability beats accuracy here.
pub fn calculate_pair_score(a: &Respondent, b: &Respondent, weights: &ScoringWeights) -> u32 {
    let mut score = 0;

    if a.answers.wake_time == b.answers.wake_time {
        score += weights.wake;
    }
    if a.answers.bed_time == b.answers.bed_time {
        score += weights.bed;
    }
    if a.answers.smoking == b.answers.smoking {
        score += weights.smoking;
    }
    if a.answers.sleep_habit == b.answers.sleep_habit {
        score += weights.sleep_habit;
    }
    if let (Some(pa), Some(pb)) = (&a.answers.personality, &b.answers.personality) {
        if pa == pb {
            score += weights.personality;
        }
    }

    score
}
