use thiserror::Error;

use crate::models::{Gender, Respondent};

/// Errors raised by the matching core
#[derive(Debug, Error)]
pub enum MatchingError {
    /// A respondent carries a gender value outside the recognized set.
    /// Fails the whole batch: silently dropping the record would corrupt the
    /// participant counts the statistics are built from.
    #[error("unrecognized gender value '{value}' for student {student_id}")]
    InvalidGender { student_id: String, value: String },
}

/// The two per-gender response sets produced by one partition pass.
#[derive(Debug, Clone, Default)]
pub struct GenderGroups {
    pub male: Vec<Respondent>,
    pub female: Vec<Respondent>,
}

/// Split a response set into the two gender groups, preserving input order.
///
/// Order within each group is the insertion order of the input; the solver
/// relies on it for deterministic tie-breaks, so no sorting happens here.
pub fn partition_by_gender(responses: &[Respondent]) -> Result<GenderGroups, MatchingError> {
    let mut groups = GenderGroups::default();

    for respondent in responses {
        match Gender::parse(&respondent.gender) {
            Some(Gender::Male) => groups.male.push(respondent.clone()),
            Some(Gender::Female) => groups.female.push(respondent.clone()),
            None => {
                return Err(MatchingError::InvalidGender {
                    student_id: respondent.student_id.clone(),
                    value: respondent.gender.clone(),
                });
            }
        }
    }

    Ok(groups)
}
