//! Dormmate Algo - roommate matching service for dormitory housing surveys
//!
//! This library provides the pairwise matching core used by the survey
//! administration tool: compatibility scoring, per-gender greedy pairing into
//! two-person rooms, result assembly, and manual room edits.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{assemble, calculate_pair_score, move_member, Matcher, MoveOutcome, MoveSpec};
pub use crate::models::{
    Gender, MatchResult, MatchSummary, Respondent, Room, RoomMember, ScoringWeights, SurveyAnswers,
};
