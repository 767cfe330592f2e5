// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Gender, MatchResult, MatchSummary, Respondent, Room, RoomMember, ScoringWeights, SurveyAnswers,
};
pub use requests::{MoveMemberRequest, RunMatchingRequest};
pub use responses::{DeleteResultResponse, ErrorResponse, HealthResponse, MoveMemberResponse};
