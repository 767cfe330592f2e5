use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to run matching for a survey
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RunMatchingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "form_id", rename = "formId")]
    pub form_id: String,
}

/// Request to move a member between room slots in a stored result
///
/// Slot indices are 0 or 1; anything else is rejected by the editor as an
/// invalid move, not as a request error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MoveMemberRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "form_id", rename = "formId")]
    pub form_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "source_room_id", rename = "sourceRoomId")]
    pub source_room_id: String,
    #[serde(alias = "source_slot", rename = "sourceSlot")]
    pub source_slot: usize,
    #[validate(length(min = 1))]
    #[serde(alias = "dest_room_id", rename = "destRoomId")]
    pub dest_room_id: String,
    #[serde(alias = "dest_slot", rename = "destSlot")]
    pub dest_slot: usize,
}
