use serde::{Deserialize, Serialize};

/// Declared gender of a respondent. Pairing never crosses this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a raw gender value from a survey submission.
    ///
    /// Accepts the spellings the survey front-ends have historically sent:
    /// "M"/"male"/"남" and "F"/"female"/"여" (ASCII forms case-insensitive).
    /// Returns `None` for anything else; callers decide whether that is fatal.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "남" => Some(Gender::Male),
            "여" => Some(Gender::Female),
            other => match other.to_ascii_lowercase().as_str() {
                "m" | "male" => Some(Gender::Male),
                "f" | "female" => Some(Gender::Female),
                _ => None,
            },
        }
    }

    /// Room-id prefix for this gender group ("M-Room-1", "F-Room-3", ...).
    pub fn prefix(&self) -> char {
        match self {
            Gender::Male => 'M',
            Gender::Female => 'F',
        }
    }

    /// Recover the gender group from a room id by its prefix.
    pub fn from_room_id(room_id: &str) -> Option<Self> {
        match room_id.chars().next() {
            Some('M') => Some(Gender::Male),
            Some('F') => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Typed answer set of one survey submission.
///
/// The four required answers are compared by exact equality when scoring;
/// the optional ones contribute only when present on both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyAnswers {
    #[serde(rename = "wakeTime")]
    pub wake_time: String,
    #[serde(rename = "bedTime")]
    pub bed_time: String,
    pub smoking: String,
    #[serde(rename = "sleepHabit")]
    pub sleep_habit: String,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A student with a completed survey submission, eligible for pairing.
///
/// Immutable once submitted; duplicate submissions are rejected at the store
/// boundary, so the core can assume one record per student per survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Respondent {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
    pub gender: String,
    pub answers: SurveyAnswers,
    #[serde(rename = "submittedAt", default)]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Identity-only reference to a respondent inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMember {
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
    pub gender: Gender,
}

impl RoomMember {
    pub fn from_respondent(respondent: &Respondent, gender: Gender) -> Self {
        Self {
            student_id: respondent.student_id.clone(),
            name: respondent.name.clone(),
            gender,
        }
    }
}

/// Pairing unit: one or two same-gender respondents.
///
/// `score` is fixed at solve time and deliberately not recomputed when members
/// are moved manually afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "roomId")]
    pub room_id: String,
    #[serde(rename = "memberA")]
    pub member_a: Option<RoomMember>,
    #[serde(rename = "memberB")]
    pub member_b: Option<RoomMember>,
    pub score: u32,
}

impl Room {
    pub fn member(&self, slot: usize) -> Option<&RoomMember> {
        match slot {
            0 => self.member_a.as_ref(),
            1 => self.member_b.as_ref(),
            _ => None,
        }
    }

    /// Number of occupied slots (0..=2).
    pub fn occupied(&self) -> usize {
        self.member_a.is_some() as usize + self.member_b.is_some() as usize
    }

    /// Gender group this room belongs to, derived from its id prefix.
    pub fn gender(&self) -> Option<Gender> {
        Gender::from_room_id(&self.room_id)
    }
}

/// Display statistics derived from one matching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Occupied-slot estimate: every room counts as two slots, so a leftover
    /// single inflates this by one. Known simplification.
    #[serde(rename = "totalMatched")]
    pub total_matched: u32,
    #[serde(rename = "successRate")]
    pub success_rate: f64,
    /// `total_participants - total_matched`; can go negative because singles
    /// count as two slots. Left signed so the inconsistency stays visible.
    pub unmatched: i64,
}

/// Full output of one matching run for a survey, both gender groups plus
/// aggregate statistics. Superseded wholesale by re-running matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "formId")]
    pub form_id: String,
    #[serde(rename = "totalParticipants")]
    pub total_participants: u32,
    #[serde(rename = "completedCount")]
    pub completed_count: u32,
    #[serde(rename = "notCompletedCount")]
    pub not_completed_count: u32,
    #[serde(rename = "maleResults")]
    pub male_results: Vec<Room>,
    #[serde(rename = "femaleResults")]
    pub female_results: Vec<Room>,
    pub summary: MatchSummary,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Scoring weights for the compatibility scorer. Integer points; the defaults
/// sum to 100 so a perfect match scores exactly 100.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub wake: u32,
    pub bed: u32,
    pub smoking: u32,
    pub sleep_habit: u32,
    pub personality: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            wake: 25,
            bed: 25,
            smoking: 20,
            sleep_habit: 15,
            personality: 15,
        }
    }
}
