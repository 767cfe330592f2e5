use crate::models::{MatchResult, MatchSummary, Room};

/// Package solver output into a persistable `MatchResult`.
///
/// Pure aggregation. Inconsistent counts (more completions than participants)
/// clamp `not_completed_count` to 0 with a warning rather than failing: the
/// counts come from a collaborator and a matching run should survive a stale
/// roster.
pub fn assemble(
    form_id: &str,
    total_participants: u32,
    completed_count: u32,
    male_rooms: Vec<Room>,
    female_rooms: Vec<Room>,
) -> MatchResult {
    let not_completed_count = match total_participants.checked_sub(completed_count) {
        Some(n) => n,
        None => {
            tracing::warn!(
                "inconsistent counts for survey {}: completed {} exceeds total {}, clamping",
                form_id,
                completed_count,
                total_participants
            );
            0
        }
    };

    let summary = summarize(total_participants, completed_count, &male_rooms, &female_rooms);

    MatchResult {
        form_id: form_id.to_string(),
        total_participants,
        completed_count,
        not_completed_count,
        male_results: male_rooms,
        female_results: female_rooms,
        summary,
        created_at: chrono::Utc::now(),
    }
}

fn summarize(
    total_participants: u32,
    completed_count: u32,
    male_rooms: &[Room],
    female_rooms: &[Room],
) -> MatchSummary {
    // Every room counts as two slots, leftover singles included.
    let total_matched = (male_rooms.len() + female_rooms.len()) as u32 * 2;

    let success_rate = if total_participants == 0 {
        0.0
    } else {
        f64::from(completed_count) / f64::from(total_participants)
    };

    MatchSummary {
        total_matched,
        success_rate,
        unmatched: i64::from(total_participants) - i64::from(total_matched),
    }
}
