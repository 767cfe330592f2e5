use crate::core::partition::{partition_by_gender, MatchingError};
use crate::core::scoring::calculate_pair_score;
use crate::models::{Gender, Respondent, Room, RoomMember, ScoringWeights};

/// Minimum compatibility score required to commit a pairing.
pub const DEFAULT_THRESHOLD: u32 = 50;

/// Rooms produced by one matching run, one sequence per gender group.
#[derive(Debug)]
pub struct PairingOutcome {
    pub male_rooms: Vec<Room>,
    pub female_rooms: Vec<Room>,
}

/// Greedy pairwise matcher
///
/// Pairs respondents of one gender group into two-person rooms, highest
/// compatibility first, in a single deterministic O(n²) forward pass.
///
/// Deliberately greedy rather than optimal: the output is a human-reviewable
/// first draft that administrators hand-adjust before committing, and group
/// sizes are tens of students.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    threshold: u32,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, threshold: u32) -> Self {
        Self { weights, threshold }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Run the full pipeline for one survey: partition by gender, then pair
    /// each group independently.
    ///
    /// Never fails on well-formed input; the only error is an unrecognized
    /// gender value, which fails the whole run.
    pub fn run(&self, responses: &[Respondent]) -> Result<PairingOutcome, MatchingError> {
        let groups = partition_by_gender(responses)?;

        Ok(PairingOutcome {
            male_rooms: self.pair_group(&groups.male, Gender::Male),
            female_rooms: self.pair_group(&groups.female, Gender::Female),
        })
    }

    /// Pair one gender group into rooms.
    ///
    /// Single forward pass over the stable input order: for each unused
    /// respondent, scan the unused respondents after it and keep the strictly
    /// greatest score (first encountered wins ties). The pair is committed only
    /// when the best score reaches the acceptance threshold. Everyone still
    /// unused after the pass gets a single-occupant room with score 0 -- the
    /// odd-count or no-acceptable-match leftover.
    ///
    /// Room ids are sequential per group, so identical input order reproduces
    /// identical output.
    pub fn pair_group(&self, group: &[Respondent], gender: Gender) -> Vec<Room> {
        let mut used = vec![false; group.len()];
        let mut rooms: Vec<Room> = Vec::with_capacity(group.len() / 2 + 1);

        for i in 0..group.len() {
            if used[i] {
                continue;
            }

            let mut best_score = 0;
            let mut best_index = None;

            for j in (i + 1)..group.len() {
                if used[j] {
                    continue;
                }

                let score = calculate_pair_score(&group[i], &group[j], &self.weights);
                if score > best_score {
                    best_score = score;
                    best_index = Some(j);
                }
            }

            if let Some(j) = best_index {
                if best_score >= self.threshold {
                    used[i] = true;
                    used[j] = true;
                    rooms.push(Room {
                        room_id: room_id(gender, rooms.len() + 1),
                        member_a: Some(RoomMember::from_respondent(&group[i], gender)),
                        member_b: Some(RoomMember::from_respondent(&group[j], gender)),
                        score: best_score,
                    });
                }
            }
        }

        // Leftovers occupy a room alone, in stable order after the pairs.
        for (i, respondent) in group.iter().enumerate() {
            if !used[i] {
                rooms.push(Room {
                    room_id: room_id(gender, rooms.len() + 1),
                    member_a: Some(RoomMember::from_respondent(respondent, gender)),
                    member_b: None,
                    score: 0,
                });
            }
        }

        rooms
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn room_id(gender: Gender, n: usize) -> String {
    format!("{}-Room-{}", gender.prefix(), n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SurveyAnswers;

    fn respondent(id: &str, wake: &str, bed: &str, smoking: &str, habit: &str) -> Respondent {
        Respondent {
            student_id: id.to_string(),
            name: format!("Student {}", id),
            gender: "M".to_string(),
            answers: SurveyAnswers {
                wake_time: wake.to_string(),
                bed_time: bed.to_string(),
                smoking: smoking.to_string(),
                sleep_habit: habit.to_string(),
                personality: None,
                major: None,
                notes: None,
            },
            submitted_at: None,
        }
    }

    #[test]
    fn test_empty_group_yields_no_rooms() {
        let matcher = Matcher::with_defaults();
        assert!(matcher.pair_group(&[], Gender::Male).is_empty());
    }

    #[test]
    fn test_singleton_group_yields_single_occupant_room() {
        let matcher = Matcher::with_defaults();
        let group = vec![respondent("S1", "6to8", "10to12", "no", "no")];

        let rooms = matcher.pair_group(&group, Gender::Female);

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_id, "F-Room-1");
        assert!(rooms[0].member_a.is_some());
        assert!(rooms[0].member_b.is_none());
        assert_eq!(rooms[0].score, 0);
    }

    #[test]
    fn test_compatible_pair_with_odd_leftover() {
        // S1/S2 agree on all four required answers (score 85), S3 on none.
        let matcher = Matcher::with_defaults();
        let group = vec![
            respondent("S1", "6to8", "10to12", "no", "no"),
            respondent("S2", "6to8", "10to12", "no", "no"),
            respondent("S3", "after10", "after2", "yes", "yes"),
        ];

        let rooms = matcher.pair_group(&group, Gender::Male);

        assert_eq!(rooms.len(), 2);

        assert_eq!(rooms[0].room_id, "M-Room-1");
        assert_eq!(rooms[0].score, 85);
        assert_eq!(rooms[0].member_a.as_ref().unwrap().student_id, "S1");
        assert_eq!(rooms[0].member_b.as_ref().unwrap().student_id, "S2");

        assert_eq!(rooms[1].room_id, "M-Room-2");
        assert_eq!(rooms[1].score, 0);
        assert_eq!(rooms[1].member_a.as_ref().unwrap().student_id, "S3");
        assert!(rooms[1].member_b.is_none());
    }

    #[test]
    fn test_below_threshold_pairs_become_singles() {
        // Best achievable score is 20 (smoking only), below the threshold.
        let matcher = Matcher::with_defaults();
        let group = vec![
            respondent("S1", "6to8", "10to12", "no", "no"),
            respondent("S2", "after10", "after2", "no", "yes"),
        ];

        let rooms = matcher.pair_group(&group, Gender::Male);

        assert_eq!(rooms.len(), 2);
        assert!(rooms.iter().all(|r| r.member_b.is_none()));
        assert!(rooms.iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_ties_break_to_earliest_position() {
        // S2 and S3 both score 85 against S1; the forward scan with a strict
        // comparison must keep S2.
        let matcher = Matcher::with_defaults();
        let group = vec![
            respondent("S1", "6to8", "10to12", "no", "no"),
            respondent("S2", "6to8", "10to12", "no", "no"),
            respondent("S3", "6to8", "10to12", "no", "no"),
        ];

        let rooms = matcher.pair_group(&group, Gender::Male);

        assert_eq!(rooms[0].member_a.as_ref().unwrap().student_id, "S1");
        assert_eq!(rooms[0].member_b.as_ref().unwrap().student_id, "S2");
        assert_eq!(rooms[1].member_a.as_ref().unwrap().student_id, "S3");
    }

    #[test]
    fn test_greedy_prefers_highest_score_not_first_candidate() {
        // S1 vs S2 scores 50, S1 vs S3 scores 85; S3 must win despite coming later.
        let matcher = Matcher::with_defaults();
        let group = vec![
            respondent("S1", "6to8", "10to12", "no", "no"),
            respondent("S2", "6to8", "10to12", "yes", "yes"),
            respondent("S3", "6to8", "10to12", "no", "no"),
        ];

        let rooms = matcher.pair_group(&group, Gender::Male);

        assert_eq!(rooms[0].member_b.as_ref().unwrap().student_id, "S3");
        assert_eq!(rooms[0].score, 85);
    }

    #[test]
    fn test_cardinality_is_conserved() {
        let matcher = Matcher::with_defaults();
        for size in 0..7 {
            let group: Vec<Respondent> = (0..size)
                .map(|i| {
                    respondent(
                        &format!("S{}", i),
                        if i % 2 == 0 { "6to8" } else { "after10" },
                        "10to12",
                        "no",
                        "no",
                    )
                })
                .collect();

            let rooms = matcher.pair_group(&group, Gender::Male);
            let occupied: usize = rooms.iter().map(Room::occupied).sum();
            assert_eq!(occupied, size, "group size {}", size);
        }
    }

    #[test]
    fn test_solver_is_deterministic() {
        let matcher = Matcher::with_defaults();
        let group: Vec<Respondent> = (0..10)
            .map(|i| {
                respondent(
                    &format!("S{}", i),
                    if i % 3 == 0 { "6to8" } else { "8to10" },
                    if i % 2 == 0 { "10to12" } else { "after2" },
                    if i % 4 == 0 { "yes" } else { "no" },
                    "no",
                )
            })
            .collect();

        let first = matcher.pair_group(&group, Gender::Male);
        let second = matcher.pair_group(&group, Gender::Male);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.room_id, b.room_id);
            assert_eq!(a.score, b.score);
            assert_eq!(
                a.member_a.as_ref().map(|m| &m.student_id),
                b.member_a.as_ref().map(|m| &m.student_id)
            );
            assert_eq!(
                a.member_b.as_ref().map(|m| &m.student_id),
                b.member_b.as_ref().map(|m| &m.student_id)
            );
        }
    }

    #[test]
    fn test_run_partitions_and_pairs_both_groups() {
        let matcher = Matcher::with_defaults();
        let mut responses = vec![
            respondent("M1", "6to8", "10to12", "no", "no"),
            respondent("M2", "6to8", "10to12", "no", "no"),
        ];
        let mut f1 = respondent("F1", "8to10", "after2", "no", "yes");
        f1.gender = "F".to_string();
        let mut f2 = respondent("F2", "8to10", "after2", "no", "yes");
        f2.gender = "F".to_string();
        responses.push(f1);
        responses.push(f2);

        let outcome = matcher.run(&responses).unwrap();

        assert_eq!(outcome.male_rooms.len(), 1);
        assert_eq!(outcome.female_rooms.len(), 1);
        assert_eq!(outcome.male_rooms[0].room_id, "M-Room-1");
        assert_eq!(outcome.female_rooms[0].room_id, "F-Room-1");

        // Gender purity: both members of every full room share the group gender.
        for room in outcome.male_rooms.iter().chain(&outcome.female_rooms) {
            let gender = room.gender().unwrap();
            for slot in 0..2 {
                if let Some(member) = room.member(slot) {
                    assert_eq!(member.gender, gender);
                }
            }
        }
    }

    #[test]
    fn test_run_rejects_invalid_gender() {
        let matcher = Matcher::with_defaults();
        let mut bad = respondent("S1", "6to8", "10to12", "no", "no");
        bad.gender = "robot".to_string();

        assert!(matcher.run(&[bad]).is_err());
    }
}
