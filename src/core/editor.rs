use crate::models::{Room, RoomMember};

/// One requested member move, addressed by room id and slot index (0 or 1).
#[derive(Debug, Clone)]
pub struct MoveSpec {
    pub source_room_id: String,
    pub source_slot: usize,
    pub dest_room_id: String,
    pub dest_slot: usize,
}

/// What a move request did to the room set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Same room, slots reordered.
    Reordered,
    /// Member relocated into an empty slot, source slot left empty.
    Moved,
    /// Members of the two slots exchanged.
    Swapped,
    /// Invalid gesture; the rooms were left untouched.
    Rejected,
}

impl MoveOutcome {
    pub fn applied(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOutcome::Reordered => "reordered",
            MoveOutcome::Moved => "moved",
            MoveOutcome::Swapped => "swapped",
            MoveOutcome::Rejected => "rejected",
        }
    }
}

/// Apply one manual member move to a room set.
///
/// Rules, in order:
/// - slot indices beyond 1, unknown room ids, an empty source slot, or rooms
///   with differing gender prefixes reject the move (rooms untouched, no error
///   propagates -- a rejected move is a refused user gesture, not a fault);
/// - within one room the two slots are positionally swapped;
/// - across rooms an occupied destination slot swaps members, an empty one
///   relocates the member and leaves the source slot empty.
///
/// Room scores are never touched: they keep the compatibility computed at
/// solve time (fixed-score policy). Recomputation, if ever wanted, belongs in
/// an explicit action, not here.
pub fn move_member(rooms: &mut [Room], spec: &MoveSpec) -> MoveOutcome {
    if spec.source_slot > 1 || spec.dest_slot > 1 {
        return MoveOutcome::Rejected;
    }

    let source_index = match rooms.iter().position(|r| r.room_id == spec.source_room_id) {
        Some(i) => i,
        None => return MoveOutcome::Rejected,
    };
    let dest_index = match rooms.iter().position(|r| r.room_id == spec.dest_room_id) {
        Some(i) => i,
        None => return MoveOutcome::Rejected,
    };

    match (rooms[source_index].gender(), rooms[dest_index].gender()) {
        (Some(source_gender), Some(dest_gender)) if source_gender == dest_gender => {}
        _ => return MoveOutcome::Rejected,
    }

    if rooms[source_index].member(spec.source_slot).is_none() {
        return MoveOutcome::Rejected;
    }

    if source_index == dest_index {
        if spec.source_slot != spec.dest_slot {
            let room = &mut rooms[source_index];
            std::mem::swap(&mut room.member_a, &mut room.member_b);
        }
        return MoveOutcome::Reordered;
    }

    let (source, dest) = two_rooms_mut(rooms, source_index, dest_index);
    let moving = match slot_mut(source, spec.source_slot).take() {
        Some(member) => member,
        None => return MoveOutcome::Rejected,
    };

    let dest_slot = slot_mut(dest, spec.dest_slot);
    match dest_slot.replace(moving) {
        Some(displaced) => {
            *slot_mut(source, spec.source_slot) = Some(displaced);
            MoveOutcome::Swapped
        }
        None => MoveOutcome::Moved,
    }
}

fn slot_mut(room: &mut Room, slot: usize) -> &mut Option<RoomMember> {
    if slot == 0 {
        &mut room.member_a
    } else {
        &mut room.member_b
    }
}

fn two_rooms_mut(rooms: &mut [Room], a: usize, b: usize) -> (&mut Room, &mut Room) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = rooms.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = rooms.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
