// Core algorithm exports
pub mod assembler;
pub mod editor;
pub mod partition;
pub mod scoring;
pub mod solver;

pub use assembler::assemble;
pub use editor::{move_member, MoveOutcome, MoveSpec};
pub use partition::{partition_by_gender, GenderGroups, MatchingError};
pub use scoring::calculate_pair_score;
pub use solver::{Matcher, PairingOutcome, DEFAULT_THRESHOLD};
