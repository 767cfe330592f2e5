// Service exports
pub mod store;

pub use store::{MatchStore, StoreError};
