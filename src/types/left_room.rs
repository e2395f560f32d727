use crate::types::{State, Timeline};
use serde::Serialize;

/// Sync section for a room the user has left.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LeftRoom {
    /// State at the point of leaving
    pub state: State,

    /// Final timeline events
    pub timeline: Timeline,
}
