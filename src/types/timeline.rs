use crate::types::AnyTimelineEvent;
use serde::Serialize;

/// Timeline chunk of a joined or left room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Timeline {
    /// Timeline events, in document order
    pub events: Vec<AnyTimelineEvent>,

    /// Pagination token for requesting earlier events, empty if absent
    pub prev_batch: String,

    /// True when the returned events are only the tail of a larger gap
    pub limited: bool,
}
