//! Room section decoders and the membership partition maps.
//!
//! Sections assemble field by field: a sub-field present in the raw
//! document is decoded, an absent one keeps the section's default. The
//! partition builder walks the four membership categories in document
//! order and drops any room identifier over the protocol's 255-byte limit
//! instead of failing the response.

use crate::decode::events::{
    decode_ephemeral_events, decode_state_events, decode_stripped_events, decode_timeline_events,
};
use crate::error::DecodeError;
use crate::log::DecodeLog;
use crate::types::{
    AccountData, Ephemeral, InvitedRoom, JoinedRoom, KnockedRoom, LeftRoom, Rooms, State,
    Timeline, UnreadNotifications,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Longest room or user identifier the protocol admits, in bytes.
pub(crate) const MAX_ID_LEN: usize = 255;

impl Timeline {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        if !raw.is_object() {
            return Err(DecodeError::InvalidField {
                field: "timeline",
                expected: "an object",
            });
        }
        let mut timeline = Timeline::default();
        if let Some(prev_batch) = raw.get("prev_batch") {
            timeline.prev_batch = prev_batch
                .as_str()
                .ok_or(DecodeError::InvalidField {
                    field: "prev_batch",
                    expected: "a string",
                })?
                .to_owned();
        }
        if let Some(limited) = raw.get("limited") {
            timeline.limited = limited.as_bool().ok_or(DecodeError::InvalidField {
                field: "limited",
                expected: "a boolean",
            })?;
        }
        if let Some(events) = raw.get("events") {
            timeline.events = decode_timeline_events(events, log)?;
        }
        Ok(timeline)
    }
}

impl State {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut state = State::default();
        if let Some(events) = raw.get("events") {
            state.events = decode_state_events(events, log)?;
        }
        Ok(state)
    }
}

impl Ephemeral {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut ephemeral = Ephemeral::default();
        if let Some(events) = raw.get("events") {
            ephemeral.events = decode_ephemeral_events(events, log)?;
        }
        Ok(ephemeral)
    }
}

impl JoinedRoom {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut room = JoinedRoom::default();
        if let Some(state) = raw.get("state") {
            room.state = State::decode(state, log)?;
        }
        if let Some(timeline) = raw.get("timeline") {
            room.timeline = Timeline::decode(timeline, log)?;
        }
        if let Some(notifications) = raw.get("unread_notifications") {
            room.unread_notifications = UnreadNotifications::deserialize(notifications)?;
        }
        if let Some(ephemeral) = raw.get("ephemeral") {
            room.ephemeral = Ephemeral::decode(ephemeral, log)?;
        }
        if let Some(account_data) = raw.get("account_data") {
            if account_data.get("events").is_some() {
                room.account_data = AccountData::decode(account_data, log)?;
            }
        }
        Ok(room)
    }
}

impl LeftRoom {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut room = LeftRoom::default();
        if let Some(state) = raw.get("state") {
            room.state = State::decode(state, log)?;
        }
        if let Some(timeline) = raw.get("timeline") {
            room.timeline = Timeline::decode(timeline, log)?;
        }
        Ok(room)
    }
}

impl InvitedRoom {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut room = InvitedRoom::default();
        if let Some(events) = raw.get("invite_state").and_then(|state| state.get("events")) {
            room.invite_state = decode_stripped_events(events, log)?;
        }
        Ok(room)
    }
}

impl KnockedRoom {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut room = KnockedRoom::default();
        if let Some(events) = raw.get("knock_state").and_then(|state| state.get("events")) {
            room.knock_state = decode_stripped_events(events, log)?;
        }
        Ok(room)
    }
}

/// Builds one membership category map in document order, skipping room
/// identifiers over [`MAX_ID_LEN`] bytes with a logged warning.
fn decode_partition<R>(
    raw: &Value,
    category: &'static str,
    decode_room: impl Fn(&Value, &dyn DecodeLog) -> Result<R, DecodeError>,
    log: &dyn DecodeLog,
) -> Result<IndexMap<String, R>, DecodeError> {
    let entries = raw.as_object().ok_or(DecodeError::InvalidField {
        field: category,
        expected: "an object",
    })?;

    let mut rooms = IndexMap::with_capacity(entries.len());
    for (room_id, section) in entries {
        if room_id.len() > MAX_ID_LEN {
            log.warn("skipping room id which exceeds 255 bytes");
            continue;
        }
        rooms.insert(room_id.clone(), decode_room(section, log)?);
    }
    Ok(rooms)
}

impl Rooms {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        if !raw.is_object() {
            return Err(DecodeError::InvalidField {
                field: "rooms",
                expected: "an object",
            });
        }
        let mut rooms = Rooms::default();
        if let Some(entries) = raw.get("join") {
            rooms.join = decode_partition(entries, "rooms.join", JoinedRoom::decode, log)?;
        }
        if let Some(entries) = raw.get("invite") {
            rooms.invite = decode_partition(entries, "rooms.invite", InvitedRoom::decode, log)?;
        }
        if let Some(entries) = raw.get("leave") {
            rooms.leave = decode_partition(entries, "rooms.leave", LeftRoom::decode, log)?;
        }
        if let Some(entries) = raw.get("knock") {
            rooms.knock = decode_partition(entries, "rooms.knock", KnockedRoom::decode, log)?;
        }
        Ok(rooms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct CaptureLog(Mutex<Vec<String>>);

    impl DecodeLog for CaptureLog {
        fn warn(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_owned());
        }
    }

    #[test]
    fn test_timeline_defaults() {
        let log = CaptureLog::default();
        let timeline = Timeline::decode(&json!({}), &log).unwrap();

        assert!(timeline.events.is_empty());
        assert_eq!(timeline.prev_batch, "");
        assert!(!timeline.limited);
    }

    #[test]
    fn test_timeline_rejects_wrong_typed_prev_batch_and_limited() {
        let log = CaptureLog::default();

        let result = Timeline::decode(&json!({"events": [], "prev_batch": 42}), &log);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidField { field: "prev_batch", .. })
        ));

        let result = Timeline::decode(&json!({"events": [], "limited": "yes"}), &log);
        assert!(matches!(
            result,
            Err(DecodeError::InvalidField { field: "limited", .. })
        ));

        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_timeline_rejects_non_array_events() {
        let log = CaptureLog::default();
        assert!(Timeline::decode(&json!({"events": {"oops": true}}), &log).is_err());
    }

    #[test]
    fn test_oversized_room_id_is_skipped_not_fatal() {
        let log = CaptureLog::default();
        let long_id = format!("!{}:example.org", "a".repeat(300));
        let raw = json!({
            "join": {
                (long_id): {"timeline": {"events": []}},
                "!ok:example.org": {"timeline": {"events": []}}
            }
        });

        let rooms = Rooms::decode(&raw, &log).unwrap();
        assert_eq!(rooms.join.len(), 1);
        assert!(rooms.join.contains_key("!ok:example.org"));
        assert_eq!(log.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_partition_preserves_document_order() {
        let log = CaptureLog::default();
        let raw = json!({
            "join": {
                "!zebra:example.org": {},
                "!apple:example.org": {},
                "!mango:example.org": {}
            }
        });

        let rooms = Rooms::decode(&raw, &log).unwrap();
        let ids: Vec<&str> = rooms.join.keys().map(String::as_str).collect();
        assert_eq!(ids, ["!zebra:example.org", "!apple:example.org", "!mango:example.org"]);
    }

    #[test]
    fn test_unread_notifications_decode() {
        let log = CaptureLog::default();
        let room = JoinedRoom::decode(
            &json!({"unread_notifications": {"highlight_count": 2, "notification_count": 10}}),
            &log,
        )
        .unwrap();

        assert_eq!(room.unread_notifications.highlight_count, Some(2));
        assert_eq!(room.unread_notifications.notification_count, Some(10));
    }

    #[test]
    fn test_room_account_data_requires_events_key() {
        let log = CaptureLog::default();
        let room = JoinedRoom::decode(&json!({"account_data": {"not_events": []}}), &log).unwrap();
        assert!(room.account_data.events.is_empty());
    }

    #[test]
    fn test_knocked_room_preview_decodes() {
        let log = CaptureLog::default();
        let raw = json!({
            "knock_state": {
                "events": [{
                    "type": "m.room.name",
                    "sender": "@alice:example.org",
                    "state_key": "",
                    "content": {"name": "Sekrit"}
                }]
            }
        });

        let room = KnockedRoom::decode(&raw, &log).unwrap();
        assert_eq!(room.name(), "Sekrit");
    }
}
