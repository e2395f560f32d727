//! Event tag dispatch.
//!
//! Each collection's variant enum gets a `from_raw` constructor that
//! inspects the `type` discriminator (and, for state shapes, the presence
//! of `state_key`) and attempts the typed decode. Unknown tags and shape
//! mismatches inside a known tag degrade to the `Raw` arm with the payload
//! untouched; dispatch never fails for a JSON object input.

use crate::types::{
    AnyAccountDataEvent, AnyEphemeralEvent, AnyStateEvent, AnyStrippedEvent, AnyTimelineEvent,
    AnyToDeviceEvent,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `m.room.name` state event type tag.
pub const M_ROOM_NAME: &str = "m.room.name";
/// `m.room.avatar` state event type tag.
pub const M_ROOM_AVATAR: &str = "m.room.avatar";
/// `m.room.member` state event type tag.
pub const M_ROOM_MEMBER: &str = "m.room.member";
/// `m.typing` ephemeral event type tag.
pub const M_TYPING: &str = "m.typing";
/// `m.room.encrypted` to-device event type tag.
pub const M_ROOM_ENCRYPTED: &str = "m.room.encrypted";
/// `m.direct` account data event type tag.
pub const M_DIRECT: &str = "m.direct";
/// `m.presence` event type tag.
pub const M_PRESENCE: &str = "m.presence";

fn typed<T: DeserializeOwned>(raw: &Value) -> Option<T> {
    T::deserialize(raw).ok()
}

impl AnyTimelineEvent {
    /// Dispatches one raw timeline record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        let is_state = raw.get("state_key").is_some();
        match raw.get("type").and_then(Value::as_str) {
            Some(M_ROOM_NAME) if is_state => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomName)
            }
            Some(M_ROOM_AVATAR) if is_state => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomAvatar)
            }
            Some(M_ROOM_MEMBER) if is_state => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomMember)
            }
            _ => Self::Raw(raw.clone()),
        }
    }
}

impl AnyStateEvent {
    /// Dispatches one raw state record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.get("type").and_then(Value::as_str) {
            Some(M_ROOM_NAME) => typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomName),
            Some(M_ROOM_AVATAR) => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomAvatar)
            }
            Some(M_ROOM_MEMBER) => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomMember)
            }
            _ => Self::Raw(raw.clone()),
        }
    }
}

impl AnyStrippedEvent {
    /// Dispatches one raw stripped-state record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.get("type").and_then(Value::as_str) {
            Some(M_ROOM_NAME) => typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomName),
            Some(M_ROOM_AVATAR) => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomAvatar)
            }
            Some(M_ROOM_MEMBER) => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomMember)
            }
            _ => Self::Raw(raw.clone()),
        }
    }
}

impl AnyEphemeralEvent {
    /// Dispatches one raw ephemeral record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.get("type").and_then(Value::as_str) {
            Some(M_TYPING) => typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::Typing),
            _ => Self::Raw(raw.clone()),
        }
    }
}

impl AnyToDeviceEvent {
    /// Dispatches one raw to-device record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.get("type").and_then(Value::as_str) {
            Some(M_ROOM_ENCRYPTED) => {
                typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::RoomEncrypted)
            }
            _ => Self::Raw(raw.clone()),
        }
    }
}

impl AnyAccountDataEvent {
    /// Dispatches one raw account data record on its `type` tag.
    pub fn from_raw(raw: &Value) -> Self {
        match raw.get("type").and_then(Value::as_str) {
            Some(M_DIRECT) => typed(raw).map_or_else(|| Self::Raw(raw.clone()), Self::Direct),
            _ => Self::Raw(raw.clone()),
        }
    }
}
