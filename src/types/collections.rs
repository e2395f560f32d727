//! Per-collection event variant types.
//!
//! Every collection of a sync response mixes many event shapes in one flat
//! array, distinguished by the `type` tag. Each collection gets a closed
//! variant enum with an explicit `Raw` arm carrying the untouched payload:
//! unrecognized tags and shape mismatches inside a known tag degrade to
//! `Raw` instead of failing, so protocol evolution never breaks decoding.

use crate::types::{
    DirectContent, EncryptedContent, Event, MembershipEventContent, RoomAvatarContent,
    RoomNameContent, StateEvent, StrippedEvent, TypingContent,
};
use serde::Serialize;
use serde_json::Value;

/// One event in a joined or left room's timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyTimelineEvent {
    RoomName(StateEvent<RoomNameContent>),
    RoomAvatar(StateEvent<RoomAvatarContent>),
    RoomMember(StateEvent<MembershipEventContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// One event in a room's `state` section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyStateEvent {
    RoomName(StateEvent<RoomNameContent>),
    RoomAvatar(StateEvent<RoomAvatarContent>),
    RoomMember(StateEvent<MembershipEventContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// One stripped state event of an invite or knock preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyStrippedEvent {
    RoomName(StrippedEvent<RoomNameContent>),
    RoomAvatar(StrippedEvent<RoomAvatarContent>),
    RoomMember(StrippedEvent<MembershipEventContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// One ephemeral (non-persisted) room event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyEphemeralEvent {
    Typing(Event<TypingContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// One to-device message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyToDeviceEvent {
    RoomEncrypted(Event<EncryptedContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// One account data event, global or room-scoped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyAccountDataEvent {
    Direct(Event<DirectContent>),
    /// Any other event, payload preserved untouched
    Raw(Value),
}

/// Derives a display name from a stripped-state preview.
///
/// A canonical `m.room.name` event wins (the last one, if several); the
/// first membership display name seen is the fallback.
pub(crate) fn preview_name(events: &[AnyStrippedEvent]) -> String {
    let mut room_name = String::new();
    let mut member_name = String::new();

    for event in events {
        match event {
            AnyStrippedEvent::RoomName(name) => room_name = name.content.name.clone(),
            AnyStrippedEvent::RoomMember(member) if member_name.is_empty() => {
                if let Some(display_name) = &member.content.display_name {
                    member_name = display_name.clone();
                }
            }
            _ => {}
        }
    }

    if room_name.is_empty() {
        member_name
    } else {
        room_name
    }
}

/// Derives an avatar URL from a stripped-state preview, same precedence as
/// [`preview_name`].
pub(crate) fn preview_avatar(events: &[AnyStrippedEvent]) -> String {
    let mut room_avatar = String::new();
    let mut member_avatar = String::new();

    for event in events {
        match event {
            AnyStrippedEvent::RoomAvatar(avatar) => room_avatar = avatar.content.url.clone(),
            AnyStrippedEvent::RoomMember(member) if member_avatar.is_empty() => {
                // Pick the first avatar.
                if let Some(avatar_url) = &member.content.avatar_url {
                    member_avatar = avatar_url.clone();
                }
            }
            _ => {}
        }
    }

    if room_avatar.is_empty() {
        member_avatar
    } else {
        room_avatar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MembershipEventContent, RoomNameContent, StrippedEvent};

    fn name_event(name: &str) -> AnyStrippedEvent {
        AnyStrippedEvent::RoomName(StrippedEvent {
            content: RoomNameContent::new(name.to_owned()),
            sender: "@alice:example.org".to_owned(),
            state_key: String::new(),
            event_type: "m.room.name".to_owned(),
        })
    }

    fn member_event(display_name: &str) -> AnyStrippedEvent {
        let mut content = MembershipEventContent::new("invite".to_owned());
        content.display_name = Some(display_name.to_owned());
        AnyStrippedEvent::RoomMember(StrippedEvent {
            content,
            sender: "@alice:example.org".to_owned(),
            state_key: "@me:example.org".to_owned(),
            event_type: "m.room.member".to_owned(),
        })
    }

    #[test]
    fn test_last_canonical_name_wins() {
        let events = [name_event("Old"), member_event("Bob"), name_event("New")];
        assert_eq!(preview_name(&events), "New");
    }

    #[test]
    fn test_member_fallback_is_first_seen() {
        let events = [member_event("Bob"), member_event("Carol")];
        assert_eq!(preview_name(&events), "Bob");
    }

    #[test]
    fn test_canonical_name_overrides_earlier_fallback() {
        let events = [member_event("Bob"), name_event("Team")];
        assert_eq!(preview_name(&events), "Team");
    }

    #[test]
    fn test_empty_preview_yields_empty_name_and_avatar() {
        assert_eq!(preview_name(&[]), "");
        assert_eq!(preview_avatar(&[]), "");
    }
}
