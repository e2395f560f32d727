//! Collection decoders: raw event arrays to typed event sequences.
//!
//! All collections share one driver; what differs per collection kind is
//! the decode policy. Structurally load-bearing collections are strict: an
//! element that is not even a JSON object fails the whole response.
//! Presence is lenient, reflecting its low importance and server
//! variability: a bad record is logged and skipped.

use crate::error::DecodeError;
use crate::log::DecodeLog;
use crate::types::{
    AnyAccountDataEvent, AnyEphemeralEvent, AnyStateEvent, AnyStrippedEvent, AnyTimelineEvent,
    AnyToDeviceEvent, Event, PresenceContent,
};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The event collections a sync response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Timeline,
    State,
    StrippedState,
    Ephemeral,
    ToDevice,
    AccountData,
    Presence,
}

/// Fault-isolation policy of one collection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// A structurally invalid element fails the whole response.
    Strict,
    /// A structurally invalid element is logged and skipped.
    Lenient,
}

impl EventKind {
    /// The fault-isolation policy this collection decodes under.
    pub fn policy(self) -> DecodePolicy {
        match self {
            EventKind::Presence => DecodePolicy::Lenient,
            _ => DecodePolicy::Strict,
        }
    }

    fn name(self) -> &'static str {
        match self {
            EventKind::Timeline => "timeline",
            EventKind::State => "state",
            EventKind::StrippedState => "stripped state",
            EventKind::Ephemeral => "ephemeral",
            EventKind::ToDevice => "to-device",
            EventKind::AccountData => "account data",
            EventKind::Presence => "presence",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes one raw event array under the policy of `kind`.
///
/// `dispatch` never fails for the strict kinds (their dispatchers degrade
/// to a raw variant); it can fail for presence, where the failure is
/// logged and the element skipped.
fn decode_events<T>(
    raw: &Value,
    kind: EventKind,
    log: &dyn DecodeLog,
    dispatch: impl Fn(&Value) -> Result<T, serde_json::Error>,
) -> Result<Vec<T>, DecodeError> {
    let Some(items) = raw.as_array() else {
        return match kind.policy() {
            DecodePolicy::Strict => Err(DecodeError::InvalidField {
                field: "events",
                expected: "an array",
            }),
            DecodePolicy::Lenient => {
                log.warn(&format!("ignoring non-array {kind} events field"));
                Ok(Vec::new())
            }
        };
    };

    let mut events = Vec::with_capacity(items.len());
    for item in items {
        if !item.is_object() {
            match kind.policy() {
                DecodePolicy::Strict => return Err(DecodeError::MalformedEvent(kind)),
                DecodePolicy::Lenient => {
                    log.warn(&format!("skipping non-object {kind} event: {item}"));
                    continue;
                }
            }
        }
        match dispatch(item) {
            Ok(event) => events.push(event),
            Err(err) => match kind.policy() {
                DecodePolicy::Strict => return Err(err.into()),
                DecodePolicy::Lenient => {
                    log.warn(&format!("error parsing {kind} event: {err}, {item}"));
                }
            },
        }
    }
    Ok(events)
}

pub(crate) fn decode_timeline_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyTimelineEvent>, DecodeError> {
    decode_events(raw, EventKind::Timeline, log, |item| Ok(AnyTimelineEvent::from_raw(item)))
}

pub(crate) fn decode_state_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyStateEvent>, DecodeError> {
    decode_events(raw, EventKind::State, log, |item| Ok(AnyStateEvent::from_raw(item)))
}

pub(crate) fn decode_stripped_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyStrippedEvent>, DecodeError> {
    decode_events(raw, EventKind::StrippedState, log, |item| Ok(AnyStrippedEvent::from_raw(item)))
}

pub(crate) fn decode_ephemeral_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyEphemeralEvent>, DecodeError> {
    decode_events(raw, EventKind::Ephemeral, log, |item| Ok(AnyEphemeralEvent::from_raw(item)))
}

pub(crate) fn decode_to_device_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyToDeviceEvent>, DecodeError> {
    decode_events(raw, EventKind::ToDevice, log, |item| Ok(AnyToDeviceEvent::from_raw(item)))
}

pub(crate) fn decode_account_data_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<AnyAccountDataEvent>, DecodeError> {
    decode_events(raw, EventKind::AccountData, log, |item| Ok(AnyAccountDataEvent::from_raw(item)))
}

pub(crate) fn decode_presence_events(
    raw: &Value,
    log: &dyn DecodeLog,
) -> Result<Vec<Event<PresenceContent>>, DecodeError> {
    decode_events(raw, EventKind::Presence, log, |item| Event::<PresenceContent>::deserialize(item))
}
