// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calendar events and who is going to them.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

generate_attribute!(
    /// An answer to a calendar invitation.
    Response, "calendar response", {
        /// Not answered yet.
        Undecided => "Undecided",

        /// Will attend.
        Accepted => "Accepted",

        /// Won’t attend.
        Declined => "Declined",

        /// Might attend.
        Tentative => "Tentative",
    }
);

/// Who created an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOwner {
    /// A character, corporation or alliance.
    pub id: i64,

    /// Its name, unset for events created by the game itself.
    pub name: Option<String>,
}

/// An upcoming calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// The unique id of this event.
    pub id: i64,

    /// Who created it.
    pub owner: EventOwner,

    /// When it starts.
    pub start_ts: Timestamp,

    /// Its title.
    pub title: String,

    /// How long it lasts, in minutes.
    pub duration: i64,

    /// Whether it was flagged as important.
    pub important: bool,

    /// Free text describing it.
    pub description: String,

    /// The character’s answer.
    pub response: Response,
}

impl TryFrom<&Element> for CalendarEvent {
    type Error = Error;

    fn try_from(row: &Element) -> Result<CalendarEvent, Error> {
        Ok(CalendarEvent {
            id: get_attr!(row, "eventID", Required),
            owner: EventOwner {
                id: get_attr!(row, "ownerID", Required),
                name: get_attr!(row, "ownerName", OptionEmpty),
            },
            start_ts: get_attr!(row, "eventDate", Required),
            title: get_attr!(row, "eventTitle", Required),
            duration: get_attr!(row, "duration", Required),
            important: get_attr!(row, "importance", Bool),
            description: get_attr!(row, "eventText", Required),
            response: get_attr!(row, "response", Required),
        })
    }
}

/// A character invited to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    /// The character.
    pub id: i64,

    /// Its name.
    pub name: String,

    /// Its answer.
    pub response: Response,
}

impl TryFrom<&Element> for Attendee {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Attendee, Error> {
        Ok(Attendee {
            id: get_attr!(row, "characterID", Required),
            name: get_attr!(row, "characterName", Required),
            response: get_attr!(row, "response", Required),
        })
    }
}

/// Parse `char/UpcomingCalendarEvents`, keyed by event id.
pub fn parse_calendar_events(result: &Element) -> Result<BTreeMap<i64, CalendarEvent>, Error> {
    let mut events = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let event = CalendarEvent::try_from(row)?;
        events.insert(event.id, event);
    }
    Ok(events)
}

/// Parse `char/CalendarEventAttendees`, keyed by event id then by
/// character id.
///
/// Every id of `requested` is present in the result, with no attendee if
/// the server listed none.
pub fn parse_calendar_attendees(
    result: &Element,
    requested: &[i64],
) -> Result<BTreeMap<i64, BTreeMap<i64, Attendee>>, Error> {
    let mut events: BTreeMap<i64, BTreeMap<i64, Attendee>> = requested
        .iter()
        .map(|&event_id| (event_id, BTreeMap::new()))
        .collect();
    for row in rows(rowset(result)?) {
        let event_id: i64 = get_attr!(row, "eventID", Required);
        let attendee = Attendee::try_from(row)?;
        #[cfg(feature = "log")]
        if !requested.contains(&event_id) {
            log::debug!("Attendee {} listed for unrequested event {}.", attendee.id, event_id);
        }
        events.entry(event_id).or_default().insert(attendee.id, attendee);
    }
    Ok(events)
}
