// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

/// The format every date of the API is served in, always in UTC.
const API_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time as reported by the API.
///
/// The server sends `2008-08-17 06:43:00`, implicitly UTC; RFC 3339 is
/// accepted as well so values can round-trip through other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Seconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Build a timestamp from seconds since the Unix epoch.
    pub fn from_timestamp(secs: i64) -> Option<Timestamp> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Timestamp)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Timestamp, chrono::ParseError> {
        match NaiveDateTime::parse_from_str(s, API_FORMAT) {
            Ok(naive) => Ok(Timestamp(Utc.from_utc_datetime(&naive))),
            Err(_) => DateTime::parse_from_rfc3339(s).map(|date| Timestamp(date.with_timezone(&Utc))),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0.format(API_FORMAT))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(date: DateTime<Utc>) -> Timestamp {
        Timestamp(date)
    }
}
