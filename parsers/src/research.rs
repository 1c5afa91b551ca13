// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// Research carried out with an agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Research {
    /// The agent.
    pub id: i64,

    /// The skill the research is in.
    pub skill_id: i64,

    /// When research started.
    pub timestamp: Timestamp,

    /// Research points gained per day.
    pub per_day: f64,

    /// Points left over from earlier research.
    pub remaining: f64,
}

impl TryFrom<&Element> for Research {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Research, Error> {
        Ok(Research {
            id: get_attr!(row, "agentID", Required),
            skill_id: get_attr!(row, "skillTypeID", Required),
            timestamp: get_attr!(row, "researchStartDate", Required),
            per_day: get_attr!(row, "pointsPerDay", Required),
            remaining: get_attr!(row, "remainderPoints", Required),
        })
    }
}

/// Parse `char/Research`, keyed by agent id.
pub fn parse_research(result: &Element) -> Result<BTreeMap<i64, Research>, Error> {
    let mut research = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let entry = Research::try_from(row)?;
        research.insert(entry.id, entry);
    }
    Ok(research)
}
