// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::dom::Element;
use crate::error::Error;
use crate::util::rows;

/// A medal awarded to the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medal {
    /// The id of the medal.
    pub id: i64,

    /// Why it was awarded.
    pub reason: String,

    /// Whether it shows on the character’s public profile.
    pub public: bool,

    /// Who awarded it.
    pub issuer_id: i64,

    /// The corporation which created the medal.
    pub corp_id: i64,

    /// The title of the medal.
    pub title: String,

    /// Its description.
    pub description: String,
}

impl TryFrom<&Element> for Medal {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Medal, Error> {
        Ok(Medal {
            id: get_attr!(row, "medalID", Required),
            reason: get_attr!(row, "reason", Required),
            public: row.attr("status") == Some("public"),
            issuer_id: get_attr!(row, "issuerID", Required),
            corp_id: get_attr!(row, "corporationID", Required),
            title: get_attr!(row, "title", Required),
            description: get_attr!(row, "description", Required),
        })
    }
}

/// Medals of the character, keyed by medal id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Medals {
    /// Medals from the current corporation.
    pub current: BTreeMap<i64, Medal>,

    /// Medals from former corporations.
    pub other: BTreeMap<i64, Medal>,
}

impl TryFrom<&Element> for Medals {
    type Error = Error;

    fn try_from(result: &Element) -> Result<Medals, Error> {
        let mut medals = Medals::default();
        for rowset in result.children_named("rowset") {
            let target = match rowset.attr("name") {
                Some("currentCorporation") => &mut medals.current,
                Some("otherCorporations") => &mut medals.other,
                Some(name) => return Err(Error::UnexpectedRowset(name.to_owned())),
                None => return Err(Error::MissingAttribute("name")),
            };
            for row in rows(rowset) {
                let medal = Medal::try_from(row)?;
                target.insert(medal.id, medal);
            }
        }
        Ok(medals)
    }
}
