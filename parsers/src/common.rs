// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::dom::Element;
use crate::error::Error;

/// An entity referenced by id, along with the name the server resolved for
/// it: a corporation, a station, an item type…
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Named {
    /// The numeric identifier.
    pub id: i64,

    /// The display name.
    pub name: String,
}

impl Named {
    /// Read a pair of attributes, such as `corporationID` and
    /// `corporationName`, off a single row.
    pub(crate) fn from_row(row: &Element, id: &'static str, name: &'static str) -> Result<Named, Error> {
        Ok(Named {
            id: get_attr!(row, id, Required),
            name: get_attr!(row, name, Required),
        })
    }
}
