// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// Where an item sits in space.
///
/// Coordinates are only known for items anchored or floating in space.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The item.
    pub id: i64,

    /// The name the character gave the item, if any.
    pub name: Option<String>,

    /// X coordinate, in metres.
    pub x: Option<f64>,

    /// Y coordinate, in metres.
    pub y: Option<f64>,

    /// Z coordinate, in metres.
    pub z: Option<f64>,
}

impl TryFrom<&Element> for Location {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Location, Error> {
        Ok(Location {
            id: get_attr!(row, "itemID", Required),
            name: get_attr!(row, "itemName", OptionEmpty),
            x: get_attr!(row, "x", OptionEmpty),
            y: get_attr!(row, "y", OptionEmpty),
            z: get_attr!(row, "z", OptionEmpty),
        })
    }
}

/// Parse `char/Locations`, keyed by item id.
pub fn parse_locations(result: &Element) -> Result<BTreeMap<i64, Location>, Error> {
    let mut locations = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let location = Location::try_from(row)?;
        locations.insert(location.id, location);
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations() {
        let elem: Element = "<result><rowset name='locations' key='itemID' columns='itemID,itemName,x,y,z'>
            <row itemID='1009661446486' itemName='Superawesome test Impairor' x='0' y='0' z='0'/>
            <row itemID='1009661446487' itemName='' x='-1.5e12' y='' z='3'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let locations = parse_locations(&elem).unwrap();
        assert_eq!(
            locations[&1009661446486],
            Location {
                id: 1009661446486,
                name: Some(String::from("Superawesome test Impairor")),
                x: Some(0.0),
                y: Some(0.0),
                z: Some(0.0),
            }
        );
        let second = &locations[&1009661446487];
        assert_eq!(second.name, None);
        assert_eq!(second.x, Some(-1.5e12));
        assert_eq!(second.y, None);
    }
}
