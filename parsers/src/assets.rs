// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Normalisation of `char/AssetList`.
//!
//! The server nests items inside their containers and only tells the
//! location of the outermost ones; the location of everything inside is
//! implied.  This module turns that into a tree where every item carries
//! its own resolved location, grouped by top-level location.

use std::collections::BTreeMap;

use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// One item, possibly a container of other items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// The unique id of this item.
    pub id: i64,

    /// The type of this item.
    pub item_type_id: i64,

    /// How many items are in this stack.
    pub quantity: i64,

    /// The location of this item, inherited from the closest container
    /// which has one when the server didn’t repeat it.
    pub location_id: i64,

    /// Where inside its location the item is, such as a hangar or a slot.
    pub location_flag: i64,

    /// Whether the item is packaged, false only for assembled items.
    pub packaged: bool,

    /// The items inside this one, present whenever the server sent a nested
    /// rowset for it, even an empty one.
    pub contents: Option<Vec<Asset>>,
}

/// All items directly at a given location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLocation {
    /// The id of this location, usually a station or a solar system.
    pub location_id: i64,

    /// The top-level items at this location, in document order.
    pub contents: Vec<Asset>,
}

impl Asset {
    /// Normalise a single row, with `parent_location` being the resolved
    /// location of the enclosing container, if any.
    fn from_row(row: &Element, parent_location: Option<i64>) -> Result<Asset, Error> {
        let own_location: Option<i64> = get_attr!(row, "locationID", OptionEmpty);
        let location_id = match own_location.or(parent_location) {
            Some(location_id) => location_id,
            None => return Err(Error::MissingAttribute("locationID")),
        };
        let contents = match row.get_child("rowset") {
            Some(rowset) => Some(normalize_items(rowset, location_id)?),
            None => None,
        };
        Ok(Asset {
            id: get_attr!(row, "itemID", Required),
            item_type_id: get_attr!(row, "typeID", Required),
            quantity: get_attr!(row, "quantity", Required),
            location_id,
            location_flag: get_attr!(row, "flag", Required),
            packaged: !get_attr!(row, "singleton", Bool),
            contents,
        })
    }
}

/// Normalise every row of a nested rowset, whose items all live inside a
/// container at `parent_location`.
fn normalize_items(rowset: &Element, parent_location: i64) -> Result<Vec<Asset>, Error> {
    let mut items = Vec::new();
    for row in rows(rowset) {
        items.push(Asset::from_row(row, Some(parent_location))?);
    }
    Ok(items)
}

/// Normalise a whole asset list into its top-level locations.
///
/// Top-level rows must carry their own `locationID`; the groups keep the
/// items in document order.
pub fn parse_assets(result: &Element) -> Result<BTreeMap<i64, AssetLocation>, Error> {
    let mut locations: BTreeMap<i64, AssetLocation> = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let asset = Asset::from_row(row, None)?;
        let location_id = asset.location_id;
        locations
            .entry(location_id)
            .or_insert_with(|| AssetLocation {
                location_id,
                contents: Vec::new(),
            })
            .contents
            .push(asset);
    }
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Result<BTreeMap<i64, AssetLocation>, Error> {
        let elem: Element = xml.parse().unwrap();
        parse_assets(&elem)
    }

    #[test]
    fn test_simple() {
        let assets = parse(
            "<result>
                <rowset name='assets' key='itemID' columns='itemID,locationID,typeID,quantity,flag,singleton'>
                    <row itemID='100' locationID='60003760' typeID='34' quantity='5' flag='0' singleton='0'>
                        <rowset name='contents' key='itemID' columns='itemID,typeID,quantity,flag,singleton'>
                            <row itemID='101' typeID='21' quantity='1' flag='0' singleton='1'/>
                        </rowset>
                    </row>
                </rowset>
            </result>",
        )
        .unwrap();

        let mut expected = BTreeMap::new();
        expected.insert(
            60003760,
            AssetLocation {
                location_id: 60003760,
                contents: vec![Asset {
                    id: 100,
                    item_type_id: 34,
                    quantity: 5,
                    location_id: 60003760,
                    location_flag: 0,
                    packaged: true,
                    contents: Some(vec![Asset {
                        id: 101,
                        item_type_id: 21,
                        quantity: 1,
                        location_id: 60003760,
                        location_flag: 0,
                        packaged: false,
                        contents: None,
                    }]),
                }],
            },
        );
        assert_eq!(assets, expected);
    }

    fn check_inherited(items: &[Asset], location_id: i64, depth: usize) -> usize {
        let mut deepest = depth;
        for item in items {
            assert_eq!(item.location_id, location_id);
            if let Some(ref contents) = item.contents {
                deepest = deepest.max(check_inherited(contents, location_id, depth + 1));
            }
        }
        deepest
    }

    #[test]
    fn test_deep_inheritance() {
        let assets = parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='30000142' typeID='1' quantity='1' flag='4' singleton='1'>
                    <rowset name='contents'>
                        <row itemID='2' typeID='2' quantity='1' flag='5' singleton='1'>
                            <rowset name='contents'>
                                <row itemID='3' typeID='3' quantity='1' flag='6' singleton='1'>
                                    <rowset name='contents'>
                                        <row itemID='4' typeID='4' quantity='7' flag='7' singleton='0'/>
                                        <row itemID='5' typeID='4' quantity='8' flag='7' singleton='0'/>
                                    </rowset>
                                </row>
                            </rowset>
                        </row>
                    </rowset>
                </row>
            </rowset></result>",
        )
        .unwrap();
        assert_eq!(assets.len(), 1);
        let location = &assets[&30000142];
        assert_eq!(check_inherited(&location.contents, 30000142, 1), 4);
    }

    #[test]
    fn test_own_location_wins() {
        let assets = parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='30000142' typeID='1' quantity='1' flag='4' singleton='1'>
                    <rowset name='contents'>
                        <row itemID='2' locationID='60000001' typeID='2' quantity='1' flag='5' singleton='1'>
                            <rowset name='contents'>
                                <row itemID='3' typeID='3' quantity='1' flag='6' singleton='1'/>
                            </rowset>
                        </row>
                        <row itemID='4' typeID='2' quantity='1' flag='5' singleton='1'/>
                    </rowset>
                </row>
            </rowset></result>",
        )
        .unwrap();
        let top = &assets[&30000142].contents[0];
        assert_eq!(top.location_id, 30000142);
        let contents = top.contents.as_ref().unwrap();
        assert_eq!(contents[0].location_id, 60000001);
        assert_eq!(contents[0].contents.as_ref().unwrap()[0].location_id, 60000001);
        assert_eq!(contents[1].location_id, 30000142);
    }

    #[test]
    fn test_grouping() {
        let assets = parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='10' typeID='1' quantity='1' flag='4' singleton='0'/>
                <row itemID='2' locationID='20' typeID='1' quantity='1' flag='4' singleton='0'>
                    <rowset name='contents'>
                        <row itemID='3' typeID='1' quantity='1' flag='4' singleton='0'/>
                    </rowset>
                </row>
                <row itemID='4' locationID='10' typeID='1' quantity='1' flag='4' singleton='0'/>
                <row itemID='5' locationID='0' typeID='1' quantity='1' flag='4' singleton='0'/>
            </rowset></result>",
        )
        .unwrap();
        assert_eq!(assets.keys().copied().collect::<Vec<_>>(), vec![0, 10, 20]);
        let ids: Vec<i64> = assets[&10].contents.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(assets[&20].contents.len(), 1);
    }

    #[test]
    fn test_empty() {
        let assets = parse("<result><rowset name='assets'/></result>").unwrap();
        assert!(assets.is_empty());

        let assets = parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='10' typeID='1' quantity='1' flag='4' singleton='1'>
                    <rowset name='contents'/>
                </row>
            </rowset></result>",
        )
        .unwrap();
        assert_eq!(assets[&10].contents[0].contents, Some(vec![]));

        let assets = parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='10' typeID='1' quantity='1' flag='4' singleton='1'/>
            </rowset></result>",
        )
        .unwrap();
        assert_eq!(assets[&10].contents[0].contents, None);
    }

    #[test]
    fn test_idempotent() {
        let elem: Element = "<result><rowset name='assets'>
                <row itemID='1' locationID='10' typeID='1' quantity='1' flag='4' singleton='1'>
                    <rowset name='contents'>
                        <row itemID='2' typeID='1' quantity='3' flag='4' singleton='0'/>
                    </rowset>
                </row>
                <row itemID='3' locationID='11' typeID='1' quantity='1' flag='4' singleton='0'/>
            </rowset></result>"
            .parse()
            .unwrap();
        assert_eq!(parse_assets(&elem).unwrap(), parse_assets(&elem).unwrap());
    }

    #[test]
    fn test_malformed() {
        match parse("<result/>") {
            Err(Error::MissingRowset("rowset")) => (),
            other => panic!("unexpected {:?}", other),
        }

        match parse(
            "<result><rowset name='assets'>
                <row itemID='1' typeID='1' quantity='1' flag='4' singleton='1'/>
            </rowset></result>",
        ) {
            Err(Error::MissingAttribute("locationID")) => (),
            other => panic!("unexpected {:?}", other),
        }

        match parse(
            "<result><rowset name='assets'>
                <row itemID='1' locationID='10' typeID='1' quantity='1' flag='4' singleton='1'>
                    <rowset name='contents'>
                        <row itemID='2' typeID='1' quantity='many' flag='4' singleton='0'/>
                    </rowset>
                </row>
            </rowset></result>",
        ) {
            Err(Error::InvalidValue { field: "quantity", .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
