// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The kill log.
//!
//! Like assets, the items lost in a kill can be containers themselves, in
//! which case their contents are nested below them.

use std::collections::BTreeMap;

use crate::common::Named;
use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{find_named_rowset, named_rowset, rows, rowset};

/// The pilot who lost a ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victim {
    /// The character id, zero for structures.
    pub id: i64,

    /// The character name.
    pub name: String,

    /// Their corporation.
    pub corp: Named,

    /// Their alliance, with a zero id if they aren’t in one.
    pub alliance: Named,

    /// Their faction, with a zero id if they aren’t in faction warfare.
    pub faction: Named,

    /// Total damage taken.
    pub damage: i64,

    /// The type of the ship lost.
    pub ship_type_id: i64,
}

impl TryFrom<&Element> for Victim {
    type Error = Error;

    fn try_from(victim: &Element) -> Result<Victim, Error> {
        Ok(Victim {
            id: get_attr!(victim, "characterID", Required),
            name: get_attr!(victim, "characterName", Required),
            corp: Named::from_row(victim, "corporationID", "corporationName")?,
            alliance: Named::from_row(victim, "allianceID", "allianceName")?,
            faction: Named::from_row(victim, "factionID", "factionName")?,
            damage: get_attr!(victim, "damageTaken", Required),
            ship_type_id: get_attr!(victim, "shipTypeID", Required),
        })
    }
}

/// Someone who took part in a kill.
#[derive(Debug, Clone, PartialEq)]
pub struct Attacker {
    /// The character id, zero for NPCs.
    pub id: i64,

    /// The character name.
    pub name: String,

    /// Their corporation.
    pub corp: Named,

    /// Their alliance, with a zero id if they aren’t in one.
    pub alliance: Named,

    /// Their faction, with a zero id if they aren’t in faction warfare.
    pub faction: Named,

    /// Their security status.
    pub sec_status: f64,

    /// Damage they did.
    pub damage: i64,

    /// Whether they landed the final blow.
    pub final_blow: bool,

    /// The weapon they used.
    pub weapon_type_id: i64,

    /// The ship they flew.
    pub ship_type_id: i64,
}

impl TryFrom<&Element> for Attacker {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Attacker, Error> {
        Ok(Attacker {
            id: get_attr!(row, "characterID", Required),
            name: get_attr!(row, "characterName", Required),
            corp: Named::from_row(row, "corporationID", "corporationName")?,
            alliance: Named::from_row(row, "allianceID", "allianceName")?,
            faction: Named::from_row(row, "factionID", "factionName")?,
            sec_status: get_attr!(row, "securityStatus", Required),
            damage: get_attr!(row, "damageDone", Required),
            final_blow: get_attr!(row, "finalBlow", Bool),
            weapon_type_id: get_attr!(row, "weaponTypeID", Required),
            ship_type_id: get_attr!(row, "shipTypeID", Required),
        })
    }
}

/// An item which was fitted or carried in the lost ship.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KillItem {
    /// The type of the item.
    pub type_id: i64,

    /// Where in the ship it was.
    pub flag: i64,

    /// How many dropped in the wreck.
    pub dropped: i64,

    /// How many were destroyed.
    pub destroyed: i64,

    /// The items inside it, if it was a container.
    pub items: Option<Vec<KillItem>>,
}

impl TryFrom<&Element> for KillItem {
    type Error = Error;

    fn try_from(row: &Element) -> Result<KillItem, Error> {
        let items = match row.get_child("rowset") {
            Some(rowset) => Some(parse_items(rowset)?),
            None => None,
        };
        Ok(KillItem {
            type_id: get_attr!(row, "typeID", Required),
            flag: get_attr!(row, "flag", Required),
            dropped: get_attr!(row, "qtyDropped", Required),
            destroyed: get_attr!(row, "qtyDestroyed", Required),
            items,
        })
    }
}

fn parse_items(rowset: &Element) -> Result<Vec<KillItem>, Error> {
    let mut items = Vec::new();
    for row in rows(rowset) {
        items.push(KillItem::try_from(row)?);
    }
    Ok(items)
}

/// A single kill.
#[derive(Debug, Clone, PartialEq)]
pub struct Kill {
    /// The unique id of this kill.
    pub id: i64,

    /// Where it happened.
    pub system_id: i64,

    /// When it happened.
    pub time: Timestamp,

    /// The moon, for structures anchored at one, else zero.
    pub moon_id: i64,

    /// Who died.
    pub victim: Victim,

    /// Who took part, in document order.
    pub attackers: Vec<Attacker>,

    /// What the victim had, when the server listed it.
    pub items: Option<Vec<KillItem>>,
}

impl TryFrom<&Element> for Kill {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Kill, Error> {
        let victim = match row.get_child("victim") {
            Some(victim) => Victim::try_from(victim)?,
            None => return Err(Error::MissingElement("victim")),
        };
        let mut attackers = Vec::new();
        for attacker in rows(named_rowset(row, "attackers")?) {
            attackers.push(Attacker::try_from(attacker)?);
        }
        let items = match find_named_rowset(row, "items") {
            Some(rowset) => Some(parse_items(rowset)?),
            None => None,
        };
        Ok(Kill {
            id: get_attr!(row, "killID", Required),
            system_id: get_attr!(row, "solarSystemID", Required),
            time: get_attr!(row, "killTime", Required),
            moon_id: get_attr!(row, "moonID", Required),
            victim,
            attackers,
            items,
        })
    }
}

/// Parse `char/KillLog`, keyed by kill id.
pub fn parse_kills(result: &Element) -> Result<BTreeMap<i64, Kill>, Error> {
    let mut kills = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let kill = Kill::try_from(row)?;
        kills.insert(kill.id, kill);
    }
    Ok(kills)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KILL_LOG: &str = "<result><rowset name='kills' key='killID'>
        <row killID='15640545' solarSystemID='30001160' killTime='2010-12-07 16:35:00' moonID='0'>
            <victim characterID='150080271' characterName='Pilot 333' corporationID='1000169'
                    corporationName='Center for Advanced Studies' allianceID='0' allianceName=''
                    factionID='0' factionName='' damageTaken='500' shipTypeID='670'/>
            <rowset name='attackers' columns='characterID,characterName'>
                <row characterID='935091361' characterName='ICU123' corporationID='224588600'
                     corporationName='Weasel Kids' allianceID='159995011' allianceName='Amarr Empire'
                     factionID='500003' factionName='Amarr Empire' securityStatus='-0.3'
                     damageDone='500' finalBlow='1' weaponTypeID='2881' shipTypeID='12017'/>
                <row characterID='0' characterName='' corporationID='1000125'
                     corporationName='CONCORD' allianceID='0' allianceName=''
                     factionID='0' factionName='' securityStatus='0'
                     damageDone='0' finalBlow='0' weaponTypeID='3071' shipTypeID='3885'/>
            </rowset>
            <rowset name='items' columns='typeID,flag,qtyDropped,qtyDestroyed'>
                <row typeID='3520' flag='0' qtyDropped='3' qtyDestroyed='0'/>
                <row typeID='3349' flag='5' qtyDropped='0' qtyDestroyed='1'>
                    <rowset name='items' columns='typeID,flag,qtyDropped,qtyDestroyed'>
                        <row typeID='21898' flag='0' qtyDropped='2' qtyDestroyed='1'/>
                    </rowset>
                </row>
            </rowset>
        </row>
    </rowset></result>";

    #[test]
    fn test_kill_log() {
        let elem: Element = KILL_LOG.parse().unwrap();
        let kills = parse_kills(&elem).unwrap();
        assert_eq!(kills.len(), 1);
        let kill = &kills[&15640545];
        assert_eq!(kill.system_id, 30001160);
        assert_eq!(kill.victim.name, "Pilot 333");
        assert_eq!(kill.victim.alliance.id, 0);
        assert_eq!(kill.victim.corp.name, "Center for Advanced Studies");

        assert_eq!(kill.attackers.len(), 2);
        assert!(kill.attackers[0].final_blow);
        assert_eq!(kill.attackers[0].sec_status, -0.3);
        assert_eq!(kill.attackers[1].id, 0);
        assert!(!kill.attackers[1].final_blow);

        let items = kill.items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].items, None);
        assert_eq!(
            items[1].items,
            Some(vec![KillItem {
                type_id: 21898,
                flag: 0,
                dropped: 2,
                destroyed: 1,
                items: None,
            }])
        );
    }

    #[test]
    fn test_missing_victim() {
        let elem: Element = "<result><rowset name='kills'>
            <row killID='1' solarSystemID='1' killTime='2010-12-07 16:35:00' moonID='0'>
                <rowset name='attackers'/>
            </row>
        </rowset></result>"
            .parse()
            .unwrap();
        match parse_kills(&elem) {
            Err(Error::MissingElement("victim")) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
