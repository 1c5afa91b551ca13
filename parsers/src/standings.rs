// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::dom::Element;
use crate::error::Error;
use crate::util::{named_rowset, rows};

/// The standing of an NPC entity towards the character.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    /// The id of the agent, corporation or faction.
    pub id: i64,

    /// Its name.
    pub name: String,

    /// The standing, from -10 to 10.
    pub standing: f64,
}

impl TryFrom<&Element> for Standing {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Standing, Error> {
        Ok(Standing {
            id: get_attr!(row, "fromID", Required),
            name: get_attr!(row, "fromName", Required),
            standing: get_attr!(row, "standing", Required),
        })
    }
}

/// The standings of NPC entities towards the character, by kind of entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    /// Agents, keyed by agent id.
    pub agents: BTreeMap<i64, Standing>,

    /// NPC corporations, keyed by corporation id.
    pub corps: BTreeMap<i64, Standing>,

    /// Factions, keyed by faction id.
    pub factions: BTreeMap<i64, Standing>,
}

fn parse_standings(rowset: &Element) -> Result<BTreeMap<i64, Standing>, Error> {
    let mut standings = BTreeMap::new();
    for row in rows(rowset) {
        let standing = Standing::try_from(row)?;
        standings.insert(standing.id, standing);
    }
    Ok(standings)
}

impl TryFrom<&Element> for Standings {
    type Error = Error;

    fn try_from(result: &Element) -> Result<Standings, Error> {
        let standings = match result.get_child("characterNPCStandings") {
            Some(standings) => standings,
            None => return Err(Error::MissingElement("characterNPCStandings")),
        };
        Ok(Standings {
            agents: parse_standings(named_rowset(standings, "agents")?)?,
            corps: parse_standings(named_rowset(standings, "NPCCorporations")?)?,
            factions: parse_standings(named_rowset(standings, "factions")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings() {
        let elem: Element = "<result><characterNPCStandings>
            <rowset name='agents' key='fromID' columns='fromID,fromName,standing'>
                <row fromID='3009841' fromName='Pausent Ansin' standing='0.1'/>
                <row fromID='3009846' fromName='Charie Octienne' standing='0.19'/>
            </rowset>
            <rowset name='NPCCorporations' key='fromID' columns='fromID,fromName,standing'>
                <row fromID='1000061' fromName='Freedom Extension' standing='0'/>
                <row fromID='1000064' fromName='Carthum Conglomerate' standing='0.34'/>
                <row fromID='1000094' fromName='TransStellar Shipping' standing='0.02'/>
            </rowset>
            <rowset name='factions' key='fromID' columns='fromID,fromName,standing'>
                <row fromID='500003' fromName='Amarr Empire' standing='-0.1'/>
            </rowset>
        </characterNPCStandings></result>"
            .parse()
            .unwrap();
        let standings = Standings::try_from(&elem).unwrap();
        assert_eq!(standings.agents.len(), 2);
        assert_eq!(standings.corps.len(), 3);
        assert_eq!(standings.factions.len(), 1);
        assert_eq!(
            standings.factions[&500003],
            Standing {
                id: 500003,
                name: String::from("Amarr Empire"),
                standing: -0.1,
            }
        );
        assert_eq!(standings.corps[&1000061].standing, 0.0);
    }

    #[test]
    fn test_missing_rowset() {
        let elem: Element = "<result><characterNPCStandings>
            <rowset name='agents'/>
            <rowset name='factions'/>
        </characterNPCStandings></result>"
            .parse()
            .unwrap();
        match Standings::try_from(&elem) {
            Err(Error::MissingRowset("NPCCorporations")) => (),
            other => panic!("unexpected {:?}", other),
        }

        let elem: Element = "<result/>".parse().unwrap();
        match Standings::try_from(&elem) {
            Err(Error::MissingElement("characterNPCStandings")) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_missing_name() {
        let elem: Element = "<result><characterNPCStandings>
            <rowset name='agents'>
                <row fromID='3009841' standing='0.1'/>
            </rowset>
            <rowset name='NPCCorporations'/>
            <rowset name='factions'/>
        </characterNPCStandings></result>"
            .parse()
            .unwrap();
        match Standings::try_from(&elem) {
            Err(Error::MissingAttribute("fromName")) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
