// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::common::Named;
use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;

/// A faction warfare rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank {
    /// The rank held now.
    pub current: i64,

    /// The highest rank ever held.
    pub highest: i64,
}

/// A faction warfare counter over three time spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    /// Yesterday.
    pub yesterday: i64,

    /// Over the last week.
    pub week: i64,

    /// Since enlisting.
    pub total: i64,
}

/// Faction warfare statistics of an enlisted character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionWarfareStats {
    /// The faction fought for.
    pub faction: Named,

    /// When the character enlisted.
    pub enlist_ts: Timestamp,

    /// Ranks within the militia.
    pub rank: Rank,

    /// Kills scored.
    pub kills: Tally,

    /// Victory points earned.
    pub points: Tally,
}

impl TryFrom<&Element> for FactionWarfareStats {
    type Error = Error;

    fn try_from(result: &Element) -> Result<FactionWarfareStats, Error> {
        Ok(FactionWarfareStats {
            faction: Named {
                id: get_text!(result, "factionID", Required),
                name: get_text!(result, "factionName", Required),
            },
            enlist_ts: get_text!(result, "enlisted", Required),
            rank: Rank {
                current: get_text!(result, "currentRank", Required),
                highest: get_text!(result, "highestRank", Required),
            },
            kills: Tally {
                yesterday: get_text!(result, "killsYesterday", Required),
                week: get_text!(result, "killsLastWeek", Required),
                total: get_text!(result, "killsTotal", Required),
            },
            points: Tally {
                yesterday: get_text!(result, "victoryPointsYesterday", Required),
                week: get_text!(result, "victoryPointsLastWeek", Required),
                total: get_text!(result, "victoryPointsTotal", Required),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let elem: Element = "<result>
            <factionID>500001</factionID>
            <factionName>Caldari State</factionName>
            <enlisted>2008-06-10 22:10:00</enlisted>
            <currentRank>4</currentRank>
            <highestRank>4</highestRank>
            <killsYesterday>0</killsYesterday>
            <killsLastWeek>0</killsLastWeek>
            <killsTotal>0</killsTotal>
            <victoryPointsYesterday>0</victoryPointsYesterday>
            <victoryPointsLastWeek>1044</victoryPointsLastWeek>
            <victoryPointsTotal>0</victoryPointsTotal>
        </result>"
            .parse()
            .unwrap();
        let stats = FactionWarfareStats::try_from(&elem).unwrap();
        assert_eq!(stats.faction.name, "Caldari State");
        assert_eq!(stats.enlist_ts.to_string(), "2008-06-10 22:10:00");
        assert_eq!(stats.rank, Rank { current: 4, highest: 4 });
        assert_eq!(
            stats.points,
            Tally {
                yesterday: 0,
                week: 1044,
                total: 0,
            }
        );
    }

    #[test]
    fn test_missing_field() {
        let elem: Element = "<result><factionID>500001</factionID></result>".parse().unwrap();
        match FactionWarfareStats::try_from(&elem) {
            Err(Error::MissingElement("factionName")) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
