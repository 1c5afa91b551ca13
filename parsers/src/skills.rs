// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Skill training: the skill currently in training and the queue.

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// The skill currently in training.
///
/// When nothing is training, the server only sends `skillInTraining` and
/// `currentTQTime`, every other field is then `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillInTraining {
    /// When training started.
    pub start_ts: Option<Timestamp>,

    /// When training ends.
    pub end_ts: Option<Timestamp>,

    /// The skill being trained.
    pub type_id: Option<i64>,

    /// Skill points at the start.
    pub start_sp: Option<i64>,

    /// Skill points at the end.
    pub end_sp: Option<i64>,

    /// The server time when this was generated.
    pub current_ts: Option<Timestamp>,

    /// The level being trained to.
    pub level: Option<i64>,

    /// Whether anything is training at all.
    pub active: bool,
}

impl TryFrom<&Element> for SkillInTraining {
    type Error = Error;

    fn try_from(result: &Element) -> Result<SkillInTraining, Error> {
        Ok(SkillInTraining {
            start_ts: get_text!(result, "trainingStartTime", OptionEmpty),
            end_ts: get_text!(result, "trainingEndTime", OptionEmpty),
            type_id: get_text!(result, "trainingTypeID", OptionEmpty),
            start_sp: get_text!(result, "trainingStartSP", OptionEmpty),
            end_sp: get_text!(result, "trainingDestinationSP", OptionEmpty),
            current_ts: get_text!(result, "currentTQTime", OptionEmpty),
            level: get_text!(result, "trainingToLevel", OptionEmpty),
            active: get_text!(result, "skillInTraining", Bool),
        })
    }
}

/// An entry of the skill queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedSkill {
    /// The position in the queue, starting at 0.
    pub position: i64,

    /// The skill to train.
    pub type_id: i64,

    /// The level to train it to.
    pub level: i64,

    /// Skill points at the start.
    pub start_sp: i64,

    /// Skill points at the end.
    pub end_sp: i64,

    /// When training starts, unset while the queue is paused.
    pub start_ts: Option<Timestamp>,

    /// When training ends, unset while the queue is paused.
    pub end_ts: Option<Timestamp>,
}

impl TryFrom<&Element> for QueuedSkill {
    type Error = Error;

    fn try_from(row: &Element) -> Result<QueuedSkill, Error> {
        Ok(QueuedSkill {
            position: get_attr!(row, "queuePosition", Required),
            type_id: get_attr!(row, "typeID", Required),
            level: get_attr!(row, "level", Required),
            start_sp: get_attr!(row, "startSP", Required),
            end_sp: get_attr!(row, "endSP", Required),
            start_ts: get_attr!(row, "startTime", OptionEmpty),
            end_ts: get_attr!(row, "endTime", OptionEmpty),
        })
    }
}

/// Parse `char/SkillQueue`, in queue order as sent by the server.
pub fn parse_skill_queue(result: &Element) -> Result<Vec<QueuedSkill>, Error> {
    let mut queue = Vec::new();
    for row in rows(rowset(result)?) {
        queue.push(QueuedSkill::try_from(row)?);
    }
    Ok(queue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training() {
        let elem: Element = "<result>
            <currentTQTime offset='0'>2008-08-17 06:43:00</currentTQTime>
            <trainingEndTime>2008-08-17 15:29:44</trainingEndTime>
            <trainingStartTime>2008-08-15 04:01:16</trainingStartTime>
            <trainingTypeID>3305</trainingTypeID>
            <trainingStartSP>24000</trainingStartSP>
            <trainingDestinationSP>135765</trainingDestinationSP>
            <trainingToLevel>4</trainingToLevel>
            <skillInTraining>1</skillInTraining>
        </result>"
            .parse()
            .unwrap();
        let training = SkillInTraining::try_from(&elem).unwrap();
        assert!(training.active);
        assert_eq!(training.type_id, Some(3305));
        assert_eq!(training.end_sp, Some(135765));
        assert_eq!(training.level, Some(4));
        assert_eq!(training.current_ts.unwrap().to_string(), "2008-08-17 06:43:00");
    }

    #[test]
    fn test_not_training() {
        let elem: Element = "<result>
            <currentTQTime offset='0'>2008-08-17 06:43:00</currentTQTime>
            <skillInTraining>0</skillInTraining>
        </result>"
            .parse()
            .unwrap();
        let training = SkillInTraining::try_from(&elem).unwrap();
        assert!(!training.active);
        assert_eq!(training.type_id, None);
        assert_eq!(training.start_ts, None);
    }

    #[test]
    fn test_queue_order() {
        let elem: Element = "<result><rowset name='skillqueue' key='queuePosition'>
            <row queuePosition='1' typeID='11441' level='3' startSP='7072' endSP='40000'
                 startTime='2009-03-18 13:13:43' endTime='2009-03-18 20:52:28'/>
            <row queuePosition='0' typeID='20533' level='4' startSP='112000' endSP='633542'
                 startTime='2009-03-18 02:01:06' endTime='2009-03-18 13:13:43'/>
            <row queuePosition='2' typeID='3436' level='5' startSP='256000' endSP='1280000'
                 startTime='' endTime=''/>
        </rowset></result>"
            .parse()
            .unwrap();
        let queue = parse_skill_queue(&elem).unwrap();
        assert_eq!(
            queue.iter().map(|skill| skill.position).collect::<Vec<_>>(),
            vec![1, 0, 2]
        );
        assert_eq!(queue[1].type_id, 20533);
        assert_eq!(queue[2].start_ts, None);
    }
}
