// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The character sheet.
//!
//! Unlike most responses, the scalar part of the sheet is made of child
//! elements rather than attributes; skills, certificates, roles and titles
//! come as rowsets told apart by their name.

use std::collections::{BTreeMap, BTreeSet};

use crate::common::Named;
use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::{Error, Overflow};
use crate::util::{named_rowset, rows};

/// The alliance of the character’s corporation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alliance {
    /// Its id, if the corporation is in an alliance.
    pub id: Option<i64>,

    /// Its name, if the corporation is in an alliance.
    pub name: Option<String>,
}

/// The medical clone of the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalClone {
    /// The grade of the clone.
    pub name: String,

    /// How many skill points it preserves.
    pub skillpoints: i64,
}

/// An implant raising an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bonus {
    /// The name of the implant.
    pub name: String,

    /// How many points it adds.
    pub value: i64,
}

/// One of the five attributes of the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute without implants.
    pub base: i64,

    /// The attribute with the implant bonus, if any.
    pub total: i64,

    /// The implant plugged in for this attribute.
    pub bonus: Option<Bonus>,
}

/// The attributes of the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    /// Intelligence.
    pub intelligence: Attribute,

    /// Memory.
    pub memory: Attribute,

    /// Charisma.
    pub charisma: Attribute,

    /// Perception.
    pub perception: Attribute,

    /// Willpower.
    pub willpower: Attribute,
}

impl Attributes {
    fn parse_one(result: &Element, name: &'static str, bonus_name: &str) -> Result<Attribute, Error> {
        let attributes = match result.get_child("attributes") {
            Some(attributes) => attributes,
            None => return Err(Error::MissingElement("attributes")),
        };
        let base: i64 = get_text!(attributes, name, Required);
        let bonus = match result
            .get_child("attributeEnhancers")
            .and_then(|enhancers| enhancers.get_child(bonus_name))
        {
            Some(bonus) => Some(Bonus {
                name: bonus.child_text("augmentatorName").unwrap_or_default(),
                value: get_text!(bonus, "augmentatorValue", Required),
            }),
            None => None,
        };
        let total = base
            .checked_add(bonus.as_ref().map_or(0, |bonus| bonus.value))
            .ok_or_else(|| Error::invalid_value(name, Overflow))?;
        Ok(Attribute { base, total, bonus })
    }
}

impl TryFrom<&Element> for Attributes {
    type Error = Error;

    fn try_from(result: &Element) -> Result<Attributes, Error> {
        Ok(Attributes {
            intelligence: Attributes::parse_one(result, "intelligence", "intelligenceBonus")?,
            memory: Attributes::parse_one(result, "memory", "memoryBonus")?,
            charisma: Attributes::parse_one(result, "charisma", "charismaBonus")?,
            perception: Attributes::parse_one(result, "perception", "perceptionBonus")?,
            willpower: Attributes::parse_one(result, "willpower", "willpowerBonus")?,
        })
    }
}

/// A trained skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// The type of the skill.
    pub id: i64,

    /// Skill points in this skill.
    pub skillpoints: i64,

    /// The trained level, from 0 to 5.
    pub level: i64,

    /// Whether the skill is still available in the game.
    pub published: bool,
}

impl TryFrom<&Element> for Skill {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Skill, Error> {
        Ok(Skill {
            id: get_attr!(row, "typeID", Required),
            skillpoints: get_attr!(row, "skillpoints", Required),
            level: get_attr!(row, "level", Required),
            published: get_attr!(row, "published", Bool),
        })
    }
}

/// Corporation roles of the character, by where they apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roles {
    /// Roles applying everywhere.
    pub global: BTreeMap<i64, Named>,

    /// Roles applying at the headquarters.
    pub at_hq: BTreeMap<i64, Named>,

    /// Roles applying at the base of the character.
    pub at_base: BTreeMap<i64, Named>,

    /// Roles applying at other corporation offices.
    pub at_other: BTreeMap<i64, Named>,
}

fn parse_named_rows(
    rowset: &Element,
    id: &'static str,
    name: &'static str,
) -> Result<BTreeMap<i64, Named>, Error> {
    let mut entries = BTreeMap::new();
    for row in rows(rowset) {
        let entry = Named::from_row(row, id, name)?;
        entries.insert(entry.id, entry);
    }
    Ok(entries)
}

impl TryFrom<&Element> for Roles {
    type Error = Error;

    fn try_from(result: &Element) -> Result<Roles, Error> {
        let parse = |rowset_name: &'static str| -> Result<BTreeMap<i64, Named>, Error> {
            parse_named_rows(named_rowset(result, rowset_name)?, "roleID", "roleName")
        };
        Ok(Roles {
            global: parse("corporationRoles")?,
            at_hq: parse("corporationRolesAtHQ")?,
            at_base: parse("corporationRolesAtBase")?,
            at_other: parse("corporationRolesAtOther")?,
        })
    }
}

/// Everything `char/CharacterSheet` tells about a character.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheet {
    /// The id of the character.
    pub id: i64,

    /// The name of the character.
    pub name: String,

    /// When the character was created.
    pub create_ts: Timestamp,

    /// The race of the character.
    pub race: String,

    /// The bloodline of the character.
    pub bloodline: String,

    /// The ancestry of the character.
    pub ancestry: String,

    /// The gender of the character.
    pub gender: String,

    /// The corporation of the character.
    pub corp: Named,

    /// The alliance of the corporation.
    pub alliance: Alliance,

    /// The medical clone.
    pub clone: MedicalClone,

    /// The wallet balance.
    pub balance: f64,

    /// The attributes, with implant bonuses applied.
    pub attributes: Attributes,

    /// Trained skills, in document order.
    pub skills: Vec<Skill>,

    /// The sum of the skill points of every skill.
    pub skillpoints: i64,

    /// Ids of the certificates granted.
    pub certificates: BTreeSet<i64>,

    /// Corporation roles.
    pub roles: Roles,

    /// Corporation titles, keyed by title id.
    pub titles: BTreeMap<i64, Named>,
}

impl TryFrom<&Element> for CharacterSheet {
    type Error = Error;

    fn try_from(result: &Element) -> Result<CharacterSheet, Error> {
        let mut skills = Vec::new();
        for row in rows(named_rowset(result, "skills")?) {
            skills.push(Skill::try_from(row)?);
        }
        let mut skillpoints: i64 = 0;
        for skill in &skills {
            skillpoints = skillpoints
                .checked_add(skill.skillpoints)
                .ok_or_else(|| Error::invalid_value("skillpoints", Overflow))?;
        }

        let mut certificates: BTreeSet<i64> = BTreeSet::new();
        for row in rows(named_rowset(result, "certificates")?) {
            certificates.insert(get_attr!(row, "certificateID", Required));
        }

        Ok(CharacterSheet {
            id: get_text!(result, "characterID", Required),
            name: get_text!(result, "name", Required),
            create_ts: get_text!(result, "DoB", Required),
            race: get_text!(result, "race", Required),
            bloodline: get_text!(result, "bloodLine", Required),
            ancestry: get_text!(result, "ancestry", Required),
            gender: get_text!(result, "gender", Required),
            corp: Named {
                id: get_text!(result, "corporationID", Required),
                name: get_text!(result, "corporationName", Required),
            },
            alliance: Alliance {
                id: get_text!(result, "allianceID", OptionEmpty),
                name: get_text!(result, "allianceName", OptionEmpty),
            },
            clone: MedicalClone {
                name: get_text!(result, "cloneName", Required),
                skillpoints: get_text!(result, "cloneSkillPoints", Required),
            },
            balance: get_text!(result, "balance", Required),
            attributes: Attributes::try_from(result)?,
            skills,
            skillpoints,
            certificates,
            roles: Roles::try_from(result)?,
            titles: parse_named_rows(
                named_rowset(result, "corporationTitles")?,
                "titleID",
                "titleName",
            )?,
        })
    }
}
