// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The table of endpoints, and the parameters they take.

use crate::Error;

/// A parameter a caller can pass to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// The character the call is about.
    CharId,
    /// A single contract.
    ContractId,
    /// Walk a journal backwards from this entry.
    BeforeId,
    /// How many rows to return at most.
    Limit,
    /// Walk the kill log backwards from this kill.
    BeforeKill,
    /// Notifications to fetch the text of.
    NotificationIds,
    /// Messages to fetch the body of.
    MessageIds,
    /// Items to locate.
    LocationIds,
    /// Events to list the attendees of.
    EventIds,
}

impl Param {
    /// The name of this parameter in the query string.
    pub fn wire_name(self) -> &'static str {
        match self {
            Param::CharId => "characterID",
            Param::ContractId => "contractID",
            Param::BeforeId => "fromID",
            Param::Limit => "rowCount",
            Param::BeforeKill => "beforeKillID",
            Param::NotificationIds => "IDs",
            Param::MessageIds => "ids",
            Param::LocationIds => "IDs",
            Param::EventIds => "eventIDs",
        }
    }
}

/// A remote call, by path and required parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// The path below the base URL, without the `.xml.aspx` suffix.
    pub path: &'static str,

    /// The parameters which must be present and non-empty.
    pub required: &'static [Param],
}

macro_rules! endpoints {
    ($($(#[$meta:meta])* $name:ident => $path:literal [$($param:ident),*];)+) => (
        $(
            $(#[$meta])*
            pub const $name: Endpoint = Endpoint {
                path: $path,
                required: &[$(Param::$param),*],
            };
        )+
    );
}

endpoints! {
    /// The asset tree.
    ASSET_LIST => "char/AssetList" [CharId];
    /// Bids on the contracts of the character.
    CONTRACT_BIDS => "char/ContractBids" [CharId];
    /// The items of one contract.
    CONTRACT_ITEMS => "char/ContractItems" [CharId, ContractId];
    /// Contracts of the character.
    CONTRACTS => "char/Contracts" [CharId];
    /// The wallet journal.
    WALLET_JOURNAL => "char/WalletJournal" [CharId];
    /// The wallet balance.
    ACCOUNT_BALANCE => "char/AccountBalance" [CharId];
    /// Market transactions.
    WALLET_TRANSACTIONS => "char/WalletTransactions" [CharId];
    /// Industry jobs.
    INDUSTRY_JOBS => "char/IndustryJobs" [CharId];
    /// Kills and losses.
    KILL_LOG => "char/KillLog" [CharId];
    /// Notification headers.
    NOTIFICATIONS => "char/Notifications" [CharId];
    /// Notification bodies.
    NOTIFICATION_TEXTS => "char/NotificationTexts" [CharId, NotificationIds];
    /// NPC standings.
    STANDINGS => "char/Standings" [CharId];
    /// The character sheet.
    CHARACTER_SHEET => "char/CharacterSheet" [CharId];
    /// The three contact lists.
    CONTACT_LIST => "char/ContactList" [CharId];
    /// Market orders.
    MARKET_ORDERS => "char/MarketOrders" [CharId];
    /// Research agents.
    RESEARCH => "char/Research" [CharId];
    /// The skill currently in training.
    SKILL_IN_TRAINING => "char/SkillInTraining" [CharId];
    /// The skill queue.
    SKILL_QUEUE => "char/SkillQueue" [CharId];
    /// Mail headers.
    MAIL_MESSAGES => "char/MailMessages" [CharId];
    /// Mail bodies.
    MAIL_BODIES => "char/MailBodies" [CharId, MessageIds];
    /// Subscribed mailing lists.
    MAILING_LISTS => "char/MailingLists" [CharId];
    /// Upcoming calendar events.
    UPCOMING_CALENDAR_EVENTS => "char/UpcomingCalendarEvents" [CharId];
    /// Who answered which invitation.
    CALENDAR_EVENT_ATTENDEES => "char/CalendarEventAttendees" [CharId, EventIds];
    /// Faction warfare statistics.
    FAC_WAR_STATS => "char/FacWarStats" [CharId];
    /// Medals.
    MEDALS => "char/Medals" [CharId];
    /// Who added the character as a contact.
    CONTACT_NOTIFICATIONS => "char/ContactNotifications" [CharId];
    /// Names and coordinates of items.
    LOCATIONS => "char/Locations" [CharId, LocationIds];
}

/// Parameters of a single call, with their values already formatted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(Param, String)>,
}

impl Params {
    /// An empty set of parameters.
    pub fn new() -> Params {
        Params::default()
    }

    /// Set `param` to `value`, replacing any previous value.
    pub fn with<V: ToString>(mut self, param: Param, value: V) -> Params {
        self.values.retain(|(p, _)| *p != param);
        self.values.push((param, value.to_string()));
        self
    }

    /// Set `param` to `value` if there is one.
    pub fn with_opt<V: ToString>(self, param: Param, value: Option<V>) -> Params {
        match value {
            Some(value) => self.with(param, value),
            None => self,
        }
    }

    /// Set `param` to a comma separated list of ids.
    pub fn with_ids(self, param: Param, ids: &[i64]) -> Params {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with(param, joined)
    }

    /// Check every parameter `endpoint` requires is here, then rename them
    /// all for the query string.
    pub fn to_wire(&self, endpoint: &Endpoint) -> Result<Vec<(&'static str, String)>, Error> {
        for param in endpoint.required {
            let present = self
                .values
                .iter()
                .any(|(p, value)| p == param && !value.is_empty());
            if !present {
                return Err(Error::MissingParameter(param.wire_name()));
            }
        }
        Ok(self
            .values
            .iter()
            .map(|(param, value)| (param.wire_name(), value.clone()))
            .collect())
    }
}
