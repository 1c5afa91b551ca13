// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Every call about a single character.

use std::collections::BTreeMap;

use crate::endpoint::{self, Endpoint, Param, Params};
use crate::parsers::assets::{parse_assets, AssetLocation};
use crate::parsers::calendar::{
    parse_calendar_attendees, parse_calendar_events, Attendee, CalendarEvent,
};
use crate::parsers::character_sheet::CharacterSheet;
use crate::parsers::contacts::Contacts;
use crate::parsers::contracts::{
    parse_contract_bids, parse_contract_items, parse_contracts, Contract, ContractBid,
    ContractItem,
};
use crate::parsers::faction_warfare::FactionWarfareStats;
use crate::parsers::industry_jobs::{parse_industry_jobs, IndustryJob};
use crate::parsers::kills::{parse_kills, Kill};
use crate::parsers::locations::{parse_locations, Location};
use crate::parsers::mail::{parse_mailing_lists, parse_message_bodies, parse_messages, MessageHeader};
use crate::parsers::medals::Medals;
use crate::parsers::notifications::{
    parse_contact_notifications, parse_notification_texts, parse_notifications,
    ContactNotification, NotificationHeader, NotificationText,
};
use crate::parsers::orders::{parse_market_orders, MarketOrder};
use crate::parsers::research::{parse_research, Research};
use crate::parsers::skills::{parse_skill_queue, QueuedSkill, SkillInTraining};
use crate::parsers::standings::Standings;
use crate::parsers::wallet::{
    parse_wallet_journal, parse_wallet_transactions, JournalEntry, WalletInfo, WalletTransaction,
};
use crate::parsers::{ApiResult, Document};
use crate::transport::Transport;
use crate::{Api, Error};

/// The calls about one character, obtained from [`Api::character`].
///
/// Each call returns its normalised result along with the timestamps of the
/// response, and never retries.
#[derive(Debug)]
pub struct Char<'a, T: Transport> {
    api: &'a Api<T>,
    char_id: i64,
}

impl<'a, T: Transport> Char<'a, T> {
    pub(crate) fn new(api: &'a Api<T>, char_id: i64) -> Char<'a, T> {
        Char { api, char_id }
    }

    /// The id of this character.
    pub fn id(&self) -> i64 {
        self.char_id
    }

    async fn fetch(&self, endpoint: &Endpoint, params: Params) -> Result<Document, Error> {
        let params = params.with(Param::CharId, self.char_id);
        self.api.call(endpoint, &params).await
    }

    async fn fetch_plain(&self, endpoint: &Endpoint) -> Result<Document, Error> {
        self.fetch(endpoint, Params::new()).await
    }

    /// Every item the character owns, grouped by top-level location.
    pub async fn assets(&self) -> Result<ApiResult<BTreeMap<i64, AssetLocation>>, Error> {
        let doc = self.fetch_plain(&endpoint::ASSET_LIST).await?;
        Ok(doc.normalize_with(parse_assets)?)
    }

    /// Bids placed on the character’s auctions, keyed by bid id.
    pub async fn contract_bids(&self) -> Result<ApiResult<BTreeMap<i64, ContractBid>>, Error> {
        let doc = self.fetch_plain(&endpoint::CONTRACT_BIDS).await?;
        Ok(doc.normalize_with(parse_contract_bids)?)
    }

    /// The items of a contract, keyed by record id.
    pub async fn contract_items(
        &self,
        contract_id: i64,
    ) -> Result<ApiResult<BTreeMap<i64, ContractItem>>, Error> {
        let params = Params::new().with(Param::ContractId, contract_id);
        let doc = self.fetch(&endpoint::CONTRACT_ITEMS, params).await?;
        Ok(doc.normalize_with(parse_contract_items)?)
    }

    /// The contracts of the character, keyed by contract id.
    pub async fn contracts(&self) -> Result<ApiResult<BTreeMap<i64, Contract>>, Error> {
        let doc = self.fetch_plain(&endpoint::CONTRACTS).await?;
        Ok(doc.normalize_with(parse_contracts)?)
    }

    /// Wallet journal entries, by ascending reference id.
    ///
    /// `before_id` walks the journal backwards from that entry, `limit`
    /// caps the number of entries returned by the server.
    pub async fn wallet_journal(
        &self,
        before_id: Option<i64>,
        limit: Option<u32>,
    ) -> Result<ApiResult<Vec<JournalEntry>>, Error> {
        let params = Params::new()
            .with_opt(Param::BeforeId, before_id)
            .with_opt(Param::Limit, limit);
        let doc = self.fetch(&endpoint::WALLET_JOURNAL, params).await?;
        Ok(doc.normalize_with(parse_wallet_journal)?)
    }

    /// The wallet of the character.
    pub async fn wallet_info(&self) -> Result<ApiResult<WalletInfo>, Error> {
        let doc = self.fetch_plain(&endpoint::ACCOUNT_BALANCE).await?;
        Ok(doc.normalize()?)
    }

    /// Only the balance of [`Char::wallet_info`].
    pub async fn wallet_balance(&self) -> Result<ApiResult<f64>, Error> {
        let info = self.wallet_info().await?;
        Ok(info.map(|info| info.balance))
    }

    /// Market transactions, in the order the server sent them.
    pub async fn wallet_transactions(
        &self,
        before_id: Option<i64>,
        limit: Option<u32>,
    ) -> Result<ApiResult<Vec<WalletTransaction>>, Error> {
        let params = Params::new()
            .with_opt(Param::BeforeId, before_id)
            .with_opt(Param::Limit, limit);
        let doc = self.fetch(&endpoint::WALLET_TRANSACTIONS, params).await?;
        Ok(doc.normalize_with(parse_wallet_transactions)?)
    }

    /// Industry jobs, keyed by job id.
    pub async fn industry_jobs(&self) -> Result<ApiResult<BTreeMap<i64, IndustryJob>>, Error> {
        let doc = self.fetch_plain(&endpoint::INDUSTRY_JOBS).await?;
        Ok(doc.normalize_with(parse_industry_jobs)?)
    }

    /// Kills and losses, keyed by kill id, optionally older than
    /// `before_kill`.
    pub async fn kills(
        &self,
        before_kill: Option<i64>,
    ) -> Result<ApiResult<BTreeMap<i64, Kill>>, Error> {
        let params = Params::new().with_opt(Param::BeforeKill, before_kill);
        let doc = self.fetch(&endpoint::KILL_LOG, params).await?;
        Ok(doc.normalize_with(parse_kills)?)
    }

    /// Notification headers, keyed by notification id.
    pub async fn notifications(
        &self,
    ) -> Result<ApiResult<BTreeMap<i64, NotificationHeader>>, Error> {
        let doc = self.fetch_plain(&endpoint::NOTIFICATIONS).await?;
        Ok(doc.normalize_with(parse_notifications)?)
    }

    /// The text of some notifications, with `None` for the ones the server
    /// reported missing.
    pub async fn notification_texts(
        &self,
        ids: &[i64],
    ) -> Result<ApiResult<BTreeMap<i64, Option<NotificationText>>>, Error> {
        let params = Params::new().with_ids(Param::NotificationIds, ids);
        let doc = self.fetch(&endpoint::NOTIFICATION_TEXTS, params).await?;
        Ok(doc.normalize_with(parse_notification_texts)?)
    }

    /// Standings towards NPC agents, corporations and factions.
    pub async fn standings(&self) -> Result<ApiResult<Standings>, Error> {
        let doc = self.fetch_plain(&endpoint::STANDINGS).await?;
        Ok(doc.normalize()?)
    }

    /// The character sheet.
    pub async fn character_sheet(&self) -> Result<ApiResult<CharacterSheet>, Error> {
        let doc = self.fetch_plain(&endpoint::CHARACTER_SHEET).await?;
        Ok(doc.normalize()?)
    }

    /// Personal, corporation and alliance contacts.
    pub async fn contacts(&self) -> Result<ApiResult<Contacts>, Error> {
        let doc = self.fetch_plain(&endpoint::CONTACT_LIST).await?;
        Ok(doc.normalize()?)
    }

    /// Market orders, keyed by order id.
    pub async fn orders(&self) -> Result<ApiResult<BTreeMap<i64, MarketOrder>>, Error> {
        let doc = self.fetch_plain(&endpoint::MARKET_ORDERS).await?;
        Ok(doc.normalize_with(parse_market_orders)?)
    }

    /// Research agents, keyed by agent id.
    pub async fn research(&self) -> Result<ApiResult<BTreeMap<i64, Research>>, Error> {
        let doc = self.fetch_plain(&endpoint::RESEARCH).await?;
        Ok(doc.normalize_with(parse_research)?)
    }

    /// The skill in training, if any.
    pub async fn current_training(&self) -> Result<ApiResult<SkillInTraining>, Error> {
        let doc = self.fetch_plain(&endpoint::SKILL_IN_TRAINING).await?;
        Ok(doc.normalize()?)
    }

    /// The skill queue, in training order.
    pub async fn skill_queue(&self) -> Result<ApiResult<Vec<QueuedSkill>>, Error> {
        let doc = self.fetch_plain(&endpoint::SKILL_QUEUE).await?;
        Ok(doc.normalize_with(parse_skill_queue)?)
    }

    /// Mail headers.
    pub async fn messages(&self) -> Result<ApiResult<Vec<MessageHeader>>, Error> {
        let doc = self.fetch_plain(&endpoint::MAIL_MESSAGES).await?;
        Ok(doc.normalize_with(parse_messages)?)
    }

    /// The bodies of some mails, with `None` for the ones the server
    /// reported missing.
    pub async fn message_bodies(
        &self,
        ids: &[i64],
    ) -> Result<ApiResult<BTreeMap<i64, Option<String>>>, Error> {
        let params = Params::new().with_ids(Param::MessageIds, ids);
        let doc = self.fetch(&endpoint::MAIL_BODIES, params).await?;
        Ok(doc.normalize_with(parse_message_bodies)?)
    }

    /// Names of the subscribed mailing lists, keyed by list id.
    pub async fn mailing_lists(&self) -> Result<ApiResult<BTreeMap<i64, String>>, Error> {
        let doc = self.fetch_plain(&endpoint::MAILING_LISTS).await?;
        Ok(doc.normalize_with(parse_mailing_lists)?)
    }

    /// Upcoming events, keyed by event id.
    pub async fn calendar_events(
        &self,
    ) -> Result<ApiResult<BTreeMap<i64, CalendarEvent>>, Error> {
        let doc = self.fetch_plain(&endpoint::UPCOMING_CALENDAR_EVENTS).await?;
        Ok(doc.normalize_with(parse_calendar_events)?)
    }

    /// Attendees of several events, keyed by event then by character.
    /// Every requested event is present in the result.
    pub async fn calendar_attendees(
        &self,
        event_ids: &[i64],
    ) -> Result<ApiResult<BTreeMap<i64, BTreeMap<i64, Attendee>>>, Error> {
        let params = Params::new().with_ids(Param::EventIds, event_ids);
        let doc = self.fetch(&endpoint::CALENDAR_EVENT_ATTENDEES, params).await?;
        Ok(doc.normalize_with(|result| parse_calendar_attendees(result, event_ids))?)
    }

    /// Attendees of a single event, keyed by character.
    pub async fn event_attendees(
        &self,
        event_id: i64,
    ) -> Result<ApiResult<BTreeMap<i64, Attendee>>, Error> {
        let attendees = self.calendar_attendees(&[event_id]).await?;
        Ok(attendees.map(|mut events| events.remove(&event_id).unwrap_or_default()))
    }

    /// Faction warfare statistics.
    pub async fn faction_warfare_stats(&self) -> Result<ApiResult<FactionWarfareStats>, Error> {
        let doc = self.fetch_plain(&endpoint::FAC_WAR_STATS).await?;
        Ok(doc.normalize()?)
    }

    /// Medals from the current and previous corporations.
    pub async fn medals(&self) -> Result<ApiResult<Medals>, Error> {
        let doc = self.fetch_plain(&endpoint::MEDALS).await?;
        Ok(doc.normalize()?)
    }

    /// Who recently added the character as a contact, keyed by
    /// notification id.
    pub async fn contact_notifications(
        &self,
    ) -> Result<ApiResult<BTreeMap<i64, ContactNotification>>, Error> {
        let doc = self.fetch_plain(&endpoint::CONTACT_NOTIFICATIONS).await?;
        Ok(doc.normalize_with(parse_contact_notifications)?)
    }

    /// Names and coordinates of some items, keyed by item id.
    pub async fn locations(&self, ids: &[i64]) -> Result<ApiResult<BTreeMap<i64, Location>>, Error> {
        let params = Params::new().with_ids(Param::LocationIds, ids);
        let doc = self.fetch(&endpoint::LOCATIONS, params).await?;
        Ok(doc.normalize_with(parse_locations)?)
    }
}
