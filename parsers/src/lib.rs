//! A crate normalising the character endpoints of the EVE Online XML API
//! into Rust structures.
//!
//! Each module handles one family of endpoints.  Responses whose result is
//! a single structure implement the `TryFrom<&Element>` trait, those whose
//! result is a collection get a `parse_*` function returning a map keyed by
//! the natural id of the entity, or a vector when order matters.
//!
//! Every extractor only reads the element it is given and allocates a
//! fresh result, so they can be used from as many threads as needed.
//!
//! This crate performs no I/O: see the `eveapi` crate for a client.

// Copyright (c) 2017-2019 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
mod util;

/// The timestamps of the API.
pub mod date;
pub mod dom;
pub mod envelope;
pub mod error;
pub mod keyval;

mod common;

/// `char/AssetList`, the recursive asset tree
pub mod assets;

/// `char/UpcomingCalendarEvents` and `char/CalendarEventAttendees`
pub mod calendar;

/// `char/CharacterSheet`
pub mod character_sheet;

/// `char/ContactList`
pub mod contacts;

/// `char/Contracts`, `char/ContractBids` and `char/ContractItems`
pub mod contracts;

/// `char/FacWarStats`
pub mod faction_warfare;

/// `char/IndustryJobs`
pub mod industry_jobs;

/// `char/KillLog`
pub mod kills;

/// `char/Locations`
pub mod locations;

/// `char/MailMessages`, `char/MailBodies` and `char/MailingLists`
pub mod mail;

/// `char/Medals`
pub mod medals;

/// `char/Notifications`, `char/NotificationTexts` and
/// `char/ContactNotifications`
pub mod notifications;

/// `char/MarketOrders`
pub mod orders;

/// `char/Research`
pub mod research;

/// `char/SkillInTraining` and `char/SkillQueue`
pub mod skills;

/// `char/Standings`
pub mod standings;

/// `char/AccountBalance`, `char/WalletJournal` and
/// `char/WalletTransactions`
pub mod wallet;

pub use crate::common::Named;
pub use crate::date::Timestamp;
pub use crate::dom::Element;
pub use crate::envelope::{ApiResult, Document};
pub use crate::error::Error;
