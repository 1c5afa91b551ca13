// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contracts, the items they contain and the bids placed on auctions.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

generate_attribute!(
    /// The kind of a contract.
    ContractType, "contract type", {
        /// Items traded against items and ISK.
        ItemExchange => "ItemExchange",

        /// Items sold to the highest bidder.
        Auction => "Auction",

        /// Items to be hauled somewhere.
        Courier => "Courier",

        /// Items lent for some time.
        Loan => "Loan",
    }
);

generate_attribute!(
    /// Where a contract is in its lifecycle.
    ContractStatus, "contract status", {
        /// Still open.
        Outstanding => "Outstanding",

        /// Deleted by its issuer.
        Deleted => "Deleted",

        /// Done.
        Completed => "Completed",

        /// A courier contract which wasn’t delivered in time.
        Failed => "Failed",

        /// Marked as completed by its issuer.
        CompletedByIssuer => "CompletedByIssuer",

        /// Marked as completed by whoever accepted it.
        CompletedByContractor => "CompletedByContractor",

        /// Cancelled by its issuer.
        Cancelled => "Cancelled",

        /// Refused by its assignee.
        Rejected => "Rejected",

        /// Reversed by a game master.
        Reversed => "Reversed",

        /// Accepted, a courier contract in transit.
        InProgress => "InProgress",
    }
);

generate_attribute!(
    /// Who may see a contract.
    Availability, "contract availability", {
        /// Anyone in the region.
        Public => "Public",

        /// Only the assignee.
        Private => "Private",
    }
);

/// A contract issued by or to the character.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    /// The unique id of this contract.
    pub id: i64,

    /// The character who issued it.
    pub issuer: i64,

    /// The corporation of the issuer.
    pub issuer_corp: i64,

    /// Who it is assigned to, zero when public.
    pub assignee: i64,

    /// Who accepted it, zero when nobody did yet.
    pub acceptor: i64,

    /// Where the items are.
    pub start: i64,

    /// Where the items have to go, for courier contracts.
    pub end: i64,

    /// What kind of contract this is.
    pub type_: ContractType,

    /// Where this contract is in its lifecycle.
    pub status: ContractStatus,

    /// Whether it was issued on behalf of the issuer’s corporation.
    pub corp: bool,

    /// Who may see it.
    pub availability: Availability,

    /// When it was issued.
    pub issued: Timestamp,

    /// When it expires, or expired.
    pub expired: Option<Timestamp>,

    /// When it was accepted.
    pub accepted: Option<Timestamp>,

    /// When it was completed.
    pub completed: Option<Timestamp>,

    /// How many days the acceptor has to complete it.
    pub days: i64,

    /// The price of the items.
    pub price: f64,

    /// The reward for a courier contract.
    pub reward: f64,

    /// The collateral for a courier contract.
    pub collateral: f64,

    /// The buyout price of an auction.
    pub buyout: f64,

    /// The volume of the items, in m³.
    pub volume: f64,

    /// Free text set by the issuer.
    pub title: String,
}

impl TryFrom<&Element> for Contract {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Contract, Error> {
        Ok(Contract {
            id: get_attr!(row, "contractID", Required),
            issuer: get_attr!(row, "issuerID", Required),
            issuer_corp: get_attr!(row, "issuerCorpID", Required),
            assignee: get_attr!(row, "assigneeID", Required),
            acceptor: get_attr!(row, "acceptorID", Required),
            start: get_attr!(row, "startStationID", Required),
            end: get_attr!(row, "endStationID", Required),
            type_: get_attr!(row, "type", Required),
            status: get_attr!(row, "status", Required),
            corp: get_attr!(row, "forCorp", Bool),
            availability: get_attr!(row, "availability", Required),
            issued: get_attr!(row, "dateIssued", Required),
            expired: get_attr!(row, "dateExpired", OptionEmpty),
            accepted: get_attr!(row, "dateAccepted", OptionEmpty),
            completed: get_attr!(row, "dateCompleted", OptionEmpty),
            days: get_attr!(row, "numDays", Required),
            price: get_attr!(row, "price", Required),
            reward: get_attr!(row, "reward", Required),
            collateral: get_attr!(row, "collateral", Required),
            buyout: get_attr!(row, "buyout", Required),
            volume: get_attr!(row, "volume", Required),
            title: get_attr!(row, "title", Required),
        })
    }
}

/// A bid placed on an auction.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractBid {
    /// The unique id of this bid.
    pub id: i64,

    /// The auction this bid was placed on.
    pub contract_id: i64,

    /// Who placed it.
    pub bidder_id: i64,

    /// When it was placed.
    pub timestamp: Timestamp,

    /// How much ISK was bid.
    pub amount: f64,
}

impl TryFrom<&Element> for ContractBid {
    type Error = Error;

    fn try_from(row: &Element) -> Result<ContractBid, Error> {
        Ok(ContractBid {
            id: get_attr!(row, "bidID", Required),
            contract_id: get_attr!(row, "contractID", Required),
            bidder_id: get_attr!(row, "bidderID", Required),
            timestamp: get_attr!(row, "dateBid", Required),
            amount: get_attr!(row, "amount", Required),
        })
    }
}

/// Which side of a contract an item is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemAction {
    /// The issuer gives this item.
    Offered,

    /// The issuer asks for this item.
    Requested,
}

/// An item listed in a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractItem {
    /// The id of this line of the contract.
    pub id: i64,

    /// The type of the item.
    pub type_id: i64,

    /// How many of them.
    pub quantity: i64,

    /// Whether this is a single assembled item.
    pub singleton: bool,

    /// Whether the item is given or asked for.
    pub action: ItemAction,

    /// Set for blueprint copies (-2) and originals (-1).
    pub raw_quantity: Option<i64>,
}

impl TryFrom<&Element> for ContractItem {
    type Error = Error;

    fn try_from(row: &Element) -> Result<ContractItem, Error> {
        let action = if get_attr!(row, "included", Bool) {
            ItemAction::Offered
        } else {
            ItemAction::Requested
        };
        Ok(ContractItem {
            id: get_attr!(row, "recordID", Required),
            type_id: get_attr!(row, "typeID", Required),
            quantity: get_attr!(row, "quantity", Required),
            singleton: get_attr!(row, "singleton", Bool),
            action,
            raw_quantity: get_attr!(row, "rawQuantity", OptionEmpty),
        })
    }
}

/// Parse `char/Contracts`, keyed by contract id.
pub fn parse_contracts(result: &Element) -> Result<BTreeMap<i64, Contract>, Error> {
    let mut contracts = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let contract = Contract::try_from(row)?;
        contracts.insert(contract.id, contract);
    }
    Ok(contracts)
}

/// Parse `char/ContractBids`, keyed by bid id.
pub fn parse_contract_bids(result: &Element) -> Result<BTreeMap<i64, ContractBid>, Error> {
    let mut bids = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let bid = ContractBid::try_from(row)?;
        bids.insert(bid.id, bid);
    }
    Ok(bids)
}

/// Parse `char/ContractItems`, keyed by record id.
pub fn parse_contract_items(result: &Element) -> Result<BTreeMap<i64, ContractItem>, Error> {
    let mut items = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let item = ContractItem::try_from(row)?;
        items.insert(item.id, item);
    }
    Ok(items)
}
