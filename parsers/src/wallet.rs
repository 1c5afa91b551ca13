// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Wallet balance, journal and market transactions.

use crate::common::Named;
use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{rows, rowset};

/// The character’s wallet, as returned by `char/AccountBalance`.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletInfo {
    /// How much ISK is in the wallet.
    pub balance: f64,

    /// The id of the account.
    pub id: i64,

    /// The account key, 1000 for characters.
    pub key: i64,
}

impl TryFrom<&Element> for WalletInfo {
    type Error = Error;

    fn try_from(result: &Element) -> Result<WalletInfo, Error> {
        let row = match rows(rowset(result)?).next() {
            Some(row) => row,
            None => return Err(Error::MissingElement("row")),
        };
        Ok(WalletInfo {
            balance: get_attr!(row, "balance", Required),
            id: get_attr!(row, "accountID", Required),
            key: get_attr!(row, "accountKey", Required),
        })
    }
}

/// Tax withheld on a journal entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tax {
    /// Who received the tax.
    pub taxer_id: Option<i64>,

    /// How much was taxed.
    pub amount: Option<f64>,
}

/// A single line of the wallet journal.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    /// When this happened.
    pub timestamp: Timestamp,

    /// The unique reference id of this entry.
    pub id: i64,

    /// What kind of transfer this is.
    pub type_id: i64,

    /// The party the ISK came from.
    pub party_1: Named,

    /// The party the ISK went to.
    pub party_2: Named,

    /// Extra data whose meaning depends on [`type_id`](#structfield.type_id).
    pub arg: Named,

    /// How much ISK changed hands, negative for outgoing transfers.
    pub amount: f64,

    /// The balance after this entry.
    pub balance: f64,

    /// Free text attached to the transfer.
    pub reason: String,

    /// Tax withheld, for bounties and mission rewards.
    pub tax: Tax,
}

impl TryFrom<&Element> for JournalEntry {
    type Error = Error;

    fn try_from(row: &Element) -> Result<JournalEntry, Error> {
        Ok(JournalEntry {
            timestamp: get_attr!(row, "date", Required),
            id: get_attr!(row, "refID", Required),
            type_id: get_attr!(row, "refTypeID", Required),
            party_1: Named::from_row(row, "ownerID1", "ownerName1")?,
            party_2: Named::from_row(row, "ownerID2", "ownerName2")?,
            arg: Named::from_row(row, "argID1", "argName1")?,
            amount: get_attr!(row, "amount", Required),
            balance: get_attr!(row, "balance", Required),
            reason: get_attr!(row, "reason", Required),
            tax: Tax {
                taxer_id: get_attr!(row, "taxReceiverID", OptionEmpty),
                amount: get_attr!(row, "taxAmount", OptionEmpty),
            },
        })
    }
}

generate_attribute!(
    /// Whether the character bought or sold.
    TransactionType, "transaction type", {
        /// Bought from the market.
        Buy => "buy",

        /// Sold on the market.
        Sell => "sell",
    }
);

generate_attribute!(
    /// On whose behalf a transaction was made.
    TransactionFor, "transaction beneficiary", {
        /// For the character.
        Personal => "personal",

        /// For the character’s corporation.
        Corporation => "corporation",
    }
);

/// A single market transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletTransaction {
    /// When this happened.
    pub timestamp: Timestamp,

    /// The unique id of this transaction.
    pub id: i64,

    /// The journal entry recording the transfer of ISK.
    pub journal_id: i64,

    /// How many items were exchanged.
    pub quantity: i64,

    /// The item type exchanged.
    pub type_: Named,

    /// The unit price.
    pub price: f64,

    /// The other party.
    pub client: Named,

    /// Where it happened.
    pub station: Named,

    /// Whether the character bought or sold.
    pub action: TransactionType,

    /// On whose behalf.
    pub for_: TransactionFor,
}

impl TryFrom<&Element> for WalletTransaction {
    type Error = Error;

    fn try_from(row: &Element) -> Result<WalletTransaction, Error> {
        Ok(WalletTransaction {
            timestamp: get_attr!(row, "transactionDateTime", Required),
            id: get_attr!(row, "transactionID", Required),
            journal_id: get_attr!(row, "journalTransactionID", Required),
            quantity: get_attr!(row, "quantity", Required),
            type_: Named::from_row(row, "typeID", "typeName")?,
            price: get_attr!(row, "price", Required),
            client: Named::from_row(row, "clientID", "clientName")?,
            station: Named::from_row(row, "stationID", "stationName")?,
            action: get_attr!(row, "transactionType", Required),
            for_: get_attr!(row, "transactionFor", Required),
        })
    }
}

/// Parse `char/WalletJournal`, ordered by reference id.
pub fn parse_wallet_journal(result: &Element) -> Result<Vec<JournalEntry>, Error> {
    let mut entries = Vec::new();
    for row in rows(rowset(result)?) {
        entries.push(JournalEntry::try_from(row)?);
    }
    entries.sort_by_key(|entry| entry.id);
    Ok(entries)
}

/// Parse `char/WalletTransactions`, in document order.
pub fn parse_wallet_transactions(result: &Element) -> Result<Vec<WalletTransaction>, Error> {
    let mut transactions = Vec::new();
    for row in rows(rowset(result)?) {
        transactions.push(WalletTransaction::try_from(row)?);
    }
    Ok(transactions)
}
