// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::BTreeMap;

use crate::dom::Element;
use crate::error::Error;
use crate::util::{find_named_rowset, named_rowset, rows};

/// Someone in one of the contact lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// The id of the contact.
    pub id: i64,

    /// Its name.
    pub name: String,

    /// The standing set towards it, from -10 to 10.
    pub standing: f64,

    /// Whether it is on the watchlist; only personal contacts have one.
    pub in_watchlist: Option<bool>,
}

impl TryFrom<&Element> for Contact {
    type Error = Error;

    fn try_from(row: &Element) -> Result<Contact, Error> {
        // This one flag is spelled out instead of being 0 or 1.
        let in_watchlist = row.attr("inWatchlist").map(|value| value == "True");
        Ok(Contact {
            id: get_attr!(row, "contactID", Required),
            name: get_attr!(row, "contactName", Required),
            standing: get_attr!(row, "standing", Required),
            in_watchlist,
        })
    }
}

/// The three contact lists of a character.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// The character’s own contacts.
    pub personal: BTreeMap<i64, Contact>,

    /// The contacts of the character’s corporation.
    pub corp: BTreeMap<i64, Contact>,

    /// The contacts of the character’s alliance.
    pub alliance: BTreeMap<i64, Contact>,
}

fn parse_contacts(rowset: Option<&Element>) -> Result<BTreeMap<i64, Contact>, Error> {
    let mut contacts = BTreeMap::new();
    if let Some(rowset) = rowset {
        for row in rows(rowset) {
            let contact = Contact::try_from(row)?;
            contacts.insert(contact.id, contact);
        }
    }
    Ok(contacts)
}

impl TryFrom<&Element> for Contacts {
    type Error = Error;

    /// The personal list is always sent, the corporation and alliance ones
    /// are left out for characters without any.
    fn try_from(result: &Element) -> Result<Contacts, Error> {
        Ok(Contacts {
            personal: parse_contacts(Some(named_rowset(result, "contactList")?))?,
            corp: parse_contacts(find_named_rowset(result, "corporateContactList"))?,
            alliance: parse_contacts(find_named_rowset(result, "allianceContactList"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contacts() {
        let elem: Element = "<result>
            <rowset name='contactList' key='contactID' columns='contactID,contactName,standing,inWatchlist'>
                <row contactID='3010913' contactName='Hirento Raikkanen' standing='0' inWatchlist='False'/>
                <row contactID='797400947' contactName='CCP Garthagk' standing='10' inWatchlist='True'/>
            </rowset>
            <rowset name='corporateContactList' key='contactID' columns='contactID,contactName,standing'>
                <row contactID='797400947' contactName='CCP Garthagk' standing='-10'/>
            </rowset>
            <rowset name='allianceContactList' key='contactID' columns='contactID,contactName,standing'/>
        </result>"
            .parse()
            .unwrap();
        let contacts = Contacts::try_from(&elem).unwrap();
        assert_eq!(contacts.personal.len(), 2);
        assert_eq!(contacts.personal[&3010913].in_watchlist, Some(false));
        assert_eq!(contacts.personal[&797400947].in_watchlist, Some(true));
        assert_eq!(
            contacts.corp[&797400947],
            Contact {
                id: 797400947,
                name: String::from("CCP Garthagk"),
                standing: -10.0,
                in_watchlist: None,
            }
        );
        assert!(contacts.alliance.is_empty());
    }

    #[test]
    fn test_only_personal() {
        let elem: Element = "<result><rowset name='contactList'/></result>".parse().unwrap();
        assert_eq!(Contacts::try_from(&elem).unwrap(), Contacts::default());

        let elem: Element = "<result/>".parse().unwrap();
        match Contacts::try_from(&elem) {
            Err(Error::MissingRowset("contactList")) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
