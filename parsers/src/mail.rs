// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! EVE mail: headers, bodies and mailing lists.

use std::collections::BTreeMap;

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::util::{parse_id_list, rows, rowset};

/// Who a message was sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    /// A corporation or alliance.
    pub org_id: Option<i64>,

    /// Individual characters.
    pub char_ids: Option<Vec<i64>>,

    /// Mailing lists.
    pub list_ids: Option<Vec<i64>>,
}

/// The header of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    /// The unique id of this message.
    pub id: i64,

    /// Who sent it.
    pub sender_id: i64,

    /// When it was sent.
    pub timestamp: Timestamp,

    /// Its subject.
    pub title: String,

    /// Who it was sent to.
    pub to: Recipients,
}

fn optional_id_list(row: &Element, attr: &'static str) -> Result<Option<Vec<i64>>, Error> {
    match row.attr(attr) {
        Some("") | None => Ok(None),
        Some(list) => parse_id_list(attr, list).map(Some),
    }
}

impl TryFrom<&Element> for MessageHeader {
    type Error = Error;

    fn try_from(row: &Element) -> Result<MessageHeader, Error> {
        Ok(MessageHeader {
            id: get_attr!(row, "messageID", Required),
            sender_id: get_attr!(row, "senderID", Required),
            timestamp: get_attr!(row, "sentDate", Required),
            title: get_attr!(row, "title", Required),
            to: Recipients {
                org_id: get_attr!(row, "toCorpOrAllianceID", OptionEmpty),
                char_ids: optional_id_list(row, "toCharacterIDs")?,
                list_ids: optional_id_list(row, "toListID")?,
            },
        })
    }
}

/// Parse `char/MailMessages`, in document order.
pub fn parse_messages(result: &Element) -> Result<Vec<MessageHeader>, Error> {
    let mut messages = Vec::new();
    for row in rows(rowset(result)?) {
        messages.push(MessageHeader::try_from(row)?);
    }
    Ok(messages)
}

/// Parse `char/MailBodies`.
///
/// Every id listed in `<missingMessageIDs/>` maps to `None`, a delivered but
/// empty body is `Some("")`.
pub fn parse_message_bodies(result: &Element) -> Result<BTreeMap<i64, Option<String>>, Error> {
    let mut bodies = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let id: i64 = get_attr!(row, "messageID", Required);
        bodies.insert(id, Some(row.text()));
    }
    if let Some(missing) = result.child_text("missingMessageIDs") {
        for id in parse_id_list("missingMessageIDs", &missing)? {
            bodies.insert(id, None);
        }
    }
    Ok(bodies)
}

/// Parse `char/MailingLists`, mapping list ids to their display name.
pub fn parse_mailing_lists(result: &Element) -> Result<BTreeMap<i64, String>, Error> {
    let mut lists = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let id: i64 = get_attr!(row, "listID", Required);
        lists.insert(id, get_attr!(row, "displayName", Required));
    }
    Ok(lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let elem: Element = "<result><rowset name='messages' key='messageID'>
            <row messageID='290285276' senderID='999999999' sentDate='2009-12-01 01:04:00'
                 title='Corp mail' toCorpOrAllianceID='999999999' toCharacterIDs='' toListID=''/>
            <row messageID='290285275' senderID='999999999' sentDate='2009-12-01 01:04:00'
                 title='Personal mail' toCorpOrAllianceID='' toCharacterIDs='999999999,888888888' toListID=''/>
            <row messageID='290285274' senderID='999999999' sentDate='2009-12-01 01:04:00'
                 title='Mailing list' toCorpOrAllianceID='' toCharacterIDs='' toListID='128250439'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let messages = parse_messages(&elem).unwrap();
        assert_eq!(
            messages.iter().map(|message| message.id).collect::<Vec<_>>(),
            vec![290285276, 290285275, 290285274]
        );
        assert_eq!(
            messages[0].to,
            Recipients {
                org_id: Some(999999999),
                char_ids: None,
                list_ids: None,
            }
        );
        assert_eq!(messages[1].to.char_ids, Some(vec![999999999, 888888888]));
        assert_eq!(messages[1].to.org_id, None);
        assert_eq!(messages[2].to.list_ids, Some(vec![128250439]));
        assert_eq!(messages[2].title, "Mailing list");
    }

    #[test]
    fn test_bodies_with_missing() {
        let elem: Element = "<result>
            <rowset name='messages' key='messageID' columns='messageID'>
                <row messageID='297023723'><![CDATA[Hi.<br><br>This is a message.<br><br>]]></row>
            </rowset>
            <missingMessageIDs>297023726,297023727</missingMessageIDs>
        </result>"
            .parse()
            .unwrap();
        let bodies = parse_message_bodies(&elem).unwrap();
        assert_eq!(
            bodies.keys().copied().collect::<Vec<_>>(),
            vec![297023723, 297023726, 297023727]
        );
        assert_eq!(
            bodies[&297023723].as_deref(),
            Some("Hi.<br><br>This is a message.<br><br>")
        );
        assert_eq!(bodies[&297023726], None);
        assert_eq!(bodies[&297023727], None);
    }

    #[test]
    fn test_empty_body() {
        let elem: Element = "<result>
            <rowset name='messages' key='messageID' columns='messageID'>
                <row messageID='1'/>
                <row messageID='2'></row>
            </rowset>
        </result>"
            .parse()
            .unwrap();
        let bodies = parse_message_bodies(&elem).unwrap();
        assert_eq!(bodies[&1].as_deref(), Some(""));
        assert_eq!(bodies[&2].as_deref(), Some(""));
    }

    #[test]
    fn test_mailing_lists() {
        let elem: Element = "<result><rowset name='mailingLists' key='listID' columns='listID,displayName'>
            <row listID='128250439' displayName='EVETycoonMail'/>
            <row listID='141157801' displayName='Exploration Wormholes'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let lists = parse_mailing_lists(&elem).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[&141157801], "Exploration Wormholes");
    }

    #[test]
    fn test_bad_recipients() {
        let elem: Element = "<result><rowset name='messages'>
            <row messageID='1' senderID='1' sentDate='2009-12-01 01:04:00' title=''
                 toCorpOrAllianceID='' toCharacterIDs='1,two' toListID=''/>
        </rowset></result>"
            .parse()
            .unwrap();
        match parse_messages(&elem) {
            Err(Error::InvalidValue { field: "toCharacterIDs", .. }) => (),
            other => panic!("unexpected {:?}", other),
        }
    }
}
