// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Notifications and contact notifications.

use std::collections::BTreeMap;

use crate::common::Named;
use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;
use crate::keyval::{parse_keyval, KeyValue};
use crate::util::{parse_id_list, rows, rowset};

/// The header of a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationHeader {
    /// The unique id of this notification.
    pub id: i64,

    /// What kind of notification this is.
    pub type_id: i64,

    /// Who sent it.
    pub sender_id: i64,

    /// When it was sent.
    pub timestamp: Timestamp,

    /// Whether it was read already.
    pub read: bool,
}

impl TryFrom<&Element> for NotificationHeader {
    type Error = Error;

    fn try_from(row: &Element) -> Result<NotificationHeader, Error> {
        Ok(NotificationHeader {
            id: get_attr!(row, "notificationID", Required),
            type_id: get_attr!(row, "typeID", Required),
            sender_id: get_attr!(row, "senderID", Required),
            timestamp: get_attr!(row, "sentDate", Required),
            read: get_attr!(row, "read", Bool),
        })
    }
}

/// The body of a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationText {
    /// The id of the notification.
    pub id: i64,

    /// The values of the body, whose keys depend on the type of the
    /// notification.
    pub data: BTreeMap<String, KeyValue>,
}

impl TryFrom<&Element> for NotificationText {
    type Error = Error;

    fn try_from(row: &Element) -> Result<NotificationText, Error> {
        Ok(NotificationText {
            id: get_attr!(row, "notificationID", Required),
            data: parse_keyval(&row.text()),
        })
    }
}

/// Someone added the character as a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactNotification {
    /// The unique id of this notification.
    pub id: i64,

    /// Who added the character.
    pub sender: Named,

    /// When.
    pub timestamp: Timestamp,

    /// The standing level and message attached.
    pub data: BTreeMap<String, KeyValue>,
}

impl TryFrom<&Element> for ContactNotification {
    type Error = Error;

    fn try_from(row: &Element) -> Result<ContactNotification, Error> {
        let data: String = get_attr!(row, "messageData", Required);
        Ok(ContactNotification {
            id: get_attr!(row, "notificationID", Required),
            sender: Named::from_row(row, "senderID", "senderName")?,
            timestamp: get_attr!(row, "sentDate", Required),
            data: parse_keyval(&data),
        })
    }
}

/// Parse `char/Notifications`, keyed by notification id.
pub fn parse_notifications(result: &Element) -> Result<BTreeMap<i64, NotificationHeader>, Error> {
    let mut notifications = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let header = NotificationHeader::try_from(row)?;
        notifications.insert(header.id, header);
    }
    Ok(notifications)
}

/// Parse `char/NotificationTexts`.
///
/// Every id the server listed in `<missingIDs/>` maps to `None`, so each
/// requested id has an entry.
pub fn parse_notification_texts(
    result: &Element,
) -> Result<BTreeMap<i64, Option<NotificationText>>, Error> {
    let mut texts = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let text = NotificationText::try_from(row)?;
        texts.insert(text.id, Some(text));
    }
    if let Some(missing) = result.child_text("missingIDs") {
        for id in parse_id_list("missingIDs", &missing)? {
            texts.insert(id, None);
        }
    }
    Ok(texts)
}

/// Parse `char/ContactNotifications`, keyed by notification id.
pub fn parse_contact_notifications(
    result: &Element,
) -> Result<BTreeMap<i64, ContactNotification>, Error> {
    let mut notifications = BTreeMap::new();
    for row in rows(rowset(result)?) {
        let notification = ContactNotification::try_from(row)?;
        notifications.insert(notification.id, notification);
    }
    Ok(notifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let elem: Element = "<result><rowset name='notifications' key='notificationID'>
            <row notificationID='304084087' typeID='16' senderID='797400947' sentDate='2010-04-15 16:43:00' read='0'/>
            <row notificationID='303795523' typeID='16' senderID='671216635' sentDate='2010-04-14 23:50:00' read='1'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let headers = parse_notifications(&elem).unwrap();
        assert_eq!(headers.len(), 2);
        assert!(!headers[&304084087].read);
        assert!(headers[&303795523].read);
        assert_eq!(headers[&303795523].sender_id, 671216635);
    }

    #[test]
    fn test_texts_with_missing() {
        let elem: Element = "<result>
            <rowset name='notifications' key='notificationID' columns='notificationID'>
                <row notificationID='374044083'><![CDATA[
isHouseWarmingGift: 1
shipTypeID: 606
]]></row>
                <row notificationID='374067406'><![CDATA[
againstID: 673381830
cost: null
declaredByID: 98105019
delayHours: 24
hostileState: 0
]]></row>
            </rowset>
            <missingIDs>374106507,374106508</missingIDs>
        </result>"
            .parse()
            .unwrap();
        let texts = parse_notification_texts(&elem).unwrap();
        assert_eq!(
            texts.keys().copied().collect::<Vec<_>>(),
            vec![374044083, 374067406, 374106507, 374106508]
        );
        assert_eq!(texts[&374106507], None);
        assert_eq!(texts[&374106508], None);

        let gift = texts[&374044083].as_ref().unwrap();
        assert_eq!(gift.data["shipTypeID"], KeyValue::Int(606));
        assert_eq!(gift.data["isHouseWarmingGift"], KeyValue::Int(1));

        let war = texts[&374067406].as_ref().unwrap();
        assert_eq!(war.data.len(), 5);
        assert_eq!(war.data["cost"], KeyValue::Null);
    }

    #[test]
    fn test_texts_complete() {
        let elem: Element = "<result><rowset name='notifications'>
                <row notificationID='1'>a: 1</row>
            </rowset></result>"
            .parse()
            .unwrap();
        let texts = parse_notification_texts(&elem).unwrap();
        assert_eq!(texts.len(), 1);
        assert!(texts[&1].is_some());
    }

    #[test]
    fn test_contact_notifications() {
        let elem: Element = "<result><rowset name='contactNotifications' key='notificationID'>
            <row notificationID='308734131' senderID='797400947' senderName='CCP Garthagk'
                 sentDate='2010-05-29 23:04:00' messageData='level: 10&#10;message: Hi, I want to social network with you!&#10;'/>
        </rowset></result>"
            .parse()
            .unwrap();
        let notifications = parse_contact_notifications(&elem).unwrap();
        let notification = &notifications[&308734131];
        assert_eq!(notification.sender.name, "CCP Garthagk");
        assert_eq!(notification.data["level"], KeyValue::Int(10));
        assert_eq!(
            notification.data["message"],
            KeyValue::Text(String::from("Hi, I want to social network with you!"))
        );
    }
}
