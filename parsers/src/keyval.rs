// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Free-form `key: value` blobs, as found in notification texts and
//! contact notifications.

use std::collections::BTreeMap;

/// A single value of a key/value blob.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue {
    /// An empty value, or an explicit `~`/`null`.
    Null,

    /// A value which parses as an integer.
    Int(i64),

    /// A value which parses as a decimal number.
    Float(f64),

    /// `yes`/`true` or `no`/`false`.
    Bool(bool),

    /// Anything else, verbatim.
    Text(String),
}

impl KeyValue {
    fn parse(key: &str, value: &str) -> KeyValue {
        // Names are free text, even when they look like numbers.
        if key.contains("Name") {
            return KeyValue::Text(value.to_owned());
        }
        match value {
            "" | "~" | "null" => return KeyValue::Null,
            "yes" | "true" => return KeyValue::Bool(true),
            "no" | "false" => return KeyValue::Bool(false),
            _ => (),
        }
        if let Ok(int) = value.parse() {
            return KeyValue::Int(int);
        }
        if value.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(float) = value.parse() {
                return KeyValue::Float(float);
            }
        }
        KeyValue::Text(value.to_owned())
    }
}

/// Parse a newline separated list of `key: value` pairs.
///
/// Lines without a colon are ignored, a repeated key keeps its last value.
pub fn parse_keyval(data: &str) -> BTreeMap<String, KeyValue> {
    let mut values = BTreeMap::new();
    for line in data.lines() {
        let Some((key, value)) = line.split_once(':') else {
            #[cfg(feature = "log")]
            if !line.trim().is_empty() {
                log::trace!("Ignoring key/value line without a key: {:?}", line);
            }
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = KeyValue::parse(key, value.trim());
        values.insert(key.to_owned(), value);
    }
    values
}
