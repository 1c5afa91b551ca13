// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Coercion macros shared by every extractor.
#[macro_use]
pub(crate) mod macros;


use crate::dom::Element;
use crate::error::Error;

/// The first rowset directly under `elem`, for endpoints returning one.
pub(crate) fn rowset(elem: &Element) -> Result<&Element, Error> {
    elem.get_child("rowset")
        .ok_or(Error::MissingRowset("rowset"))
}

/// The rowset directly under `elem` whose `name` attribute is `name`.
pub(crate) fn named_rowset<'a>(elem: &'a Element, name: &'static str) -> Result<&'a Element, Error> {
    find_named_rowset(elem, name).ok_or(Error::MissingRowset(name))
}

/// Like [`named_rowset`], for rowsets the server may leave out.
pub(crate) fn find_named_rowset<'a>(elem: &'a Element, name: &str) -> Option<&'a Element> {
    elem.children_named("rowset")
        .find(|rowset| rowset.attr("name") == Some(name))
}

/// The rows of a rowset, in document order.
pub(crate) fn rows(rowset: &Element) -> impl Iterator<Item = &Element> {
    rowset.children_named("row")
}

/// Parse a comma separated list of ids, as used for recipients and
/// missing-ids side channels.
pub(crate) fn parse_id_list(field: &'static str, list: &str) -> Result<Vec<i64>, Error> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.parse().map_err(|e| Error::invalid_value(field, e)))
        .collect()
}
