// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::endpoint::{Endpoint, Params};
use crate::error::ApiError;
use crate::parsers::{Document, Element, Timestamp};
use crate::transport::{HttpTransport, Transport};
use crate::{parsers, Char, Error};

/// An authenticated handle on the API, shared by every character of the
/// key.
#[derive(Debug)]
pub struct Api<T: Transport = HttpTransport> {
    transport: T,
    key_id: String,
    vcode: String,
}

impl<T: Transport> Api<T> {
    /// Wrap `transport` with the credentials of an API key.
    pub fn new(transport: T, key_id: String, vcode: String) -> Api<T> {
        Api {
            transport,
            key_id,
            vcode,
        }
    }

    /// The id of the API key in use.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// The transport requests go through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The calls about a single character of this key.
    pub fn character(&self, char_id: i64) -> Char<'_, T> {
        Char::new(self, char_id)
    }

    /// Call `endpoint`, and parse the envelope of its response.
    ///
    /// Parameters are checked before any request is sent.
    pub async fn call(&self, endpoint: &Endpoint, params: &Params) -> Result<Document, Error> {
        let mut query = params.to_wire(endpoint)?;
        debug!(
            "Calling {} with {:?}",
            endpoint.path,
            query.iter().map(|(name, _)| *name).collect::<Vec<_>>()
        );
        query.push(("keyID", self.key_id.clone()));
        query.push(("vCode", self.vcode.clone()));

        let body = match self.transport.request(endpoint.path, &query).await {
            Ok(body) => body,
            Err(Error::Api(e)) => {
                warn!("{} refused: {}", endpoint.path, e);
                return Err(Error::Api(e));
            }
            Err(e) => return Err(e),
        };
        trace!("{} answered: {}", endpoint.path, body);

        parse_response(&body).inspect_err(|e| match e {
            Error::Api(e) => warn!("{} refused: {}", endpoint.path, e),
            e => debug!("{} answered unexpectedly: {}", endpoint.path, e),
        })
    }
}

/// Extract the `<error/>` of a body, if it carries one.
pub(crate) fn api_error(body: &str) -> Option<ApiError> {
    let root: Element = body.parse().ok()?;
    let error = root.get_child("error")?;
    let code: u32 = error.attr("code")?.parse().ok()?;
    Some(ApiError {
        code,
        message: error.text().trim().to_owned(),
    })
}

fn timestamp(root: &Element, name: &'static str) -> Result<Timestamp, parsers::Error> {
    let text = match root.child_text(name) {
        Some(text) => text,
        None => return Err(parsers::Error::MissingElement(name)),
    };
    text.trim()
        .parse()
        .map_err(|e| parsers::Error::invalid_value(name, e))
}

/// Parse the `<eveapi/>` wrapper around every response.
pub fn parse_response(body: &str) -> Result<Document, Error> {
    let mut root: Element = body.parse()?;
    if !root.is("eveapi") {
        return Err(parsers::Error::Other("This is not an eveapi element.").into());
    }
    if let Some(error) = root.get_child("error") {
        let code = match error.attr("code") {
            Some(code) => code,
            None => return Err(parsers::Error::MissingAttribute("code").into()),
        };
        let code: u32 = code
            .parse()
            .map_err(|e| parsers::Error::invalid_value("code", e))?;
        return Err(Error::Api(ApiError {
            code,
            message: error.text().trim().to_owned(),
        }));
    }
    let generated_at = timestamp(&root, "currentTime")?;
    let expires_at = timestamp(&root, "cachedUntil")?;
    let result = match root.remove_child("result") {
        Some(result) => result,
        None => return Err(parsers::Error::MissingElement("result").into()),
    };
    Ok(Document {
        result,
        generated_at,
        expires_at,
    })
}
