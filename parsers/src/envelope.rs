// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The envelope every normalised response travels in.

use crate::date::Timestamp;
use crate::dom::Element;
use crate::error::Error;

/// A normalised result along with the cache metadata the server attached
/// to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The normalised payload.
    pub result: T,

    /// When the server generated this response.
    pub generated_at: Timestamp,

    /// Until when the server will keep serving this same response.
    pub expires_at: Timestamp,
}

impl<T> ApiResult<T> {
    /// Wrap a result with the two timestamps of its response.
    pub fn new(result: T, generated_at: Timestamp, expires_at: Timestamp) -> ApiResult<T> {
        ApiResult {
            result,
            generated_at,
            expires_at,
        }
    }

    /// Transform the payload, keeping the timestamps of the response it
    /// came from.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        ApiResult {
            result: f(self.result),
            generated_at: self.generated_at,
            expires_at: self.expires_at,
        }
    }
}

/// A response as handed over by the transport: the `<result/>` element and
/// the two timestamps from around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The `<result/>` element.
    pub result: Element,

    /// Taken verbatim from `<currentTime/>`.
    pub generated_at: Timestamp,

    /// Taken verbatim from `<cachedUntil/>`.
    pub expires_at: Timestamp,
}

impl Document {
    /// Run the extractor of `T` over this document.
    pub fn normalize<T>(&self) -> Result<ApiResult<T>, Error>
    where
        T: for<'a> TryFrom<&'a Element, Error = Error>,
    {
        self.normalize_with(|result| T::try_from(result))
    }

    /// Run an arbitrary extractor over this document.
    ///
    /// Fails without calling `extract` if the document doesn’t hold a
    /// `<result/>` element.
    pub fn normalize_with<T, F>(&self, extract: F) -> Result<ApiResult<T>, Error>
    where
        F: FnOnce(&Element) -> Result<T, Error>,
    {
        let result = &self.result;
        check_self!(result, "result");
        let result = extract(result)?;
        Ok(ApiResult::new(result, self.generated_at, self.expires_at))
    }
}
