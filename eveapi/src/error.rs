// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use reqwest::StatusCode;
use std::error::Error as StdError;
use std::fmt;

use crate::parsers;

/// Top-level error type
#[derive(Debug)]
pub enum Error {
    /// The request couldn’t be sent or its response couldn’t be read
    Http(reqwest::Error),
    /// The server answered with an HTTP error and no API error in the body
    Status(StatusCode),
    /// The API refused the request, with one of its documented codes
    Api(ApiError),
    /// The response doesn’t have the shape documented for the endpoint
    Malformed(parsers::Error),
    /// A parameter required by the endpoint wasn’t given, carries its wire
    /// name
    MissingParameter(&'static str),
}

impl Error {
    /// Whether the server sent something this crate can’t make sense of,
    /// as opposed to failing to answer or refusing the request.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Malformed(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Http(e) => write!(fmt, "HTTP error: {}", e),
            Error::Status(status) => write!(fmt, "unexpected HTTP status: {}", status),
            Error::Api(e) => write!(fmt, "API error: {}", e),
            Error::Malformed(e) => write!(fmt, "malformed response: {}", e),
            Error::MissingParameter(name) => write!(fmt, "missing parameter '{}'", name),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Api(e) => Some(e),
            Error::Malformed(e) => Some(e),
            Error::Status(_) | Error::MissingParameter(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<ApiError> for Error {
    fn from(e: ApiError) -> Self {
        Error::Api(e)
    }
}

impl From<parsers::Error> for Error {
    fn from(e: parsers::Error) -> Self {
        Error::Malformed(e)
    }
}

/// An error declared by the API in an `<error/>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric code, such as 203 for an authentication failure.
    pub code: u32,
    /// The message attached by the server.
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} ({})", self.message, self.code)
    }
}

impl StdError for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed() {
        let error = Error::from(parsers::Error::MissingRowset("rowset"));
        assert!(error.is_malformed());
        assert_eq!(
            error.to_string(),
            "malformed response: required rowset 'rowset' missing"
        );

        let error = Error::from(ApiError {
            code: 203,
            message: String::from("Authentication failure."),
        });
        assert!(!error.is_malformed());
        assert_eq!(error.to_string(), "API error: Authentication failure. (203)");
        assert!(!Error::MissingParameter("IDs").is_malformed());
    }
}
