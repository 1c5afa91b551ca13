// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides the error type of this crate.
//!
//! Every variant means the same thing to a caller: the server answered, but
//! not with the shape this crate expects for the endpoint.

use core::{error::Error as StdError, fmt};

/// Error variants generated while normalising a response.
#[derive(Debug)]
pub enum Error {
    /// The body is not well-formed XML.
    Xml(quick_xml::Error),

    /// A rowset the endpoint always returns is absent.
    MissingRowset(&'static str),

    /// An unexpected rowset appeared in a closed set of rowsets.
    UnexpectedRowset(String),

    /// A child element documented as required is absent.
    MissingElement(&'static str),

    /// An attribute documented as required is absent.
    MissingAttribute(&'static str),

    /// A field is present but its value could not be parsed.
    InvalidValue {
        /// The wire name of the offending field.
        field: &'static str,

        /// Why parsing failed.
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    /// Generic, unspecified other error.
    Other(&'static str),
}

impl Error {
    /// Convenience function to create an [`Self::InvalidValue`] variant,
    /// usable as argument to [`Result::map_err`] once `field` is bound.
    pub fn invalid_value<E: StdError + Send + Sync + 'static>(field: &'static str, e: E) -> Self {
        Error::InvalidValue {
            field,
            source: Box::new(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Xml(e) => write!(fmt, "XML error: {}", e),
            Error::MissingRowset(name) => write!(fmt, "required rowset '{}' missing", name),
            Error::UnexpectedRowset(name) => write!(fmt, "unexpected rowset '{}'", name),
            Error::MissingElement(name) => write!(fmt, "required element '{}' missing", name),
            Error::MissingAttribute(name) => write!(fmt, "required attribute '{}' missing", name),
            Error::InvalidValue { field, source } => {
                write!(fmt, "invalid value for '{}': {}", field, source)
            }
            Error::Other(msg) => fmt.write_str(msg),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Xml(e) => Some(e),
            Error::InvalidValue { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(other: quick_xml::Error) -> Error {
        Error::Xml(other)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(other: quick_xml::events::attributes::AttrError) -> Error {
        Error::Xml(other.into())
    }
}

/// Returned when an enumerated field carries a value outside of its set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    kind: &'static str,
    value: String,
}

impl UnknownValue {
    pub(crate) fn new(kind: &'static str, value: &str) -> UnknownValue {
        UnknownValue {
            kind,
            value: value.to_owned(),
        }
    }

    /// The value which was not recognised.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "unknown {} '{}'", self.kind, self.value)
    }
}

impl StdError for UnknownValue {}

/// Returned when adding up server values doesn’t fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("integer overflow")
    }
}

impl StdError for Overflow {}
