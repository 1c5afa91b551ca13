// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A client for the character endpoints of the EVE Online XML API.
//!
//! Configure an [`Api`] with an [`ApiBuilder`], then call the endpoints
//! about one of the characters of the key through [`Api::character`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), eveapi::Error> {
//! let api = eveapi::ApiBuilder::new("123456", "verification code").build()?;
//! let balance = api.character(90000001).wallet_balance().await?;
//! println!("{} ISK, until {}", balance.result, balance.expires_at);
//! # Ok(())
//! # }
//! ```

#![deny(bare_trait_objects)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use eveapi_parsers as parsers;

#[macro_use]
extern crate log;

pub mod api;
pub mod builder;
pub mod char;
pub mod endpoint;
pub mod error;
pub mod transport;

pub use crate::api::Api;
pub use crate::builder::ApiBuilder;
pub use crate::char::Char;
pub use crate::error::{ApiError, Error};
pub use crate::parsers::ApiResult;
pub use crate::transport::{HttpTransport, Transport};
