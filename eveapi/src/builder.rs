// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::time::Duration;

use crate::transport::{HttpTransport, Transport, DEFAULT_BASE_URL};
use crate::{Api, Error};

/// Configures an [`Api`] handle.
#[derive(Debug, Clone)]
pub struct ApiBuilder {
    key_id: String,
    vcode: String,
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ApiBuilder {
    /// Start configuring a handle for the API key `key_id`, with its
    /// verification code.
    pub fn new<K: Into<String>, V: Into<String>>(key_id: K, vcode: V) -> Self {
        ApiBuilder {
            key_id: key_id.into(),
            vcode: vcode.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: format!("eveapi-rs/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
        }
    }

    /// Talk to another server, such as the test one.
    pub fn set_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Identify as something else in the `User-Agent` header.
    pub fn set_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Give up on a request after `timeout`.  By default there is no limit.
    pub fn set_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the handle, over HTTPS.
    pub fn build(self) -> Result<Api<HttpTransport>, Error> {
        let transport = HttpTransport::new(&self.base_url, &self.user_agent, self.timeout)?;
        Ok(self.build_with(transport))
    }

    /// Build the handle over another transport.  The base URL, user agent
    /// and timeout are then up to `transport`.
    pub fn build_with<T: Transport>(self, transport: T) -> Api<T> {
        Api::new(transport, self.key_id, self.vcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let api = ApiBuilder::new("123", "abc")
            .set_base_url("https://api.testeveonline.com")
            .set_user_agent("test")
            .set_timeout(Duration::from_secs(10))
            .build()
            .unwrap();
        assert_eq!(api.key_id(), "123");
    }
}
