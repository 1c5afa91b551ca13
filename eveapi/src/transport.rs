// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `Transport` fetches the raw body of an API call

use std::time::Duration;

use crate::api::api_error;
use crate::Error;

/// Trait called to fetch the body of a call, given its path and its
/// parameters already renamed to their wire names
pub trait Transport: Send + Sync {
    /// Fetch `path` (such as `char/AssetList`) with the given query
    /// parameters, and return the body of the response
    fn request(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> impl core::future::Future<Output = Result<String, Error>> + Send;
}

/// Default API server.
pub const DEFAULT_BASE_URL: &str = "https://api.eveonline.com";

/// A [`Transport`] sending GET requests over HTTPS
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport towards `base_url`
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<HttpTransport, Error> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(HttpTransport {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.xml.aspx", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn request(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, Error> {
        let response = self.client.get(self.url(path)).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // Authentication failures come with a 403 and an <error/> body.
            return Err(match api_error(&body) {
                Some(e) => Error::Api(e),
                None => Error::Status(status),
            });
        }
        Ok(body)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let transport = HttpTransport::new("https://api.example.org/", "test", None).unwrap();
        assert_eq!(
            transport.url("char/AssetList"),
            "https://api.example.org/char/AssetList.xml.aspx"
        );
    }
}
