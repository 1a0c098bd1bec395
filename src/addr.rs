// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Endpoint address data structure and parsing
//!
//! One address is one endpoint in a hop chain, written as `[user@]host[:port]`.
//! The port defaults to 22 when the raw token carries none.

use std::fmt;

use crate::error::Error;

/// Default port when a raw token carries none
pub const DEFAULT_PORT: u16 = 22;

/// A single endpoint in a hop chain
///
/// Parsed from the `[user@]host[:port]` form shared by hop tokens and the
/// manual destination fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    /// Login name, present only if the raw token contained `@`
    pub user: Option<String>,
    /// Hostname or IP address, never empty after a successful parse
    pub host: String,
    /// Port, 22 unless the raw token said otherwise
    pub port: u16,
}

impl Address {
    /// Create an address from already-validated parts
    pub fn new(host: impl Into<String>, user: Option<String>, port: u16) -> Self {
        Self {
            user,
            host: host.into(),
            port,
        }
    }

    /// Parse one raw `[user@]host[:port]` token
    ///
    /// Splits on the first `@` (anything after it is the host-port segment,
    /// so a token with several `@` keeps the later ones inside the host) and
    /// on the last `:`. Fails with [`Error::MalformedAddress`] when the host
    /// comes out empty or the port text is not a positive integer.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let (user, host_port) = match raw.split_once('@') {
            Some((user, rest)) => (Some(user.to_string()), rest),
            None => (None, raw),
        };

        let (host, port) = match host_port.rsplit_once(':') {
            Some((host, port_text)) => (host, parse_port(raw, port_text)?),
            None => (host_port, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(Error::MalformedAddress {
                token: raw.to_string(),
                reason: "empty host".to_string(),
            });
        }

        Ok(Self {
            user,
            host: host.to_string(),
            port,
        })
    }

    /// Compact `[user@]host[:port]` form, eliding the default port
    ///
    /// This is the form relay lists and log lines use; a round trip through
    /// [`Address::parse`] recovers an equal address.
    pub fn to_connection_string(&self) -> String {
        match (&self.user, self.port) {
            (Some(user), DEFAULT_PORT) => format!("{}@{}", user, self.host),
            (Some(user), port) => format!("{}@{}:{}", user, self.host, port),
            (None, DEFAULT_PORT) => self.host.clone(),
            (None, port) => format!("{}:{}", self.host, port),
        }
    }

    /// `[user@]host` without the port, for the argument-vector target position
    ///
    /// The port travels separately there, as a `-P` flag when it is not 22.
    pub fn to_target_string(&self) -> String {
        match &self.user {
            Some(user) => format!("{}@{}", user, self.host),
            None => self.host.clone(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Parse port text from `token`, rejecting zero and anything non-numeric
pub(crate) fn parse_port(token: &str, text: &str) -> Result<u16, Error> {
    let malformed = |reason: String| Error::MalformedAddress {
        token: token.to_string(),
        reason,
    };

    if text.is_empty() {
        return Err(malformed("empty port".to_string()));
    }

    let port = text
        .parse::<u16>()
        .map_err(|_| malformed(format!("invalid port '{text}'")))?;
    if port == 0 {
        return Err(malformed("port cannot be zero".to_string()));
    }

    Ok(port)
}
