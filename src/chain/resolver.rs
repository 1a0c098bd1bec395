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

//! Single-pass resolution of raw argument tokens into a hop chain

use tracing::debug;

use crate::addr::{self, Address, DEFAULT_PORT};
use crate::error::Error;

use super::{Dialect, HopChain};

/// Resolve the full argument list into a validated [`HopChain`]
///
/// One left-to-right scan: `--debug` is consumed as the debug flag, `-J`
/// consumes the token after it as a hop address (unconditionally, even if
/// that token looks like a flag), and every other token is assigned
/// positionally as destination host then destination port. The dialect only
/// matters for the single-token destination fallback, which the nested
/// grammar keeps for manual invocation outside a transport program's
/// templating.
pub fn resolve(dialect: Dialect, args: &[String]) -> Result<HopChain, Error> {
    let mut hops = Vec::new();
    let mut trailing: Vec<&str> = Vec::new();
    let mut debug = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "-J" => {
                let raw = iter.next().ok_or_else(|| Error::MissingHopArgument {
                    flag: "-J".to_string(),
                })?;
                hops.push(Address::parse(raw)?);
            }
            token => {
                if trailing.len() == 2 {
                    return Err(Error::UnexpectedArgument {
                        token: token.to_string(),
                    });
                }
                trailing.push(token);
            }
        }
    }

    if hops.is_empty() {
        return Err(Error::NoHopsProvided);
    }

    let destination = resolve_destination(dialect, &trailing)?;

    debug!(
        "resolved {} hop(s), destination {}:{}",
        hops.len(),
        destination.host,
        destination.port
    );

    Ok(HopChain::new(hops, destination, debug))
}

/// Turn the trailing non-flag tokens into the raw-stream target
fn resolve_destination(dialect: Dialect, trailing: &[&str]) -> Result<Address, Error> {
    match trailing {
        [host, port_text] => {
            // The host token is taken verbatim; only the separate port token
            // is parsed. Transport templating may hand us a bare IPv6 host
            // here and it must pass through untouched.
            if host.is_empty() {
                return Err(Error::MalformedAddress {
                    token: host.to_string(),
                    reason: "empty host".to_string(),
                });
            }
            let port = addr::parse_port(port_text, port_text)?;
            Ok(Address::new(host.to_string(), None, port))
        }
        [token] if dialect == Dialect::NestedProxy => split_destination_token(token),
        _ => Err(Error::MissingDestination),
    }
}

/// Manual-invocation fallback: one `host[:port]` token instead of two
fn split_destination_token(token: &str) -> Result<Address, Error> {
    let (host, port) = match token.rsplit_once(':') {
        Some((host, port_text)) => (host, addr::parse_port(token, port_text)?),
        None => (token, DEFAULT_PORT),
    };

    if host.is_empty() {
        return Err(Error::MalformedAddress {
            token: token.to_string(),
            reason: "empty host".to_string(),
        });
    }

    Ok(Address::new(host.to_string(), None, port))
}
