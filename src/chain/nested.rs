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

//! Nested-proxy chain shape
//!
//! Relay clients without native multi-hop support reach each hop through a
//! proxy sub-invocation of the same client, one level per intermediate hop.
//! The shape is built bottom-up as an explicit expression tree and only
//! rendered to text at the materialization boundary, which keeps the quoting
//! rules in one place.

use crate::addr::{Address, DEFAULT_PORT};

use super::HopChain;

/// Raw-stream target placeholder in embedded sub-invocations
///
/// Each relay level's own templating substitutes the next level's dial
/// target here; this crate always emits the placeholder literally.
pub const STREAM_PLACEHOLDER: &str = "%h:%p";

/// One level of the proxy recursion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyExpression {
    /// Hop reachable from the caller with no proxy
    Direct(Address),
    /// Hop reached through the connection the inner expression describes
    Nested {
        proxy_through: Box<ProxyExpression>,
        hop: Address,
    },
}

impl ProxyExpression {
    /// Number of proxy layers beneath this expression's own hop
    pub fn depth(&self) -> usize {
        match self {
            Self::Direct(_) => 0,
            Self::Nested { proxy_through, .. } => 1 + proxy_through.depth(),
        }
    }

    /// The hop this level connects to
    pub fn hop(&self) -> &Address {
        match self {
            Self::Direct(hop) => hop,
            Self::Nested { hop, .. } => hop,
        }
    }

    /// Render this expression as one complete relay client command line
    ///
    /// Every level is a full invocation of `program`; inner levels are
    /// embedded as a double-quoted proxy argument of the next level out.
    pub fn serialize(&self, program: &str) -> String {
        match self {
            Self::Direct(hop) => format!("{} {}", program, target_fragment(hop)),
            Self::Nested { proxy_through, hop } => format!(
                "{} -o ProxyCommand={} {}",
                program,
                quote(&proxy_through.serialize(program)),
                target_fragment(hop)
            ),
        }
    }
}

/// Nested-proxy view of a hop chain
///
/// `expression` covers the intermediate hops and is `None` for a single-hop
/// chain, where the one hop dials the destination with no proxy at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySpec {
    /// Proxy recursion over the intermediate hops, innermost first-given
    pub expression: Option<ProxyExpression>,
    /// The directly-dialed endpoint, always the last-given hop
    pub final_hop: Address,
    /// Raw-stream target
    pub destination: Address,
}

impl From<&HopChain> for ProxySpec {
    fn from(chain: &HopChain) -> Self {
        let expression = chain.intermediates().split_first().map(|(first, rest)| {
            let mut expr = ProxyExpression::Direct(first.clone());
            for hop in rest {
                expr = ProxyExpression::Nested {
                    proxy_through: Box::new(expr),
                    hop: hop.clone(),
                };
            }
            expr
        });

        Self {
            expression,
            final_hop: chain.final_hop().clone(),
            destination: chain.destination.clone(),
        }
    }
}

impl ProxySpec {
    /// Total proxy levels in the materialized command: N-1 for N hops
    pub fn nesting_levels(&self) -> usize {
        match &self.expression {
            None => 0,
            Some(expr) => 1 + expr.depth(),
        }
    }
}

/// `-W <placeholder> [-P port] [user@]host` tail shared by every level
fn target_fragment(hop: &Address) -> String {
    if hop.port == DEFAULT_PORT {
        format!("-W {} {}", STREAM_PLACEHOLDER, hop.to_target_string())
    } else {
        format!(
            "-W {} -P {} {}",
            STREAM_PLACEHOLDER,
            hop.port,
            hop.to_target_string()
        )
    }
}

/// Make `s` safe to embed as one double-quoted argument one level up
///
/// Backslashes are escaped before quotes so the rules compose across levels.
pub(crate) fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
