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

//! Hop chain resolution for proxy-capable relay clients
//!
//! This module turns raw command-line tokens into an ordered hop chain and
//! folds that chain into one of two relay shapes:
//!
//! * **Flat relay** ([`RelaySpec`]): every hop but the last becomes one
//!   comma-joined relay list; the last hop dials the destination directly.
//! * **Nested proxy** ([`ProxySpec`]): every hop but the last becomes one
//!   level of a recursively embedded proxy sub-invocation.
//!
//! Hop order is load-bearing: the first-given hop is the closest to the
//! caller, the last-given hop is the one that dials the destination.

mod flat;
mod nested;
mod resolver;

use crate::addr::Address;

pub use flat::RelaySpec;
pub use nested::{ProxyExpression, ProxySpec, STREAM_PLACEHOLDER};
pub use resolver::resolve;

/// Which relay grammar a binary emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Comma-joined relay list, native multi-hop support in the relay client
    FlatRelay,
    /// One embedded proxy sub-invocation per hop
    NestedProxy,
}

impl Dialect {
    /// Name of the binary that fixes this dialect
    pub fn binary_name(self) -> &'static str {
        match self {
            Dialect::FlatRelay => "sshvia",
            Dialect::NestedProxy => "sshvia-nested",
        }
    }
}

/// The full set of invocation inputs, resolved and validated
///
/// Built once per invocation by [`resolve`] and consumed read-only by the
/// chain builders. `hops` is never empty; the last hop is always the
/// directly-dialed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopChain {
    /// Ordered hops, first-given first; length >= 1
    pub hops: Vec<Address>,
    /// Raw-stream target; `user` is always `None` here
    pub destination: Address,
    /// Print the resolved command instead of running it
    pub debug: bool,
}

impl HopChain {
    /// Assemble a chain from already-validated parts
    ///
    /// [`resolve`] is the canonical constructor and guarantees `hops` is
    /// non-empty; hand-built chains must uphold the same invariant.
    pub fn new(hops: Vec<Address>, destination: Address, debug: bool) -> Self {
        debug_assert!(!hops.is_empty(), "hop chain must contain at least one hop");
        Self {
            hops,
            destination,
            debug,
        }
    }

    /// The hop that dials the destination directly
    pub fn final_hop(&self) -> &Address {
        &self.hops[self.hops.len() - 1]
    }

    /// Every hop except the final one, in original order
    pub fn intermediates(&self) -> &[Address] {
        &self.hops[..self.hops.len() - 1]
    }
}
