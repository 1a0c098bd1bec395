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

//! Flat-relay chain shape

use crate::addr::Address;

use super::HopChain;

/// Flat-relay view of a hop chain
///
/// The relay client handles multi-hop relaying natively, so this shape is
/// just a split: everything before the last hop rides in one ordered relay
/// list, the last hop dials the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySpec {
    /// All hops except the last, in original order (first-listed is
    /// contacted first from the caller)
    pub intermediate: Vec<Address>,
    /// The directly-dialed endpoint
    pub final_hop: Address,
    /// Raw-stream target
    pub destination: Address,
}

impl From<&HopChain> for RelaySpec {
    fn from(chain: &HopChain) -> Self {
        Self {
            intermediate: chain.intermediates().to_vec(),
            final_hop: chain.final_hop().clone(),
            destination: chain.destination.clone(),
        }
    }
}

impl RelaySpec {
    /// Comma-joined relay list, `None` when the chain has a single hop
    pub fn relay_list(&self) -> Option<String> {
        if self.intermediate.is_empty() {
            return None;
        }
        Some(
            self.intermediate
                .iter()
                .map(|hop| hop.to_connection_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}
