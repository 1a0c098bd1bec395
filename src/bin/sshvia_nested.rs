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

//! Nested-proxy dialect binary
//!
//! Emits one embedded proxy sub-invocation per hop, for clients without
//! native multi-hop support. Also accepts the single `host[:port]`
//! destination token form for manual invocation.

use sshvia::chain::Dialect;
use sshvia::cli;
use sshvia::utils::init_logging;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // The debug flag raises log verbosity, so detect it before resolving.
    let debug = args.iter().any(|arg| arg == "--debug");
    init_logging(debug);

    std::process::exit(cli::run(Dialect::NestedProxy, &args));
}
