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

use tracing_subscriber::EnvFilter;

/// Create an environment filter based on the debug flag
pub fn create_env_filter(debug: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        // Use RUST_LOG if set (allows raising dependency log levels too)
        EnvFilter::from_default_env()
    } else if debug {
        EnvFilter::new("sshvia=debug")
    } else {
        EnvFilter::new("sshvia=warn")
    }
}

/// Initialize console logging
///
/// Diagnostics go to stderr only: stdout carries the debug preview, and in
/// the automated proxy-command flow it carries the relayed byte stream.
pub fn init_logging(debug: bool) {
    let filter = create_env_filter(debug);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
