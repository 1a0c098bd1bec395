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

//! Environment-based configuration for the relay program

/// Default external relay client
pub const DEFAULT_PROGRAM: &str = "ssh";

/// Environment variable overriding the relay program name
pub const PROGRAM_ENV: &str = "SSHVIA_PROGRAM";

/// Get the relay program to invoke
///
/// Reads from the `SSHVIA_PROGRAM` environment variable, with fallback to
/// the default. A set-but-blank value falls back too.
///
/// # Examples
/// ```bash
/// # Use default (ssh)
/// sshvia -J gw1 target 22
///
/// # Point at another client
/// SSHVIA_PROGRAM=dbclient sshvia -J gw1 target 22
/// ```
pub fn relay_program() -> String {
    match std::env::var(PROGRAM_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            tracing::warn!(
                "{} is set but blank, using default: {}",
                PROGRAM_ENV,
                DEFAULT_PROGRAM
            );
            DEFAULT_PROGRAM.to_string()
        }
        Err(_) => DEFAULT_PROGRAM.to_string(),
    }
}
