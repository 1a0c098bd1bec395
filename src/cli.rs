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

//! Shared entry-point flow for both dialect binaries
//!
//! Resolution, materialization, the debug short-circuit, and error
//! reporting live here; each binary only fixes its [`Dialect`] and exits
//! with the returned code.

use tracing::info;

use crate::chain::{self, Dialect};
use crate::command::Invocation;
use crate::error::Error;

/// Resolve the arguments, then preview or invoke the relay program
///
/// Returns the process exit code: 0 for success and for the `--debug`
/// preview, 1 for validation failures (reported to stderr with the usage
/// text), 127 when the relay program is missing from PATH, and otherwise
/// the relay program's own exit code unchanged.
pub fn run(dialect: Dialect, args: &[String]) -> i32 {
    let chain = match chain::resolve(dialect, args) {
        Ok(chain) => chain,
        Err(err) => return report_validation_error(dialect, &err),
    };

    info!(
        "relay chain: {} -> {}:{}",
        chain
            .hops
            .iter()
            .map(|hop| hop.to_string())
            .collect::<Vec<_>>()
            .join(" -> "),
        chain.destination.host,
        chain.destination.port
    );

    let invocation = Invocation::from_chain(dialect, &chain);

    if chain.debug {
        println!("{}", invocation.preview());
        return 0;
    }

    match invocation.invoke() {
        Ok(()) => 0,
        // The relay's own failure passes through silently; its stderr
        // already told the user what went wrong.
        Err(Error::ExternalProgramFailed { code, .. }) => code,
        Err(err @ Error::ExternalProgramNotFound { .. }) => {
            eprintln!("Error: {err}");
            127
        }
        Err(err) => report_validation_error(dialect, &err),
    }
}

/// Show the usage line for the dialect's binary
pub fn usage(dialect: Dialect) -> String {
    format!(
        "usage: {} [--debug] -J [user@]host[:port] [-J ...] destination_host destination_port\n",
        dialect.binary_name()
    )
}

fn report_validation_error(dialect: Dialect, err: &Error) -> i32 {
    eprintln!("Error: {err}");
    eprint!("{}", usage(dialect));
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_names_the_dialect_binary() {
        assert!(usage(Dialect::FlatRelay).starts_with("usage: sshvia "));
        assert!(usage(Dialect::NestedProxy).starts_with("usage: sshvia-nested "));
    }

    #[test]
    fn test_usage_mentions_the_grammar() {
        let text = usage(Dialect::FlatRelay);
        assert!(text.contains("-J"));
        assert!(text.contains("--debug"));
        assert!(text.contains("destination_host"));
        assert!(text.ends_with('\n'));
    }
}
