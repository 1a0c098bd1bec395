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

//! Exit code behavior of the command-line entry point
//!
//! Validation failures exit 1, debug previews exit 0 without running
//! anything, a missing relay program exits 127, and a relay that runs
//! hands its own exit status back unchanged.

use serial_test::serial;
use sshvia::{cli, Dialect, Error, Invocation};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_no_arguments_is_a_validation_error() {
    assert_eq!(cli::run(Dialect::FlatRelay, &[]), 1);
    assert_eq!(cli::run(Dialect::NestedProxy, &[]), 1);
}

#[test]
fn test_missing_hop_argument_exits_one() {
    assert_eq!(cli::run(Dialect::FlatRelay, &args(&["-J"])), 1);
}

#[test]
fn test_missing_destination_exits_one() {
    assert_eq!(cli::run(Dialect::FlatRelay, &args(&["-J", "gw1"])), 1);
    assert_eq!(cli::run(Dialect::NestedProxy, &args(&["-J", "gw1"])), 1);
}

#[test]
fn test_extra_trailing_token_exits_one() {
    let raw = args(&["-J", "gw1", "host", "22", "surplus"]);
    assert_eq!(cli::run(Dialect::FlatRelay, &raw), 1);
}

#[test]
fn test_malformed_hop_exits_one() {
    let raw = args(&["-J", "gw1:furniture", "host", "22"]);
    assert_eq!(cli::run(Dialect::NestedProxy, &raw), 1);
}

#[test]
#[serial]
fn test_debug_preview_exits_zero_without_spawning() {
    // A program that cannot exist proves nothing is looked up or run on
    // the preview path.
    std::env::set_var("SSHVIA_PROGRAM", "sshvia-test-no-such-program");

    let raw = args(&["--debug", "-J", "u@gw1", "10.0.0.5", "2222"]);
    assert_eq!(cli::run(Dialect::FlatRelay, &raw), 0);
    assert_eq!(cli::run(Dialect::NestedProxy, &raw), 0);

    std::env::remove_var("SSHVIA_PROGRAM");
}

#[test]
#[serial]
fn test_missing_relay_program_exits_127() {
    std::env::set_var("SSHVIA_PROGRAM", "sshvia-test-no-such-program");

    let raw = args(&["-J", "gw1", "host", "22"]);
    assert_eq!(cli::run(Dialect::FlatRelay, &raw), 127);

    std::env::remove_var("SSHVIA_PROGRAM");
}

#[test]
#[serial]
fn test_relay_exit_status_is_propagated() {
    // `true` and `false` ignore the relay arguments and exit 0 and 1.
    let raw = args(&["-J", "gw1", "host", "22"]);

    std::env::set_var("SSHVIA_PROGRAM", "true");
    assert_eq!(cli::run(Dialect::FlatRelay, &raw), 0);

    std::env::set_var("SSHVIA_PROGRAM", "false");
    assert_eq!(cli::run(Dialect::FlatRelay, &raw), 1);

    std::env::remove_var("SSHVIA_PROGRAM");
}

#[test]
fn test_invoke_reports_typed_errors() {
    let ok = Invocation {
        program: "true".to_string(),
        args: Vec::new(),
    };
    assert_eq!(ok.invoke(), Ok(()));

    let failed = Invocation {
        program: "false".to_string(),
        args: Vec::new(),
    };
    assert_eq!(
        failed.invoke(),
        Err(Error::ExternalProgramFailed {
            program: "false".to_string(),
            code: 1,
        })
    );

    let missing = Invocation {
        program: "sshvia-test-no-such-program".to_string(),
        args: Vec::new(),
    };
    assert_eq!(
        missing.invoke(),
        Err(Error::ExternalProgramNotFound {
            program: "sshvia-test-no-such-program".to_string(),
        })
    );
}

#[test]
fn test_usage_names_the_invoked_binary() {
    assert!(cli::usage(Dialect::FlatRelay).starts_with("usage: sshvia "));
    assert!(cli::usage(Dialect::NestedProxy).starts_with("usage: sshvia-nested "));
}
