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

//! Command materialization and relay program invocation
//!
//! The only side effects in the crate live here: everything upstream builds
//! plain data, this module turns it into an argument vector and either
//! previews it or hands the process over to the relay client.

use std::process::Command;

use tracing::debug;
use which::which;

use crate::addr::{Address, DEFAULT_PORT};
use crate::chain::{Dialect, HopChain, ProxySpec, RelaySpec};
use crate::config;
use crate::error::Error;

/// A materialized relay client invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Relay client name or path
    pub program: String,
    /// Argument vector, one element per word
    pub args: Vec<String>,
}

impl Invocation {
    /// Materialize a chain with an explicit relay program
    pub fn with_program(program: impl Into<String>, dialect: Dialect, chain: &HopChain) -> Self {
        let program = program.into();
        let args = match dialect {
            Dialect::FlatRelay => flat_args(&RelaySpec::from(chain)),
            Dialect::NestedProxy => nested_args(&ProxySpec::from(chain), &program),
        };
        Self { program, args }
    }

    /// Materialize a chain with the configured relay program
    pub fn from_chain(dialect: Dialect, chain: &HopChain) -> Self {
        Self::with_program(config::relay_program(), dialect, chain)
    }

    /// One shell-safe line, as `--debug` prints it
    pub fn preview(&self) -> String {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(words)
            .unwrap_or_else(|_| format!("{} {}", self.program, self.args.join(" ")))
    }

    /// Run the relay program and wait for it
    ///
    /// The program is resolved on PATH first so nothing is spawned when it
    /// is absent. Stdio is inherited, so the relay's stream and messages
    /// pass through untouched. Returns `Ok` only on a clean zero exit;
    /// any other exit becomes [`Error::ExternalProgramFailed`] carrying the
    /// code to propagate.
    pub fn invoke(&self) -> Result<(), Error> {
        which(&self.program).map_err(|_| Error::ExternalProgramNotFound {
            program: self.program.clone(),
        })?;

        debug!("invoking: {}", self.preview());

        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|err| {
                if err.kind() == std::io::ErrorKind::NotFound {
                    Error::ExternalProgramNotFound {
                        program: self.program.clone(),
                    }
                } else {
                    // Resolved on PATH but failed to start; 126 is the shell
                    // convention for found-but-not-runnable.
                    Error::ExternalProgramFailed {
                        program: self.program.clone(),
                        code: 126,
                    }
                }
            })?;

        match exit_code(status) {
            0 => Ok(()),
            code => Err(Error::ExternalProgramFailed {
                program: self.program.clone(),
                code,
            }),
        }
    }
}

/// `[-J list] -W host:port [-P port] [user@]host`
fn flat_args(spec: &RelaySpec) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(relays) = spec.relay_list() {
        args.push("-J".to_string());
        args.push(relays);
    }
    push_stream_target(&mut args, &spec.destination);
    push_dial_target(&mut args, &spec.final_hop);
    args
}

/// `[-o ProxyCommand=...] -W host:port [-P port] [user@]host`
fn nested_args(spec: &ProxySpec, program: &str) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(expr) = &spec.expression {
        args.push("-o".to_string());
        args.push(format!("ProxyCommand={}", expr.serialize(program)));
    }
    push_stream_target(&mut args, &spec.destination);
    push_dial_target(&mut args, &spec.final_hop);
    args
}

/// Raw-stream target; the port is always explicit here, default or not
fn push_stream_target(args: &mut Vec<String>, destination: &Address) {
    args.push("-W".to_string());
    args.push(format!("{}:{}", destination.host, destination.port));
}

/// Directly-dialed endpoint; the port travels as `-P` and is elided at 22
fn push_dial_target(args: &mut Vec<String>, hop: &Address) {
    if hop.port != DEFAULT_PORT {
        args.push("-P".to_string());
        args.push(hop.port.to_string());
    }
    args.push(hop.to_target_string());
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
