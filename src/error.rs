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

//! Error types for chain resolution and relay invocation

use thiserror::Error;

/// Errors that can occur while resolving a hop chain or invoking the relay program
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A hop or destination token that does not parse as `[user@]host[:port]`
    #[error("malformed address '{token}': {reason}")]
    MalformedAddress { token: String, reason: String },

    /// A hop flag at the end of the argument list (e.g., `-J` with nothing after it)
    #[error("option '{flag}' requires a host argument")]
    MissingHopArgument { flag: String },

    /// No hop flags at all
    #[error("no jump hosts given")]
    NoHopsProvided,

    /// Fewer than two trailing destination tokens
    #[error("missing destination host and port")]
    MissingDestination,

    /// More than two trailing destination tokens
    #[error("unexpected argument '{token}'")]
    UnexpectedArgument { token: String },

    /// Relay binary absent from the resolution path
    #[error("relay program '{program}' not found in PATH")]
    ExternalProgramNotFound { program: String },

    /// Non-zero exit from the relay program; carries the code to propagate
    #[error("relay program '{program}' exited with status {code}")]
    ExternalProgramFailed { program: String, code: i32 },
}
