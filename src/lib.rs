pub mod addr;
pub mod chain;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod utils;

pub use addr::Address;
pub use chain::{Dialect, HopChain, ProxySpec, RelaySpec};
pub use command::Invocation;
pub use error::Error;
