//! sqlog CLI - format and replay SQL query log lines
//!
//! # Commands
//!
//! - `sqlog format <SQL> [ARGS]...` - Format one query event
//! - `sqlog replay <FILE>` - Log every event in a JSON-lines file (`-` for stdin)
//!
//! # Configuration
//!
//! An optional `sqlog.toml` in the working directory (or `--config PATH`)
//! selects the sink:
//!
//! ```toml
//! [log]
//! color = "never"
//!
//! [log.sink]
//! kind = "file"
//! path = "./queries.log"
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod literal;
pub mod output;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
