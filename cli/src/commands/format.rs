//! Format command implementation
//!
//! Formats a single query event given on the command line.

use sqlog_core::{Clock, LogValue, QueryLogger};

use crate::error::CliError;
use crate::literal::parse_arg;

/// Run the format command
pub fn run<C: Clock + Clone>(
    logger: &QueryLogger<C>,
    sql: &str,
    args: &[String],
    elapsed_ms: f64,
) -> Result<(), CliError> {
    let values = args
        .iter()
        .map(|literal| parse_arg(literal))
        .collect::<Result<Vec<LogValue<'static>>, _>>()?;

    let (logger, start) = super::logger_for(logger, elapsed_ms);
    logger.log(start, sql, &values);
    Ok(())
}
