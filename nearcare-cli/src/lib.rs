//! Command-line interface for finding the nearest hospitals.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod nearby;

pub use error::CliError;

use nearby::{NearbyArgs, run_nearby};

pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_HOSPITALS: &str = "hospitals";
pub(crate) const ARG_GEOCODE: &str = "geocode";
pub(crate) const ARG_NOMINATIM_BASE_URL: &str = "nominatim-base-url";
pub(crate) const ENV_LATITUDE: &str = "NEARCARE_CMDS_NEARBY_LATITUDE";
pub(crate) const ENV_LONGITUDE: &str = "NEARCARE_CMDS_NEARBY_LONGITUDE";

/// Run the nearcare CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// hospital directory cannot be read, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Nearby(args) => run_nearby(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearcare",
    about = "Find the hospitals closest to a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the nearest hospitals as JSON.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;
