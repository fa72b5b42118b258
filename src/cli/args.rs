use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(version, about = "Query and filter cloud fabric resources.", long_about = None)]
pub struct Args {
    /// Resource collection to query; omit for an inventory summary
    pub resource: Option<ResourceKind>,

    /// Filter criteria (repeatable); patterns are unanchored regular expressions
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "NAME=PATTERN[,PATTERN...]"
    )]
    pub filters: Vec<String>,

    /// Include records at these fabric locations
    #[arg(short = 'l', long = "location")]
    pub locations: Option<Vec<String>>,

    /// Include records in these provisioning states
    #[arg(short = 's', long = "state")]
    pub states: Option<Vec<String>>,

    /// Include connections of these types (AWS, AZURE, GOOGLE_CLOUD, SITE_IPSEC_VPN)
    #[arg(short = 't', long = "type")]
    pub connection_types: Option<Vec<String>>,

    /// Include records from these cloud providers
    #[arg(short = 'p', long = "provider")]
    pub providers: Option<Vec<String>>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Save the results to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Include a count summary of the matching records
    #[arg(long)]
    pub summary: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*--------------------------------------------------------------------------------------
  Resource Kind
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ResourceKind {
    Accounts,
    Networks,
    Connections,
    Locations,
    CloudRegions,
    CloudServices,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Ids,
    Names,
}
