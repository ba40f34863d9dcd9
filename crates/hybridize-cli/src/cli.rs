use clap::{Args, Parser, Subcommand, ValueEnum};
use hybridize::engine::config::AsymmetryPolicy;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hybridize - Import PDB coordinate files with explicit hydrogens into structure-builder source code, inferring each atom's hybridization from its bonds.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a PDB file into Java structure-builder source or a TOML description.
    Convert(ConvertArgs),
    /// Print each atom's element, bond count and hybridization without emitting anything.
    Inspect(InspectArgs),
}

/// What `convert` writes.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// A complete Java class whose constructor builds the structure.
    #[default]
    Java,
    /// Only the `addAtom`/`addBond` statements.
    Statements,
    /// A TOML structure description.
    Toml,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    // --- Core Arguments ---
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the generated file. Writes to standard output when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Output Overrides ---
    /// Output format.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Java package of the generated class.
    #[arg(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Name of the generated class.
    #[arg(long, value_name = "NAME")]
    pub class_name: Option<String>,

    /// Root package of the structure-builder library.
    #[arg(long, value_name = "PACKAGE")]
    pub library_package: Option<String>,

    /// Javadoc text for the generated class.
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Digits after the decimal point for coordinates.
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    // --- Validation Overrides ---
    /// How to handle a bond declared by only one of its atoms: ignore, warn or error.
    #[arg(long, value_name = "POLICY")]
    pub asymmetric_bonds: Option<AsymmetryPolicy>,

    /// Override `validation.require-complete-connectivity` from the config file.
    #[command(flatten)]
    pub connectivity: ConnectivityRequirement,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// A group to handle mutually exclusive flags for the complete-connectivity check.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct ConnectivityRequirement {
    /// Fail when there are fewer CONECT records than atoms.
    #[arg(long)]
    pub require_complete_connectivity: bool,
    /// Treat atoms without a CONECT record as unbonded, even if the config file requires
    /// complete connectivity.
    #[arg(long)]
    pub allow_incomplete_connectivity: bool,
}

impl ConnectivityRequirement {
    /// The requirement set on the command line, if any.
    pub fn requested(self) -> Option<bool> {
        if self.require_complete_connectivity {
            Some(true)
        } else if self.allow_incomplete_connectivity {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}
