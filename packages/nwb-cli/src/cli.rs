use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lab2nwb",
    version,
    about = "Convert lab electrophysiology recordings to NWB",
    long_about = "Convert lab-specific electrophysiology sessions (Intan RHD recordings\n\
                  plus YAML session metadata) into a single NWB container file.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a recording session to an NWB container file
    Convert(ConvertArgs),
    /// Check the metadata file and source paths without converting
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Output NWB file to be created
    pub output_file: String,

    /// Path to the metadata YAML file
    pub metafile: String,

    /// Directory containing the .rhd recording files
    #[arg(long = "dir_ecephys_rhd")]
    pub dir_ecephys_rhd: Option<String>,

    /// Path to the electrodes info file
    #[arg(long = "file_electrodes")]
    pub file_electrodes: Option<String>,

    /// Add the ecephys recording data to the NWB file
    #[arg(long = "add_rhd", default_value_t = false)]
    pub add_rhd: bool,

    /// Print the conversion report as JSON instead of the size summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the metadata YAML file
    pub metafile: String,

    /// Directory containing the .rhd recording files
    #[arg(long = "dir_ecephys_rhd")]
    pub dir_ecephys_rhd: Option<String>,

    /// Path to the electrodes info file
    #[arg(long = "file_electrodes")]
    pub file_electrodes: Option<String>,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
