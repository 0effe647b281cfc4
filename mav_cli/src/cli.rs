use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// mav-tf: re-express a multi-joint trajectory reference in another frame.
///
/// Loads a scenario TOML holding a trajectory message and a rigid transform,
/// converts the message, applies the transform to every joint and prints the
/// result.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to load.
    #[arg(short, long)]
    pub scenario: PathBuf,

    /// Print the trajectory as loaded, without applying the scenario transform.
    #[arg(long, default_value_t = false)]
    pub no_transform: bool,

    /// What to print.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The human-readable rendering of every joint.
    Text,
    /// The trajectory converted back into its message form, as TOML.
    Message,
}
