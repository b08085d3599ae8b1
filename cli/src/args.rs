use std::path::PathBuf;
use clap::Parser;

/// Integrate the Lorenz system described by a configuration file and
/// write the trajectory to a tabular file.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// path to simulation configuration file
    pub input_file: PathBuf,
    /// path to trajectory output file
    pub output_file: PathBuf,
}
