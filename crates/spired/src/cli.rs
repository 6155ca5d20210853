use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// Read the sensor and log what the game loop would see.
    Run {
        /// Settings file (defaults to ~/.config/spire/spire.yaml)
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Override the configured hidraw device
        #[clap(short, long)]
        device: Option<String>,
        /// Read reports as "x y z aux" lines from stdin instead of a device
        #[clap(long = "virtual")]
        virtual_input: bool,
        /// Frame interval in milliseconds
        #[clap(long, default_value_t = 16)]
        frame_ms: u64,
    },
    /// Validate the settings file and print the resolved values.
    Check {
        /// Settings file (defaults to ~/.config/spire/spire.yaml)
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}

/// Tilt sensor bridge for polling game loops.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}
