pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "pattern-catalog")]
#[command(about = "Runs a catalogue of classic design-pattern examples")]
pub struct CliConfig {
    /// Run only these examples (comma-separated, see --list)
    #[arg(short, long = "example", value_delimiter = ',')]
    pub examples: Vec<String>,

    /// Skip these examples (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// List the available examples and exit
    #[arg(long)]
    pub list: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for the random sequence example
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the "--- Example of" headers
    #[arg(long)]
    pub no_headers: bool,

    /// Print a JSON execution summary after the run
    #[arg(long)]
    pub summary: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage around the run")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn selected_examples(&self) -> &[String] {
        &self.examples
    }

    fn skipped_examples(&self) -> &[String] {
        &self.skip
    }

    fn random_seed(&self) -> Option<u64> {
        self.seed
    }

    fn show_headers(&self) -> bool {
        !self.no_headers
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}
