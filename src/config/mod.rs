pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "data.txt";
pub const DEFAULT_DELIMITER: u8 = b'/';

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "zoo-visit")]
#[command(about = "Find out which zoo animals are awake during your visit")]
pub struct CliConfig {
    /// Animal data file (defaults to data.txt, or the path from --config)
    #[arg(long)]
    pub data_file: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Visit request, e.g. "15 june 9-17". Prompts on stdin when omitted
    #[arg(long)]
    pub request: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    fn delimiter(&self) -> u8 {
        DEFAULT_DELIMITER
    }

    fn has_header(&self) -> bool {
        true
    }
}
