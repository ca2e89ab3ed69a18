pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::session::{plan_visit, prompt_request};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{engine::VisitEngine, pipeline::VisitPipeline};
pub use utils::error::{Result, ZooError};
