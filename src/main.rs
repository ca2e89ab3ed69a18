use clap::Parser;
use std::io;
use zoo_visit::utils::{logger, validation::Validate};
use zoo_visit::{plan_visit, prompt_request};
use zoo_visit::{CliConfig, LocalStorage, TomlConfig, VisitPipeline};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (選用)
    let toml_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(toml_config) => Some(toml_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    if let Some(toml_config) = &toml_config {
        if let Err(e) = toml_config.validate() {
            eprintln!("❌ Configuration validation failed: {}", e);
            std::process::exit(1);
        }
    }

    logger::init_cli_logger(
        config.verbose,
        toml_config.as_ref().and_then(|c| c.log_level()),
    );
    tracing::debug!("CLI config: {:?}", config);

    let input = match &config.request {
        Some(request) => request.clone(),
        None => prompt_request(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let storage = LocalStorage::default();
    let mut stdout = io::stdout().lock();

    match toml_config {
        Some(mut toml_config) => {
            if let Some(path) = config.data_file.clone() {
                toml_config.override_data_file(path);
            }
            plan_visit(VisitPipeline::new(storage, toml_config), &input, &mut stdout)?;
        }
        None => plan_visit(VisitPipeline::new(storage, config), &input, &mut stdout)?,
    }

    Ok(())
}
