pub mod sum;

pub use sum::*;

use super::args::{Cli, Commands};
use crate::adder::create_adder;
use crate::config::AdderConfig;
use crate::reporting::create_reporter;
use anyhow::Result;
use std::path::Path;

/// 設定ファイルを読み込む（未指定ならデフォルト）
pub fn load_config(path: Option<&Path>) -> Result<AdderConfig> {
    match path {
        Some(path) => AdderConfig::load(path),
        None => Ok(AdderConfig::default()),
    }
}

/// Run the parsed command line
pub fn dispatch(cli: Cli) -> Result<()> {
    let file_config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Add { a, b, options } => {
            let config = options.apply(file_config);
            let adder = create_adder(config.policy);
            let reporter = create_reporter(config.format, config.quiet);
            execute_add(&adder, &reporter, a, b)?;
        }
        Commands::Sum { operands, options } => {
            let config = options.apply(file_config);
            let adder = create_adder(config.policy);
            let reporter = create_reporter(config.format, config.quiet);
            execute_sum(&adder, &reporter, &operands)?;
        }
    }

    Ok(())
}
