use crate::config::{AdderConfig, OutputFormat};
use crate::core::{Operand, OverflowPolicy};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adder")]
#[command(about = "Add signed 32-bit integers with an explicit overflow policy")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add two integers
    Add {
        /// First addend
        #[arg(allow_negative_numbers = true)]
        a: Operand,

        /// Second addend
        #[arg(allow_negative_numbers = true)]
        b: Operand,

        #[command(flatten)]
        options: OutputOptions,
    },

    /// Sum integers from left to right, starting at zero
    Sum {
        /// Operands to add
        #[arg(required = true, allow_negative_numbers = true)]
        operands: Vec<Operand>,

        #[command(flatten)]
        options: OutputOptions,
    },
}

/// 設定ファイルより優先されるフラグ
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Overflow policy (overrides the config file)
    #[arg(short, long, value_enum)]
    pub policy: Option<OverflowPolicy>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print nothing; report only through the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

impl OutputOptions {
    /// フラグ > 設定ファイル > デフォルト の順で設定を合成
    pub fn apply(&self, mut config: AdderConfig) -> AdderConfig {
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.quiet {
            config.quiet = true;
        }
        config
    }
}
