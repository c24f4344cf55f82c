// CLI設定 - JSONファイルからの読み込みとビルダー

use crate::core::OverflowPolicy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 結果の出力形式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// 人間向けテキスト
    #[default]
    Text,
    /// 1行1オブジェクトのJSON
    Json,
}

/// アプリケーション設定
///
/// ファイルでは全フィールドが省略可能。未知のフィールドはエラーになる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdderConfig {
    pub policy: OverflowPolicy,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl AdderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// JSON文字列から設定をデシリアライズ
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid config: {e}"))
    }

    /// 設定をJSONにシリアライズ
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::anyhow!("config serialization failed: {e}"))
    }

    /// 設定ファイルを読み込む
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file does not exist: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;

        log::debug!("loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
