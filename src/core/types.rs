// 加算に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 加算のオペランド（符号付き32ビット整数）
pub type Operand = i32;

/// オーバーフロー時の振る舞い
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// 範囲外の結果をエラーとして報告
    #[default]
    Checked,
    /// 2の補数でラップアラウンド
    Wrapping,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Wrapping => "wrapping",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 加算1回分の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOutcome {
    pub operands: Vec<Operand>,
    pub policy: OverflowPolicy,
    pub sum: Operand,
    /// 返された和が数学的な和と異なる場合にtrue
    pub wrapped: bool,
}

impl AddOutcome {
    pub fn new(operands: Vec<Operand>, policy: OverflowPolicy, sum: Operand) -> Self {
        let exact: i64 = operands.iter().map(|&value| i64::from(value)).sum();
        Self {
            wrapped: exact != i64::from(sum),
            operands,
            policy,
            sum,
        }
    }

    /// "2 + 3" 形式の式表現
    pub fn expression(&self) -> String {
        if self.operands.is_empty() {
            return "0".to_string();
        }
        self.operands
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
