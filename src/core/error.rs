// 加算のエラー型定義

use super::types::Operand;
use thiserror::Error;

/// 加算で発生しうる唯一のエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddError {
    #[error("arithmetic overflow: {a} + {b} is outside the i32 range")]
    Overflow { a: Operand, b: Operand },
}

impl AddError {
    /// オーバーフローエラーの作成
    pub fn overflow(a: Operand, b: Operand) -> Self {
        Self::Overflow { a, b }
    }

    /// エラーの原因となったオペランドを取得
    pub fn operands(&self) -> (Operand, Operand) {
        match *self {
            Self::Overflow { a, b } => (a, b),
        }
    }
}

/// 加算結果の型エイリアス
pub type AddResult<T> = Result<T, AddError>;
