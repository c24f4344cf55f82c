//! 符号付き32ビット整数の加算
//!
//! 主要なインターフェース [`add`] はオーバーフローを `AddError::Overflow` として返す。
//! ラップアラウンドが必要な場合は [`wrapping_add`] または [`WrappingAdder`] を明示的に使う。

pub mod checked;
pub mod factory;
pub mod wrapping;

pub use checked::CheckedAdder;
pub use factory::create_adder;
pub use wrapping::WrappingAdder;

use crate::core::{AddError, AddResult, Adder, Operand};

/// 2つの整数を加算する
///
/// * `a` - 1つ目の加数
/// * `b` - 2つ目の加数
///
/// 和が `i32` で表現できない場合は `AddError::Overflow { a, b }` を返す。
pub fn add(a: Operand, b: Operand) -> AddResult<Operand> {
    a.checked_add(b).ok_or(AddError::Overflow { a, b })
}

/// 2の補数のラップアラウンドで加算する
pub fn wrapping_add(a: Operand, b: Operand) -> Operand {
    a.wrapping_add(b)
}

/// 0から左畳み込みで全オペランドを加算
///
/// Checked方針では途中の和がオーバーフローした時点で失敗する。
/// 後続のオペランドで範囲内に戻る場合も同様。
pub fn sum_all<A>(adder: &A, operands: &[Operand]) -> AddResult<Operand>
where
    A: Adder + ?Sized,
{
    operands
        .iter()
        .try_fold(0, |accumulator, &value| adder.add(accumulator, value))
}
