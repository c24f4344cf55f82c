// 加算器ファクトリ - 実行時に方針から加算器を選択

use super::{CheckedAdder, WrappingAdder};
use crate::core::{Adder, OverflowPolicy};

/// 方針に対応する加算器を作成
pub fn create_adder(policy: OverflowPolicy) -> Box<dyn Adder> {
    log::debug!("creating adder with {policy} overflow policy");
    match policy {
        OverflowPolicy::Checked => Box::new(CheckedAdder::new()),
        OverflowPolicy::Wrapping => Box::new(WrappingAdder::new()),
    }
}
