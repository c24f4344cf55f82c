// 2の補数でラップアラウンドする加算器

use crate::core::{AddResult, Adder, Operand, OverflowPolicy};

#[derive(Debug, Default, Clone, Copy)]
pub struct WrappingAdder;

impl WrappingAdder {
    pub fn new() -> Self {
        Self
    }
}

impl Adder for WrappingAdder {
    /// 常に成功する
    fn add(&self, a: Operand, b: Operand) -> AddResult<Operand> {
        Ok(super::wrapping_add(a, b))
    }

    fn policy(&self) -> OverflowPolicy {
        OverflowPolicy::Wrapping
    }
}
