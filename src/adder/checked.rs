// オーバーフローをエラーとして報告する加算器

use crate::core::{AddResult, Adder, Operand, OverflowPolicy};

#[derive(Debug, Default, Clone, Copy)]
pub struct CheckedAdder;

impl CheckedAdder {
    pub fn new() -> Self {
        Self
    }
}

impl Adder for CheckedAdder {
    fn add(&self, a: Operand, b: Operand) -> AddResult<Operand> {
        super::add(a, b)
    }

    fn policy(&self) -> OverflowPolicy {
        OverflowPolicy::Checked
    }
}
