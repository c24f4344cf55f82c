// 加算システムのトレイト定義

use super::error::{AddError, AddResult};
use super::types::{AddOutcome, Operand, OverflowPolicy};
use mockall::automock;

/// オーバーフロー方針を固定した加算器の抽象化トレイト
#[automock]
pub trait Adder: Send + Sync {
    /// 2つのオペランドを加算
    fn add(&self, a: Operand, b: Operand) -> AddResult<Operand>;

    /// この加算器のオーバーフロー方針
    fn policy(&self) -> OverflowPolicy;
}

// Adder for Box<dyn Adder>
impl Adder for Box<dyn Adder> {
    fn add(&self, a: Operand, b: Operand) -> AddResult<Operand> {
        self.as_ref().add(a, b)
    }

    fn policy(&self) -> OverflowPolicy {
        self.as_ref().policy()
    }
}

/// 結果報告の抽象化トレイト
#[automock]
pub trait ResultReporter: Send + Sync {
    /// 加算成功時の報告
    fn report_sum(&self, outcome: &AddOutcome);

    /// オーバーフロー発生時の報告
    fn report_overflow(&self, error: &AddError, policy: OverflowPolicy);
}

// ResultReporter for Box<dyn ResultReporter>
impl ResultReporter for Box<dyn ResultReporter> {
    fn report_sum(&self, outcome: &AddOutcome) {
        self.as_ref().report_sum(outcome)
    }

    fn report_overflow(&self, error: &AddError, policy: OverflowPolicy) {
        self.as_ref().report_overflow(error, policy)
    }
}
