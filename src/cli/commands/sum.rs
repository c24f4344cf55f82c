use crate::adder::sum_all;
use crate::core::{AddOutcome, Adder, Operand, ResultReporter};
use anyhow::Result;

/// Add two operands and report the outcome
pub fn execute_add<A, R>(adder: &A, reporter: &R, a: Operand, b: Operand) -> Result<AddOutcome>
where
    A: Adder + ?Sized,
    R: ResultReporter + ?Sized,
{
    execute_sum(adder, reporter, &[a, b])
}

/// Sum operands left to right and report the outcome
///
/// オーバーフローは報告済みの `AddError` として返す。
pub fn execute_sum<A, R>(adder: &A, reporter: &R, operands: &[Operand]) -> Result<AddOutcome>
where
    A: Adder + ?Sized,
    R: ResultReporter + ?Sized,
{
    let policy = adder.policy();
    log::debug!("summing {} operands with {policy} policy", operands.len());

    match sum_all(adder, operands) {
        Ok(sum) => {
            let outcome = AddOutcome::new(operands.to_vec(), policy, sum);
            if outcome.wrapped {
                log::debug!("sum of {} wrapped to {sum}", outcome.expression());
            }
            reporter.report_sum(&outcome);
            Ok(outcome)
        }
        Err(error) => {
            reporter.report_overflow(&error, policy);
            Err(error.into())
        }
    }
}
