// 結果報告の具象実装

use crate::config::OutputFormat;
use crate::core::{AddError, AddOutcome, OverflowPolicy, ResultReporter};
use serde_json::json;

/// コンソール出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn format_sum(outcome: &AddOutcome) -> String {
        let mut line = format!("{} = {}", outcome.expression(), outcome.sum);
        if outcome.wrapped {
            line.push_str(" (wrapped)");
        }
        line
    }

    pub fn format_overflow(error: &AddError, policy: OverflowPolicy) -> String {
        format!("❌ {error} (policy: {policy})")
    }
}

impl ResultReporter for ConsoleReporter {
    fn report_sum(&self, outcome: &AddOutcome) {
        if !self.quiet {
            println!("{}", Self::format_sum(outcome));
        }
    }

    fn report_overflow(&self, error: &AddError, policy: OverflowPolicy) {
        if !self.quiet {
            eprintln!("{}", Self::format_overflow(error, policy));
        }
    }
}

/// 1行1オブジェクトのJSON出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_sum(outcome: &AddOutcome) -> String {
        serde_json::to_string(outcome).unwrap_or_else(|e| {
            json!({ "error": "serialization", "message": e.to_string() }).to_string()
        })
    }

    pub fn format_overflow(error: &AddError, policy: OverflowPolicy) -> String {
        let (a, b) = error.operands();
        json!({
            "error": "overflow",
            "operands": [a, b],
            "policy": policy,
            "message": error.to_string(),
        })
        .to_string()
    }
}

impl ResultReporter for JsonReporter {
    fn report_sum(&self, outcome: &AddOutcome) {
        println!("{}", Self::format_sum(outcome));
    }

    fn report_overflow(&self, error: &AddError, policy: OverflowPolicy) {
        println!("{}", Self::format_overflow(error, policy));
    }
}

/// 何もしない結果報告実装（quiet・テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ResultReporter for NoOpReporter {
    fn report_sum(&self, _outcome: &AddOutcome) {
        // 何もしない
    }

    fn report_overflow(&self, _error: &AddError, _policy: OverflowPolicy) {
        // 何もしない
    }
}

/// 出力形式に対応する報告実装を作成
pub fn create_reporter(format: OutputFormat, quiet: bool) -> Box<dyn ResultReporter> {
    if quiet {
        return Box::new(NoOpReporter::new());
    }
    match format {
        OutputFormat::Text => Box::new(ConsoleReporter::new()),
        OutputFormat::Json => Box::new(JsonReporter::new()),
    }
}
