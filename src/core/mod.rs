// コアレイヤー - 加算の型、トレイト、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod traits;
pub mod types;

// 公開API
pub use error::{AddError, AddResult};
pub use traits::{Adder, MockAdder, MockResultReporter, ResultReporter};
pub use types::{AddOutcome, Operand, OverflowPolicy};
