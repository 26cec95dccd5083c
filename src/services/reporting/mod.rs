// 計測結果の報告機能

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
