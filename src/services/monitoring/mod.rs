// ライフサイクル監視機能
// 車両インスタンスの生成・呼び出し・破棄の観測

pub mod implementations;

// 公開API
pub use implementations::{CountingObserver, LifecycleCounts, NoOpObserver};
