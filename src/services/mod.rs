// サービス層 - ベンチマークを支える設定・監視・報告
// 各サービスはコアのトレイトを実装し、ランナーへ注入される

pub mod config;
pub mod monitoring;
pub mod reporting;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{BenchmarkConfig, ITERATIONS_PER_LOOP};
pub use monitoring::{CountingObserver, LifecycleCounts, NoOpObserver};
pub use reporting::{ConsoleReporter, NoOpReporter};
