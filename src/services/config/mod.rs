// ベンチマーク設定

pub mod implementations;

// 公開API
pub use implementations::{BenchmarkConfig, ITERATIONS_PER_LOOP};
