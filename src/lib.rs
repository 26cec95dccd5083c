//! 動的ディスパッチと静的に解決可能な呼び出しの性能比較
//!
//! 封印された `Vehicle` 実装 `FixedVehicle` に対して3種類の呼び出し形態を計測する:
//! - `Box<dyn Vehicle>` 経由の呼び出し
//! - `Box<FixedVehicle>` への直接呼び出し
//! - `check_engine(&dyn Vehicle)` を挟んだ呼び出し

pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod services;
pub mod vehicle;

pub use benchmarks::BenchmarkRunner;
pub use crate::core::{BenchError, BenchResult, BenchmarkSummary, LoopKind, LoopMeasurement};
pub use services::{BenchmarkConfig, CountingObserver, NoOpObserver, ITERATIONS_PER_LOOP};
pub use vehicle::{check_engine, FixedVehicle};
