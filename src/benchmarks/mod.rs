//! ディスパッチ形態ごとの計測ループとランナー
//!
//! 動的ディスパッチと静的に解決可能な呼び出しの性能比較を提供

pub mod dispatch_loops;
pub mod runner;

pub use dispatch_loops::{direct_type_loop, dynamic_pointer_loop, indirect_call_loop, time_loop};
pub use runner::BenchmarkRunner;
