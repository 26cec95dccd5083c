// ベンチマーク設定の具象実装

use crate::core::{BenchError, BenchResult};

/// 1ループあたりの反復回数
pub const ITERATIONS_PER_LOOP: usize = 1_000_000;

/// ベンチマーク設定
///
/// バイナリは常にデフォルト値で実行する。反復回数の変更はテストとベンチ専用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    iterations: usize,
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// 設定値の検証
    pub fn validate(&self) -> BenchResult<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid_configuration(
                "iterations",
                "反復回数は1以上である必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS_PER_LOOP,
        }
    }
}
