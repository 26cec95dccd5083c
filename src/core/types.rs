// ベンチマークで共有される型定義

use std::fmt;
use std::time::Duration;

/// 計測する呼び出し形態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    /// `Box<dyn Vehicle>` 経由の動的ディスパッチ
    DynamicPointer,
    /// `Box<FixedVehicle>` に対する直接呼び出し
    DirectType,
    /// `&dyn Vehicle` を受け取る関数を挟んだ呼び出し
    IndirectCall,
}

impl LoopKind {
    /// 実行・出力順
    pub const ALL: [LoopKind; 3] = [
        LoopKind::DynamicPointer,
        LoopKind::DirectType,
        LoopKind::IndirectCall,
    ];

    /// 出力行のラベル
    pub fn label(&self) -> &'static str {
        match self {
            LoopKind::DynamicPointer => "Time for Box<dyn Vehicle> calls",
            LoopKind::DirectType => "Time for Box<FixedVehicle> calls",
            LoopKind::IndirectCall => "Time for check_engine(&dyn Vehicle) calls",
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// ループ1つ分の計測結果
#[derive(Debug, Clone, PartialEq)]
pub struct LoopMeasurement {
    pub kind: LoopKind,
    pub iterations: usize,
    pub elapsed: Duration,
}

impl LoopMeasurement {
    pub fn new(kind: LoopKind, iterations: usize, elapsed: Duration) -> Self {
        Self {
            kind,
            iterations,
            elapsed,
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    /// 経過時間（小数ミリ秒）
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

impl fmt::Display for LoopMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ms", self.label(), self.elapsed_ms())
    }
}

/// 全ループの計測結果（実行順）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkSummary {
    measurements: Vec<LoopMeasurement>,
}

impl BenchmarkSummary {
    pub fn new(measurements: Vec<LoopMeasurement>) -> Self {
        Self { measurements }
    }

    pub fn measurements(&self) -> &[LoopMeasurement] {
        &self.measurements
    }

    pub fn get(&self, kind: LoopKind) -> Option<&LoopMeasurement> {
        self.measurements.iter().find(|m| m.kind == kind)
    }

    pub fn total_iterations(&self) -> usize {
        self.measurements.iter().map(|m| m.iterations).sum()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.measurements.iter().map(|m| m.elapsed).sum()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
