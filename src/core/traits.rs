// ベンチマークのトレイト定義
// ディスパッチ対象・ライフサイクル監視・結果報告の抽象化

use super::error::BenchResult;
use super::types::{BenchmarkSummary, LoopMeasurement};
use mockall::automock;

pub(crate) mod sealed {
    /// クレート外からの `Vehicle` 実装を禁止するための封印トレイト
    pub trait Sealed {}
}

/// 動的ディスパッチされる基底の能力
///
/// 封印されているため実装はこのクレート内の型に限られる。
/// `Box<dyn Vehicle>` を drop すると具象型の `Drop` が vtable 経由で呼ばれる。
#[cfg_attr(test, automock)]
pub trait Vehicle: sealed::Sealed {
    /// エンジンを動かす（デフォルトは何もしない）
    fn engine(&self) {}
}

#[cfg(test)]
impl sealed::Sealed for MockVehicle {}

/// 車両インスタンスの生成・呼び出し・破棄を観測するトレイト
#[automock]
pub trait LifecycleObserver {
    /// インスタンス生成時に呼ばれる
    fn on_constructed(&self);

    /// `engine()` 呼び出し時に呼ばれる
    fn on_engine(&self);

    /// インスタンス破棄時に呼ばれる
    fn on_destroyed(&self);
}

/// 計測結果の報告を抽象化するトレイト
#[automock]
pub trait MeasurementReporter {
    /// ループ1つ分の計測結果を報告
    fn report_measurement(&mut self, measurement: &LoopMeasurement) -> BenchResult<()>;

    /// 全ループ完了時の報告
    fn report_finished(&mut self, summary: &BenchmarkSummary) -> BenchResult<()>;
}

impl<R: MeasurementReporter + ?Sized> MeasurementReporter for Box<R> {
    fn report_measurement(&mut self, measurement: &LoopMeasurement) -> BenchResult<()> {
        self.as_mut().report_measurement(measurement)
    }

    fn report_finished(&mut self, summary: &BenchmarkSummary) -> BenchResult<()> {
        self.as_mut().report_finished(summary)
    }
}
