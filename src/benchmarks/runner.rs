//! ベンチマークランナー
//!
//! 設定・オブザーバ・報告先をコンストラクタで受け取り、3つのループを順に実行する。
//! 全て静的ディスパッチで注入するため、`NoOpObserver` を使う限り計測ループに余分なコストは乗らない。

use super::dispatch_loops::time_loop;
use crate::core::{
    BenchResult, BenchmarkSummary, LifecycleObserver, LoopKind, LoopMeasurement,
    MeasurementReporter,
};
use crate::services::{BenchmarkConfig, ConsoleReporter, NoOpObserver};
use std::io;

pub struct BenchmarkRunner<O, R>
where
    O: LifecycleObserver,
    R: MeasurementReporter,
{
    config: BenchmarkConfig,
    observer: O,
    reporter: R,
}

impl BenchmarkRunner<NoOpObserver, ConsoleReporter<io::Stdout>> {
    /// デフォルト設定で標準出力へ報告するランナー（バイナリ用）
    pub fn stdout() -> BenchResult<Self> {
        Self::new(
            BenchmarkConfig::default(),
            NoOpObserver::new(),
            ConsoleReporter::stdout(),
        )
    }
}

impl<O, R> BenchmarkRunner<O, R>
where
    O: LifecycleObserver,
    R: MeasurementReporter,
{
    /// 新しいランナーを作成（設定は検証済みであることを保証する）
    pub fn new(config: BenchmarkConfig, observer: O, reporter: R) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            observer,
            reporter,
        })
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// ループを1つ実行して結果を報告
    pub fn run_loop(&mut self, kind: LoopKind) -> BenchResult<LoopMeasurement> {
        let measurement = time_loop(kind, &self.observer, self.config.iterations());
        self.reporter.report_measurement(&measurement)?;
        Ok(measurement)
    }

    /// 全ループを固定順（動的 → 直接 → 関数経由）で実行
    pub fn run_all(&mut self) -> BenchResult<BenchmarkSummary> {
        let mut measurements = Vec::with_capacity(LoopKind::ALL.len());
        for kind in LoopKind::ALL {
            measurements.push(self.run_loop(kind)?);
        }

        let summary = BenchmarkSummary::new(measurements);
        self.reporter.report_finished(&summary)?;
        Ok(summary)
    }
}
