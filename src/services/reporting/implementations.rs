// 計測結果報告の具象実装

use crate::core::{BenchResult, BenchmarkSummary, LoopMeasurement, MeasurementReporter};
use std::io::{self, Write};

/// 計測結果を `"<label>: <elapsed> ms"` の1行ずつ書き出す報告実装
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl ConsoleReporter<io::Stdout> {
    /// 標準出力へ書き出す
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MeasurementReporter for ConsoleReporter<W> {
    fn report_measurement(&mut self, measurement: &LoopMeasurement) -> BenchResult<()> {
        writeln!(self.writer, "{measurement}")?;
        Ok(())
    }

    fn report_finished(&mut self, _summary: &BenchmarkSummary) -> BenchResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// 何もしない報告実装（ベンチ用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl MeasurementReporter for NoOpReporter {
    fn report_measurement(&mut self, _measurement: &LoopMeasurement) -> BenchResult<()> {
        Ok(())
    }

    fn report_finished(&mut self, _summary: &BenchmarkSummary) -> BenchResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BenchError, LoopKind};
    use std::time::Duration;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_reporter_writes_one_line_per_measurement() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let measurements = [
            LoopMeasurement::new(LoopKind::DynamicPointer, 1, Duration::from_millis(3)),
            LoopMeasurement::new(LoopKind::DirectType, 1, Duration::from_millis(1)),
            LoopMeasurement::new(LoopKind::IndirectCall, 1, Duration::from_micros(250)),
        ];

        for measurement in &measurements {
            reporter.report_measurement(measurement).unwrap();
        }
        reporter
            .report_finished(&BenchmarkSummary::new(measurements.to_vec()))
            .unwrap();

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            output,
            "Time for Box<dyn Vehicle> calls: 3 ms\n\
             Time for Box<FixedVehicle> calls: 1 ms\n\
             Time for check_engine(&dyn Vehicle) calls: 0.25 ms\n"
        );
    }

    #[test]
    fn test_console_reporter_surfaces_write_errors() {
        let mut reporter = ConsoleReporter::new(FailingWriter);
        let measurement = LoopMeasurement::new(LoopKind::DirectType, 1, Duration::ZERO);

        let error = reporter.report_measurement(&measurement).unwrap_err();
        assert!(matches!(error, BenchError::Output { .. }));
    }

    #[test]
    fn test_noop_reporter() {
        let mut reporter = NoOpReporter::new();
        let measurement = LoopMeasurement::new(LoopKind::DirectType, 1, Duration::ZERO);

        assert!(reporter.report_measurement(&measurement).is_ok());
        assert!(reporter.report_finished(&BenchmarkSummary::default()).is_ok());
    }
}
