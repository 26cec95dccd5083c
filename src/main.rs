use anyhow::{Context, Result};
use clap::Parser;
use dispatch_bench::{cli::Cli, BenchmarkRunner};

fn main() -> Result<()> {
    Cli::parse();

    let mut runner = BenchmarkRunner::stdout().context("ベンチマークの初期化に失敗しました")?;
    runner.run_all().context("ベンチマークの実行に失敗しました")?;

    Ok(())
}
