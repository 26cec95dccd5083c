use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dispatch_bench")]
#[command(about = "Times dynamic dispatch against statically resolvable calls")]
#[command(
    long_about = "Times three call shapes against a sealed Vehicle implementation \
(1,000,000 heap allocations each) and prints the elapsed milliseconds per shape.\n\n\
Build with `--profile release-lto` to compare with whole-program optimization enabled."
)]
#[command(version)]
pub struct Cli {}
