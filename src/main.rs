pub mod fib;
pub mod perf;

use perf::{Report, TAG};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const N: i64 = 30;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(n = N, "start");
    let (result, measurement) = perf::measure(|| fib::fibonacci(N));
    let result = result?;
    tracing::debug!(elapsed = ?measurement.elapsed(), result, "finish");
    println!("{}", Report::new(TAG, measurement));
    println!("{result}");
    Ok(())
}
