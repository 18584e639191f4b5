use std::time::Instant;

use tracing::debug;

/// Runs `f` and logs how long it took.
pub fn measure<T, F>(name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let now = Instant::now();
    let result = f();
    let elapsed = now.elapsed();

    debug!("{} took {}ms", name, elapsed.as_micros() as f64 / 1000.0);

    result
}
