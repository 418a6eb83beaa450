/// Largest `n` whose Fibonacci number fits in `u64`.
pub const MAX_N: u64 = 93;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FibError {
    #[display(fmt = "InvalidArgument: fibonacci of negative n = {n}")]
    InvalidArgument { n: i64 },
    #[display(fmt = "Overflow: fibonacci of n = {n} exceeds u64 (max n = 93)")]
    Overflow { n: i64 },
}

pub fn check_argument(n: i64) -> Result<u64, FibError> {
    let Ok(n_unsigned) = u64::try_from(n) else {
        return Err(FibError::InvalidArgument { n });
    };
    if n_unsigned > MAX_N {
        return Err(FibError::Overflow { n });
    }
    Ok(n_unsigned)
}

/// Computes the `n`th Fibonacci number (fib(0) = 0, fib(1) = 1) by plain double
/// recursion, roughly 2^n calls. Not memoized: the call overhead is what gets
/// measured.
pub fn fibonacci(n: i64) -> Result<u64, FibError> {
    Ok(fib(check_argument(n)?))
}

fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}
